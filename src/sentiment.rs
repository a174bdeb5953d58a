//! Headline sentiment: VADER scoring, aggregation, and the market call.
//!
//! Scoring uses the VADER (Valence Aware Dictionary and sEntiment Reasoner)
//! lexicon, which handles negation, intensifiers, capitalization, and
//! punctuation. Each headline is scored on its own.
//!
//! Aggregation buckets each score by its compound value:
//!
//! | Compound | Class |
//! |----------|-------|
//! | `> positive_cutoff` | positive |
//! | `< negative_cutoff` | negative |
//! | otherwise (cutoffs inclusive) | neutral |

use crate::config::Thresholds;
use crate::models::{MarketLabel, MarketVerdict, PolarityScore, SentimentBreakdown};
use once_cell::sync::Lazy;
use tracing::{debug, info, instrument};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Process-wide analyzer; the lexicon is parsed on first access only.
static ANALYZER: Lazy<SentimentIntensityAnalyzer<'static>> =
    Lazy::new(SentimentIntensityAnalyzer::new);

/// Handle to the shared VADER analyzer.
#[derive(Clone, Copy)]
pub struct SentimentScorer {
    analyzer: &'static SentimentIntensityAnalyzer<'static>,
}

impl std::fmt::Debug for SentimentScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentScorer").finish_non_exhaustive()
    }
}

impl SentimentScorer {
    /// Load the lexicon (once per process) and return a scorer.
    ///
    /// Call this at start-up so a broken lexicon fails before any network work.
    pub fn load() -> Self {
        let analyzer = Lazy::force(&ANALYZER);
        info!("Sentiment lexicon loaded");
        Self { analyzer }
    }

    /// Score one headline.
    ///
    /// A headline whose words carry no valence scores a compound of exactly 0,
    /// whatever trailing `!` or `?` it has. The punctuation amplifier only
    /// pushes an already non-zero sum further from zero.
    pub fn score(&self, text: &str) -> PolarityScore {
        let mut score = self.raw_score(text);
        if score.compound != 0.0 && text.contains(['!', '?']) {
            let unamplified = if score.positive == 0.0 && score.negative == 0.0 {
                0.0
            } else {
                self.raw_score(&text.replace(['!', '?'], "")).compound
            };
            if unamplified == 0.0 {
                debug!(text, compound = score.compound, "Dropped amplifier on zero valence");
                score.compound = 0.0;
            }
        }
        score
    }

    fn raw_score(&self, text: &str) -> PolarityScore {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        PolarityScore {
            negative: get("neg"),
            neutral: get("neu"),
            positive: get("pos"),
            compound: get("compound").clamp(-1.0, 1.0),
        }
    }

    /// Score each headline, preserving order.
    #[instrument(level = "debug", skip_all, fields(headlines = headlines.len()))]
    pub fn score_all(&self, headlines: &[String]) -> Vec<PolarityScore> {
        headlines.iter().map(|h| self.score(h)).collect()
    }
}

/// Reduce scores to positive/neutral/negative percentages.
///
/// An empty slice yields all zeros rather than NaN.
pub fn aggregate(scores: &[PolarityScore], thresholds: &Thresholds) -> SentimentBreakdown {
    let total = scores.len();
    if total == 0 {
        return SentimentBreakdown::default();
    }

    let (mut positive, mut negative) = (0usize, 0usize);
    for score in scores {
        if score.compound > thresholds.positive_cutoff {
            positive += 1;
        } else if score.compound < thresholds.negative_cutoff {
            negative += 1;
        }
    }
    let neutral = total - positive - negative;

    let pct = |count: usize| count as f64 / total as f64 * 100.0;
    let breakdown = SentimentBreakdown {
        positive_pct: pct(positive),
        neutral_pct: pct(neutral),
        negative_pct: pct(negative),
    };
    debug!(total, positive, neutral, negative, "Aggregated sentiment");
    breakdown
}

/// Pick the market label. First matching rule wins:
/// 1. positive strictly above both others: Bullish
/// 2. negative strictly above both others: Bearish
/// 3. anything else, including ties: Neutral
pub fn classify_market(breakdown: &SentimentBreakdown) -> MarketVerdict {
    let SentimentBreakdown {
        positive_pct: pos,
        neutral_pct: neu,
        negative_pct: neg,
    } = *breakdown;

    if pos > neu && pos > neg {
        MarketVerdict {
            label: MarketLabel::Bullish,
            pct: pos,
        }
    } else if neg > pos && neg > neu {
        MarketVerdict {
            label: MarketLabel::Bearish,
            pct: neg,
        }
    } else {
        MarketVerdict {
            label: MarketLabel::Neutral,
            pct: neu,
        }
    }
}
