//! Generic HTML headline source.
//!
//! Every default site is served by the same adapter: GET one page, then pick
//! out elements by tag name, optionally narrowed to those carrying a given
//! class. The site-specific part lives entirely in [`SourceConfig`].

use super::HeadlineSource;
use crate::config::{Config, SourceConfig};
use crate::error::{FetchCause, FetchError};
use crate::utils::{normalize_whitespace, truncate_for_log};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Which elements count as headlines on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRule {
    pub tag: String,
    pub class_filter: Option<String>,
}

impl SelectionRule {
    pub fn new(tag: &str, class_filter: Option<&str>) -> Self {
        Self {
            tag: tag.to_string(),
            class_filter: class_filter.map(str::to_string),
        }
    }

    fn selector(&self) -> Result<Selector, FetchCause> {
        if !is_element_name(&self.tag) {
            return Err(FetchCause::InvalidRule(format!(
                "`{}` is not a bare element name",
                self.tag
            )));
        }
        Selector::parse(&self.tag)
            .map_err(|e| FetchCause::InvalidRule(format!("tag `{}`: {}", self.tag, e)))
    }

    fn keeps(&self, element: &scraper::ElementRef<'_>) -> bool {
        match &self.class_filter {
            Some(class) => element.value().classes().any(|c| c == class),
            None => true,
        }
    }
}

/// True for a plain HTML element name such as `h3` or `my-widget`.
///
/// Combinators, classes, and attribute filters are rejected; narrowing by
/// class goes through `class_filter` instead.
pub fn is_element_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Extract the text of every element matching `rule`, in document order.
///
/// Text is whitespace-normalized and elements with no text are dropped.
/// Duplicates are kept.
pub fn extract_headlines(html: &str, rule: &SelectionRule) -> Result<Vec<String>, FetchCause> {
    let selector = rule.selector()?;
    let document = Html::parse_document(html);

    let headlines = document
        .select(&selector)
        .filter(|element| rule.keeps(element))
        .map(|element| normalize_whitespace(&element.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect();
    Ok(headlines)
}

/// Build the HTTP client shared by all sources in a run.
pub fn build_client(config: &Config) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
}

/// A news page scraped over HTTP.
#[derive(Debug, Clone)]
pub struct HtmlSource {
    name: String,
    url: String,
    rule: SelectionRule,
    client: Client,
}

impl HtmlSource {
    pub fn new(source: &SourceConfig, client: Client) -> Self {
        Self {
            name: source.name.clone(),
            url: source.url.clone(),
            rule: SelectionRule::new(&source.tag, source.class_filter.as_deref()),
            client,
        }
    }

    /// One source per configured site, all sharing a single client.
    pub fn from_config(config: &Config) -> reqwest::Result<Vec<HtmlSource>> {
        let client = build_client(config)?;
        Ok(config
            .sources
            .iter()
            .map(|source| HtmlSource::new(source, client.clone()))
            .collect())
    }
}

impl HeadlineSource for HtmlSource {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(level = "info", skip_all, fields(source = %self.name, url = %self.url))]
    async fn fetch(&self) -> Result<Vec<String>, FetchError> {
        let fail = |cause: FetchCause| FetchError::new(&self.name, cause);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| fail(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fail(FetchCause::Status(status.as_u16())));
        }

        let body = response.text().await.map_err(|e| fail(e.into()))?;
        debug!(bytes = body.len(), "Downloaded page");

        let headlines = extract_headlines(&body, &self.rule).map_err(fail)?;
        info!(count = headlines.len(), "Extracted headlines");
        if let Some(first) = headlines.first() {
            debug!(first = %truncate_for_log(first, 120), "First headline");
        }
        Ok(headlines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::testing::{local_client as client, refused_url, serve_once};

    const PAGE: &str = r#"
        <html><body>
          <h3 class="story-title">  Stocks rally
              on earnings </h3>
          <h3>Bitcoin slides</h3>
          <h2 class="story-title">Not a headline tag</h2>
          <h3 class="promo story-title big">Shares of Acme jump</h3>
          <h3 class="story-title">   </h3>
        </body></html>
    "#;

    #[test]
    fn test_extract_by_tag_in_document_order() {
        let rule = SelectionRule::new("h3", None);
        let headlines = extract_headlines(PAGE, &rule).unwrap();
        assert_eq!(
            headlines,
            vec!["Stocks rally on earnings", "Bitcoin slides", "Shares of Acme jump"]
        );
    }

    #[test]
    fn test_extract_with_class_filter() {
        let rule = SelectionRule::new("h3", Some("story-title"));
        let headlines = extract_headlines(PAGE, &rule).unwrap();
        assert_eq!(headlines, vec!["Stocks rally on earnings", "Shares of Acme jump"]);
    }

    #[test]
    fn test_extract_joins_nested_text() {
        let html = "<h3><a href='/x'>Ether <b>breaks</b> out</a></h3>";
        let rule = SelectionRule::new("h3", None);
        assert_eq!(extract_headlines(html, &rule).unwrap(), vec!["Ether breaks out"]);
    }

    #[test]
    fn test_extract_no_matches_is_empty() {
        let rule = SelectionRule::new("h4", None);
        assert!(extract_headlines(PAGE, &rule).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_tag_is_rule_error() {
        let rule = SelectionRule::new("h3[", None);
        assert!(matches!(
            extract_headlines(PAGE, &rule),
            Err(FetchCause::InvalidRule(_))
        ));
    }

    #[test]
    fn test_tag_must_be_bare_element_name() {
        assert!(is_element_name("h3"));
        assert!(is_element_name("news-card"));
        for tag in ["div > h3", "h3.story-title", "h3[data-x]", "*", "3h", ""] {
            assert!(!is_element_name(tag), "{tag:?} should be rejected");
            assert!(matches!(
                extract_headlines(PAGE, &SelectionRule::new(tag, None)),
                Err(FetchCause::InvalidRule(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_fetch_extracts_from_live_page() {
        let url = serve_once("200 OK", PAGE).await;
        let source = HtmlSource::new(
            &SourceConfig::new("Local", &url, "h3", Some("story-title")),
            client(),
        );
        let headlines = source.fetch().await.unwrap();
        assert_eq!(headlines, vec!["Stocks rally on earnings", "Shares of Acme jump"]);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_fails() {
        let url = serve_once("503 Service Unavailable", "down").await;
        let source = HtmlSource::new(&SourceConfig::new("Flaky", &url, "h3", None), client());
        let err = source.fetch().await.unwrap_err();
        assert_eq!(err.source_name, "Flaky");
        assert!(matches!(err.cause, FetchCause::Status(503)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_fails() {
        let source = HtmlSource::new(
            &SourceConfig::new("Offline", &refused_url(), "h3", None),
            client(),
        );
        let err = source.fetch().await.unwrap_err();
        assert_eq!(err.source_name, "Offline");
        assert!(matches!(err.cause, FetchCause::Request(_)));
    }

    #[test]
    fn test_from_config_builds_one_source_per_site() {
        let config = Config::default();
        let sources = HtmlSource::from_config(&config).unwrap();
        let names: Vec<&str> = sources.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["Yahoo Finance", "Reuters", "Bloomberg", "DailyFX", "CoinDesk", "WSJ"]
        );
        assert_eq!(sources[1].url, "https://www.reuters.com/finance");
        assert_eq!(sources[1].rule, SelectionRule::new("h3", Some("story-title")));
    }
}
