//! Output formatting for a finished run.
//!
//! - [`text`]: the two human-readable verdict lines and per-source error lines
//! - [`json`]: a machine-readable report of the whole run

pub mod json;
pub mod text;
