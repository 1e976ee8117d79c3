//! # MMZR monthly report generator
//!
//! Turns structured portfolio-performance data into a single self-contained
//! HTML document that renders correctly in legacy email clients (Outlook
//! included): table-based layout, inline styles everywhere, MSO conditional
//! blocks and a VML button fallback.
//!
//! ## Features
//! - Pure, deterministic rendering: equal input, byte-identical output
//! - pt-BR formatting from fixed tables, independent of the runtime locale
//! - Sign-aware coloring of returns and pt-BR currency for the net result
//! - Portfolio completeness validation ahead of generation
//! - Logo embedding as a base64 data URI
//!
//! ## Example
//! ```ignore
//! use mmzr_report::{generate, subject_line, validate_config, ReportConfig};
//!
//! let config = ReportConfig::from_json(&std::fs::read_to_string("report.json")?)?;
//! validate_config(&config)?;
//! let html = generate(&config);
//! let subject = subject_line(config.data_ref);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod image;
pub mod render;
pub mod theme;
pub mod validator;

// --- Core types ---
pub use config::{PerformanceBlock, PerformanceItem, Portfolio, ReportConfig};
pub use error::{ReportError, ReportResult};

/// Render the complete HTML document for a validated config
///
/// Pure and infallible: malformed input is expected to have been rejected by
/// [`validate_config`] beforehand.
pub fn generate(config: &ReportConfig) -> String {
    render::generate(config)
}

/// Default email subject for a reference date
pub fn subject_line(date: chrono::NaiveDate) -> String {
    format::subject_line(date)
}

/// Check that a portfolio carries all fields the renderer expects
pub fn is_valid_portfolio(portfolio: &Portfolio) -> bool {
    validator::is_valid_portfolio(portfolio)
}

/// Validate a whole config, reporting the first problem found
pub fn validate_config(config: &ReportConfig) -> ReportResult<()> {
    validator::validate_config(config)
}

/// Encode raw image bytes into an embeddable `data:` URI for the logo
pub fn encode_image(bytes: &[u8]) -> ReportResult<String> {
    image::encode_image(bytes)
}
