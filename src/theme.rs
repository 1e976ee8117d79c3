//! Brand palette for the generated document
//!
//! Every color the template emits lives here so the inline styles stay
//! consistent across blocks. All values are fixed at compile time; nothing is
//! derived from the runtime locale or environment.

/// Dark navy used for headers, panel bands and the CTA button
pub const PRIMARY: &str = "#0D2035";
/// Positive returns
pub const SUCCESS: &str = "#28a745";
/// Negative returns
pub const DANGER: &str = "#dc3545";
/// Default body text (also the neutral color for zero returns)
pub const TEXT: &str = "#333333";
pub const BACKGROUND: &str = "#ffffff";
/// Light gray band behind table headers, summary rows and the footer
pub const BACKGROUND_ALT: &str = "#f8f9fa";

// List panel fills, one per list section.
pub const STRATEGY_FILL: &str = "#f0f8ff";
pub const PROMOTER_FILL: &str = "#f0fff0";
pub const DETRACTOR_FILL: &str = "#fff5f5";

// Item text inside the promoter/detractor panels uses a darker shade than the
// border accent so it stays readable on the pale fill.
pub const PROMOTER_TEXT: &str = "#2e7d32";
pub const DETRACTOR_TEXT: &str = "#c62828";

/// Color for a signed percentage cell: zero stays neutral
pub fn sign_color(value: f64) -> &'static str {
    if value > 0.0 {
        SUCCESS
    } else if value < 0.0 {
        DANGER
    } else {
        TEXT
    }
}

/// Color for the financial-return summary row: zero counts as a gain
pub fn return_color(value: f64) -> &'static str {
    if value >= 0.0 {
        SUCCESS
    } else {
        DANGER
    }
}
