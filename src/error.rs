use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Error, Debug, Clone)]
pub enum ReportError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Client name must not be empty")]
    MissingClientName,

    #[error("Report has no portfolios")]
    NoPortfolios,

    #[error("Invalid portfolio '{name}': {reason}")]
    InvalidPortfolio { name: String, reason: String },

    #[error("Invalid logo: {reason}")]
    InvalidLogo { reason: String },

    #[error("Empty image: no bytes to encode")]
    EmptyImage,

    #[error("Unrecognized image format: expected PNG, JPEG, GIF, WebP or SVG")]
    UnrecognizedImageFormat,

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::DeserializationError(err.to_string())
    }
}
