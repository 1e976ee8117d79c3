use regex::Regex;
use std::sync::OnceLock;

use crate::config::{Portfolio, ReportConfig};
use crate::error::{ReportError, ReportResult};

/// True iff the portfolio carries everything the renderer expects
///
/// Name and type must be non-empty and all four list fields must be present.
/// Empty lists pass: they are complete data that happens to render nothing.
pub fn is_valid_portfolio(portfolio: &Portfolio) -> bool {
    !portfolio.name.is_empty()
        && !portfolio.kind.is_empty()
        && portfolio.data.performance.is_some()
        && portfolio.data.estrategias_destaque.is_some()
        && portfolio.data.ativos_promotores.is_some()
        && portfolio.data.ativos_detratores.is_some()
}

/// Validate a whole config before generation
///
/// The renderer itself performs no checks, so everything malformed has to be
/// caught here. Errors name the offending portfolio.
pub fn validate_config(config: &ReportConfig) -> ReportResult<()> {
    if config.client_name.trim().is_empty() {
        return Err(ReportError::MissingClientName);
    }
    if config.portfolios.is_empty() {
        return Err(ReportError::NoPortfolios);
    }
    for portfolio in &config.portfolios {
        validate_portfolio(portfolio)?;
    }
    if let Some(ref logo) = config.logo_base64 {
        validate_logo(logo)?;
    }
    Ok(())
}

fn validate_portfolio(portfolio: &Portfolio) -> ReportResult<()> {
    let reason = if portfolio.name.is_empty() {
        Some("name must not be empty")
    } else if portfolio.kind.is_empty() {
        Some("type must not be empty")
    } else if portfolio.data.performance.is_none() {
        Some("missing 'performance' list")
    } else if portfolio.data.estrategias_destaque.is_none() {
        Some("missing 'estrategias_destaque' list")
    } else if portfolio.data.ativos_promotores.is_none() {
        Some("missing 'ativos_promotores' list")
    } else if portfolio.data.ativos_detratores.is_none() {
        Some("missing 'ativos_detratores' list")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ReportError::InvalidPortfolio {
            name: portfolio.name.clone(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

fn validate_logo(logo: &str) -> ReportResult<()> {
    static DATA_URI_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = DATA_URI_REGEX.get_or_init(|| {
        Regex::new(r"^data:image/[a-z0-9.+-]+;base64,[A-Za-z0-9+/]+={0,2}$").unwrap()
    });
    if re.is_match(logo) {
        Ok(())
    } else {
        Err(ReportError::InvalidLogo {
            reason: "expected a base64 image data URI (e.g., data:image/png;base64,...)"
                .to_string(),
        })
    }
}
