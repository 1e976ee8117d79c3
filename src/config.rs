use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input for one report generation run
///
/// Field names on the wire match the published JSON schema: `dataRef` is an
/// ISO-8601 date and `logoBase64` a base64 image data URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    pub client_name: String,
    /// Reference date the report covers (drives month/year everywhere)
    pub data_ref: NaiveDate,
    pub portfolios: Vec<Portfolio>,
    /// Site-wide commentary, rendered once after the portfolio sections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comentarios_gerais: Option<String>,
    /// Logo as an embeddable data URI (see [`crate::encode_image`])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_base64: Option<String>,
    /// Replaces the default footer line when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_footer: Option<String>,
}

/// One portfolio panel in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    /// Category label shown under the name (e.g., "Conta Internacional")
    #[serde(rename = "type")]
    pub kind: String,
    /// Per-portfolio commentary, rendered only when non-blank after trimming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comentarios: Option<String>,
    pub data: PerformanceBlock,
}

/// Performance figures and asset/strategy lists for one portfolio
///
/// The four list fields are `Option` so that a list absent on the wire is
/// distinguishable from an empty one: validity requires all four to be
/// present, empty lists pass but render nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<Vec<PerformanceItem>>,
    /// Net financial return for the month, signed, in BRL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retorno_financeiro: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estrategias_destaque: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ativos_promotores: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ativos_detratores: Option<Vec<String>>,
}

/// One row of the performance table: period label plus returns in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceItem {
    pub periodo: String,
    pub carteira: f64,
    pub benchmark: f64,
    pub diferenca: f64,
}

impl ReportConfig {
    /// Parse a config from its JSON wire form
    pub fn from_json(json: &str) -> crate::error::ReportResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
