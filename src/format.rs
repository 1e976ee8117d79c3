//! pt-BR formatting helpers
//!
//! Month names come from a fixed table rather than the platform locale, so the
//! output is byte-stable regardless of where the generator runs.

use chrono::{Datelike, NaiveDate};

/// Portuguese month names, indexed by `month0`
pub const MESES_PORTUGUES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Fixed organization name used in the header, subject and footer
pub const ORG_NAME: &str = "MMZR Family Office";

/// Portuguese month name for a date
pub fn month_name(date: NaiveDate) -> &'static str {
    MESES_PORTUGUES[date.month0() as usize]
}

/// Two-decimal percentage with an explicit "+" for positive values
///
/// Zero renders unsigned ("0.00%"); negatives keep the numeral's own sign.
pub fn format_percentage(value: f64) -> String {
    // -0.0 must not render as "-0.00%"
    let value = if value == 0.0 { 0.0 } else { value };
    let sinal = if value > 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sinal, value)
}

/// Brazilian currency: "R$ 17.026,39" / "-R$ 17.026,39"
///
/// The minus sign goes before the currency symbol; grouping uses "." and the
/// decimal separator ",".
pub fn format_currency(value: f64) -> String {
    let sinal = if value >= 0.0 { "R$ " } else { "-R$ " };
    format!("{}{}", sinal, group_pt_br(value.abs()))
}

/// dd/mm/yyyy, the pt-BR short date form
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Default email subject: "MMZR Family Office | Desempenho {Month} de {Year}"
pub fn subject_line(date: NaiveDate) -> String {
    format!(
        "{} | Desempenho {} de {}",
        ORG_NAME,
        month_name(date),
        date.year()
    )
}

/// Absolute value with pt-BR thousands grouping and two decimals
fn group_pt_br(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (inteiro, centavos) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut agrupado = String::with_capacity(inteiro.len() + inteiro.len() / 3);
    for (i, c) in inteiro.chars().enumerate() {
        if i > 0 && (inteiro.len() - i) % 3 == 0 {
            agrupado.push('.');
        }
        agrupado.push(c);
    }
    format!("{},{}", agrupado, centavos)
}
