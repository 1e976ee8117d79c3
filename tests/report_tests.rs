use chrono::NaiveDate;
use mmzr_report::{
    encode_image, generate, is_valid_portfolio, subject_line, validate_config, PerformanceBlock,
    PerformanceItem, Portfolio, ReportConfig, ReportError,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

fn get_demo_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path.push(filename);
    path
}

fn load_demo_config() -> ReportConfig {
    let json = fs::read_to_string(get_demo_path("monthly-report.json")).unwrap();
    ReportConfig::from_json(&json).unwrap()
}

fn single_item_config(carteira: f64, diferenca: f64) -> ReportConfig {
    ReportConfig {
        client_name: "Maria".to_string(),
        data_ref: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        portfolios: vec![Portfolio {
            name: "Carteira Local".to_string(),
            kind: "Conta Local".to_string(),
            comentarios: None,
            data: PerformanceBlock {
                performance: Some(vec![PerformanceItem {
                    periodo: "Junho".to_string(),
                    carteira,
                    benchmark: 0.37,
                    diferenca,
                }]),
                retorno_financeiro: None,
                estrategias_destaque: Some(vec![]),
                ativos_promotores: Some(vec![]),
                ativos_detratores: Some(vec![]),
            },
        }],
        comentarios_gerais: None,
        logo_base64: None,
        custom_footer: None,
    }
}

#[test]
fn test_generate_is_deterministic() {
    let config = load_demo_config();
    let primeira = generate(&config);
    let segunda = generate(&config.clone());
    assert_eq!(primeira, segunda);
}

#[test]
fn test_end_to_end_demo_report() {
    let config = load_demo_config();
    validate_config(&config).unwrap();
    let html = generate(&config);

    assert!(html.contains("Offshore"));
    assert!(html.contains("Junho"));
    assert!(html.contains("No ano"));
    assert!(html.contains("-R$ 17.026,39"));
    assert!(html.contains("https://www.mmzrfo.com.br/post/carta-mensal-junho-2025"));
    assert!(html.contains("Olá Vinicius Maciel,"));
    assert!(html.contains("30/06/2025"));
    assert!(html.contains("Relatório Mensal - Junho 2025"));
}

#[test]
fn test_document_is_self_contained() {
    let html = generate(&load_demo_config());

    assert!(html.starts_with("<!DOCTYPE html"));
    assert!(html.ends_with("</html>"));
    // No external assets: every style is inline, the only URLs are the CTA
    // link and xmlns declarations
    assert!(!html.contains("<link"));
    assert!(!html.contains("<script"));
    assert!(html.contains("<!--[if mso]>"));
    assert!(html.contains("<v:roundrect"));
}

#[test]
fn test_portfolios_render_in_input_order() {
    let html = generate(&load_demo_config());
    let offshore = html.find("Offshore").unwrap();
    let local = html.find("Carteira Local").unwrap();
    assert!(offshore < local);
}

#[test]
fn test_empty_lists_are_omitted() {
    // The second demo portfolio has empty strategy and detractor lists
    let html = generate(&load_demo_config());
    let secao_local = &html[html.find("Carteira Local").unwrap()..];
    assert!(secao_local.contains("Ativos Promotores"));
    assert!(!secao_local.contains("Estratégias de Destaque"));
    assert!(!secao_local.contains("Ativos Detratores"));
}

#[test]
fn test_positive_return_colored_success() {
    let html = generate(&single_item_config(1.5, 1.13));
    assert!(html.contains(r#"color: #28a745; font-weight: bold"#));
    assert!(html.contains("+1.50%"));
}

#[test]
fn test_negative_return_colored_danger() {
    let html = generate(&single_item_config(-1.5, -1.87));
    assert!(html.contains(r#"color: #dc3545; font-weight: bold"#));
    assert!(html.contains("-1.50%"));
}

#[test]
fn test_zero_return_stays_neutral() {
    let html = generate(&single_item_config(0.0, -0.37));
    assert!(html.contains(r#"color: #333333; font-weight: bold"#));
    assert!(html.contains("0.00%"));
    assert!(!html.contains("+0.00%"));
}

#[test]
fn test_difference_column_uses_percentage_points() {
    let html = generate(&single_item_config(-0.20, -0.17));
    assert!(html.contains("-0.17 p.p."));
}

#[test]
fn test_subject_line_portuguese_months() {
    let marco = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
    assert_eq!(
        subject_line(marco),
        "MMZR Family Office | Desempenho Março de 2026"
    );

    let janeiro = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    assert_eq!(
        subject_line(janeiro),
        "MMZR Family Office | Desempenho Janeiro de 2025"
    );
}

#[test]
fn test_portfolio_validity_predicate() {
    let config = load_demo_config();
    for portfolio in &config.portfolios {
        assert!(is_valid_portfolio(portfolio));
    }

    let mut sem_tipo = config.portfolios[0].clone();
    sem_tipo.kind = String::new();
    assert!(!is_valid_portfolio(&sem_tipo));

    let mut sem_lista = config.portfolios[0].clone();
    sem_lista.data.estrategias_destaque = None;
    assert!(!is_valid_portfolio(&sem_lista));
}

#[test]
fn test_validate_config_rejects_incomplete_portfolio() {
    let mut config = load_demo_config();
    config.portfolios[1].data.performance = None;
    assert!(matches!(
        validate_config(&config),
        Err(ReportError::InvalidPortfolio { .. })
    ));
}

#[test]
fn test_blank_general_comments_render_nothing() {
    let mut config = load_demo_config();
    config.comentarios_gerais = Some("   \n  ".to_string());
    let html = generate(&config);
    assert!(!html.contains("Observações Especiais"));

    config.comentarios_gerais = Some("Texto relevante.".to_string());
    let html = generate(&config);
    assert!(html.contains("Observações Especiais"));
    assert!(html.contains("Texto relevante."));
}

#[test]
fn test_portfolio_comments_render_when_present() {
    let html = generate(&load_demo_config());
    assert!(html.contains("Comentários"));
    assert!(html.contains("Posição em tecnologia reduzida ao longo do mês."));
}

#[test]
fn test_encoded_logo_is_embedded() {
    let logo = encode_image(b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR").unwrap();

    let mut config = load_demo_config();
    config.logo_base64 = Some(logo.clone());
    validate_config(&config).unwrap();

    let html = generate(&config);
    assert!(html.contains(&format!(r#"<img src="{}""#, logo)));
}

#[test]
fn test_fixed_blocks_always_present() {
    let html = generate(&single_item_config(0.5, 0.13));
    assert!(html.contains("Principais indicadores:"));
    assert!(html.contains("Eventuais ajustes retroativos do IPCA"));
    assert!(html.contains("© 2025 MMZR Family Office. Todos os direitos reservados."));
}

#[test]
fn test_custom_footer_replaces_default() {
    let mut config = load_demo_config();
    config.custom_footer = Some("Equipe de Gestão | MMZR".to_string());
    let html = generate(&config);
    assert!(html.contains("Equipe de Gestão | MMZR"));
    assert!(!html.contains("MMZR Family Office | Gestão de Patrimônio"));
}
