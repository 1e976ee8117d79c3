//! Block-by-block assembly of the Outlook-compatible report document
//!
//! Every visual block is its own function returning an HTML fragment; the
//! document is a single 600px table so legacy rendering engines keep the
//! layout. Styling is duplicated inline on every element because email clients
//! strip `<style>` outside the MSO conditional block. Input is assumed to have
//! passed [`crate::validate_config`]; nothing here checks or fails.

use chrono::Datelike;

use crate::config::{PerformanceItem, Portfolio, ReportConfig};
use crate::format::{format_currency, format_date, format_percentage, month_name, ORG_NAME};
use crate::theme;

const FONT: &str = "Arial, Helvetica, sans-serif";
const CARTA_URL_PREFIX: &str = "https://www.mmzrfo.com.br/post/carta-mensal";

/// Render the complete self-contained HTML document for one report
pub fn generate(config: &ReportConfig) -> String {
    let mes = month_name(config.data_ref);
    let ano = config.data_ref.year();
    let data_formatada = format_date(config.data_ref);

    let secoes_portfolios: String = config
        .portfolios
        .iter()
        .map(render_portfolio_section)
        .collect();

    let comentarios_gerais = match config.comentarios_gerais.as_deref() {
        Some(texto) if !texto.trim().is_empty() => render_general_comments(texto),
        _ => String::new(),
    };

    format!(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" lang="pt-BR">
<head>
    <meta http-equiv="Content-Type" content="text/html; charset=utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="color-scheme" content="only light">
    <meta name="supported-color-schemes" content="only light">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">
    <title>{org} - Relatório Mensal</title>
    <!--[if mso]>
    <noscript>
        <xml>
            <o:OfficeDocumentSettings>
                <o:AllowPNG/>
                <o:PixelsPerInch>96</o:PixelsPerInch>
            </o:OfficeDocumentSettings>
        </xml>
    </noscript>
    <style type="text/css">
        body, table, td, p, a, li, blockquote {{
            font-family: Arial, Helvetica, sans-serif !important;
        }}
        table {{
            border-collapse: collapse !important;
            mso-table-lspace: 0pt !important;
            mso-table-rspace: 0pt !important;
        }}
        img {{
            border: 0 !important;
            outline: none !important;
            text-decoration: none !important;
            -ms-interpolation-mode: bicubic !important;
        }}
        .ReadMsgBody {{ width: 100%; }}
        .ExternalClass {{ width: 100%; }}
    </style>
    <![endif]-->
</head>
<body style="margin: 0; padding: 0; background-color: {fundo}; color: {texto}; font-family: {font}; -webkit-text-size-adjust: 100%; -ms-text-size-adjust: 100%; width: 100%; height: 100%;">
    <table cellpadding="0" cellspacing="0" border="0" width="100%" style="border-collapse: collapse; background-color: {fundo}; margin: 0; padding: 0; width: 100%; height: 100%; font-family: {font};">
        <tr>
            <td align="center" style="padding: 0; margin: 0; width: 100%;">
                <table cellpadding="0" cellspacing="0" border="0" width="600" style="border-collapse: collapse; background-color: {fundo}; max-width: 600px; width: 100%; font-family: {font};">
                    {cabecalho}

                    <tr>
                        <td style="padding: 20px; background-color: {fundo};">
                            {saudacao}

                            {secoes_portfolios}

                            {comentarios_gerais}

                            {observacoes}

                            {indicadores}

                            {botao_carta}
                        </td>
                    </tr>

                    {rodape}
                </table>
            </td>
        </tr>
    </table>
</body>
</html>"#,
        org = ORG_NAME,
        fundo = theme::BACKGROUND,
        texto = theme::TEXT,
        font = FONT,
        cabecalho = render_header(config.logo_base64.as_deref(), mes, ano),
        saudacao = render_greeting(&config.client_name, &data_formatada),
        secoes_portfolios = secoes_portfolios,
        comentarios_gerais = comentarios_gerais,
        observacoes = render_observations(),
        indicadores = render_indicators(),
        botao_carta = render_cta_button(mes, ano),
        rodape = render_footer(ano, config.custom_footer.as_deref()),
    )
}

/// Header band: logo (image or text badge) plus title and month line
fn render_header(logo: Option<&str>, mes: &str, ano: i32) -> String {
    let logo_html = match logo {
        Some(data_uri) => format!(
            r#"<img src="{data_uri}" alt="{org}" width="80" height="64" style="display: block; border: 0; max-width: 80px; height: auto; vertical-align: top;">"#,
            data_uri = data_uri,
            org = ORG_NAME,
        ),
        None => format!(
            r#"<table cellpadding="0" cellspacing="0" border="0" style="border-collapse: collapse; width: 50px; height: 40px; background-color: {fundo};">
                               <tr><td style="color: {primaria}; font-weight: bold; font-size: 12px; text-align: center; vertical-align: middle; font-family: {font};">MMZR</td></tr>
                           </table>"#,
            fundo = theme::BACKGROUND,
            primaria = theme::PRIMARY,
            font = FONT,
        ),
    };

    format!(
        r#"<tr>
                        <td style="background-color: {primaria}; padding: 15px;">
                            <table cellpadding="0" cellspacing="0" border="0" width="100%" style="border-collapse: collapse;">
                                <tr>
                                    <td style="width: 90px; vertical-align: middle;">
                                        {logo_html}
                                    </td>
                                    <td style="vertical-align: middle; padding-left: 15px;">
                                        <h1 style="margin: 0; font-size: 20px; color: {fundo}; font-weight: bold; font-family: {font}; line-height: 24px;">{org}</h1>
                                        <p style="margin: 5px 0 0 0; font-size: 16px; color: {fundo}; font-family: {font}; line-height: 20px;">Relatório Mensal - {mes} {ano}</p>
                                    </td>
                                </tr>
                            </table>
                        </td>
                    </tr>"#,
        primaria = theme::PRIMARY,
        fundo = theme::BACKGROUND,
        font = FONT,
        org = ORG_NAME,
        logo_html = logo_html,
        mes = mes,
        ano = ano,
    )
}

fn render_greeting(client_name: &str, data_formatada: &str) -> String {
    format!(
        r#"<p style="margin: 0 0 15px 0; font-size: 14px; color: {texto}; font-family: {font}; line-height: 18px;">
                                Olá {client_name},
                            </p>

                            <p style="margin: 0 0 20px 0; font-size: 14px; color: {texto}; line-height: 21px; font-family: {font};">
                                Segue o relatório mensal com o desempenho de suas carteiras referente a <strong style="font-weight: bold;">{data_formatada}</strong>.
                            </p>"#,
        texto = theme::TEXT,
        font = FONT,
        client_name = client_name,
        data_formatada = data_formatada,
    )
}

/// One labeled panel per portfolio: performance table, the three list panels
/// (empty lists render nothing) and the optional commentary
fn render_portfolio_section(portfolio: &Portfolio) -> String {
    let dados = &portfolio.data;
    let performance = dados.performance.as_deref().unwrap_or(&[]);

    let comentarios = match portfolio.comentarios.as_deref() {
        Some(texto) if !texto.trim().is_empty() => render_portfolio_comments(texto),
        _ => String::new(),
    };

    format!(
        r#"<!-- Carteira: {nome} -->
                            <table cellpadding="0" cellspacing="0" border="0" width="100%" style="border-collapse: collapse; margin: 25px 0; border: 1px solid #e0e0e0; background-color: {fundo}; font-family: {font};">
                                <tr>
                                    <td style="background-color: {primaria}; color: {fundo}; padding: 12px;">
                                        <h3 style="margin: 0; font-size: 16px; color: {fundo}; font-weight: bold; font-family: {font}; line-height: 20px;">{nome}</h3>
                                        <span style="font-size: 14px; color: {fundo}; font-family: {font}; line-height: 18px;">{tipo}</span>
                                    </td>
                                </tr>
                                <tr>
                                    <td style="padding: 15px; background-color: {fundo};">

                                        {tabela}

                                        {estrategias}

                                        {promotores}

                                        {detratores}

                                        {comentarios}
                                    </td>
                                </tr>
                            </table>"#,
        nome = portfolio.name,
        tipo = portfolio.kind,
        fundo = theme::BACKGROUND,
        primaria = theme::PRIMARY,
        font = FONT,
        tabela = render_performance_table(performance, dados.retorno_financeiro),
        estrategias = render_item_list(
            "Estratégias de Destaque",
            dados.estrategias_destaque.as_deref().unwrap_or(&[]),
            theme::STRATEGY_FILL,
            theme::PRIMARY,
            theme::TEXT,
        ),
        promotores = render_item_list(
            "Ativos Promotores",
            dados.ativos_promotores.as_deref().unwrap_or(&[]),
            theme::PROMOTER_FILL,
            theme::SUCCESS,
            theme::PROMOTER_TEXT,
        ),
        detratores = render_item_list(
            "Ativos Detratores",
            dados.ativos_detratores.as_deref().unwrap_or(&[]),
            theme::DETRACTOR_FILL,
            theme::DANGER,
            theme::DETRACTOR_TEXT,
        ),
        comentarios = comentarios,
    )
}

fn render_performance_row(item: &PerformanceItem) -> String {
    let cor_carteira = theme::sign_color(item.carteira);
    let cor_diferenca = theme::sign_color(item.diferenca);

    format!(
        r#"<tr>
                                            <td style="padding: 10px 8px; text-align: left; border: 1px solid #dee2e6; background-color: {fundo}; color: {texto}; font-size: 13px; font-family: {font}; line-height: 16px; font-weight: normal;">{periodo}</td>
                                            <td style="padding: 10px 8px; text-align: center; border: 1px solid #dee2e6; color: {cor_carteira}; font-weight: bold; background-color: {fundo}; font-size: 13px; font-family: {font}; line-height: 16px;">{carteira}</td>
                                            <td style="padding: 10px 8px; text-align: center; border: 1px solid #dee2e6; background-color: {fundo}; color: {texto}; font-size: 13px; font-family: {font}; line-height: 16px; font-weight: normal;">{benchmark}</td>
                                            <td style="padding: 10px 8px; text-align: center; border: 1px solid #dee2e6; color: {cor_diferenca}; font-weight: bold; background-color: {fundo}; font-size: 13px; font-family: {font}; line-height: 16px;">{diferenca}</td>
                                        </tr>"#,
        fundo = theme::BACKGROUND,
        texto = theme::TEXT,
        font = FONT,
        periodo = item.periodo,
        cor_carteira = cor_carteira,
        carteira = format_percentage(item.carteira),
        benchmark = format_percentage(item.benchmark),
        cor_diferenca = cor_diferenca,
        // The difference is in percentage points, not percent
        diferenca = format_percentage(item.diferenca).replace('%', " p.p."),
    )
}

fn render_performance_table(performance: &[PerformanceItem], retorno_financeiro: Option<f64>) -> String {
    let linhas: String = performance.iter().map(render_performance_row).collect();

    let linha_retorno = match retorno_financeiro {
        Some(retorno) => format!(
            r#"<tr>
                                            <td style="padding: 10px 8px; text-align: left; border: 1px solid #dee2e6; font-weight: bold; background-color: {fundo_alt}; color: {texto}; font-size: 13px; font-family: {font}; line-height: 16px;">Retorno Financeiro:</td>
                                            <td style="padding: 10px 8px; text-align: center; border: 1px solid #dee2e6; color: {cor}; font-weight: bold; background-color: {fundo_alt}; font-size: 13px; font-family: {font}; line-height: 16px;" colspan="3">{valor}</td>
                                        </tr>"#,
            fundo_alt = theme::BACKGROUND_ALT,
            texto = theme::TEXT,
            font = FONT,
            cor = theme::return_color(retorno),
            valor = format_currency(retorno),
        ),
        None => String::new(),
    };

    format!(
        r#"<h4 style="font-size: 15px; color: {primaria}; margin: 0 0 12px 0; padding-bottom: 6px; border-bottom: 2px solid #e0e0e0; font-weight: bold; font-family: {font}; line-height: 18px;">Performance</h4>
                                    <table cellpadding="0" cellspacing="0" border="0" style="width: 100%; border-collapse: collapse; font-size: 13px; margin-bottom: 18px; background-color: {fundo}; border: 1px solid #dee2e6; font-family: {font};">
                                        <tr>
                                            <th style="background-color: {fundo_alt}; color: {primaria}; font-weight: bold; padding: 12px 8px; text-align: left; border: 1px solid #dee2e6; font-size: 13px; font-family: {font}; line-height: 16px;">Período</th>
                                            <th style="background-color: {fundo_alt}; color: {primaria}; font-weight: bold; padding: 12px 8px; text-align: center; border: 1px solid #dee2e6; font-size: 13px; font-family: {font}; line-height: 16px;">Carteira</th>
                                            <th style="background-color: {fundo_alt}; color: {primaria}; font-weight: bold; padding: 12px 8px; text-align: center; border: 1px solid #dee2e6; font-size: 13px; font-family: {font}; line-height: 16px;">Benchmark</th>
                                            <th style="background-color: {fundo_alt}; color: {primaria}; font-weight: bold; padding: 12px 8px; text-align: center; border: 1px solid #dee2e6; font-size: 13px; font-family: {font}; line-height: 16px;">Carteira vs. Benchmark</th>
                                        </tr>
                                        {linhas}
                                        {linha_retorno}
                                    </table>"#,
        primaria = theme::PRIMARY,
        fundo = theme::BACKGROUND,
        fundo_alt = theme::BACKGROUND_ALT,
        font = FONT,
        linhas = linhas,
        linha_retorno = linha_retorno,
    )
}

/// Titled bullet panel; an empty list renders nothing at all
fn render_item_list(
    titulo: &str,
    itens: &[String],
    cor_fundo: &str,
    cor_borda: &str,
    cor_item: &str,
) -> String {
    if itens.is_empty() {
        return String::new();
    }

    let itens_html: String = itens
        .iter()
        .map(|item| {
            format!(
                r#"<tr><td style="padding: 2px 0; font-size: 13px; color: {cor_item}; line-height: 18px; font-family: {font};">• {item}</td></tr>"#,
                cor_item = cor_item,
                font = FONT,
                item = item,
            )
        })
        .collect();

    format!(
        r#"<h4 style="font-size: 15px; color: {primaria}; margin: 18px 0 10px 0; padding-bottom: 6px; border-bottom: 2px solid #e0e0e0; font-weight: bold; font-family: {font}; line-height: 18px;">{titulo}</h4>
                                    <table cellpadding="0" cellspacing="0" border="0" style="width: 100%; border-collapse: collapse; margin: 0 0 15px 0; background-color: {cor_fundo}; border-left: 4px solid {cor_borda};">
                                        <tr>
                                            <td style="padding: 8px 12px;">
                                                <table cellpadding="0" cellspacing="0" border="0" style="border-collapse: collapse;">
                                                    {itens_html}
                                                </table>
                                            </td>
                                        </tr>
                                    </table>"#,
        primaria = theme::PRIMARY,
        font = FONT,
        titulo = titulo,
        cor_fundo = cor_fundo,
        cor_borda = cor_borda,
        itens_html = itens_html,
    )
}

fn render_portfolio_comments(comentarios: &str) -> String {
    format!(
        r#"<h4 style="font-size: 15px; color: {primaria}; margin: 18px 0 10px 0; padding-bottom: 6px; border-bottom: 2px solid #e0e0e0; font-weight: bold; font-family: {font}; line-height: 18px;">Comentários</h4>
                                    <table cellpadding="0" cellspacing="0" border="0" style="width: 100%; border-collapse: collapse; margin: 0 0 15px 0; background-color: {fundo_alt}; border-left: 4px solid {primaria};">
                                        <tr>
                                            <td style="padding: 12px;">
                                                <p style="margin: 0; font-size: 13px; color: {texto}; line-height: 18px; font-family: {font}; white-space: pre-wrap;">{comentarios}</p>
                                            </td>
                                        </tr>
                                    </table>"#,
        primaria = theme::PRIMARY,
        fundo_alt = theme::BACKGROUND_ALT,
        texto = theme::TEXT,
        font = FONT,
        comentarios = comentarios,
    )
}

fn render_general_comments(comentarios: &str) -> String {
    format!(
        r#"<!-- Comentários Gerais -->
                            <table cellpadding="0" cellspacing="0" border="0" width="100%" style="border-collapse: collapse; margin: 25px 0; border: 1px solid #e0e0e0; background-color: {fundo}; font-family: {font};">
                                <tr>
                                    <td style="background-color: {primaria}; color: {fundo}; padding: 12px;">
                                        <h3 style="margin: 0; font-size: 16px; color: {fundo}; font-weight: bold; font-family: {font}; line-height: 20px;">Observações Especiais</h3>
                                    </td>
                                </tr>
                                <tr>
                                    <td style="padding: 15px; background-color: {fundo};">
                                        <p style="margin: 0; font-size: 14px; color: {texto}; line-height: 20px; font-family: {font}; white-space: pre-wrap;">{comentarios}</p>
                                    </td>
                                </tr>
                            </table>"#,
        fundo = theme::BACKGROUND,
        primaria = theme::PRIMARY,
        texto = theme::TEXT,
        font = FONT,
        comentarios = comentarios,
    )
}

/// Fixed disclaimer block, rendered verbatim on every report
fn render_observations() -> String {
    format!(
        r#"<!-- Observações finais -->
                            <table cellpadding="0" cellspacing="0" border="0" width="100%" style="border-collapse: collapse; margin-top: 25px; background-color: {fundo_alt}; border: 1px solid #e9ecef; font-family: {font};">
                                <tr>
                                    <td style="padding: 15px;">
                                        <p style="margin: 0 0 12px 0; color: #555555; font-size: 13px; line-height: 18px; font-family: {font};">
                                            <strong style="font-weight: bold;">Obs.:</strong> Eventuais ajustes retroativos do IPCA, após a divulgação oficial do indicador, podem impactar marginalmente a rentabilidade do portfólio no mês anterior.
                                        </p>
                                        <p style="margin: 0; color: #555555; font-size: 12px; font-style: italic; line-height: 16px; font-family: {font};">
                                            <strong style="font-weight: bold;">Obs.:</strong> Conforme solicitado, deixo o Felipe e Fernandito em cópia para também receberem as informações.
                                        </p>
                                    </td>
                                </tr>
                            </table>"#,
        fundo_alt = theme::BACKGROUND_ALT,
        font = FONT,
    )
}

/// Fixed market indicators block, rendered verbatim on every report
fn render_indicators() -> String {
    format!(
        r#"<!-- Principais indicadores -->
                            <table cellpadding="0" cellspacing="0" border="0" width="100%" style="border-collapse: collapse; margin-top: 15px; background-color: {fundo_alt}; border: 1px solid #e9ecef; font-family: {font};">
                                <tr>
                                    <td style="padding: 12px;">
                                        <p style="margin: 0 0 8px 0; font-weight: bold; color: {texto}; font-size: 13px; font-family: {font}; line-height: 16px;">Principais indicadores:</p>
                                        <p style="margin: 0; color: #555555; font-size: 11px; line-height: 15px; font-family: {font};">
                                            Locais: CDI: +1,06%, Ibovespa: +3,69%, Prefixados (IRF-M): +2,99%, Ativos IPCA (IMA-B): +2,09%, Imobiliários (IFIX): +3,01%, Dólar (Ptax): -1,42%, Multimercados (IHFA): +3,85%<br>
                                            Internacionais: MSCI AC: +0,77%, S&P 500 -0,76%, Euro Stoxx 600 -1,21%, MSCI China -4,55%, MSCI EM +1,04%, Ouro +5,29%, Petróleo BRENT -14,97%, Minério de ferro -2,68% e Bitcoin (IBIT) +14,31%
                                        </p>
                                    </td>
                                </tr>
                            </table>"#,
        fundo_alt = theme::BACKGROUND_ALT,
        texto = theme::TEXT,
        font = FONT,
    )
}

/// Monthly letter button: VML roundrect for Outlook, plain anchor everywhere
/// else — both branches emitted, conditional comments pick one
fn render_cta_button(mes: &str, ano: i32) -> String {
    let carta_link = format!("{}-{}-{}", CARTA_URL_PREFIX, mes.to_lowercase(), ano);

    format!(
        r#"<!-- Link para carta mensal como botão azul -->
                            <table cellpadding="0" cellspacing="0" border="0" width="100%" style="border-collapse: collapse; margin-top: 25px;">
                                <tr>
                                    <td align="center" style="padding: 0;">
                                        <!--[if mso]>
                                        <v:roundrect xmlns:v="urn:schemas-microsoft-com:vml" xmlns:w="urn:schemas-microsoft-com:office:word" href="{carta_link}" style="height:40px;v-text-anchor:middle;width:300px;" arcsize="10%" stroke="f" fillcolor="{primaria}">
                                            <w:anchorlock/>
                                            <center style="color:{fundo};font-family:Arial,Helvetica,sans-serif;font-size:14px;font-weight:bold;">Confira nossa carta completa: Carta {mes} {ano}</center>
                                        </v:roundrect>
                                        <![endif]-->
                                        <!--[if !mso]><!-->
                                        <a href="{carta_link}" target="_blank" style="display: inline-block; background-color: {primaria}; color: {fundo}; padding: 12px 24px; text-decoration: none; font-weight: bold; font-size: 14px; font-family: {font}; text-align: center; border: none; line-height: 18px;">Confira nossa carta completa: Carta {mes} {ano}</a>
                                        <!--<![endif]-->
                                    </td>
                                </tr>
                            </table>"#,
        carta_link = carta_link,
        primaria = theme::PRIMARY,
        fundo = theme::BACKGROUND,
        font = FONT,
        mes = mes,
        ano = ano,
    )
}

fn render_footer(ano: i32, custom_footer: Option<&str>) -> String {
    let footer_text = custom_footer.unwrap_or("MMZR Family Office | Gestão de Patrimônio");

    format!(
        r#"<!-- Footer -->
                    <tr>
                        <td style="background-color: {fundo_alt}; padding: 15px; text-align: center; border-top: 1px solid #e9ecef;">
                            <p style="margin: 0 0 5px 0; color: #666666; font-size: 12px; font-family: {font}; line-height: 15px;">{footer_text}</p>
                            <p style="margin: 0; color: #666666; font-size: 12px; font-family: {font}; line-height: 15px;">© {ano} {org}. Todos os direitos reservados.</p>
                        </td>
                    </tr>"#,
        fundo_alt = theme::BACKGROUND_ALT,
        font = FONT,
        footer_text = footer_text,
        ano = ano,
        org = ORG_NAME,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(periodo: &str, carteira: f64, benchmark: f64, diferenca: f64) -> PerformanceItem {
        PerformanceItem {
            periodo: periodo.to_string(),
            carteira,
            benchmark,
            diferenca,
        }
    }

    #[test]
    fn test_row_colors_by_sign() {
        let positivo = render_performance_row(&item("Junho", 1.5, 0.3, 1.2));
        assert!(positivo.contains(&format!("color: {}; font-weight: bold", theme::SUCCESS)));

        let negativo = render_performance_row(&item("Junho", -1.5, 0.3, -1.8));
        assert!(negativo.contains(&format!("color: {}; font-weight: bold", theme::DANGER)));

        let neutro = render_performance_row(&item("Junho", 0.0, 0.3, 0.0));
        assert!(neutro.contains(&format!("color: {}; font-weight: bold", theme::TEXT)));
    }

    #[test]
    fn test_benchmark_cell_never_colored() {
        // Benchmark is strongly positive, but its cell keeps the neutral text
        // color and normal weight
        let linha = render_performance_row(&item("Junho", 0.1, 9.99, -9.89));
        assert!(linha.contains("+9.99%"));
        let celula_benchmark = linha
            .split("<td")
            .find(|celula| celula.contains("+9.99%"))
            .unwrap();
        assert!(celula_benchmark.contains(&format!("color: {}", theme::TEXT)));
        assert!(celula_benchmark.contains("font-weight: normal"));
    }

    #[test]
    fn test_difference_uses_percentage_points() {
        let linha = render_performance_row(&item("No ano", -0.20, 1.19, -0.17));
        assert!(linha.contains("-0.17 p.p."));
        assert!(!linha.contains("-0.17%"));
    }

    #[test]
    fn test_financial_return_row() {
        let tabela = render_performance_table(&[], Some(-17026.39));
        assert!(tabela.contains("Retorno Financeiro:"));
        assert!(tabela.contains("-R$ 17.026,39"));
        assert!(tabela.contains(&format!("color: {}", theme::DANGER)));
        assert!(tabela.contains(r#"colspan="3""#));

        let sem_retorno = render_performance_table(&[], None);
        assert!(!sem_retorno.contains("Retorno Financeiro:"));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let html = render_item_list(
            "Ativos Promotores",
            &[],
            theme::PROMOTER_FILL,
            theme::SUCCESS,
            theme::PROMOTER_TEXT,
        );
        assert_eq!(html, "");
    }

    #[test]
    fn test_cta_button_has_both_branches() {
        let html = render_cta_button("Março", 2025);
        assert!(html.contains("https://www.mmzrfo.com.br/post/carta-mensal-março-2025"));
        assert!(html.contains("<v:roundrect"));
        assert!(html.contains("<!--[if mso]>"));
        assert!(html.contains("<!--[if !mso]><!-->"));
        assert!(html.contains("<a href="));
    }

    #[test]
    fn test_header_logo_fallback_badge() {
        let sem_logo = render_header(None, "Junho", 2025);
        assert!(sem_logo.contains(">MMZR</td>"));
        assert!(!sem_logo.contains("<img"));

        let com_logo = render_header(Some("data:image/png;base64,AAAA"), "Junho", 2025);
        assert!(com_logo.contains(r#"<img src="data:image/png;base64,AAAA""#));
        assert!(!com_logo.contains(">MMZR</td>"));
    }

    #[test]
    fn test_footer_custom_and_default() {
        let padrao = render_footer(2025, None);
        assert!(padrao.contains("MMZR Family Office | Gestão de Patrimônio"));
        assert!(padrao.contains("© 2025 MMZR Family Office. Todos os direitos reservados."));

        let customizado = render_footer(2025, Some("Atenciosamente, Equipe MMZR"));
        assert!(customizado.contains("Atenciosamente, Equipe MMZR"));
        assert!(!customizado.contains("Gestão de Patrimônio"));
    }

    #[test]
    fn test_generate_does_not_mutate_input() {
        let config = ReportConfig {
            client_name: "Maria".to_string(),
            data_ref: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            portfolios: vec![],
            comentarios_gerais: Some("  ".to_string()),
            logo_base64: None,
            custom_footer: None,
        };
        let antes = config.clone();
        let _ = generate(&config);
        assert_eq!(config, antes);
    }
}
