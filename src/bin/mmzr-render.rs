use mmzr_report::{generate, subject_line, validate_config, ReportConfig, ReportError};
use std::env;
use std::fs;
use std::process;

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: mmzr-render <config.json> [output.html]");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  mmzr-render report.json");
        eprintln!("  mmzr-render report.json relatorio-junho.html");
        process::exit(1);
    }

    let config_path = &args[1];
    let output_path = args.get(2);

    match render_file(config_path, output_path.map(String::as_str)) {
        Ok(subject) => {
            eprintln!("Assunto sugerido: {}", subject);
        }
        Err(e) => {
            eprintln!("✗ {} could not be rendered:", config_path);
            eprintln!("  {}", e);
            process::exit(1);
        }
    }
}

fn render_file(config_path: &str, output_path: Option<&str>) -> Result<String, ReportError> {
    let json = fs::read_to_string(config_path)
        .map_err(|e| ReportError::ValidationError(format!("Failed to read file: {}", e)))?;

    let config = ReportConfig::from_json(&json)?;
    log::debug!(
        "config loaded: {} portfolio(s), reference date {}",
        config.portfolios.len(),
        config.data_ref
    );

    validate_config(&config)?;
    let html = generate(&config);

    match output_path {
        Some(path) => {
            fs::write(path, &html)
                .map_err(|e| ReportError::ValidationError(format!("Failed to write file: {}", e)))?;
            log::info!("wrote {} bytes to {}", html.len(), path);
            println!("✓ {} written", path);
        }
        None => {
            println!("{}", html);
        }
    }

    Ok(subject_line(config.data_ref))
}
