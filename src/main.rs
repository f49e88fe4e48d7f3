use clap::Parser;
use ingredient_ai::{classifier, cli, config, error, ocr, server};

use cli::{Cli, Commands};
use config::Config;
use error::{IngredientAiError, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load()?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            server::run(Arc::new(config)).await?;
        }

        Commands::Check { text, image } => {
            let mut raw_text = String::new();

            // 1. OCR по изображению
            if let Some(path) = image {
                if !path.exists() {
                    return Err(IngredientAiError::FileNotFound(path.display().to_string()));
                }
                let bytes = std::fs::read(&path)?;
                raw_text = ocr::extract_text(&bytes, &config).await?;
            }

            // 2. Текст добавляется после OCR
            if let Some(text) = text {
                raw_text.push('\n');
                raw_text.push_str(&text);
            }

            if raw_text.trim().is_empty() {
                return Err(IngredientAiError::EmptyInput);
            }

            // 3. Классификация и вывод вердикта
            let findings = classifier::classify(&raw_text);

            if findings.is_empty() {
                println!("{}", server::RESULT_OK);
            } else {
                println!("{}", server::RESULT_ISSUES);
                for finding in &findings {
                    println!(
                        "  - {} [{}]: {}",
                        finding.ingredient, finding.category, finding.reason
                    );
                }
            }
        }

        Commands::Config { show } => {
            if show {
                println!("Настройки:");
                println!("  Адрес: {}:{}", config.host, config.port);
                println!("  Язык OCR: {}", config.ocr_lang);
                println!("  Таймаут OCR: {} с", config.ocr_timeout_seconds);
                println!("  Лимит загрузки: {} байт", config.max_upload_bytes);
                println!("  Файл: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
