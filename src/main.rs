use clap::Parser;
use coloquial_translator::{translate_with_config, TranslatorLibConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

const EMPTY_INPUT_WARNING: &str = "Por favor, escribe algo para traducir.";

/// Traduce frases del español al portugués brasileño coloquial.
#[derive(Debug, Parser)]
#[command(name = "coloquial-translator", version)]
struct Cli {
    /// Frase a traducir; si se omite se lee de stdin
    text: Vec<String>,

    /// Archivo de configuración (por defecto se buscan las ubicaciones habituales)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Número máximo de intentos
    #[arg(long)]
    retries: Option<usize>,

    /// Segundos de espera entre intentos
    #[arg(long)]
    delay: Option<f64>,

    /// Escribe una configuración de ejemplo en la ruta indicada y termina
    #[arg(long, value_name = "PATH")]
    init_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("coloquial_translator=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(path) = &cli.init_config {
        return match TranslatorLibConfig::generate_example_config(path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Wrote example configuration");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to write example configuration");
                ExitCode::FAILURE
            }
        };
    }

    let mut config = match &cli.config {
        Some(path) => match TranslatorLibConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                return ExitCode::FAILURE;
            }
        },
        None => TranslatorLibConfig::load_from_default_locations(),
    };
    if let Some(retries) = cli.retries {
        config.translator.retries = retries;
    }
    if let Some(delay) = cli.delay {
        config.translator.delay_secs = delay;
    }

    let raw = if cli.text.is_empty() {
        let mut buf = String::new();
        if let Err(e) = tokio::io::stdin().read_to_string(&mut buf).await {
            tracing::error!(error = %e, "Failed to read stdin");
            return ExitCode::FAILURE;
        }
        buf
    } else {
        cli.text.join(" ")
    };

    let input = raw.trim();
    if input.is_empty() {
        eprintln!("{EMPTY_INPUT_WARNING}");
        return ExitCode::from(2);
    }

    let translation = translate_with_config(input, &config.translator).await;
    println!("{translation}");
    ExitCode::SUCCESS
}
