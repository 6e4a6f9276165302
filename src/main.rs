use anyhow::Result;
use newscheck::api::{ClassifierApi, HttpClassifierApi};
use newscheck::health::{HealthController, HealthStatus};
use newscheck::prediction::{PredictionController, PredictionOutcome, RequestState};
use newscheck::{config, samples};
use std::io::Read;
use std::sync::Arc;
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// Text to classify: a `--sample` flag, a literal argument, or stdin.
fn input_text() -> Result<String> {
    let mut args = std::env::args().skip(1);

    match args.next() {
        Some(flag) if flag == "--sample" => {
            let kind = match args.next().as_deref() {
                Some("real") | Some("true") => samples::SampleKind::Real,
                Some("fake") => samples::SampleKind::Fake,
                other => anyhow::bail!(
                    "Usage: newscheck [--sample real|fake | TEXT] (got --sample {:?})",
                    other
                ),
            };
            Ok(samples::pick(kind).to_string())
        }
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Using classification service at {}", config.api.base_url);

    let text = input_text()?;

    let api: Arc<dyn ClassifierApi> = Arc::new(HttpClassifierApi::new(config.api));
    let health = HealthController::new(api.clone());
    let predictions = PredictionController::new(api);

    health.refresh().await;
    match health.current() {
        HealthStatus::Ok => println!("service: ok"),
        HealthStatus::Unreachable => println!("service: unreachable"),
    }

    predictions.submit(text).await;

    match predictions.current_state() {
        RequestState::Settled(PredictionOutcome::Success { verdict, note }) => {
            println!("{}", verdict);
            if let Some(note) = note {
                println!("note: {}", note);
            }
            Ok(())
        }
        RequestState::Settled(PredictionOutcome::Failure(err)) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
        state => anyhow::bail!("unexpected request state after submit: {:?}", state),
    }
}
