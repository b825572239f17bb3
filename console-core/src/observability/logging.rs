use crate::config::{Config, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn env_filter(log_level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level))
}

/// Install the global subscriber, returning an error if one is already set.
pub fn try_init_tracing(config: &Config) -> Result<(), tracing_subscriber::util::TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(&config.log_level));

    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .flatten_event(true),
            )
            .try_init()?,
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?,
    }

    tracing::debug!(
        service = %config.service_name,
        level = %config.log_level,
        "Tracing initialised"
    );
    Ok(())
}

pub fn init_tracing(config: &Config) {
    if let Err(e) = try_init_tracing(config) {
        eprintln!(
            "Failed to initialize tracing for service '{}': {}",
            config.service_name, e
        );
    }
}
