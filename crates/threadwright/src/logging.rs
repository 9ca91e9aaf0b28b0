//! Tracing subscriber setup.

pub(crate) fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "info,threadwright=debug,threadwright_bot=debug,threadwright_social=debug,threadwright_models=debug"
    } else {
        "info"
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `-v`. With the `observability` feature, spans are
/// also exported through OpenTelemetry.
#[cfg(not(feature = "observability"))]
pub fn init(verbose: bool, json_logs: bool) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level(verbose)))?;

    let fmt_layer = if json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_target(false).boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

/// Install the global subscriber with the OpenTelemetry bridge.
#[cfg(feature = "observability")]
pub fn init(verbose: bool, json_logs: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = crate::observability::ObservabilityConfig::new("threadwright")
        .with_log_level(default_level(verbose))
        .with_json_logs(json_logs);
    crate::observability::init_observability_with_config(config)
}

/// Flush exporters before exit.
pub fn shutdown() {
    #[cfg(feature = "observability")]
    crate::observability::shutdown_observability();
}
