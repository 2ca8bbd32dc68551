//! Logging and tracing bootstrap.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog_kernel::settings::{LogFormat, TelemetrySettings};

/// Initialize the tracing pipeline.
///
/// The filter comes from `RUST_LOG` when set, otherwise from settings; the
/// output format (pretty or JSON) is settings-driven.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))?;

    let registry = tracing_subscriber::registry().with(filter);

    match settings.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
        LogFormat::Pretty => registry.with(fmt::layer()).try_init()?,
    }

    tracing::debug!("telemetry initialized");
    Ok(())
}
