use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::{FoodMatchError, Result};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Only the first
/// call in a process succeeds; later calls return `FoodMatchError::Telemetry`.
pub fn init_tracing(settings: &LoggingSettings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| FoodMatchError::Telemetry(e.to_string()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let installed = if settings.format == "pretty" {
        subscriber.pretty().try_init()
    } else {
        subscriber.try_init()
    };

    installed.map_err(|e| FoodMatchError::Telemetry(e.to_string()))
}
