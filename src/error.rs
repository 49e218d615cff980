use thiserror::Error;

/// Errors surfaced by the ambient layers of the crate
///
/// The algorithms themselves never fail: misses and empty inputs are
/// reported through `Option` and empty collections.
#[derive(Debug, Error)]
pub enum FoodMatchError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid match request: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),

    #[error("Tracing setup failed: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, FoodMatchError>;
