//! Shared error type across reqmetrics crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and middleware.
///
/// Request handling itself never fails with this type; it only surfaces
/// while loading or validating configuration.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
}

impl MetricsError {
    /// Whether the error came from the content of the configuration
    /// rather than from reading it.
    pub fn is_config(&self) -> bool {
        matches!(self, MetricsError::Config(_) | MetricsError::UnsupportedVersion(_))
    }
}
