use serde::Deserialize;
use reqmetrics_core::error::{MetricsError, Result};

/// Middleware configuration.
///
/// Every field is optional; an empty document is a valid config. Future
/// collection tuning (path normalization rules, cardinality caps) belongs
/// here as new defaulted sections.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub bridge: BridgeSection,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            bridge: BridgeSection::default(),
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::UnsupportedVersion(self.version));
        }
        self.bridge.validate()?;
        Ok(())
    }
}

/// Settings for the axum bridge only; the middleware ignores them.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeSection {
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for BridgeSection {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl BridgeSection {
    pub fn validate(&self) -> Result<()> {
        if self.max_body_bytes == 0 {
            return Err(MetricsError::Config(
                "bridge.max_body_bytes must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_version() -> u32 {
    1
}
fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}
