//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::{Result, TemplateError};

/// Tunables for template processing
///
/// Every field has a default, so a config JSON may name only what it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// VAT percentage used when the offer carries none
    pub default_vat_rate: f64,

    /// Currency used when neither the treatment nor the offer names one
    pub default_currency: String,

    /// Per-element byte estimate used by template stats
    pub bytes_per_element: usize,

    /// Opening placeholder delimiter
    pub placeholder_open: String,

    /// Closing placeholder delimiter
    pub placeholder_close: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_vat_rate: 20.0,
            default_currency: "TRY".to_string(),
            bytes_per_element: 1024,
            placeholder_open: "{{".to_string(),
            placeholder_close: "}}".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| TemplateError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.placeholder_open.is_empty() || self.placeholder_close.is_empty() {
            log::warn!("Rejecting config with empty placeholder delimiter");
            return Err(TemplateError::ConfigError(
                "placeholder delimiters must not be empty".to_string(),
            ));
        }

        if !self.default_vat_rate.is_finite() || self.default_vat_rate < 0.0 {
            log::warn!(
                "Rejecting config with default VAT rate {}",
                self.default_vat_rate
            );
            return Err(TemplateError::ConfigError(format!(
                "default VAT rate must be a non-negative number, got {}",
                self.default_vat_rate
            )));
        }

        Ok(())
    }
}
