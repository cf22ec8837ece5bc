//! Engine configuration.
//!
//! Handles loading and saving configuration from TOML files. Every section
//! has serde defaults, so a partial file or no file at all yields a fully
//! usable configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::PaymentTerm;
use crate::{gates, timeline};

/// Engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Billing settings
    pub billing: BillingConfig,

    /// Timeline projection settings
    pub timeline: TimelineConfig,

    /// Content generation settings
    #[cfg(feature = "ai")]
    pub ai: AiConfig,
}

/// Billing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// Payment term applied to new invoices
    pub default_term: PaymentTerm,

    /// Fuzzy payment-match tolerance, in currency units
    pub match_tolerance: f64,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self { default_term: PaymentTerm::Net30, match_tolerance: gates::AMOUNT_TOLERANCE }
    }
}

/// Timeline projection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Window width in days
    pub window_days: i64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self { window_days: timeline::DEFAULT_WINDOW_DAYS }
    }
}

/// Content generation settings.
#[cfg(feature = "ai")]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Whether generation is attempted at all; when off, every generation
    /// request resolves to the per-kind default content
    pub enabled: bool,

    /// Model override for the Claude provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[cfg(feature = "ai")]
impl Default for AiConfig {
    fn default() -> Self {
        Self { enabled: true, model: None }
    }
}

impl EngineConfig {
    /// Build the configured content provider.
    ///
    /// Returns `None` when generation is disabled; the caller then resolves
    /// every generation request to the per-kind default content.
    #[cfg(feature = "ai")]
    pub fn content_provider(&self) -> anyhow::Result<Option<crate::genai::ClaudeProvider>> {
        if !self.ai.enabled {
            return Ok(None);
        }
        let provider = crate::genai::ClaudeProvider::new()?;
        Ok(Some(match &self.ai.model {
            Some(model) => provider.with_model(model),
            None => provider,
        }))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
