//! Generator configuration.
//!
//! Per Iron Lotus Framework: configuration is validated at load time
//! (Poka-Yoke), so a bad file fails before any trial runs.
//!
//! ```toml
//! probability = 0.25
//! exception_types = ["network", "database"]
//! seed = 42
//!
//! [custom_messages]
//! network = ["The internet is broken again!", "Network hamsters stopped running"]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::generator::DEFAULT_PROBABILITY;
use crate::kind::ChaosKind;

/// Serializable generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaosConfig {
    /// Per-trial probability in `[0, 1]`.
    #[serde(default = "default_probability")]
    pub probability: f64,

    /// Candidate kinds; all built-ins when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_types: Option<Vec<ChaosKind>>,

    /// Seed for reproducible runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Per-kind message overrides.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom_messages: HashMap<ChaosKind, Vec<String>>,
}

fn default_probability() -> f64 {
    DEFAULT_PROBABILITY
}

impl Default for ChaosConfig {
    fn default() -> Self {
        Self {
            probability: default_probability(),
            exception_types: None,
            seed: None,
            custom_messages: HashMap::new(),
        }
    }
}

impl ChaosConfig {
    /// Config with the given probability and defaults elsewhere.
    #[must_use]
    pub fn with_probability(probability: f64) -> Self {
        Self {
            probability,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_probability(self.probability)?;

        if self
            .exception_types
            .as_ref()
            .is_some_and(|kinds| kinds.is_empty())
        {
            return Err(ConfigError::NoCandidateKinds);
        }

        if let Some((kind, _)) = self
            .custom_messages
            .iter()
            .find(|(_, messages)| messages.is_empty())
        {
            return Err(ConfigError::EmptyMessages(kind.clone()));
        }

        Ok(())
    }

    /// Parses and validates TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded chaos config");
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
