//! Runtime configuration for null object generation.
//!
//! A registry owns one `StandinConfig`; every type it declares, including
//! types synthesized for nested associations, inherits that config.

use crate::error::ConfigError;
use serde::Deserialize;

/// Suffix appended to a target model name when naming nested types.
pub const DEFAULT_TYPE_SUFFIX: &str = "NullObject";

///
/// StandinConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StandinConfig {
    /// What a classified attribute with no synthesizable default answers.
    pub decline: DeclinePolicy,

    /// Suffix for nested type names (`Customer` + suffix).
    pub type_suffix: String,

    /// Record resolution events in the metrics sink.
    pub metrics: bool,
}

impl StandinConfig {
    /// Parse a config from a TOML document and validate it.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    #[must_use]
    pub const fn with_decline(mut self, decline: DeclinePolicy) -> Self {
        self.decline = decline;
        self
    }

    #[must_use]
    pub fn with_type_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.type_suffix = suffix.into();
        self
    }

    #[must_use]
    pub const fn with_metrics(mut self, enabled: bool) -> Self {
        self.metrics = enabled;
        self
    }

    /// Check that nested type names built from this config stay valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let suffix_ok = self
            .type_suffix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

        if suffix_ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidTypeSuffix(self.type_suffix.clone()))
        }
    }
}

impl Default for StandinConfig {
    fn default() -> Self {
        Self {
            decline: DeclinePolicy::default(),
            type_suffix: DEFAULT_TYPE_SUFFIX.to_string(),
            metrics: true,
        }
    }
}

///
/// DeclinePolicy
///
/// Outcome for a recognised column or association whose default cannot be
/// synthesized (nullable foreign key, has-one, no schema default).
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DeclinePolicy {
    /// Answer with an absent value.
    Absent,

    /// Raise the same undefined-member error a real record would.
    #[default]
    Undefined,
}
