//! Simulator settings
//!
//! Every field defaults to the built-in behavior, so an empty YAML document
//! is a valid configuration.

use driftlab_classifiers::ClassifierSettings;
use driftlab_core::{CompressionLevel, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::rule::{default_removal_rules, RemovalRule};

/// Words that make the high-risk safety stage reframe the task
pub const DEFAULT_SENSITIVE_WORDS: &[&str] = &["attack", "exploit", "bypass", "jailbreak", "hack"];

/// Settings for the drifting pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftSettings {
    /// Case-insensitive substrings flagged by the high-risk safety stage
    #[serde(default = "default_sensitive_words")]
    pub sensitive_words: Vec<String>,

    /// Instructions longer than this (in characters) are trimmed under high risk
    #[serde(default = "default_long_input_threshold")]
    pub long_input_threshold: usize,

    /// Characters kept when a long instruction has no core text
    #[serde(default = "default_safety_trim_chars")]
    pub safety_trim_chars: usize,

    /// Memory limit for light compression
    #[serde(default = "default_light_limit")]
    pub light_limit: usize,

    /// Memory limit for aggressive compression
    #[serde(default = "default_aggressive_limit")]
    pub aggressive_limit: usize,

    /// Ordered phrase removals of the reasoning stage
    #[serde(default = "default_removal_rules")]
    pub removal_rules: Vec<RemovalRule>,
}

impl DriftSettings {
    /// Memory limit for a compression level
    pub fn limit_for(&self, level: CompressionLevel) -> usize {
        match level {
            CompressionLevel::Light => self.light_limit,
            CompressionLevel::Aggressive => self.aggressive_limit,
        }
    }

    /// Reject settings the pipeline cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.light_limit == 0 {
            return Err(Error::config("drift.light_limit must be positive"));
        }
        if self.aggressive_limit == 0 {
            return Err(Error::config("drift.aggressive_limit must be positive"));
        }
        if self.safety_trim_chars == 0 {
            return Err(Error::config("drift.safety_trim_chars must be positive"));
        }
        if self.sensitive_words.iter().any(|w| w.is_empty()) {
            return Err(Error::config(
                "drift.sensitive_words must not contain empty words",
            ));
        }
        Ok(())
    }
}

impl Default for DriftSettings {
    fn default() -> Self {
        Self {
            sensitive_words: default_sensitive_words(),
            long_input_threshold: default_long_input_threshold(),
            safety_trim_chars: default_safety_trim_chars(),
            light_limit: default_light_limit(),
            aggressive_limit: default_aggressive_limit(),
            removal_rules: default_removal_rules(),
        }
    }
}

/// Settings for a whole simulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SimulatorSettings {
    /// Constraint classifier settings
    #[serde(default)]
    pub classifier: ClassifierSettings,

    /// Drifting pipeline settings
    #[serde(default)]
    pub drift: DriftSettings,
}

impl SimulatorSettings {
    /// Load settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

fn default_sensitive_words() -> Vec<String> {
    DEFAULT_SENSITIVE_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_long_input_threshold() -> usize {
    280
}

fn default_safety_trim_chars() -> usize {
    260
}

fn default_light_limit() -> usize {
    320
}

fn default_aggressive_limit() -> usize {
    200
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = DriftSettings::default();
        assert_eq!(settings.limit_for(CompressionLevel::Light), 320);
        assert_eq!(settings.limit_for(CompressionLevel::Aggressive), 200);
        assert_eq!(settings.long_input_threshold, 280);
        assert_eq!(settings.safety_trim_chars, 260);
        assert_eq!(settings.removal_rules.len(), 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let settings = SimulatorSettings::from_yaml("{}").unwrap();
        assert_eq!(settings, SimulatorSettings::default());
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let yaml = r#"
drift:
  aggressive_limit: 50
  sensitive_words: ["phish"]
classifier:
  keywords: ["bullet"]
"#;
        let settings = SimulatorSettings::from_yaml(yaml).unwrap();
        assert_eq!(settings.drift.aggressive_limit, 50);
        assert_eq!(settings.drift.light_limit, 320);
        assert_eq!(settings.drift.sensitive_words, vec!["phish"]);
        assert_eq!(settings.classifier.keywords, vec!["bullet"]);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            SimulatorSettings::from_yaml("drift: [1, 2"),
            Err(Error::Yaml(_))
        ));
    }

    #[test]
    fn test_validation() {
        let settings = DriftSettings {
            light_limit: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(Error::Config(_))));

        let settings = DriftSettings {
            sensitive_words: vec![String::new()],
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "drift:\n  light_limit: 40").unwrap();

        let settings = SimulatorSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.drift.light_limit, 40);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SimulatorSettings::from_file("/nonexistent/driftlab.yaml"),
            Err(Error::Io(_))
        ));
    }
}
