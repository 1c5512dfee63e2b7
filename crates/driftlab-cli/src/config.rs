//! Front-end configuration

use driftlab_core::{CompressionLevel, RiskProfile, RunConfig};
use driftlab_pipeline::SimulatorSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Settings file contents
///
/// ```yaml
/// defaults:
///   risk_profile: high
///   compression_level: aggressive
/// drift:
///   aggressive_limit: 150
/// classifier:
///   keywords: ["must", "never", "keep"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Run configuration used when no flag overrides it
    #[serde(default)]
    pub defaults: RunConfig,

    /// Classifier and pipeline settings
    #[serde(flatten)]
    pub simulator: SimulatorSettings,
}

impl AppConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(
        config_path: &Path,
        risk: Option<RiskProfile>,
        compression: Option<CompressionLevel>,
    ) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            debug!(path = %config_path.display(), "No settings file, using defaults");
            Self::default()
        };

        // Apply CLI overrides
        if let Some(risk) = risk {
            config.defaults.risk_profile = risk;
        }

        if let Some(compression) = compression {
            config.defaults.compression_level = compression;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/driftlab.yaml"), None, None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_file_and_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "defaults:\n  risk_profile: high\n  compression_level: aggressive\ndrift:\n  aggressive_limit: 150"
        )
        .unwrap();

        let config = AppConfig::load(file.path(), None, None).unwrap();
        assert_eq!(config.defaults.risk_profile, RiskProfile::High);
        assert_eq!(config.defaults.compression_level, CompressionLevel::Aggressive);
        assert_eq!(config.simulator.drift.aggressive_limit, 150);
        assert_eq!(config.simulator.drift.light_limit, 320);

        let config =
            AppConfig::load(file.path(), Some(RiskProfile::Normal), Some(CompressionLevel::Light))
                .unwrap();
        assert_eq!(config.defaults.risk_profile, RiskProfile::Normal);
        assert_eq!(config.defaults.compression_level, CompressionLevel::Light);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "defaults:\n  risk_profile: extreme").unwrap();

        assert!(AppConfig::load(file.path(), None, None).is_err());
    }
}
