use crate::domain::Version;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "labeller.toml";

/// File name looked up in the user configuration directory
pub const USER_CONFIG_FILE: &str = "semver-labeller.toml";

/// Configuration for the version labeller.
///
/// The seed components only apply when the previous label cannot be
/// parsed. Keys may be written in snake_case or camelCase.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LabellerConfig {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub revision: u32,

    /// Modulus for the change number; `<= 0` means 10000
    #[serde(alias = "revisionModulus")]
    pub revision_modulus: i32,

    #[serde(alias = "majorLabelFormat", skip_serializing_if = "Option::is_none")]
    pub major_label_format: Option<String>,

    #[serde(alias = "minorLabelFormat", skip_serializing_if = "Option::is_none")]
    pub minor_label_format: Option<String>,

    #[serde(alias = "patchLabelFormat", skip_serializing_if = "Option::is_none")]
    pub patch_label_format: Option<String>,

    #[serde(alias = "revisionLabelFormat", skip_serializing_if = "Option::is_none")]
    pub revision_label_format: Option<String>,
}

impl LabellerConfig {
    /// Version used when no previous label can be parsed
    pub fn baseline(&self) -> Version {
        Version::new(self.major, self.minor, self.patch, self.revision)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `labeller.toml` in current directory
/// 3. `semver-labeller.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(LabellerConfig)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<LabellerConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(LabellerConfig::default());
        }
    } else {
        return Ok(LabellerConfig::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<LabellerConfig> {
    let config: LabellerConfig = toml::from_str(content)?;
    tracing::debug!(?config, "loaded labeller configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LabellerConfig::default();
        assert_eq!(config.revision_modulus, 0);
        assert_eq!(config.baseline(), Version::new(0, 0, 0, 0));
        assert!(config.revision_label_format.is_none());
    }

    #[test]
    fn test_parse_snake_case() {
        let config = parse_config(
            r#"
major = 1
revision_modulus = 1000
revision_label_format = "0000"
"#,
        )
        .unwrap();
        assert_eq!(config.major, 1);
        assert_eq!(config.revision_modulus, 1000);
        assert_eq!(config.revision_label_format.as_deref(), Some("0000"));
    }

    #[test]
    fn test_parse_camel_case() {
        let config = parse_config(
            r#"
revisionModulus = 500
majorLabelFormat = "D2"
"#,
        )
        .unwrap();
        assert_eq!(config.revision_modulus, 500);
        assert_eq!(config.major_label_format.as_deref(), Some("D2"));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_config("").unwrap(), LabellerConfig::default());
    }

    #[test]
    fn test_parse_rejects_negative_seed() {
        assert!(parse_config("major = -1").is_err());
    }

    #[test]
    fn test_serialize_round_trip_skips_absent_formats() {
        let text = toml::to_string(&LabellerConfig::default()).unwrap();
        assert!(!text.contains("label_format"));
    }
}
