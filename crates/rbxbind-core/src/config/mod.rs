mod generator;
mod paths;

pub use generator::GeneratorConfig;
pub use paths::{InputConfig, OutputConfig};

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BindError, Result};

/// Root configuration for rbxbind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindConfig {
    /// Where the API dump and documentation payloads are read from.
    #[serde(default)]
    pub input: InputConfig,

    /// Where generated artifacts are written.
    #[serde(default)]
    pub output: OutputConfig,

    /// Declaration generator settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl BindConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| BindError::Config(format!("Failed to read config file: {}", e)))?;

        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let content = substitute_env_vars(content);

        toml::from_str(&content)
            .map_err(|e| BindError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Serialize the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| BindError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check settings that would produce uncompilable output.
    pub fn validate(&self) -> Result<()> {
        let generator = &self.generator;
        for (field, value) in [
            ("generator.namespace", &generator.namespace),
            ("generator.elevated_namespace", &generator.elevated_namespace),
            ("generator.root_type", &generator.root_type),
        ] {
            if value.trim().is_empty() {
                return Err(BindError::InvalidArgument(format!("{} must not be empty", field)));
            }
        }

        if generator.elevated && generator.extension_suffix.is_empty() {
            return Err(BindError::InvalidArgument(
                "generator.extension_suffix must not be empty when the elevated tier is enabled"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

static ENV_VAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is valid")
});

/// Substitute environment variables in the format ${VAR_NAME}.
fn substitute_env_vars(content: &str) -> String {
    let mut result = content.to_string();

    for cap in ENV_VAR.captures_iter(content) {
        let var_name = &cap[1];
        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BindConfig::default();
        assert_eq!(config.generator.namespace, "Roblox");
        assert_eq!(config.generator.root_type, "Instance");
        assert_eq!(config.output.classes_file, "Classes.cs");
        assert!(config.generator.elevated);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = BindConfig::parse_toml("").unwrap();
        assert_eq!(config.input.dump, "api-dump.json");
        assert_eq!(config.generator.extension_suffix, "Plugin");
        assert!(config.generator.is_hand_authored("DataModel"));
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [input]
            dump = "cache/Mini-API-Dump.json"
            docs = "cache/en-us.json"

            [output]
            dir = "out"

            [generator]
            namespace = "Engine"
            extension_suffix = "Elevated"
            elevated = false
            hand_authored = ["Instance"]
        "#;

        let config = BindConfig::parse_toml(toml).unwrap();
        assert_eq!(config.input.dump, "cache/Mini-API-Dump.json");
        assert_eq!(config.input.docs.as_deref(), Some("cache/en-us.json"));
        assert_eq!(config.output.dir, "out");
        assert_eq!(config.output.enums_file, "Enums.cs");
        assert_eq!(config.generator.namespace, "Engine");
        assert_eq!(config.generator.extension_suffix, "Elevated");
        assert!(!config.generator.elevated);
        assert!(!config.generator.is_hand_authored("DataModel"));
    }

    #[test]
    fn test_to_toml_round_trips_defaults() {
        let text = BindConfig::default().to_toml().unwrap();
        let config = BindConfig::parse_toml(&text).unwrap();
        assert_eq!(config.generator.root_sentinel, "<<<ROOT>>>");
        assert_eq!(
            config.generator.hand_authored.len(),
            BindConfig::default().generator.hand_authored.len()
        );
    }

    #[test]
    fn test_validate() {
        assert!(BindConfig::default().validate().is_ok());

        let mut config = BindConfig::default();
        config.generator.namespace = " ".to_string();
        assert!(matches!(config.validate(), Err(BindError::InvalidArgument(_))));

        let mut config = BindConfig::default();
        config.generator.extension_suffix.clear();
        assert!(config.validate().is_err());
        config.generator.elevated = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RBXBIND_TEST_DUMP", "/tmp/dump.json");

        let toml = r#"
            [input]
            dump = "${RBXBIND_TEST_DUMP}"
        "#;

        let config = BindConfig::parse_toml(toml).unwrap();
        assert_eq!(config.input.dump, "/tmp/dump.json");

        std::env::remove_var("RBXBIND_TEST_DUMP");
    }
}
