//! Configuration management for stub generation
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (typestub.toml)
//! - Environment variables (TYPESTUB__*)
//!
//! ## Example config file (typestub.toml):
//! ```toml
//! [[scalars]]
//! name = "DateTime"
//! type = "datetime"
//! import = "datetime"
//!
//! [naming]
//! acronyms = ["ID", "URL"]
//!
//! [render]
//! optional = "Optional"
//! list = "List"
//! union = "Union"
//! ```

use std::path::Path;

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::codegen::{CustomScalarMap, NamingConfig, RenderProfile};
use crate::error::Result;

/// Main configuration for a generation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Custom scalar name -> target type
    #[serde(default)]
    pub scalars: CustomScalarMap,

    /// Naming settings
    #[serde(default)]
    pub naming: NamingConfig,

    /// Rendering settings
    #[serde(default)]
    pub render: RenderProfile,
}

impl GeneratorConfig {
    /// Load configuration from default locations
    pub fn load() -> std::result::Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, adding a required file on top of the defaults
    pub fn load_from(config_path: Option<&Path>) -> std::result::Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["typestub.toml", ".typestub.toml", "config/typestub.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "typestub", "typestub") {
            let xdg_config = config_dir.config_dir().join("typestub.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("TYPESTUB")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let loaded: Self = config.try_deserialize()?;
        tracing::debug!(scalars = loaded.scalars.len(), "loaded generator config");
        Ok(loaded)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::ScalarData;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert!(config.scalars.is_empty());
        assert_eq!(config.render, RenderProfile::python());
    }

    #[test]
    fn test_serialize_config() {
        let config = GeneratorConfig {
            scalars: [("DateTime", ScalarData::new("datetime"))].into_iter().collect(),
            ..GeneratorConfig::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[[scalars]]"));
        assert!(toml_str.contains("name = \"DateTime\""));
        assert!(toml_str.contains("[render]"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            r#"
            [[scalars]]
            name = "DateTime"
            type = "MyDate"

            [render]
            optional = "Maybe"
            "#,
        )
        .unwrap();

        let config = GeneratorConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.scalars.get("DateTime").unwrap().type_name, "MyDate");
        assert_eq!(config.render.optional, "Maybe");
        assert_eq!(config.render.list, "List");
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");
        let config = GeneratorConfig {
            scalars: [("Upload", ScalarData::new("File").with_import("io"))].into_iter().collect(),
            render: RenderProfile::rust(),
            ..GeneratorConfig::default()
        };
        config.save(&path).unwrap();

        let loaded = GeneratorConfig::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.scalars, config.scalars);
        assert_eq!(loaded.render, config.render);
    }
}
