//! # Extension Configuration
//!
//! Per-invocation settings for the export and import hooks. Missing fields
//! in a config file fall back to their defaults.

use serde::{Deserialize, Serialize};

use super::Config;
use crate::foundation::coordinates::CoordinateConverter;

/// # Export Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Include the extension in the exported file
    pub enabled: bool,
    /// Target file is Y-up (the host is Z-up)
    pub y_up: bool,
    /// Compute mesh centers in world space instead of object space
    pub world_space_mesh_center: bool,
}

impl ExportConfig {
    /// Create a new export configuration with defaults
    pub fn new() -> Self {
        Self {
            enabled: true,
            y_up: true,
            world_space_mesh_center: false,
        }
    }

    /// Enable or disable the extension
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the target axis convention
    pub fn with_y_up(mut self, y_up: bool) -> Self {
        self.y_up = y_up;
        self
    }

    /// Compute mesh centers in world space
    pub fn with_world_space_mesh_center(mut self, enabled: bool) -> Self {
        self.world_space_mesh_center = enabled;
        self
    }

    /// Converter from host to file convention
    pub fn converter(&self) -> CoordinateConverter {
        CoordinateConverter::for_export(self.y_up)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Import Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Run the extension while importing
    pub enabled: bool,
    /// Source file is Y-up (the host is Z-up)
    pub y_up: bool,
}

impl ImportConfig {
    /// Create a new import configuration with defaults
    pub fn new() -> Self {
        Self {
            enabled: true,
            y_up: true,
        }
    }

    /// Enable or disable the extension
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the source axis convention
    pub fn with_y_up(mut self, y_up: bool) -> Self {
        self.y_up = y_up;
        self
    }

    /// Converter from file to host convention
    pub fn converter(&self) -> CoordinateConverter {
        CoordinateConverter::for_import(self.y_up)
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Extension Configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Export hook settings
    pub export: ExportConfig,
    /// Import hook settings
    pub import: ImportConfig,
}

impl Config for ExtensionConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtensionConfig::default();
        assert!(config.export.enabled);
        assert!(config.export.y_up);
        assert!(!config.export.world_space_mesh_center);
        assert!(config.import.enabled);
        assert_eq!(config.export.converter().to(), crate::foundation::coordinates::CoordinateSystem::YUpRightHanded);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ExtensionConfig = toml::from_str("[export]\ny_up = false\n").unwrap();
        assert!(!config.export.y_up);
        assert!(config.export.enabled);
        assert_eq!(config.import, ImportConfig::default());
        assert!(config.export.converter().is_identity());
    }

    #[test]
    fn test_ron_config() {
        let config: ExtensionConfig =
            ron::from_str("(export: (enabled: false, world_space_mesh_center: true), import: (y_up: false))").unwrap();
        assert!(!config.export.enabled);
        assert!(config.export.world_space_mesh_center);
        assert!(!config.import.y_up);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = ExtensionConfig::load_from_file("collider.yaml");
        assert!(matches!(result, Err(crate::config::ConfigError::UnsupportedFormat(_))));
    }
}
