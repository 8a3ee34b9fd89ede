//! # Configuration
//!
//! Editor behavior knobs are loaded with [`confique`], layering sources in priority
//! order:
//!
//! 1. **Environment variables**: `OUTLINER_COPY_SUFFIX`, `OUTLINER_SELECT_CREATED`,
//!    `OUTLINER_ID_PREFIX`.
//! 2. **TOML file**: whatever path the host passes to [`OutlineConfig::load`]. A
//!    missing file is not an error.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `copy_suffix` | `" (Copy)"` | Appended to the root title of a duplicated subtree |
//! | `select_created` | `true` | Select nodes created by add, duplicate and paste |
//! | `id_prefix` | unset | Prefix for generated node ids |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::commands::duplicate::DEFAULT_COPY_SUFFIX;
use crate::error::Result;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutlineConfig {
    /// Appended to the title of a duplicated subtree's root.
    #[config(default = " (Copy)", env = "OUTLINER_COPY_SUFFIX")]
    pub copy_suffix: String,

    /// Whether nodes created by add, duplicate and paste become selected.
    #[config(default = true, env = "OUTLINER_SELECT_CREATED")]
    pub select_created: bool,

    /// Optional prefix for generated node ids (e.g. "sec").
    #[config(env = "OUTLINER_ID_PREFIX")]
    pub id_prefix: Option<String>,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            copy_suffix: DEFAULT_COPY_SUFFIX.to_string(),
            select_created: true,
            id_prefix: None,
        }
    }
}

impl OutlineConfig {
    /// Loads env over the optional TOML file over defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = OutlineConfig::default();
        assert_eq!(config.copy_suffix, " (Copy)");
        assert!(config.select_created);
        assert_eq!(config.id_prefix, None);
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outliner.toml");
        fs::write(&path, "copy_suffix = \" copy\"\nselect_created = false\n").unwrap();

        let config = OutlineConfig::load(Some(&path)).unwrap();
        assert_eq!(config.copy_suffix, " copy");
        assert!(!config.select_created);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutlineConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.copy_suffix, OutlineConfig::default().copy_suffix);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outliner.toml");
        fs::write(&path, "select_created = \"maybe\"\n").unwrap();

        let err = OutlineConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, crate::error::OutlineError::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = OutlineConfig {
            copy_suffix: " (2)".to_string(),
            select_created: false,
            id_prefix: Some("sec".to_string()),
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: OutlineConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, parsed);
    }
}
