// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[locator]` - Location strategy and permission prompt
//! - `[picker]` - Options passed to the image picker
//! - `[library]` - Media library directory
//! - `[display]` - Thumbnail size and metadata panel
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `GEO_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use geo_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::locator::LocatorKind;
use crate::application::port::{ContentType, PickOptions};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable that overrides `[locator] kind`.
pub const ENV_LOCATOR: &str = "GEO_LENS_LOCATOR";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Location strategy settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocatorConfig {
    /// Where coordinates come from: `"exif"` or `"library"`.
    #[serde(default)]
    pub kind: LocatorKind,

    /// Ask for confirmation before the media library is opened.
    #[serde(
        default = "default_ask_permission",
        skip_serializing_if = "Option::is_none"
    )]
    pub ask_permission: Option<bool>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            kind: LocatorKind::default(),
            ask_permission: default_ask_permission(),
        }
    }
}

/// Image picker settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickerConfig {
    /// Requested quality (0.0 to 1.0).
    #[serde(default = "default_quality", skip_serializing_if = "Option::is_none")]
    pub quality: Option<f32>,

    /// Offer an editing step after selection.
    #[serde(
        default = "default_allow_editing",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_editing: Option<bool>,

    /// Return EXIF metadata with the selection.
    #[serde(
        default = "default_include_metadata",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_metadata: Option<bool>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            allow_editing: default_allow_editing(),
            include_metadata: default_include_metadata(),
        }
    }
}

/// Media library settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LibraryConfig {
    /// Library directory. Defaults to the user's pictures directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Show the raw asset metadata below the location line.
    #[serde(
        default = "default_show_metadata_dump",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_metadata_dump: Option<bool>,

    /// Thumbnail edge length in logical pixels.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<u32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_metadata_dump: default_show_metadata_dump(),
            thumbnail_size: default_thumbnail_size(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub locator: LocatorConfig,

    #[serde(default)]
    pub picker: PickerConfig,

    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Picker options derived from the `[picker]` section.
    ///
    /// Missing values fall back to defaults and quality is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn pick_options(&self) -> PickOptions {
        PickOptions {
            content_type: ContentType::Images,
            allow_editing: self.picker.allow_editing.unwrap_or(DEFAULT_ALLOW_EDITING),
            quality: self.picker.quality.unwrap_or(DEFAULT_PICKER_QUALITY),
            include_metadata: self
                .picker
                .include_metadata
                .unwrap_or(DEFAULT_INCLUDE_METADATA),
        }
        .normalized()
    }

    /// Strategy to use, honoring `override_kind` (CLI) and then `GEO_LENS_LOCATOR`.
    ///
    /// An unparsable environment value is logged and ignored.
    #[must_use]
    pub fn locator_kind(&self, override_kind: Option<LocatorKind>) -> LocatorKind {
        if let Some(kind) = override_kind {
            return kind;
        }
        if let Ok(raw) = std::env::var(ENV_LOCATOR) {
            if !raw.is_empty() {
                match raw.parse() {
                    Ok(kind) => return kind,
                    Err(err) => log::warn!("Ignoring {ENV_LOCATOR}: {err}"),
                }
            }
        }
        self.locator.kind
    }

    #[must_use]
    pub fn ask_permission(&self) -> bool {
        self.locator.ask_permission.unwrap_or(DEFAULT_ASK_PERMISSION)
    }

    #[must_use]
    pub fn show_metadata_dump(&self) -> bool {
        self.display
            .show_metadata_dump
            .unwrap_or(DEFAULT_SHOW_METADATA_DUMP)
    }

    /// Thumbnail edge, clamped to the accepted range.
    #[must_use]
    pub fn thumbnail_size(&self) -> u32 {
        self.display
            .thumbnail_size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_ask_permission() -> Option<bool> {
    Some(DEFAULT_ASK_PERMISSION)
}

fn default_quality() -> Option<f32> {
    Some(DEFAULT_PICKER_QUALITY)
}

fn default_allow_editing() -> Option<bool> {
    Some(DEFAULT_ALLOW_EDITING)
}

fn default_include_metadata() -> Option<bool> {
    Some(DEFAULT_INCLUDE_METADATA)
}

fn default_show_metadata_dump() -> Option<bool> {
    Some(DEFAULT_SHOW_METADATA_DUMP)
}

fn default_thumbnail_size() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning message.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Failed to load {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;
    use tempfile::tempdir;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.locator.kind, LocatorKind::Exif);
        assert!(config.ask_permission());
        assert_eq!(config.picker.quality, Some(DEFAULT_PICKER_QUALITY));
        assert_eq!(config.picker.allow_editing, Some(false));
        assert_eq!(config.picker.include_metadata, Some(true));
        assert_eq!(config.library.directory, None);
        assert!(!config.show_metadata_dump());
        assert_eq!(config.thumbnail_size(), 200);
    }

    #[test]
    fn default_pick_options_match_the_locate_flow() {
        let options = Config::default().pick_options();
        assert_eq!(options.content_type, ContentType::Images);
        assert!(!options.allow_editing);
        assert_eq!(options.quality, 1.0);
        assert!(options.include_metadata);
    }

    #[test]
    fn pick_options_clamp_quality() {
        let config = Config {
            picker: PickerConfig {
                quality: Some(3.5),
                ..PickerConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.pick_options().quality, 1.0);
    }

    #[test]
    fn thumbnail_size_is_clamped() {
        let config = Config {
            display: DisplayConfig {
                thumbnail_size: Some(4),
                ..DisplayConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.thumbnail_size(), MIN_THUMBNAIL_SIZE);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            locator: LocatorConfig {
                kind: LocatorKind::Library,
                ask_permission: Some(false),
            },
            picker: PickerConfig {
                quality: Some(0.5),
                allow_editing: Some(true),
                include_metadata: Some(false),
            },
            library: LibraryConfig {
                directory: Some(PathBuf::from("/photos")),
            },
            display: DisplayConfig {
                show_metadata_dump: Some(true),
                thumbnail_size: Some(320),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_locator_kind_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[locator]\nkind = \"satellite\"\n").expect("write file");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn import_locator_kind_loads() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[locator]\nkind = \"import\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("should load config");
        assert_eq!(loaded.locator.kind, LocatorKind::Import);
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[locator]
kind = "library"

[display]
show_metadata_dump = true
"#,
        )
        .expect("write file");

        let loaded = load_from_path(&config_path).expect("should load partial config");
        assert_eq!(loaded.locator.kind, LocatorKind::Library);
        assert!(loaded.ask_permission());
        assert!(loaded.show_metadata_dump());
        assert_eq!(loaded.thumbnail_size(), DEFAULT_THUMBNAIL_SIZE);
        assert_eq!(loaded.picker, PickerConfig::default());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");
        let content = fs::read_to_string(&config_path).expect("read config");

        assert!(content.contains("[locator]"), "should have [locator] section");
        assert!(content.contains("[picker]"), "should have [picker] section");
        assert!(content.contains("[display]"), "should have [display] section");
        assert!(content.contains("kind = \"exif\""));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("nested").join("deeply");
        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language, Some("de".to_string()));
    }

    #[test]
    fn locator_kind_prefers_cli_then_env_then_file() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let config = Config::default();

        std::env::set_var(ENV_LOCATOR, "library");
        assert_eq!(config.locator_kind(None), LocatorKind::Library);
        assert_eq!(
            config.locator_kind(Some(LocatorKind::Exif)),
            LocatorKind::Exif
        );

        std::env::set_var(ENV_LOCATOR, "bogus");
        assert_eq!(config.locator_kind(None), LocatorKind::Exif);

        std::env::remove_var(ENV_LOCATOR);
        assert_eq!(config.locator_kind(None), LocatorKind::Exif);
    }
}
