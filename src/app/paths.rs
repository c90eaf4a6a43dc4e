// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! Two directories matter to the application: the config directory holding
//! `settings.toml`, and the library directory that the picker starts in and
//! the media index scans.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--library-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`GEO_LENS_LIBRARY_DIR`, `GEO_LENS_CONFIG_DIR`)
//! 4. **Config file** - `[library] directory` (library only)
//! 5. **Platform default** - via `dirs` crate
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.library_dir, flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "GeoLens";

/// Environment variable to override the library directory.
pub const ENV_LIBRARY_DIR: &str = "GEO_LENS_LIBRARY_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "GEO_LENS_CONFIG_DIR";

/// Global CLI override for library directory (set once at startup).
static CLI_LIBRARY_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for library and config directories.
///
/// Later calls are ignored; the first values win.
pub fn init_cli_overrides(library_dir: Option<String>, config_dir: Option<String>) {
    if CLI_LIBRARY_DIR.set(library_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        log::warn!("CLI path overrides already initialized");
    }
}

fn get_cli_library_dir() -> Option<PathBuf> {
    CLI_LIBRARY_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the media library directory.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`)
/// 2. CLI argument `--library-dir`
/// 3. `GEO_LENS_LIBRARY_DIR` environment variable (if set and non-empty)
/// 4. `configured` value from `settings.toml`
/// 5. The user's pictures directory (`~/Pictures` when the platform has none)
pub fn get_library_dir_with_override(
    override_path: Option<PathBuf>,
    configured: Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or_else(get_cli_library_dir)
        .or_else(|| non_empty_env(ENV_LIBRARY_DIR))
        .or(configured)
        .or_else(dirs::picture_dir)
        .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
}

/// Returns the application config directory path.
///
/// # Resolution Order
///
/// 1. CLI argument `--config-dir` (if set via [`init_cli_overrides`])
/// 2. `GEO_LENS_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory:
///    - Linux: `~/.config/GeoLens/`
///    - macOS: `~/Library/Application Support/GeoLens/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\GeoLens\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
