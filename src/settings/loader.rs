use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{SettingsError, types::Settings};

/// Settings file read when no path is given
pub const DEFAULT_SETTINGS_FILE: &str = "descrambler.toml";

/// Prefix for environment overrides, e.g. `DESCRAMBLER_SEARCH__NUM_THREADS=8`
pub const ENV_PREFIX: &str = "DESCRAMBLER_";

/// Load settings from file with environment variable overrides
///
/// An explicit `path` must exist. Without one, [`DEFAULT_SETTINGS_FILE`] is used
/// if present and built-in defaults otherwise.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match path {
        Some(path) if !path.exists() => {
            return Err(SettingsError::FileNotFound(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(DEFAULT_SETTINGS_FILE),
    };

    debug!(path = %path.display(), "loading settings");

    Figment::from(Serialized::defaults(Settings::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| SettingsError::ParseError(e.to_string()))
}

/// Load settings from a TOML string (useful for testing)
pub fn load_settings_from_str(toml_str: &str) -> Result<Settings, SettingsError> {
    toml::from_str(toml_str).map_err(|e| SettingsError::ParseError(e.to_string()))
}
