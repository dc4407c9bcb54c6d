//! Settings file support
//!
//! TOML settings with environment overrides, converted into the option types the
//! search, display and runtime layers consume.

mod loader;
mod types;

pub use loader::{DEFAULT_SETTINGS_FILE, ENV_PREFIX, load_settings, load_settings_from_str};
pub use types::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse settings: {0}")]
    ParseError(String),

    #[error("Settings validation failed: {0}")]
    ValidationError(String),
}

/// Validate settings
/// Currently validates:
/// - At least one search thread
/// - The column layout, when columns are enabled
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings.search.num_threads == 0 {
        return Err(SettingsError::ValidationError(
            "search.num_threads cannot be 0".to_string(),
        ));
    }

    settings
        .render_options()
        .validate()
        .map_err(|e| SettingsError::ValidationError(e.to_string()))
}
