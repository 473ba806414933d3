//! Settings command module
//!
//! Handles application settings persistence.

use crate::shared::error::AppResult;
use crate::shared::settings::AppSettings;

/// Get current application settings
pub fn get_settings() -> AppResult<AppSettings> {
    AppSettings::load()
}

/// Save application settings
pub fn save_settings(settings: &AppSettings) -> AppResult<()> {
    settings.save_to(&AppSettings::get_settings_path()?)
}
