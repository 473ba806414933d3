use crate::core::convert::format::{DisplayLocale, NumberFormat, DEFAULT_FRACTION_DIGITS};
use crate::shared::error::{AppError, AppResult};
use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use ts_rs::TS;

/// Upper bound for displayed fraction digits; f64 carries ~15 significant digits
const MAX_FRACTION_DIGITS: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct AppSettings {
    pub site: SiteSettings,
    pub display: DisplaySettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SiteSettings {
    pub name: String,
    /// Site root used for canonical and og:url values; may carry a path prefix
    pub base_url: String,
    pub default_title: String,
    pub default_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct DisplaySettings {
    pub locale: DisplayLocale,
    pub max_fraction_digits: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct StorageSettings {
    /// Overrides the platform data directory for the ratings database
    pub data_dir: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: "MultiTools".to_string(),
            base_url: "https://multitools.vn".to_string(),
            default_title: "MultiTools - Công cụ tính toán và chuyển đổi online miễn phí"
                .to_string(),
            default_description:
                "Bộ công cụ online miễn phí: đổi đơn vị, tính phần trăm, BMI, lãi vay, tạo mật khẩu và nhiều tiện ích khác."
                    .to_string(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            locale: DisplayLocale::default(),
            max_fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "multitools", "multitools")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Io("Failed to determine config directory".to_string()))
    }

    /// Load from the platform config dir, writing defaults on first run
    pub fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;

        if !path.exists() {
            let settings = Self::default();
            settings.save_to(&path)?;
            info!("[Settings] Wrote defaults to {}", path.display());
            return Ok(settings);
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("Failed to read settings file: {}", e)))?;

        let mut settings: Self = serde_json::from_str(&content)
            .map_err(|e| AppError::Serialization(format!("Failed to parse settings: {}", e)))?;

        if settings.display.max_fraction_digits > MAX_FRACTION_DIGITS {
            warn!(
                "[Settings] max_fraction_digits {} clamped to {}",
                settings.display.max_fraction_digits, MAX_FRACTION_DIGITS
            );
            settings.display.max_fraction_digits = MAX_FRACTION_DIGITS;
        }
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| AppError::Io(format!("Failed to write settings file: {}", e)))
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::for_locale(self.display.locale, self.display.max_fraction_digits)
    }

    pub fn data_dir(&self) -> Option<PathBuf> {
        self.storage.data_dir.as_ref().map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut settings = AppSettings::default();
        settings.display.locale = DisplayLocale::En;
        settings.storage.data_dir = Some("/tmp/multitools".to_string());
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.number_format().decimal_separator, '.');
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "display": { "max_fraction_digits": 40 } }"#).unwrap();

        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded.site, SiteSettings::default());
        assert_eq!(loaded.display.locale, DisplayLocale::Vi);
        assert_eq!(loaded.display.max_fraction_digits, MAX_FRACTION_DIGITS);
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppSettings::load_from(&path), Err(AppError::Serialization(_))));
    }
}
