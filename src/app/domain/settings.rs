use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app::infrastructure::error::AppError;

/// Font used by the display for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSetting {
    pub family: String,
    pub size: u32,
}

impl Default for FontSetting {
    fn default() -> Self {
        Self {
            family: default_font_family(),
            size: default_font_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_auto_save_enabled")]
    pub auto_save_enabled: bool,

    /// Seconds between auto-save ticks
    #[serde(default = "default_auto_save_interval_secs")]
    pub auto_save_interval_secs: u64,

    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Height of one exported text line, in millimetres
    #[serde(default = "default_pdf_line_height_mm")]
    pub pdf_line_height_mm: f32,

    #[serde(default = "default_pdf_font_size")]
    pub pdf_font_size: f32,
}

fn default_auto_save_enabled() -> bool {
    true
}

fn default_auto_save_interval_secs() -> u64 {
    300
}

fn default_font_family() -> String {
    "Helvetica".to_string()
}

fn default_font_size() -> u32 {
    14
}

fn default_pdf_line_height_mm() -> f32 {
    10.0
}

fn default_pdf_font_size() -> f32 {
    12.0
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            auto_save_enabled: default_auto_save_enabled(),
            auto_save_interval_secs: default_auto_save_interval_secs(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            pdf_line_height_mm: default_pdf_line_height_mm(),
            pdf_font_size: default_pdf_font_size(),
        }
    }
}

impl AppSettings {
    /// Auto-save period, never shorter than one second.
    pub fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(self.auto_save_interval_secs.max(1))
    }

    pub fn default_font(&self) -> FontSetting {
        FontSetting {
            family: self.font_family.clone(),
            size: self.font_size,
        }
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        match Self::load_from(&config_path) {
            Ok(settings) => settings,
            Err(AppError::Io { .. }) => {
                // File doesn't exist, use defaults and try to save them for next time
                let default = Self::default();
                let _ = default.save_to(&config_path);
                default
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| AppError::io(path, e))?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = config_dir();
        path.push("settings.json");
        path
    }
}

/// Per-user configuration directory for InkPad.
pub fn config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("inkpad");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert!(settings.auto_save_enabled);
        assert_eq!(settings.auto_save_interval_secs, 300);
        assert_eq!(settings.auto_save_interval(), Duration::from_secs(300));
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.pdf_line_height_mm, 10.0);
        assert_eq!(settings.default_font(), FontSetting::default());
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"auto_save_interval_secs": 60}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.auto_save_interval_secs, 60);
        assert!(settings.auto_save_enabled);
        assert_eq!(settings.font_family, "Helvetica");
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let settings = AppSettings {
            auto_save_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(settings.auto_save_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            auto_save_enabled: false,
            font_size: 20,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(AppSettings::load_from(&path), Err(AppError::Json(_))));
    }
}
