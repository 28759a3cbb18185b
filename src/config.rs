// config.rs - Startup Settings
//
// Settings are read once at startup from `<config dir>/WorldClock/settings.json`.
// The file is optional and never written back; the app has no memory of what
// the user picked last time.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::app::FrontEnd;

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub front_end: FrontEnd,
    pub theme: ThemeMode,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            front_end: FrontEnd::default(),
            theme: ThemeMode::default(),
            window_width: 480,
            window_height: 640,
        }
    }
}

impl Settings {
    const FILE: &'static str = "settings.json";

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("WorldClock")
            .join(Self::FILE)
    }

    /// Load settings from the default location. Falls back to defaults if the
    /// file is missing or broken.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            info!("No settings file at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                info!("Settings loaded from {:?}", path);
                settings
            }
            Err(e) => {
                error!("{:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", path))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply command-line overrides (`--free-text`, `--countries`). The last
    /// flag wins.
    pub fn apply_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            match arg.as_ref() {
                "--free-text" | "-f" => self.front_end = FrontEnd::FreeText,
                "--countries" | "-c" => self.front_end = FrontEnd::Countries,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.front_end, FrontEnd::Countries);
        assert_eq!(settings.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_parse() {
        let settings = Settings::from_json(
            r#"{"front_end": "free_text", "theme": "light", "window_width": 800}"#,
        )
        .unwrap();
        assert_eq!(settings.front_end, FrontEnd::FreeText);
        assert_eq!(settings.theme, ThemeMode::Light);
        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.window_height, 640);
    }

    #[test]
    fn test_reject_bad_values() {
        assert!(Settings::from_json(r#"{"front_end": "radio"}"#).is_err());
        assert!(Settings::from_json(r#"{"last_location": "Europe/Paris"}"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/definitely/not/here/settings.json");
        let err = Settings::load_from(path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read settings file"));
    }

    #[test]
    fn test_args() {
        let mut settings = Settings::default();
        settings.apply_args(["worldclock", "--free-text"]);
        assert_eq!(settings.front_end, FrontEnd::FreeText);
        settings.apply_args(["--free-text", "-c"]);
        assert_eq!(settings.front_end, FrontEnd::Countries);
        settings.apply_args(["--verbose"]);
        assert_eq!(settings.front_end, FrontEnd::Countries);
    }
}
