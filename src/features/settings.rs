//! Indicator style settings persistence
//!
//! Styles are stored as JSON. Any key that is missing falls back to its
//! default, and colors are kept as hex strings until a widget is built.

use std::path::{Path, PathBuf};

use iced::Size;
use serde::{Deserialize, Serialize};

use crate::ui::primitives::{Padding, PieConfig, RingConfig};
use crate::ui::theme;

/// Ring indicator style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingStyle {
    /// Label font size
    pub text_size: f32,
    /// Arc origin in degrees
    pub start_angle: f32,
    /// Ring thickness
    pub progress_bar_width: f32,
    /// Base gap between ring and inner disc
    pub inner_gap: f32,
    /// Progress shown before the first update (0 - 100)
    pub percent_completed: f32,
    pub inner_circle_color: String,
    pub progress_circle_color: String,
    pub text_color: String,
    /// Minimum edge length in pixels
    pub min_size: u32,
    /// Padding on every side in pixels
    pub padding: u32,
}

/// Pie indicator style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieStyle {
    pub text_size: f32,
    pub start_angle: f32,
    pub percent_completed: f32,
    pub background_circle_color: String,
    pub foreground_circle_color: String,
    pub text_color: String,
    pub min_size: u32,
    pub padding: u32,
}

/// Demo window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Edge length each indicator is measured to
    pub widget_size: u32,
    pub dark_mode: bool,
}

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ring: RingStyle,
    pub pie: PieStyle,
    pub demo: DemoSettings,
}

impl Default for RingStyle {
    fn default() -> Self {
        let config = RingConfig::default();
        Self {
            text_size: config.text_size,
            start_angle: config.start_angle,
            progress_bar_width: config.stroke_width,
            inner_gap: config.base_gap,
            percent_completed: config.initial_percent,
            inner_circle_color: config.track_color.to_string(),
            progress_circle_color: config.progress_color.to_string(),
            text_color: config.text_color.to_string(),
            min_size: 0,
            padding: 0,
        }
    }
}

impl Default for PieStyle {
    fn default() -> Self {
        let config = PieConfig::default();
        Self {
            text_size: config.text_size,
            start_angle: config.start_angle,
            percent_completed: config.initial_percent,
            background_circle_color: config.background_color.to_string(),
            foreground_circle_color: config.foreground_color.to_string(),
            text_color: config.text_color.to_string(),
            min_size: 0,
            padding: 0,
        }
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            widget_size: 240,
            dark_mode: true,
        }
    }
}

impl RingStyle {
    /// Build the widget configuration, replacing unparsable colors with defaults
    pub fn to_config(&self) -> RingConfig {
        let defaults = RingConfig::default();
        RingConfig {
            stroke_width: self.progress_bar_width,
            base_gap: self.inner_gap,
            start_angle: self.start_angle,
            text_size: self.text_size,
            track_color: theme::resolve(&self.inner_circle_color, defaults.track_color),
            progress_color: theme::resolve(&self.progress_circle_color, defaults.progress_color),
            text_color: theme::resolve(&self.text_color, defaults.text_color),
            initial_percent: self.percent_completed,
            min_size: Size::new(self.min_size, self.min_size),
            padding: Padding::uniform(self.padding),
        }
    }
}

impl PieStyle {
    pub fn to_config(&self) -> PieConfig {
        let defaults = PieConfig::default();
        PieConfig {
            start_angle: self.start_angle,
            text_size: self.text_size,
            background_color: theme::resolve(
                &self.background_circle_color,
                defaults.background_color,
            ),
            foreground_color: theme::resolve(
                &self.foreground_circle_color,
                defaults.foreground_color,
            ),
            text_color: theme::resolve(&self.text_color, defaults.text_color),
            initial_percent: self.percent_completed,
            min_size: Size::new(self.min_size, self.min_size),
            padding: Padding::uniform(self.padding),
        }
    }
}

impl Settings {
    /// `<config dir>/settings.json` for this platform
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "circle-progress", "CircleProgress")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Read the indicator styles, falling back to built-in styles
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("No config directory on this platform, using built-in styles");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Indicator styles read from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) => {
                tracing::debug!(
                    "No readable styles at {} ({}), using built-in styles",
                    path.display(),
                    e
                );
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Persist the current styles next to the platform config
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::file_path()
            .ok_or_else(|| SettingsError::Io("no config directory for indicator styles".into()))?;
        self.save_to_file(&path)?;
        tracing::info!("Indicator styles written to {}", path.display());
        Ok(())
    }

    /// Write pretty JSON, creating missing parent directories
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Why the style file could not be read or written
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// File system failure
    Io(String),
    /// Malformed JSON, or styles that cannot be serialized
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "style file unavailable: {}", e),
            SettingsError::Parse(e) => write!(f, "malformed style file: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Color;

    #[test]
    fn test_defaults_match_widget_defaults() {
        assert_eq!(RingStyle::default().to_config(), RingConfig::default());
        assert_eq!(PieStyle::default().to_config(), PieConfig::default());
    }

    #[test]
    fn test_missing_keys_fall_back() {
        let json = r##"{ "ring": { "progress_bar_width": 16.0, "progress_circle_color": "#ff0000" } }"##;
        let settings: Settings = serde_json::from_str(json).unwrap();

        let ring = settings.ring.to_config();
        assert_eq!(ring.stroke_width, 16.0);
        assert_eq!(ring.progress_color, Color::from_rgb8(255, 0, 0));
        assert_eq!(ring.start_angle, -90.0);
        assert_eq!(ring.text_size, 50.0);
        assert_eq!(settings.pie, PieStyle::default());
        assert_eq!(settings.demo, DemoSettings::default());
    }

    #[test]
    fn test_bad_color_falls_back() {
        let style = PieStyle {
            foreground_circle_color: "blue-ish".to_string(),
            ..PieStyle::default()
        };
        assert_eq!(style.to_config().foreground_color, Color::BLACK);
    }

    #[test]
    fn test_padding_and_min_size() {
        let style = RingStyle {
            min_size: 120,
            padding: 8,
            ..RingStyle::default()
        };
        let config = style.to_config();
        assert_eq!(config.min_size, Size::new(120, 120));
        assert_eq!(config.padding, Padding::uniform(8));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("circle-progress-test-{}", std::process::id()));
        let path = dir.join("settings.json");

        let mut settings = Settings::default();
        settings.pie.start_angle = 0.0;
        settings.demo.widget_size = 180;
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_errors() {
        let missing = Path::new("/definitely/not/here/settings.json");
        assert!(matches!(
            Settings::load_from_file(missing),
            Err(SettingsError::Io(_))
        ));

        let dir = std::env::temp_dir().join(format!("circle-progress-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_settings_error_display() {
        let io = SettingsError::Io("permission denied".to_string());
        assert_eq!(io.to_string(), "style file unavailable: permission denied");

        let parse = SettingsError::Parse("expected value at line 1".to_string());
        assert_eq!(
            parse.to_string(),
            "malformed style file: expected value at line 1"
        );
    }
}
