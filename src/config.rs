use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable the native binary reads a config path from
pub const CONFIG_ENV_VAR: &str = "STICKER_PAD_CONFIG";

/// Application settings.
///
/// Every field has a default, so a config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to their default values
pub struct AppConfig {
    /// Side length of the square on-screen canvas, in logical pixels
    pub canvas_size: f32,
    /// Multiplier applied to the canvas when exporting
    pub export_scale: f32,
    pub export_file_name: String,
    /// Directory the native build writes exports into
    pub export_dir: PathBuf,
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    /// Initial marker color as `#rrggbb` or `#rrggbbaa`
    pub default_color: String,
    /// Glyph height of placed stickers, in logical pixels
    pub sticker_size: f32,
    /// Initial sticker palette
    pub stickers: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_size: 256.0,
            export_scale: 4.0,
            export_file_name: "canvas_export.png".to_owned(),
            export_dir: PathBuf::from("."),
            thin_thickness: 2.0,
            thick_thickness: 6.0,
            default_color: "#000000".to_owned(),
            sticker_size: 32.0,
            stickers: vec![
                "⭐".to_owned(),
                "🎈".to_owned(),
                "🌮".to_owned(),
                "🐱".to_owned(),
            ],
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_size", self.canvas_size),
            ("export_scale", self.export_scale),
            ("thin_thickness", self.thin_thickness),
            ("thick_thickness", self.thick_thickness),
            ("sticker_size", self.sticker_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "export_file_name must not be empty".to_owned(),
            ));
        }

        self.default_color()?;
        Ok(())
    }

    /// The configured initial marker color
    pub fn default_color(&self) -> Result<Color32, ConfigError> {
        Color32::from_hex(&self.default_color).map_err(|err| {
            ConfigError::Invalid(format!(
                "default_color {:?} is not a hex color: {err:?}",
                self.default_color
            ))
        })
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], or the defaults when it is unset.
    /// A file that fails to load is logged and replaced by the defaults.
    pub fn from_env_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!(
                    "Ignoring config {}: {err}",
                    Path::new(&path).display()
                );
                Self::default()
            }
        }
    }

    /// Pixel dimensions of the exported image
    pub fn export_dimensions(&self) -> (u32, u32) {
        let side = (self.canvas_size * self.export_scale).round() as u32;
        (side, side)
    }
}
