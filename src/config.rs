//! Application configuration
//!
//! Each binary starts from its own built-in defaults, then layers an optional
//! `config/<program>.toml` file and `EXILE_`-prefixed environment variables on top.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Logical width; scenes lay themselves out in this coordinate space
    pub width: u32,
    /// Logical height
    pub height: u32,
    /// Whether the window starts fullscreen
    pub fullscreen: bool,
    /// Target frame rate of the render loop
    pub fps: u32,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Program name, also the stem of the optional config file
    pub program: String,
    /// Window configuration
    pub window: WindowConfig,
    /// Root directory for images and sounds
    pub assets_dir: PathBuf,
}

impl AppConfig {
    /// Defaults for the Game of Exile menu shell.
    pub fn game_of_exile() -> Self {
        Self {
            program: "game_of_exile".to_string(),
            window: WindowConfig {
                title: "Game of Exile".to_string(),
                width: 1920,
                height: 1080,
                fullscreen: false,
                fps: 60,
            },
            assets_dir: PathBuf::from("assets"),
        }
    }

    /// Defaults for the Catch the Square mini-game.
    pub fn catch_the_square() -> Self {
        Self {
            program: "catch_the_square".to_string(),
            window: WindowConfig {
                title: "Catch the Square".to_string(),
                width: 800,
                height: 600,
                fullscreen: false,
                fps: 60,
            },
            assets_dir: PathBuf::from("assets"),
        }
    }

    /// Layers configuration sources over `defaults`
    ///
    /// Sources are applied in the following order:
    /// 1. the provided defaults
    /// 2. config/{program}.toml (optional)
    /// 3. Environment variables with prefix EXILE_ (e.g., EXILE_WINDOW__FPS=30)
    pub fn load(defaults: Self) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(Config::try_from(&defaults)?)
            .add_source(File::with_name(&format!("config/{}", defaults.program)).required(false))
            .add_source(
                Environment::with_prefix("EXILE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Like [`AppConfig::load`], but falls back to `defaults` when any source is malformed.
    pub fn load_or_default(defaults: Self) -> Self {
        Self::load(defaults.clone()).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            defaults
        })
    }

    /// Path of the required menu background image.
    pub fn background_path(&self) -> PathBuf {
        self.assets_dir.join("images").join("background_menu.bmp")
    }

    /// Path of the optional hit sound.
    pub fn click_sound_path(&self) -> PathBuf {
        self.assets_dir.join("sounds").join("click.wav")
    }

    /// Time budget of one frame at the configured frame rate.
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.window.fps.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_defaults_match_the_full_hd_layout() {
        let config = AppConfig::game_of_exile();
        assert_eq!((config.window.width, config.window.height), (1920, 1080));
        assert_eq!(config.window.fps, 60);
        assert!(!config.window.fullscreen);
    }

    #[test]
    fn asset_paths_are_resolved_under_assets_dir() {
        let mut config = AppConfig::catch_the_square();
        config.assets_dir = PathBuf::from("/opt/exile");
        assert_eq!(
            config.background_path(),
            PathBuf::from("/opt/exile/images/background_menu.bmp")
        );
        assert_eq!(
            config.click_sound_path(),
            PathBuf::from("/opt/exile/sounds/click.wav")
        );
    }

    #[test]
    fn frame_duration_never_divides_by_zero() {
        let mut config = AppConfig::catch_the_square();
        config.window.fps = 0;
        assert_eq!(config.frame_duration(), std::time::Duration::from_secs(1));
    }

    #[test]
    fn load_without_file_keeps_defaults() {
        let defaults = AppConfig {
            program: "exile_config_test_without_file".to_string(),
            ..AppConfig::catch_the_square()
        };
        let loaded = AppConfig::load_or_default(defaults.clone());
        assert_eq!(loaded.window.title, defaults.window.title);
        assert_eq!(loaded.window.width, defaults.window.width);
    }

    #[test]
    fn environment_overrides_nested_window_fields() {
        let defaults = AppConfig {
            program: "exile_config_test_env".to_string(),
            ..AppConfig::catch_the_square()
        };
        // SAFETY: no other test sets this variable or asserts on the fps it overrides.
        unsafe { std::env::set_var("EXILE_WINDOW__FPS", "30") };
        let loaded = AppConfig::load(defaults.clone());
        unsafe { std::env::remove_var("EXILE_WINDOW__FPS") };

        let loaded = loaded.expect("config loads");
        assert_eq!(loaded.window.fps, 30);
        assert_eq!(loaded.window.width, defaults.window.width);
    }
}
