//! Application configuration resource.
//!
//! Window and asset settings loaded from an INI configuration file. Every key
//! is optional; missing keys keep their defaults. Simulation tuning (speeds,
//! thresholds, counts) is not configurable.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 800
//! target_fps = 60
//! vsync = true
//!
//! [assets]
//! textures = ./assets/textures
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::SimError;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 800;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_TEXTURES_DIR: &str = "./assets/textures";
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Application configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Ticks (and frames) per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Directory holding the bot face textures.
    pub textures_dir: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            textures_dir: PathBuf::from(DEFAULT_TEXTURES_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), SimError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|reason| SimError::Config {
                path: self.config_path.clone(),
                reason,
            })?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "textures") {
            self.textures_dir = PathBuf::from(dir);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, textures={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.textures_dir.display()
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
