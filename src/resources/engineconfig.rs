//! Engine configuration resource.
//!
//! Holds viewport size, frame pacing, background color, gravity and the debug
//! switch. Values start from safe defaults and can be overridden from an INI
//! file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [engine]
//! width = 800
//! height = 600
//! target_fps = 60
//! ; hex color, with or without the leading '#'
//! background_color = 1a1a2e
//! debug = false
//!
//! [physics]
//! gravity = 980
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::error::{EngineError, Result};

/// Default safe values for startup
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_BACKGROUND: &str = "#000000";
const DEFAULT_GRAVITY: f32 = 980.0;
const DEFAULT_DEBUG: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Engine configuration resource.
///
/// `gravity` is the single process-wide physics constant, in scene units per
/// second squared (positive pulls towards +y, i.e. down).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Frame pacing target used by the realtime driver.
    pub target_fps: u32,
    /// Color the surface is cleared to at the start of each frame.
    pub background_color: String,
    pub gravity: f32,
    /// Log frame statistics every 60 frames.
    pub debug: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            background_color: DEFAULT_BACKGROUND.to_string(),
            gravity: DEFAULT_GRAVITY,
            debug: DEFAULT_DEBUG,
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

    /// Builder: set viewport size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder: set gravity.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Builder: enable periodic frame statistics logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Reject configurations the engine cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.gravity.is_finite() {
            return Err(EngineError::Config(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        Ok(())
    }

    /// Milliseconds per frame at `target_fps`.
    pub fn frame_budget_ms(&self) -> f32 {
        1000.0 / self.target_fps.max(1) as f32
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<()> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| EngineError::Config(format!("Failed to load config file: {}", e)))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| EngineError::Config(format!("Failed to parse config: {}", e)))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [engine] section
        if let Some(width) = read_u32(config, "engine", "width") {
            self.width = width;
        }
        if let Some(height) = read_u32(config, "engine", "height") {
            self.height = height;
        }
        if let Some(fps) = read_u32(config, "engine", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(color) = config.get("engine", "background_color") {
            let color = color.trim();
            if !color.is_empty() {
                self.background_color = if color.starts_with('#') {
                    color.to_string()
                } else {
                    format!("#{}", color)
                };
            }
        }
        if let Some(debug) = config.getbool("engine", "debug").ok().flatten() {
            self.debug = debug;
        }

        // [physics] section
        if let Some(gravity) = config.getfloat("physics", "gravity").ok().flatten() {
            self.gravity = gravity as f32;
        }

        info!(
            "Loaded config: {}x{} viewport, fps={}, background={}, gravity={}, debug={}",
            self.width,
            self.height,
            self.target_fps,
            self.background_color,
            self.gravity,
            self.debug
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<()> {
        let mut config = Ini::new();

        // [engine] section
        config.set("engine", "width", Some(self.width.to_string()));
        config.set("engine", "height", Some(self.height.to_string()));
        config.set("engine", "target_fps", Some(self.target_fps.to_string()));
        config.set(
            "engine",
            "background_color",
            Some(self.background_color.trim_start_matches('#').to_string()),
        );
        config.set("engine", "debug", Some(self.debug.to_string()));

        // [physics] section
        config.set("physics", "gravity", Some(self.gravity.to_string()));

        config.write(&self.config_path)?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

/// Read an unsigned key that must fit in a `u32`; out-of-range values are
/// ignored with a warning.
fn read_u32(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = config.getuint(section, key).ok().flatten()?;
    match u32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("[{}] {} = {} is out of range; ignoring it", section, key, value);
            None
        }
    }
}
