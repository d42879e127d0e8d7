//! Backdrop configuration.
//!
//! Provides configurable parameters for the window, the animation, and
//! diagnostics. Configuration can be loaded from and saved to a TOML file.

use driftfield_common::{DriftfieldError, DriftfieldResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration file name.
const CONFIG_FILE: &str = "driftfield.toml";

/// Backdrop configuration parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    // === Window Settings ===
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Enable VSync
    pub vsync: bool,
    /// Target frames per second (when VSync is off)
    pub target_fps: u32,

    // === Animation Settings ===
    /// Spawn RNG seed (None = seed from entropy)
    pub field_seed: Option<u64>,
    /// Opacity of the per-frame background fill (trail persistence)
    pub fade_alpha: f32,
    /// Global backdrop opacity applied at presentation
    pub backdrop_opacity: f32,

    // === Debug Settings ===
    /// Log the frame rate periodically
    pub log_fps: bool,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            // Window
            window_width: 1280,
            window_height: 720,
            vsync: true,
            target_fps: 60,

            // Animation
            field_seed: None,
            fade_alpha: driftfield_kernel::FADE_ALPHA,
            backdrop_opacity: 0.6,

            // Debug
            log_fps: false,
        }
    }
}

impl BackdropConfig {
    /// Load configuration from the default file location.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Self {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match fs::File::open(path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if let Err(e) = file.read_to_string(&mut contents) {
                    warn!("Failed to read config file: {e}");
                    return Self::default();
                }

                match toml::from_str(&contents) {
                    Ok(config) => {
                        info!("Loaded config from {}", path.display());
                        config
                    },
                    Err(e) => {
                        warn!("Failed to parse config file: {e}");
                        Self::default()
                    },
                }
            },
            Err(e) => {
                warn!("Failed to open config file: {e}");
                Self::default()
            },
        }
    }

    /// Save configuration to the default file location.
    pub fn save(&self) -> DriftfieldResult<()> {
        self.save_to(Self::config_path())
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> DriftfieldResult<()> {
        let path = path.as_ref();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DriftfieldError::Config(e.to_string()))?;

        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Get the default configuration file path.
    fn config_path() -> PathBuf {
        // Try to use standard config directory
        if let Some(config_dir) = dirs_config_path() {
            config_dir.join("driftfield").join(CONFIG_FILE)
        } else {
            // Fall back to current directory
            PathBuf::from(CONFIG_FILE)
        }
    }

    /// Validate and clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        // Window size
        self.window_width = self.window_width.clamp(320, 7680);
        self.window_height = self.window_height.clamp(240, 4320);
        self.target_fps = self.target_fps.clamp(30, 240);

        // Animation
        self.fade_alpha = self.fade_alpha.clamp(0.0, 1.0);
        self.backdrop_opacity = self.backdrop_opacity.clamp(0.0, 1.0);
    }
}

/// Get platform-specific config directory.
fn dirs_config_path() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA").ok().map(PathBuf::from)
    }

    #[cfg(target_os = "linux")]
    {
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|h| PathBuf::from(h).join(".config"))
            })
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        None
    }
}
