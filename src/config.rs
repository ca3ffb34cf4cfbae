use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::grid::GridShape;
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "InputConfig::default_path")]
    pub path: PathBuf,
}

impl InputConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("availableMoves.json")
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "GridConfig::default_steps")]
    pub steps: usize,
    #[serde(default = "GridConfig::default_slots")]
    pub slots: usize,
}

impl GridConfig {
    fn default_steps() -> usize {
        GridShape::DEFAULT_STEPS
    }
    fn default_slots() -> usize {
        GridShape::DEFAULT_SLOTS
    }

    pub fn shape(&self) -> Result<GridShape> {
        GridShape::new(self.steps, self.slots)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            steps: Self::default_steps(),
            slots: Self::default_slots(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "PlotConfig::default_title")]
    pub title: String,
    #[serde(default = "PlotConfig::default_width")]
    pub width: u32,
    #[serde(default = "PlotConfig::default_height")]
    pub height: u32,
    #[serde(default = "PlotConfig::default_marker_radius")]
    pub marker_radius: f32,
}

impl PlotConfig {
    fn default_title() -> String {
        "Available moves per step".to_string()
    }
    fn default_width() -> u32 {
        1200
    }
    fn default_height() -> u32 {
        700
    }
    fn default_marker_radius() -> f32 {
        3.0
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            width: Self::default_width(),
            height: Self::default_height(),
            marker_radius: Self::default_marker_radius(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub plot: PlotConfig,
}

impl AppConfig {
    /// Read `path` if it exists. A missing, unreadable or malformed file
    /// falls back to defaults; nothing is written back.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config at {}; using defaults.", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(cfg) => {
                    info!("Loaded config from {}", path.display());
                    cfg
                }
                Err(err) => {
                    warn!("Failed to parse config {}: {err}. Using defaults.", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                warn!("Failed to read config {}: {err}. Using defaults.", path.display());
                Self::default()
            }
        }
    }
}
