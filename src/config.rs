use crate::error::Result;
use crate::generator::{MazeDimensions, DEFAULT_MAX_ATTEMPTS};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct MazeConfig {
    #[serde(default = "default_difficulty")]
    pub difficulty: u32,
    #[serde(default = "default_max_generation_attempts")]
    pub max_generation_attempts: u32,
    /// Fixed RNG seed; random mazes when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    /// Target window edge in pixels; cell size is derived from it
    #[serde(default = "default_window_size")]
    pub window_size: f32,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
    #[serde(default = "default_show_path_comparison")]
    pub show_path_comparison: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_action_log: bool,
    #[serde(default = "default_action_log_path")]
    pub action_log_path: String,
}

// Default values
fn default_difficulty() -> u32 { 1 }
fn default_max_generation_attempts() -> u32 { DEFAULT_MAX_ATTEMPTS }
fn default_window_size() -> f32 { 800.0 }
fn default_bg_r() -> u8 { 240 }
fn default_bg_g() -> u8 { 245 }
fn default_bg_b() -> u8 { 200 }
fn default_show_path_comparison() -> bool { true }
fn default_action_log_path() -> String { "action_log.json".to_string() }

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty(),
            max_generation_attempts: default_max_generation_attempts(),
            seed: None,
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
            show_path_comparison: default_show_path_comparison(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_action_log: false,
            action_log_path: default_action_log_path(),
        }
    }
}

impl Config {
    /// Load configuration from `config.toml`, or use defaults if it is missing or invalid
    pub fn load() -> Self {
        if !Path::new(CONFIG_PATH).exists() {
            info!("No {} found, using default configuration", CONFIG_PATH);
            return Config::default();
        }
        match Self::load_from(CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded configuration from {}", CONFIG_PATH);
                config
            }
            Err(e) => {
                warn!("Failed to load {}: {}", CONFIG_PATH, e);
                warn!("Using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        MazeDimensions::for_difficulty(self.maze.difficulty)?;
        Ok(())
    }

    /// Cell edge in pixels for a maze of the given size, never below 1
    pub fn cell_size(&self, width: i32, height: i32) -> f32 {
        let cells = width.max(height).max(1) as f32;
        (self.visual.window_size / cells).floor().max(1.0)
    }
}
