//! Game configuration (generation parameters, input feel). Loaded from config.ron at startup.

use procgen::GenerationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a config file could not be turned into a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Persistent game settings. Loaded from `config.ron` in the current directory.
///
/// Every field has a default matching the stock world, so a partial file only
/// overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fewest planets a generated system may have.
    #[serde(default = "default_min_planets")]
    pub min_planets: usize,
    /// Most planets a generated system may have.
    #[serde(default = "default_max_planets")]
    pub max_planets: usize,
    /// Orbit radius of the innermost planet.
    #[serde(default = "default_min_sun_distance")]
    pub min_sun_distance: f32,
    /// Free-orbiting belt asteroid count.
    #[serde(default = "default_asteroid_count")]
    pub asteroid_count: usize,
    /// Number of asteroid clusters.
    #[serde(default = "default_cluster_count")]
    pub cluster_count: usize,
    /// Fewest asteroids per cluster.
    #[serde(default = "default_cluster_min_population")]
    pub cluster_min_population: usize,
    /// Most asteroids per cluster.
    #[serde(default = "default_cluster_max_population")]
    pub cluster_max_population: usize,
    /// Closest a cluster center may sit to the sun.
    #[serde(default = "default_cluster_min_distance")]
    pub cluster_min_distance: f32,
    /// Furthest a cluster center may sit from the sun.
    #[serde(default = "default_cluster_max_distance")]
    pub cluster_max_distance: f32,
    /// Background star count.
    #[serde(default = "default_star_count")]
    pub star_count: usize,
    /// Mouse-look sensitivity multiplier.
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,
}

fn default_min_planets() -> usize {
    4
}
fn default_max_planets() -> usize {
    9
}
fn default_min_sun_distance() -> f32 {
    1500.0
}
fn default_asteroid_count() -> usize {
    120
}
fn default_cluster_count() -> usize {
    4
}
fn default_cluster_min_population() -> usize {
    25
}
fn default_cluster_max_population() -> usize {
    55
}
fn default_cluster_min_distance() -> f32 {
    300.0
}
fn default_cluster_max_distance() -> f32 {
    1400.0
}
fn default_star_count() -> usize {
    2000
}
fn default_sensitivity() -> f32 {
    0.1
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_planets: default_min_planets(),
            max_planets: default_max_planets(),
            min_sun_distance: default_min_sun_distance(),
            asteroid_count: default_asteroid_count(),
            cluster_count: default_cluster_count(),
            cluster_min_population: default_cluster_min_population(),
            cluster_max_population: default_cluster_max_population(),
            cluster_min_distance: default_cluster_min_distance(),
            cluster_max_distance: default_cluster_max_distance(),
            star_count: default_star_count(),
            sensitivity: default_sensitivity(),
        }
    }
}

impl GameConfig {
    /// Parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&data)?)
    }

    /// Load `config.ron`, falling back to defaults with a warning if the file
    /// is missing or invalid.
    pub fn load_or_default() -> Self {
        let path = config_path();
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default config ({:?}: {})", path, e);
                Self::default()
            }
        }
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }

    /// The world-generation parameters this config describes.
    pub fn generation(&self) -> GenerationConfig {
        GenerationConfig {
            min_planets: self.min_planets,
            max_planets: self.max_planets,
            min_sun_distance: self.min_sun_distance,
            asteroid_count: self.asteroid_count,
            cluster_count: self.cluster_count,
            cluster_min_population: self.cluster_min_population,
            cluster_max_population: self.cluster_max_population,
            cluster_min_distance: self.cluster_min_distance,
            cluster_max_distance: self.cluster_max_distance,
            star_count: self.star_count,
        }
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_stock_world() {
        let config = GameConfig::default();
        assert_eq!(config.min_planets, 4);
        assert_eq!(config.max_planets, 9);
        assert_eq!(config.asteroid_count, 120);
        assert_eq!(config.star_count, 2000);
        let gen = config.generation();
        assert_eq!(gen.min_sun_distance, 1500.0);
        assert_eq!(gen.cluster_count, 4);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let parsed: GameConfig = ron::from_str("(star_count: 50)").unwrap();
        assert_eq!(parsed.star_count, 50);
        assert_eq!(parsed.min_planets, 4);
        assert_eq!(parsed.sensitivity, 0.1);
    }

    #[test]
    fn missing_file_is_a_typed_error() {
        let err = GameConfig::load(Path::new("definitely/not/here.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn garbage_file_is_a_parse_error() {
        let dir = std::env::temp_dir().join("survey_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.ron");
        std::fs::write(&path, "not ron at all {{{").unwrap();
        let err = GameConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
