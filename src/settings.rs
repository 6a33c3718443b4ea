//! Simulation settings
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! reference defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::consts::{CIRCLE_SEGMENTS, FRAME_LIMIT};
use crate::error::ConfigError;
use crate::sim::{PhysicsConfig, SpawnConfig};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Physical constants and area bounds
    pub physics: PhysicsConfig,
    /// Spawn placement and initial population
    pub spawn: SpawnConfig,
    /// RNG seed for reproducible spawns (entropy when absent)
    pub seed: Option<u64>,

    // === Host ===
    /// Frames per second cap (0 = uncapped)
    pub frame_limit: u32,
    /// Clear color
    pub background: Rgb,
    /// Wedges per particle circle
    pub circle_segments: u32,
    /// Window title for windowed hosts
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            spawn: SpawnConfig::default(),
            seed: None,

            frame_limit: FRAME_LIMIT,
            background: Rgb::new(10, 10, 20),
            circle_segments: CIRCLE_SEGMENTS,
            title: "Advanced Particle Simulation".to_string(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.spawn.validate()?;

        // Every particle must fit between opposite walls
        let largest_radius = self
            .spawn
            .max_radius
            .max(self.spawn.min_radius + self.physics.width / 100.0);
        let min_extent = 2.0 * largest_radius;
        if self.physics.width < min_extent || self.physics.height < min_extent {
            return Err(ConfigError::Validation(format!(
                "area {}x{} is too small for particles of radius up to {}",
                self.physics.width, self.physics.height, largest_radius
            )));
        }

        if self.circle_segments < 3 {
            return Err(ConfigError::Validation(format!(
                "circle_segments must be at least 3, got {}",
                self.circle_segments
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ParticleSystem;
    use glam::Vec2;

    #[test]
    fn test_empty_json_is_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_nested_overrides() {
        let settings = Settings::from_json(
            r#"{ "seed": 42, "physics": { "width": 640, "height": 480 }, "spawn": { "per_click": 3 } }"#,
        )
        .unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.physics.width, 640.0);
        assert_eq!(settings.physics.gravity, crate::consts::GRAVITY);
        assert_eq!(settings.spawn.per_click, 3);
        assert_eq!(settings.frame_limit, 60);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "physics": { "damping": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = Settings::from_json(r#"{ "circle_segments": 2 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = Settings::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_area_smaller_than_particles_rejected() {
        let err = Settings::from_json(r#"{ "physics": { "width": 10, "height": 800 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = Settings::from_json(r#"{ "physics": { "height": 12 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_smallest_accepted_area_contains_particles() {
        let settings =
            Settings::from_json(r#"{ "physics": { "width": 40, "height": 40 } }"#).unwrap();
        let mut system = ParticleSystem::with_seed(settings.physics.clone(), settings.spawn.clone(), 9);
        system.add_particles_at(Vec2::new(5.0, 400.0), 3);
        system.populate(5);

        for _ in 0..10 {
            system.update(0.016);
            for p in system.particles() {
                let r = p.radius();
                assert!(p.position.x >= r && p.position.x <= 40.0 - r);
                assert!(p.position.y >= r && p.position.y <= 40.0 - r);
            }
        }
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("particle-links-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(7),
            frame_limit: 30,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load("/nonexistent/particle-links.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
