//! Physics configuration
//!
//! One immutable value per simulation, handed to `ParticleSystem::new`.
//! Independent simulations can run side by side with different constants.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// How the pairwise force pass is interleaved with integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairwiseMode {
    /// All forces first (positions frozen), then every particle integrates.
    /// Result does not depend on collection order.
    #[default]
    Batched,
    /// Each particle gathers its forces and integrates before the next one is
    /// visited, so later particles see already-moved earlier ones.
    Interleaved,
}

/// Physical constants and simulation-area bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Simulation area width (x in [0, width])
    pub width: f32,
    /// Simulation area height (y in [0, height], y grows downward)
    pub height: f32,
    /// Downward acceleration
    pub gravity: f32,
    /// Bounce damping, in [0, 1)
    pub damping: f32,
    /// Attraction coefficient (inverse-square term)
    pub attraction: f32,
    /// Repulsion coefficient (inverse-linear term)
    pub repulsion: f32,
    /// Speed clamp and top of the display hue scale
    pub max_speed: f32,
    /// Cutoff for forces and links
    pub interaction_radius: f32,
    pub pairwise_mode: PairwiseMode,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            gravity: GRAVITY,
            damping: DAMPING,
            attraction: ATTRACTION,
            repulsion: REPULSION,
            max_speed: MAX_SPEED,
            interaction_radius: INTERACTION_RADIUS,
            pairwise_mode: PairwiseMode::Batched,
        }
    }
}

impl PhysicsConfig {
    /// Simulation area as a vector
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Distance at which the attraction and repulsion terms cancel
    pub fn crossover_distance(&self) -> f32 {
        self.attraction / self.repulsion
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("max_speed", self.max_speed),
            ("interaction_radius", self.interaction_radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let finite = [
            ("gravity", self.gravity),
            ("attraction", self.attraction),
            ("repulsion", self.repulsion),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..1.0).contains(&self.damping) {
            return Err(ConfigError::Validation(format!(
                "damping must be in [0, 1), got {}",
                self.damping
            )));
        }

        Ok(())
    }
}

/// Where and how big new particles are
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Spawns land within this distance of the requested point
    pub disk_radius: f32,
    /// Spawned radius is uniform in [min_radius, max_radius)
    pub min_radius: f32,
    pub max_radius: f32,
    /// Particles added per spawn request from the pointer
    pub per_click: u32,
    /// Particles scattered over the area at startup
    pub initial_count: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            disk_radius: SPAWN_DISK_RADIUS,
            min_radius: SPAWN_MIN_RADIUS,
            max_radius: SPAWN_MAX_RADIUS,
            per_click: SPAWN_PER_CLICK,
            initial_count: INITIAL_PARTICLES,
        }
    }
}

impl SpawnConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.disk_radius.is_finite() && self.disk_radius >= 0.0) {
            return Err(ConfigError::Validation(format!(
                "spawn disk_radius must be non-negative, got {}",
                self.disk_radius
            )));
        }
        if !(self.min_radius.is_finite() && self.min_radius > 0.0) {
            return Err(ConfigError::Validation(format!(
                "spawn min_radius must be positive, got {}",
                self.min_radius
            )));
        }
        if !(self.max_radius.is_finite() && self.max_radius > self.min_radius) {
            return Err(ConfigError::Validation(format!(
                "spawn max_radius must exceed min_radius ({}), got {}",
                self.min_radius, self.max_radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = PhysicsConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.bounds(), Vec2::new(1200.0, 800.0));
        assert!((cfg.crossover_distance() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_bad_values() {
        let cfg = PhysicsConfig {
            width: 0.0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));

        let cfg = PhysicsConfig {
            damping: 1.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = PhysicsConfig {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_spawn_config_validation() {
        assert!(SpawnConfig::default().validate().is_ok());

        let spawn = SpawnConfig {
            min_radius: 0.0,
            ..Default::default()
        };
        assert!(spawn.validate().is_err());

        let spawn = SpawnConfig {
            min_radius: 5.0,
            max_radius: 4.0,
            ..Default::default()
        };
        assert!(spawn.validate().is_err());

        // [min, max) would be empty
        let spawn = SpawnConfig {
            min_radius: 5.0,
            max_radius: 5.0,
            ..Default::default()
        };
        assert!(spawn.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: PhysicsConfig =
            serde_json::from_str(r#"{ "gravity": 0.0, "pairwise_mode": "interleaved" }"#).unwrap();
        assert_eq!(cfg.gravity, 0.0);
        assert_eq!(cfg.pairwise_mode, PairwiseMode::Interleaved);
        assert_eq!(cfg.width, WIDTH);
    }
}
