//! Particle Links - an interactive 2D particle simulation
//!
//! Core modules:
//! - `sim`: Particle physics (gravity, wall bounces, pairwise forces, links)
//! - `renderer`: Render surface abstraction and CPU tessellation
//! - `platform`: Input events and frame timing
//! - `settings`: Data-driven simulation configuration
//! - `app`: Host frame loop tying the above together

pub mod app;
pub mod color;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use color::{Rgb, Rgba};
pub use error::{ConfigError, SpawnError};
pub use settings::Settings;
pub use sim::{ParticleSystem, PhysicsConfig, SpawnConfig};

use glam::Vec2;

/// Reference simulation constants (defaults for `PhysicsConfig`)
pub mod consts {
    /// Simulation area, in pixels
    pub const WIDTH: f32 = 1200.0;
    pub const HEIGHT: f32 = 800.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 9.81;
    /// Velocity multiplier applied to the reflected component on a wall bounce
    pub const DAMPING: f32 = 0.99;

    /// Pairwise force coefficients: strength = ATTRACTION/d² - REPULSION/d
    pub const ATTRACTION: f32 = 50.0;
    pub const REPULSION: f32 = 10.0;
    /// Beyond this distance particles neither interact nor link
    pub const INTERACTION_RADIUS: f32 = 100.0;

    /// Speed clamp (pixels/s), also the top of the display hue scale
    pub const MAX_SPEED: f32 = 500.0;

    /// Spawn defaults
    pub const SPAWN_DISK_RADIUS: f32 = 50.0;
    pub const SPAWN_MIN_RADIUS: f32 = 3.0;
    pub const SPAWN_MAX_RADIUS: f32 = 8.0;
    pub const SPAWN_PER_CLICK: u32 = 10;
    pub const INITIAL_PARTICLES: u32 = 100;

    /// Host defaults
    pub const FRAME_LIMIT: u32 = 60;
    pub const CIRCLE_SEGMENTS: u32 = 24;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Rescale `v` to at most `max` length, keeping its direction
#[inline]
pub fn clamp_length(v: Vec2, max: f32) -> Vec2 {
    let len = v.length();
    if len > max { v / len * max } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_length_preserves_direction() {
        let v = clamp_length(Vec2::new(300.0, 400.0), 100.0);
        assert!((v.length() - 100.0).abs() < 1e-4);
        assert!((v.x - 60.0).abs() < 1e-4);
        assert!((v.y - 80.0).abs() < 1e-4);
    }

    #[test]
    fn test_clamp_length_zero_is_noop() {
        assert_eq!(clamp_length(Vec2::ZERO, 10.0), Vec2::ZERO);
        assert_eq!(clamp_length(Vec2::new(3.0, 4.0), 10.0), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(2.0, std::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 2.0).abs() < 1e-6);
    }
}
