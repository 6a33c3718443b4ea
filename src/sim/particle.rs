//! A single circular body

use glam::Vec2;

use super::config::PhysicsConfig;
use crate::clamp_length;
use crate::color::{Rgb, hsv_to_rgb, speed_hue};
use crate::error::SpawnError;

/// A particle entity
///
/// Radius and mass are fixed at creation; mass = radius².
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    radius: f32,
    mass: f32,
    /// Identity color picked at creation. Not used for display.
    base_color: Rgb,
}

impl Particle {
    /// Create a particle at rest. Fails unless `radius` is finite and > 0.
    pub fn new(position: Vec2, radius: f32, base_color: Rgb) -> Result<Self, SpawnError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SpawnError::InvalidRadius(radius));
        }
        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            radius,
            mass: radius * radius,
            base_color,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn base_color(&self) -> Rgb {
        self.base_color
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Advance one step: gravity, speed clamp, position, then wall bounces.
    ///
    /// The order matters. The clamp happens before the bounce, so the damped
    /// post-bounce velocity is not clamped again in the same step.
    pub fn update(&mut self, dt: f32, cfg: &PhysicsConfig) {
        self.velocity.y += cfg.gravity * dt;
        self.velocity = clamp_length(self.velocity, cfg.max_speed);
        self.position += self.velocity * dt;
        self.bounce(cfg);
    }

    /// Clamp to the simulation area, reflecting and damping the velocity
    /// component of each wall crossed. Both axes may trigger in one call.
    fn bounce(&mut self, cfg: &PhysicsConfig) {
        let r = self.radius;

        if self.position.x - r < 0.0 {
            self.position.x = r;
            self.velocity.x = -self.velocity.x * cfg.damping;
        } else if self.position.x + r > cfg.width {
            self.position.x = cfg.width - r;
            self.velocity.x = -self.velocity.x * cfg.damping;
        }

        if self.position.y - r < 0.0 {
            self.position.y = r;
            self.velocity.y = -self.velocity.y * cfg.damping;
        } else if self.position.y + r > cfg.height {
            self.position.y = cfg.height - r;
            self.velocity.y = -self.velocity.y * cfg.damping;
        }
    }

    /// Impulse-style update: velocity += force * dt / mass
    #[inline]
    pub fn apply_force(&mut self, force: Vec2, dt: f32) {
        self.velocity += force * (dt / self.mass);
    }

    /// Display color from the current speed: hue scales with speed/max_speed,
    /// full saturation and value. Recomputed on every call.
    pub fn display_color(&self, cfg: &PhysicsConfig) -> Rgb {
        hsv_to_rgb(speed_hue(self.speed(), cfg.max_speed), 1.0, 1.0)
    }
}
