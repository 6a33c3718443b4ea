//! Particle collection, pairwise interaction pass and proximity links
//!
//! Per frame: pairwise forces → integrate every particle → rebuild links.
//! The link list is derived data and is rebuilt from scratch every update.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::config::{PairwiseMode, PhysicsConfig, SpawnConfig};
use super::particle::Particle;
use crate::color::{Rgb, Rgba};
use crate::error::SpawnError;
use crate::polar_to_cartesian;
use crate::renderer::Surface;

/// A visual link between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: Vec2,
    pub from_color: Rgba,
    pub to: Vec2,
    pub to_color: Rgba,
}

/// Force exerted on a particle at `from` by one at `to`.
///
/// `None` outside the interaction range, i.e. for coincident particles or at
/// distance >= `interaction_radius`. Inside, the force points toward `to` with
/// strength `attraction/d² - repulsion/d` (negative strength pushes apart).
pub fn pair_force(from: Vec2, to: Vec2, cfg: &PhysicsConfig) -> Option<Vec2> {
    let direction = to - from;
    let distance = direction.length();

    if distance > 0.0 && distance < cfg.interaction_radius {
        let strength = cfg.attraction / (distance * distance) - cfg.repulsion / distance;
        Some(direction / distance * strength)
    } else {
        None
    }
}

/// Link opacity: 255 at distance 0 falling linearly to 0 at the interaction
/// radius and beyond.
pub fn link_alpha(distance: f32, cfg: &PhysicsConfig) -> u8 {
    if distance < cfg.interaction_radius {
        (255.0 * (1.0 - distance / cfg.interaction_radius)) as u8
    } else {
        0
    }
}

/// Apply every in-range pairwise force to particle `i`, reading the other
/// particles' current positions.
fn gather_forces(particles: &mut [Particle], i: usize, dt: f32, cfg: &PhysicsConfig) {
    let from = particles[i].position;
    for j in 0..particles.len() {
        if i == j {
            continue;
        }
        if let Some(force) = pair_force(from, particles[j].position, cfg) {
            particles[i].apply_force(force, dt);
        }
    }
}

/// Owns the particles and everything derived from them
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    config: PhysicsConfig,
    spawn: SpawnConfig,
    particles: Vec<Particle>,
    connections: Vec<Connection>,
    rng: Pcg32,
}

impl ParticleSystem {
    /// Create an empty system seeded from OS entropy
    pub fn new(config: PhysicsConfig, spawn: SpawnConfig) -> Self {
        let rng = Pcg32::from_rng(&mut rand::rng());
        Self::with_rng(config, spawn, rng)
    }

    /// Create an empty system with a reproducible spawn sequence
    pub fn with_seed(config: PhysicsConfig, spawn: SpawnConfig, seed: u64) -> Self {
        Self::with_rng(config, spawn, Pcg32::seed_from_u64(seed))
    }

    fn with_rng(config: PhysicsConfig, spawn: SpawnConfig, rng: Pcg32) -> Self {
        Self {
            config,
            spawn,
            particles: Vec::new(),
            connections: Vec::new(),
            rng,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn spawn_config(&self) -> &SpawnConfig {
        &self.spawn
    }

    /// Particles in insertion order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Links computed by the last `update`
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Append a particle at rest. Returns its index.
    pub fn add_particle(&mut self, position: Vec2, radius: f32) -> Result<usize, SpawnError> {
        let base_color = Rgb::new(
            self.rng.random_range(0..255),
            self.rng.random_range(0..255),
            self.rng.random_range(0..255),
        );
        let particle = Particle::new(position, radius, base_color)?;
        self.particles.push(particle);
        Ok(self.particles.len() - 1)
    }

    /// Spawn `count` particles at a random angle and offset within the spawn
    /// disk around `point`, each with a radius in [min_radius, max_radius).
    ///
    /// The offset is uniform in distance, not area, so spawns cluster toward
    /// the center. Call between updates, never during one. Returns how many
    /// particles were actually added.
    pub fn add_particles_at(&mut self, point: Vec2, count: usize) -> usize {
        let SpawnConfig {
            disk_radius,
            min_radius,
            max_radius,
            ..
        } = self.spawn;

        let before = self.particles.len();
        self.particles.reserve(count);
        for _ in 0..count {
            let angle = self.rng.random::<f32>() * std::f32::consts::TAU;
            let offset = self.rng.random::<f32>() * disk_radius;
            let radius = min_radius + self.rng.random::<f32>() * (max_radius - min_radius);
            let position = point + polar_to_cartesian(offset, angle);
            if let Err(e) = self.add_particle(position, radius) {
                log::warn!("Skipped spawn: {}", e);
            }
        }

        let added = self.particles.len() - before;
        log::debug!(
            "Spawned {} of {} particles at ({:.0}, {:.0}), total {}",
            added,
            count,
            point.x,
            point.y,
            self.particles.len()
        );
        added
    }

    /// Scatter `count` particles over the area.
    ///
    /// Both coordinates are drawn from [0, width) and radius is
    /// `min_radius + U(0, width) / 100`; particles that start below the floor
    /// are clamped in on their first update. Returns how many were added.
    pub fn populate(&mut self, count: usize) -> usize {
        let width = self.config.width;
        let min_radius = self.spawn.min_radius;

        let before = self.particles.len();
        self.particles.reserve(count);
        for _ in 0..count {
            let x = self.rng.random::<f32>() * width;
            let y = self.rng.random::<f32>() * width;
            let radius = min_radius + self.rng.random::<f32>() * width / 100.0;
            if let Err(e) = self.add_particle(Vec2::new(x, y), radius) {
                log::warn!("Skipped initial particle: {}", e);
            }
        }

        let added = self.particles.len() - before;
        log::info!("Populated {} of {} particles", added, count);
        added
    }

    /// Advance one frame: pairwise forces, integration, then rebuild links.
    ///
    /// Every ordered pair (i, j), i != j, is visited, so each unordered pair
    /// contributes a force to both members.
    pub fn update(&mut self, dt: f32) {
        let cfg = &self.config;
        let n = self.particles.len();

        match cfg.pairwise_mode {
            PairwiseMode::Batched => {
                for i in 0..n {
                    gather_forces(&mut self.particles, i, dt, cfg);
                }
                for particle in &mut self.particles {
                    particle.update(dt, cfg);
                }
            }
            PairwiseMode::Interleaved => {
                for i in 0..n {
                    gather_forces(&mut self.particles, i, dt, cfg);
                    self.particles[i].update(dt, cfg);
                }
            }
        }

        self.update_connections();
    }

    /// Rebuild the link list from current positions, one link per unordered
    /// pair closer than the interaction radius.
    fn update_connections(&mut self) {
        self.connections.clear();

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if distance < self.config.interaction_radius {
                    let color = Rgb::WHITE.with_alpha(link_alpha(distance, &self.config));
                    self.connections.push(Connection {
                        from: a.position,
                        from_color: color,
                        to: b.position,
                        to_color: color,
                    });
                }
            }
        }
    }

    /// Links as one batch, then particles in collection order on top.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.draw_lines(&self.connections);
        for particle in &self.particles {
            surface.fill_circle(
                particle.position,
                particle.radius(),
                particle.display_color(&self.config),
            );
        }
    }
}
