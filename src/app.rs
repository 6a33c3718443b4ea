//! Host frame loop
//!
//! Per frame: drain queued input → update(dt) → clear → draw.

use glam::Vec2;

use crate::platform::{EventQueue, InputEvent};
use crate::renderer::Surface;
use crate::settings::Settings;
use crate::sim::ParticleSystem;

/// A running simulation and its pending input
pub struct App {
    settings: Settings,
    system: ParticleSystem,
    events: EventQueue,
    running: bool,
    frame_count: u64,
}

impl App {
    /// Build the particle system from settings and scatter the initial
    /// population.
    pub fn new(settings: Settings) -> Self {
        let physics = settings.physics.clone();
        let spawn = settings.spawn.clone();
        let mut system = match settings.seed {
            Some(seed) => ParticleSystem::with_seed(physics, spawn, seed),
            None => ParticleSystem::new(physics, spawn),
        };
        system.populate(settings.spawn.initial_count as usize);

        log::info!(
            "Simulation ready: {}x{} area, {} particles, {:?} pairwise mode, forces repel beyond {:.1}",
            settings.physics.width,
            settings.physics.height,
            system.len(),
            settings.physics.pairwise_mode,
            system.config().crossover_distance(),
        );

        Self {
            settings,
            system,
            events: EventQueue::new(),
            running: true,
            frame_count: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    /// Queue for input arriving between frames
    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Queue a pointer click: spawns the configured per-click batch
    pub fn click(&mut self, at: Vec2) {
        let count = self.system.spawn_config().per_click as usize;
        self.events.spawn_at(at, count);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run one frame. Returns `false` once a close event has been seen;
    /// a closed app neither updates nor draws.
    pub fn frame<S: Surface + ?Sized>(&mut self, dt: f32, surface: &mut S) -> bool {
        for event in self.events.drain() {
            match event {
                InputEvent::Spawn { at, count } => {
                    self.system.add_particles_at(at, count);
                }
                InputEvent::Close => {
                    log::info!("Close requested after {} frames", self.frame_count);
                    self.running = false;
                }
            }
        }
        if !self.running {
            return false;
        }

        self.system.update(dt);

        surface.clear(self.settings.background);
        self.system.draw(surface);

        self.frame_count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MeshSurface;
    use crate::sim::SpawnConfig;

    fn settings(initial: u32) -> Settings {
        Settings {
            seed: Some(3),
            spawn: SpawnConfig {
                initial_count: initial,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_population() {
        let app = App::new(settings(100));
        assert_eq!(app.system().len(), 100);
        assert!(app.is_running());
    }

    #[test]
    fn test_click_spawns_before_update() {
        let mut app = App::new(settings(0));
        let mut surface = MeshSurface::default();
        app.click(Vec2::new(600.0, 400.0));
        assert_eq!(app.system().len(), 0);

        assert!(app.frame(0.016, &mut surface));
        assert_eq!(app.system().len(), 10);
        assert_eq!(app.frame_count(), 1);
        // One circle fan per particle
        assert_eq!(surface.triangles.len(), 10 * 24 * 3);
    }

    #[test]
    fn test_close_stops_frames() {
        let mut app = App::new(settings(5));
        let mut surface = MeshSurface::default();
        app.events_mut().close();
        assert!(!app.frame(0.016, &mut surface));
        assert!(!app.is_running());
        assert_eq!(app.frame_count(), 0);
        assert_eq!(surface.vertex_count(), 0);
    }
}
