//! Particle simulation
//!
//! All physics lives here:
//! - Explicit integration (gravity, speed clamp, position, wall bounce)
//! - O(n²) pairwise attraction/repulsion
//! - Proximity links, rebuilt every update
//!
//! Single-threaded and frame-driven. Spawns are applied between updates.

pub mod config;
pub mod particle;
pub mod system;

pub use config::{PairwiseMode, PhysicsConfig, SpawnConfig};
pub use particle::Particle;
pub use system::{Connection, ParticleSystem, link_alpha, pair_force};
