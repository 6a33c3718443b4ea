//! Render surface abstraction
//!
//! The simulation draws through `Surface`; a window backend, a recorder in
//! tests, or `MeshSurface` (CPU tessellation into vertex lists) all fit.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::MeshSurface;
pub use vertex::Vertex;

use glam::Vec2;

use crate::color::Rgb;
use crate::sim::Connection;

/// Drawing primitives the simulation needs
pub trait Surface {
    /// Fill the whole target with a solid color
    fn clear(&mut self, color: Rgb);
    /// Draw a batch of line segments with per-endpoint colors
    fn draw_lines(&mut self, lines: &[Connection]);
    /// Draw a filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
}
