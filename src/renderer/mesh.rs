//! CPU-side surface that records vertex lists for a GPU backend to upload

use glam::Vec2;

use super::Surface;
use super::shapes;
use super::vertex::Vertex;
use crate::color::Rgb;
use crate::consts::CIRCLE_SEGMENTS;
use crate::sim::Connection;

/// Collects one frame's geometry: a line list for links and a triangle list
/// for particles. `clear` starts a new frame.
#[derive(Debug, Clone)]
pub struct MeshSurface {
    pub background: [f32; 4],
    pub lines: Vec<Vertex>,
    pub triangles: Vec<Vertex>,
    circle_segments: u32,
}

impl Default for MeshSurface {
    fn default() -> Self {
        Self::new(CIRCLE_SEGMENTS)
    }
}

impl MeshSurface {
    pub fn new(circle_segments: u32) -> Self {
        Self {
            background: [0.0, 0.0, 0.0, 1.0],
            lines: Vec::new(),
            triangles: Vec::new(),
            circle_segments,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.lines.len() + self.triangles.len()
    }

    /// Raw bytes of the line list, ready for a vertex buffer
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }

    /// Raw bytes of the triangle list, ready for a vertex buffer
    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }
}

impl Surface for MeshSurface {
    fn clear(&mut self, color: Rgb) {
        self.background = color.to_f32();
        self.lines.clear();
        self.triangles.clear();
    }

    fn draw_lines(&mut self, lines: &[Connection]) {
        self.lines.extend(shapes::line_list(lines));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.triangles.extend(shapes::circle(
            center,
            radius,
            color.to_f32(),
            self.circle_segments,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_records_and_clears() {
        let mut surface = MeshSurface::new(6);
        surface.fill_circle(Vec2::new(5.0, 5.0), 2.0, Rgb::new(255, 0, 0));
        surface.draw_lines(&[Connection {
            from: Vec2::ZERO,
            from_color: Rgba::new(255, 255, 255, 10),
            to: Vec2::ONE,
            to_color: Rgba::new(255, 255, 255, 10),
        }]);

        assert_eq!(surface.triangles.len(), 18);
        assert_eq!(surface.lines.len(), 2);
        assert_eq!(surface.vertex_count(), 20);
        assert_eq!(surface.triangle_bytes().len(), 18 * Vertex::STRIDE);
        assert_eq!(surface.line_bytes().len(), 2 * Vertex::STRIDE);

        surface.clear(Rgb::new(10, 10, 20));
        assert_eq!(surface.vertex_count(), 0);
        assert_eq!(surface.background, Rgb::new(10, 10, 20).to_f32());
    }
}
