//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::polar_to_cartesian;
use crate::sim::Connection;

/// Triangle-list vertices for a filled circle (a fan of `segments` wedges)
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + polar_to_cartesian(radius, theta1), color));
        vertices.push(Vertex::at(center + polar_to_cartesian(radius, theta2), color));
    }

    vertices
}

/// Line-list vertices, two per connection
pub fn line_list(lines: &[Connection]) -> Vec<Vertex> {
    lines
        .iter()
        .flat_map(|c| {
            [
                Vertex::at(c.from, c.from_color.to_f32()),
                Vertex::at(c.to, c.to_color.to_f32()),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_circle_vertices_on_rim() {
        let center = Vec2::new(10.0, 20.0);
        let verts = circle(center, 5.0, [1.0; 4], 8);
        assert_eq!(verts.len(), 24);

        for tri in verts.chunks(3) {
            assert_eq!(tri[0].position, [10.0, 20.0]);
            for v in &tri[1..] {
                let d = Vec2::from(v.position).distance(center);
                assert!((d - 5.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_circle_minimum_segments() {
        assert_eq!(circle(Vec2::ZERO, 1.0, [1.0; 4], 0).len(), 9);
    }

    #[test]
    fn test_line_list_colors() {
        let link = Connection {
            from: Vec2::new(0.0, 0.0),
            from_color: Rgba::new(255, 255, 255, 0),
            to: Vec2::new(3.0, 4.0),
            to_color: Rgba::new(255, 255, 255, 255),
        };
        let verts = line_list(&[link]);
        assert_eq!(verts.len(), 2);
        assert_eq!(verts[0].color, [1.0, 1.0, 1.0, 0.0]);
        assert_eq!(verts[1].position, [3.0, 4.0]);
        assert_eq!(verts[1].color, [1.0, 1.0, 1.0, 1.0]);
    }
}
