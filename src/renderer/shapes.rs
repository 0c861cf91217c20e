//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), 0.0, color, segments)
}

/// Generate vertices for a filled ellipse rotated by `rotation` radians
pub fn ellipse(
    center: Vec2,
    radii: Vec2,
    rotation: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    let rot = Vec2::from_angle(rotation);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
        let p1 = center + rot.rotate(Vec2::new(radii.x * theta1.cos(), radii.y * theta1.sin()));
        let p2 = center + rot.rotate(Vec2::new(radii.x * theta2.cos(), radii.y * theta2.sin()));

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    arc_band(center, inner_radius, outer_radius, 0.0, 2.0 * PI, color, segments)
}

/// Generate vertices for a band between two radii spanning `start..start+span`
pub fn arc_band(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    start: f32,
    span: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = start + (i as f32 / segments as f32) * span;
        let theta2 = start + ((i + 1) as f32 / segments as f32) * span;
        let dir1 = Vec2::from_angle(theta1);
        let dir2 = Vec2::from_angle(theta2);

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for an axis-aligned rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Segment count that keeps large circles smooth without wasting small ones
pub fn segments_for(radius: f32) -> u32 {
    ((radius * 0.8) as u32).clamp(12, 64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertices_on_radius() {
        let verts = circle(Vec2::new(10.0, 10.0), 5.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
        for tri in verts.chunks(3) {
            for v in &tri[1..] {
                let d = Vec2::from(v.position).distance(Vec2::new(10.0, 10.0));
                assert!((d - 5.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_ring_vertex_count() {
        assert_eq!(ring(Vec2::ZERO, 4.0, 5.0, [1.0; 4], 10).len(), 60);
    }

    #[test]
    fn test_segments_clamped() {
        assert_eq!(segments_for(1.0), 12);
        assert_eq!(segments_for(500.0), 64);
    }
}
