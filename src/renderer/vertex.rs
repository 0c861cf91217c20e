//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Byte view of a vertex list, ready for a GPU upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for non-body elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.98, 0.93, 0.82, 1.0];
    pub const SPAWN_LINE: [f32; 4] = [0.55, 0.42, 0.3, 0.35];
    pub const FACE: [f32; 4] = [0.15, 0.1, 0.08, 1.0];
    pub const CHEEK: [f32; 4] = [1.0, 0.55, 0.6, 0.8];
    pub const HIGHLIGHT: [f32; 4] = [1.0, 1.0, 1.0, 0.35];
    pub const PENDING_OUTLINE: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
    pub const GAUGE_TRACK: [f32; 4] = [0.3, 0.25, 0.2, 0.6];
    pub const GAUGE_OK: [f32; 4] = [0.3, 0.75, 0.35, 1.0];
    pub const GAUGE_WARN: [f32; 4] = [0.95, 0.7, 0.2, 1.0];
    pub const GAUGE_DANGER: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
    pub const GAME_OVER_SHADE: [f32; 4] = [0.0, 0.0, 0.0, 0.45];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let verts = [Vertex::new(1.0, 2.0, [0.0; 4]); 3];
        assert_eq!(as_bytes(&verts).len(), 72);
    }
}
