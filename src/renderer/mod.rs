//! Frame tessellation
//!
//! Turns a `Snapshot` into one triangle list in field coordinates. Any GPU
//! backend can upload `Frame::bytes()` as-is with a position+color layout.

pub mod faces;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::consts::{GAME_OVER_OCCUPANCY, SPAWN_LINE_OFFSET};
use crate::sim::catalog::color_rgba;
use crate::snapshot::{BodyView, Snapshot};
pub use vertex::{Vertex, colors};

/// Height of the occupancy gauge strip along the top edge
pub const GAUGE_HEIGHT: f32 = 8.0;
/// Corner inset of the next-tier preview
pub const PREVIEW_MARGIN: f32 = 12.0;
/// Preview bodies are drawn at this fraction of their real radius
pub const PREVIEW_SCALE: f32 = 0.5;

/// A tessellated frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
}

impl Frame {
    pub fn bytes(&self) -> &[u8] {
        vertex::as_bytes(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Build all geometry for one snapshot, back to front
pub fn build_frame(snap: &Snapshot) -> Frame {
    let mut out = Vec::new();
    let field_max = Vec2::new(snap.width, snap.height);

    out.extend(shapes::rect(Vec2::ZERO, field_max, colors::BACKGROUND));

    let line_y = snap.height - SPAWN_LINE_OFFSET;
    out.extend(shapes::rect(
        Vec2::new(0.0, line_y - 0.5),
        Vec2::new(snap.width, line_y + 0.5),
        colors::SPAWN_LINE,
    ));

    for body in &snap.bodies {
        draw_body(&mut out, body, 1.0);
    }

    if let Some(pending) = &snap.pending {
        let segments = shapes::segments_for(pending.radius);
        out.extend(shapes::ring(
            pending.pos,
            pending.radius,
            pending.radius + 2.0,
            colors::PENDING_OUTLINE,
            segments,
        ));
        draw_body(&mut out, pending, 0.85);
    }

    if let Some(queued) = &snap.queued {
        let r = queued.radius * PREVIEW_SCALE;
        let preview = BodyView {
            tier: queued.tier,
            pos: Vec2::new(snap.width - PREVIEW_MARGIN - r, GAUGE_HEIGHT + PREVIEW_MARGIN + r),
            radius: r,
            color: queued.color,
            rotation: 0.0,
        };
        draw_body(&mut out, &preview, 0.7);
    }

    draw_gauge(&mut out, snap.width, snap.occupancy);

    if snap.is_over {
        out.extend(shapes::rect(Vec2::ZERO, field_max, colors::GAME_OVER_SHADE));
    }

    Frame { vertices: out }
}

fn draw_body(out: &mut Vec<Vertex>, body: &BodyView, alpha: f32) {
    let segments = shapes::segments_for(body.radius);
    out.extend(shapes::circle(
        body.pos,
        body.radius,
        color_rgba(body.color, alpha),
        segments,
    ));
    faces::draw_face(out, body.tier, body.pos, body.radius, body.rotation);
}

/// Occupancy gauge across the top; color shifts as the loss threshold nears
fn draw_gauge(out: &mut Vec<Vertex>, width: f32, occupancy: f32) {
    out.extend(shapes::rect(
        Vec2::ZERO,
        Vec2::new(width, GAUGE_HEIGHT),
        colors::GAUGE_TRACK,
    ));

    let fraction = (occupancy / 100.0).clamp(0.0, 1.0);
    if fraction <= 0.0 {
        return;
    }
    let color = if occupancy >= GAME_OVER_OCCUPANCY * 0.9 {
        colors::GAUGE_DANGER
    } else if occupancy >= GAME_OVER_OCCUPANCY * 0.6 {
        colors::GAUGE_WARN
    } else {
        colors::GAUGE_OK
    };
    out.extend(shapes::rect(
        Vec2::ZERO,
        Vec2::new(width * fraction, GAUGE_HEIGHT),
        color,
    ));
}
