//! Per-tier face drawings
//!
//! Faces are purely cosmetic. Each tier maps to one drawing routine through
//! `FACES`; all routines work in the body's local frame (unit radius, rotated).

use glam::Vec2;
use std::f32::consts::PI;

use super::shapes::{arc_band, circle, ellipse};
use super::vertex::{Vertex, colors};
use crate::sim::TIER_COUNT;

/// Draw a face for a body at `center` with `radius`, spun by `rotation`
pub type FaceFn = fn(out: &mut Vec<Vertex>, center: Vec2, radius: f32, rotation: f32);

/// Tier -> face routine
pub static FACES: [FaceFn; TIER_COUNT] = [
    face_smile,
    face_wink,
    face_surprised,
    face_smile,
    face_sleepy,
    face_grin,
    face_sleepy,
    face_grin,
];

/// Draw the face for `tier`
pub fn draw_face(out: &mut Vec<Vertex>, tier: usize, center: Vec2, radius: f32, rotation: f32) {
    if let Some(face) = FACES.get(tier) {
        face(out, center, radius, rotation);
    }
}

/// Local (unit-radius) offset to world position
fn local(center: Vec2, radius: f32, rotation: f32, offset: Vec2) -> Vec2 {
    center + Vec2::from_angle(rotation).rotate(offset * radius)
}

fn eyes(out: &mut Vec<Vertex>, center: Vec2, radius: f32, rotation: f32, size: f32) {
    for side in [-1.0, 1.0] {
        let eye = local(center, radius, rotation, Vec2::new(0.32 * side, -0.15));
        out.extend(circle(eye, radius * size, colors::FACE, 10));
    }
}

fn cheeks(out: &mut Vec<Vertex>, center: Vec2, radius: f32, rotation: f32) {
    for side in [-1.0, 1.0] {
        let cheek = local(center, radius, rotation, Vec2::new(0.5 * side, 0.15));
        out.extend(ellipse(
            cheek,
            Vec2::new(radius * 0.14, radius * 0.08),
            rotation,
            colors::CHEEK,
            10,
        ));
    }
}

/// Mouth as a band along the lower part of a small circle; y grows downward
fn mouth(out: &mut Vec<Vertex>, center: Vec2, radius: f32, rotation: f32, width: f32) {
    let mouth_center = local(center, radius, rotation, Vec2::new(0.0, 0.05));
    let r = radius * width;
    out.extend(arc_band(
        mouth_center,
        r * 0.8,
        r,
        rotation + PI * 0.2,
        PI * 0.6,
        colors::FACE,
        8,
    ));
}

fn highlight(out: &mut Vec<Vertex>, center: Vec2, radius: f32) {
    // Fixed light direction, unaffected by spin
    let spot = center + Vec2::new(-0.45, -0.45) * radius;
    out.extend(circle(spot, radius * 0.18, colors::HIGHLIGHT, 10));
}

fn face_smile(out: &mut Vec<Vertex>, center: Vec2, radius: f32, rotation: f32) {
    eyes(out, center, radius, rotation, 0.08);
    mouth(out, center, radius, rotation, 0.3);
    highlight(out, center, radius);
}

fn face_wink(out: &mut Vec<Vertex>, center: Vec2, radius: f32, rotation: f32) {
    let open = local(center, radius, rotation, Vec2::new(-0.32, -0.15));
    out.extend(circle(open, radius * 0.08, colors::FACE, 10));
    let closed = local(center, radius, rotation, Vec2::new(0.32, -0.15));
    out.extend(ellipse(
        closed,
        Vec2::new(radius * 0.12, radius * 0.03),
        rotation,
        colors::FACE,
        8,
    ));
    mouth(out, center, radius, rotation, 0.25);
    cheeks(out, center, radius, rotation);
    highlight(out, center, radius);
}

fn face_surprised(out: &mut Vec<Vertex>, center: Vec2, radius: f32, rotation: f32) {
    eyes(out, center, radius, rotation, 0.1);
    let o = local(center, radius, rotation, Vec2::new(0.0, 0.3));
    out.extend(circle(o, radius * 0.12, colors::FACE, 12));
    highlight(out, center, radius);
}

fn face_sleepy(out: &mut Vec<Vertex>, center: Vec2, radius: f32, rotation: f32) {
    for side in [-1.0, 1.0] {
        let lid = local(center, radius, rotation, Vec2::new(0.32 * side, -0.1));
        out.extend(ellipse(
            lid,
            Vec2::new(radius * 0.13, radius * 0.025),
            rotation,
            colors::FACE,
            8,
        ));
    }
    mouth(out, center, radius, rotation, 0.15);
    highlight(out, center, radius);
}

fn face_grin(out: &mut Vec<Vertex>, center: Vec2, radius: f32, rotation: f32) {
    eyes(out, center, radius, rotation, 0.07);
    mouth(out, center, radius, rotation, 0.42);
    cheeks(out, center, radius, rotation);
    highlight(out, center, radius);
}
