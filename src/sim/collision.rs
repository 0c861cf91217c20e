//! Collision detection and response for circles
//!
//! Walls are axis-aligned; bodies are circles whose radius doubles as mass.

use glam::Vec2;

use super::state::{ActiveBody, Arena};
use crate::consts::{COLLISION_RESTITUTION, MERGE_DAMPING, WALL_RESTITUTION};

/// Which walls a body touched this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Clamp a body inside the arena and bounce it off any wall it crossed
///
/// Axes are independent, so a corner hit bounces both components.
pub fn resolve_walls(body: &mut ActiveBody, radius: f32, arena: &Arena) -> WallHits {
    let mut hits = WallHits::default();

    if body.pos.x - radius < 0.0 {
        body.pos.x = radius;
        body.vel.x *= -WALL_RESTITUTION;
        hits.left = true;
    } else if body.pos.x + radius > arena.width {
        body.pos.x = arena.width - radius;
        body.vel.x *= -WALL_RESTITUTION;
        hits.right = true;
    }

    if body.pos.y - radius < 0.0 {
        body.pos.y = radius;
        body.vel.y *= -WALL_RESTITUTION;
        hits.top = true;
    } else if body.pos.y + radius > arena.height {
        body.pos.y = arena.height - radius;
        body.vel.y *= -WALL_RESTITUTION;
        hits.bottom = true;
    }

    hits
}

/// Pull a body back inside the arena without touching its velocity
///
/// Pair separation and merge placement can push a body past a wall after the
/// bounce has already been resolved for this tick.
pub fn contain(body: &mut ActiveBody, radius: f32, arena: &Arena) {
    body.pos.x = body.pos.x.max(radius).min(arena.width - radius);
    body.pos.y = body.pos.y.max(radius).min(arena.height - radius);
}

/// Result of a circle-circle overlap check
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Unit vector from the first body toward the second
    pub normal: Vec2,
    /// How far the circles interpenetrate
    pub penetration: f32,
}

/// Overlap test between two circles; `None` if they are apart or just touching
pub fn circle_contact(a: Vec2, ra: f32, b: Vec2, rb: f32) -> Option<Contact> {
    let delta = b - a;
    let dist = delta.length();
    let min_dist = ra + rb;
    if dist >= min_dist {
        return None;
    }
    // Coincident centers have no defined direction; push apart along x
    let normal = if dist > 0.0 { delta / dist } else { Vec2::X };
    Some(Contact {
        normal,
        penetration: min_dist - dist,
    })
}

/// Move both bodies apart by half the penetration each
pub fn separate(a: &mut ActiveBody, b: &mut ActiveBody, contact: &Contact) {
    let half = contact.normal * (contact.penetration / 2.0);
    a.pos -= half;
    b.pos += half;
}

/// 1D elastic exchange on each axis with radius standing in for mass, then damped
pub fn bounce_velocities(v1: Vec2, m1: f32, v2: Vec2, m2: f32) -> (Vec2, Vec2) {
    let total = m1 + m2;
    let v1_new = (v1 * (m1 - m2) + 2.0 * m2 * v2) / total;
    let v2_new = (v2 * (m2 - m1) + 2.0 * m1 * v1) / total;
    (v1_new * COLLISION_RESTITUTION, v2_new * COLLISION_RESTITUTION)
}

/// Velocity of the body produced by a merge
///
/// Momentum with the old radii as masses, divided by the new radius, then halved.
pub fn merged_velocity(v1: Vec2, m1: f32, v2: Vec2, m2: f32, new_mass: f32) -> Vec2 {
    (m1 * v1 + m2 * v2) / new_mass * MERGE_DAMPING
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(400.0, 600.0)
    }

    #[test]
    fn test_right_wall_clamps_and_bounces() {
        let mut body = ActiveBody::new(0, Vec2::new(395.0, 300.0), Vec2::new(10.0, 0.0));
        let hits = resolve_walls(&mut body, 15.0, &arena());
        assert!(hits.right && !hits.left);
        assert_eq!(body.pos.x, 385.0);
        assert!((body.vel.x - (-7.0)).abs() < 1e-5);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_corner_bounces_both_axes() {
        let mut body = ActiveBody::new(0, Vec2::new(-3.0, -3.0), Vec2::new(-4.0, -2.0));
        let hits = resolve_walls(&mut body, 15.0, &arena());
        assert!(hits.left && hits.top);
        assert_eq!(body.pos, Vec2::new(15.0, 15.0));
        assert!(body.vel.x > 0.0 && body.vel.y > 0.0);
    }

    #[test]
    fn test_inside_body_untouched() {
        let mut body = ActiveBody::new(0, Vec2::new(200.0, 300.0), Vec2::new(3.0, 4.0));
        let before = body;
        assert!(!resolve_walls(&mut body, 15.0, &arena()).any());
        assert_eq!(body, before);
    }

    #[test]
    fn test_contact_requires_strict_overlap() {
        assert!(circle_contact(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0).is_none());
        let c = circle_contact(Vec2::ZERO, 10.0, Vec2::new(15.0, 0.0), 10.0).expect("contact");
        assert_eq!(c.normal, Vec2::X);
        assert!((c.penetration - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_centers_push_along_x() {
        let p = Vec2::new(200.0, 300.0);
        let c = circle_contact(p, 15.0, p, 22.0).expect("contact");
        assert_eq!(c.normal, Vec2::X);
        assert_eq!(c.penetration, 37.0);

        let mut a = ActiveBody::new(0, p, Vec2::ZERO);
        let mut b = ActiveBody::new(1, p, Vec2::ZERO);
        separate(&mut a, &mut b, &c);
        assert!(a.pos.distance(b.pos) >= 37.0 - 1e-4);
        assert!(a.pos.x < b.pos.x);
        assert_eq!(a.pos.y, b.pos.y);
    }

    #[test]
    fn test_contain_clamps_without_bouncing() {
        let mut body = ActiveBody::new(0, Vec2::new(410.0, -4.0), Vec2::new(3.0, -2.0));
        contain(&mut body, 15.0, &arena());
        assert_eq!(body.pos, Vec2::new(385.0, 15.0));
        assert_eq!(body.vel, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_separation_restores_min_distance() {
        let mut a = ActiveBody::new(0, Vec2::new(100.0, 100.0), Vec2::ZERO);
        let mut b = ActiveBody::new(1, Vec2::new(110.0, 120.0), Vec2::ZERO);
        let contact = circle_contact(a.pos, 15.0, b.pos, 22.0).expect("contact");
        separate(&mut a, &mut b, &contact);
        assert!((a.pos.distance(b.pos) - 37.0).abs() < 1e-3);
    }

    #[test]
    fn test_equal_masses_swap_velocities() {
        let (v1, v2) = bounce_velocities(Vec2::new(4.0, 0.0), 15.0, Vec2::new(-2.0, 1.0), 15.0);
        assert!((v1 - Vec2::new(-2.0, 1.0) * 0.95).length() < 1e-5);
        assert!((v2 - Vec2::new(4.0, 0.0) * 0.95).length() < 1e-5);
    }

    #[test]
    fn test_merged_velocity_halves_momentum() {
        let v = merged_velocity(Vec2::new(2.0, 0.0), 15.0, Vec2::new(0.0, 2.0), 15.0, 22.0);
        let expected = Vec2::new(30.0, 30.0) / 22.0 * 0.5;
        assert!((v - expected).length() < 1e-6);
    }
}
