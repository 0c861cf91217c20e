//! Read-only frame snapshot for render and UI collaborators
//!
//! Captured after each tick; nothing here feeds back into the simulation.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GamePhase, GameState, tier_def};

/// A body as a renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyView {
    pub tier: usize,
    pub pos: Vec2,
    pub radius: f32,
    pub color: u32,
    pub rotation: f32,
}

/// Next-tier preview
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QueuedView {
    pub tier: usize,
    pub radius: f32,
    pub color: u32,
    pub display_name: &'static str,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Seed the session's RNG started from, for replaying a run
    pub seed: u64,
    pub width: f32,
    pub height: f32,
    pub bodies: Vec<BodyView>,
    pub pending: Option<BodyView>,
    pub queued: Option<QueuedView>,
    pub score: u64,
    pub occupancy: f32,
    pub is_over: bool,
    pub phase: GamePhase,
    pub time_ticks: u64,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let bodies = state
            .bodies
            .iter()
            .map(|b| body_view(b.tier, b.pos, b.rotation))
            .collect();
        let pending = state.pending.map(|p| body_view(p.tier, p.pos, 0.0));
        let queued = state.queued.map(|q| {
            let def = q.def();
            QueuedView {
                tier: q.tier,
                radius: def.radius,
                color: def.color,
                display_name: def.display_name,
            }
        });

        Self {
            seed: state.seed,
            width: state.arena.width,
            height: state.arena.height,
            bodies,
            pending,
            queued,
            score: state.session.score,
            occupancy: state.occupancy,
            is_over: state.session.is_over,
            phase: state.phase(),
            time_ticks: state.time_ticks,
        }
    }
}

fn body_view(tier: usize, pos: Vec2, rotation: f32) -> BodyView {
    let def = tier_def(tier);
    BodyView {
        tier,
        pos,
        radius: def.radius,
        color: def.color,
        rotation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ActiveBody, Arena};

    #[test]
    fn test_capture_mirrors_state() {
        let mut state = GameState::new(Arena::new(480.0, 720.0), 3);
        state
            .bodies
            .push(ActiveBody::new(3, Vec2::new(100.0, 200.0), Vec2::new(1.0, 0.0)));
        state.session.score = 17;

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.bodies.len(), 1);
        assert_eq!(snap.bodies[0].radius, tier_def(3).radius);
        assert_eq!(snap.bodies[0].color, tier_def(3).color);
        assert_eq!(snap.score, 17);
        assert_eq!(snap.seed, 3);
        assert!(snap.pending.is_some());
        assert_eq!(snap.queued.map(|q| q.tier), state.queued.map(|q| q.tier));
        assert_eq!(snap.phase, GamePhase::Aiming);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(Arena::new(480.0, 720.0), 3);
        let json = serde_json::to_string(&Snapshot::capture(&state)).expect("json");
        assert!(json.contains("\"is_over\":false"));
        assert!(json.contains("\"phase\":\"Aiming\""));
        assert!(json.contains("\"seed\":3"));
    }
}
