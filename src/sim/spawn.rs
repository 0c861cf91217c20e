//! Spawn planning
//!
//! Picks the next tier and finds a free spot for it on the spawn line.

use glam::Vec2;
use rand::Rng;

use super::catalog::radius_of;
use super::state::{ActiveBody, Arena, GameState, PendingBody, QueuedTier, SimEvent};
use crate::circles_overlap;
use crate::consts::{SPAWN_LINE_OFFSET, SPAWN_SEARCH_STEP, SPAWNABLE_TIERS};

/// Uniformly pick one of the directly spawnable tiers
pub fn pick_random_tier<R: Rng>(rng: &mut R) -> usize {
    rng.random_range(0..SPAWNABLE_TIERS)
}

/// Find a spawn-line position for a body of `tier`
///
/// Starts at the horizontal center and, if that spot overlaps an active body,
/// walks outward in fixed steps trying right before left. A candidate must keep
/// the whole circle inside the side walls and touch nothing. If the search runs
/// off both walls the center is returned anyway.
pub fn place_at_spawn_line(tier: usize, bodies: &[ActiveBody], arena: &Arena) -> Vec2 {
    let radius = radius_of(tier);
    let y = arena.height - SPAWN_LINE_OFFSET;
    let center = Vec2::new(arena.center_x(), y);

    let is_free =
        |pos: Vec2| !bodies.iter().any(|b| circles_overlap(pos, radius, b.pos, b.radius()));
    let in_bounds = |x: f32| x - radius >= 0.0 && x + radius <= arena.width;

    if is_free(center) {
        return center;
    }

    let mut offset = SPAWN_SEARCH_STEP;
    loop {
        let right = Vec2::new(center.x + offset, y);
        let left = Vec2::new(center.x - offset, y);
        let right_ok = in_bounds(right.x);
        let left_ok = in_bounds(left.x);

        if !right_ok && !left_ok {
            break;
        }
        if right_ok && is_free(right) {
            return right;
        }
        if left_ok && is_free(left) {
            return left;
        }
        offset += SPAWN_SEARCH_STEP;
    }

    log::warn!("No free spawn slot for tier {tier}, placing at center with overlap");
    center
}

/// Promote the queued tier to a pending body and queue a fresh tier
///
/// With nothing queued (fresh session) both tiers are rolled.
pub fn spawn_next(state: &mut GameState) {
    let tier = match state.queued.take() {
        Some(queued) => queued.tier,
        None => pick_random_tier(&mut state.rng),
    };
    state.queued = Some(QueuedTier {
        tier: pick_random_tier(&mut state.rng),
    });

    let pos = place_at_spawn_line(tier, &state.bodies, &state.arena);
    state.pending = Some(PendingBody { tier, pos });
    state.events.push(SimEvent::Spawned { tier, pos });
    log::debug!("Spawned tier {tier} at ({:.1}, {:.1})", pos.x, pos.y);
}
