//! Fill monitor - how much of the field the bodies cover

use super::state::{ActiveBody, GameState, SimEvent};
use crate::circle_area;
use crate::consts::GAME_OVER_OCCUPANCY;

/// Summed circle area as a percentage of the field, clamped to 100
///
/// Overlapping bodies are counted twice, hence the clamp.
pub fn occupancy_percent(bodies: &[ActiveBody], field_area: f32) -> f32 {
    let covered: f32 = bodies.iter().map(|b| circle_area(b.radius())).sum();
    (covered / field_area * 100.0).min(100.0)
}

/// Whether an occupancy reading is at or past the loss threshold
#[inline]
pub fn crossed_threshold(percent: f32) -> bool {
    percent >= GAME_OVER_OCCUPANCY
}

/// Refresh the cached occupancy and end the session the first time it crosses
///
/// Returns `true` only on the tick the session ends.
pub fn update_fill(state: &mut GameState) -> bool {
    state.occupancy = occupancy_percent(&state.bodies, state.arena.area());
    if state.session.is_over || !crossed_threshold(state.occupancy) {
        return false;
    }

    state.session.is_over = true;
    state.spawn_timer = None;
    state.events.push(SimEvent::GameOver {
        score: state.session.score,
    });
    log::info!(
        "Game over at {:.1}% occupancy, score {}",
        state.occupancy,
        state.session.score
    );
    true
}
