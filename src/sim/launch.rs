//! Launch controller - turns an aim point into a moving body

use glam::Vec2;

use super::state::{ActiveBody, GameState, PendingBody, SimEvent};
use crate::consts::{LAUNCH_SPEED_SCALE, MAX_LAUNCH_SPEED};

/// Initial velocity toward `aim`, proportional to distance and capped
pub fn launch_velocity(from: Vec2, aim: Vec2) -> Vec2 {
    let dir = aim - from;
    let speed = (dir.length() * LAUNCH_SPEED_SCALE).min(MAX_LAUNCH_SPEED);
    let angle = dir.y.atan2(dir.x);
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}

/// Turn a pending body into an active one aimed at `aim`
pub fn launch_body(pending: PendingBody, aim: Vec2) -> ActiveBody {
    ActiveBody::new(pending.tier, pending.pos, launch_velocity(pending.pos, aim))
}

/// Launch the pending body, if any, and schedule the next spawn
///
/// Returns `false` (and changes nothing) when there is nothing to launch or the
/// session is over.
pub fn launch(state: &mut GameState, aim: Vec2) -> bool {
    debug_assert!(aim.is_finite(), "aim point must be finite");
    if state.session.is_over {
        return false;
    }
    let Some(pending) = state.pending.take() else {
        return false;
    };

    let body = launch_body(pending, aim);
    log::debug!(
        "Launched tier {} with velocity ({:.2}, {:.2})",
        body.tier,
        body.vel.x,
        body.vel.y
    );
    state.events.push(SimEvent::Launched {
        tier: body.tier,
        vel: body.vel,
    });
    state.bodies.push(body);
    state.spawn_timer = Some(state.settle_delay_ticks);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Arena;

    #[test]
    fn test_speed_proportional_to_distance() {
        let v = launch_velocity(Vec2::new(100.0, 500.0), Vec2::new(100.0, 400.0));
        // 100 units up -> speed 10, straight up (negative y)
        assert!(v.x.abs() < 1e-4);
        assert!((v.y + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_speed_is_capped() {
        let v = launch_velocity(Vec2::ZERO, Vec2::new(3000.0, 4000.0));
        assert!((v.length() - MAX_LAUNCH_SPEED).abs() < 1e-3);
        // Direction preserved
        assert!((v.x / v.y - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_aim_at_self_is_zero_velocity() {
        let p = Vec2::new(50.0, 50.0);
        assert_eq!(launch_velocity(p, p), Vec2::ZERO);
    }

    #[test]
    fn test_launch_moves_pending_into_bodies() {
        let mut state = GameState::new(Arena::new(480.0, 720.0), 5);
        let pending = state.pending.expect("pending");

        assert!(launch(&mut state, Vec2::new(240.0, 100.0)));
        assert!(state.pending.is_none());
        assert_eq!(state.bodies.len(), 1);
        assert_eq!(state.bodies[0].tier, pending.tier);
        assert_eq!(state.bodies[0].pos, pending.pos);
        assert_eq!(state.spawn_timer, Some(state.settle_delay_ticks));
    }

    #[test]
    fn test_launch_without_pending_is_noop() {
        let mut state = GameState::new(Arena::new(480.0, 720.0), 5);
        assert!(launch(&mut state, Vec2::new(240.0, 100.0)));
        let bodies = state.bodies.clone();
        let timer = state.spawn_timer;

        assert!(!launch(&mut state, Vec2::new(10.0, 10.0)));
        assert_eq!(state.bodies, bodies);
        assert_eq!(state.spawn_timer, timer);
    }
}
