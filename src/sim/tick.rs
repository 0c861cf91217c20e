//! Fixed simulation tick
//!
//! `step` advances the physics once; `tick` wraps it with input handling,
//! the fill check and the settle timer.

use glam::Vec2;

use super::catalog::{can_merge, radius_of, tier_def};
use super::collision::{
    bounce_velocities, circle_contact, contain, merged_velocity, resolve_walls, separate,
};
use super::fill::update_fill;
use super::launch::launch;
use super::spawn::spawn_next;
use super::state::{ActiveBody, GameState, SimEvent};
use crate::consts::{DAMPING, ROTATION_FACTOR};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Aim point in field coordinates
    pub aim: Option<Vec2>,
    /// Launch the pending body toward `aim`
    pub launch: bool,
    /// Reinitialize the session before anything else
    pub restart: bool,
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if input.restart {
        state.reset();
    }

    if state.session.is_over {
        return;
    }

    if input.launch {
        if let Some(aim) = input.aim {
            launch(state, aim);
        }
    }

    step(state);
    update_fill(state);
    if state.session.is_over {
        return;
    }

    if let Some(remaining) = state.spawn_timer {
        if remaining <= 1 {
            state.spawn_timer = None;
            spawn_next(state);
        } else {
            state.spawn_timer = Some(remaining - 1);
        }
    }
}

/// Advance all active bodies by one tick: integrate, bounce, collide, merge
pub fn step(state: &mut GameState) {
    state.time_ticks += 1;

    for body in &mut state.bodies {
        integrate(body);
        let hits = resolve_walls(body, radius_of(body.tier), &state.arena);
        if hits.any() {
            state.events.push(SimEvent::WallHit {
                tier: body.tier,
                speed: body.vel.length(),
            });
        }
    }

    resolve_pairs(state);

    for body in &mut state.bodies {
        contain(body, radius_of(body.tier), &state.arena);
    }
}

/// Damp, move and spin one body
fn integrate(body: &mut ActiveBody) {
    body.vel *= DAMPING;
    body.pos += body.vel;
    body.rotation += body.vel.x * ROTATION_FACTOR;
}

/// Pairwise collision pass over the bodies present at the start of the pass
///
/// Pairs are visited in index order. A merge consumes both bodies and ends the
/// inner scan for that first body; consumed bodies are skipped by every later
/// pair. Merged bodies are appended once the pass is done.
fn resolve_pairs(state: &mut GameState) {
    let count = state.bodies.len();
    let mut consumed = vec![false; count];
    let mut merged: Vec<ActiveBody> = Vec::new();

    for i in 0..count {
        if consumed[i] {
            continue;
        }
        for j in (i + 1)..count {
            if consumed[j] {
                continue;
            }

            let (head, tail) = state.bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            let (ra, rb) = (a.radius(), b.radius());

            let Some(contact) = circle_contact(a.pos, ra, b.pos, rb) else {
                continue;
            };
            separate(a, b, &contact);
            let (va, vb) = bounce_velocities(a.vel, ra, b.vel, rb);
            a.vel = va;
            b.vel = vb;

            if a.tier == b.tier && can_merge(a.tier) {
                let def = tier_def(a.tier + 1);
                let pos = (a.pos + b.pos) / 2.0;
                let vel = merged_velocity(a.vel, ra, b.vel, rb, def.radius);
                merged.push(ActiveBody::new(def.rank, pos, vel));

                consumed[i] = true;
                consumed[j] = true;
                state.session.score += def.score_value;
                state.events.push(SimEvent::Merged {
                    tier: def.rank,
                    pos,
                    points: def.score_value,
                });
                log::info!(
                    "Merged into {} (+{}), score {}",
                    def.display_name,
                    def.score_value,
                    state.session.score
                );
                break;
            }
        }
    }

    if merged.is_empty() {
        return;
    }
    let mut flags = consumed.into_iter();
    state.bodies.retain(|_| !flags.next().unwrap_or(false));
    state.bodies.extend(merged);
}
