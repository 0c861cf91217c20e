//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame, velocities in units per tick
//! - Seeded RNG only
//! - Stable iteration order (insertion order of the active bodies)
//! - No rendering or platform dependencies

pub mod catalog;
pub mod collision;
pub mod fill;
pub mod launch;
pub mod spawn;
pub mod state;
pub mod tick;

pub use catalog::{CATALOG, TERMINAL_TIER, TIER_COUNT, TierDefinition, tier_def};
pub use collision::{WallHits, resolve_walls};
pub use fill::{crossed_threshold, occupancy_percent, update_fill};
pub use launch::{launch, launch_body, launch_velocity};
pub use spawn::{pick_random_tier, place_at_spawn_line, spawn_next};
pub use state::{
    ActiveBody, Arena, GamePhase, GameState, PendingBody, QueuedTier, Session, SimEvent,
};
pub use tick::{TickInput, step, tick};
