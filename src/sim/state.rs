//! Game state and core simulation types
//!
//! Everything the step, launch and spawn operations touch lives in `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::catalog::{TierDefinition, radius_of, tier_def};
use crate::consts::SETTLE_DELAY_TICKS;

/// Rectangular play field, origin top-left, y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    /// Build an arena; dimensions must already be validated as finite and positive
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width.is_finite() && width > 0.0);
        debug_assert!(height.is_finite() && height > 0.0);
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

/// Derived phase, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// A pending body waits for a launch
    Aiming,
    /// Settle delay running, nothing to launch
    Settling,
    /// Fill threshold reached; frozen until reset
    GameOver,
}

/// A live simulated circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveBody {
    pub tier: usize,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Cosmetic spin angle (radians)
    pub rotation: f32,
}

impl ActiveBody {
    pub fn new(tier: usize, pos: Vec2, vel: Vec2) -> Self {
        Self {
            tier,
            pos,
            vel,
            rotation: 0.0,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        radius_of(self.tier)
    }
}

/// The body staged on the spawn line, at rest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingBody {
    pub tier: usize,
    pub pos: Vec2,
}

impl PendingBody {
    #[inline]
    pub fn radius(&self) -> f32 {
        radius_of(self.tier)
    }
}

/// Tier chosen for the body after the current pending one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedTier {
    pub tier: usize,
}

impl QueuedTier {
    pub fn def(&self) -> &'static TierDefinition {
        tier_def(self.tier)
    }
}

/// Score and terminal flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub score: u64,
    pub is_over: bool,
}

/// Things that happened during a tick (for sound/UI collaborators)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SimEvent {
    Launched { tier: usize, vel: Vec2 },
    WallHit { tier: usize, speed: f32 },
    Spawned { tier: usize, pos: Vec2 },
    Merged { tier: usize, pos: Vec2, points: u64 },
    GameOver { score: u64 },
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    pub seed: u64,
    pub arena: Arena,
    /// Active bodies, in insertion order
    pub bodies: Vec<ActiveBody>,
    pub pending: Option<PendingBody>,
    pub queued: Option<QueuedTier>,
    pub session: Session,
    /// Ticks left before the next spawn, if a spawn is scheduled
    pub spawn_timer: Option<u32>,
    pub settle_delay_ticks: u32,
    /// Occupancy measured after the latest step
    pub occupancy: f32,
    pub time_ticks: u64,
    /// Events from the latest tick
    pub events: Vec<SimEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh session with a pending body already on the spawn line
    pub fn new(arena: Arena, seed: u64) -> Self {
        let mut state = Self {
            seed,
            arena,
            bodies: Vec::new(),
            pending: None,
            queued: None,
            session: Session::default(),
            spawn_timer: None,
            settle_delay_ticks: SETTLE_DELAY_TICKS,
            occupancy: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset();
        state
    }

    /// Reinitialize the whole session
    ///
    /// A scheduled spawn is cancelled so it cannot fire into the new session.
    /// The RNG stream continues, so successive sessions differ.
    pub fn reset(&mut self) {
        self.bodies.clear();
        self.session = Session::default();
        self.spawn_timer = None;
        self.occupancy = 0.0;
        self.time_ticks = 0;
        self.pending = None;
        self.queued = None;
        super::spawn::spawn_next(self);
        log::info!(
            "Session reset (seed {}): {}x{} field, first tier {:?}",
            self.seed,
            self.arena.width,
            self.arena.height,
            self.pending.map(|p| p.tier)
        );
    }

    pub fn score(&self) -> u64 {
        self.session.score
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over
    }

    pub fn phase(&self) -> GamePhase {
        if self.session.is_over {
            GamePhase::GameOver
        } else if self.pending.is_some() {
            GamePhase::Aiming
        } else {
            GamePhase::Settling
        }
    }
}
