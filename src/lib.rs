//! Fruit Merge - a circle physics merge puzzle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (catalog, spawning, launching, stepping, fill)
//! - `snapshot`: Read-only per-frame view handed to render/UI collaborators
//! - `renderer`: CPU tessellation of a snapshot into colored triangles
//! - `settings`: Field dimensions, seed and pacing configuration

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use settings::{Settings, SettingsError};
pub use snapshot::Snapshot;

use glam::Vec2;

/// Simulation constants
///
/// Velocities are in field units per tick; every tick applies them once.
pub mod consts {
    /// Nominal tick rate of the reference game loop
    pub const SIM_HZ: u32 = 60;
    /// Ticks between a launch and the next pending body (1000 ms at 60 Hz)
    pub const SETTLE_DELAY_TICKS: u32 = 60;

    /// Default field dimensions
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 720.0;

    /// Per-tick velocity damping (surface friction)
    pub const DAMPING: f32 = 0.98;
    /// Wall bounce factor (30% energy loss, sign inverted at the call site)
    pub const WALL_RESTITUTION: f32 = 0.7;
    /// Body-body bounce factor (5% energy loss)
    pub const COLLISION_RESTITUTION: f32 = 0.95;
    /// Extra damping applied to a merged body's momentum
    pub const MERGE_DAMPING: f32 = 0.5;
    /// Visual spin per unit of horizontal velocity
    pub const ROTATION_FACTOR: f32 = 0.05;

    /// Launch speed per unit of aim distance
    pub const LAUNCH_SPEED_SCALE: f32 = 0.1;
    /// Hard cap on launch speed
    pub const MAX_LAUNCH_SPEED: f32 = 30.0;

    /// Spawn line distance above the bottom wall
    pub const SPAWN_LINE_OFFSET: f32 = 50.0;
    /// Horizontal search increment for spawn placement
    pub const SPAWN_SEARCH_STEP: f32 = 5.0;
    /// Only the first tiers are ever spawned directly
    pub const SPAWNABLE_TIERS: usize = 5;

    /// Occupancy percentage that ends the session
    pub const GAME_OVER_OCCUPANCY: f32 = 90.0;
}

/// Circle-circle overlap using center distance (touching is not overlapping)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Area of a circle
#[inline]
pub fn circle_area(radius: f32) -> f32 {
    std::f32::consts::PI * radius * radius
}
