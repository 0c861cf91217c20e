//! Body catalog - the ordered tier ladder
//!
//! Each merge promotes two equal bodies to the next entry. Radii are chosen so
//! that a merged body never covers less area than the two bodies it replaces.

use serde::Serialize;

/// One rung of the merge ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierDefinition {
    pub rank: usize,
    pub radius: f32,
    /// 0xRRGGBB
    pub color: u32,
    pub display_name: &'static str,
    pub score_value: u64,
}

const fn tier(
    rank: usize,
    radius: f32,
    color: u32,
    display_name: &'static str,
    score_value: u64,
) -> TierDefinition {
    TierDefinition {
        rank,
        radius,
        color,
        display_name,
        score_value,
    }
}

/// Number of tiers in the ladder
pub const TIER_COUNT: usize = 8;

/// Index of the terminal tier (never merges further)
pub const TERMINAL_TIER: usize = TIER_COUNT - 1;

/// The tier ladder, smallest first
pub static CATALOG: [TierDefinition; TIER_COUNT] = [
    tier(0, 15.0, 0xE8_3A_4A, "Cherry", 1),
    tier(1, 22.0, 0xFF_5E_7E, "Strawberry", 3),
    tier(2, 32.0, 0x9B_59_D0, "Grape", 6),
    tier(3, 46.0, 0xFF_A9_3A, "Orange", 10),
    tier(4, 66.0, 0xF2_6B_1D, "Persimmon", 15),
    tier(5, 94.0, 0xD9_2B_2B, "Apple", 21),
    tier(6, 133.0, 0xF5_C9_7A, "Peach", 28),
    tier(7, 189.0, 0x3D_B8_4A, "Watermelon", 36),
];

/// Look up a tier definition
///
/// Panics on an out-of-range tier; tiers only come from the catalog itself.
#[inline]
pub fn tier_def(tier: usize) -> &'static TierDefinition {
    &CATALOG[tier]
}

/// Radius of a tier
#[inline]
pub fn radius_of(tier: usize) -> f32 {
    CATALOG[tier].radius
}

/// Whether two bodies of this tier combine on contact
#[inline]
pub fn can_merge(tier: usize) -> bool {
    tier < TERMINAL_TIER
}

/// Convert a catalog color to linear-ish RGBA floats for rendering
pub fn color_rgba(color: u32, alpha: f32) -> [f32; 4] {
    let r = ((color >> 16) & 0xFF) as f32 / 255.0;
    let g = ((color >> 8) & 0xFF) as f32 / 255.0;
    let b = (color & 0xFF) as f32 / 255.0;
    [r, g, b, alpha]
}
