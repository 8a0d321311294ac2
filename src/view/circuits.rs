//! Decorative circuit-pattern generation.
//!
//! The host draws thin radial traces behind the seed while the puzzle
//! runs. Angles are evenly spaced; length and animation delay are drawn
//! from the seeded RNG, so a host re-rendering from the same seed gets
//! the same pattern.

use serde::Serialize;

use crate::core::PuzzleRng;

/// One radial trace.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CircuitPattern {
    /// Rotation from the seed center, degrees.
    pub angle_deg: f32,
    /// Trace length in layout units.
    pub length: f32,
    /// Animation start delay in seconds.
    pub delay_secs: f32,
}

/// Generate `count` traces, evenly spaced around the circle.
///
/// Lengths fall in 40..100, delays in 0..5.
#[must_use]
pub fn circuit_patterns(count: u32, rng: &mut PuzzleRng) -> Vec<CircuitPattern> {
    (0..count)
        .map(|i| CircuitPattern {
            angle_deg: i as f32 / count as f32 * 360.0,
            length: rng.gen_f32(40.0..100.0),
            delay_secs: rng.gen_f32(0.0..5.0),
        })
        .collect()
}
