//! Effects-level policy.
//!
//! Slower devices get fewer decorative circuits. The host samples its
//! own timing microbenchmark and passes the elapsed time in; this
//! module only maps the hint to a level. It never measures anything
//! itself and never touches attempt state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Visual density tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectsLevel {
    /// Slow device: minimal decoration.
    Low,
    /// Middling device.
    Medium,
    /// Full decoration.
    #[default]
    High,
}

/// Sample above this is a slow device.
const LOW_THRESHOLD: Duration = Duration::from_millis(10);
/// Sample above this (but under `LOW_THRESHOLD`) is a middling device.
const MEDIUM_THRESHOLD: Duration = Duration::from_millis(5);

impl EffectsLevel {
    /// Classify a host-measured benchmark sample.
    #[must_use]
    pub fn from_sample(elapsed: Duration) -> Self {
        if elapsed > LOW_THRESHOLD {
            EffectsLevel::Low
        } else if elapsed > MEDIUM_THRESHOLD {
            EffectsLevel::Medium
        } else {
            EffectsLevel::High
        }
    }

    /// Decorative circuit count for this level.
    ///
    /// Mobile always renders the low count regardless of level.
    #[must_use]
    pub fn circuit_count(self, mobile: bool) -> u32 {
        if mobile {
            return 4;
        }
        match self {
            EffectsLevel::Low => 4,
            EffectsLevel::Medium => 8,
            EffectsLevel::High => 12,
        }
    }
}
