//! Slot definitions - the fixed destinations around the seed.
//!
//! A `Slot` accepts exactly one token, named by `required_token`. The
//! placement angle is carried for the host's radial layout and has no
//! effect on matching.

use serde::{Deserialize, Serialize};

use super::token::TokenId;

/// Unique identifier for a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u32);

impl SlotId {
    /// Create a new slot ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Static slot definition.
///
/// ## Example
///
/// ```
/// use eden_puzzle::core::{Slot, SlotId, TokenId};
///
/// let slot = Slot::new(SlotId::new(0), TokenId::new(3)).with_angle(60.0);
///
/// assert_eq!(slot.required_token, TokenId::new(3));
/// assert_eq!(slot.angle_deg, 60.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Unique identifier for this slot.
    pub id: SlotId,

    /// The single token this slot accepts.
    pub required_token: TokenId,

    /// Layout angle in degrees (display-only).
    pub angle_deg: f32,
}

impl Slot {
    /// Create a new slot at angle 0.
    #[must_use]
    pub fn new(id: SlotId, required_token: TokenId) -> Self {
        Self {
            id,
            required_token,
            angle_deg: 0.0,
        }
    }

    /// Set the layout angle (builder pattern).
    #[must_use]
    pub fn with_angle(mut self, angle_deg: f32) -> Self {
        self.angle_deg = angle_deg;
        self
    }
}
