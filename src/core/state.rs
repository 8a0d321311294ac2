//! Attempt state: everything mutable during one play-through.
//!
//! ## AttemptState
//!
//! One instance per mounted engine, owned exclusively by it:
//! - Phase, selection, the committed-token set
//! - Placement history (observable order, for reveal animation)
//! - Countdown and the transient error / flash feedback
//!
//! Uses `im` persistent data structures so view snapshots clone in O(1).
//! The committed set only ever grows; a new attempt means a new state.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::slot::SlotId;
use super::token::TokenId;

/// Lifecycle phase of one attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttemptPhase {
    /// Engine mounted, countdown idle.
    #[default]
    NotStarted,
    /// Countdown running, placements accepted.
    InProgress,
    /// Every slot filled. Terminal.
    Complete,
}

/// Which feedback overlay a flash represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashKind {
    /// Correct placement.
    Success,
    /// Rune mismatch.
    Failure,
}

/// A transient full-screen feedback overlay.
///
/// Raised by a placement, expired by a deferred task. At most one is
/// active; a newer flash replaces the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    /// Success or failure styling.
    pub kind: FlashKind,

    /// Normalized screen origin for the effect (x, y in 0..=1).
    pub origin: (f32, f32),
}

impl Flash {
    /// Viewport center, where the reference host anchors both flashes.
    pub const CENTER: (f32, f32) = (0.5, 0.5);

    /// A success flash at the viewport center.
    #[must_use]
    pub fn success() -> Self {
        Self {
            kind: FlashKind::Success,
            origin: Self::CENTER,
        }
    }

    /// A failure flash at the viewport center.
    #[must_use]
    pub fn failure() -> Self {
        Self {
            kind: FlashKind::Failure,
            origin: Self::CENTER,
        }
    }
}

/// A committed placement, recorded in order.
///
/// Correctness never depends on this history; it exists so a host can
/// replay the reveal sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// The committed token.
    pub token: TokenId,

    /// The slot it was committed to.
    pub slot: SlotId,

    /// 0-based placement order within the attempt.
    pub sequence: u32,
}

/// Mutable state of one puzzle attempt.
///
/// Mutators are crate-private: only `PuzzleEngine` drives transitions,
/// which is what keeps the committed set monotonic and the selection
/// single-valued.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttemptState {
    phase: AttemptPhase,
    selected: Option<TokenId>,
    placed: ImHashSet<TokenId>,
    history: Vector<PlacementRecord>,
    remaining_secs: u32,
    last_error: Option<String>,
    flash: Option<Flash>,
}

impl AttemptState {
    /// Create a fresh attempt.
    ///
    /// The countdown shows the full duration before `start` is called.
    #[must_use]
    pub fn new(attempt_duration_secs: u32) -> Self {
        Self {
            phase: AttemptPhase::NotStarted,
            selected: None,
            placed: ImHashSet::new(),
            history: Vector::new(),
            remaining_secs: attempt_duration_secs,
            last_error: None,
            flash: None,
        }
    }

    // === Phase ===

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> AttemptPhase {
        self.phase
    }

    pub(crate) fn begin(&mut self, attempt_duration_secs: u32) {
        self.phase = AttemptPhase::InProgress;
        self.remaining_secs = attempt_duration_secs;
    }

    pub(crate) fn complete(&mut self) {
        self.phase = AttemptPhase::Complete;
    }

    // === Selection ===

    /// The token currently held by the user, if any.
    #[must_use]
    pub fn selected(&self) -> Option<TokenId> {
        self.selected
    }

    pub(crate) fn select(&mut self, token: TokenId) {
        self.selected = Some(token);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
    }

    // === Placements ===

    /// Has this token been committed to its slot?
    #[must_use]
    pub fn is_placed(&self, token: TokenId) -> bool {
        self.placed.contains(&token)
    }

    /// Number of committed tokens.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Committed placements in order.
    #[must_use]
    pub fn history(&self) -> &Vector<PlacementRecord> {
        &self.history
    }

    pub(crate) fn commit_placement(&mut self, token: TokenId, slot: SlotId) {
        let sequence = self.history.len() as u32;
        self.placed.insert(token);
        self.history.push_back(PlacementRecord {
            token,
            slot,
            sequence,
        });
    }

    // === Countdown ===

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Decrement one second, floored at 0. Returns the new value.
    pub(crate) fn decrement_second(&mut self) -> u32 {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.remaining_secs
    }

    // === Transient feedback ===

    /// The transient mismatch message, if one is up.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub(crate) fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// The active feedback flash, if one is up.
    #[must_use]
    pub fn flash(&self) -> Option<Flash> {
        self.flash
    }

    pub(crate) fn set_flash(&mut self, flash: Flash) {
        self.flash = Some(flash);
    }

    pub(crate) fn clear_flash(&mut self) {
        self.flash = None;
    }
}
