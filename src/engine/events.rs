//! Engine events consumed by the host.
//!
//! Every observable thing the engine does is pushed here as a discrete
//! event and drained by the host on its next frame. The engine provides
//! the stream; what to render for each variant is the host's business.
//! Transient feedback (flashes, the mismatch banner) additionally lives
//! in the view state with its expiry handled by deferred tasks, so a
//! host may ignore events entirely and just poll snapshots.

use serde::Serialize;

use crate::core::{FlashKind, SlotId, TokenId};

/// A discrete engine notification.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PuzzleEvent {
    /// `start` accepted; the countdown is running.
    AttemptStarted {
        /// Countdown starting value.
        duration_secs: u32,
    },

    /// A token became the active selection.
    TokenSelected {
        /// The newly held token.
        token: TokenId,
    },

    /// The active selection was dropped (toggle or placement).
    SelectionCleared,

    /// A token was committed to its slot.
    TokenPlaced {
        /// The committed token.
        token: TokenId,
        /// The slot it landed in.
        slot: SlotId,
        /// Committed tokens so far.
        placed: u32,
        /// Total tokens in the puzzle.
        total: u32,
    },

    /// A placement failed the matching rule.
    PlacementRejected {
        /// The token that was held.
        token: TokenId,
        /// The slot it was aimed at.
        slot: SlotId,
        /// The transient message now showing.
        message: String,
    },

    /// The mismatch message auto-cleared.
    ErrorCleared,

    /// A feedback flash reached the end of its lifetime.
    FlashExpired {
        /// Which flash expired.
        kind: FlashKind,
    },

    /// The countdown lost a second.
    CountdownTick {
        /// Seconds now remaining.
        remaining_secs: u32,
    },

    /// Every slot is filled; the attempt is over.
    AttemptComplete,

    /// The completion delay elapsed and the host callback (if any) ran.
    CompletionAcknowledged,
}
