//! Configuration errors.
//!
//! The only fallible surface of the crate is `PuzzleEngine::new` /
//! `PuzzleConfig::validate`. Gameplay calls never fail; out-of-order or
//! malformed input is ignored per the engine's no-op policy.

use thiserror::Error;

use super::slot::SlotId;
use super::token::TokenId;

/// Errors produced by puzzle configuration validation.
///
/// Every variant is a violation of the token/slot bijection or of id
/// uniqueness. A config that passes `validate` can never make the engine
/// misbehave at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The puzzle needs at least one token and one slot.
    #[error("puzzle needs at least one token and one slot")]
    Empty,

    /// Two tokens share an id.
    #[error("duplicate token id {0}")]
    DuplicateToken(TokenId),

    /// Two slots share an id.
    #[error("duplicate slot id {0}")]
    DuplicateSlot(SlotId),

    /// A slot requires a token that is not in the token set.
    #[error("{slot} requires unknown {token}")]
    UnknownRequiredToken {
        /// The slot with the dangling requirement.
        slot: SlotId,
        /// The missing token id.
        token: TokenId,
    },

    /// Two slots require the same token.
    #[error("{token} is required by both {first} and {second}")]
    TokenRequiredTwice {
        /// The doubly-required token.
        token: TokenId,
        /// The slot that claimed it first.
        first: SlotId,
        /// The conflicting slot.
        second: SlotId,
    },

    /// A token has no slot that accepts it, so the puzzle can never be won.
    #[error("no slot accepts {0}")]
    TokenWithoutSlot(TokenId),
}
