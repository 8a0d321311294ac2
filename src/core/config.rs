//! Puzzle configuration.
//!
//! Hosts configure the engine at construction by providing:
//! - the token set (the runes)
//! - the slot set (the destinations, each naming its required token)
//! - `TimingConfig`: countdown duration and the deferred-effect delays
//!
//! The engine never hardcodes a dataset - `presets::corrupted_seed` is
//! just one configuration of it. The token/slot mapping must be a
//! bijection; `validate` enforces that before an engine is built.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::slot::{Slot, SlotId};
use super::token::{Token, TokenId};

/// Timing constants for one attempt.
///
/// All deferred effects in the engine (error auto-clear, feedback flash
/// expiry, the completion callback delay) take their durations from here,
/// so variant tunings are configurations rather than code changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Countdown starting value when an attempt begins.
    pub attempt_duration_secs: u32,

    /// Delay between completing the puzzle and notifying the host.
    /// Long enough for the completion acknowledgment to render.
    pub completion_delay: Duration,

    /// How long a mismatch message stays up before auto-clearing.
    pub error_clear_delay: Duration,

    /// Lifetime of the success feedback flash.
    pub success_flash: Duration,

    /// Lifetime of the failure feedback flash.
    pub failure_flash: Duration,

    /// Countdown values strictly below this raise the low-time warning.
    pub low_time_threshold_secs: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            attempt_duration_secs: 60,
            completion_delay: Duration::from_secs(2),
            error_clear_delay: Duration::from_millis(1500),
            success_flash: Duration::from_secs(1),
            failure_flash: Duration::from_millis(1200),
            low_time_threshold_secs: 15,
        }
    }
}

/// Complete puzzle configuration.
///
/// ## Example
///
/// ```
/// use eden_puzzle::core::{PuzzleConfig, Slot, SlotId, Token, TokenId};
///
/// let config = PuzzleConfig::new()
///     .with_token(Token::new(TokenId::new(0), "Aetheria", "Ω"))
///     .with_slot(Slot::new(SlotId::new(0), TokenId::new(0)));
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Token definitions, in display order.
    pub tokens: Vec<Token>,

    /// Slot definitions, in display order.
    pub slots: Vec<Slot>,

    /// Timing constants.
    pub timing: TimingConfig,
}

impl PuzzleConfig {
    /// Create an empty configuration with default timing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token (builder pattern).
    #[must_use]
    pub fn with_token(mut self, token: Token) -> Self {
        self.tokens.push(token);
        self
    }

    /// Add a slot (builder pattern).
    #[must_use]
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Replace the timing constants (builder pattern).
    #[must_use]
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Number of tokens (equals the number of slots in a valid config).
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Get a token definition by ID.
    #[must_use]
    pub fn get_token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    /// Get a slot definition by ID.
    #[must_use]
    pub fn get_slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Check the token/slot bijection.
    ///
    /// Passing means: ids are unique on both sides, every slot requires a
    /// known token, no token is required twice, and every token has a
    /// slot. Any N >= 1 is accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tokens.is_empty() || self.slots.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut token_ids = std::collections::HashSet::new();
        for token in &self.tokens {
            if !token_ids.insert(token.id) {
                return Err(ConfigError::DuplicateToken(token.id));
            }
        }

        let mut slot_ids = std::collections::HashSet::new();
        let mut required: std::collections::HashMap<TokenId, SlotId> =
            std::collections::HashMap::new();
        for slot in &self.slots {
            if !slot_ids.insert(slot.id) {
                return Err(ConfigError::DuplicateSlot(slot.id));
            }
            if !token_ids.contains(&slot.required_token) {
                return Err(ConfigError::UnknownRequiredToken {
                    slot: slot.id,
                    token: slot.required_token,
                });
            }
            if let Some(&first) = required.get(&slot.required_token) {
                return Err(ConfigError::TokenRequiredTwice {
                    token: slot.required_token,
                    first,
                    second: slot.id,
                });
            }
            required.insert(slot.required_token, slot.id);
        }

        for token in &self.tokens {
            if !required.contains_key(&token.id) {
                return Err(ConfigError::TokenWithoutSlot(token.id));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paired_config(n: u32) -> PuzzleConfig {
        let mut config = PuzzleConfig::new();
        for i in 0..n {
            config = config
                .with_token(Token::new(TokenId::new(i), format!("Rune {}", i), "Ω"))
                .with_slot(Slot::new(SlotId::new(i), TokenId::new(i)));
        }
        config
    }

    #[test]
    fn test_default_timing() {
        let timing = TimingConfig::default();

        assert_eq!(timing.attempt_duration_secs, 60);
        assert_eq!(timing.completion_delay, Duration::from_secs(2));
        assert_eq!(timing.error_clear_delay, Duration::from_millis(1500));
        assert_eq!(timing.low_time_threshold_secs, 15);
    }

    #[test]
    fn test_validate_ok() {
        assert!(paired_config(1).validate().is_ok());
        assert!(paired_config(6).validate().is_ok());
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(PuzzleConfig::new().validate(), Err(ConfigError::Empty));

        let tokens_only =
            PuzzleConfig::new().with_token(Token::new(TokenId::new(0), "Solo", "Ω"));
        assert_eq!(tokens_only.validate(), Err(ConfigError::Empty));
    }

    #[test]
    fn test_validate_duplicate_token() {
        let config = paired_config(2).with_token(Token::new(TokenId::new(1), "Again", "⍟"));

        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateToken(TokenId::new(1)))
        );
    }

    #[test]
    fn test_validate_duplicate_slot() {
        let config = paired_config(2).with_slot(Slot::new(SlotId::new(0), TokenId::new(0)));

        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateSlot(SlotId::new(0)))
        );
    }

    #[test]
    fn test_validate_unknown_required_token() {
        let config = PuzzleConfig::new()
            .with_token(Token::new(TokenId::new(0), "Aetheria", "Ω"))
            .with_slot(Slot::new(SlotId::new(0), TokenId::new(9)));

        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownRequiredToken {
                slot: SlotId::new(0),
                token: TokenId::new(9),
            })
        );
    }

    #[test]
    fn test_validate_token_required_twice() {
        let config = PuzzleConfig::new()
            .with_token(Token::new(TokenId::new(0), "Aetheria", "Ω"))
            .with_token(Token::new(TokenId::new(1), "Digitara", "⌘"))
            .with_slot(Slot::new(SlotId::new(0), TokenId::new(0)))
            .with_slot(Slot::new(SlotId::new(1), TokenId::new(0)));

        assert_eq!(
            config.validate(),
            Err(ConfigError::TokenRequiredTwice {
                token: TokenId::new(0),
                first: SlotId::new(0),
                second: SlotId::new(1),
            })
        );
    }

    #[test]
    fn test_validate_token_without_slot() {
        let config = paired_config(2).with_token(Token::new(TokenId::new(2), "Orphan", "⎔"));

        assert_eq!(
            config.validate(),
            Err(ConfigError::TokenWithoutSlot(TokenId::new(2)))
        );
    }

    #[test]
    fn test_lookups() {
        let config = paired_config(3);

        assert_eq!(config.token_count(), 3);
        assert!(config.get_token(TokenId::new(2)).is_some());
        assert!(config.get_token(TokenId::new(9)).is_none());
        assert_eq!(
            config.get_slot(SlotId::new(1)).map(|s| s.required_token),
            Some(TokenId::new(1))
        );
    }
}
