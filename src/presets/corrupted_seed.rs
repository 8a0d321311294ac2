//! The Corrupted Seed puzzle.
//!
//! Six runes around the flickering seed, 60 seconds on the clock. The
//! slot ring starts at the top and steps 60 degrees clockwise; the
//! required-token ring is deliberately scrambled relative to the card
//! order so adjacent cards never map to adjacent slots.

use crate::core::{PuzzleConfig, Slot, SlotId, Token, TokenId};

/// Build the Corrupted Seed configuration with default timing.
///
/// ## Example
///
/// ```
/// use eden_puzzle::presets;
///
/// let config = presets::corrupted_seed();
/// assert_eq!(config.token_count(), 6);
/// assert!(config.validate().is_ok());
/// ```
#[must_use]
pub fn corrupted_seed() -> PuzzleConfig {
    PuzzleConfig::new()
        .with_token(
            Token::new(TokenId::new(0), "Aetheria", "Ω")
                .with_description("The binding force of reality's illusion")
                .with_code_snippet("function initSimulation() { return new Eden(); }"),
        )
        .with_token(
            Token::new(TokenId::new(1), "Digitara", "⌘")
                .with_description("Guardian of the digital realm")
                .with_code_snippet("if (reality.perception > 0.85) { reveal(); }"),
        )
        .with_token(
            Token::new(TokenId::new(2), "Virtuon", "⏣")
                .with_description("Keeper of virtual boundaries")
                .with_code_snippet("const world = new VirtualEnvironment({ seed: 'empyrea' });"),
        )
        .with_token(
            Token::new(TokenId::new(3), "Pixelion", "⋰")
                .with_description("Weaver of digital illusions")
                .with_code_snippet("await system.repair(['core', 'memory', 'visuals']);"),
        )
        .with_token(
            Token::new(TokenId::new(4), "Bytenoth", "⎔")
                .with_description("Ancient data that powers the seed")
                .with_code_snippet("Eden.prototype.reboot = function() { this.initialize(); }"),
        )
        .with_token(
            Token::new(TokenId::new(5), "Quantarus", "⍟")
                .with_description("Bridge between magic and technology")
                .with_code_snippet("export class MagicSystem extends TechSystem { }"),
        )
        .with_slot(Slot::new(SlotId::new(0), TokenId::new(3)).with_angle(0.0))
        .with_slot(Slot::new(SlotId::new(1), TokenId::new(5)).with_angle(60.0))
        .with_slot(Slot::new(SlotId::new(2), TokenId::new(0)).with_angle(120.0))
        .with_slot(Slot::new(SlotId::new(3), TokenId::new(4)).with_angle(180.0))
        .with_slot(Slot::new(SlotId::new(4), TokenId::new(1)).with_angle(240.0))
        .with_slot(Slot::new(SlotId::new(5), TokenId::new(2)).with_angle(300.0))
}
