//! Derived view state.
//!
//! `PuzzleView` is a pure snapshot of everything the presentation layer
//! renders: per-token status, per-slot fill, the countdown and its
//! low-time warning, the banners, and the active flash. Capturing one
//! never mutates the engine; view concerns stay separated from the
//! state machine that drives them.
//!
//! The optional presentation-tier policy (effects level, decorative
//! circuit patterns) lives in the submodules and is fully outside
//! `PuzzleEngine`.

pub mod circuits;
pub mod effects;

use serde::Serialize;

use crate::core::{AttemptPhase, Flash, SlotId, TokenId};
use crate::engine::PuzzleEngine;

/// Render status of one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenStatus {
    /// Free to select.
    Available,
    /// Currently held by the user.
    Selected,
    /// Committed to its slot.
    Placed,
}

/// One rune card.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TokenView {
    /// Token identity.
    pub id: TokenId,
    /// Display name.
    pub name: String,
    /// Rune glyph.
    pub glyph: String,
    /// Flavor description.
    pub description: String,
    /// Code fragment shown on the card.
    pub code_snippet: String,
    /// Render status.
    pub status: TokenStatus,
}

/// One slot around the seed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlotView {
    /// Slot identity.
    pub id: SlotId,
    /// Layout angle in degrees.
    pub angle_deg: f32,
    /// Has the required token been committed?
    pub filled: bool,
    /// Glyph of the committed token, once filled.
    pub glyph: Option<String>,
}

/// Countdown display state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CountdownView {
    /// Seconds remaining.
    pub remaining_secs: u32,
    /// Below the warning threshold while the attempt runs.
    pub low_time: bool,
}

/// Complete render snapshot of one engine.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PuzzleView {
    /// Lifecycle phase.
    pub phase: AttemptPhase,
    /// Rune cards, in configured display order.
    pub tokens: Vec<TokenView>,
    /// Slots, in configured display order.
    pub slots: Vec<SlotView>,
    /// Countdown display.
    pub countdown: CountdownView,
    /// The mismatch banner, if showing.
    pub error_banner: Option<String>,
    /// Show the "restored" acknowledgment overlay?
    pub completion_banner: bool,
    /// The active feedback flash, if any.
    pub flash: Option<Flash>,
    /// Committed tokens ("x/6 Placed" numerator).
    pub placed_count: u32,
    /// Total tokens (the denominator).
    pub token_count: u32,
}

impl PuzzleView {
    /// Capture a snapshot of the engine. Pure: no side effects.
    #[must_use]
    pub fn capture(engine: &PuzzleEngine) -> Self {
        let state = engine.state();
        let config = engine.config();
        let in_progress = state.phase() == AttemptPhase::InProgress;

        let tokens = config
            .tokens
            .iter()
            .map(|token| {
                let status = if state.is_placed(token.id) {
                    TokenStatus::Placed
                } else if state.selected() == Some(token.id) {
                    TokenStatus::Selected
                } else {
                    TokenStatus::Available
                };
                TokenView {
                    id: token.id,
                    name: token.name.clone(),
                    glyph: token.glyph.clone(),
                    description: token.description.clone(),
                    code_snippet: token.code_snippet.clone(),
                    status,
                }
            })
            .collect();

        let slots = config
            .slots
            .iter()
            .map(|slot| {
                let filled = state.is_placed(slot.required_token);
                let glyph = filled
                    .then(|| config.get_token(slot.required_token))
                    .flatten()
                    .map(|token| token.glyph.clone());
                SlotView {
                    id: slot.id,
                    angle_deg: slot.angle_deg,
                    filled,
                    glyph,
                }
            })
            .collect();

        Self {
            phase: state.phase(),
            tokens,
            slots,
            countdown: CountdownView {
                remaining_secs: state.remaining_secs(),
                low_time: in_progress
                    && state.remaining_secs() < config.timing.low_time_threshold_secs,
            },
            error_banner: state.last_error().map(str::to_string),
            completion_banner: state.phase() == AttemptPhase::Complete,
            flash: state.flash(),
            placed_count: state.placed_count() as u32,
            token_count: config.token_count() as u32,
        }
    }
}
