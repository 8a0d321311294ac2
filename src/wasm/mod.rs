//! JS host bindings.
//!
//! A thin `wasm-bindgen` wrapper so the landing page can drive the
//! engine directly: forward clicks and elapsed frame time, poll scalar
//! getters for the hot path, and pull the full snapshot or the event
//! stream as JSON when it needs to re-render. Completion surfaces as a
//! drained `completion_acknowledged` event; there is no JS callback to
//! keep alive across the boundary.

use wasm_bindgen::prelude::*;

use crate::core::{PuzzleRng, SlotId, TokenId};
use crate::engine::PuzzleEngine;
use crate::presets;
use crate::view::circuits::circuit_patterns;
use crate::view::effects::EffectsLevel;

/// The Corrupted Seed puzzle, exposed to the page.
#[wasm_bindgen]
pub struct WasmPuzzle {
    engine: PuzzleEngine,
}

#[wasm_bindgen]
impl WasmPuzzle {
    /// Build the reference puzzle.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmPuzzle, JsError> {
        let engine = PuzzleEngine::new(presets::corrupted_seed())?;
        Ok(WasmPuzzle { engine })
    }

    /// Begin the attempt.
    pub fn start(&mut self) {
        self.engine.start();
    }

    /// Select, toggle, or switch the held rune.
    pub fn select_token(&mut self, token: u32) {
        self.engine.select_token(TokenId::new(token));
    }

    /// Try to commit the held rune to a slot.
    pub fn attempt_placement(&mut self, slot: u32) {
        self.engine.attempt_placement(SlotId::new(slot));
    }

    /// Advance the engine clock by `ms` milliseconds.
    pub fn advance_ms(&mut self, ms: f64) {
        if !ms.is_finite() || ms <= 0.0 {
            return;
        }
        self.engine
            .advance(std::time::Duration::from_secs_f64(ms / 1000.0));
    }

    /// Drop pending deferred effects before unmount.
    pub fn teardown(&mut self) {
        self.engine.teardown();
    }

    // === Hot-path getters ===

    /// Seconds left on the countdown.
    pub fn remaining_secs(&self) -> u32 {
        self.engine.remaining_secs()
    }

    /// Committed runes.
    pub fn placed_count(&self) -> u32 {
        self.engine.placed_count() as u32
    }

    /// Total runes.
    pub fn token_count(&self) -> u32 {
        self.engine.token_count() as u32
    }

    /// Has the attempt been completed?
    pub fn is_complete(&self) -> bool {
        self.engine.is_complete()
    }

    /// The mismatch banner text, if showing.
    pub fn error_message(&self) -> Option<String> {
        self.engine.last_error().map(str::to_string)
    }

    // === Snapshots and events ===

    /// Full render snapshot as a JSON object string.
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.engine.view()).unwrap_or_default()
    }

    /// Drain pending events as JSON lines.
    pub fn drain_events_json(&mut self) -> Vec<String> {
        self.engine
            .drain_events()
            .iter()
            .filter_map(|event| serde_json::to_string(event).ok())
            .collect()
    }

    /// Decorative circuit patterns for the given effects sample.
    ///
    /// `sample_ms` is the host's timing-benchmark result; `seed` keeps
    /// the pattern stable across re-renders.
    pub fn circuit_patterns_json(&self, sample_ms: f64, mobile: bool, seed: u64) -> String {
        let sample_ms = if sample_ms.is_finite() { sample_ms.max(0.0) } else { 0.0 };
        let sample = std::time::Duration::from_secs_f64(sample_ms / 1000.0);
        let level = EffectsLevel::from_sample(sample);
        let mut rng = PuzzleRng::new(seed);
        let patterns = circuit_patterns(level.circuit_count(mobile), &mut rng);
        serde_json::to_string(&patterns).unwrap_or_default()
    }
}
