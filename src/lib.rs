//! # eden-puzzle
//!
//! The rune-matching puzzle engine behind the Project Eden landing page.
//!
//! ## Design Principles
//!
//! 1. **Dataset-Agnostic**: No hardcoded runes or slots. Hosts configure
//!    the token/slot bijection at startup; `presets::corrupted_seed` is
//!    just the shipped configuration.
//!
//! 2. **Host-Driven**: The engine owns no timers and spawns no threads.
//!    Hosts forward discrete user actions and elapsed time; every
//!    mutation is a synchronous reaction to one of those.
//!
//! 3. **No-Op Over Error**: Gameplay calls never fail. Out-of-order or
//!    malformed input is ignored; the single user-facing condition (rune
//!    mismatch) is recoverable state with an auto-clearing message.
//!
//! ## Architecture
//!
//! - **Deferred Tasks**: Error auto-clear, flash expiry, and the
//!   completion callback are single-shot cancellable tasks on the engine
//!   clock. Teardown (or drop) cancels them all; nothing fires after
//!   disposal.
//!
//! - **Persistent Data Structures**: Attempt state uses `im` collections,
//!   so view snapshots clone in O(1).
//!
//! - **View Separation**: Rendering reads `PuzzleView` snapshots and the
//!   drainable event stream; nothing outside the engine mutates attempt
//!   state.
//!
//! ## Modules
//!
//! - `core`: Token/slot definitions, configuration, attempt state, RNG
//! - `engine`: The placement state machine, countdown, deferred tasks
//! - `view`: Derived view state and the presentation-tier effects policy
//! - `presets`: The Corrupted Seed dataset
//! - `wasm`: JS host bindings (feature = "wasm")

pub mod core;
pub mod engine;
pub mod presets;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use crate::core::{
    AttemptPhase, AttemptState, ConfigError, Flash, FlashKind, PlacementRecord, PuzzleConfig,
    PuzzleRng, Slot, SlotId, TimingConfig, Token, TokenId,
};

pub use crate::engine::{events::PuzzleEvent, PuzzleEngine, MISMATCH_MESSAGE};

pub use crate::view::{
    circuits::{circuit_patterns, CircuitPattern},
    effects::EffectsLevel,
    CountdownView, PuzzleView, SlotView, TokenStatus, TokenView,
};
