//! Core engine types: tokens, slots, configuration, attempt state, RNG.
//!
//! This module contains the building blocks that are dataset-agnostic.
//! Hosts configure them via `PuzzleConfig` rather than modifying the core.

pub mod config;
pub mod error;
pub mod rng;
pub mod slot;
pub mod state;
pub mod token;

pub use config::{PuzzleConfig, TimingConfig};
pub use error::ConfigError;
pub use rng::PuzzleRng;
pub use slot::{Slot, SlotId};
pub use state::{AttemptPhase, AttemptState, Flash, FlashKind, PlacementRecord};
pub use token::{Token, TokenId};
