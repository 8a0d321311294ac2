//! The puzzle engine: placement state machine, countdown, completion.
//!
//! `PuzzleEngine` owns one `AttemptState` and is driven entirely by the
//! host: discrete user actions (`start`, `select_token`,
//! `attempt_placement`) and elapsed wall-clock time (`advance`). All
//! mutation is synchronous inside `&mut self`, so actions apply
//! atomically in arrival order; there is no internal parallelism.
//!
//! ## No-op policy
//!
//! Gameplay calls never fail. An operation whose precondition does not
//! hold (starting twice, placing with nothing selected, selecting a
//! committed token, unknown ids, any call after `Complete`) is silently
//! ignored. The one user-facing error, rune mismatch, is recoverable
//! state, not a fault.
//!
//! ## Time
//!
//! The engine keeps its own monotonic clock, advanced only by
//! `advance(delta)`. The countdown decrements once per accumulated
//! second while the attempt is in progress; deferred effects (error
//! auto-clear, flash expiry, completion callback) fire when the clock
//! passes their due time. Dropping or tearing down the engine discards
//! the task queue and the callback, so nothing runs after disposal.

pub mod events;
mod tasks;

use std::time::Duration;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::core::{
    AttemptPhase, AttemptState, ConfigError, Flash, PuzzleConfig, SlotId, TokenId,
};
use crate::view::PuzzleView;

use self::events::PuzzleEvent;
use self::tasks::{TaskKind, TaskQueue};

/// The transient message recorded on a failed placement.
pub const MISMATCH_MESSAGE: &str = "Syntax Error—Rune Mismatch";

const SECOND: Duration = Duration::from_secs(1);

/// One mounted puzzle instance.
///
/// ## Example
///
/// ```
/// use eden_puzzle::{presets, PuzzleEngine, SlotId, TokenId};
///
/// let mut engine = PuzzleEngine::new(presets::corrupted_seed()).unwrap();
/// engine.start();
/// engine.select_token(TokenId::new(3));
/// engine.attempt_placement(SlotId::new(0));
///
/// assert_eq!(engine.placed_count(), 1);
/// assert_eq!(engine.last_error(), None);
/// ```
pub struct PuzzleEngine {
    config: PuzzleConfig,
    /// Slot id -> the one token it accepts.
    required_by_slot: FxHashMap<SlotId, TokenId>,
    /// Token id -> the one slot that accepts it.
    slot_for_token: FxHashMap<TokenId, SlotId>,
    state: AttemptState,
    tasks: TaskQueue,
    clock: Duration,
    tick_carry: Duration,
    events: Vec<PuzzleEvent>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl PuzzleEngine {
    /// Build an engine from a validated configuration.
    ///
    /// This is the crate's only fallible call: the token/slot mapping
    /// must be a bijection (see `PuzzleConfig::validate`).
    pub fn new(config: PuzzleConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut required_by_slot = FxHashMap::default();
        let mut slot_for_token = FxHashMap::default();
        for slot in &config.slots {
            required_by_slot.insert(slot.id, slot.required_token);
            slot_for_token.insert(slot.required_token, slot.id);
        }

        let state = AttemptState::new(config.timing.attempt_duration_secs);

        Ok(Self {
            config,
            required_by_slot,
            slot_for_token,
            state,
            tasks: TaskQueue::new(),
            clock: Duration::ZERO,
            tick_carry: Duration::ZERO,
            events: Vec::new(),
            on_complete: None,
        })
    }

    /// Register the completion callback (builder pattern).
    ///
    /// Invoked exactly once, after the completion delay elapses on the
    /// engine clock. Replaced wholesale if called again before then.
    #[must_use]
    pub fn with_on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    // === Operations ===

    /// Begin the attempt.
    ///
    /// Ignored unless the phase is `NotStarted`; a running or completed
    /// attempt is never reset.
    pub fn start(&mut self) {
        if self.state.phase() != AttemptPhase::NotStarted {
            return;
        }

        let duration = self.config.timing.attempt_duration_secs;
        self.state.begin(duration);
        self.tick_carry = Duration::ZERO;
        debug!(duration_secs = duration, "attempt started");
        self.events.push(PuzzleEvent::AttemptStarted {
            duration_secs: duration,
        });
    }

    /// Select, toggle off, or switch the held token.
    ///
    /// Selecting the held token again drops the selection; selecting a
    /// different unplaced token replaces it. Committed or unknown tokens
    /// are ignored.
    pub fn select_token(&mut self, token: TokenId) {
        if self.state.phase() != AttemptPhase::InProgress {
            return;
        }
        if !self.slot_for_token.contains_key(&token) || self.state.is_placed(token) {
            return;
        }

        if self.state.selected() == Some(token) {
            self.state.clear_selection();
            self.events.push(PuzzleEvent::SelectionCleared);
        } else {
            self.state.select(token);
            self.events.push(PuzzleEvent::TokenSelected { token });
        }
    }

    /// Try to commit the held token to a slot.
    ///
    /// Succeeds iff the slot's required token is the held one. A miss
    /// records the transient mismatch message and schedules its
    /// auto-clear; either way the selection is dropped. No selection,
    /// unknown slot, or already-filled slot: no-op.
    pub fn attempt_placement(&mut self, slot: SlotId) {
        if self.state.phase() != AttemptPhase::InProgress {
            return;
        }
        let Some(&required) = self.required_by_slot.get(&slot) else {
            return;
        };
        if self.state.is_placed(required) {
            return;
        }
        let Some(token) = self.state.selected() else {
            return;
        };

        self.state.clear_selection();

        if token == required {
            self.state.clear_error();
            self.tasks.cancel(TaskKind::ClearError);
            self.state.commit_placement(token, slot);
            self.raise_flash(Flash::success(), self.config.timing.success_flash);

            let placed = self.state.placed_count() as u32;
            let total = self.config.token_count() as u32;
            debug!(%token, %slot, placed, total, "rune placed");
            self.events.push(PuzzleEvent::TokenPlaced {
                token,
                slot,
                placed,
                total,
            });

            if self.state.placed_count() == self.config.token_count() {
                self.complete_attempt();
            }
        } else {
            self.state.set_error(MISMATCH_MESSAGE);
            self.raise_flash(Flash::failure(), self.config.timing.failure_flash);
            self.tasks.schedule(
                TaskKind::ClearError,
                self.clock + self.config.timing.error_clear_delay,
            );

            debug!(%token, %slot, "rune mismatch");
            self.events.push(PuzzleEvent::PlacementRejected {
                token,
                slot,
                message: MISMATCH_MESSAGE.to_string(),
            });
        }
    }

    /// Advance the engine clock.
    ///
    /// Decrements the countdown once per accumulated second while the
    /// attempt is in progress (sub-second remainders carry over), then
    /// fires every deferred task whose due time has passed.
    pub fn advance(&mut self, delta: Duration) {
        self.clock += delta;

        if self.state.phase() == AttemptPhase::InProgress {
            self.tick_carry += delta;
            while self.tick_carry >= SECOND {
                self.tick_carry -= SECOND;
                if self.state.remaining_secs() > 0 {
                    let remaining = self.state.decrement_second();
                    trace!(remaining_secs = remaining, "countdown tick");
                    self.events.push(PuzzleEvent::CountdownTick {
                        remaining_secs: remaining,
                    });
                }
            }
        }

        for kind in self.tasks.take_due(self.clock) {
            match kind {
                TaskKind::ClearError => {
                    if self.state.last_error().is_some() {
                        self.state.clear_error();
                        self.events.push(PuzzleEvent::ErrorCleared);
                    }
                }
                TaskKind::ExpireFlash => {
                    if let Some(flash) = self.state.flash() {
                        self.state.clear_flash();
                        self.events.push(PuzzleEvent::FlashExpired { kind: flash.kind });
                    }
                }
                TaskKind::FireCompletion => {
                    if let Some(callback) = self.on_complete.take() {
                        callback();
                    }
                    debug!("completion acknowledged");
                    self.events.push(PuzzleEvent::CompletionAcknowledged);
                }
            }
        }
    }

    /// Cancel every pending deferred effect and drop the callback.
    ///
    /// Call on host unmount if the engine outlives the view. Dropping
    /// the engine has the same effect through ownership.
    pub fn teardown(&mut self) {
        self.tasks.clear();
        self.on_complete = None;
        debug!("engine teardown");
    }

    fn raise_flash(&mut self, flash: Flash, lifetime: Duration) {
        self.state.set_flash(flash);
        self.tasks.schedule(TaskKind::ExpireFlash, self.clock + lifetime);
    }

    fn complete_attempt(&mut self) {
        self.state.complete();
        debug!("attempt complete");
        self.events.push(PuzzleEvent::AttemptComplete);
        self.tasks.schedule(
            TaskKind::FireCompletion,
            self.clock + self.config.timing.completion_delay,
        );
    }

    // === Read access ===

    /// The configuration this engine was built from.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// The attempt state (read-only).
    #[must_use]
    pub fn state(&self) -> &AttemptState {
        &self.state
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> AttemptPhase {
        self.state.phase()
    }

    /// Has the attempt been completed?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.phase() == AttemptPhase::Complete
    }

    /// The token currently held by the user, if any.
    #[must_use]
    pub fn selected_token(&self) -> Option<TokenId> {
        self.state.selected()
    }

    /// Number of committed tokens.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.state.placed_count()
    }

    /// Total number of tokens in the puzzle.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.config.token_count()
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.state.remaining_secs()
    }

    /// The transient mismatch message, if one is up.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error()
    }

    /// Capture the derived view state.
    #[must_use]
    pub fn view(&self) -> PuzzleView {
        PuzzleView::capture(self)
    }

    /// Drain the pending event stream.
    pub fn drain_events(&mut self) -> Vec<PuzzleEvent> {
        std::mem::take(&mut self.events)
    }
}
