//! Countdown, deferred-effect, and completion-callback timing tests.
//!
//! The engine clock only moves through `advance`, so every timing
//! behavior here is deterministic: sub-second carry, the countdown
//! floor, error auto-clear, flash expiry, and the exactly-once
//! completion callback.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use eden_puzzle::{
    presets, AttemptPhase, FlashKind, PuzzleEngine, PuzzleEvent, SlotId, TokenId,
};

const MAPPING: [(u32, u32); 6] = [(0, 3), (1, 5), (2, 0), (3, 4), (4, 1), (5, 2)];

fn engine() -> PuzzleEngine {
    PuzzleEngine::new(presets::corrupted_seed()).unwrap()
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn solve(engine: &mut PuzzleEngine) {
    for &(slot, token) in &MAPPING {
        engine.select_token(TokenId::new(token));
        engine.attempt_placement(SlotId::new(slot));
    }
}

// =============================================================================
// Countdown
// =============================================================================

/// Sub-second advances accumulate; two half-seconds are one tick.
#[test]
fn test_subsecond_carry() {
    let mut engine = engine();
    engine.start();

    engine.advance(ms(500));
    assert_eq!(engine.remaining_secs(), 60);

    engine.advance(ms(500));
    assert_eq!(engine.remaining_secs(), 59);
}

/// A large advance drains multiple seconds at once.
#[test]
fn test_multi_second_advance() {
    let mut engine = engine();
    engine.start();

    engine.advance(ms(3500));
    assert_eq!(engine.remaining_secs(), 57);

    engine.advance(ms(500));
    assert_eq!(engine.remaining_secs(), 56);
}

/// The countdown floors at zero and the attempt stays playable.
#[test]
fn test_countdown_floor_is_cosmetic() {
    let mut engine = engine();
    engine.start();

    engine.advance(Duration::from_secs(120));
    assert_eq!(engine.remaining_secs(), 0);
    assert_eq!(engine.phase(), AttemptPhase::InProgress);

    // Timeout has no enforced consequence: solving still works
    solve(&mut engine);
    assert_eq!(engine.phase(), AttemptPhase::Complete);
}

/// No ticking before start.
#[test]
fn test_no_ticks_before_start() {
    let mut engine = engine();

    engine.advance(Duration::from_secs(30));

    assert_eq!(engine.remaining_secs(), 60);
}

/// The countdown stops once the attempt completes.
#[test]
fn test_countdown_stops_on_complete() {
    let mut engine = engine();
    engine.start();
    engine.advance(Duration::from_secs(10));
    solve(&mut engine);
    assert_eq!(engine.remaining_secs(), 50);

    engine.advance(Duration::from_secs(30));

    assert_eq!(engine.remaining_secs(), 50);
}

/// Each lost second emits a tick event with the new value.
#[test]
fn test_tick_events() {
    let mut engine = engine();
    engine.start();
    engine.drain_events();

    engine.advance(ms(2000));

    let events = engine.drain_events();
    assert_eq!(
        events,
        vec![
            PuzzleEvent::CountdownTick { remaining_secs: 59 },
            PuzzleEvent::CountdownTick { remaining_secs: 58 },
        ]
    );
}

// =============================================================================
// Error Auto-Clear
// =============================================================================

/// The mismatch message clears at the configured delay, not before.
#[test]
fn test_error_auto_clear() {
    let mut engine = engine();
    engine.start();
    engine.select_token(TokenId::new(3));
    engine.attempt_placement(SlotId::new(1));
    engine.drain_events();

    engine.advance(ms(1499));
    assert!(engine.last_error().is_some());

    engine.advance(ms(1));
    assert_eq!(engine.last_error(), None);
    assert!(engine
        .drain_events()
        .contains(&PuzzleEvent::ErrorCleared));
}

/// A second mismatch restarts the auto-clear window.
#[test]
fn test_new_failure_restarts_clear_window() {
    let mut engine = engine();
    engine.start();
    engine.select_token(TokenId::new(3));
    engine.attempt_placement(SlotId::new(1));

    engine.advance(ms(1000));
    engine.select_token(TokenId::new(5));
    engine.attempt_placement(SlotId::new(0));

    // 1.4s after the second failure: the first window would have
    // expired by now, but it was superseded
    engine.advance(ms(1400));
    assert!(engine.last_error().is_some());

    engine.advance(ms(100));
    assert_eq!(engine.last_error(), None);
}

// =============================================================================
// Feedback Flashes
// =============================================================================

/// The success flash expires after its configured lifetime.
#[test]
fn test_success_flash_expires() {
    let mut engine = engine();
    engine.start();
    engine.select_token(TokenId::new(3));
    engine.attempt_placement(SlotId::new(0));
    assert_eq!(
        engine.state().flash().map(|f| f.kind),
        Some(FlashKind::Success)
    );

    engine.advance(ms(999));
    assert!(engine.state().flash().is_some());

    engine.advance(ms(1));
    assert_eq!(engine.state().flash(), None);
}

/// The failure flash lives slightly longer than the success one.
#[test]
fn test_failure_flash_expires() {
    let mut engine = engine();
    engine.start();
    engine.select_token(TokenId::new(3));
    engine.attempt_placement(SlotId::new(1));
    assert_eq!(
        engine.state().flash().map(|f| f.kind),
        Some(FlashKind::Failure)
    );

    engine.advance(ms(1199));
    assert!(engine.state().flash().is_some());

    engine.advance(ms(1));
    assert_eq!(engine.state().flash(), None);
    assert!(engine.drain_events().contains(&PuzzleEvent::FlashExpired {
        kind: FlashKind::Failure
    }));
}

/// A new flash replaces a pending one instead of stacking.
#[test]
fn test_flash_replacement() {
    let mut engine = engine();
    engine.start();
    engine.select_token(TokenId::new(3));
    engine.attempt_placement(SlotId::new(1));

    engine.advance(ms(600));
    engine.select_token(TokenId::new(3));
    engine.attempt_placement(SlotId::new(0));
    assert_eq!(
        engine.state().flash().map(|f| f.kind),
        Some(FlashKind::Success)
    );

    // The replaced failure flash's deadline passes without effect
    engine.advance(ms(600));
    assert!(engine.state().flash().is_some());

    engine.advance(ms(400));
    assert_eq!(engine.state().flash(), None);
}

// =============================================================================
// Completion Callback
// =============================================================================

/// The callback waits out the full completion delay and fires once.
#[test]
fn test_completion_callback_timing() {
    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);

    let mut engine = PuzzleEngine::new(presets::corrupted_seed())
        .unwrap()
        .with_on_complete(move || counter.set(counter.get() + 1));
    engine.start();
    solve(&mut engine);

    // Completion is synchronous, the callback is not
    assert!(engine.is_complete());
    assert_eq!(fired.get(), 0);

    engine.advance(ms(1999));
    assert_eq!(fired.get(), 0);

    engine.advance(ms(1));
    assert_eq!(fired.get(), 1);
    assert!(engine
        .drain_events()
        .contains(&PuzzleEvent::CompletionAcknowledged));
}

/// Nothing the host does afterwards can fire the callback again.
#[test]
fn test_completion_callback_fires_once() {
    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);

    let mut engine = PuzzleEngine::new(presets::corrupted_seed())
        .unwrap()
        .with_on_complete(move || counter.set(counter.get() + 1));
    engine.start();
    solve(&mut engine);
    engine.advance(Duration::from_secs(10));
    assert_eq!(fired.get(), 1);

    engine.start();
    engine.select_token(TokenId::new(3));
    engine.attempt_placement(SlotId::new(0));
    engine.advance(Duration::from_secs(60));

    assert_eq!(fired.get(), 1);
}

/// Teardown cancels the pending callback.
#[test]
fn test_teardown_cancels_callback() {
    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);

    let mut engine = PuzzleEngine::new(presets::corrupted_seed())
        .unwrap()
        .with_on_complete(move || counter.set(counter.get() + 1));
    engine.start();
    solve(&mut engine);

    engine.teardown();
    engine.advance(Duration::from_secs(10));

    assert_eq!(fired.get(), 0);
}

/// Dropping the engine releases the un-fired callback.
#[test]
fn test_drop_releases_callback() {
    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);

    let mut engine = PuzzleEngine::new(presets::corrupted_seed())
        .unwrap()
        .with_on_complete(move || counter.set(counter.get() + 1));
    engine.start();
    solve(&mut engine);
    assert_eq!(Rc::strong_count(&fired), 2);

    drop(engine);

    assert_eq!(fired.get(), 0);
    assert_eq!(Rc::strong_count(&fired), 1);
}

/// Teardown also cancels error auto-clear and flash expiry.
#[test]
fn test_teardown_cancels_transient_effects() {
    let mut engine = engine();
    engine.start();
    engine.select_token(TokenId::new(3));
    engine.attempt_placement(SlotId::new(1));

    engine.teardown();
    engine.advance(Duration::from_secs(10));

    // Deferred clears never ran; the fields hold their last values
    assert!(engine.last_error().is_some());
    assert!(engine.state().flash().is_some());
}
