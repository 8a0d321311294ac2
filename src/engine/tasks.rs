//! Single-shot deferred tasks keyed to the engine lifecycle.
//!
//! The engine has exactly three time-deferred effects: clearing the
//! mismatch message, expiring the feedback flash, and firing the
//! completion callback. Each is a one-shot entry here, consumed by
//! `PuzzleEngine::advance` when its due time passes on the engine clock.
//!
//! Scheduling a kind that is already pending replaces it (a second
//! mismatch restarts the error-clear window). Clearing the queue is
//! teardown: nothing can fire afterwards.

use std::time::Duration;

use smallvec::SmallVec;

/// The deferred effects the engine can schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TaskKind {
    /// Auto-clear `last_error`.
    ClearError,
    /// Expire the active feedback flash.
    ExpireFlash,
    /// Invoke the completion callback.
    FireCompletion,
}

#[derive(Clone, Copy, Debug)]
struct Deferred {
    kind: TaskKind,
    due_at: Duration,
}

/// Pending one-shot tasks, at most one per kind.
#[derive(Clone, Debug, Default)]
pub(crate) struct TaskQueue {
    pending: Vec<Deferred>,
}

impl TaskQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Schedule a task, replacing any pending task of the same kind.
    pub(crate) fn schedule(&mut self, kind: TaskKind, due_at: Duration) {
        self.cancel(kind);
        self.pending.push(Deferred { kind, due_at });
    }

    /// Cancel a pending task of this kind, if any.
    pub(crate) fn cancel(&mut self, kind: TaskKind) {
        self.pending.retain(|d| d.kind != kind);
    }

    /// Cancel everything. Used on teardown.
    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }

    /// Is a task of this kind pending?
    #[cfg(test)]
    pub(crate) fn is_scheduled(&self, kind: TaskKind) -> bool {
        self.pending.iter().any(|d| d.kind == kind)
    }

    /// Remove and return every task due at `now`, in due-time order.
    pub(crate) fn take_due(&mut self, now: Duration) -> SmallVec<[TaskKind; 3]> {
        let mut due: SmallVec<[Deferred; 3]> = SmallVec::new();
        self.pending.retain(|d| {
            if d.due_at <= now {
                due.push(*d);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|d| d.due_at);
        due.into_iter().map(|d| d.kind).collect()
    }
}
