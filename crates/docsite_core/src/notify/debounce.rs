//! Trailing-edge debounce.

use crate::clock::Clock;

struct Pending<A> {
    deadline: i64,
    args: A,
}

/// Delays `callback` until `wait_ms` passes without another call.
///
/// Every `call` replaces the pending arguments and restarts the wait; the
/// callback receives the arguments of the latest call only.
pub struct Debouncer<A, F, C>
where
    F: FnMut(A),
    C: Clock,
{
    clock: C,
    wait_ms: i64,
    callback: F,
    pending: Option<Pending<A>>,
}

impl<A, F, C> Debouncer<A, F, C>
where
    F: FnMut(A),
    C: Clock,
{
    pub fn new(clock: C, wait_ms: u64, callback: F) -> Self {
        Self {
            clock,
            wait_ms: i64::try_from(wait_ms).unwrap_or(i64::MAX),
            callback,
            pending: None,
        }
    }

    /// Schedules `args`, cancelling any earlier pending call.
    pub fn call(&mut self, args: A) {
        let deadline = self.clock.now_ms().saturating_add(self.wait_ms);
        self.pending = Some(Pending { deadline, args });
    }

    /// Runs the callback when the wait has elapsed. Returns whether it ran.
    pub fn poll(&mut self) -> bool {
        let due = matches!(&self.pending, Some(pending) if self.clock.now_ms() >= pending.deadline);
        if due {
            self.flush()
        } else {
            false
        }
    }

    /// Runs a pending callback immediately.
    pub fn flush(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                (self.callback)(pending.args);
                true
            }
            None => false,
        }
    }

    /// Drops a pending call without running it.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<i64> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }
}
