// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Virtual time driven explicitly by the caller.
//!
//! Nothing happens on its own: callbacks only run from [`ManualTimer::advance`],
//! in deadline order, with the clock moved to each deadline before the callback
//! runs. That makes every timing decision of a wrapper reproducible to the
//! millisecond, which is what the engine tests rely on.

use core::fmt;
use core::ops::{Add, Sub};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::timer::{Callback, Timer};

/// A point on a [`ManualTimer`]'s virtual clock, measured from its creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManualInstant(Duration);

impl ManualInstant {
    #[must_use]
    pub const fn from_start(offset: Duration) -> Self {
        Self(offset)
    }

    #[must_use]
    pub const fn since_start(self) -> Duration {
        self.0
    }
}

impl Add<Duration> for ManualInstant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs)
    }
}

impl Sub<Duration> for ManualInstant {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        Self(self.0.saturating_sub(rhs))
    }
}

impl Sub<ManualInstant> for ManualInstant {
    type Output = Duration;

    fn sub(self, rhs: ManualInstant) -> Duration {
        self.0.saturating_sub(rhs.0)
    }
}

/// Handle of a callback queued on a [`ManualTimer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManualHandle {
    deadline: ManualInstant,
    id: u64,
}

impl ManualHandle {
    #[must_use]
    pub const fn deadline(&self) -> ManualInstant {
        self.deadline
    }
}

#[derive(Default)]
struct ManualState {
    now: ManualInstant,
    next_id: u64,
    // keyed by (deadline, id) so ties fire in scheduling order
    queue: BTreeMap<(ManualInstant, u64), Callback>,
}

/// [`Timer`] whose clock only moves when told to.
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualTimer {
    state: Arc<Mutex<ManualState>>,
}

impl ManualTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the timer was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.state.lock().now.since_start()
    }

    /// Number of callbacks still waiting to fire.
    #[must_use]
    pub fn scheduled_count(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Moves the clock forward by `by`, running every callback that falls due.
    ///
    /// Callbacks scheduled by other callbacks are run too when their deadline
    /// is inside the advanced span. The timer's lock is never held while a
    /// callback runs.
    pub fn advance(&self, by: Duration) {
        let target = self.state.lock().now + by;

        loop {
            let due = {
                let mut state = self.state.lock();
                let next_deadline = state.queue.keys().next().map(|&(deadline, _)| deadline);
                match next_deadline {
                    Some(deadline) if deadline <= target => {
                        state.now = state.now.max(deadline);
                        state.queue.pop_first().map(|(_, callback)| callback)
                    }
                    _ => {
                        state.now = state.now.max(target);
                        None
                    }
                }
            };

            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
    }

    /// Moves the clock backward by `by` without running anything.
    pub fn rewind(&self, by: Duration) {
        let mut state = self.state.lock();
        state.now = state.now - by;
    }
}

impl fmt::Debug for ManualTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ManualTimer")
            .field("now", &state.now)
            .field("scheduled", &state.queue.len())
            .finish()
    }
}

impl Timer for ManualTimer {
    type Instant = ManualInstant;

    type Handle = ManualHandle;

    fn now(&self) -> Self::Instant {
        self.state.lock().now
    }

    fn schedule(&self, delay: Duration, callback: Callback) -> Self::Handle {
        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;
        let deadline = state.now + delay;
        state.queue.insert((deadline, id), callback);
        ManualHandle { deadline, id }
    }

    fn cancel(&self, handle: Self::Handle) {
        self.state.lock().queue.remove(&(handle.deadline, handle.id));
    }
}
