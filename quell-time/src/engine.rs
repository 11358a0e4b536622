// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timing engine shared by debounce and throttle.
//!
//! One [`Shared`] block per wrapper holds the invocation state and the user
//! callable. Both wrappers answer the same question on every call and on every
//! scheduled check: must the callable run now, or how much longer should we wait?
//! They differ only in the bound applied to the time since the last invocation
//! (see [`Mode`]) and in how a call reacts to the answer.

use core::time::Duration;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use quell_runtime::timer::Timer;

pub(crate) type BoxedCallable<A, R, C> = Box<dyn Fn(Option<C>, A) -> R + Send + Sync>;

pub(crate) type StateGuard<'a, A, R, C, TM> = MutexGuard<'a, InvocationState<A, R, C, TM>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    Debounce { max_wait: Option<Duration> },
    Throttle,
}

/// The delayed check currently outstanding for a wrapper.
///
/// The token identifies the check independently of the timer's handle: a
/// callback whose token no longer matches is stale and does nothing.
pub(crate) struct ScheduledCheck<H> {
    token: u64,
    handle: H,
}

pub(crate) struct InvocationState<A, R, C, TM: Timer> {
    pub(crate) last_call_time: Option<TM::Instant>,
    pub(crate) last_invoke_time: Option<TM::Instant>,
    pub(crate) pending_args: Option<A>,
    pub(crate) receiver: Option<C>,
    pub(crate) cached_result: Option<R>,
    pub(crate) scheduled: Option<ScheduledCheck<TM::Handle>>,
    next_token: u64,
}

impl<A, R, C, TM: Timer> InvocationState<A, R, C, TM> {
    fn new() -> Self {
        Self {
            last_call_time: None,
            last_invoke_time: None,
            pending_args: None,
            receiver: None,
            cached_result: None,
            scheduled: None,
            next_token: 0,
        }
    }

    pub(crate) fn record_call(&mut self, now: TM::Instant, receiver: Option<C>, args: A) {
        self.pending_args = Some(args);
        self.receiver = receiver;
        self.last_call_time = Some(now);
    }
}

pub(crate) struct Shared<A, R, C, TM: Timer> {
    timer: TM,
    pub(crate) wait: Duration,
    pub(crate) leading: bool,
    pub(crate) trailing: bool,
    mode: Mode,
    pub(crate) state: Mutex<InvocationState<A, R, C, TM>>,
    // Never called under a lock, so it may call back into its own wrapper.
    callable: BoxedCallable<A, R, C>,
}

impl<A, R, C, TM> Shared<A, R, C, TM>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    C: Send + 'static,
    TM: Timer,
{
    pub(crate) fn new(
        callable: BoxedCallable<A, R, C>,
        wait: Duration,
        leading: bool,
        trailing: bool,
        mode: Mode,
        timer: TM,
    ) -> Arc<Self> {
        Arc::new(Self {
            timer,
            wait,
            leading,
            trailing,
            mode,
            state: Mutex::new(InvocationState::new()),
            callable,
        })
    }

    pub(crate) fn now(&self) -> TM::Instant {
        self.timer.now()
    }

    pub(crate) fn max_wait(&self) -> Option<Duration> {
        match self.mode {
            Mode::Debounce { max_wait } => max_wait,
            Mode::Throttle => None,
        }
    }

    /// Bound on the time since the last invocation past which a call invokes.
    ///
    /// Throttle has no separate ceiling: its window length doubles as one.
    fn invoke_interval(&self) -> Option<Duration> {
        match self.mode {
            Mode::Debounce { max_wait } => max_wait,
            Mode::Throttle => Some(self.wait),
        }
    }

    pub(crate) fn should_invoke(
        &self,
        state: &InvocationState<A, R, C, TM>,
        now: TM::Instant,
    ) -> bool {
        let Some(last_call) = state.last_call_time else {
            return true;
        };
        // A clock that moved backward must not stall the wrapper.
        if now < last_call {
            warn!("clock moved backward since the last call");
            return true;
        }
        if now - last_call >= self.wait {
            return true;
        }

        match (self.invoke_interval(), state.last_invoke_time) {
            (Some(_), None) => true,
            (Some(interval), Some(last_invoke)) => {
                now >= last_invoke && now - last_invoke >= interval
            }
            (None, _) => false,
        }
    }

    /// How long a check that found nothing to do should wait before looking again.
    pub(crate) fn remaining_wait(
        &self,
        state: &InvocationState<A, R, C, TM>,
        now: TM::Instant,
    ) -> Duration {
        let since_call = state
            .last_call_time
            .filter(|&last_call| now >= last_call)
            .map_or(Duration::ZERO, |last_call| now - last_call);
        let time_waiting = self.wait.saturating_sub(since_call);

        let Some(max_wait) = self.max_wait() else {
            return time_waiting;
        };
        match state.last_invoke_time {
            Some(last_invoke) if now >= last_invoke => {
                time_waiting.min(max_wait.saturating_sub(now - last_invoke))
            }
            _ => time_waiting,
        }
    }

    pub(crate) fn schedule_check(
        self: &Arc<Self>,
        state: &mut InvocationState<A, R, C, TM>,
        delay: Duration,
    ) {
        let token = state.next_token;
        state.next_token = state.next_token.wrapping_add(1);

        let shared = Arc::downgrade(self);
        let handle = self.timer.schedule(
            delay,
            Box::new(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.timer_expired(token);
                }
            }),
        );
        trace!(token, ?delay, "scheduled check");
        state.scheduled = Some(ScheduledCheck { token, handle });
    }

    pub(crate) fn reschedule_check(
        self: &Arc<Self>,
        state: &mut InvocationState<A, R, C, TM>,
        delay: Duration,
    ) {
        if let Some(check) = state.scheduled.take() {
            self.timer.cancel(check.handle);
        }
        self.schedule_check(state, delay);
    }

    /// Runs the callable with the pending arguments and caches its result.
    ///
    /// No lock is held for the duration of the call. A callable that calls its
    /// own wrapper sees the state as already updated for this invocation, and a
    /// nested invocation runs to completion before this one returns.
    pub(crate) fn invoke(
        &self,
        mut state: StateGuard<'_, A, R, C, TM>,
        time: TM::Instant,
    ) -> Option<R> {
        let receiver = state.receiver.take();
        let Some(args) = state.pending_args.take() else {
            return state.cached_result.clone();
        };
        state.last_invoke_time = Some(time);
        drop(state);

        let result = (self.callable)(receiver, args);

        self.state.lock().cached_result = Some(result.clone());
        Some(result)
    }

    fn trailing_edge(
        &self,
        mut state: StateGuard<'_, A, R, C, TM>,
        time: TM::Instant,
    ) -> Option<R> {
        state.scheduled = None;

        if self.trailing && state.pending_args.is_some() {
            debug!("trailing edge");
            return self.invoke(state, time);
        }

        state.pending_args = None;
        state.receiver = None;
        state.cached_result.clone()
    }

    fn timer_expired(self: &Arc<Self>, token: u64) {
        let mut state = self.state.lock();
        if state.scheduled.as_ref().map(|check| check.token) != Some(token) {
            trace!(token, "ignoring stale check");
            return;
        }

        let now = self.timer.now();
        if self.should_invoke(&state, now) {
            self.trailing_edge(state, now);
            return;
        }

        // The check that is running now has already fired; nothing to cancel.
        state.scheduled = None;
        let remaining = self.remaining_wait(&state, now);
        trace!(?remaining, "check rescheduled");
        self.schedule_check(&mut state, remaining);
    }

    pub(crate) fn cancel(&self) {
        let mut state = self.state.lock();
        if let Some(check) = state.scheduled.take() {
            self.timer.cancel(check.handle);
        }
        state.last_call_time = None;
        state.last_invoke_time = None;
        state.pending_args = None;
        state.receiver = None;
        debug!("cancelled");
    }

    pub(crate) fn flush(&self) -> Option<R> {
        let mut state = self.state.lock();
        let Some(check) = state.scheduled.take() else {
            return state.cached_result.clone();
        };
        self.timer.cancel(check.handle);

        debug!("flush");
        let now = self.timer.now();
        self.trailing_edge(state, now)
    }

    pub(crate) fn pending(&self) -> bool {
        self.state.lock().scheduled.is_some()
    }
}

impl<A, R, C, TM: Timer> Drop for Shared<A, R, C, TM> {
    fn drop(&mut self) {
        if let Some(check) = self.state.get_mut().scheduled.take() {
            self.timer.cancel(check.handle);
        }
    }
}
