// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttled callables.
//!
//! A throttled callable invokes at most once per `wait` window:
//! - With `leading` (default), a call that opens a new window invokes immediately
//! - With `trailing` (default), the window's end invokes with the arguments of
//!   the latest call made inside the window
//!
//! With `leading` off and `trailing` on, every invocation happens at a window's
//! end. With `trailing` off, no window-end check is ever scheduled.
//!
//! # Example
//!
//! ```rust
//! use quell_runtime::ManualTimer;
//! use quell_time::{throttle_with_timer, ThrottleOptions};
//! use std::time::Duration;
//!
//! let timer = ManualTimer::new();
//! let report = throttle_with_timer(
//!     |percent: u8| percent,
//!     Duration::from_millis(100),
//!     ThrottleOptions::default(),
//!     timer.clone(),
//! );
//!
//! assert_eq!(report.call(10), Some(10));
//! assert_eq!(report.call(20), Some(10));
//!
//! timer.advance(Duration::from_millis(100));
//! assert_eq!(report.flush(), Some(20));
//! ```

use crate::engine::{Mode, Shared};
use crate::options::ThrottleOptions;
use core::fmt;
use core::time::Duration;
use quell_runtime::timer::Timer;
use std::sync::Arc;

#[cfg(feature = "runtime-tokio")]
use quell_error::Result;
#[cfg(feature = "runtime-tokio")]
use quell_runtime::TokioTimer;

impl<A, R, C, TM> Shared<A, R, C, TM>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    C: Send + 'static,
    TM: Timer,
{
    fn throttle_call(self: &Arc<Self>, receiver: Option<C>, args: A) -> Option<R> {
        let now = self.now();
        let mut state = self.state.lock();
        let is_invoking = self.should_invoke(&state, now);
        state.record_call(now, receiver, args);

        let mut result = state.cached_result.clone();
        if is_invoking && state.scheduled.is_none() && self.leading {
            debug!("leading edge");
            result = self.invoke(state, now);
            state = self.state.lock();
        }

        if state.scheduled.is_none() && self.trailing {
            self.schedule_check(&mut state, self.wait);
        }
        result
    }
}

/// A callable whose invocations are throttled.
///
/// Clones share one state block. Dropping the last clone cancels any pending
/// invocation.
pub struct Throttled<A, R, TM: Timer, C = ()> {
    shared: Arc<Shared<A, R, C, TM>>,
    options: ThrottleOptions,
}

impl<A, R, TM> Throttled<A, R, TM>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    TM: Timer,
{
    /// Throttles `callable` using `timer` for the clock and window-end checks.
    pub fn new<F>(callable: F, wait: Duration, options: ThrottleOptions, timer: TM) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self::with_receiver(move |_: Option<()>, args| callable(args), wait, options, timer)
    }
}

impl<A, R, TM, C> Throttled<A, R, TM, C>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    C: Send + 'static,
    TM: Timer,
{
    /// Throttles a callable that also receives the receiver bound by
    /// [`call_with`](Self::call_with).
    pub fn with_receiver<F>(
        callable: F,
        wait: Duration,
        options: ThrottleOptions,
        timer: TM,
    ) -> Self
    where
        F: Fn(Option<C>, A) -> R + Send + Sync + 'static,
    {
        let shared = Shared::new(
            Box::new(callable),
            wait,
            options.leading,
            options.trailing,
            Mode::Throttle,
            timer,
        );
        Self { shared, options }
    }

    /// Records a call with `args`.
    ///
    /// Returns this call's result when it opened a window on the leading edge,
    /// otherwise the result of the last invocation.
    pub fn call(&self, args: A) -> Option<R> {
        self.shared.throttle_call(None, args)
    }

    /// Like [`call`](Self::call), binding `receiver` for the invocation.
    pub fn call_with(&self, receiver: C, args: A) -> Option<R> {
        self.shared.throttle_call(Some(receiver), args)
    }

    /// Drops any pending invocation and forgets the current window.
    pub fn cancel(&self) {
        self.shared.cancel();
    }

    /// Runs the pending window-end invocation now, if there is one.
    pub fn flush(&self) -> Option<R> {
        self.shared.flush()
    }

    /// Whether a window-end check is outstanding.
    pub fn pending(&self) -> bool {
        self.shared.pending()
    }

    /// Length of one throttle window.
    pub fn wait(&self) -> Duration {
        self.shared.wait
    }

    /// The edge settings this wrapper was built with.
    pub fn options(&self) -> ThrottleOptions {
        self.options
    }
}

impl<A, R, TM: Timer, C> Clone for Throttled<A, R, TM, C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            options: self.options,
        }
    }
}

impl<A, R, TM: Timer, C> fmt::Debug for Throttled<A, R, TM, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("wait", &self.shared.wait)
            .field("options", &self.options)
            .field("pending", &self.shared.state.lock().scheduled.is_some())
            .finish()
    }
}

/// Throttles `callable` on the given timer.
pub fn throttle_with_timer<A, R, TM, F>(
    callable: F,
    wait: Duration,
    options: ThrottleOptions,
    timer: TM,
) -> Throttled<A, R, TM>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    TM: Timer,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    Throttled::new(callable, wait, options, timer)
}

/// Throttles `callable` on the Tokio runtime the caller is running in.
///
/// Window-end invocations run inside a Tokio task.
///
/// # Errors
/// Returns [`QuellError::RuntimeUnavailable`](quell_error::QuellError::RuntimeUnavailable)
/// outside of a Tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub fn throttle<A, R, F>(
    callable: F,
    wait: Duration,
    options: ThrottleOptions,
) -> Result<Throttled<A, R, TokioTimer>>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    Ok(Throttled::new(callable, wait, options, TokioTimer::try_current()?))
}
