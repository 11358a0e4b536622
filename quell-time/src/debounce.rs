// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounced callables.
//!
//! A debounced callable delays invocation until `wait` has passed without a new
//! call, then invokes once with the arguments of the most recent call:
//! - Every call restarts the quiet period
//! - With `leading`, the first call of a burst invokes immediately
//! - With `trailing` (default), the end of the quiet period invokes with the
//!   latest arguments, unless the leading edge already consumed them
//! - With `max_wait`, a burst that never goes quiet still invokes once
//!   `max_wait` has passed since the last invocation; a `max_wait` shorter
//!   than `wait` counts as `wait`
//!
//! # Example
//!
//! ```rust
//! use quell_runtime::ManualTimer;
//! use quell_time::{debounce_with_timer, DebounceOptions};
//! use std::time::Duration;
//!
//! let timer = ManualTimer::new();
//! let save = debounce_with_timer(
//!     |text: String| text.len(),
//!     Duration::from_millis(100),
//!     DebounceOptions::default(),
//!     timer.clone(),
//! );
//!
//! assert_eq!(save.call("dra".to_string()), None);
//! assert_eq!(save.call("draft".to_string()), None);
//!
//! timer.advance(Duration::from_millis(100));
//! assert_eq!(save.flush(), Some(5));
//! ```

use crate::engine::{Mode, Shared};
use crate::options::DebounceOptions;
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
    fn debounce_call(self: &Arc<Self>, receiver: Option<C>, args: A) -> Option<R> {
        let now = self.now();
        let mut state = self.state.lock();
        let is_invoking = self.should_invoke(&state, now);
        state.record_call(now, receiver, args);

        if is_invoking {
            if state.scheduled.is_none() {
                // Start of a burst: measure max_wait from here.
                state.last_invoke_time = Some(now);
                self.schedule_check(&mut state, self.wait);
                if self.leading {
                    debug!("leading edge");
                    return self.invoke(state, now);
                }
                return state.cached_result.clone();
            }

            if self.max_wait().is_some() {
                debug!("max wait reached, forcing invocation");
                self.reschedule_check(&mut state, self.wait);
                return self.invoke(state, now);
            }
        }

        if state.scheduled.is_none() {
            self.schedule_check(&mut state, self.wait);
        }
        state.cached_result.clone()
    }
}

/// A callable whose invocations are debounced.
///
/// Clones share one state block: calling any clone counts as a call of the
/// same debounced function. Dropping the last clone cancels any pending
/// invocation.
///
/// The callable runs with no lock held and may call its own wrapper.
///
/// `C` is the receiver type, passed to callables built with
/// [`Debounced::with_receiver`]; it defaults to `()`.
pub struct Debounced<A, R, TM: Timer, C = ()> {
    shared: Arc<Shared<A, R, C, TM>>,
    options: DebounceOptions,
}

impl<A, R, TM> Debounced<A, R, TM>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    TM: Timer,
{
    /// Debounces `callable` using `timer` for the clock and delayed checks.
    pub fn new<F>(callable: F, wait: Duration, options: DebounceOptions, timer: TM) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self::with_receiver(move |_: Option<()>, args| callable(args), wait, options, timer)
    }
}

impl<A, R, TM, C> Debounced<A, R, TM, C>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    C: Send + 'static,
    TM: Timer,
{
    /// Debounces a callable that also receives the receiver bound by
    /// [`call_with`](Self::call_with), or `None` after a plain [`call`](Self::call).
    pub fn with_receiver<F>(
        callable: F,
        wait: Duration,
        options: DebounceOptions,
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
            Mode::Debounce {
                max_wait: options.effective_max_wait(wait),
            },
            timer,
        );
        Self { shared, options }
    }

    /// Records a call with `args`.
    ///
    /// Returns the result of this call's invocation when it invoked (leading
    /// edge or forced by `max_wait`), otherwise the result of the last
    /// invocation, or `None` if the callable never ran.
    pub fn call(&self, args: A) -> Option<R> {
        self.shared.debounce_call(None, args)
    }

    /// Like [`call`](Self::call), binding `receiver` for the invocation.
    pub fn call_with(&self, receiver: C, args: A) -> Option<R> {
        self.shared.debounce_call(Some(receiver), args)
    }

    /// Drops any pending invocation and resets to the state before the first call.
    ///
    /// The last result stays cached.
    pub fn cancel(&self) {
        self.shared.cancel();
    }

    /// Runs the pending trailing invocation now, if there is one.
    ///
    /// Returns its result, or the cached result when nothing is pending.
    pub fn flush(&self) -> Option<R> {
        self.shared.flush()
    }

    /// Whether a delayed check is outstanding.
    pub fn pending(&self) -> bool {
        self.shared.pending()
    }

    /// Length of the quiet period.
    pub fn wait(&self) -> Duration {
        self.shared.wait
    }

    /// The options this wrapper was built with, `max_wait` as given.
    pub fn options(&self) -> DebounceOptions {
        self.options
    }
}

impl<A, R, TM: Timer, C> Clone for Debounced<A, R, TM, C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            options: self.options,
        }
    }
}

impl<A, R, TM: Timer, C> fmt::Debug for Debounced<A, R, TM, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.shared.wait)
            .field("options", &self.options)
            .field("pending", &self.shared.state.lock().scheduled.is_some())
            .finish()
    }
}

/// Debounces `callable` on the given timer.
pub fn debounce_with_timer<A, R, TM, F>(
    callable: F,
    wait: Duration,
    options: DebounceOptions,
    timer: TM,
) -> Debounced<A, R, TM>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    TM: Timer,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    Debounced::new(callable, wait, options, timer)
}

/// Debounces `callable` on the Tokio runtime the caller is running in.
///
/// Trailing invocations run inside a Tokio task.
///
/// # Errors
/// Returns [`QuellError::RuntimeUnavailable`](quell_error::QuellError::RuntimeUnavailable)
/// outside of a Tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub fn debounce<A, R, F>(
    callable: F,
    wait: Duration,
    options: DebounceOptions,
) -> Result<Debounced<A, R, TokioTimer>>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    Ok(Debounced::new(callable, wait, options, TokioTimer::try_current()?))
}
