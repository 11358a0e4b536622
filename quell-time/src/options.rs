// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;

/// Edge and ceiling settings for [`Debounced`](crate::Debounced).
///
/// Defaults: no leading edge, trailing edge on, no `max_wait`.
///
/// ```
/// use quell_time::DebounceOptions;
/// use std::time::Duration;
///
/// let options = DebounceOptions::new()
///     .leading(true)
///     .max_wait(Duration::from_millis(500));
///
/// assert!(options.leading);
/// assert!(options.trailing);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceOptions {
    /// Invoke on the first call of a burst.
    pub leading: bool,
    /// Invoke with the latest arguments once the quiet period elapses.
    pub trailing: bool,
    /// Longest a burst may defer invocation, measured from the last invocation.
    ///
    /// Never shorter than `wait` in effect; see [`DebounceOptions::max_wait`].
    pub max_wait: Option<Duration>,
}

impl Default for DebounceOptions {
    fn default() -> Self {
        Self {
            leading: false,
            trailing: true,
            max_wait: None,
        }
    }
}

impl DebounceOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    #[must_use]
    pub const fn trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }

    /// Caps how long a burst that never goes quiet may defer invocation.
    ///
    /// A ceiling below the wrapper's `wait` is raised to `wait`: a burst is
    /// never cut shorter than a single quiet period.
    ///
    /// ```
    /// use quell_runtime::ManualTimer;
    /// use quell_time::{debounce_with_timer, DebounceOptions};
    /// use std::time::Duration;
    ///
    /// let timer = ManualTimer::new();
    /// let debounced = debounce_with_timer(
    ///     |n: u32| n,
    ///     Duration::from_millis(100),
    ///     DebounceOptions::new().max_wait(Duration::from_millis(10)),
    ///     timer.clone(),
    /// );
    ///
    /// debounced.call(1);
    /// timer.advance(Duration::from_millis(50));
    /// assert_eq!(debounced.call(2), None);
    /// ```
    #[must_use]
    pub const fn max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    pub(crate) fn effective_max_wait(&self, wait: Duration) -> Option<Duration> {
        self.max_wait.map(|max_wait| max_wait.max(wait))
    }
}

/// Edge settings for [`Throttled`](crate::Throttled).
///
/// Both edges are on by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrottleOptions {
    /// Invoke immediately when a new window opens.
    pub leading: bool,
    /// Invoke at window end with the latest arguments seen inside the window.
    pub trailing: bool,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

impl ThrottleOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    #[must_use]
    pub const fn trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }
}
