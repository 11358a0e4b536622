// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

/// Callback run by a [`Timer`] once its delay has elapsed.
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// Identifies one scheduled callback so it can be cancelled.
    type Handle: Debug + Send + Sync + 'static;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Runs `callback` once `delay` has elapsed, unless cancelled first.
    ///
    /// Implementations must never run the callback from inside this call.
    fn schedule(&self, delay: Duration, callback: Callback) -> Self::Handle;

    /// Cancels a scheduled callback. No-op if it already ran or was cancelled.
    fn cancel(&self, handle: Self::Handle);
}
