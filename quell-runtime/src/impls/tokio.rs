// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use quell_error::{QuellError, Result};
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use crate::timer::{Callback, Timer};

/// [`Timer`] backed by a Tokio runtime.
///
/// Each scheduled callback is a spawned task that sleeps for the delay and then
/// runs the callback; cancelling aborts the task. The clock is
/// `tokio::time::Instant`, so paused test time is honoured.
#[derive(Clone, Debug)]
pub struct TokioTimer {
    handle: Handle,
}

impl TokioTimer {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Binds to the runtime the caller is currently running in.
    ///
    /// # Errors
    /// Returns [`QuellError::RuntimeUnavailable`] outside of a Tokio runtime.
    pub fn try_current() -> Result<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|err| QuellError::runtime_unavailable(err.to_string()))
    }
}

impl Timer for TokioTimer {
    type Instant = tokio::time::Instant;

    type Handle = AbortHandle;

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }

    fn schedule(&self, delay: Duration, callback: Callback) -> Self::Handle {
        self.handle
            .spawn(async move {
                tokio::time::sleep(delay).await;
                callback();
            })
            .abort_handle()
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.abort();
    }
}
