// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use quell_runtime::ManualTimer;
use std::sync::Arc;
use std::time::Duration;

/// One recorded run of the wrapped callable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation<A> {
    pub args: A,
    /// Clock reading when the callable ran.
    pub at: Duration,
}

type Clock = Arc<dyn Fn() -> Duration + Send + Sync>;

/// Records invocations of the callables it hands out.
///
/// Clones share the same record.
#[derive(Clone)]
pub struct CallRecorder<A> {
    clock: Clock,
    invocations: Arc<Mutex<Vec<Invocation<A>>>>,
}

impl<A: Clone + Send + 'static> CallRecorder<A> {
    /// Records times from a [`ManualTimer`]'s virtual clock.
    #[must_use]
    pub fn new(timer: &ManualTimer) -> Self {
        let timer = timer.clone();
        Self::with_clock(move || timer.elapsed())
    }

    /// Records times from an arbitrary clock, e.g. elapsed Tokio time.
    pub fn with_clock(clock: impl Fn() -> Duration + Send + Sync + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A callable that records its arguments and returns them.
    pub fn callable(&self) -> impl Fn(A) -> A + Send + Sync + 'static {
        let recorder = self.clone();
        move |args: A| {
            recorder.record(args.clone());
            args
        }
    }

    /// A callable for receiver-bound wrappers that records the arguments and
    /// returns them paired with the receiver it got.
    pub fn callable_with_receiver<C>(
        &self,
    ) -> impl Fn(Option<C>, A) -> (Option<C>, A) + Send + Sync + 'static
    where
        C: Send + 'static,
    {
        let recorder = self.clone();
        move |receiver: Option<C>, args: A| {
            recorder.record(args.clone());
            (receiver, args)
        }
    }

    fn record(&self, args: A) {
        let at = (self.clock)();
        self.invocations.lock().push(Invocation { args, at });
    }

    #[must_use]
    pub fn invocations(&self) -> Vec<Invocation<A>> {
        self.invocations.lock().clone()
    }

    #[must_use]
    pub fn args(&self) -> Vec<A> {
        self.invocations
            .lock()
            .iter()
            .map(|invocation| invocation.args.clone())
            .collect()
    }

    #[must_use]
    pub fn times(&self) -> Vec<Duration> {
        self.invocations
            .lock()
            .iter()
            .map(|invocation| invocation.at)
            .collect()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.invocations.lock().len()
    }

    #[must_use]
    pub fn last(&self) -> Option<A> {
        self.invocations
            .lock()
            .last()
            .map(|invocation| invocation.args.clone())
    }
}
