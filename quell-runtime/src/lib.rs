// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time collaborators for the quell wrappers.
//!
//! A [`Timer`](timer::Timer) answers two questions: what time is it, and please
//! run this callback later (or not at all, once cancelled). Two implementations
//! ship with the crate:
//!
//! - [`TokioTimer`](impls::tokio::TokioTimer) (feature `runtime-tokio`, default)
//! - [`ManualTimer`](impls::manual::ManualTimer), a virtual clock driven by hand

pub mod impls;
pub mod timer;

pub use impls::manual::{ManualHandle, ManualInstant, ManualTimer};
#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioTimer;
pub use timer::{Callback, Timer};
