// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce and throttle wrappers for plain callables.
//!
//! Both wrappers take a callable and a `wait` duration and control *when* the
//! callable actually runs relative to the calls made to the wrapper. They share
//! one timing engine: last-call time, last-invoke time, the latest pending
//! arguments, and at most one delayed check scheduled on a
//! [`Timer`](quell_runtime::timer::Timer).
//!
//! # Overview
//!
//! - **[`Debounced`]** - invokes after a quiet period of `wait`, optionally on the
//!   leading edge and bounded by `max_wait`
//! - **[`Throttled`]** - invokes at most once per `wait` window, on the leading
//!   and/or trailing edge
//! - **[`DebounceOptions`] / [`ThrottleOptions`]** - edge flags and ceiling
//! - **[`config`]** - the same settings deserialized from configuration (feature `serde`)
//!
//! Every wrapper exposes `call`, `call_with`, `cancel`, `flush` and `pending`.
//! A call returns the result of the invocation it triggered, or the result of
//! the last invocation; a trailing invocation's result is observed through
//! `flush` or a later call.
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - [`debounce`] and [`throttle`] bind to the current
//!   Tokio runtime
//! - any other [`Timer`](quell_runtime::timer::Timer), including
//!   [`ManualTimer`](quell_runtime::ManualTimer), through [`debounce_with_timer`]
//!   and [`throttle_with_timer`]
//!
//! # Example
//!
//! ```rust,no_run
//! use quell_time::{throttle, ThrottleOptions};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> quell_error::Result<()> {
//! let report = throttle(
//!     |progress: u8| println!("{progress}%"),
//!     Duration::from_millis(250),
//!     ThrottleOptions::default(),
//! )?;
//!
//! for progress in 0..=100 {
//!     report.call(progress);
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod logging;

#[cfg(feature = "serde")]
pub mod config;
mod debounce;
mod engine;
mod options;
pub mod prelude;
mod throttle;

pub use debounce::{debounce_with_timer, Debounced};
pub use options::{DebounceOptions, ThrottleOptions};
pub use throttle::{throttle_with_timer, Throttled};

#[cfg(feature = "runtime-tokio")]
pub use debounce::debounce;
#[cfg(feature = "runtime-tokio")]
pub use throttle::throttle;
