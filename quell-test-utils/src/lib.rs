// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the quell wrappers.
//!
//! This crate is for development and testing only.
//!
//! # Key Types
//!
//! ## `CallRecorder<A>`
//!
//! A callable factory that remembers every invocation together with the time it
//! happened, and returns the arguments it was called with:
//!
//! ```rust
//! use quell_runtime::ManualTimer;
//! use quell_test_utils::{ms, CallRecorder};
//!
//! let timer = ManualTimer::new();
//! let recorder = CallRecorder::new(&timer);
//! let callable = recorder.callable();
//!
//! timer.advance(ms(20));
//! assert_eq!(callable(7), 7);
//! assert_eq!(recorder.invocations()[0].at, ms(20));
//! ```
//!
//! ## Fixtures
//!
//! [`test_data`] models a user typing into a search box, the textbook workload
//! for debouncing: `query_r()`, `query_ru()`, `query_rus()`, `query_rust()`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod recorder;
pub mod test_data;

pub use helpers::ms;
pub use recorder::{CallRecorder, Invocation};
pub use test_data::SearchQuery;
