// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Quell
//!
//! Debounce and throttle wrappers for plain callables.
//!
//! ## Overview
//!
//! Wrap any `Fn(A) -> R` to control *when* it actually runs relative to the
//! calls made to it:
//!
//! - [`Debounced`] runs once a burst of calls has gone quiet for `wait`
//! - [`Throttled`] runs at most once per `wait` window
//!
//! Both support leading and trailing edges, `cancel`, `flush` and `pending`;
//! debounce adds a `max_wait` ceiling. Time comes from a [`Timer`]: the Tokio
//! runtime by default, or a [`ManualTimer`] driven by hand.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quell::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> quell::Result<()> {
//!     let search = debounce(
//!         |query: String| println!("searching for {query}"),
//!         Duration::from_millis(300),
//!         DebounceOptions::default(),
//!     )?;
//!
//!     for query in ["r", "ru", "rus", "rust"] {
//!         search.call(query.to_string());
//!     }
//!
//!     tokio::time::sleep(Duration::from_millis(400)).await;
//!     Ok(())
//! }
//! ```

pub use quell_error::{QuellError, Result};
pub use quell_runtime::{ManualTimer, Timer};
pub use quell_time::{
    debounce_with_timer, throttle_with_timer, DebounceOptions, Debounced, ThrottleOptions,
    Throttled,
};

#[cfg(feature = "runtime-tokio")]
pub use quell_runtime::TokioTimer;
#[cfg(feature = "runtime-tokio")]
pub use quell_time::{debounce, throttle};

#[cfg(feature = "serde")]
pub use quell_time::config;

/// Prelude module for convenient imports
pub mod prelude {
    pub use quell_error::{QuellError, Result};
    pub use quell_time::prelude::*;
}
