// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the wrappers, their options and the timer trait.
//!
//! ```
//! use quell_time::prelude::*;
//! ```

pub use crate::{debounce_with_timer, throttle_with_timer};
pub use crate::{DebounceOptions, Debounced, ThrottleOptions, Throttled};
pub use quell_runtime::timer::Timer;

#[cfg(feature = "runtime-tokio")]
pub use crate::{debounce, throttle};
