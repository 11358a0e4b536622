// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Wrapper settings loaded from configuration files.
//!
//! Durations are plain millisecond integers so that configuration written by
//! hand (or by another language) maps directly. Values are signed on purpose:
//! a negative value is reported as [`QuellError::InvalidConfig`] instead of
//! failing deserialization with a less helpful message.
//!
//! ```
//! use quell_time::config::DebounceConfig;
//! use std::time::Duration;
//!
//! let config: DebounceConfig =
//!     serde_json::from_str(r#"{ "wait_ms": 250, "max_wait_ms": 1000 }"#).unwrap();
//! let (wait, options) = config.into_parts().unwrap();
//!
//! assert_eq!(wait, Duration::from_millis(250));
//! assert_eq!(options.max_wait, Some(Duration::from_secs(1)));
//! ```

use crate::options::{DebounceOptions, ThrottleOptions};
use core::time::Duration;
use quell_error::{QuellError, Result};
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DebounceConfig {
    pub wait_ms: i64,
    #[serde(default)]
    pub leading: Option<bool>,
    #[serde(default)]
    pub trailing: Option<bool>,
    #[serde(default)]
    pub max_wait_ms: Option<i64>,
}

impl DebounceConfig {
    /// Converts to the wait and options a [`Debounced`](crate::Debounced) is built from.
    ///
    /// Flags left unset take the debounce defaults.
    ///
    /// A `max_wait_ms` shorter than `wait_ms` is kept as written; the wrapper
    /// raises it to `wait`.
    ///
    /// # Errors
    /// Returns [`QuellError::InvalidConfig`] for negative durations.
    pub fn into_parts(self) -> Result<(Duration, DebounceOptions)> {
        let wait = millis("wait_ms", self.wait_ms)?;
        let defaults = DebounceOptions::default();

        let mut options = DebounceOptions::new()
            .leading(self.leading.unwrap_or(defaults.leading))
            .trailing(self.trailing.unwrap_or(defaults.trailing));
        if let Some(max_wait_ms) = self.max_wait_ms {
            options = options.max_wait(millis("max_wait_ms", max_wait_ms)?);
        }
        Ok((wait, options))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThrottleConfig {
    pub wait_ms: i64,
    #[serde(default)]
    pub leading: Option<bool>,
    #[serde(default)]
    pub trailing: Option<bool>,
}

impl ThrottleConfig {
    /// Converts to the wait and options a [`Throttled`](crate::Throttled) is built from.
    ///
    /// # Errors
    /// Returns [`QuellError::InvalidConfig`] for a negative `wait_ms`.
    pub fn into_parts(self) -> Result<(Duration, ThrottleOptions)> {
        let wait = millis("wait_ms", self.wait_ms)?;
        let defaults = ThrottleOptions::default();

        let options = ThrottleOptions::new()
            .leading(self.leading.unwrap_or(defaults.leading))
            .trailing(self.trailing.unwrap_or(defaults.trailing));
        Ok((wait, options))
    }
}

fn millis(field: &str, value: i64) -> Result<Duration> {
    u64::try_from(value)
        .map(Duration::from_millis)
        .map_err(|_| QuellError::invalid_config(format!("{field} must not be negative, got {value}")))
}
