// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the quell rate-control wrappers
//!
//! Only construction of a wrapper can fail. Once built, a debounced or throttled
//! callable never produces a [`QuellError`]: failures of the wrapped callable are
//! handed back to the caller untouched, as the callable's own return value or panic.
//!
//! # Examples
//!
//! ```
//! use quell_error::{QuellError, Result};
//!
//! fn validate(wait_ms: i64) -> Result<u64> {
//!     u64::try_from(wait_ms).map_err(|_| QuellError::invalid_config("wait must not be negative"))
//! }
//!
//! assert!(validate(-1).is_err());
//! ```

/// Root error type for quell
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuellError {
    /// The wrapper was configured with values that break its contract
    ///
    /// Raised at construction time, e.g. for a negative wait or a `max_wait`
    /// shorter than `wait`.
    #[error("Invalid configuration: {context}")]
    InvalidConfig {
        /// What was wrong with the configuration
        context: String,
    },

    /// No timer runtime is available to schedule delayed checks
    ///
    /// Scheduling is required for every wrapper, so this is reported when the
    /// wrapper is built rather than on the first call.
    #[error("Timer runtime unavailable: {context}")]
    RuntimeUnavailable {
        /// Why the runtime could not be reached
        context: String,
    },
}

impl QuellError {
    /// Create an invalid configuration error with the given context
    pub fn invalid_config(context: impl Into<String>) -> Self {
        Self::InvalidConfig {
            context: context.into(),
        }
    }

    /// Create a runtime unavailable error with the given context
    pub fn runtime_unavailable(context: impl Into<String>) -> Self {
        Self::RuntimeUnavailable {
            context: context.into(),
        }
    }

    /// Check if this error was caused by the caller's configuration
    ///
    /// Configuration errors never go away on retry; the values must change.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

/// Specialized Result type for quell operations
///
/// ```
/// use quell_error::Result;
///
/// fn build() -> Result<u32> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, QuellError>;
