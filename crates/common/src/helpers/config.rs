//! Helper configuration
//!
//! Delays are written as integer milliseconds, matching
//! [`duration_millis`](crate::utils::serde::duration_millis). Every section
//! and field is optional in TOML:
//!
//! ```toml
//! [debounce]
//! delay = 250
//!
//! [throttle]
//! delay = 1000
//!
//! [memoize]
//! capacity = 128
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::memoize::{memoize, memoize_bounded, Memoized};
use super::throttle::{throttle, Throttled};
use crate::error::{CommonError, CommonResult};
use crate::utils::serde::duration_millis;

/// Errors raised while loading helper configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed TOML or wrongly typed fields
    #[error("Failed to parse helper config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed values that fail validation
    #[error(transparent)]
    Common(#[from] CommonError),
}

/// Settings for [`debounce`](super::debounce())
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Quiet period before the wrapped function runs
    #[serde(with = "duration_millis")]
    pub delay: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self { delay: Duration::from_millis(300) }
    }
}

#[cfg(feature = "runtime")]
impl DebounceConfig {
    /// Debounce `func` with this delay
    pub fn debounce<F>(&self, func: F) -> super::Debounced<F> {
        super::debounce(func, self.delay)
    }
}

/// Settings for [`throttle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    /// Window length
    #[serde(with = "duration_millis")]
    pub delay: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self { delay: Duration::from_secs(1) }
    }
}

impl ThrottleConfig {
    /// Throttle `func` with this window
    pub fn throttle<F, A>(&self, func: F) -> Throttled<F, A>
    where
        F: Fn(A),
    {
        throttle(func, self.delay)
    }
}

/// Settings for [`memoize`] and [`memoize_bounded`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoizeConfig {
    /// Maximum cached results; `None` never evicts
    pub capacity: Option<usize>,
}

impl MemoizeConfig {
    /// Reject a zero capacity
    ///
    /// # Errors
    ///
    /// Returns `CommonError::InvalidInput` for `capacity = 0`.
    pub fn validate(&self) -> CommonResult<()> {
        match self.capacity {
            Some(0) => Err(CommonError::invalid_input_with_value(
                "memoize.capacity",
                "must be greater than zero",
                "0",
            )),
            _ => Ok(()),
        }
    }

    /// Memoize `func` with this capacity
    ///
    /// # Errors
    ///
    /// Returns `CommonError::InvalidInput` for a zero capacity.
    pub fn memoize<F, A, R>(&self, func: F) -> CommonResult<Memoized<F, A, R>>
    where
        F: Fn(A) -> R,
        A: Serialize,
        R: Clone,
    {
        match self.capacity {
            Some(capacity) => memoize_bounded(func, capacity),
            None => Ok(memoize(func)),
        }
    }
}

/// All helper settings, as loaded from one TOML document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// `[debounce]` section
    pub debounce: DebounceConfig,
    /// `[throttle]` section
    pub throttle: ThrottleConfig,
    /// `[memoize]` section
    pub memoize: MemoizeConfig,
}

impl HelperConfig {
    /// Parse and validate a TOML document
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or wrongly typed
    /// fields, and [`ConfigError::Common`] when validation fails.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section
    ///
    /// # Errors
    ///
    /// Returns the first section's `CommonError::InvalidInput`.
    pub fn validate(&self) -> CommonResult<()> {
        self.memoize.validate()
    }
}
