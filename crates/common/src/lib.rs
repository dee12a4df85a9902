//! Small, stateless utilities for numbers, strings, sequences, dates and
//! JSON objects, plus a few function wrappers (memoize, throttle, debounce).
//!
//! Utilities borrow their inputs and return new values unless their
//! signature takes `&mut`. Randomness and the current time are injectable:
//! each random function has a `*_with` variant taking an [`rand::Rng`], and
//! time-dependent predicates take a [`testing::Clock`].
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: errors, number, string, array, date, object, helpers
//!   (without debounce), testing clocks and fixtures
//! - `observability`: `tracing` events from memoize, throttle and debounce
//! - `runtime`: debounce on the Tokio runtime (default)
//! - `test-utils`: everything, for downstream test suites

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod array;
#[cfg(feature = "foundation")]
pub mod date;
#[cfg(feature = "foundation")]
pub mod error;
#[cfg(feature = "foundation")]
pub mod helpers;
#[cfg(feature = "foundation")]
pub mod number;
#[cfg(feature = "foundation")]
pub mod object;
#[cfg(feature = "foundation")]
pub mod string;
#[cfg(feature = "foundation")]
pub mod utils;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use date::DateRange;
#[cfg(feature = "foundation")]
pub use error::{CommonError, CommonResult};
#[cfg(feature = "runtime")]
pub use helpers::{debounce, Debounced};
#[cfg(feature = "foundation")]
pub use helpers::{
    memoize, memoize_bounded, throttle, throttle_with_clock, HelperConfig, Memoized, Throttled,
};
#[cfg(feature = "foundation")]
pub use object::{Frozen, Object};
#[cfg(feature = "foundation")]
pub use testing::{Clock, MockClock, SystemClock};
#[cfg(feature = "foundation")]
pub use utils::serde::duration_millis;
