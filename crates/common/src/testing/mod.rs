//! Testing utilities and helpers
//!
//! This module provides:
//! - **[`time`]**: Clock abstraction with a real and a mock implementation.
//!   Date predicates and throttling take a [`Clock`] so callers can inject
//!   time.
//! - **[`fixtures`]**: Seeded RNGs and sample JSON documents
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use awesome_common::testing::{Clock, MockClock};
//!
//! let clock = MockClock::new();
//! let before = clock.now();
//! clock.advance(Duration::from_secs(5));
//! assert_eq!(clock.now() - before, Duration::from_secs(5));
//! ```

pub mod fixtures;
pub mod time;

// Re-export commonly used items
pub use fixtures::{nested_object, random_ints, random_ints_seeded, sample_profile, seeded_rng};
pub use time::{Clock, MockClock, SystemClock};
