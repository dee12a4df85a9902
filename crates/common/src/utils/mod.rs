//! Shared plumbing for the utility modules
//!
//! - **[`serde`]**: serde adapters used by helper configuration

pub mod serde;

pub use self::serde::duration_millis;
