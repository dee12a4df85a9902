//! Function wrappers and small generators
//!
//! - **[`color`]**: random colors, RGB to hex, UUIDs
//! - **[`memoize`](mod@memoize)**: result caches keyed by serialized arguments
//! - **[`throttle`](mod@throttle)**: at most one run per window, clock injected
//! - **[`debounce`](mod@debounce)**: trailing-edge debouncing on Tokio
//!   (`runtime` feature)
//! - **[`config`]**: TOML-loadable settings for the wrappers

pub mod color;
pub mod config;
#[cfg(feature = "runtime")]
pub mod debounce;
pub mod memoize;
pub mod throttle;

pub use color::{generate_random_color, generate_random_color_with, generate_uuid, rgb_to_hex};
pub use config::{ConfigError, DebounceConfig, HelperConfig, MemoizeConfig, ThrottleConfig};
#[cfg(feature = "runtime")]
pub use debounce::{debounce, Debounced, TimerHandle};
pub use memoize::{memoize, memoize_bounded, Memoized};
pub use throttle::{throttle, throttle_with_clock, Throttled};
