//! Rate limiting for plain function calls
//!
//! A [`Throttled`] wrapper runs its function at most once per window. The
//! first call runs immediately and opens the window; calls that land inside
//! the window are dropped, not queued. Time comes from a [`Clock`], so tests
//! can drive the window with [`MockClock`](crate::testing::MockClock).

use std::fmt;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
#[cfg(feature = "observability")]
use tracing::trace;

use crate::testing::time::{Clock, SystemClock};

/// A function that runs at most once per `delay`
pub struct Throttled<F, A, C = SystemClock> {
    func: F,
    delay: Duration,
    clock: C,
    last_run: Mutex<Option<Instant>>,
    _args: PhantomData<fn(A)>,
}

impl<F, A, C> Throttled<F, A, C>
where
    F: Fn(A),
    C: Clock,
{
    /// Run the function unless the current window is still open
    ///
    /// Returns `true` when the function ran and `false` when the call was
    /// dropped. A window is open until `delay` has elapsed since the last
    /// call that ran.
    pub fn call(&self, args: A) -> bool {
        let now = self.clock.now();
        {
            let mut last_run = self.last_run.lock();
            let ready =
                last_run.map_or(true, |prev| now.saturating_duration_since(prev) >= self.delay);
            if !ready {
                #[cfg(feature = "observability")]
                trace!(delay_ms = self.delay.as_millis() as u64, "throttled call dropped");
                return false;
            }
            *last_run = Some(now);
        }

        (self.func)(args);
        true
    }

    /// Close the current window so the next call runs immediately
    pub fn reset(&self) {
        *self.last_run.lock() = None;
    }

    /// Window length
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl<F, A, C> fmt::Debug for Throttled<F, A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("delay", &self.delay)
            .field("last_run", &*self.last_run.lock())
            .finish_non_exhaustive()
    }
}

/// Throttle `func` to one run per `delay` of wall-clock time
///
/// ```
/// use std::time::Duration;
///
/// use awesome_common::helpers::throttle;
///
/// let log = throttle(|msg: &str| println!("{msg}"), Duration::from_secs(60));
/// assert!(log.call("first"));
/// assert!(!log.call("second"));
/// ```
pub fn throttle<F, A>(func: F, delay: Duration) -> Throttled<F, A>
where
    F: Fn(A),
{
    throttle_with_clock(func, delay, SystemClock)
}

/// Throttle `func` against an injected clock
pub fn throttle_with_clock<F, A, C>(func: F, delay: Duration, clock: C) -> Throttled<F, A, C>
where
    F: Fn(A),
    C: Clock,
{
    Throttled { func, delay, clock, last_run: Mutex::new(None), _args: PhantomData }
}
