//! Time abstraction for testability
//!
//! Provides a trait-based approach to time operations that allows for
//! deterministic testing without relying on actual time passage. The date
//! predicates (`is_today`, `is_future_date`, ...) and the throttle wrapper
//! take a [`Clock`] explicitly instead of reading the system clock.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use awesome_common::testing::{Clock, MockClock, SystemClock};
//!
//! // Use system clock in production
//! let clock = SystemClock;
//! let now = clock.now();
//!
//! // Use mock clock in tests
//! let mock = MockClock::new();
//! let start = mock.now();
//! mock.advance(Duration::from_secs(5));
//! let end = mock.now();
//! assert_eq!(end.duration_since(start), Duration::from_secs(5));
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, NaiveDateTime};
use parking_lot::Mutex;

/// Trait for time operations to enable testing
///
/// This trait provides an abstraction over time operations, allowing code
/// to work with either real system time or mocked time for testing.
pub trait Clock: Send + Sync {
    /// Get current instant (monotonic time)
    fn now(&self) -> Instant;

    /// Get current system time (wall clock)
    fn system_time(&self) -> SystemTime;

    /// Get milliseconds since UNIX epoch
    fn millis_since_epoch(&self) -> u64 {
        self.system_time().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis() as u64
    }

    /// Current calendar date and time in the local time zone
    ///
    /// Date predicates compare against this value.
    fn local_now(&self) -> NaiveDateTime {
        DateTime::<Local>::from(self.system_time()).naive_local()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn system_time(&self) -> SystemTime {
        (**self).system_time()
    }

    fn local_now(&self) -> NaiveDateTime {
        (**self).local_now()
    }
}

/// Real system clock implementation
///
/// # Examples
///
/// ```
/// use awesome_common::testing::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// println!("Current time: {:?}", now);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn system_time(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Mock clock for deterministic testing
///
/// Time only moves when [`advance`](Self::advance) or
/// [`set_elapsed`](Self::set_elapsed) is called. Clones share the same
/// elapsed time.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use awesome_common::testing::{Clock, MockClock};
///
/// let clock = MockClock::new();
/// let start = clock.now();
///
/// // Simulate 5 seconds passing
/// clock.advance(Duration::from_secs(5));
///
/// let end = clock.now();
/// assert_eq!(end.duration_since(start), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
    start: Instant,
    elapsed: Arc<Mutex<Duration>>,
    base_system_time: SystemTime,
    base_local: NaiveDateTime,
}

impl MockClock {
    /// Create a new mock clock
    ///
    /// The clock starts at the current real time but can be advanced
    /// manually without real time passing.
    pub fn new() -> Self {
        let base_system_time = SystemTime::now();
        Self {
            start: Instant::now(),
            elapsed: Arc::new(Mutex::new(Duration::ZERO)),
            base_system_time,
            base_local: DateTime::<Local>::from(base_system_time).naive_local(),
        }
    }

    /// Create a mock clock whose local wall time starts at `local`
    ///
    /// # Examples
    ///
    /// ```
    /// use awesome_common::testing::{Clock, MockClock};
    /// use chrono::NaiveDate;
    ///
    /// let noon = NaiveDate::from_ymd_opt(2024, 3, 15)
    ///     .and_then(|d| d.and_hms_opt(12, 0, 0))
    ///     .unwrap();
    /// let clock = MockClock::at(noon);
    /// assert_eq!(clock.local_now(), noon);
    /// ```
    pub fn at(local: NaiveDateTime) -> Self {
        let base_system_time = UNIX_EPOCH
            + Duration::from_millis(u64::try_from(local.and_utc().timestamp_millis()).unwrap_or(0));
        Self {
            start: Instant::now(),
            elapsed: Arc::new(Mutex::new(Duration::ZERO)),
            base_system_time,
            base_local: local,
        }
    }

    /// Advance the mock clock by a duration
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use awesome_common::testing::MockClock;
    ///
    /// let clock = MockClock::new();
    /// clock.advance(Duration::from_secs(10));
    /// assert_eq!(clock.elapsed(), Duration::from_secs(10));
    /// ```
    pub fn advance(&self, duration: Duration) {
        *self.elapsed.lock() += duration;
    }

    /// Set the mock clock to a specific elapsed time
    pub fn set_elapsed(&self, duration: Duration) {
        *self.elapsed.lock() = duration;
    }

    /// Get the current elapsed time
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        *self.elapsed.lock()
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        self.start + self.elapsed()
    }

    fn system_time(&self) -> SystemTime {
        self.base_system_time + self.elapsed()
    }

    fn local_now(&self) -> NaiveDateTime {
        let elapsed = chrono::Duration::from_std(self.elapsed()).unwrap_or(chrono::Duration::MAX);
        self.base_local.checked_add_signed(elapsed).unwrap_or(NaiveDateTime::MAX)
    }
}
