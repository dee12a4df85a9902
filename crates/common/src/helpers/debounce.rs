//! Trailing-edge debouncing on the Tokio runtime
//!
//! Every call to [`Debounced::call`] cancels the pending run and schedules a
//! new one `delay` later. The wrapped function runs once per burst, with the
//! arguments of the last call in the burst.
//!
//! Scheduling uses `tokio::spawn`, so calls must happen inside a Tokio
//! runtime.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::sleep;
#[cfg(feature = "observability")]
use tracing::{debug, trace};

/// Cancellation flag shared between a caller and a scheduled run
#[derive(Debug, Clone)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    fn new() -> Self {
        Self { cancelled: Arc::new(AtomicBool::new(false)) }
    }

    /// Cancel the scheduled run
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check if the run has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn same_timer(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

/// A function whose runs are delayed until calls stop arriving
///
/// Cloning shares the pending timer: a call through any clone resets it.
pub struct Debounced<F> {
    func: Arc<F>,
    delay: Duration,
    pending: Arc<Mutex<Option<TimerHandle>>>,
}

impl<F> Clone for Debounced<F> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            delay: self.delay,
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<F> Debounced<F> {
    /// Schedule a run with `args`, replacing any pending one
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn call<A>(&self, args: A)
    where
        F: Fn(A) + Send + Sync + 'static,
        A: Send + 'static,
    {
        let handle = TimerHandle::new();
        if let Some(previous) = self.pending.lock().replace(handle.clone()) {
            previous.cancel();
            #[cfg(feature = "observability")]
            trace!(delay_ms = self.delay.as_millis() as u64, "debounce timer reset");
        }

        let func = Arc::clone(&self.func);
        let pending = Arc::clone(&self.pending);
        let delay = self.delay;

        tokio::spawn(async move {
            sleep(delay).await;
            {
                let mut slot = pending.lock();
                if handle.is_cancelled() {
                    return;
                }
                if slot.as_ref().is_some_and(|current| current.same_timer(&handle)) {
                    *slot = None;
                }
            }
            #[cfg(feature = "observability")]
            debug!(delay_ms = delay.as_millis() as u64, "debounced call running");
            func(args);
        });
    }

    /// Drop the pending run, if any
    ///
    /// Returns `true` when a run was pending.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// Whether a run is scheduled and has not started yet
    pub fn is_pending(&self) -> bool {
        self.pending.lock().is_some()
    }

    /// Quiet period before a run
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl<F> fmt::Debug for Debounced<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

/// Debounce `func` with a quiet period of `delay`
///
/// ```
/// use std::time::Duration;
///
/// use awesome_common::helpers::debounce;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let save = debounce(|doc: String| println!("saving {doc}"), Duration::from_millis(300));
/// save.call("draft 1".to_string());
/// save.call("draft 2".to_string());
/// tokio::time::sleep(Duration::from_millis(350)).await;
/// # }
/// ```
pub fn debounce<F>(func: F, delay: Duration) -> Debounced<F> {
    Debounced { func: Arc::new(func), delay, pending: Arc::new(Mutex::new(None)) }
}
