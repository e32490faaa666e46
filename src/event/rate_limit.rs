//! Throttle and debounce wrappers over callbacks
//!
//! Generic rate limiters for UI event handlers that call into the grid
//! model (scroll-driven sticky detection, drag previews). Both are
//! single-threaded and hold no timer of their own: the host event loop
//! drives them, and time comes from `std::time::Instant`.

use std::time::{Duration, Instant};

use crate::io::configuration::{DEFAULT_DEBOUNCE_DELAY_MS, DEFAULT_THROTTLE_INTERVAL_MS};

/// Leading-edge rate limiter around a callback
///
/// Invokes the wrapped callback at most once per interval; calls
/// landing inside the window are dropped.
pub struct Throttle<F> {
    callback: F,
    interval: Duration,
    last_fired: Option<Instant>,
}

impl<F> Throttle<F> {
    /// Wrap `callback` with a minimum interval between invocations
    pub const fn new(callback: F, interval: Duration) -> Self {
        Self {
            callback,
            interval,
            last_fired: None,
        }
    }

    /// Wrap `callback` with the studio's default scroll interval
    pub const fn with_default_interval(callback: F) -> Self {
        Self::new(callback, Duration::from_millis(DEFAULT_THROTTLE_INTERVAL_MS))
    }

    /// Invoke the callback with `payload` if the interval has elapsed
    ///
    /// Returns whether the callback fired.
    pub fn call<T>(&mut self, payload: T) -> bool
    where
        F: FnMut(T),
    {
        let now = Instant::now();
        let ready = self
            .last_fired
            .is_none_or(|fired| now.duration_since(fired) >= self.interval);

        if ready {
            self.last_fired = Some(now);
            (self.callback)(payload);
        }

        ready
    }
}

/// Trailing-edge rate limiter around a callback
///
/// `trigger` arms (or re-arms) the delay and stores the latest
/// payload; the callback fires on the first `poll` after the delay
/// elapses, at most once per trigger burst.
pub struct Debounce<F, T> {
    callback: F,
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<F, T> Debounce<F, T>
where
    F: FnMut(T),
{
    /// Wrap `callback` with a settle delay
    pub const fn new(callback: F, delay: Duration) -> Self {
        Self {
            callback,
            delay,
            pending: None,
        }
    }

    /// Wrap `callback` with the studio's default settle delay
    pub const fn with_default_delay(callback: F) -> Self {
        Self::new(callback, Duration::from_millis(DEFAULT_DEBOUNCE_DELAY_MS))
    }

    /// Arm the delay with a fresh payload, replacing any pending one
    pub fn trigger(&mut self, payload: T) {
        self.pending = Some((Instant::now(), payload));
    }

    /// Invoke the callback if the armed delay has elapsed
    ///
    /// Returns whether the callback fired.
    pub fn poll(&mut self) -> bool {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|(armed, _)| armed.elapsed() >= self.delay);

        if ready { self.flush() } else { false }
    }

    /// Invoke the callback immediately if a payload is pending
    ///
    /// Returns whether the callback fired.
    pub fn flush(&mut self) -> bool {
        self.pending.take().is_some_and(|(_, payload)| {
            (self.callback)(payload);
            true
        })
    }

    /// Discard any pending payload without firing
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a payload is waiting on the delay
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
