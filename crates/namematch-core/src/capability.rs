//! Running capability calls under a deadline.
//!
//! A call that misses its deadline cannot be cancelled: its helper thread
//! keeps running until the provider returns, and the result is dropped.
//! [`CapabilityRunner`] bounds how many such threads a capability may have
//! alive at once; past the bound, new calls are refused instead of spawned.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crate::constants::MAX_IN_FLIGHT_CAPABILITY_CALLS;

/// Outcome of a call made under a deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deadline<T> {
    Completed(T),
    TimedOut,
    /// Not started: too many earlier calls are still running.
    Saturated,
}

/// Runs calls to one capability under a timeout, with a bound on helper
/// threads still alive.
#[derive(Debug, Clone)]
pub struct CapabilityRunner {
    name: &'static str,
    timeout: Duration,
    max_in_flight: usize,
    in_flight: Arc<AtomicUsize>,
}

/// Releases an in-flight slot when the helper thread finishes, even by
/// unwinding.
struct SlotGuard(Arc<AtomicUsize>);

impl Drop for SlotGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl CapabilityRunner {
    /// A zero `timeout` runs calls inline with no deadline.
    pub fn new(name: &'static str, timeout: Duration) -> Self {
        Self::with_limit(name, timeout, MAX_IN_FLIGHT_CAPABILITY_CALLS)
    }

    pub fn with_limit(name: &'static str, timeout: Duration, max_in_flight: usize) -> Self {
        Self {
            name,
            timeout,
            max_in_flight: max_in_flight.max(1),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Helper threads currently alive, including abandoned ones.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Run `f` on a helper thread and wait at most the timeout for it.
    pub fn run<T, F>(&self, f: F) -> Deadline<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        if self.timeout.is_zero() {
            return Deadline::Completed(f());
        }

        let max = self.max_in_flight;
        let acquired = self
            .in_flight
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| (n < max).then_some(n + 1));
        if acquired.is_err() {
            return Deadline::Saturated;
        }
        let guard = SlotGuard(Arc::clone(&self.in_flight));

        let (tx, rx) = mpsc::sync_channel(1);
        let spawned = thread::Builder::new()
            .name(format!("namematch-{}", self.name))
            .spawn(move || {
                let _guard = guard;
                let _ = tx.send(f());
            });
        if spawned.is_err() {
            // The closure, and with it the guard, was dropped.
            return Deadline::Saturated;
        }

        match rx.recv_timeout(self.timeout) {
            Ok(value) => Deadline::Completed(value),
            Err(_) => Deadline::TimedOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;

    #[test]
    fn zero_timeout_runs_inline() {
        let runner = CapabilityRunner::new("test", Duration::ZERO);
        assert_eq!(runner.run(|| 7), Deadline::Completed(7));
    }

    #[test]
    fn fast_call_completes() {
        let runner = CapabilityRunner::new("test", Duration::from_secs(5));
        assert_eq!(runner.run(|| "done"), Deadline::Completed("done"));
    }

    #[test]
    fn slow_call_times_out() {
        let runner = CapabilityRunner::new("test", Duration::from_millis(10));
        let out = runner.run(|| {
            thread::sleep(Duration::from_millis(500));
            1
        });
        assert_eq!(out, Deadline::TimedOut);
    }

    #[test]
    fn hung_calls_are_bounded() {
        let runner = CapabilityRunner::with_limit("test", Duration::from_millis(10), 2);
        let release = Arc::new(Barrier::new(3));

        for _ in 0..2 {
            let release = Arc::clone(&release);
            let out = runner.run(move || {
                release.wait();
            });
            assert_eq!(out, Deadline::TimedOut);
        }
        assert_eq!(runner.in_flight(), 2);
        assert_eq!(runner.run(|| 1), Deadline::Saturated);

        release.wait();
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while runner.in_flight() > 0 && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(runner.in_flight(), 0);
        assert_eq!(runner.run(|| 1), Deadline::Completed(1));
    }
}
