use std::sync::atomic::{AtomicUsize, Ordering};

/// Global bound on arbiter calls. Acquiring a slot is a single atomic
/// check-then-increment, so concurrent queries never overrun the cap.
#[derive(Debug)]
pub struct CallBudget {
    cap: usize,
    used: AtomicUsize,
}

impl CallBudget {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            used: AtomicUsize::new(0),
        }
    }

    /// Take one call slot. Returns false once the cap is reached.
    pub fn try_acquire(&self) -> bool {
        self.used
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |used| {
                (used < self.cap).then_some(used + 1)
            })
            .is_ok()
    }

    pub fn used(&self) -> usize {
        self.used.load(Ordering::SeqCst)
    }

    pub fn remaining(&self) -> usize {
        self.cap.saturating_sub(self.used())
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn is_exhausted(&self) -> bool {
        self.used() >= self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn stops_at_cap() {
        let budget = CallBudget::new(2);
        assert!(budget.try_acquire());
        assert!(budget.try_acquire());
        assert!(!budget.try_acquire());
        assert_eq!(budget.used(), 2);
        assert!(budget.is_exhausted());
    }

    #[test]
    fn zero_cap_never_grants() {
        let budget = CallBudget::new(0);
        assert!(!budget.try_acquire());
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn concurrent_acquires_respect_cap() {
        let budget = Arc::new(CallBudget::new(25));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let budget = Arc::clone(&budget);
                thread::spawn(move || (0..10).filter(|_| budget.try_acquire()).count())
            })
            .collect();
        let granted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(granted, 25);
        assert_eq!(budget.used(), 25);
    }
}
