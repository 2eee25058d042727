// MedReminder — Monotonic Millisecond Clocks

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Milliseconds since boot.  Non-decreasing.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// `std::time::Instant` based clock, zero at construction.
#[derive(Debug, Clone, Copy)]
pub struct InstantClock {
    boot: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self { boot: Instant::now() }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now_ms(&self) -> u64 {
        // u128 millis only overflow u64 after ~584 million years.
        self.boot.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to.  Shared between threads by reference.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: AtomicU64::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    /// Move forward by `delta_ms` and return the new time.
    pub fn advance(&self, delta_ms: u64) -> u64 {
        self.now.fetch_add(delta_ms, Ordering::SeqCst).wrapping_add(delta_ms)
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
