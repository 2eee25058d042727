// MedReminder — ESP high-resolution timer clock

use crate::clock::Clock;

/// Milliseconds since boot from `esp_timer_get_time` (microseconds, i64).
#[derive(Debug, Clone, Copy, Default)]
pub struct EspTimerClock;

impl Clock for EspTimerClock {
    fn now_ms(&self) -> u64 {
        let micros = unsafe { esp_idf_sys::esp_timer_get_time() };
        u64::try_from(micros / 1000).unwrap_or(0)
    }
}
