// MedReminder — Alert State Machine
//
//            elapsed >= reminder period
//   Idle ─────────────────────────────► Alerting
//    ▲                                    │   │
//    │        acknowledge()               │   │  elapsed >= ack window
//    ├────────────────────────────────────┘   │
//    │                                        ▼
//    └──────────────────────────────────── Missed (reported, never stored)
//
// Pure and total: every operation takes the current time, mutates the state
// and returns the event it produced.  Locking and actuators live in
// `controller`.

use crate::config::ReminderConfig;
use crate::events::{AlertEvent, AlertStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    reminder_period_ms: u64,
    ack_window_ms: u64,

    last_reminder_at: u64,
    // Some(start) exactly while an alert is active.
    alert_started_at: Option<u64>,
}

impl AlertState {
    /// Idle state whose first reminder is due one period after `now`.
    pub fn new(config: &ReminderConfig, now: u64) -> Self {
        Self {
            reminder_period_ms: config.reminder_period_ms,
            ack_window_ms: config.ack_window_ms,
            last_reminder_at: now,
            alert_started_at: None,
        }
    }

    pub fn status(&self) -> AlertStatus {
        if self.alert_started_at.is_some() {
            AlertStatus::Alerting
        } else {
            AlertStatus::Idle
        }
    }

    pub fn last_reminder_at(&self) -> u64 {
        self.last_reminder_at
    }

    pub fn alert_started_at(&self) -> Option<u64> {
        self.alert_started_at
    }

    /// Periodic evaluation.  At most one transition per call; a large jump in
    /// `now` does not back-fill skipped reminders.
    ///
    /// Elapsed time uses wrapping arithmetic, so a clock that wraps around
    /// reads as a large forward jump rather than a stall.
    pub fn tick(&mut self, now: u64) -> Option<AlertEvent> {
        match self.alert_started_at {
            None if now.wrapping_sub(self.last_reminder_at) >= self.reminder_period_ms => {
                self.alert_started_at = Some(now);
                self.last_reminder_at = now;
                Some(AlertEvent::ReminderFired { at_ms: now })
            }
            // `last_reminder_at` keeps the alert start, so the next reminder
            // is one period after the missed alert began.
            Some(started) if now.wrapping_sub(started) >= self.ack_window_ms => {
                self.alert_started_at = None;
                Some(AlertEvent::DoseMissed {
                    at_ms: now,
                    alert_started_at: started,
                })
            }
            _ => None,
        }
    }

    /// Button press.  Ignored (not queued) unless an alert is active.
    pub fn acknowledge(&mut self, now: u64) -> Option<AlertEvent> {
        let started = self.alert_started_at.take()?;
        Some(AlertEvent::DoseAcknowledged {
            at_ms: now,
            // The press may have been timestamped just before the tick that
            // opened the alert took the lock.
            response_ms: now.saturating_sub(started),
        })
    }
}
