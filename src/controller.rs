// MedReminder — Shared Reminder Controller
//
// One `AlertState` plus the actuators behind a single mutex.  The reminder
// task (`tick`) and the button task (`acknowledge`) are the two writers; each
// call decides the transition and drives the outputs inside one short
// critical section, then logs after the lock is released.
//
// The button ISR never reaches this type directly: it only notifies the
// button task, so both writers run in thread context and may block briefly.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::actuators::Actuators;
use crate::alert::AlertState;
use crate::events::AlertEvent;

/// Running counts since boot.  In memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoseTally {
    pub reminders: u32,
    pub taken: u32,
    pub missed: u32,
}

impl DoseTally {
    fn record(&mut self, event: &AlertEvent) {
        let counter = match event {
            AlertEvent::ReminderFired { .. } => &mut self.reminders,
            AlertEvent::DoseAcknowledged { .. } => &mut self.taken,
            AlertEvent::DoseMissed { .. } => &mut self.missed,
        };
        *counter = counter.saturating_add(1);
    }
}

struct Shared<A> {
    state: AlertState,
    actuators: A,
    tally: DoseTally,
}

pub struct ReminderController<A> {
    shared: Mutex<Shared<A>>,
}

impl<A: Actuators> ReminderController<A> {
    /// Take ownership of the state and the outputs.  Outputs start low.
    pub fn new(state: AlertState, mut actuators: A) -> Self {
        actuators.drive(false);
        Self {
            shared: Mutex::new(Shared {
                state,
                actuators,
                tally: DoseTally::default(),
            }),
        }
    }

    /// Periodic evaluation; see [`AlertState::tick`].
    pub fn tick(&self, now: u64) -> Option<AlertEvent> {
        self.apply(|state| state.tick(now))
    }

    /// Button press; see [`AlertState::acknowledge`].
    pub fn acknowledge(&self, now: u64) -> Option<AlertEvent> {
        self.apply(|state| state.acknowledge(now))
    }

    /// Run `f` on a consistent view of the state, the outputs and the tally.
    pub fn inspect<R>(&self, f: impl FnOnce(&AlertState, &A, &DoseTally) -> R) -> R {
        let shared = self.lock();
        f(&shared.state, &shared.actuators, &shared.tally)
    }

    fn apply(&self, transition: impl FnOnce(&mut AlertState) -> Option<AlertEvent>) -> Option<AlertEvent> {
        let (event, tally) = {
            let mut shared = self.lock();
            let event = transition(&mut shared.state)?;
            shared.actuators.drive(event.actuators_on());
            shared.tally.record(&event);
            (event, shared.tally)
        };

        log_event(&event, &tally);
        Some(event)
    }

    fn lock(&self) -> MutexGuard<'_, Shared<A>> {
        // Transitions are total and leave no half-written state behind, so a
        // poisoned lock still guards a consistent value.
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_event(event: &AlertEvent, tally: &DoseTally) {
    log::debug!("{} at t={} ms", event.display_name(), event.at_ms());

    match *event {
        AlertEvent::ReminderFired { at_ms } => {
            log::info!("[REMINDER] Time to take your medicine! (t={} ms)", at_ms);
        }
        AlertEvent::DoseAcknowledged { response_ms, .. } => {
            log::info!(
                "Dose acknowledged after {} ms — {}/{} taken",
                response_ms,
                tally.taken,
                tally.reminders
            );
        }
        AlertEvent::DoseMissed { alert_started_at, .. } => {
            log::warn!(
                "[WARNING] Dose was MISSED! (alert from t={} ms) — {} missed so far",
                alert_started_at,
                tally.missed
            );
        }
    }
}
