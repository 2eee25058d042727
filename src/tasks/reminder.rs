// MedReminder — Reminder Task
//
// Evaluates the alert state machine every poll interval.  Reminders and
// missed doses are detected here; button presses arrive from another task.

use std::thread;
use std::time::{Duration, Instant};

use crate::actuators::Actuators;
use crate::clock::Clock;
use crate::controller::ReminderController;
use crate::events::AlertEvent;

/// One loop iteration: read the clock and evaluate.
pub fn poll_once<A, C>(controller: &ReminderController<A>, clock: &C) -> Option<AlertEvent>
where
    A: Actuators,
    C: Clock,
{
    controller.tick(clock.now_ms())
}

pub fn reminder_task<A, C>(controller: &ReminderController<A>, clock: C, poll_interval_ms: u64) -> !
where
    A: Actuators,
    C: Clock,
{
    log::info!("Reminder task started (poll every {} ms)", poll_interval_ms);

    let interval = Duration::from_millis(poll_interval_ms);

    loop {
        let tick_start = Instant::now();

        poll_once(controller, &clock);

        // Sleep for the remainder of the interval to hold the cadence.
        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}
