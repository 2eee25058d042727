// MedReminder — Console Button (host simulation)
//
// Every line read from `input` is one button press.  Returns when the input
// is closed.

use std::io::BufRead;

use crate::actuators::Actuators;
use crate::clock::Clock;
use crate::controller::ReminderController;

pub fn console_task<A, C, R>(controller: &ReminderController<A>, clock: C, input: R) -> anyhow::Result<()>
where
    A: Actuators,
    C: Clock,
    R: BufRead,
{
    log::info!("Console task started — press Enter to confirm a dose");

    for line in input.lines() {
        line?;
        let now = clock.now_ms();
        if controller.acknowledge(now).is_none() {
            log::debug!("Press at t={} ms ignored — no active reminder", now);
        }
    }

    log::info!("Console closed — exiting console task");
    Ok(())
}
