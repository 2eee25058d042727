// MedReminder — Button Task
//
// Turns falling edges on the dose button into acknowledgments.

use std::sync::Arc;

use esp_idf_hal::gpio::{AnyIOPin, Input, PinDriver};

use crate::actuators::Actuators;
use crate::clock::Clock;
use crate::config::*;
use crate::controller::ReminderController;
use crate::drivers::button::AckButton;
use crate::input::AckDebouncer;

pub fn button_task<A, C>(
    pin: PinDriver<'static, AnyIOPin, Input>,
    controller: Arc<ReminderController<A>>,
    clock: C,
) -> anyhow::Result<()>
where
    A: Actuators,
    C: Clock,
{
    log::info!("Button task started (GPIO{})", PIN_BUTTON);

    let mut button = AckButton::arm(pin)?;
    let mut debouncer = AckDebouncer::new(BUTTON_LOCKOUT_MS);

    loop {
        button.wait_for_press()?;

        let now = clock.now_ms();
        if !debouncer.accept(now) {
            continue;
        }

        if controller.acknowledge(now).is_none() {
            log::debug!("Press at t={} ms ignored — no active reminder", now);
        }
    }
}
