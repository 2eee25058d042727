// MedReminder — Dose Button
//
// Pull-up input, interrupt on the falling edge.  The ISR does nothing but
// notify the task that armed it; the state machine is only touched from that
// task.

use std::num::NonZeroU32;

use esp_idf_hal::delay;
use esp_idf_hal::gpio::{AnyIOPin, Input, InterruptType, PinDriver, Pull};
use esp_idf_hal::task::notification::Notification;

pub struct AckButton<'d> {
    pin: PinDriver<'d, AnyIOPin, Input>,
    notification: Notification,
}

impl AckButton<'static> {
    /// Configure the pin and install the ISR.  Must be called from the task
    /// that will wait for presses: the notification targets the caller.
    pub fn arm(mut pin: PinDriver<'static, AnyIOPin, Input>) -> anyhow::Result<Self> {
        pin.set_pull(Pull::Up)?;
        pin.set_interrupt_type(InterruptType::NegEdge)?;

        let notification = Notification::new();
        let notifier = notification.notifier();

        // SAFETY: the callback runs in ISR context and only posts a task
        // notification, which is ISR-safe.
        unsafe {
            pin.subscribe(move || {
                notifier.notify_and_yield(NonZeroU32::MIN);
            })?;
        }

        Ok(Self { pin, notification })
    }

    /// Block until the next falling edge.
    pub fn wait_for_press(&mut self) -> anyhow::Result<()> {
        // The driver disables the interrupt after every trigger.
        self.pin.enable_interrupt()?;
        self.notification.wait(delay::BLOCK);
        Ok(())
    }
}
