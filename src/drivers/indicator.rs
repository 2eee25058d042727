// MedReminder — LED + Buzzer Driver
//
// Two active-HIGH GPIO outputs.  The buzzer is a passive one driven with a
// plain level, matching the original board wiring.

use esp_idf_hal::gpio::{AnyOutputPin, Level, Output, PinDriver};

use crate::actuators::Actuators;

pub struct IndicatorDriver<'d> {
    led: PinDriver<'d, AnyOutputPin, Output>,
    buzzer: PinDriver<'d, AnyOutputPin, Output>,
}

impl<'d> IndicatorDriver<'d> {
    pub fn new(led: PinDriver<'d, AnyOutputPin, Output>, buzzer: PinDriver<'d, AnyOutputPin, Output>) -> Self {
        Self { led, buzzer }
    }
}

fn level(on: bool) -> Level {
    if on {
        Level::High
    } else {
        Level::Low
    }
}

impl Actuators for IndicatorDriver<'_> {
    fn set_led(&mut self, on: bool) {
        if let Err(e) = self.led.set_level(level(on)) {
            log::warn!("LED write failed: {}", e);
        }
    }

    fn set_buzzer(&mut self, on: bool) {
        if let Err(e) = self.buzzer.set_level(level(on)) {
            log::warn!("Buzzer write failed: {}", e);
        }
    }
}
