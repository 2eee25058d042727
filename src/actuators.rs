// MedReminder — Actuator Interface
//
// The two binary outputs of the device.  Writes are idempotent and
// infallible at this level; hardware drivers log their own failures.

pub trait Actuators {
    fn set_led(&mut self, on: bool);
    fn set_buzzer(&mut self, on: bool);

    /// LED and buzzer always move together.
    fn drive(&mut self, on: bool) {
        self.set_led(on);
        self.set_buzzer(on);
    }
}

/// Last commanded levels, held in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputLevels {
    pub led: bool,
    pub buzzer: bool,
}

impl Actuators for OutputLevels {
    fn set_led(&mut self, on: bool) {
        self.led = on;
    }

    fn set_buzzer(&mut self, on: bool) {
        self.buzzer = on;
    }
}

/// Host stand-in for the LED and buzzer: reports level changes on the log.
#[derive(Debug, Default)]
pub struct ConsoleActuators {
    levels: OutputLevels,
}

impl Actuators for ConsoleActuators {
    fn set_led(&mut self, on: bool) {
        if self.levels.led != on {
            log::debug!("LED {}", if on { "ON" } else { "off" });
        }
        self.levels.led = on;
    }

    fn set_buzzer(&mut self, on: bool) {
        if self.levels.buzzer != on {
            log::debug!("Buzzer {}", if on { "ON" } else { "off" });
        }
        self.levels.buzzer = on;
    }
}
