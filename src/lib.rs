// MedReminder — Medication Adherence Reminder
//
// Every reminder period the LED and buzzer come on until the dose button is
// pressed.  If nobody presses it within the acknowledgment window the alert
// stops by itself and a missed dose is logged.
//
// The state machine, its shared controller and the reminder loop are portable
// and tested on the host; GPIO drivers and the button interrupt task only
// exist on ESP-IDF.

pub mod actuators;
pub mod alert;
pub mod clock;
pub mod config;
pub mod controller;
pub mod events;
pub mod input;
pub mod tasks;

#[cfg(target_os = "espidf")]
pub mod drivers;
