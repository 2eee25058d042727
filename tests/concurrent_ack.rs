//! The reminder task and the button task hammering one controller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use medreminder::actuators::{Actuators, OutputLevels};
use medreminder::alert::AlertState;
use medreminder::clock::{Clock, ManualClock};
use medreminder::config::ReminderConfig;
use medreminder::controller::ReminderController;
use medreminder::events::{AlertEvent, AlertStatus};
use medreminder::tasks::reminder::poll_once;

fn device() -> (Arc<ManualClock>, Arc<ReminderController<OutputLevels>>) {
    let clock = Arc::new(ManualClock::new(0));
    let state = AlertState::new(&ReminderConfig::default(), 0);
    let controller = Arc::new(ReminderController::new(state, OutputLevels::default()));
    (clock, controller)
}

/// Outputs and alert start must agree with the status.
fn assert_consistent(controller: &ReminderController<OutputLevels>) {
    controller.inspect(|state, levels, _| {
        let alerting = state.status() == AlertStatus::Alerting;
        assert_eq!(state.alert_started_at().is_some(), alerting, "{state:?}");
        assert_eq!(levels.led, alerting, "{state:?} {levels:?}");
        assert_eq!(levels.buzzer, alerting, "{state:?} {levels:?}");
    });
}

#[test]
fn scenario_acknowledged_dose() {
    let (clock, controller) = device();

    clock.set(15_000);
    assert_eq!(
        poll_once(&controller, &clock),
        Some(AlertEvent::ReminderFired { at_ms: 15_000 })
    );
    assert_eq!(controller.inspect(|_, levels, _| *levels), OutputLevels { led: true, buzzer: true });

    assert_eq!(
        controller.acknowledge(18_000),
        Some(AlertEvent::DoseAcknowledged { at_ms: 18_000, response_ms: 3_000 })
    );
    assert_eq!(controller.inspect(|_, levels, _| *levels), OutputLevels::default());
    assert_consistent(&controller);
}

#[test]
fn scenario_missed_dose_reschedules_from_alert_start() {
    let (clock, controller) = device();

    clock.set(15_000);
    poll_once(&controller, &clock);

    clock.set(25_000);
    assert_eq!(
        poll_once(&controller, &clock),
        Some(AlertEvent::DoseMissed { at_ms: 25_000, alert_started_at: 15_000 })
    );
    assert_consistent(&controller);

    clock.set(30_000);
    assert_eq!(
        poll_once(&controller, &clock),
        Some(AlertEvent::ReminderFired { at_ms: 30_000 })
    );
}

#[test]
fn scenario_press_outside_alert_is_ignored() {
    let (_clock, controller) = device();

    assert_eq!(controller.acknowledge(5_000), None);
    assert_eq!(controller.inspect(|_, levels, _| *levels), OutputLevels::default());
    assert_eq!(controller.inspect(|state, _, _| state.last_reminder_at()), 0);
}

#[test]
fn concurrent_tick_and_acknowledge_never_tear_state() {
    let (clock, controller) = device();
    let done = Arc::new(AtomicBool::new(false));

    let presser = {
        let clock = Arc::clone(&clock);
        let controller = Arc::clone(&controller);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut acknowledged = 0u32;
            while !done.load(Ordering::SeqCst) {
                if controller.acknowledge(clock.now_ms()).is_some() {
                    acknowledged += 1;
                }
                assert_consistent(&controller);
                thread::yield_now();
            }
            acknowledged
        })
    };

    let mut fired = 0u32;
    let mut missed = 0u32;
    for _ in 0..20_000 {
        clock.advance(100);
        match poll_once(&controller, &clock) {
            Some(AlertEvent::ReminderFired { .. }) => fired += 1,
            Some(AlertEvent::DoseMissed { .. }) => missed += 1,
            _ => {}
        }
        assert_consistent(&controller);
    }

    done.store(true, Ordering::SeqCst);
    let acknowledged = presser.join().unwrap();

    // Every alert ends exactly once, by press or by timeout, except possibly
    // the one still open.
    let open = u32::from(controller.inspect(|state, _, _| state.status() == AlertStatus::Alerting));
    assert_eq!(fired, acknowledged + missed + open);

    let tally = controller.inspect(|_, _, tally| *tally);
    assert_eq!(tally.reminders, fired);
    assert_eq!(tally.taken, acknowledged);
    assert_eq!(tally.missed, missed);
}

/// Counts every write so a press outside an alert can be shown to do nothing.
#[derive(Default)]
struct CountingOutputs {
    writes: usize,
}

impl Actuators for CountingOutputs {
    fn set_led(&mut self, _on: bool) {
        self.writes += 1;
    }

    fn set_buzzer(&mut self, _on: bool) {
        self.writes += 1;
    }
}

#[test]
fn repeated_idle_presses_write_nothing() {
    let state = AlertState::new(&ReminderConfig::default(), 0);
    let controller = ReminderController::new(state, CountingOutputs::default());
    let after_boot = controller.inspect(|_, outputs, _| outputs.writes);

    for t in (0..15_000).step_by(500) {
        assert_eq!(controller.acknowledge(t), None);
    }

    assert_eq!(controller.inspect(|_, outputs, _| outputs.writes), after_boot);
}
