// MedReminder — Firmware Entry Point
//
// Boot sequence:
//   1. Initialise logging and read the reminder timing.
//   2. Configure LED + buzzer outputs (driven low) and the dose button.
//   3. Spawn the reminder task (periodic evaluation) and the button task
//      (interrupt-driven acknowledgment).
//
// Built for the host, the same core runs as a console simulation: the LED and
// buzzer are log lines and pressing Enter is the button.

use std::sync::Arc;
use std::thread;

use medreminder::alert::AlertState;
use medreminder::clock::Clock;
use medreminder::config::*;
use medreminder::controller::ReminderController;
use medreminder::tasks;

// ---------------------------------------------------------------------------
// Main (device)
// ---------------------------------------------------------------------------
#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use std::time::Duration;

    use esp_idf_hal::gpio::{IOPin, OutputPin, PinDriver};
    use esp_idf_hal::prelude::*;

    use medreminder::drivers::indicator::IndicatorDriver;
    use medreminder::drivers::timer::EspTimerClock;

    // Link esp-idf-sys runtime patches and initialise logging.
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("MedReminder firmware starting…");

    let config = ReminderConfig::from_build_env()?;
    log::info!("{:?}", config);

    // ---- Peripherals ------------------------------------------------------
    let peripherals = Peripherals::take()?;

    // Pin numbers must match PIN_LED / PIN_BUZZER / PIN_BUTTON in config.rs.
    let led = PinDriver::output(peripherals.pins.gpio2.downgrade_output())?; // PIN_LED
    let buzzer = PinDriver::output(peripherals.pins.gpio14.downgrade_output())?; // PIN_BUZZER
    let button = PinDriver::input(peripherals.pins.gpio4.downgrade())?; // PIN_BUTTON

    // ---- Shared state -----------------------------------------------------
    let clock = EspTimerClock;
    let controller = Arc::new(ReminderController::new(
        AlertState::new(&config, clock.now_ms()),
        IndicatorDriver::new(led, buzzer),
    ));

    log::info!(
        "Smart Medicine Reminder started — LED GPIO{}, buzzer GPIO{}, press button on GPIO{} to confirm dose",
        PIN_LED,
        PIN_BUZZER,
        PIN_BUTTON
    );

    // ---- Spawn tasks (map to FreeRTOS tasks via std::thread) ---------------
    let reminder_controller = Arc::clone(&controller);
    thread::Builder::new()
        .name("reminder".into())
        .stack_size(STACK_REMINDER)
        .spawn(move || {
            tasks::reminder::reminder_task(&reminder_controller, clock, config.poll_interval_ms);
        })?;

    thread::Builder::new()
        .name("button".into())
        .stack_size(STACK_BUTTON)
        .spawn(move || {
            if let Err(e) = tasks::button::button_task(button, controller, clock) {
                log::error!("Button task failed: {}", e);
            }
        })?;

    // Main thread has nothing left to do — park it forever.
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}

// ---------------------------------------------------------------------------
// Main (host simulation)
// ---------------------------------------------------------------------------
#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    use medreminder::actuators::ConsoleActuators;
    use medreminder::clock::InstantClock;

    host::init_logger()?;
    log::info!("MedReminder simulation starting…");

    let config = ReminderConfig::from_lookup(|key| std::env::var(key).ok())?;

    let clock = InstantClock::new();
    let controller = Arc::new(ReminderController::new(
        AlertState::new(&config, clock.now_ms()),
        ConsoleActuators::default(),
    ));

    log::info!(
        "Reminder every {} ms, {} ms to confirm (poll {} ms)",
        config.reminder_period_ms,
        config.ack_window_ms,
        config.poll_interval_ms
    );

    let reminder_controller = Arc::clone(&controller);
    thread::Builder::new()
        .name("reminder".into())
        .spawn(move || {
            tasks::reminder::reminder_task(&reminder_controller, clock, config.poll_interval_ms);
        })?;

    tasks::console::console_task(&controller, clock, std::io::stdin().lock())
}

#[cfg(not(target_os = "espidf"))]
mod host {
    use tracing_subscriber::EnvFilter;

    /// Filter override, e.g. `MEDREMINDER_LOG=debug` to see actuator changes.
    const KEY_LOG_FILTER: &str = "MEDREMINDER_LOG";

    /// `log` records are bridged into the fmt subscriber.  Output goes to
    /// stdout; write errors (closed pipe) are dropped, not raised.
    pub fn init_logger() -> anyhow::Result<()> {
        let filter = EnvFilter::builder()
            .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
            .with_env_var(KEY_LOG_FILTER)
            .from_env_lossy();

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_thread_names(true)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("logger already installed: {e}"))
    }
}
