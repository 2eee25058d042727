// MedReminder — Hardware & System Configuration
// Target: ESP32 DevKit (Xtensa), ESP-IDF std

use anyhow::{bail, Context};

// ---------------------------------------------------------------------------
// GPIO Pin Definitions
// ---------------------------------------------------------------------------
pub const PIN_LED: i32 = 2;     // On-board LED (active HIGH)
pub const PIN_BUZZER: i32 = 14; // Passive buzzer (active HIGH)
pub const PIN_BUTTON: i32 = 4;  // Dose confirm button (INPUT_PULLUP, falling edge)

// ---------------------------------------------------------------------------
// Task Stack Sizes (bytes)
// ---------------------------------------------------------------------------
pub const STACK_REMINDER: usize = 4096;
pub const STACK_BUTTON: usize = 4096;

// ---------------------------------------------------------------------------
// Timing (milliseconds)
// ---------------------------------------------------------------------------
pub const REMINDER_PERIOD_MS: u64 = 15_000; // Time between dose reminders
pub const ACK_WINDOW_MS: u64 = 10_000;      // User must press the button within this window
pub const POLL_INTERVAL_MS: u64 = 100;      // Reminder task cadence
pub const BUTTON_LOCKOUT_MS: u64 = 50;      // Edges closer than this count as one press

// ---------------------------------------------------------------------------
// Override keys (environment, read at build time on the device)
// ---------------------------------------------------------------------------
pub const KEY_REMINDER_PERIOD: &str = "MEDREMINDER_REMINDER_PERIOD_MS";
pub const KEY_ACK_WINDOW: &str = "MEDREMINDER_ACK_WINDOW_MS";
pub const KEY_POLL_INTERVAL: &str = "MEDREMINDER_POLL_INTERVAL_MS";

/// Timing parameters of the reminder schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderConfig {
    pub reminder_period_ms: u64,
    pub ack_window_ms: u64,
    pub poll_interval_ms: u64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            reminder_period_ms: REMINDER_PERIOD_MS,
            ack_window_ms: ACK_WINDOW_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }
}

impl ReminderConfig {
    /// Start from the defaults and override every parameter `lookup` has a
    /// value for.  The result is validated.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        for (key, slot) in [
            (KEY_REMINDER_PERIOD, &mut config.reminder_period_ms),
            (KEY_ACK_WINDOW, &mut config.ack_window_ms),
            (KEY_POLL_INTERVAL, &mut config.poll_interval_ms),
        ] {
            if let Some(raw) = lookup(key) {
                *slot = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{key}={raw:?} is not a millisecond count"))?;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Overrides baked in at compile time, e.g.
    /// `MEDREMINDER_REMINDER_PERIOD_MS=3600000 cargo build --release`.
    pub fn from_build_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| {
            match key {
                KEY_REMINDER_PERIOD => option_env!("MEDREMINDER_REMINDER_PERIOD_MS"),
                KEY_ACK_WINDOW => option_env!("MEDREMINDER_ACK_WINDOW_MS"),
                KEY_POLL_INTERVAL => option_env!("MEDREMINDER_POLL_INTERVAL_MS"),
                _ => None,
            }
            .map(str::to_owned)
        })
    }

    /// Every period must be non-zero, and the driver must poll at least as
    /// often as the shortest period or transitions get skipped.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.reminder_period_ms == 0 || self.ack_window_ms == 0 || self.poll_interval_ms == 0 {
            bail!("timing parameters must be non-zero: {self:?}");
        }

        let shortest = self.reminder_period_ms.min(self.ack_window_ms);
        if self.poll_interval_ms > shortest {
            bail!(
                "poll interval {} ms exceeds the shortest period {} ms",
                self.poll_interval_ms,
                shortest
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_device() {
        let config = ReminderConfig::default();
        assert_eq!(config.reminder_period_ms, 15_000);
        assert_eq!(config.ack_window_ms, 10_000);
        assert_eq!(config.poll_interval_ms, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pins_match_board_wiring() {
        // main.rs takes gpio2 / gpio14 / gpio4 by name.
        assert_eq!((PIN_LED, PIN_BUZZER, PIN_BUTTON), (2, 14, 4));
    }

    #[test]
    fn test_lookup_overrides() {
        let config = ReminderConfig::from_lookup(lookup_from(&[
            (KEY_REMINDER_PERIOD, "3600000"),
            (KEY_ACK_WINDOW, " 600000 "),
        ]))
        .unwrap();

        assert_eq!(config.reminder_period_ms, 3_600_000);
        assert_eq!(config.ack_window_ms, 600_000);
        assert_eq!(config.poll_interval_ms, POLL_INTERVAL_MS);
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let err = ReminderConfig::from_lookup(lookup_from(&[(KEY_ACK_WINDOW, "ten seconds")]))
            .unwrap_err();
        assert!(err.to_string().contains(KEY_ACK_WINDOW));
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = ReminderConfig {
            ack_window_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_slow_polling() {
        let config = ReminderConfig {
            ack_window_ms: 50,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_env_defaults_are_valid() {
        // No overrides are set when the test suite is built.
        assert!(ReminderConfig::from_build_env().is_ok());
    }
}
