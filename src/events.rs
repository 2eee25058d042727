// MedReminder — Alert Status & Events

// ---------------------------------------------------------------------------
// Alert Status
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertStatus {
    #[default]
    Idle,
    Alerting,
    /// Never stored: reported by the evaluation that detects the miss, which
    /// leaves the machine `Idle`.
    Missed,
}

// ---------------------------------------------------------------------------
// Alert Events — produced by a state transition
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertEvent {
    /// A dose is due; LED and buzzer go on.
    ReminderFired { at_ms: u64 },
    /// The button was pressed while the alert was active.
    DoseAcknowledged { at_ms: u64, response_ms: u64 },
    /// The acknowledgment window elapsed without a press.
    DoseMissed { at_ms: u64, alert_started_at: u64 },
}

impl AlertEvent {
    /// Status reported for this transition.
    pub fn status(&self) -> AlertStatus {
        match self {
            Self::ReminderFired { .. } => AlertStatus::Alerting,
            Self::DoseAcknowledged { .. } => AlertStatus::Idle,
            Self::DoseMissed { .. } => AlertStatus::Missed,
        }
    }

    /// Level both actuators must be driven to after this transition.
    pub fn actuators_on(&self) -> bool {
        matches!(self, Self::ReminderFired { .. })
    }

    pub fn at_ms(&self) -> u64 {
        match *self {
            Self::ReminderFired { at_ms }
            | Self::DoseAcknowledged { at_ms, .. }
            | Self::DoseMissed { at_ms, .. } => at_ms,
        }
    }

    /// Short label for debug logging.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ReminderFired { .. } => "reminder fired",
            Self::DoseAcknowledged { .. } => "dose acknowledged",
            Self::DoseMissed { .. } => "dose missed",
        }
    }
}
