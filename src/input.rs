// MedReminder — Button Edge Filter
//
// A mechanical button produces a burst of falling edges per press.  The first
// edge of a burst becomes the acknowledgment; edges within the lockout after
// it are swallowed.

#[derive(Debug, Clone)]
pub struct AckDebouncer {
    lockout_ms: u64,
    last_accepted: Option<u64>,
}

impl AckDebouncer {
    pub fn new(lockout_ms: u64) -> Self {
        Self {
            lockout_ms,
            last_accepted: None,
        }
    }

    /// Returns `true` if the edge seen at `now` counts as a new press.
    pub fn accept(&mut self, now: u64) -> bool {
        if let Some(last) = self.last_accepted {
            if now.saturating_sub(last) < self.lockout_ms {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }
}
