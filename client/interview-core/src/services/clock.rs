use crate::errors::CoreError;

/// Countdown budget for one session.
///
/// Pure value type: the tick driver and the penalty policy mutate it only
/// through `advance` and `apply_delta`, so the clamping and single-expiry
/// rules live in one place. Remaining time never leaves `[0, total]`, and the
/// expired edge is reported exactly once per clock lifetime no matter how
/// many ticks or deltas land at or below zero.
#[derive(Debug, Clone)]
pub struct Clock {
    total_seconds: u32,
    remaining_seconds: u32,
    expired_emitted: bool,
}

impl Clock {
    pub fn start(duration_seconds: u32) -> Result<Self, CoreError> {
        if duration_seconds == 0 {
            return Err(CoreError::InvalidConfig(
                "session duration must be positive".to_string(),
            ));
        }
        Ok(Self {
            total_seconds: duration_seconds,
            remaining_seconds: duration_seconds,
            expired_emitted: false,
        })
    }

    /// One 1 Hz tick. Decrements by one second, floored at zero. Returns true
    /// when this call crossed to zero and the expired signal should fire.
    pub fn advance(&mut self) -> bool {
        if self.remaining_seconds == 0 {
            return false;
        }
        self.remaining_seconds -= 1;
        self.expired_edge()
    }

    /// Immediate deduction, independent of the tick source, clamped to
    /// `[0, total]`. A zero-crossing here fires the expired signal too.
    pub fn apply_delta(&mut self, seconds: u32) -> bool {
        if seconds == 0 {
            return false;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(seconds);
        self.expired_edge()
    }

    fn expired_edge(&mut self) -> bool {
        if self.remaining_seconds == 0 && !self.expired_emitted {
            self.expired_emitted = true;
            return true;
        }
        false
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.total_seconds - self.remaining_seconds
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_seconds == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_rejects_zero_duration() {
        assert!(Clock::start(0).is_err());
    }

    #[test]
    fn advance_counts_down_to_zero_and_fires_once() {
        let mut clock = Clock::start(2).unwrap();
        assert!(!clock.advance());
        assert_eq!(clock.remaining_seconds(), 1);
        assert!(clock.advance());
        assert_eq!(clock.remaining_seconds(), 0);
        // further ticks are no-ops and never re-fire
        assert!(!clock.advance());
        assert_eq!(clock.remaining_seconds(), 0);
    }

    #[test]
    fn apply_delta_clamps_at_zero() {
        let mut clock = Clock::start(100).unwrap();
        assert!(clock.apply_delta(300));
        assert_eq!(clock.remaining_seconds(), 0);
        assert!(clock.is_expired());
    }

    #[test]
    fn delta_crossing_suppresses_later_tick_expiry() {
        let mut clock = Clock::start(10).unwrap();
        assert!(clock.apply_delta(10));
        assert!(!clock.advance());
        assert!(!clock.apply_delta(5));
    }

    #[test]
    fn remaining_stays_in_bounds_under_mixed_operations() {
        let mut clock = Clock::start(30).unwrap();
        for step in 0..50u32 {
            if step % 3 == 0 {
                clock.apply_delta(step % 7);
            } else {
                clock.advance();
            }
            assert!(clock.remaining_seconds() <= clock.total_seconds());
        }
        assert_eq!(clock.remaining_seconds(), 0);
    }
}
