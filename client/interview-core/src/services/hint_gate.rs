use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::penalty::PenaltyLedger;
use crate::metrics::HINTS_UNLOCKED_TOTAL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintState {
    Locked,
    Unlocked,
}

/// Result of an explicit unlock request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// The gate flipped. `clock_expired` is true when paying the cost
    /// exhausted the budget.
    Unlocked { clock_expired: bool },
    /// The gate was already open; nothing happened, no penalty.
    AlreadyUnlocked,
}

/// Two-state gate over the problem's solution hints.
///
/// `Locked` is the initial state, `Unlocked` is terminal: the transition
/// never reverses, and repeated unlock requests or expiry signals are no-ops.
#[derive(Debug, Clone)]
pub struct HintGate {
    state: HintState,
}

impl HintGate {
    pub fn new() -> Self {
        Self {
            state: HintState::Locked,
        }
    }

    pub fn state(&self) -> HintState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == HintState::Unlocked
    }

    /// Automatic unlock when the clock runs out. No penalty; the budget is
    /// already zero. Returns true if the gate flipped on this call.
    pub fn on_clock_expired(&mut self) -> bool {
        if self.is_unlocked() {
            return false;
        }
        self.state = HintState::Unlocked;
        HINTS_UNLOCKED_TOTAL.with_label_values(&["expired"]).inc();
        tracing::info!("Time's up, hints unlocked automatically");
        true
    }

    /// Explicit paid unlock. Always succeeds; insufficient budget exhausts
    /// the clock rather than failing the request.
    pub fn unlock(&mut self, clock: &mut Clock, cost_seconds: u32) -> UnlockOutcome {
        if self.is_unlocked() {
            return UnlockOutcome::AlreadyUnlocked;
        }
        let clock_expired = PenaltyLedger::apply_unlock_penalty(clock, cost_seconds);
        self.state = HintState::Unlocked;
        HINTS_UNLOCKED_TOTAL.with_label_values(&["paid"]).inc();
        tracing::info!(
            "Hints unlocked, remaining={}s",
            clock.remaining_seconds()
        );
        UnlockOutcome::Unlocked { clock_expired }
    }
}

impl Default for HintGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paid_unlock_flips_gate_and_charges_clock() {
        let mut gate = HintGate::new();
        let mut clock = Clock::start(1800).unwrap();
        let outcome = gate.unlock(&mut clock, 300);
        assert_eq!(outcome, UnlockOutcome::Unlocked { clock_expired: false });
        assert!(gate.is_unlocked());
        assert_eq!(clock.remaining_seconds(), 1500);
    }

    #[test]
    fn second_unlock_is_a_no_op_and_free() {
        let mut gate = HintGate::new();
        let mut clock = Clock::start(1800).unwrap();
        gate.unlock(&mut clock, 300);
        let outcome = gate.unlock(&mut clock, 300);
        assert_eq!(outcome, UnlockOutcome::AlreadyUnlocked);
        assert_eq!(clock.remaining_seconds(), 1500);
    }

    #[test]
    fn expiry_unlocks_without_penalty() {
        let mut gate = HintGate::new();
        assert!(gate.on_clock_expired());
        assert!(gate.is_unlocked());
        // repeated expiry signal is a no-op
        assert!(!gate.on_clock_expired());
    }

    #[test]
    fn unlock_never_relocks_after_expiry() {
        let mut gate = HintGate::new();
        let mut clock = Clock::start(60).unwrap();
        gate.on_clock_expired();
        let outcome = gate.unlock(&mut clock, 300);
        assert_eq!(outcome, UnlockOutcome::AlreadyUnlocked);
        assert_eq!(clock.remaining_seconds(), 60);
        assert_eq!(gate.state(), HintState::Unlocked);
    }
}
