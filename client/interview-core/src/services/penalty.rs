use super::clock::Clock;
use crate::metrics::record_penalty;

/// Fixed time deductions for specific triggering events.
///
/// Stateless policy over the clock: each triggering event applies its
/// deduction exactly once, never retried or reversed. Returns whether the
/// deduction crossed the clock to zero (the expired signal).
pub struct PenaltyLedger;

impl PenaltyLedger {
    /// Cost of explicitly unlocking hints. The unlock always succeeds: when
    /// the budget cannot cover the cost, the clock is exhausted to zero
    /// instead of the request failing.
    pub fn apply_unlock_penalty(clock: &mut Clock, cost_seconds: u32) -> bool {
        let before = clock.remaining_seconds();
        let expired = if before > cost_seconds {
            clock.apply_delta(cost_seconds)
        } else {
            clock.apply_delta(before)
        };
        record_penalty("hint_unlock", before - clock.remaining_seconds());
        tracing::info!(
            "Hint unlock penalty: cost={}s, remaining={}s",
            cost_seconds,
            clock.remaining_seconds()
        );
        expired
    }

    /// Cost of a graded submission that failed. Applied once per submission,
    /// regardless of how many individual cases failed.
    pub fn apply_wrong_submission_penalty(clock: &mut Clock, cost_seconds: u32) -> bool {
        let before = clock.remaining_seconds();
        let expired = clock.apply_delta(cost_seconds);
        record_penalty("wrong_submission", before - clock.remaining_seconds());
        tracing::info!(
            "Wrong submission penalty: cost={}s, remaining={}s",
            cost_seconds,
            clock.remaining_seconds()
        );
        expired
    }
}
