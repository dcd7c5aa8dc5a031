use chrono::Utc;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::CoreError;
use crate::metrics::SESSIONS_STARTED_TOTAL;
use crate::models::execution::{
    ExecutionMode, ExecutionRequest, ExecutionResponse, RequestCase, PLAYGROUND_PROBLEM_ID,
};
use crate::models::timer::{TimeExpired, TimerEvent, TimerTick};
use crate::models::{CustomCase, StandardCase};
use crate::utils::time::format_clock;

use super::clock::Clock;
use super::execution_service::ExecutionBackend;
use super::hint_gate::{HintGate, HintState, UnlockOutcome};
use super::penalty::PenaltyLedger;
use super::reconciler::{self, Reconciliation};

/// Pairs an issued execution request with its eventual response. A completion
/// presented with a stale token (the session was closed or the request
/// superseded) is discarded without touching any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionToken {
    generation: u64,
}

/// One timed attempt at a problem.
///
/// Owns the countdown, the hint gate and both case lists, and is mutated by
/// a single interactive owner: penalty application and gate transitions are
/// plain `&mut self` calls, so no interleaving is possible. Session state is
/// not persisted; navigating away means building a new session.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    problem_id: String,
    config: Config,
    clock: Clock,
    hint_gate: HintGate,
    standard_cases: Vec<StandardCase>,
    custom_cases: Vec<CustomCase>,
    generation: u64,
    in_flight: Option<u64>,
    closed: bool,
}

impl Session {
    /// Validates the configuration and starts the countdown. Invalid timing
    /// parameters are rejected here, never discovered mid-session.
    pub fn new(
        config: Config,
        problem_id: impl Into<String>,
        standard_cases: Vec<StandardCase>,
    ) -> Result<Self, CoreError> {
        config.validate()?;
        let clock = Clock::start(config.duration_seconds())?;
        let problem_id = problem_id.into();
        let id = Uuid::new_v4();

        SESSIONS_STARTED_TOTAL.inc();
        tracing::info!(
            "Session started: id={}, problem={}, duration={}s",
            id,
            problem_id,
            clock.total_seconds()
        );

        Ok(Self {
            id,
            problem_id,
            config,
            clock,
            hint_gate: HintGate::new(),
            standard_cases,
            custom_cases: Vec::new(),
            generation: 0,
            in_flight: None,
            closed: false,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn problem_id(&self) -> &str {
        &self.problem_id
    }

    pub fn is_playground(&self) -> bool {
        self.problem_id == PLAYGROUND_PROBLEM_ID
    }

    pub fn time_left_seconds(&self) -> u32 {
        self.clock.remaining_seconds()
    }

    pub fn total_seconds(&self) -> u32 {
        self.clock.total_seconds()
    }

    pub fn is_expired(&self) -> bool {
        self.clock.is_expired()
    }

    /// Remaining budget formatted `MM:SS` for the countdown display.
    pub fn formatted_time_left(&self) -> String {
        format_clock(self.clock.remaining_seconds())
    }

    pub fn hint_state(&self) -> HintState {
        self.hint_gate.state()
    }

    pub fn hints_unlocked(&self) -> bool {
        self.hint_gate.is_unlocked()
    }

    pub fn standard_cases(&self) -> &[StandardCase] {
        &self.standard_cases
    }

    pub fn custom_cases(&self) -> &[CustomCase] {
        &self.custom_cases
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// One 1 Hz tick from the timer driver. When the budget runs out the
    /// hints unlock automatically and the single `TimeExpired` event is
    /// returned; afterwards ticks yield nothing and the driver should stop.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.closed {
            return None;
        }
        if self.clock.advance() {
            self.hint_gate.on_clock_expired();
            return Some(TimerEvent::TimeExpired(TimeExpired {
                session_id: self.id,
                timestamp: Utc::now(),
                message: "Time's up! Hints have been unlocked.".to_string(),
            }));
        }
        if self.clock.is_expired() {
            return None;
        }
        Some(TimerEvent::TimerTick(TimerTick {
            session_id: self.id,
            remaining_seconds: self.clock.remaining_seconds(),
            elapsed_seconds: self.clock.elapsed_seconds(),
            total_seconds: self.clock.total_seconds(),
            timestamp: Utc::now(),
        }))
    }

    /// Explicit paid hint unlock. Always succeeds; a repeat request is a
    /// no-op. If paying the cost exhausts the budget the expired transition
    /// has already happened by the time this returns.
    pub fn unlock_hints(&mut self) -> UnlockOutcome {
        let cost = self.config.hint_cost_seconds();
        let outcome = self.hint_gate.unlock(&mut self.clock, cost);
        if let UnlockOutcome::Unlocked { clock_expired: true } = outcome {
            tracing::info!("Session {}: budget exhausted by hint unlock", self.id);
        }
        outcome
    }

    /// Adds an empty custom case at the end of the creation-order list and
    /// returns its id.
    pub fn add_custom_case(&mut self) -> Uuid {
        let case = CustomCase::new();
        let id = case.id;
        self.custom_cases.push(case);
        id
    }

    pub fn update_custom_case(
        &mut self,
        id: Uuid,
        input: impl Into<String>,
    ) -> Result<(), CoreError> {
        match self.custom_cases.iter_mut().find(|c| c.id == id) {
            Some(case) => {
                case.input = input.into();
                Ok(())
            }
            None => Err(CoreError::UnknownCustomCase(id)),
        }
    }

    pub fn remove_custom_case(&mut self, id: Uuid) -> Result<(), CoreError> {
        let before = self.custom_cases.len();
        self.custom_cases.retain(|c| c.id != id);
        if self.custom_cases.len() == before {
            return Err(CoreError::UnknownCustomCase(id));
        }
        Ok(())
    }

    /// Snapshots the current case lists into a wire request and marks the
    /// session as having a request outstanding. A second run/submit while
    /// one is in flight is rejected rather than queued, so every penalty is
    /// attributable to exactly one outcome.
    pub fn begin_execution(
        &mut self,
        code: impl Into<String>,
        mode: ExecutionMode,
    ) -> Result<(ExecutionToken, ExecutionRequest), CoreError> {
        if self.closed {
            return Err(CoreError::SessionClosed);
        }
        if self.in_flight.is_some() {
            return Err(CoreError::RequestInFlight);
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);

        let request = ExecutionRequest {
            code: code.into(),
            problem_id: self.problem_id.clone(),
            custom_cases: self
                .custom_cases
                .iter()
                .map(|c| RequestCase {
                    input: c.input.clone(),
                    expected_output: String::new(),
                })
                .collect(),
            mode,
        };

        Ok((
            ExecutionToken {
                generation: self.generation,
            },
            request,
        ))
    }

    /// Reconciles a graded response against the case lists the request was
    /// built from. Applies the wrong-submission penalty at most once, and
    /// only for a failed submit (runs are penalty-free). Returns `None` when
    /// the token is stale: the session was closed or reset while the request
    /// was outstanding, and a late response must not mutate a dead session.
    pub fn complete_execution(
        &mut self,
        token: ExecutionToken,
        mode: ExecutionMode,
        response: &ExecutionResponse,
    ) -> Option<Reconciliation> {
        if self.closed || self.in_flight != Some(token.generation) {
            tracing::warn!("Discarding stale execution response: session={}", self.id);
            return None;
        }
        self.in_flight = None;

        let reconciliation =
            reconciler::reconcile(mode, response, &self.standard_cases, &self.custom_cases);

        if reconciliation.outcome.is_wrong_submission() && self.submit_penalty_applies() {
            let cost = self.config.wrong_submission_penalty_seconds();
            let expired = PenaltyLedger::apply_wrong_submission_penalty(&mut self.clock, cost);
            tracing::info!(
                "Session {}: {} minutes penalty applied",
                self.id,
                self.config.wrong_submission_penalty_minutes
            );
            if expired {
                self.hint_gate.on_clock_expired();
            }
        }

        Some(reconciliation)
    }

    /// Releases the in-flight marker after a transport or service failure.
    /// No penalty, no state change beyond allowing the user to retry.
    pub fn abort_execution(&mut self, token: ExecutionToken) {
        if self.in_flight == Some(token.generation) {
            self.in_flight = None;
        }
    }

    fn submit_penalty_applies(&self) -> bool {
        !self.is_playground() || self.config.playground_penalty_enabled
    }

    /// Tears the session down. The tick driver stops on the next tick and
    /// any outstanding execution response will be discarded.
    pub fn close(&mut self) {
        self.closed = true;
        self.in_flight = None;
        tracing::info!("Session closed: id={}", self.id);
    }
}

/// Full round trip against an execution backend: issue the request, await
/// the service, reconcile the response. Transport and service failures
/// release the in-flight marker and bubble up as transient errors with the
/// session state untouched.
pub async fn execute(
    session: &mut Session,
    backend: &dyn ExecutionBackend,
    code: &str,
    mode: ExecutionMode,
) -> Result<Reconciliation, CoreError> {
    let (token, request) = session.begin_execution(code, mode)?;
    match backend.execute(&request).await {
        Ok(response) => session
            .complete_execution(token, mode, &response)
            .ok_or(CoreError::SessionClosed),
        Err(err) => {
            session.abort_execution(token);
            Err(err)
        }
    }
}
