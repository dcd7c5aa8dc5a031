use super::case_index::{ordinal_of, CaseKind};
use crate::metrics::record_execution;
use crate::models::execution::{ExecutionMode, ExecutionResponse, ExecutionResult};
use crate::models::{CustomCase, StandardCase};

/// One display row: a source case joined with the result the service
/// returned for its ordinal, if any.
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub kind: CaseKind,
    pub ordinal: u32,
    pub input: String,
    /// Standard cases carry an expectation; custom cases do not.
    pub expected_output: Option<String>,
    pub result: Option<ExecutionResult>,
}

/// User-facing outcome of a reconciled execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted { total_cases: u32 },
    WrongAnswer { total_passed: u32, total_cases: u32 },
    RunPassed { total_passed: u32, total_cases: u32 },
    RunFailed { total_passed: u32, total_cases: u32 },
}

impl Outcome {
    /// Only a failed submit carries the wrong-submission penalty. Runs are
    /// penalty-free whatever their result.
    pub fn is_wrong_submission(&self) -> bool {
        matches!(self, Outcome::WrongAnswer { .. })
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::Accepted { total_cases } => {
                format!("ACCEPTED! Passed all {} test cases.", total_cases)
            }
            Outcome::WrongAnswer {
                total_passed,
                total_cases,
            } => format!(
                "Wrong Answer. Passed {}/{} test cases.",
                total_passed, total_cases
            ),
            Outcome::RunPassed {
                total_passed,
                total_cases,
            } => format!("Run Passed: {}/{} cases.", total_passed, total_cases),
            Outcome::RunFailed {
                total_passed,
                total_cases,
            } => format!("Run Failed: {}/{} cases.", total_passed, total_cases),
        }
    }

    fn verdict_label(&self) -> &'static str {
        match self {
            Outcome::Accepted { .. } => "accepted",
            Outcome::WrongAnswer { .. } => "wrong_answer",
            Outcome::RunPassed { .. } => "passed",
            Outcome::RunFailed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub reports: Vec<CaseReport>,
    pub outcome: Outcome,
}

/// Binds each returned result to the case it belongs to and classifies the
/// outcome.
///
/// The service does not guarantee that `results` come back in ordinal order,
/// so every lookup goes through `case_number`, never through list position.
/// A case with no matching result simply has nothing to display.
pub fn reconcile(
    mode: ExecutionMode,
    response: &ExecutionResponse,
    standard_cases: &[StandardCase],
    custom_cases: &[CustomCase],
) -> Reconciliation {
    if response.total_passed > response.total_cases {
        tracing::warn!(
            "Execution response reports {} passed out of {} cases",
            response.total_passed,
            response.total_cases
        );
    }

    let find_result = |ordinal: u32| -> Option<ExecutionResult> {
        response
            .results
            .iter()
            .find(|r| r.case_number == ordinal)
            .cloned()
    };

    let standard_count = standard_cases.len();
    let mut reports = Vec::with_capacity(standard_count + custom_cases.len());

    for (position, case) in standard_cases.iter().enumerate() {
        let ordinal = ordinal_of(CaseKind::Standard, position, standard_count);
        reports.push(CaseReport {
            kind: CaseKind::Standard,
            ordinal,
            input: case.input.clone(),
            expected_output: Some(case.expected_output.clone()),
            result: find_result(ordinal),
        });
    }

    for (position, case) in custom_cases.iter().enumerate() {
        let ordinal = ordinal_of(CaseKind::Custom, position, standard_count);
        reports.push(CaseReport {
            kind: CaseKind::Custom,
            ordinal,
            input: case.input.clone(),
            expected_output: None,
            result: find_result(ordinal),
        });
    }

    let outcome = match (mode, response.success) {
        (ExecutionMode::Submit, true) => Outcome::Accepted {
            total_cases: response.total_cases,
        },
        (ExecutionMode::Submit, false) => Outcome::WrongAnswer {
            total_passed: response.total_passed,
            total_cases: response.total_cases,
        },
        (ExecutionMode::Run, true) => Outcome::RunPassed {
            total_passed: response.total_passed,
            total_cases: response.total_cases,
        },
        (ExecutionMode::Run, false) => Outcome::RunFailed {
            total_passed: response.total_passed,
            total_cases: response.total_cases,
        },
    };

    record_execution(mode.as_str(), outcome.verdict_label());
    tracing::info!("Execution reconciled: {}", outcome.message());

    Reconciliation { reports, outcome }
}
