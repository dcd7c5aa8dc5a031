use serde::{Deserialize, Serialize};

/// Reserved problem id meaning "no stored hidden cases; grade only against
/// supplied custom cases".
pub const PLAYGROUND_PROBLEM_ID: &str = "playground";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Run,
    Submit,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Run => "run",
            ExecutionMode::Submit => "submit",
        }
    }
}

/// A case as sent to the execution service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestCase {
    pub input: String,
    /// Always empty on request; custom cases carry no expectation.
    pub expected_output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub code: String,
    pub problem_id: String,
    pub custom_cases: Vec<RequestCase>,
    pub mode: ExecutionMode,
}

impl ExecutionRequest {
    pub fn is_playground(&self) -> bool {
        self.problem_id == PLAYGROUND_PROBLEM_ID
    }
}

/// Per-case verdict from the execution service. `case_number` is the 1-based
/// ordinal the case had in the request; results must be matched by this
/// value, never by their position in the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub case_number: u32,
    pub input: String,
    pub expected_output: String,
    pub actual_output: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResponse {
    /// True iff every case in `results` passed.
    pub success: bool,
    pub results: Vec<ExecutionResult>,
    pub total_passed: u32,
    pub total_cases: u32,
}
