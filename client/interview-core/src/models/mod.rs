use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod execution;
pub mod timer;

/// A test case supplied with the problem definition. Immutable; its position
/// in the sample list defines its ordinal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardCase {
    pub input: String,
    pub expected_output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// A test case authored by the user for ad-hoc experimentation. Starts with
/// empty input; editable and deletable. Ordered by creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomCase {
    pub id: Uuid,
    pub input: String,
}

impl CustomCase {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            input: String::new(),
        }
    }
}

impl Default for CustomCase {
    fn default() -> Self {
        Self::new()
    }
}
