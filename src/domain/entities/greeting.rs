use serde::{Deserialize, Serialize};

pub const FALLBACK_GREETING: &str = "Welcome back! Ready to tackle your assignments?";
pub const FALLBACK_TASK_SUGGESTION: &str = "Add a task to start working on your next assignment.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Greeting {
    pub greeting: String,
    pub task_suggestion: String,
}

impl Greeting {
    pub fn fallback() -> Self {
        Self {
            greeting: FALLBACK_GREETING.to_string(),
            task_suggestion: FALLBACK_TASK_SUGGESTION.to_string(),
        }
    }
}
