use super::AgentStep;

/// The outcome of a completed agent run: the answer plus every step taken, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentResult {
    pub final_answer: String,
    pub steps: Vec<AgentStep>,
}

impl AgentResult {
    pub fn new(final_answer: impl Into<String>, steps: Vec<AgentStep>) -> Self {
        Self {
            final_answer: final_answer.into(),
            steps,
        }
    }
}
