/// One think/act/observe cycle of an agent run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentStep {
    /// The model's reasoning for this step, as it wrote it.
    pub thought: String,
    /// Name of the tool that was called.
    pub tool_name: String,
    /// Literal input handed to the tool.
    pub tool_input: String,
    /// What the tool returned.
    pub observation: String,
}

impl AgentStep {
    pub fn new(
        thought: impl Into<String>,
        tool_name: impl Into<String>,
        tool_input: impl Into<String>,
        observation: impl Into<String>,
    ) -> Self {
        Self {
            thought: thought.into(),
            tool_name: tool_name.into(),
            tool_input: tool_input.into(),
            observation: observation.into(),
        }
    }
}
