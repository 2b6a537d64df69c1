/// A tool invocation the model asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentAction {
    pub tool: String,
    pub tool_input: String,
    /// The full completion the action was parsed from.
    pub log: String,
}

/// What the model decided to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentOutput {
    Action(AgentAction),
    Finish { final_answer: String, log: String },
}
