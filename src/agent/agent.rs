use async_trait::async_trait;

use crate::{
    agent::{AgentOutput, AgentStep},
    tools::Tool,
};

use super::{AgentError, AgentExecutor};

/// Defines the interface for an agent capable of reasoning and tool usage within an [`AgentExecutor`].
///
/// Agents are not used on their own; an [`AgentExecutor`] drives the loop,
/// calling [`Agent::plan`] once per cycle and dispatching the tool calls it returns.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Converts prior reasoning steps into the text the model continues from.
    fn construct_scratchpad(&self, steps: &[AgentStep]) -> String;

    /// Determines the agent's next action for `question`, given the steps taken so far.
    ///
    /// Returns [`AgentError::InvalidFormat`] when the model answered but its
    /// answer could not be parsed; the executor may retry those.
    async fn plan(&self, question: &str, steps: &[AgentStep]) -> Result<AgentOutput, AgentError>;

    /// Resolves a tool by name, or [`None`] if the agent has no such tool.
    fn get_tool(&self, tool_name: &str) -> Option<&dyn Tool>;

    /// Renders the full prompt for `question`, used for logging and debugging.
    fn get_prompt(&self, question: &str, steps: &[AgentStep]) -> Result<String, AgentError>;

    /// Wraps the agent into an [`AgentExecutor`] with default options.
    fn executor(self) -> AgentExecutor
    where
        Self: Sized + 'static,
    {
        AgentExecutor::from_agent(self)
    }
}
