use thiserror::Error;

use crate::{
    llm::LLMError, output_parser::OutputParseError, template::TemplateError, tools::ToolError,
};

/// Errors that end an agent run without a final answer.
#[derive(Error, Debug)]
pub enum AgentError {
    /// An error that occurred during interaction with the LLM.
    #[error("LLM error: {0}")]
    LLMError(#[from] LLMError),

    /// An error that occurred while formatting the prompt.
    #[error("Prompt error: {0}")]
    PromptError(#[from] TemplateError),

    /// An error that occurred during tool invocation.
    #[error("Tool error: {0}")]
    ToolError(#[from] ToolError),

    /// The LLM response could not be parsed as a ReAct step.
    #[error("Invalid response from LLM: {source}")]
    InvalidFormat {
        completion: String,
        source: OutputParseError,
    },

    /// The model asked for a tool that is not attached to the agent.
    #[error("Tool not found: '{0}'")]
    ToolNotFound(String),

    /// The model kept producing output that could not be parsed.
    #[error("Too many consecutive fails: {count} (last: {last})")]
    TooManyConsecutiveFails {
        count: usize,
        last: OutputParseError,
    },
}

impl AgentError {
    /// The one-line message shown in place of a trace. The full error is only logged.
    pub fn user_message(&self) -> String {
        match self {
            AgentError::LLMError(e) => e.user_message(),
            AgentError::PromptError(_) => "The agent prompt could not be built".into(),
            AgentError::ToolError(e) => e.user_message(),
            AgentError::InvalidFormat { .. } => {
                "The language model answered in an unexpected format".into()
            }
            AgentError::ToolNotFound(name) => format!("The agent asked for an unknown tool '{name}'"),
            AgentError::TooManyConsecutiveFails { count, .. } => format!(
                "The language model answered in an unexpected format {count} times in a row"
            ),
        }
    }
}
