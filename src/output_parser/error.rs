use thiserror::Error;

/// Reasons a model completion could not be read as a ReAct step.
#[derive(Debug, Error)]
pub enum OutputParseError {
    #[error("Parsing LLM output produced both a final answer and a parse-able action: {0}")]
    ActionAndFinalAnswer(String),

    #[error("Invalid Format: Missing 'Action:' after 'Thought:'")]
    MissingAction,

    #[error("Invalid Format: Missing 'Action Input:' after 'Action:'")]
    MissingActionInput,

    #[error("Could not parse LLM output: `{0}`")]
    Other(String),
}
