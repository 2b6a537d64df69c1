use async_openai::error::OpenAIError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("OpenAI error: {0}")]
    OpenAIError(#[from] OpenAIError),

    #[error("Model refused to answer: {0}")]
    Refused(String),

    #[error("Content not found in response: {0}")]
    ContentNotFound(String),
}

impl LLMError {
    pub fn user_message(&self) -> String {
        match self {
            LLMError::OpenAIError(_) => "The language model request failed".into(),
            LLMError::Refused(_) => "The language model refused to answer".into(),
            LLMError::ContentNotFound(_) => "The language model returned an empty response".into(),
        }
    }
}
