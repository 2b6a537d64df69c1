use async_trait::async_trait;

use crate::llm::{options::CallOptions, LLMError};

/// A text-in, text-out language model.
#[async_trait]
pub trait LLM: Sync + Send {
    async fn generate(&self, prompt: &str) -> Result<String, LLMError>;

    /// This is useful when a caller needs to override the model's call
    /// options, e.g. to add stop sequences.
    fn add_call_options(&mut self, call_options: CallOptions);
}

impl<L> From<L> for Box<dyn LLM>
where
    L: 'static + LLM,
{
    fn from(llm: L) -> Self {
        Box::new(llm)
    }
}
