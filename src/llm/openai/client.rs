use async_openai::{config::OpenAIConfig, types::CreateChatCompletionResponse, Client};
use async_trait::async_trait;

use crate::llm::{options::CallOptions, LLMError, LLM};

use super::{request::OpenAIRequest, OpenAICompatibleBuilder};

/// Chat model behind any OpenAI-compatible endpoint (Groq, OpenAI, a local server, ...).
#[derive(Clone)]
pub struct OpenAICompatible {
    client: Client<OpenAIConfig>,
    model: String,
    options: CallOptions,
}

impl OpenAICompatible {
    pub fn new(client: Client<OpenAIConfig>, model: impl Into<String>, options: CallOptions) -> Self {
        Self {
            client,
            model: model.into(),
            options,
        }
    }

    pub fn builder() -> OpenAICompatibleBuilder {
        OpenAICompatibleBuilder::default()
    }
}

#[async_trait]
impl LLM for OpenAICompatible {
    async fn generate(&self, prompt: &str) -> Result<String, LLMError> {
        let request = OpenAIRequest::build_request(&self.model, prompt, &self.options)?;

        log::debug!("Sending prompt to model '{}'", self.model);
        let response = self
            .client
            .chat()
            .create_byot::<_, CreateChatCompletionResponse>(request)
            .await?;

        let message = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LLMError::ContentNotFound("No choices".into()))?
            .message;

        if let Some(content) = message.content {
            return Ok(content);
        }
        if let Some(refusal) = message.refusal {
            return Err(LLMError::Refused(refusal));
        }
        Err(LLMError::ContentNotFound("/choices/0/message/content".into()))
    }

    fn add_call_options(&mut self, call_options: CallOptions) {
        self.options.merge_options(call_options);
    }
}
