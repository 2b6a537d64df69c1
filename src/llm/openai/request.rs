use async_openai::types::{ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs};
use serde::Serialize;

use crate::llm::{options::CallOptions, LLMError};

/// Request payload sent to an OpenAI-compatible API.
#[derive(Serialize, Debug)]
pub struct OpenAIRequest {
    pub messages: Vec<ChatCompletionRequestMessage>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl OpenAIRequest {
    /// Builds a single-turn request carrying `prompt` as the user message.
    pub fn build_request(
        model: &str,
        prompt: &str,
        options: &CallOptions,
    ) -> Result<OpenAIRequest, LLMError> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        Ok(OpenAIRequest {
            messages: vec![message.into()],
            model: model.into(),
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            stop: options.stop_words.clone(),
        })
    }
}
