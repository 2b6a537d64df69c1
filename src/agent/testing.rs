//! Scripted stand-ins for the model and the search tool.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_openai::error::OpenAIError;
use async_trait::async_trait;

use crate::{
    llm::{options::CallOptions, LLMError, LLM},
    tools::{Tool, ToolError},
};

/// Replays canned completions in order; running out is an `LLMError`.
pub struct FakeLLM {
    responses: Mutex<VecDeque<Result<String, LLMError>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    options: Arc<Mutex<CallOptions>>,
}

impl FakeLLM {
    pub fn new<S: Into<String>>(responses: Vec<S>) -> Self {
        Self::with_results(responses.into_iter().map(|r| Ok(r.into())).collect())
    }

    pub fn with_results(responses: Vec<Result<String, LLMError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
            options: Arc::new(Mutex::new(CallOptions::default())),
        }
    }

    pub fn unreachable() -> LLMError {
        LLMError::OpenAIError(OpenAIError::InvalidArgument(
            "error sending request: connection refused".into(),
        ))
    }

    /// Every prompt the fake has been called with.
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts.clone()
    }

    pub fn options(&self) -> Arc<Mutex<CallOptions>> {
        self.options.clone()
    }
}

#[async_trait]
impl LLM for FakeLLM {
    async fn generate(&self, prompt: &str) -> Result<String, LLMError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LLMError::ContentNotFound("script exhausted".into())))
    }

    fn add_call_options(&mut self, call_options: CallOptions) {
        self.options.lock().unwrap().merge_options(call_options);
    }
}

/// A tool that always answers the same way and remembers its inputs.
pub struct FakeTool {
    name: String,
    answer: Result<String, u16>,
    inputs: Arc<Mutex<Vec<String>>>,
}

impl FakeTool {
    pub fn ok(name: &str, answer: &str) -> Self {
        Self {
            name: name.into(),
            answer: Ok(answer.into()),
            inputs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fails every call with an HTTP status error.
    pub fn failing(name: &str, status: u16) -> Self {
        Self {
            name: name.into(),
            answer: Err(status),
            inputs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn inputs(&self) -> Arc<Mutex<Vec<String>>> {
        self.inputs.clone()
    }
}

#[async_trait]
impl Tool for FakeTool {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn description(&self) -> String {
        "A fake tool".into()
    }

    async fn call(&self, input: &str) -> Result<String, ToolError> {
        self.inputs.lock().unwrap().push(input.to_string());
        match &self.answer {
            Ok(answer) => Ok(answer.clone()),
            Err(status) => Err(ToolError::HttpStatus {
                status: *status,
                body: "upstream failure".into(),
            }),
        }
    }
}
