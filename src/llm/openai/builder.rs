use async_openai::{config::OpenAIConfig, Client as OpenAIClient};
use secrecy::{ExposeSecret, SecretString};

use crate::llm::options::CallOptions;

use super::OpenAICompatible;

pub struct OpenAICompatibleBuilder {
    pub api_base: Option<String>,
    pub api_key: Option<SecretString>,
    pub model: String,
}

impl Default for OpenAICompatibleBuilder {
    fn default() -> Self {
        OpenAICompatibleBuilder {
            api_base: None,
            api_key: None,
            model: crate::config::DEFAULT_MODEL_ID.to_string(),
        }
    }
}

impl OpenAICompatibleBuilder {
    pub fn with_api_base<S: Into<String>>(mut self, api_base: S) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    pub fn build(self) -> OpenAICompatible {
        let mut api_config = OpenAIConfig::new();
        if let Some(api_base) = self.api_base {
            api_config = api_config.with_api_base(api_base);
        }
        if let Some(api_key) = &self.api_key {
            api_config = api_config.with_api_key(api_key.expose_secret());
        }

        OpenAICompatible::new(
            OpenAIClient::with_config(api_config),
            self.model,
            CallOptions::default(),
        )
    }
}
