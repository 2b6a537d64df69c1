use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::{
    agent::{Agent, AgentError, AgentExecutor, AgentResult, ExecutorOptions, ReActAgent},
    config::Config,
    llm::OpenAICompatible,
    tools::GoogleSerper,
};

/// Builds a fresh executor for every question; nothing is shared between runs.
pub trait AgentFactory: Send + Sync {
    fn build(&self) -> Result<AgentExecutor, AgentError>;
}

impl<F> AgentFactory for F
where
    F: Fn() -> Result<AgentExecutor, AgentError> + Send + Sync,
{
    fn build(&self) -> Result<AgentExecutor, AgentError> {
        self()
    }
}

/// Wires the Groq-hosted model and the Serper search tool from [`Config`].
pub struct ConfiguredAgentFactory {
    config: Arc<Config>,
}

impl ConfiguredAgentFactory {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl AgentFactory for ConfiguredAgentFactory {
    fn build(&self) -> Result<AgentExecutor, AgentError> {
        let config = &self.config;

        let llm = OpenAICompatible::builder()
            .with_api_base(&config.model_api_base)
            .with_api_key(SecretString::from(
                config.model_credential.expose_secret().to_string(),
            ))
            .with_model(&config.model_id)
            .build();

        let search = GoogleSerper::new(SecretString::from(
            config.search_credential.expose_secret().to_string(),
        ))
        .with_base_url(&config.search_api_base);

        let executor = ReActAgent::builder()
            .tool(search)
            .build(llm)?
            .executor()
            .with_options(ExecutorOptions::default().with_max_iterations(config.max_iterations));

        Ok(executor)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub factory: Arc<dyn AgentFactory>,
}

impl AppState {
    pub fn new(config: Arc<Config>, factory: Arc<dyn AgentFactory>) -> Self {
        Self { config, factory }
    }

    pub fn from_config(config: Config) -> Self {
        let config = Arc::new(config);
        let factory = Arc::new(ConfiguredAgentFactory::new(config.clone()));
        Self::new(config, factory)
    }

    /// Builds an executor and answers `question` with it.
    pub async fn run(&self, question: &str) -> Result<AgentResult, AgentError> {
        let executor = self.factory.build()?;
        let outcome = executor.invoke(question).await;
        self.trace_run(question, &outcome);
        outcome
    }

    fn trace_run(&self, question: &str, outcome: &Result<AgentResult, AgentError>) {
        if !self.config.tracing_enabled {
            return;
        }

        let project = self.config.tracing_project_id.as_deref().unwrap_or("default");
        match outcome {
            Ok(result) => log::info!(
                target: "agent_trace::run",
                "project={project} question={question:?} steps={} status=success",
                result.steps.len()
            ),
            Err(e) => log::info!(
                target: "agent_trace::run",
                "project={project} question={question:?} status=error error={e}"
            ),
        }
    }
}
