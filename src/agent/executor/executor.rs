use crate::agent::{Agent, AgentError, AgentResult};

use super::{ExecutionContext, ExecutorOptions};

/// Drives an [`Agent`] through its think/act/observe loop.
///
/// An executor holds no per-run state; every [`AgentExecutor::invoke`] starts
/// from an empty transcript.
pub struct AgentExecutor {
    pub(super) agent: Box<dyn Agent>,
    pub(super) options: ExecutorOptions,
}

impl AgentExecutor {
    pub fn from_agent<A>(agent: A) -> Self
    where
        A: Agent + 'static,
    {
        Self {
            agent: Box::new(agent),
            options: ExecutorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExecutorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn execution<'exec, 'input>(
        &'exec self,
        question: &'input str,
    ) -> ExecutionContext<'exec, 'input> {
        ExecutionContext::new(self, question)
    }

    /// Answers `question`, returning the final answer and every step taken.
    pub async fn invoke(&self, question: &str) -> Result<AgentResult, AgentError> {
        self.execution(question).start().await
    }
}
