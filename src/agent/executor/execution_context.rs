use tokio::time::Instant;

use crate::{
    agent::{AgentAction, AgentError, AgentExecutor, AgentOutput, AgentResult, AgentStep},
    output_parser::OutputParseError,
};

pub const FORCED_STOP_ANSWER: &str = "Agent stopped due to iteration limit or time limit.";

/// Tool name of the transcript entries that record an unparseable completion.
pub const EXCEPTION_TOOL: &str = "_Exception";

/// Where a run currently is in its think/act/observe cycle.
#[derive(Debug)]
pub enum ExecutionState {
    /// Asking the model for the next thought.
    Thinking,
    /// Dispatching the action the model chose.
    Acting(AgentAction),
    /// Recording what the tool returned.
    Observing(AgentStep),
    Done(String),
    Failed(AgentError),
}

/// Runtime context that owns all mutable state during an [`AgentExecutor`] run.
///
/// * `steps` - executed tool calls so far; this is what the run returns
/// * `transcript` - what the model is shown: `steps` plus every unparseable
///   completion, each followed by the parse error as its observation
/// * `iterations` - number of times the model has been asked to plan
/// * `consecutive_fails` - unparseable completions in a row
pub struct ExecutionContext<'exec, 'input> {
    executor: &'exec AgentExecutor,
    question: &'input str,
    steps: Vec<AgentStep>,
    transcript: Vec<AgentStep>,
    iterations: usize,
    consecutive_fails: usize,
    started_at: Instant,
}

impl<'exec, 'input> ExecutionContext<'exec, 'input> {
    pub fn new(executor: &'exec AgentExecutor, question: &'input str) -> Self {
        Self {
            executor,
            question,
            steps: Vec::new(),
            transcript: Vec::new(),
            iterations: 0,
            consecutive_fails: 0,
            started_at: Instant::now(),
        }
    }

    /// Entry point: steps the state machine until it reaches `Done` or `Failed`.
    pub async fn start(mut self) -> Result<AgentResult, AgentError> {
        self.log_initial_prompt();
        self.started_at = Instant::now();

        let mut state = ExecutionState::Thinking;
        loop {
            state = match state {
                ExecutionState::Thinking => self.think().await,
                ExecutionState::Acting(action) => self.act(action).await,
                ExecutionState::Observing(step) => self.observe(step),
                ExecutionState::Done(final_answer) => {
                    log::debug!("\nAgent finished with result:\n{final_answer}");
                    return Ok(AgentResult::new(final_answer, self.steps));
                }
                ExecutionState::Failed(error) => {
                    log::warn!("Agent failed after {} steps: {error}", self.steps.len());
                    return Err(error);
                }
            };
        }
    }

    fn log_initial_prompt(&self) {
        if log::log_enabled!(log::Level::Debug) {
            match self.executor.agent.get_prompt(self.question, &[]) {
                Ok(prompt) => log::debug!("\nPROMPT:\n{prompt}"),
                Err(e) => log::debug!("Could not render prompt: {e}"),
            }
        }
    }

    async fn think(&mut self) -> ExecutionState {
        if self.budget_exhausted() {
            log::warn!("Forcing final answer due to iteration or time limit");
            return ExecutionState::Done(FORCED_STOP_ANSWER.into());
        }

        self.iterations += 1;
        match self.executor.agent.plan(self.question, &self.transcript).await {
            Ok(AgentOutput::Action(action)) => ExecutionState::Acting(action),
            Ok(AgentOutput::Finish { final_answer, .. }) => ExecutionState::Done(final_answer),
            Err(AgentError::InvalidFormat { completion, source }) => {
                self.bump_failure(completion, source)
            }
            Err(e) => ExecutionState::Failed(e),
        }
    }

    async fn act(&mut self, action: AgentAction) -> ExecutionState {
        log::debug!("\nTool call:\n{} <- {}", action.tool, action.tool_input);

        let Some(tool) = self.executor.agent.get_tool(&action.tool) else {
            return ExecutionState::Failed(AgentError::ToolNotFound(action.tool));
        };

        let observation = match tool.call(&action.tool_input).await {
            Ok(observation) => observation,
            Err(e) if self.executor.options.break_if_tool_error => {
                return ExecutionState::Failed(e.into());
            }
            Err(e) => {
                log::warn!("Tool '{}' error: {e}", action.tool);
                e.to_string()
            }
        };

        ExecutionState::Observing(AgentStep::new(
            action.log,
            action.tool,
            action.tool_input,
            observation,
        ))
    }

    fn observe(&mut self, step: AgentStep) -> ExecutionState {
        log::debug!("\nTool {} result:\n{}", step.tool_name, step.observation);
        self.transcript.push(step.clone());
        self.steps.push(step);
        self.consecutive_fails = 0;
        ExecutionState::Thinking
    }

    fn budget_exhausted(&self) -> bool {
        let options = &self.executor.options;
        let iterations_spent = options
            .max_iterations
            .is_some_and(|max_iterations| self.iterations >= max_iterations);
        let time_spent = options
            .max_execution_time
            .is_some_and(|max_time| self.started_at.elapsed() >= max_time);

        iterations_spent || time_spent
    }

    /// Counts an unparseable completion and, while the budget allows, shows it
    /// to the model with the parse error as its observation.
    fn bump_failure(&mut self, completion: String, error: OutputParseError) -> ExecutionState {
        self.consecutive_fails += 1;
        log::warn!(
            "Failed to parse LLM output: {error} ({} consecutive fails)",
            self.consecutive_fails
        );

        self.transcript.push(AgentStep::new(
            completion,
            EXCEPTION_TOOL,
            "",
            error.to_string(),
        ));

        let limit_reached = self
            .executor
            .options
            .max_consecutive_fails
            .is_some_and(|max_consecutive_fails| self.consecutive_fails >= max_consecutive_fails);

        if limit_reached {
            ExecutionState::Failed(AgentError::TooManyConsecutiveFails {
                count: self.consecutive_fails,
                last: error,
            })
        } else {
            ExecutionState::Thinking
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::{
        agent::{
            testing::{FakeLLM, FakeTool},
            Agent, AgentError, ExecutorOptions, ReActAgent,
        },
        tools::ToolError,
    };

    use super::*;

    fn executor(llm: FakeLLM, tool: FakeTool) -> AgentExecutor {
        ReActAgent::builder()
            .tool(tool)
            .build(llm)
            .unwrap()
            .executor()
    }

    const SEARCH_WEATHER: &str =
        " I should search\nAction: Intermediate Answer\nAction Input: weather in X";

    #[tokio::test]
    async fn test_answer_without_tools() {
        let llm = FakeLLM::new(vec![" I now know the final answer\nFinal Answer: Paris"]);

        let result = executor(llm, FakeTool::ok("Intermediate Answer", "unused"))
            .invoke("What is the capital of France?")
            .await
            .unwrap();

        assert_eq!(result.final_answer, "Paris");
        assert!(result.steps.is_empty());
    }

    #[tokio::test]
    async fn test_single_step_run() {
        let llm = FakeLLM::new(vec![
            SEARCH_WEATHER,
            " I now know the final answer\nFinal Answer: It is sunny, 20C in X",
        ]);
        let prompts = llm.prompts();
        let tool = FakeTool::ok("Intermediate Answer", "Sunny, 20C");
        let inputs = tool.inputs();

        let result = executor(llm, tool).invoke("weather in X").await.unwrap();

        assert_eq!(result.final_answer, "It is sunny, 20C in X");
        assert_eq!(
            result.steps,
            vec![AgentStep::new(
                SEARCH_WEATHER,
                "Intermediate Answer",
                "weather in X",
                "Sunny, 20C"
            )]
        );
        assert_eq!(*inputs.lock().unwrap(), vec!["weather in X".to_string()]);

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[1].ends_with(&format!(
            "Thought:{SEARCH_WEATHER}\nObservation: Sunny, 20C\nThought: "
        )));
    }

    #[tokio::test]
    async fn test_steps_keep_their_order() {
        let llm = FakeLLM::new(vec![
            " A\nAction: Intermediate Answer\nAction Input: a",
            " B\nAction: Intermediate Answer\nAction Input: b",
            " C\nAction: Intermediate Answer\nAction Input: c",
            "Final Answer: done",
        ]);

        let result = executor(llm, FakeTool::ok("Intermediate Answer", "ok"))
            .invoke("q")
            .await
            .unwrap();

        let inputs = result
            .steps
            .iter()
            .map(|step| step.tool_input.as_str())
            .collect::<Vec<_>>();
        assert_eq!(inputs, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_tool_error_breaks_the_run() {
        let llm = FakeLLM::new(vec![SEARCH_WEATHER]);

        let err = executor(llm, FakeTool::failing("Intermediate Answer", 503))
            .invoke("weather in X")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AgentError::ToolError(ToolError::HttpStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_tool_error_can_become_observation() {
        let llm = FakeLLM::new(vec![SEARCH_WEATHER, "Final Answer: unknown"]);

        let result = executor(llm, FakeTool::failing("Intermediate Answer", 503))
            .with_options(ExecutorOptions::default().with_break_if_tool_error(false))
            .invoke("weather in X")
            .await
            .unwrap();

        assert_eq!(result.steps.len(), 1);
        assert!(result.steps[0].observation.contains("HTTP 503"));
        assert_eq!(result.final_answer, "unknown");
    }

    #[tokio::test]
    async fn test_unknown_tool_fails() {
        let llm = FakeLLM::new(vec![" Let me compute\nAction: Calculator\nAction Input: 2+2"]);

        let err = executor(llm, FakeTool::ok("Intermediate Answer", "unused"))
            .invoke("2+2?")
            .await
            .unwrap_err();

        assert!(matches!(err, AgentError::ToolNotFound(ref name) if name == "Calculator"));
    }

    #[tokio::test]
    async fn test_unreachable_model_fails_immediately() {
        let llm = FakeLLM::with_results(vec![Err(FakeLLM::unreachable())]);
        let prompts = llm.prompts();

        let err = executor(llm, FakeTool::ok("Intermediate Answer", "unused"))
            .invoke("q")
            .await
            .unwrap_err();

        assert!(matches!(err, AgentError::LLMError(_)));
        assert_eq!(prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_output_is_retried() {
        let llm = FakeLLM::new(vec!["hmm", "Final Answer: Paris"]);
        let prompts = llm.prompts();

        let result = executor(llm, FakeTool::ok("Intermediate Answer", "unused"))
            .invoke("q")
            .await
            .unwrap();

        assert_eq!(result.final_answer, "Paris");
        assert!(result.steps.is_empty());

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 2);
        assert_ne!(prompts[0], prompts[1]);
        assert!(prompts[1].ends_with(
            "Thought:hmm\nObservation: Invalid Format: Missing 'Action:' after 'Thought:'\nThought: "
        ));
    }

    #[tokio::test]
    async fn test_every_retry_sees_the_previous_failures() {
        let llm = FakeLLM::new(vec!["hmm", "still thinking", "no clue"]);
        let prompts = llm.prompts();

        let _ = executor(llm, FakeTool::ok("Intermediate Answer", "unused"))
            .invoke("q")
            .await
            .unwrap_err();

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 3);
        assert!(!prompts[1].contains("still thinking"));
        assert!(prompts[2].contains("hmm\nObservation: Invalid Format"));
        assert!(prompts[2].contains("still thinking\nObservation: Invalid Format"));
    }

    #[tokio::test]
    async fn test_failed_attempt_is_not_a_step() {
        let llm = FakeLLM::new(vec!["hmm", SEARCH_WEATHER, "Final Answer: sunny"]);
        let prompts = llm.prompts();

        let result = executor(llm, FakeTool::ok("Intermediate Answer", "Sunny, 20C"))
            .invoke("weather in X")
            .await
            .unwrap();

        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].tool_name, "Intermediate Answer");
        assert!(prompts.lock().unwrap()[2].contains(&format!(
            "Thought:hmm\nObservation: Invalid Format: Missing 'Action:' after 'Thought:'\nThought: {SEARCH_WEATHER}\nObservation: Sunny, 20C"
        )));
    }

    #[tokio::test]
    async fn test_too_many_malformed_outputs() {
        let llm = FakeLLM::new(vec!["hmm", "still thinking", "no clue"]);

        let err = executor(llm, FakeTool::ok("Intermediate Answer", "unused"))
            .invoke("q")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AgentError::TooManyConsecutiveFails {
                count: 3,
                last: OutputParseError::MissingAction
            }
        ));
    }

    #[tokio::test]
    async fn test_iteration_limit_forces_stop() {
        let llm = FakeLLM::new(vec![SEARCH_WEATHER, SEARCH_WEATHER, SEARCH_WEATHER]);
        let prompts = llm.prompts();

        let result = executor(llm, FakeTool::ok("Intermediate Answer", "cloudy"))
            .with_options(ExecutorOptions::default().with_max_iterations(2))
            .invoke("weather in X")
            .await
            .unwrap();

        assert_eq!(result.final_answer, FORCED_STOP_ANSWER);
        assert_eq!(result.steps.len(), 2);
        assert_eq!(prompts.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_time_limit_forces_stop() {
        let llm = FakeLLM::new(vec![SEARCH_WEATHER]);

        let result = executor(llm, FakeTool::ok("Intermediate Answer", "cloudy"))
            .with_options(ExecutorOptions::default().with_max_execution_time(Duration::ZERO))
            .invoke("weather in X")
            .await
            .unwrap();

        assert_eq!(result.final_answer, FORCED_STOP_ANSWER);
        assert!(result.steps.is_empty());
    }

    #[tokio::test]
    async fn test_runs_do_not_share_steps() {
        let llm = FakeLLM::new(vec![SEARCH_WEATHER, "Final Answer: a", "Final Answer: b"]);
        let executor = executor(llm, FakeTool::ok("Intermediate Answer", "cloudy"));

        let first = executor.invoke("first").await.unwrap();
        let second = executor.invoke("second").await.unwrap();

        assert_eq!(first.steps.len(), 1);
        assert!(second.steps.is_empty());
        assert_eq!(second.final_answer, "b");
    }
}
