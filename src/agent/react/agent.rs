use async_trait::async_trait;

use crate::{
    agent::{Agent, AgentError, AgentOutput, AgentStep},
    llm::LLM,
    output_parser::ReActOutputParser,
    template::PromptTemplate,
    text_replacements,
    tools::Tool,
};

use super::{ReActAgentBuilder, LLM_PREFIX, OBSERVATION_PREFIX};

/// Single-input ReAct agent: the model writes `Thought`/`Action`/`Action Input`
/// lines as plain text and the executor feeds observations back.
pub struct ReActAgent {
    pub(crate) llm: Box<dyn LLM>,
    pub(crate) tools: Vec<Box<dyn Tool>>,
    pub(crate) prompt: PromptTemplate,
    pub(crate) output_parser: ReActOutputParser,
}

impl ReActAgent {
    pub fn builder() -> ReActAgentBuilder {
        ReActAgentBuilder::new()
    }

    fn tool_descriptions(&self) -> String {
        self.tools
            .iter()
            .map(|tool| tool.to_plain_description())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn tool_names(&self) -> String {
        self.tools
            .iter()
            .map(|tool| tool.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[async_trait]
impl Agent for ReActAgent {
    fn construct_scratchpad(&self, steps: &[AgentStep]) -> String {
        steps
            .iter()
            .map(|step| {
                format!(
                    "{}\n{OBSERVATION_PREFIX}{}\n{LLM_PREFIX}",
                    step.thought, step.observation
                )
            })
            .collect()
    }

    async fn plan(&self, question: &str, steps: &[AgentStep]) -> Result<AgentOutput, AgentError> {
        let prompt = self.get_prompt(question, steps)?;
        let completion = self.llm.generate(&prompt).await?;
        log::debug!("\nLLM completion:\n{completion}");

        self.output_parser
            .parse(&completion)
            .map_err(|source| AgentError::InvalidFormat { completion, source })
    }

    fn get_tool(&self, tool_name: &str) -> Option<&dyn Tool> {
        let tool_name = tool_name.trim();
        self.tools
            .iter()
            .find(|tool| tool.name() == tool_name)
            .or_else(|| {
                self.tools
                    .iter()
                    .find(|tool| tool.name().eq_ignore_ascii_case(tool_name))
            })
            .map(|tool| tool.as_ref())
    }

    fn get_prompt(&self, question: &str, steps: &[AgentStep]) -> Result<String, AgentError> {
        let input = text_replacements! {
            "tools" => self.tool_descriptions(),
            "tool_names" => self.tool_names(),
            "input" => question,
            "agent_scratchpad" => self.construct_scratchpad(steps),
        };

        Ok(self.prompt.format(&input)?)
    }
}
