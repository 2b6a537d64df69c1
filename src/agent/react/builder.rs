use crate::{
    agent::AgentError,
    llm::{options::CallOptions, LLM},
    output_parser::ReActOutputParser,
    template::{PromptTemplate, TemplateError},
    tools::Tool,
};

use super::{ReActAgent, DEFAULT_REACT_PROMPT, REQUIRED_VARIABLES, STOP_SEQUENCE};

pub struct ReActAgentBuilder {
    tools: Vec<Box<dyn Tool>>,
    prompt: Option<String>,
}

impl ReActAgentBuilder {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            prompt: None,
        }
    }

    pub fn tools(mut self, tools: Vec<Box<dyn Tool>>) -> Self {
        self.tools = tools;
        self
    }

    pub fn tool(mut self, tool: impl Into<Box<dyn Tool>>) -> Self {
        self.tools.push(tool.into());
        self
    }

    pub fn prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Attaches the stop sequence to `llm` and checks the template carries
    /// every variable the ReAct loop fills in.
    pub fn build<L: LLM + 'static>(self, mut llm: L) -> Result<ReActAgent, AgentError> {
        let prompt = PromptTemplate::from_fstring(
            self.prompt
                .unwrap_or_else(|| DEFAULT_REACT_PROMPT.to_string()),
        );

        let present = prompt.variables().collect::<Vec<_>>();
        let missing = REQUIRED_VARIABLES
            .iter()
            .filter(|variable| !present.contains(*variable))
            .copied()
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(TemplateError::MissingVariable(missing.join(", ")).into());
        }

        llm.add_call_options(
            CallOptions::new().with_stop_words(vec![STOP_SEQUENCE.to_string()]),
        );

        Ok(ReActAgent {
            llm: Box::new(llm),
            tools: self.tools,
            prompt,
            output_parser: ReActOutputParser,
        })
    }
}

impl Default for ReActAgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
