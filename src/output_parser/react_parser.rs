use std::sync::LazyLock;

use regex::Regex;

use crate::agent::{AgentAction, AgentOutput};

use super::OutputParseError;

pub const FINAL_ANSWER_ACTION: &str = "Final Answer:";

static ACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Action\s*\d*\s*:[\s]*(.*?)[\s]*Action\s*\d*\s*Input\s*\d*\s*:[\s]*(.*)")
        .expect("Static regex is valid")
});
static ACTION_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)Action\s*\d*\s*:[\s]*(.*?)").expect("Static regex is valid"));
static ACTION_INPUT_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)[\s]*Action\s*\d*\s*Input\s*\d*\s*:[\s]*(.*)").expect("Static regex is valid")
});

/// Reads a completion written in the Thought / Action / Action Input format.
///
/// The whole completion is kept as the step's `log`, which is what the
/// trace later shows as the thought.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReActOutputParser;

impl ReActOutputParser {
    pub fn parse(&self, text: &str) -> Result<AgentOutput, OutputParseError> {
        let includes_answer = text.contains(FINAL_ANSWER_ACTION);

        if let Some(caps) = ACTION_RE.captures(text) {
            if includes_answer {
                return Err(OutputParseError::ActionAndFinalAnswer(text.into()));
            }

            let tool = caps[1].trim().to_string();
            let tool_input = strip_quotes(caps[2].trim()).to_string();

            return Ok(AgentOutput::Action(AgentAction {
                tool,
                tool_input,
                log: text.into(),
            }));
        }

        if includes_answer {
            let final_answer = text
                .rsplit(FINAL_ANSWER_ACTION)
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            return Ok(AgentOutput::Finish {
                final_answer,
                log: text.into(),
            });
        }

        if !ACTION_ONLY_RE.is_match(text) {
            Err(OutputParseError::MissingAction)
        } else if !ACTION_INPUT_ONLY_RE.is_match(text) {
            Err(OutputParseError::MissingActionInput)
        } else {
            Err(OutputParseError::Other(text.into()))
        }
    }
}

fn strip_quotes(input: &str) -> &str {
    input
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(input)
        .trim()
}
