use std::fmt::Display;

use crate::agent::AgentResult;

use super::{Block, RenderedOutput};

/// Turns the outcome of one agent run into display blocks.
///
/// Rendering is pure: the same input always yields the same blocks, and the
/// input is only borrowed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceRenderer;

impl TraceRenderer {
    /// Renders either the full trace or a single error block, never both.
    pub fn render<E: Display>(&self, outcome: &Result<AgentResult, E>) -> RenderedOutput {
        match outcome {
            Ok(result) => self.render_result(result),
            Err(error) => self.render_error(error),
        }
    }

    /// One block per step, in order, then the final answer.
    pub fn render_result(&self, result: &AgentResult) -> RenderedOutput {
        let mut blocks = result
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| Block::Step {
                number: i + 1,
                thought: step.thought.trim().to_string(),
                tool_name: step.tool_name.clone(),
                tool_input: step.tool_input.clone(),
                observation: step.observation.trim().to_string(),
            })
            .collect::<Vec<_>>();

        blocks.push(Block::FinalAnswer(result.final_answer.clone()));

        RenderedOutput { blocks }
    }

    pub fn render_error(&self, error: &dyn Display) -> RenderedOutput {
        RenderedOutput {
            blocks: vec![Block::Error(error.to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        agent::{AgentError, AgentStep},
        tools::ToolError,
    };

    fn step(name: &str) -> AgentStep {
        AgentStep::new(
            format!("thinking about {name}"),
            "Intermediate Answer",
            name,
            format!("found {name}"),
        )
    }

    #[test]
    fn test_n_steps_then_final_answer() {
        let result = AgentResult::new("done", vec![step("a"), step("b"), step("c"), step("d")]);

        let output = TraceRenderer.render_result(&result);

        assert_eq!(output.len(), 5);
        assert!(output.blocks()[..4].iter().all(Block::is_step));
        assert!(output.blocks()[4].is_final_answer());
        assert!(!output.is_error());
    }

    #[test]
    fn test_zero_steps_renders_only_the_answer() {
        let result = AgentResult::new("Paris", vec![]);

        let output = TraceRenderer.render(&Ok::<_, AgentError>(result));

        assert_eq!(output.into_blocks(), vec![Block::FinalAnswer("Paris".into())]);
    }

    #[test]
    fn test_order_is_preserved() {
        let result = AgentResult::new("done", vec![step("A"), step("B"), step("C")]);

        let output = TraceRenderer.render_result(&result);

        let labels = output
            .blocks()
            .iter()
            .map(|block| match block {
                Block::Step {
                    number, tool_input, ..
                } => format!("Step {number}={tool_input}"),
                Block::FinalAnswer(_) => "Final Answer".to_string(),
                Block::Error(_) => "Error".to_string(),
            })
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["Step 1=A", "Step 2=B", "Step 3=C", "Final Answer"]
        );
    }

    #[test]
    fn test_trimming_is_idempotent() {
        let padded = AgentResult::new(
            "done",
            vec![AgentStep::new(
                "  \n I should search \n",
                "Intermediate Answer",
                " weather in X ",
                "\n Sunny, 20C  ",
            )],
        );
        let trimmed = AgentResult::new(
            "done",
            vec![AgentStep::new(
                "I should search",
                "Intermediate Answer",
                " weather in X ",
                "Sunny, 20C",
            )],
        );

        assert_eq!(
            TraceRenderer.render_result(&padded),
            TraceRenderer.render_result(&trimmed)
        );
        let rendered = TraceRenderer.render_result(&padded);
        let Block::Step { tool_input, .. } = &rendered.blocks()[0] else {
            panic!("expected a step block");
        };
        assert_eq!(tool_input, " weather in X ");
    }

    #[test]
    fn test_empty_thought_and_observation_are_kept() {
        let result = AgentResult::new(
            "done",
            vec![AgentStep::new("", "Intermediate Answer", "q", "   ")],
        );

        let output = TraceRenderer.render_result(&result);

        assert_eq!(
            output.blocks()[0],
            Block::Step {
                number: 1,
                thought: String::new(),
                tool_name: "Intermediate Answer".into(),
                tool_input: "q".into(),
                observation: String::new(),
            }
        );
        assert!(output.to_string().contains("**🧠 Thought:**\n```\n\n```"));
    }

    #[test]
    fn test_error_renders_a_single_block() {
        let outcome: Result<AgentResult, AgentError> =
            Err(AgentError::ToolError(ToolError::RateLimited));

        let output = TraceRenderer.render(&outcome);

        assert_eq!(output.len(), 1);
        assert!(output.is_error());
        assert_eq!(
            output.blocks()[0],
            Block::Error("Tool error: Search API rate limit exceeded".into())
        );
    }

    #[test]
    fn test_weather_scenario() {
        let result = AgentResult::new(
            "It is sunny, 20C in X",
            vec![AgentStep::new(
                "I should search",
                "Intermediate Answer",
                "weather in X",
                "Sunny, 20C",
            )],
        );

        let output = TraceRenderer.render_result(&result);

        assert_eq!(output.len(), 2);
        assert!(output.blocks()[0].is_step());
        assert_eq!(
            output.blocks()[1],
            Block::FinalAnswer("It is sunny, 20C in X".into())
        );
    }

    #[test]
    fn test_rendering_is_pure() {
        let result = AgentResult::new("done", vec![step("a")]);
        let before = result.clone();

        let first = TraceRenderer.render_result(&result);
        let second = TraceRenderer.render_result(&result);

        assert_eq!(first, second);
        assert_eq!(result, before);
    }

    #[test]
    fn test_markdown_layout() {
        let result = AgentResult::new(
            "It is sunny",
            vec![AgentStep::new(
                "I should search",
                "Intermediate Answer",
                "weather in X",
                "Sunny",
            )],
        );

        let markdown = TraceRenderer.render_result(&result).to_string();

        assert_eq!(
            markdown,
            "### 🔁 Step 1\n\
             **🧠 Thought:**\n```\nI should search\n```\n\
             **🔧 Action:** `Intermediate Answer`\n\
             **📥 Action Input:** `weather in X`\n\
             **👀 Observation:**\n```\nSunny\n```\n\n\
             ✅ **Final Answer:** It is sunny"
        );
    }
}
