use std::fmt::{self, Display};

/// One visually distinct unit of a rendered trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A single think/act/observe cycle, numbered from 1.
    Step {
        number: usize,
        thought: String,
        tool_name: String,
        tool_input: String,
        observation: String,
    },
    /// The terminal, successful answer.
    FinalAnswer(String),
    /// The only block shown when the run failed.
    Error(String),
}

impl Block {
    pub fn is_step(&self) -> bool {
        matches!(self, Block::Step { .. })
    }

    pub fn is_final_answer(&self) -> bool {
        matches!(self, Block::FinalAnswer(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Block::Error(_))
    }
}

/// Markdown, laid out the way the trace reads in a chat or a log.
impl Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Step {
                number,
                thought,
                tool_name,
                tool_input,
                observation,
            } => {
                writeln!(f, "### 🔁 Step {number}")?;
                writeln!(f, "**🧠 Thought:**\n```\n{thought}\n```")?;
                writeln!(f, "**🔧 Action:** `{tool_name}`")?;
                writeln!(f, "**📥 Action Input:** `{tool_input}`")?;
                write!(f, "**👀 Observation:**\n```\n{observation}\n```")
            }
            Block::FinalAnswer(answer) => write!(f, "✅ **Final Answer:** {answer}"),
            Block::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

/// The ordered blocks produced for one question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedOutput {
    pub(crate) blocks: Vec<Block>,
}

impl RenderedOutput {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn is_error(&self) -> bool {
        self.blocks.iter().any(Block::is_error)
    }
}

impl Display for RenderedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f, "\n")?;
            }
            write!(f, "{block}")?;
        }
        Ok(())
    }
}
