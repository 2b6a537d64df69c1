use std::fmt::Write;

use html_escape::encode_text;

use super::{Block, RenderedOutput};

impl Block {
    /// Writes the block as an HTML fragment; all text is escaped.
    pub fn write_html(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = match self {
            Block::Step {
                number,
                thought,
                tool_name,
                tool_input,
                observation,
            } => write!(
                out,
                concat!(
                    "<section class=\"step\">\n",
                    "<h3>🔁 Step {}</h3>\n",
                    "<p class=\"label\"><strong>🧠 Thought:</strong></p>\n",
                    "<pre class=\"thought\"><code>{}</code></pre>\n",
                    "<p class=\"label\"><strong>🔧 Action:</strong> <code class=\"tool-name\">{}</code></p>\n",
                    "<p class=\"label\"><strong>📥 Action Input:</strong> <code class=\"tool-input\">{}</code></p>\n",
                    "<p class=\"label\"><strong>👀 Observation:</strong></p>\n",
                    "<pre class=\"observation\"><code>{}</code></pre>\n",
                    "</section>\n",
                ),
                number,
                encode_text(thought),
                encode_text(tool_name),
                encode_text(tool_input),
                encode_text(observation),
            ),
            Block::FinalAnswer(answer) => writeln!(
                out,
                "<div class=\"final-answer\">✅ <strong>Final Answer:</strong> {}</div>",
                encode_text(answer)
            ),
            Block::Error(message) => writeln!(
                out,
                "<div class=\"error\">Error: {}</div>",
                encode_text(message)
            ),
        };
    }
}

impl RenderedOutput {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            block.write_html(&mut out);
        }
        out
    }
}
