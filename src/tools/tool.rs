use async_trait::async_trait;

use super::ToolError;

/// A named capability the agent may call mid-reasoning.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the name of the tool, as the model must write it after `Action:`.
    fn name(&self) -> String;

    /// Provides a description of what the tool does and when to use it.
    fn description(&self) -> String;

    /// Runs the tool on the literal `Action Input` text.
    async fn call(&self, input: &str) -> Result<String, ToolError>;

    /// One line of the `{tools}` section of the prompt.
    fn to_plain_description(&self) -> String {
        format!("{}: {}", self.name(), self.description())
    }
}

impl<T> From<T> for Box<dyn Tool>
where
    T: Tool + 'static,
{
    fn from(tool: T) -> Self {
        Box::new(tool)
    }
}
