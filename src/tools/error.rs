use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Search API unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("Search API rate limit exceeded")]
    RateLimited,

    #[error("Search API returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed search response: {0}")]
    MalformedResponse(String),

    #[error("Invalid tool input: {0}")]
    InvalidInput(String),
}

impl ToolError {
    /// A message fit for the end user; upstream response bodies stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            ToolError::Unreachable(_) => "Search provider is unreachable".into(),
            ToolError::RateLimited => "Search provider rate limit exceeded".into(),
            ToolError::HttpStatus { status, .. } => {
                format!("Search provider returned HTTP {status}")
            }
            ToolError::MalformedResponse(_) => {
                "Search provider returned a malformed response".into()
            }
            ToolError::InvalidInput(reason) => format!("Invalid search query: {reason}"),
        }
    }
}
