use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::tools::{Tool, ToolError};

pub const NO_RESULT: &str = "No good Google Search Result was found";

#[derive(Debug, Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    gl: &'a str,
    hl: &'a str,
    num: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SerperResponse {
    answer_box: Option<AnswerBox>,
    knowledge_graph: Option<KnowledgeGraph>,
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerBox {
    answer: Option<String>,
    snippet: Option<String>,
    snippet_highlighted: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct KnowledgeGraph {
    title: Option<String>,
    #[serde(rename = "type")]
    entity_type: Option<String>,
    description: Option<String>,
    #[serde(default)]
    attributes: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    snippet: Option<String>,
    #[serde(default)]
    attributes: Map<String, Value>,
}

impl SerperResponse {
    /// Collapses the response into the short text the agent reads as its observation.
    ///
    /// A direct answer box wins outright; otherwise knowledge-graph facts and
    /// organic snippets are concatenated.
    fn summarize(self, max_results: usize) -> String {
        if let Some(answer_box) = self.answer_box {
            if let Some(answer) = answer_box.answer.filter(|s| !s.is_empty()) {
                return answer;
            }
            if let Some(snippet) = answer_box.snippet.filter(|s| !s.is_empty()) {
                return snippet.replace('\n', " ");
            }
            if let Some(highlighted) = answer_box.snippet_highlighted.filter(|s| !s.is_empty()) {
                return highlighted.join(" ");
            }
        }

        let mut snippets = Vec::new();

        if let Some(kg) = self.knowledge_graph {
            let title = kg.title.unwrap_or_default();
            if let Some(entity_type) = kg.entity_type.filter(|s| !s.is_empty()) {
                snippets.push(format!("{title}: {entity_type}."));
            }
            if let Some(description) = kg.description.filter(|s| !s.is_empty()) {
                snippets.push(description);
            }
            for (attribute, value) in &kg.attributes {
                snippets.push(format!("{title} {attribute}: {}.", value_text(value)));
            }
        }

        for result in self.organic.into_iter().take(max_results) {
            if let Some(snippet) = result.snippet {
                snippets.push(snippet);
            }
            for (attribute, value) in &result.attributes {
                snippets.push(format!("{attribute}: {}.", value_text(value)));
            }
        }

        if snippets.is_empty() {
            return NO_RESULT.into();
        }
        snippets.join(" ")
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Web search through the Serper Google Search API.
pub struct GoogleSerper {
    client: Client,
    base_url: String,
    api_key: SecretString,
    name: String,
    description: String,
    gl: String,
    hl: String,
    max_results: usize,
}

impl GoogleSerper {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            client: Client::new(),
            base_url: crate::config::DEFAULT_SEARCH_API_BASE.into(),
            api_key,
            name: "Intermediate Answer".into(),
            description: "Useful for answering with search.".into(),
            gl: "us".into(),
            hl: "en".into(),
            max_results: 10,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// One request, no retries, no caching.
    pub async fn search(&self, query: &str) -> Result<String, ToolError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ToolError::InvalidInput("empty search query".into()));
        }

        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let body = SerperRequest {
            q: query,
            gl: &self.gl,
            hl: &self.hl,
            num: self.max_results,
        };

        log::debug!("Searching for '{query}'");
        let response = self
            .client
            .post(url)
            .header("X-API-KEY", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ToolError::RateLimited);
        }
        if !status.is_success() {
            return Err(ToolError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: SerperResponse = serde_json::from_str(&text)
            .map_err(|e| ToolError::MalformedResponse(e.to_string()))?;

        Ok(parsed.summarize(self.max_results).trim().to_string())
    }
}

#[async_trait]
impl Tool for GoogleSerper {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    async fn call(&self, input: &str) -> Result<String, ToolError> {
        self.search(input).await
    }
}
