use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::render::TraceRenderer;

use super::{render_page, AppState};

#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub question: String,
}

pub async fn index() -> Html<String> {
    Html(render_page("", None))
}

/// Runs the agent on the submitted question and answers with the rendered trace.
///
/// Every failure below this point is turned into a single error block carrying
/// [`AgentError::user_message`](crate::agent::AgentError::user_message).
pub async fn ask(State(state): State<AppState>, Form(form): Form<AskForm>) -> Html<String> {
    let question = form.question.trim();
    if question.is_empty() {
        return Html(render_page("", None));
    }

    log::info!("Answering question: {question:?}");
    let outcome = state.run(question).await.map_err(|e| {
        log::error!("Agent run failed: {e:?}");
        e.user_message()
    });

    let rendered = TraceRenderer.render(&outcome);
    log::debug!("\n{rendered}");

    Html(render_page(question, Some(&rendered)))
}

pub async fn health() -> &'static str {
    "ok"
}
