//! Research page: one topic in, six insight lists out.

use askama::Template;
use axum::{extract::State, response::Response, Form};
use serde::Deserialize;
use serde_json::json;

use crate::gateway::{fetch, Capability, Gateway};
use crate::http::server::AppState;
use crate::models::ResearchResult;
use crate::pages::copy::ListSection;
use crate::pages::nav::NavBar;
use crate::pages::render;

pub const PATH: &str = "/research";

/// Form state of the research page.
#[derive(Debug, Default)]
pub struct ResearchPage {
    pub topic: String,
    pub loading: bool,
    pub result: Option<ResearchResult>,
    pub error: Option<String>,
}

impl ResearchPage {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    /// Run one research call. A blank topic leaves the page untouched.
    pub async fn submit<G: Gateway>(&mut self, gateway: &G) {
        if self.topic.trim().is_empty() {
            return;
        }

        self.loading = true;
        self.error = None;
        self.result = None;

        let capability = Capability::Research;
        match fetch::<ResearchResult, _>(gateway, capability, json!({ "topic": self.topic })).await {
            Ok(result) => self.result = Some(result),
            Err(failure) => {
                tracing::warn!(
                    capability = %capability,
                    error_kind = failure.kind(),
                    error = %failure,
                    "Research request failed"
                );
                self.error = Some(failure.user_message(capability).to_string());
            }
        }

        self.loading = false;
    }
}

/// Render-ready sections of a research result.
#[derive(Debug, Clone)]
pub struct ResearchView {
    pub topic: String,
    pub sections: Vec<ListSection>,
}

impl From<&ResearchResult> for ResearchView {
    fn from(result: &ResearchResult) -> Self {
        let insights = &result.insights;
        Self {
            topic: result.topic.clone(),
            sections: vec![
                ListSection::lines("Key Points", "•", &insights.key_points),
                ListSection::lines("Statistics", "📊", &insights.statistics),
                ListSection::lines("Quotes", "", &insights.quotes)
                    .with_layout("quotes")
                    .paragraphs(),
                ListSection::lines("Content Hooks", "🎣", &insights.hooks),
                ListSection::lines("Audience Pain Points", "⚠️", &insights.audience_pain_points),
                ListSection::lines("Sources", "", &result.sources).with_layout("chips"),
            ],
        }
    }
}

#[derive(Template)]
#[template(path = "research.html")]
struct ResearchTemplate {
    nav: NavBar,
    topic: String,
    error: Option<String>,
    view: Option<ResearchView>,
}

impl From<&ResearchPage> for ResearchTemplate {
    fn from(page: &ResearchPage) -> Self {
        Self {
            nav: NavBar::for_path(PATH),
            topic: page.topic.clone(),
            error: page.error.clone(),
            view: page.result.as_ref().map(ResearchView::from),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ResearchForm {
    #[serde(default)]
    pub topic: String,
}

/// GET /research
pub async fn show() -> Response {
    render(&ResearchTemplate::from(&ResearchPage::default()))
}

/// POST /research
pub async fn submit(State(state): State<AppState>, Form(form): Form<ResearchForm>) -> Response {
    let mut page = ResearchPage::new(form.topic);
    page.submit(&state.gateway).await;
    render(&ResearchTemplate::from(&page))
}
