//! Trending topics page: one niche in, a card per topic out.

use askama::Template;
use axum::{extract::State, response::Response, Form};
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::gateway::{fetch, Capability, Gateway};
use crate::http::server::AppState;
use crate::models::{Topic, TopicsResult, WithRaw};
use crate::pages::copy::pretty_json;
use crate::pages::nav::NavBar;
use crate::pages::render;

pub const PATH: &str = "/topics";

/// Form state of the topics page.
#[derive(Debug, Default)]
pub struct TopicsPage {
    pub niche: String,
    pub loading: bool,
    pub result: Option<TopicsResult>,
    pub error: Option<String>,
}

impl TopicsPage {
    pub fn new(niche: impl Into<String>) -> Self {
        Self {
            niche: niche.into(),
            ..Self::default()
        }
    }

    /// Run one topics call through the gateway. A blank niche is ignored.
    pub async fn submit<G: Gateway>(&mut self, gateway: &G) {
        if self.niche.trim().is_empty() {
            return;
        }

        self.loading = true;
        self.error = None;
        self.result = None;

        let capability = Capability::Topics;
        match fetch::<TopicsResult, _>(gateway, capability, json!({ "niche": self.niche })).await {
            Ok(result) => self.result = Some(result),
            Err(failure) => {
                tracing::warn!(
                    capability = %capability,
                    error_kind = failure.kind(),
                    error = %failure,
                    "Topics request failed"
                );
                self.error = Some(failure.user_message(capability).to_string());
            }
        }

        self.loading = false;
    }
}

#[derive(Debug, Clone)]
pub struct TopicCard {
    pub topic: Topic,
    /// Title link; absent unless the upstream URL is absolute http(s).
    pub href: Option<String>,
    pub tag_class: &'static str,
    /// The topic object exactly as the upstream sent it, indented.
    pub copy_text: String,
}

impl From<&WithRaw<Topic>> for TopicCard {
    fn from(topic: &WithRaw<Topic>) -> Self {
        Self {
            tag_class: topic.competition_tone().css_class(),
            href: safe_href(topic.url.as_deref()),
            copy_text: pretty_json(&topic.raw),
            topic: topic.value.clone(),
        }
    }
}

/// Accepts only absolute `http`/`https` URLs.
pub fn safe_href(raw: Option<&str>) -> Option<String> {
    let url = Url::parse(raw?.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.into())
}

#[derive(Debug, Clone)]
pub struct TopicsView {
    pub niche: String,
    pub search_date: String,
    pub total_topics_analyzed: u64,
    pub cards: Vec<TopicCard>,
}

impl From<&TopicsResult> for TopicsView {
    fn from(result: &TopicsResult) -> Self {
        Self {
            niche: result.niche.clone(),
            search_date: result.search_date.clone(),
            total_topics_analyzed: result.total_topics_analyzed,
            cards: result.topics.iter().map(TopicCard::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "topics.html")]
struct TopicsTemplate {
    nav: NavBar,
    niche: String,
    error: Option<String>,
    view: Option<TopicsView>,
}

impl From<&TopicsPage> for TopicsTemplate {
    fn from(page: &TopicsPage) -> Self {
        Self {
            nav: NavBar::for_path(PATH),
            niche: page.niche.clone(),
            error: page.error.clone(),
            view: page.result.as_ref().map(TopicsView::from),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TopicsForm {
    #[serde(default)]
    pub niche: String,
}

/// GET /topics
pub async fn show() -> Response {
    render(&TopicsTemplate::from(&TopicsPage::default()))
}

/// POST /topics
pub async fn submit(State(state): State<AppState>, Form(form): Form<TopicsForm>) -> Response {
    let mut page = TopicsPage::new(form.niche);
    page.submit(&state.gateway).await;
    render(&TopicsTemplate::from(&page))
}
