//! Script generator page: niche, topic and platform in, a full script out.

use askama::Template;
use axum::{extract::State, response::Response, Form};
use serde::Deserialize;
use serde_json::json;

use crate::gateway::{fetch, Capability, Gateway};
use crate::http::server::AppState;
use crate::models::{Platform, ScriptBody, ScriptResult};
use crate::pages::copy::{enumerate_lines, pretty_json, ListSection};
use crate::pages::nav::NavBar;
use crate::pages::render;

pub const PATH: &str = "/script-generator";

/// Form state of the script generator page.
#[derive(Debug, Default)]
pub struct ScriptPage {
    pub niche: String,
    pub topic: String,
    pub platform: Platform,
    pub loading: bool,
    pub result: Option<ScriptResult>,
    pub error: Option<String>,
}

impl ScriptPage {
    pub fn new(niche: impl Into<String>, topic: impl Into<String>, platform: Platform) -> Self {
        Self {
            niche: niche.into(),
            topic: topic.into(),
            platform,
            ..Self::default()
        }
    }

    /// Run one script generation call. Both niche and topic are required.
    pub async fn submit<G: Gateway>(&mut self, gateway: &G) {
        if self.niche.trim().is_empty() || self.topic.trim().is_empty() {
            return;
        }

        self.loading = true;
        self.error = None;
        self.result = None;

        let capability = Capability::Script;
        let body = json!({
            "niche": self.niche,
            "topic": self.topic,
            "platform": self.platform,
        });
        match fetch::<ScriptResult, _>(gateway, capability, body).await {
            Ok(result) => self.result = Some(result),
            Err(failure) => {
                tracing::warn!(
                    capability = %capability,
                    error_kind = failure.kind(),
                    error = %failure,
                    "Script request failed"
                );
                self.error = Some(failure.user_message(capability).to_string());
            }
        }

        self.loading = false;
    }
}

/// The copyable plain-text rendition of a script.
pub fn format_full_script(script: &ScriptBody) -> String {
    let sections = [
        ("HOOK", script.hook.clone()),
        ("INTRODUCTION", script.introduction.clone()),
        ("MAIN CONTENT", enumerate_lines(&script.main_content)),
        ("KEY INSIGHTS", enumerate_lines(&script.key_insights)),
        ("EMOTIONAL ELEMENTS", enumerate_lines(&script.emotional_elements)),
        ("TRANSITIONS", enumerate_lines(&script.transitions)),
        ("CALL TO ACTION", script.cta.clone()),
        ("CLOSING", script.closing.clone()),
    ];

    sections
        .iter()
        .map(|(label, content)| format!("{label}:\n{content}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render-ready script result.
#[derive(Debug, Clone)]
pub struct ScriptView {
    pub result: ScriptResult,
    pub full_script: String,
    pub guidelines_json: String,
    pub lists: Vec<ListSection>,
}

impl From<&ScriptResult> for ScriptView {
    fn from(result: &ScriptResult) -> Self {
        Self {
            full_script: format_full_script(&result.script),
            guidelines_json: pretty_json(&result.platform_guidelines.raw),
            lists: vec![
                ListSection::lines("Visual Suggestions", "🎨", &result.visual_suggestions),
                ListSection::lines("Thumbnail Ideas", "", &result.thumbnail_ideas)
                    .with_layout("cards"),
                ListSection::lines("Formatting Notes", "📝", &result.formatting_notes),
            ],
            result: result.clone(),
        }
    }
}

struct PlatformOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "script.html")]
struct ScriptTemplate {
    nav: NavBar,
    niche: String,
    topic: String,
    platforms: Vec<PlatformOption>,
    error: Option<String>,
    view: Option<ScriptView>,
}

impl From<&ScriptPage> for ScriptTemplate {
    fn from(page: &ScriptPage) -> Self {
        Self {
            nav: NavBar::for_path(PATH),
            niche: page.niche.clone(),
            topic: page.topic.clone(),
            platforms: Platform::ALL
                .into_iter()
                .map(|p| PlatformOption {
                    value: p.as_str(),
                    label: p.label(),
                    selected: p == page.platform,
                })
                .collect(),
            error: page.error.clone(),
            view: page.result.as_ref().map(ScriptView::from),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScriptForm {
    #[serde(default)]
    pub niche: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub platform: Platform,
}

/// GET /script-generator
pub async fn show() -> Response {
    render(&ScriptTemplate::from(&ScriptPage::default()))
}

/// POST /script-generator
pub async fn submit(State(state): State<AppState>, Form(form): Form<ScriptForm>) -> Response {
    let mut page = ScriptPage::new(form.niche, form.topic, form.platform);
    page.submit(&state.gateway).await;
    render(&ScriptTemplate::from(&page))
}
