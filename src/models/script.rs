use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::WithRaw;

/// Script generation upstream result.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ScriptResult {
    pub topic: String,
    pub platform: String,
    pub duration: String,
    pub target_audience: String,
    pub content_goal: String,
    pub script: ScriptBody,
    pub platform_guidelines: WithRaw<PlatformGuidelines>,
    pub visual_suggestions: Vec<String>,
    pub thumbnail_ideas: Vec<String>,
    pub formatting_notes: Vec<String>,
}

/// The script itself, section by section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ScriptBody {
    pub hook: String,
    pub introduction: String,
    pub main_content: Vec<String>,
    pub key_insights: Vec<String>,
    pub emotional_elements: Vec<String>,
    pub transitions: Vec<String>,
    pub cta: String,
    pub closing: String,
}

/// Typed view of the guidelines; the page copies the raw upstream object.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PlatformGuidelines {
    pub optimal_length: String,
    pub tone: String,
    pub pacing: String,
    pub visual_style: String,
    pub key_optimization_tips: Vec<String>,
}

/// Target platform for a generated script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Youtube,
    Tiktok,
    Instagram,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Youtube,
        Platform::Tiktok,
        Platform::Instagram,
        Platform::Twitter,
    ];

    /// Wire value sent upstream.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown platform '{}'", s))
    }
}
