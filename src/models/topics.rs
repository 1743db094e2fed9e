use serde::{Deserialize, Serialize};

use crate::models::{display_text, WithRaw};

/// Topic discovery upstream result.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TopicsResult {
    pub niche: String,
    pub topics: Vec<WithRaw<Topic>>,
    pub search_date: String,
    pub total_topics_analyzed: u64,
}

/// One trending topic. Field order is the key order of the copied JSON.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Topic {
    pub title: String,
    pub platform: String,
    pub url: Option<String>,
    pub creator: String,
    pub analytics: TopicAnalytics,
    pub why_it_works: String,
    pub key_angles: Vec<String>,
    #[serde(deserialize_with = "display_text")]
    pub estimated_views: String,
    pub competition_level: String,
}

/// Display-formatted engagement figures.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TopicAnalytics {
    #[serde(deserialize_with = "display_text")]
    pub views: String,
    #[serde(deserialize_with = "display_text")]
    pub likes: String,
    #[serde(deserialize_with = "display_text")]
    pub comments: String,
    #[serde(deserialize_with = "display_text")]
    pub shares: String,
    #[serde(deserialize_with = "display_text")]
    pub engagement_rate: String,
    pub published_date: String,
}

/// Colour family of a competition-level tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitionTone {
    Green,
    Yellow,
    Red,
    Neutral,
}

impl CompetitionTone {
    /// Case-insensitive mapping of the upstream's free-text level.
    pub fn classify(level: &str) -> Self {
        match level.trim().to_lowercase().as_str() {
            "low" => CompetitionTone::Green,
            "medium" => CompetitionTone::Yellow,
            "high" => CompetitionTone::Red,
            _ => CompetitionTone::Neutral,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            CompetitionTone::Green => "tag tag-green",
            CompetitionTone::Yellow => "tag tag-yellow",
            CompetitionTone::Red => "tag tag-red",
            CompetitionTone::Neutral => "tag tag-gray",
        }
    }
}

impl Topic {
    pub fn competition_tone(&self) -> CompetitionTone {
        CompetitionTone::classify(&self.competition_level)
    }
}
