use serde::{Deserialize, Serialize};

/// Research upstream result.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ResearchResult {
    pub topic: String,
    pub insights: ResearchInsights,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ResearchInsights {
    pub key_points: Vec<String>,
    pub statistics: Vec<String>,
    pub quotes: Vec<String>,
    pub hooks: Vec<String>,
    pub audience_pain_points: Vec<String>,
}
