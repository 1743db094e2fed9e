//! Upstream payload types.
//!
//! These mirror the `data` object each upstream returns. They are request
//! scoped: decoded, rendered, dropped.

pub mod research;
pub mod script;
pub mod topics;

pub use research::{ResearchInsights, ResearchResult};
pub use script::{Platform, PlatformGuidelines, ScriptBody, ScriptResult};
pub use topics::{CompetitionTone, Topic, TopicAnalytics, TopicsResult};

use std::ops::Deref;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A typed view of an upstream object that keeps the object as received.
///
/// Copy payloads are built from `raw`, so numbers stay numbers and keys the
/// typed view does not know about survive. Serializes as `raw`.
#[derive(Debug, Clone, PartialEq)]
pub struct WithRaw<T> {
    pub value: T,
    pub raw: Value,
}

impl<T> Deref for WithRaw<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for WithRaw<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let value = T::deserialize(&raw).map_err(de::Error::custom)?;
        Ok(Self { value, raw })
    }
}

impl<T> Serialize for WithRaw<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// Accepts a display value sent either as a JSON string or as a bare number.
pub(crate) fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}
