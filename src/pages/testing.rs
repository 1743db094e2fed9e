//! Scripted gateway for page tests.

use std::sync::Mutex;

use serde_json::Value;

use crate::gateway::{Capability, Gateway, ProxyError};

/// Replies with a fixed payload (or fails) and records every call.
pub struct ScriptedGateway {
    reply: Option<Value>,
    calls: Mutex<Vec<(Capability, Value)>>,
}

impl ScriptedGateway {
    pub fn replying(reply: Value) -> Self {
        Self {
            reply: Some(reply),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails as if the upstream returned non-JSON.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.calls.lock().unwrap().last().map(|(_, body)| body.clone())
    }

    pub fn last_capability(&self) -> Option<Capability> {
        self.calls.lock().unwrap().last().map(|(capability, _)| *capability)
    }
}

impl Gateway for ScriptedGateway {
    async fn forward(&self, capability: Capability, body: Value) -> Result<Value, ProxyError> {
        self.calls.lock().unwrap().push((capability, body));
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(ProxyError::MalformedResponse {
                status: 502,
                source: serde_json::from_str::<Value>("<html>").unwrap_err(),
            }),
        }
    }
}
