//! Testing helpers.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::Value;

use crate::transport::Transport;

#[derive(Debug, Clone)]
enum Canned {
    Text(String),
    Json(Value),
}

/// Serves canned responses keyed by URL and records every request made.
#[derive(Debug, Default)]
pub struct CannedTransport {
    responses: HashMap<String, Canned>,
    requests: Mutex<Vec<String>>,
}
impl CannedTransport {
    pub fn with_text(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Canned::Text(text.into()));
        self
    }

    pub fn with_json(mut self, url: impl Into<String>, json: Value) -> Self {
        self.responses.insert(url.into(), Canned::Json(json));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, url: &str) -> anyhow::Result<Canned> {
        self.requests.lock().unwrap().push(url.into());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("no canned response for {url}"))
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn get_text(&self, url: &str) -> anyhow::Result<String> {
        match self.respond(url)? {
            Canned::Text(text) => Ok(text),
            Canned::Json(json) => Ok(json.to_string()),
        }
    }

    async fn get_json(&self, url: &str) -> anyhow::Result<Value> {
        match self.respond(url)? {
            Canned::Json(json) => Ok(json),
            Canned::Text(text) => Ok(serde_json::from_str(&text)?),
        }
    }

    async fn post_json(&self, url: &str, _body: &Value) -> anyhow::Result<Value> {
        self.get_json(url).await
    }
}
