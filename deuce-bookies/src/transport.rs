//! HTTP access to the bookmakers. Requests are issued one at a time; there are
//! no retries and no timeouts beyond the client's defaults.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use deuce::timed::Timed;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_text(&self, url: &str) -> anyhow::Result<String>;

    async fn get_json(&self, url: &str) -> anyhow::Result<Value>;

    async fn post_json(&self, url: &str, body: &Value) -> anyhow::Result<Value>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}
impl HttpTransport {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_text(&self, url: &str) -> anyhow::Result<String> {
        info!("retrieving '{url}'...");
        let timed = Timed::future(async {
            let response = self.client.get(url).send().await?.error_for_status()?;
            response.text().await
        })
        .await
        .with_context(|| format!("GET {url} failed"))?;
        info!("request completed in {:.3} seconds", timed.elapsed.as_secs_f64());
        Ok(timed.value)
    }

    async fn get_json(&self, url: &str) -> anyhow::Result<Value> {
        info!("retrieving '{url}'...");
        let timed = Timed::future(async {
            let response = self.client.get(url).send().await?.error_for_status()?;
            response.json::<Value>().await
        })
        .await
        .with_context(|| format!("GET {url} failed"))?;
        info!("request completed in {:.3} seconds", timed.elapsed.as_secs_f64());
        Ok(timed.value)
    }

    async fn post_json(&self, url: &str, body: &Value) -> anyhow::Result<Value> {
        info!("posting to '{url}'...");
        let timed = Timed::future(async {
            let response = self.client.post(url).json(body).send().await?.error_for_status()?;
            response.json::<Value>().await
        })
        .await
        .with_context(|| format!("POST {url} failed"))?;
        info!("request completed in {:.3} seconds", timed.elapsed.as_secs_f64());
        Ok(timed.value)
    }
}
