use anyhow::Context;
use serde_json::Value;

/// HTTP client for the checker service.
#[derive(Debug, Clone)]
pub struct CheckerClient {
    http: reqwest::Client,
    base_url: String,
}

impl CheckerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches `GET {base_url}/check/{number}` and returns the parsed body.
    pub async fn check(&self, number: u64) -> anyhow::Result<Value> {
        let url = format!("{}/check/{}", self.base_url, number);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        let body = response
            .json()
            .await
            .with_context(|| format!("non-JSON body from {url}"))?;

        Ok(body)
    }
}
