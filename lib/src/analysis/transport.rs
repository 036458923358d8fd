use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::env_keys::{DEFAULT_DETECTOR_URL, DEFAULT_TIMEOUT_SECS};


/// One request, one reply. No retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String>;
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value>;
}


#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DETECTOR_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    // http://host:5000/ -> http://host:5000
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}


#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    headers: HeaderMap,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Error building http client")?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/plain, application/json"));

        Ok(Self { client, headers })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?;

        let body_string = response.text().await?;
        debug!("response_body: {}", body_string);
        Ok(body_string)
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
        let response = self.client
            .post(url)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await?;

        let body_string = response.text().await?;
        debug!("response_body: {}", body_string);
        let value = serde_json::from_str::<Value>(&body_string).context("response is not json")?;
        Ok(value)
    }
}
