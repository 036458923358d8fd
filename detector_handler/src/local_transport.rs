use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use lib::analysis::transport::Transport;
use lib::service::detector::{detect_emotions, EmotionDetector, INVALID_TEXT_RESPONSE};
use serde_json::{json, Value};
use url::Url;


/// Serves analyzer requests from the detector in this process, replying
/// exactly as the http endpoints would.
pub struct DetectorTransport {
    detector: Arc<dyn EmotionDetector>,
}

impl DetectorTransport {
    pub fn new(detector: Arc<dyn EmotionDetector>) -> Self {
        Self { detector }
    }
}

#[async_trait]
impl Transport for DetectorTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        let text = query_text(url)?;
        match detect_emotions(self.detector.as_ref(), &text).await {
            Ok(report) => Ok(report.to_statement()),
            Err(_) => Ok(INVALID_TEXT_RESPONSE.to_owned()),
        }
    }

    async fn post_json(&self, _url: &str, body: &Value) -> Result<Value> {
        let text = body.get("text").and_then(Value::as_str).unwrap_or_default();
        match detect_emotions(self.detector.as_ref(), text).await {
            Ok(report) => Ok(serde_json::to_value(report)?),
            Err(error) => Ok(json!({ "error": error.to_string() })),
        }
    }
}

// http://host/emotionDetector?textToAnalyze=a%20b -> "a b", first value wins
fn query_text(url: &str) -> Result<String> {
    let url = Url::parse(url).context("request url is not valid")?;
    let text = url
        .query_pairs()
        .find(|(key, _)| key == "textToAnalyze")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();
    Ok(text)
}
