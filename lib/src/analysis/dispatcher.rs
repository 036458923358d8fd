use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::json;
use tracing::{error, info};

use super::error::AnalysisError;
use super::parser::{has_error_signature, parse_structured, parse_text};
use super::render::{render_result, AnalysisView};
use super::scores::AnalysisResult;
use super::state::AnalyzerState;
use super::transport::{ClientConfig, Transport};


pub const TEXT_ENDPOINT: &str = "/emotionDetector";
pub const JSON_ENDPOINT: &str = "/api/emotionDetector";


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMode {
    /// `GET /emotionDetector?textToAnalyze=...`, reply scraped with patterns.
    #[default]
    Text,
    /// `POST /api/emotionDetector`, reply validated as json.
    Structured,
}


/// Submits text for analysis and keeps the resulting [`AnalyzerState`].
///
/// Only one request may be outstanding. A submit while another is in flight
/// is refused with [`AnalysisError::InFlight`] and changes nothing.
#[derive(Clone)]
pub struct Analyzer {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
    mode: RequestMode,
    state: Arc<Mutex<AnalyzerState>>,
}

impl Analyzer {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig, mode: RequestMode) -> Self {
        Self {
            transport,
            config,
            mode,
            state: Arc::new(Mutex::new(AnalyzerState::default())),
        }
    }

    pub fn state(&self) -> AnalyzerState {
        self.lock().clone()
    }

    pub fn request_url(&self, text: &str) -> String {
        self.config.endpoint(&format!("{}?textToAnalyze={}", TEXT_ENDPOINT, urlencoding::encode(text)))
    }

    pub async fn submit(&self, input: &str) -> Result<AnalysisView, AnalysisError> {
        let text = {
            let mut state = self.lock();
            if state.is_busy() {
                return Err(AnalysisError::InFlight);
            }
            state.input = input.to_owned();
            state.clear_output();

            let text = input.trim().to_owned();
            if text.is_empty() {
                state.show_error(AnalysisError::EmptyInput.user_message());
                return Err(AnalysisError::EmptyInput);
            }
            state.set_busy();
            text
        };

        // restores the control even if this future is dropped mid-request
        let _busy = BusyGuard { state: &self.state };

        let outcome = self.request(&text).await.map(|result| render_result(&result));

        let mut state = self.lock();
        match &outcome {
            Ok(view) => state.show_result(view.clone()),
            Err(error) => {
                error!("Error: {}", error);
                state.show_error(error.user_message());
            },
        }
        drop(state);
        outcome
    }

    async fn request(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        match self.mode {
            RequestMode::Text => {
                let url = self.request_url(text);
                info!("analyzing via {}", url);
                let body = self.transport.get_text(&url).await?;
                if has_error_signature(&body) {
                    return Err(AnalysisError::Rejected);
                }
                parse_text(&body)
            },
            RequestMode::Structured => {
                let url = self.config.endpoint(JSON_ENDPOINT);
                info!("analyzing via {}", url);
                let body = self.transport.post_json(&url, &json!({ "text": text })).await?;
                parse_structured(&body)
            },
        }
    }

    fn lock(&self) -> MutexGuard<'_, AnalyzerState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<AnalyzerState>) -> MutexGuard<'_, AnalyzerState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct BusyGuard<'a> {
    state: &'a Mutex<AnalyzerState>,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        lock_state(self.state).restore_control();
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use serde_json::Value;
    use tokio::sync::Notify;

    use crate::analysis::error::{EMPTY_INPUT_MESSAGE, GENERIC_FAILURE_MESSAGE, PARSE_FAILURE_MESSAGE};
    use crate::analysis::state::{ControlState, READY_LABEL};

    const JOY_BODY: &str = "For the given statement, the system response is 'joy': 0.87, 'anger': 0.05, \
                            'sadness': 0.08. The dominant emotion is joy.";

    struct StubTransport {
        reply: Result<String, String>,
        calls: AtomicUsize,
        urls: Mutex<Vec<String>>,
    }

    impl StubTransport {
        fn replying(body: &str) -> Arc<Self> {
            Arc::new(Self { reply: Ok(body.to_owned()), calls: AtomicUsize::new(0), urls: Mutex::new(vec![]) })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self { reply: Err(message.to_owned()), calls: AtomicUsize::new(0), urls: Mutex::new(vec![]) })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn get_text(&self, url: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.urls.lock().unwrap().push(url.to_owned());
            self.reply.clone().map_err(|message| anyhow!(message))
        }

        async fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.urls.lock().unwrap().push(format!("{} {}", url, body));
            let reply = self.reply.clone().map_err(|message| anyhow!(message))?;
            Ok(serde_json::from_str(&reply)?)
        }
    }

    fn analyzer(transport: Arc<StubTransport>) -> Analyzer {
        Analyzer::new(transport, ClientConfig::default(), RequestMode::Text)
    }

    #[tokio::test]
    async fn blank_input_never_hits_the_network() {
        let transport = StubTransport::replying(JOY_BODY);
        let analyzer = analyzer(transport.clone());

        let result = analyzer.submit("   \t ").await;

        assert!(matches!(result, Err(AnalysisError::EmptyInput)));
        assert_eq!(transport.calls(), 0);
        let state = analyzer.state();
        assert_eq!(state.error.as_deref(), Some(EMPTY_INPUT_MESSAGE));
        assert_eq!(state.control, ControlState::default());
    }

    #[tokio::test]
    async fn renders_a_successful_reply() {
        let transport = StubTransport::replying(JOY_BODY);
        let analyzer = analyzer(transport.clone());

        let view = analyzer.submit("  I am so happy today!  ").await.unwrap();

        assert_eq!(view.entries[0].percentage, "87.0%");
        assert!(view.entries[0].dominant);
        assert_eq!(
            transport.urls.lock().unwrap()[0],
            "http://localhost:5000/emotionDetector?textToAnalyze=I%20am%20so%20happy%20today%21"
        );

        let state = analyzer.state();
        assert_eq!(state.result, Some(view));
        assert_eq!(state.error, None);
        assert!(!state.control.disabled);
        assert_eq!(state.control.label, READY_LABEL);
    }

    #[tokio::test]
    async fn error_signature_is_reported_generically() {
        let analyzer = analyzer(StubTransport::replying("Invalid text! Please try again!"));

        let result = analyzer.submit("???").await;

        assert!(matches!(result, Err(AnalysisError::Rejected)));
        let state = analyzer.state();
        assert_eq!(state.error.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(state.result, None);
        assert_eq!(state.control, ControlState::default());
    }

    #[tokio::test]
    async fn transport_failure_is_reported_generically() {
        let analyzer = analyzer(StubTransport::failing("connection refused"));

        let result = analyzer.submit("hello").await;

        assert!(matches!(result, Err(AnalysisError::Transport(_))));
        let state = analyzer.state();
        assert_eq!(state.error.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(state.control, ControlState::default());
    }

    #[tokio::test]
    async fn reply_without_scores_is_a_parse_failure() {
        let analyzer = analyzer(StubTransport::replying("The dominant emotion is joy."));

        let result = analyzer.submit("hello").await;

        assert!(matches!(result, Err(AnalysisError::Unparseable)));
        let state = analyzer.state();
        assert_eq!(state.error.as_deref(), Some(PARSE_FAILURE_MESSAGE));
        assert_eq!(state.control, ControlState::default());
    }

    #[tokio::test]
    async fn new_submit_clears_previous_output() {
        let analyzer = analyzer(StubTransport::replying(JOY_BODY));
        analyzer.submit("").await.unwrap_err();
        assert!(analyzer.state().error.is_some());

        analyzer.submit("happy").await.unwrap();
        let first = analyzer.state();
        analyzer.submit("happy").await.unwrap();
        let second = analyzer.state();

        assert_eq!(first, second);
        assert_eq!(second.error, None);
        assert_eq!(second.result.unwrap().entries.len(), 3);
    }

    #[tokio::test]
    async fn structured_mode_posts_json() {
        let body = r#"{"anger": 0.1, "disgust": 0.0, "fear": 0.0, "joy": 0.2, "sadness": 0.7, "dominant_emotion": "sadness"}"#;
        let transport = StubTransport::replying(body);
        let analyzer = Analyzer::new(transport.clone(), ClientConfig::default(), RequestMode::Structured);

        let view = analyzer.submit("I feel so sad").await.unwrap();

        assert_eq!(view.summary, "🏆 Dominant Emotion: 😢 Sadness");
        assert_eq!(
            transport.urls.lock().unwrap()[0],
            r#"http://localhost:5000/api/emotionDetector {"text":"I feel so sad"}"#
        );
    }

    struct GatedTransport {
        gate: Notify,
        entered: Notify,
    }

    #[async_trait]
    impl Transport for GatedTransport {
        async fn get_text(&self, _url: &str) -> Result<String> {
            self.entered.notify_one();
            self.gate.notified().await;
            Ok(JOY_BODY.to_owned())
        }

        async fn post_json(&self, _url: &str, _body: &Value) -> Result<Value> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn second_submit_is_ignored_while_in_flight() {
        let transport = Arc::new(GatedTransport { gate: Notify::new(), entered: Notify::new() });
        let analyzer = Analyzer::new(transport.clone(), ClientConfig::default(), RequestMode::Text);

        let first = tokio::spawn({
            let analyzer = analyzer.clone();
            async move { analyzer.submit("first").await }
        });
        transport.entered.notified().await;

        assert!(analyzer.state().control.disabled);
        let second = analyzer.submit("second").await;
        assert!(matches!(second, Err(AnalysisError::InFlight)));
        assert_eq!(analyzer.state().input, "first");

        transport.gate.notify_one();
        first.await.unwrap().unwrap();
        assert!(!analyzer.state().control.disabled);
    }

    #[tokio::test]
    async fn dropped_request_restores_control() {
        let transport = Arc::new(GatedTransport { gate: Notify::new(), entered: Notify::new() });
        let analyzer = Analyzer::new(transport.clone(), ClientConfig::default(), RequestMode::Text);

        let pending = tokio::spawn({
            let analyzer = analyzer.clone();
            async move { analyzer.submit("stuck").await }
        });
        transport.entered.notified().await;
        pending.abort();
        let _ = pending.await;

        assert_eq!(analyzer.state().control, ControlState::default());
    }
}
