use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Form, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use lib::analysis::dispatcher::{Analyzer, RequestMode};
use lib::analysis::page::render_page;
use lib::analysis::placeholder::PlaceholderCycle;
use lib::analysis::state::AnalyzerState;
use lib::analysis::transport::ClientConfig;
use lib::service::detector::{detect_emotions, EmotionDetector, INVALID_TEXT_RESPONSE};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::local_transport::DetectorTransport;


const TEXT_PARAM: &str = "textToAnalyze";
const FORM_FIELD: &str = "text";
const SERVICE_NAME: &str = "Emotion Detector";
const UNEXPECTED_ERROR: &str = "An error occurred while processing your request";


#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<dyn EmotionDetector>,
    pub placeholders: Arc<PlaceholderCycle>,
}

impl AppState {
    pub fn new(detector: Arc<dyn EmotionDetector>) -> Self {
        Self {
            detector,
            placeholders: Arc::new(PlaceholderCycle::new()),
        }
    }
}


pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/emotionDetector", get(emotion_detector_query).post(emotion_detector_form))
        .route("/api/emotionDetector", post(emotion_detector_api))
        .route("/health", get(health_check))
        .with_state(state)
}


fn build_json_response(status: StatusCode, body: &Value) -> Response {
    let mut json_header = HeaderMap::new();
    json_header.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    (status, json_header, body.to_string()).into_response()
}

fn build_error_response(status: StatusCode, message: &str) -> Response {
    build_json_response(status, &json!({ "error": message }))
}


async fn analyze_statement(detector: &dyn EmotionDetector, text: Option<&String>) -> String {
    let Some(text) = text else {
        return INVALID_TEXT_RESPONSE.to_owned();
    };

    match detect_emotions(detector, text).await {
        Ok(report) => report.to_statement(),
        Err(error) => {
            warn!("Error in emotion detection: {}", error);
            INVALID_TEXT_RESPONSE.to_owned()
        },
    }
}

pub async fn emotion_detector_query(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>
) -> String {
    analyze_statement(state.detector.as_ref(), params.get(TEXT_PARAM)).await
}

pub async fn emotion_detector_form(
    State(state): State<AppState>,
    Form(params): Form<HashMap<String, String>>
) -> String {
    analyze_statement(state.detector.as_ref(), params.get(FORM_FIELD)).await
}


pub async fn emotion_detector_api(
    State(state): State<AppState>,
    body: Bytes
) -> Response {
    let params = match serde_json::from_slice::<Value>(&body) {
        Ok(params) => params,
        Err(error) => {
            warn!("Error in API endpoint: {}", error);
            return build_error_response(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR);
        },
    };

    let text = params.get(FORM_FIELD).and_then(Value::as_str).unwrap_or_default();
    match detect_emotions(state.detector.as_ref(), text).await {
        Ok(report) => match serde_json::to_value(&report) {
            Ok(body) => build_json_response(StatusCode::OK, &body),
            Err(error) => {
                warn!("Error serializing report: {}", error);
                build_error_response(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR)
            },
        },
        Err(error) => build_error_response(StatusCode::BAD_REQUEST, &error.to_string()),
    }
}


pub async fn health_check() -> Response {
    build_json_response(StatusCode::OK, &json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}


pub async fn index_page(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>
) -> Html<String> {
    let placeholder = state.placeholders.next_example();

    let Some(text) = params.get(TEXT_PARAM) else {
        return Html(render_page(&AnalyzerState::default(), placeholder));
    };

    let transport = Arc::new(DetectorTransport::new(state.detector.clone()));
    let analyzer = Analyzer::new(transport, ClientConfig::default(), RequestMode::Text);
    match analyzer.submit(text).await {
        Ok(view) => info!("page analysis: {}", view.summary),
        Err(error) => info!("page analysis failed: {}", error),
    }

    Html(render_page(&analyzer.state(), placeholder))
}
