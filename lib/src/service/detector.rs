use async_trait::async_trait;
use tracing::{info, warn};

use super::common_structs::{EmotionReport, EmotionScores};


pub const INVALID_TEXT_RESPONSE: &str = "Invalid text! Please try again!";


#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("Invalid or empty text provided")]
    InvalidText,

    #[error("Error processing text: {0}")]
    Model(#[from] anyhow::Error),
}


/// Anything that can score a piece of text.
#[async_trait]
pub trait EmotionDetector: Send + Sync {
    async fn score(&self, text: &str) -> anyhow::Result<EmotionScores>;
}


pub async fn detect_emotions(detector: &dyn EmotionDetector, text: &str) -> Result<EmotionReport, DetectionError> {
    if text.trim().is_empty() {
        return Err(DetectionError::InvalidText);
    }

    let scores = match detector.score(text).await {
        Ok(scores) => scores,
        Err(error) => {
            warn!("Error during emotion detection: {:?}", error);
            return Err(DetectionError::Model(error));
        },
    };

    let report = EmotionReport::from_scores(&scores);
    info!("Successfully analyzed text: {}...", preview(text));
    Ok(report)
}

// first 50 characters, for logs
fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}
