use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use super::error::AnalysisError;
use super::scores::{AnalysisResult, EmotionScoreSet};
use crate::service::common_structs::EmotionReport;


static SCORE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"'((?-u:\w)+)': (\d+(?:\.\d+)?|\.\d+)").expect("score pattern is valid")
});

static DOMINANT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"The dominant emotion is ((?-u:\w)+)").expect("dominant pattern is valid")
});

const ERROR_SIGNATURES: [&str; 2] = ["Invalid text!", "error"];


/// True when the body is one of the service's failure replies.
pub fn has_error_signature(body: &str) -> bool {
    ERROR_SIGNATURES.iter().any(|signature| body.contains(signature))
}

/// Pull `'label': score` pairs and the dominant label out of a text reply.
///
/// A reply without any pairs is unparseable even when it names a dominant
/// label. When no dominant label is named, the strongest score stands in.
pub fn parse_text(body: &str) -> Result<AnalysisResult, AnalysisError> {
    let mut scores = EmotionScoreSet::new();
    for captures in SCORE_PATTERN.captures_iter(body) {
        let Ok(score) = captures[2].parse::<f64>() else {
            continue;
        };
        scores.insert(&captures[1], score);
    }

    if scores.is_empty() {
        return Err(AnalysisError::Unparseable);
    }

    let dominant = match DOMINANT_PATTERN.captures(body) {
        Some(captures) => captures[1].to_owned(),
        None => scores.strongest().unwrap_or_default().to_owned(),
    };

    if !scores.contains(&dominant) {
        warn!("dominant emotion {} is not among the scores", dominant);
    }

    Ok(AnalysisResult { scores, dominant })
}

/// Validate a JSON reply from the structured endpoint.
pub fn parse_structured(body: &Value) -> Result<AnalysisResult, AnalysisError> {
    if body.get("error").is_some() {
        return Err(AnalysisError::Rejected);
    }

    let report = serde_json::from_value::<EmotionReport>(body.clone())
        .map_err(|_| AnalysisError::Unparseable)?;

    let in_range = report.scores.as_pairs()
        .iter()
        .all(|(_, score)| score.is_finite() && (0.0..=1.0).contains(score));
    if !in_range || report.dominant_emotion.is_empty() {
        return Err(AnalysisError::Unparseable);
    }

    Ok(AnalysisResult {
        scores: EmotionScoreSet::from(&report),
        dominant: report.dominant_emotion,
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_scores_and_dominant() {
        let body = "For the given statement, the system response is 'joy': 0.87, 'anger': 0.05, \
                    'sadness': 0.08. The dominant emotion is joy.";
        let result = parse_text(body).unwrap();

        assert_eq!(result.dominant, "joy");
        assert_eq!(result.scores.get("joy"), Some(0.87));
        assert_eq!(result.scores.get("anger"), Some(0.05));
        let labels: Vec<&str> = result.scores.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, vec!["joy", "anger", "sadness"]);
    }

    #[test]
    fn dominant_phrase_alone_is_unparseable() {
        let result = parse_text("The dominant emotion is joy.");
        assert!(matches!(result, Err(AnalysisError::Unparseable)));
    }

    #[test]
    fn integer_scores_are_accepted() {
        let result = parse_text("'anger': 0, 'joy': 1. The dominant emotion is joy.").unwrap();
        assert_eq!(result.scores.get("anger"), Some(0.0));
        assert_eq!(result.scores.get("joy"), Some(1.0));
    }

    #[test]
    fn missing_dominant_falls_back_to_strongest() {
        let result = parse_text("'fear': 0.2, 'sadness': 0.6, 'joy': 0.2").unwrap();
        assert_eq!(result.dominant, "sadness");
    }

    #[test]
    fn declared_dominant_is_trusted() {
        let result = parse_text("'fear': 0.9, 'joy': 0.1. The dominant emotion is joy.").unwrap();
        assert_eq!(result.dominant, "joy");
    }

    #[test]
    fn labels_are_ascii_words_only() {
        let result = parse_text("'café': 0.4, 'joy': 0.6. The dominant emotion is joy.").unwrap();
        assert_eq!(result.scores.len(), 1);
        assert!(!result.scores.contains("café"));
        assert_eq!(result.scores.get("joy"), Some(0.6));
    }

    #[test]
    fn detects_error_signatures() {
        assert!(has_error_signature("Invalid text! Please try again!"));
        assert!(has_error_signature("An error occurred while processing your request."));
        assert!(!has_error_signature("'joy': 0.9. The dominant emotion is joy."));
    }

    #[test]
    fn structured_reply_keeps_label_order() {
        let body = json!({
            "anger": 0.1, "disgust": 0.0, "fear": 0.05, "joy": 0.8, "sadness": 0.05,
            "dominant_emotion": "joy"
        });
        let result = parse_structured(&body).unwrap();
        let labels: Vec<&str> = result.scores.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, vec!["anger", "disgust", "fear", "joy", "sadness"]);
        assert_eq!(result.dominant, "joy");
    }

    #[test]
    fn structured_error_is_a_rejection() {
        let result = parse_structured(&json!({"error": "Invalid or empty text provided"}));
        assert!(matches!(result, Err(AnalysisError::Rejected)));
    }

    #[test]
    fn structured_reply_must_be_complete_and_in_range() {
        let missing = json!({"joy": 0.8, "dominant_emotion": "joy"});
        assert!(matches!(parse_structured(&missing), Err(AnalysisError::Unparseable)));

        let out_of_range = json!({
            "anger": 1.5, "disgust": 0.0, "fear": 0.0, "joy": 0.0, "sadness": 0.0,
            "dominant_emotion": "anger"
        });
        assert!(matches!(parse_structured(&out_of_range), Err(AnalysisError::Unparseable)));
    }
}
