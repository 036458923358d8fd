use serde::{Deserialize, Serialize};

use crate::utilities::round_to_places;


/// Labels in the order the detector reports them.
pub const EMOTION_LABELS: [&str; 5] = ["anger", "disgust", "fear", "joy", "sadness"];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    pub fn as_pairs(&self) -> [(&'static str, f64); 5] {
        [
            ("anger", self.anger),
            ("disgust", self.disgust),
            ("fear", self.fear),
            ("joy", self.joy),
            ("sadness", self.sadness),
        ]
    }

    // clamp into [0, 1] and round to 6 places; NaN becomes 0
    pub fn normalized(&self) -> Self {
        let fix = |value: f64| {
            if value.is_nan() {
                return 0.0;
            }
            round_to_places(value.clamp(0.0, 1.0), 6)
        };
        Self {
            anger: fix(self.anger),
            disgust: fix(self.disgust),
            fear: fix(self.fear),
            joy: fix(self.joy),
            sadness: fix(self.sadness),
        }
    }

    /// Highest scoring label. Ties go to the label listed first.
    pub fn dominant(&self) -> &'static str {
        let mut best = ("anger", self.anger);
        for (label, score) in self.as_pairs().into_iter().skip(1) {
            if score > best.1 {
                best = (label, score);
            }
        }
        best.0
    }
}


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmotionReport {
    #[serde(flatten)]
    pub scores: EmotionScores,
    pub dominant_emotion: String,
}

impl EmotionReport {
    pub fn from_scores(scores: &EmotionScores) -> Self {
        let scores = scores.normalized();
        Self {
            dominant_emotion: scores.dominant().to_owned(),
            scores,
        }
    }

    // the plain text rendering served by /emotionDetector
    pub fn to_statement(&self) -> String {
        let pairs = self.scores.as_pairs()
            .iter()
            .map(|(label, score)| format!("'{}': {}", label, score))
            .collect::<Vec<String>>()
            .join(", ");
        format!(
            "For the given statement, the system response is {}. The dominant emotion is {}.",
            pairs, self.dominant_emotion
        )
    }
}
