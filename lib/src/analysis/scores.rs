use serde::Serialize;

use crate::service::common_structs::EmotionReport;


#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EmotionScore {
    pub label: String,
    pub score: f64,
}

/// Label -> score, kept in the order labels were first seen.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct EmotionScoreSet {
    entries: Vec<EmotionScore>,
}

impl EmotionScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    // a repeated label overwrites the value but keeps its first position
    pub fn insert(&mut self, label: &str, score: f64) {
        match self.entries.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.score = score,
            None => self.entries.push(EmotionScore { label: label.to_owned(), score }),
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries.iter().find(|entry| entry.label == label).map(|entry| entry.score)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmotionScore> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First label holding the highest score.
    pub fn strongest(&self) -> Option<&str> {
        let mut best: Option<&EmotionScore> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.score <= current.score => {},
                _ => best = Some(entry),
            }
        }
        best.map(|entry| entry.label.as_str())
    }
}

impl From<&EmotionReport> for EmotionScoreSet {
    fn from(report: &EmotionReport) -> Self {
        let mut set = EmotionScoreSet::new();
        for (label, score) in report.scores.as_pairs() {
            set.insert(label, score);
        }
        set
    }
}


/// A parsed reply: scores plus the label the service called dominant.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AnalysisResult {
    pub scores: EmotionScoreSet,
    pub dominant: String,
}
