use serde::Serialize;

use super::scores::{AnalysisResult, EmotionScoreSet};
use crate::utilities::{capitalize, format_percentage};


pub const FALLBACK_SYMBOL: &str = "🎭";
pub const TROPHY_SYMBOL: &str = "🏆";

pub fn symbol_for(label: &str) -> &'static str {
    match label {
        "anger" => "😠",
        "disgust" => "🤢",
        "fear" => "😨",
        "joy" => "😊",
        "sadness" => "😢",
        _ => FALLBACK_SYMBOL,
    }
}


#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EmotionEntryView {
    pub symbol: &'static str,
    pub name: String,
    pub percentage: String,
    pub dominant: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AnalysisView {
    pub entries: Vec<EmotionEntryView>,
    pub summary: String,
}

impl AnalysisView {
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.entries
            .iter()
            .map(|entry| {
                let marker = if entry.dominant { " *" } else { "" };
                format!("{} {:<10} {:>6}{}", entry.symbol, entry.name, entry.percentage, marker)
            })
            .collect();
        lines.push(self.summary.clone());
        lines
    }
}


/// Build the view for one analysis. Nothing from an earlier render leaks in.
pub fn render(scores: &EmotionScoreSet, dominant: &str) -> AnalysisView {
    let entries = scores
        .iter()
        .map(|entry| EmotionEntryView {
            symbol: symbol_for(&entry.label),
            name: capitalize(&entry.label),
            percentage: format_percentage(entry.score),
            dominant: entry.label == dominant,
        })
        .collect();

    AnalysisView {
        entries,
        summary: format!("{} Dominant Emotion: {} {}", TROPHY_SYMBOL, symbol_for(dominant), capitalize(dominant)),
    }
}

pub fn render_result(result: &AnalysisResult) -> AnalysisView {
    render(&result.scores, &result.dominant)
}
