use serde::Serialize;

use super::render::AnalysisView;


pub const READY_LABEL: &str = "🔍 Analyze Emotions";
pub const BUSY_LABEL: &str = "🔄 Analyzing...";


#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ControlState {
    pub disabled: bool,
    pub label: &'static str,
}

impl Default for ControlState {
    fn default() -> Self {
        Self { disabled: false, label: READY_LABEL }
    }
}


/// Everything a front end needs to draw the analyzer.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct AnalyzerState {
    pub input: String,
    pub control: ControlState,
    pub result: Option<AnalysisView>,
    pub error: Option<String>,
}

impl AnalyzerState {
    pub fn is_busy(&self) -> bool {
        self.control.disabled
    }

    pub fn clear_output(&mut self) {
        self.result = None;
        self.error = None;
    }

    pub fn set_busy(&mut self) {
        self.control = ControlState { disabled: true, label: BUSY_LABEL };
    }

    pub fn restore_control(&mut self) {
        self.control = ControlState::default();
    }

    pub fn show_result(&mut self, view: AnalysisView) {
        self.error = None;
        self.result = Some(view);
    }

    pub fn show_error(&mut self, message: &str) {
        self.result = None;
        self.error = Some(message.to_owned());
    }
}
