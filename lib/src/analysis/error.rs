pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to analyze.";
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while analyzing the text. Please try again.";
pub const PARSE_FAILURE_MESSAGE: &str = "Unable to parse emotion analysis results.";
pub const IN_FLIGHT_MESSAGE: &str = "An analysis is already in progress.";


#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("empty input")]
    EmptyInput,

    #[error("request failed: {0:#}")]
    Transport(#[from] anyhow::Error),

    #[error("service rejected the text")]
    Rejected,

    #[error("no emotion scores in response")]
    Unparseable,

    #[error("another analysis is in flight")]
    InFlight,
}

impl AnalysisError {
    /// What the user sees. Transport failures and rejections share one message.
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::EmptyInput => EMPTY_INPUT_MESSAGE,
            AnalysisError::Transport(_) | AnalysisError::Rejected => GENERIC_FAILURE_MESSAGE,
            AnalysisError::Unparseable => PARSE_FAILURE_MESSAGE,
            AnalysisError::InFlight => IN_FLIGHT_MESSAGE,
        }
    }
}
