//! Client side of the emotion detector: submit text, parse the reply, and
//! turn it into a view model.
//!
//! [`dispatcher::Analyzer`] owns the flow. It talks to the service through a
//! [`transport::Transport`], hands the body to [`parser`], renders with
//! [`render`], and records everything in an [`state::AnalyzerState`] that
//! front ends (terminal, [`page`]) draw from.

pub mod error;
pub mod scores;
pub mod parser;
pub mod render;
pub mod state;
pub mod transport;
pub mod dispatcher;
pub mod page;
pub mod placeholder;
