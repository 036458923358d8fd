pub static CHAT_MODEL: &str = "CHAT_MODEL";
pub static BIND_ADDRESS: &str = "BIND_ADDRESS";

pub static EMOTION_DETECTOR_URL: &str = "EMOTION_DETECTOR_URL";
pub static REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";

// set by the lambda runtime, absent when running locally
pub static AWS_LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";

pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
pub static DEFAULT_DETECTOR_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
