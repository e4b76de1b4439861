//! Failure of the analysis request, from transport up to schema checks.

use thiserror::Error;

use crate::analysis::SchemaError;

/// Shown to the user for every [`RequestError`]; details go to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze pitch deck. Please try again.";

#[derive(Debug, Error)]
pub enum RequestError {
    /// Curl reported an error (connect, timeout, TLS, ...).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// The multipart body could not be assembled.
    #[error("multipart form: {0}")]
    Form(#[from] curl::FormError),
    /// Response had a non-2xx status. 4xx and 5xx are treated alike.
    #[error("HTTP {0}")]
    Http(u32),
    #[error("decode analysis response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("analysis response rejected: {0}")]
    Schema(#[from] SchemaError),
    /// The worker running the request went away before answering.
    #[error("request task did not finish: {0}")]
    Interrupted(String),
}

impl RequestError {
    /// The message the form displays; the same for every cause.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}
