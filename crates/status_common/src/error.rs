//! Error types for the status skill.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Request application id does not match the configured skill")]
    UnauthorizedCaller,

    #[error("Status feed unavailable: {0}")]
    FeedUnavailable(String),

    #[error("Status feed malformed: {0}")]
    FeedMalformed(String),

    #[error("Unrecognized intent: {0}")]
    UnrecognizedIntent(String),
}

impl SkillError {
    /// HTTP status the webhook layer answers with when this error aborts an
    /// invocation. Feed errors are normally absorbed into a spoken apology
    /// before they reach that layer.
    pub fn http_status(&self) -> u16 {
        match self {
            SkillError::UnauthorizedCaller => 403,
            SkillError::UnrecognizedIntent(_) => 400,
            SkillError::FeedUnavailable(_) | SkillError::FeedMalformed(_) => 502,
        }
    }
}
