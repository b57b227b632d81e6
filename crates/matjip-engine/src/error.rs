use thiserror::Error;

/// Failure to turn raw generator text into a structured course.
#[derive(Debug, Error)]
pub enum CourseParseError {
    /// Neither a fenced block nor a `{ ... }` span was found.
    #[error("no JSON payload found in generator output")]
    NoPayload,

    /// A payload was found but is not a valid course object.
    #[error("course JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unknown value for one of the course parameter enums.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid {kind} '{value}' (expected one of: {expected})")]
pub struct ParseParamError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
