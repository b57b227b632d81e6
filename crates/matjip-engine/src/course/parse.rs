//! Extraction of the structured course from free-form generator text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::error::CourseParseError;

/// A fence's body: everything after the opening line (whatever its info
/// string) up to the closing fence.
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[^\n]*\n(.*?)\s*```").expect("valid regex"));

/// Course as returned by the generator. Only `spots` is required.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCourse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: Option<String>,
    pub spots: Vec<GeneratedSpot>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub total_budget: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub course_highlight: Option<String>,
}

/// One generator pick. Any field may be missing or oddly typed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSpot {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub custom_description: Option<String>,
}

/// The payload substring: a fenced code block's body if present, else the
/// span from the first `{` to the last `}`.
///
/// # Errors
///
/// Returns [`CourseParseError::NoPayload`] when neither is present.
pub fn extract_payload(raw: &str) -> Result<&str, CourseParseError> {
    if let Some(body) = FENCED_BLOCK.captures(raw).and_then(|caps| caps.get(1)) {
        return Ok(body.as_str());
    }

    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&raw[start..=end]),
        _ => Err(CourseParseError::NoPayload),
    }
}

/// Extract and decode a [`GeneratedCourse`] from raw generator text.
///
/// # Errors
///
/// Returns [`CourseParseError`] when no payload is found or it is not a
/// course object with a `spots` array.
pub fn parse_generated_course(raw: &str) -> Result<GeneratedCourse, CourseParseError> {
    let payload = extract_payload(raw.trim())?;
    Ok(serde_json::from_str(payload)?)
}

/// Non-empty string, or a number rendered as text. Anything else is `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Accepts `12`, `"12"` and `"[12]"`.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .trim()
            .parse()
            .ok(),
        _ => None,
    })
}
