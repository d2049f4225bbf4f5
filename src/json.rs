use crate::error::Result;
use crate::question::Quiz;

/// Serialize questions as a pretty-printed JSON array (2-space indent).
/// Absent images are left out instead of written as `null`.
pub fn quiz_to_json(quiz: &Quiz) -> Result<String> {
    Ok(serde_json::to_string_pretty(quiz)?)
}
