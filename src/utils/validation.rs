//! Centralized validation for request input.

use thiserror::Error;

/// Maximum number of skill labels accepted in a single resolution request
pub const MAX_LABELS: usize = 200;

/// Maximum length of a single skill label, in characters
pub const MAX_LABEL_LENGTH: usize = 120;

/// Request-input validation error types
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Too many skill labels: exceeds maximum of {MAX_LABELS}")]
    TooManyLabels,
    #[error("Skill label too long: exceeds {MAX_LABEL_LENGTH} characters")]
    LabelTooLong,
}

/// Clean a batch of skill labels before resolution.
///
/// Trims each label and drops blank entries, then enforces the request
/// caps on what remains. Non-string entries never reach this point; the
/// deserialization layer drops them first.
///
/// # Errors
///
/// Returns `ValidationError::TooManyLabels` if the cleaned batch exceeds
/// `MAX_LABELS`, or `ValidationError::LabelTooLong` if any single label
/// exceeds `MAX_LABEL_LENGTH` characters.
pub fn validate_labels(labels: &[String]) -> Result<Vec<String>, ValidationError> {
    let cleaned: Vec<String> = labels
        .iter()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect();

    if cleaned.len() > MAX_LABELS {
        return Err(ValidationError::TooManyLabels);
    }
    if cleaned
        .iter()
        .any(|label| label.chars().count() > MAX_LABEL_LENGTH)
    {
        return Err(ValidationError::LabelTooLong);
    }

    Ok(cleaned)
}
