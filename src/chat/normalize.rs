//! Message normalization.

use super::ChatError;

/// Lower-case the message.
///
/// Whitespace and punctuation are left alone. Substring checks still see
/// keywords next to punctuation ("teacher?" contains "teacher"), and leading
/// whitespace stays in front of the greeting anchor.
///
/// # Errors
///
/// Returns [`ChatError::InvalidInput`] for an empty message.
pub fn normalize(raw: &str) -> Result<String, ChatError> {
    if raw.is_empty() {
        return Err(ChatError::InvalidInput);
    }
    Ok(raw.to_lowercase())
}

/// First `max_chars` characters of `message` followed by `...`, for logs.
pub fn preview(message: &str, max_chars: usize) -> String {
    let mut out: String = message.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
