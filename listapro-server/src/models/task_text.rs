//! Task text validation

use super::ValidationError;

/// Maximum length for task text
const MAX_TEXT_LEN: usize = 4096;

/// Validated task text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskText(String);

impl TaskText {
    /// Create new task text. Same trimming rules as [`ListName`](super::ListName),
    /// with a 4096 character limit.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "text" });
        }

        if trimmed.chars().count() > MAX_TEXT_LEN {
            return Err(ValidationError::TooLong {
                field: "text",
                max: MAX_TEXT_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
