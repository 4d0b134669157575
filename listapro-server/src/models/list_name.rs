//! List name validation

use super::ValidationError;

/// Maximum length for list names
const MAX_NAME_LEN: usize = 256;

/// Validated list name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListName(String);

impl ListName {
    /// Create a new list name.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 256 characters
    ///
    /// # Example
    /// ```
    /// use listapro_server::models::ListName;
    ///
    /// assert!(ListName::new("Groceries").is_ok());
    /// assert!(ListName::new("").is_err());
    /// assert!(ListName::new("   ").is_err());  // whitespace only
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ListName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
