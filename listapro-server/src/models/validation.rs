//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value doesn't match the required format (e.g., a numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body could not be decoded
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::MalformedBody { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 256,
        };
        assert_eq!(
            err.to_string(),
            "name exceeds maximum length of 256 characters"
        );
    }

    #[test]
    fn invalid_format_names_field() {
        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        };
        assert_eq!(err.to_string(), "id: must be an integer");
    }
}
