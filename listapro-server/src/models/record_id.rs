//! Numeric record identifiers taken from request paths

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Row id as given in a request path.
///
/// Any `i64` is accepted; ids that match no row are reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(i64);

impl RecordId {
    /// Parse an id from its path segment.
    ///
    /// # Example
    /// ```
    /// use listapro_server::models::RecordId;
    ///
    /// assert_eq!(RecordId::parse("42").unwrap().get(), 42);
    /// assert!(RecordId::parse("abc").is_err());
    /// assert_eq!(RecordId::parse("-1").unwrap().get(), -1);
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            })
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl FromStr for RecordId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
