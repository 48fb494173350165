//! Type-safe wrapper for table names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for table names.
///
/// Used for both logical names (as written in client SQL) and actual names
/// (the physical table at one shard). Table names are case-insensitive and
/// normalized to lowercase internally, so `TableName::new("Orders")` and
/// `TableName::new("orders")` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TableName(String);

impl TableName {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().to_lowercase())
    }

    /// Returns the table name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner String.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TableName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TableName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_equality() {
        assert_eq!(TableName::new("T_Order"), TableName::new("t_order"));
    }

    #[test]
    fn test_display() {
        assert_eq!(TableName::new("t_order").to_string(), "t_order");
    }
}
