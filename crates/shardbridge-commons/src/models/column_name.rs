//! Type-safe wrapper for column names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for column names.
///
/// Case-insensitive, normalized to lowercase, matching how the routing and
/// rewriting layers compare column references against rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnName(String);

impl ColumnName {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().to_lowercase())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ColumnName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ColumnName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ColumnName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
