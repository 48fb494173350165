//! Type-safe wrapper for index names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for index names, used by DDL routing to resolve the
/// logical table that owns a named index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexName(String);

impl IndexName {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().to_lowercase())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for IndexName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for IndexName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
