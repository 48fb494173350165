//! Type-safe wrapper for data source names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for the name of a physical data source.
///
/// A data source is one physical database behind the middleware; a logical
/// table is spread across one or more of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DataSourceName(String);

impl DataSourceName {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
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

impl fmt::Display for DataSourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DataSourceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DataSourceName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for DataSourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
