use shardbridge_commons::{IndexName, TableName};
use thiserror::Error;

/// Errors that can occur while building rules or routing statements.
///
/// All variants are configuration errors: they mean the rule model and the
/// statement cannot be reconciled, and routing fails as a whole. There is no
/// partial route result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A DDL statement names an index that no table's metadata contains.
    #[error("Cannot find index name `{0}`")]
    UnknownIndex(IndexName),

    /// The statement references a logical table with no table rule.
    #[error("Cannot find table rule for logical table `{0}`")]
    UnknownTable(TableName),

    /// A table rule exists but declares zero data nodes.
    #[error("Logical table `{0}` declares no data nodes")]
    NoDataNodes(TableName),

    /// Rule construction rejected the configuration.
    #[error("Invalid sharding rule: {0}")]
    InvalidRule(String),
}

/// Result type for routing operations.
pub type Result<T> = std::result::Result<T, RouteError>;
