//! Configuration types for the sharding rule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration: one entry per logical table plus the statement-wide
/// cipher-column setting.
///
/// Tables are kept in a `BTreeMap` so iteration order — and therefore every
/// downstream rule and route order — is stable across loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardingRuleConfig {
    /// When true, logical column labels resolve to their cipher columns;
    /// when false, to their plain columns. Fixed for the lifetime of each
    /// statement/result pairing.
    #[serde(default = "default_query_with_cipher_column")]
    pub query_with_cipher_column: bool,

    #[serde(default)]
    pub tables: BTreeMap<String, TableRuleConfig>,
}

fn default_query_with_cipher_column() -> bool {
    true
}

impl Default for ShardingRuleConfig {
    fn default() -> Self {
        Self {
            query_with_cipher_column: true,
            tables: BTreeMap::new(),
        }
    }
}

/// Placement and rewrite configuration for one logical table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRuleConfig {
    /// Inline expression or explicit `ds.table` list describing every data
    /// node hosting this table, in declared order.
    pub actual_data_nodes: ActualDataNodes,

    /// Column filled by the distributed key generator when the client
    /// statement omits it.
    #[serde(default)]
    pub key_generate_column: Option<String>,

    /// Shard-key column evaluated against the sharding algorithm.
    #[serde(default)]
    pub sharding_column: Option<String>,

    #[serde(default)]
    pub sharding_algorithm: Option<ShardingAlgorithmConfig>,

    /// Logical column name -> cipher/plain mapping.
    #[serde(default)]
    pub encrypt_columns: BTreeMap<String, EncryptColumnConfig>,
}

/// Data nodes as either one inline expression or an explicit ordered list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActualDataNodes {
    Expression(String),
    List(Vec<String>),
}

/// Built-in sharding algorithms. A closed set: routing dispatches on it
/// exhaustively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShardingAlgorithmConfig {
    /// Shard-key value modulo the table's data node count.
    Mod,
}

/// Cipher/plain physical columns backing one logical column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptColumnConfig {
    pub cipher_column: String,
    #[serde(default)]
    pub plain_column: Option<String>,
}
