//! shardbridge-configs
//!
//! Sharding rule configuration types and loader for ShardBridge.
//!
//! Configuration is declarative TOML describing where each logical table
//! physically lives, how it is sharded, which column (if any) receives
//! generated keys, and the logical-to-cipher/plain column mappings. The
//! route crate turns a validated configuration into an immutable
//! `ShardingRule` snapshot.

pub mod config;
pub mod inline;

pub use config::{
    EncryptColumnConfig, ShardingAlgorithmConfig, ShardingRuleConfig, TableRuleConfig,
};
pub use inline::expand_inline_expression;
