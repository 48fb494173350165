//! Sharding rule configuration.

mod loader;
mod types;

pub use types::{
    ActualDataNodes, EncryptColumnConfig, ShardingAlgorithmConfig, ShardingRuleConfig,
    TableRuleConfig,
};
