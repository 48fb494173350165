//! # shardbridge-route
//!
//! Rule model and query-routing engines for ShardBridge.
//!
//! Given an immutable [`rule::ShardingRule`] snapshot and a parsed
//! [`shardbridge_commons::StatementContext`], [`engine::route`] decides which
//! physical shards the statement reaches and which actual table backs each
//! logical reference at each destination. The decision is pure: no I/O, no
//! mutation, deterministic unit order.
//!
//! Generated primary keys are coordinated here too — see [`keygen`] — because
//! whether a key must be generated is a rule-model question, even though the
//! distributed generators themselves live outside this workspace.

pub mod context;
pub mod engine;
pub mod error;
pub mod keygen;
pub mod metas;
pub mod rule;

pub use context::{RouteResult, RouteUnit, TableUnit};
pub use engine::{route, select_engine, RouteEngineKind};
pub use error::{Result, RouteError};
pub use keygen::{GeneratedKey, KeyGenerator, SequenceKeyGenerator};
pub use metas::{TableMeta, TableMetas};
pub use rule::{
    DataNode, EncryptColumn, EncryptRule, RuleHolder, ShardingAlgorithm, ShardingRule,
    ShardingStrategy, TableRule,
};
