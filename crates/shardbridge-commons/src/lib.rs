//! # shardbridge-commons
//!
//! Shared types for ShardBridge.
//!
//! This crate provides the foundational types used across all ShardBridge
//! crates (shardbridge-configs, shardbridge-route, shardbridge-rewrite,
//! shardbridge-registry). It carries no routing or rewriting logic of its
//! own, which keeps the dependency graph acyclic.
//!
//! ## Type-Safe Wrappers
//!
//! Identifiers are wrapped so a data source name cannot be accidentally used
//! where a table name is expected:
//! - `TableName`: logical or actual table name
//! - `DataSourceName`: physical data source identifier
//! - `ColumnName`: column identifier
//! - `IndexName`: index identifier
//! - `InstanceId`: middleware instance identity (host@port style)
//!
//! ## Statement Context
//!
//! `StatementContext` is the read-only view of a parsed SQL statement that
//! routing and rewriting consume. It is produced by the parser adapter layer,
//! which is outside this workspace.

pub mod models;
pub mod statement;

pub use models::{ColumnName, DataSourceName, IndexName, InstanceId, Span, TableName};
pub use statement::{
    ColumnSegment, InsertColumnsSegment, ShardingCondition, SqlValue, StatementContext,
    StatementKind, TableSegment,
};
