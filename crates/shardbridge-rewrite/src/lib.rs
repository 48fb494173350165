//! # shardbridge-rewrite
//!
//! Positioned-token SQL rewriting for ShardBridge.
//!
//! Routing decides *where* a statement goes; this crate decides *what text*
//! each destination receives. Every edit is a [`token::Token`]: a positioned
//! replacement or insertion addressed against the original statement text.
//! Per destination, the applicable tokens are sorted by source position and
//! applied in one left-to-right scan, so the original text is never mutated
//! and replaying the same inputs reproduces byte-identical output.

pub mod column_map;
pub mod engine;
pub mod error;
pub mod token;

pub use column_map::ColumnMap;
pub use engine::{SqlRewriteEngine, SqlUnit};
pub use error::{Result, RewriteError};
pub use token::{
    CipherColumnTokenGenerator, GeneratedKeyInsertColumnGenerator, TableTokenGenerator, Token,
};
