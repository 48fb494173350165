//! Generated-key coordination.
//!
//! Per-shard autoincrement is not globally unique, so inserts into tables
//! with a declared generate-key column receive values from a distributed
//! generator when the client statement omits the column. Only the decision
//! and the per-row value collection live here; the distributed generator
//! implementations are external and plug in through [`KeyGenerator`].

use crate::rule::ShardingRule;
use shardbridge_commons::{ColumnName, StatementContext};
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of globally unique key values.
///
/// Implementations must guarantee that no two callers — across threads or
/// processes — ever receive the same value. This crate only consumes the
/// sequence.
pub trait KeyGenerator: Send + Sync {
    fn next_key(&self) -> i64;
}

/// In-process sequence generator.
///
/// Unique only within one process; suitable for tests and single-instance
/// deployments, not for a multi-instance cluster.
#[derive(Debug)]
pub struct SequenceKeyGenerator {
    next: AtomicI64,
}

impl SequenceKeyGenerator {
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl Default for SequenceKeyGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl KeyGenerator for SequenceKeyGenerator {
    fn next_key(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// The generated key for one insert statement: the column being filled and
/// one value per inserted row, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedKey {
    column: ColumnName,
    generated_values: Vec<i64>,
}

impl GeneratedKey {
    pub fn column(&self) -> &ColumnName {
        &self.column
    }

    pub fn generated_values(&self) -> &[i64] {
        &self.generated_values
    }

    /// Creates the generated key for a statement, or `None` when the
    /// statement does not need one.
    ///
    /// A key is generated only for an insert whose table declares a
    /// generate-key column that the statement's explicit column list omits.
    /// An implicit column list supplies every column positionally, so it
    /// never generates.
    pub fn create(rule: &ShardingRule, ctx: &StatementContext) -> Option<GeneratedKey> {
        if !ctx.kind().is_insert() {
            return None;
        }
        let table = ctx.table_names().into_iter().next()?;
        let table_rule = rule.find_table_rule(&table)?;
        let column = table_rule.generate_key_column()?.clone();
        let insert_columns = ctx.insert_columns()?;
        if insert_columns.columns.contains(&column) {
            return None;
        }
        let generated_values = (0..ctx.row_count())
            .map(|_| rule.key_generator().next_key())
            .collect();
        log::debug!(
            "generated {} key value(s) for {}.{}",
            ctx.row_count(),
            table,
            column
        );
        Some(GeneratedKey {
            column,
            generated_values,
        })
    }
}
