//! Unicast and key-generate-only routing.

use crate::context::{RouteResult, RouteUnit, TableUnit};
use crate::error::{Result, RouteError};
use crate::rule::ShardingRule;
use shardbridge_commons::{StatementContext, TableName};

/// Routes statements touching no sharded table to a single destination.
///
/// Any destination is correct for such a statement; the first data node of
/// the first table rule is used so the choice is deterministic. Statements
/// like `SELECT 1` that reference no table at all take the same path.
pub struct UnicastRoutingEngine<'a> {
    ctx: &'a StatementContext,
}

impl<'a> UnicastRoutingEngine<'a> {
    pub fn new(ctx: &'a StatementContext) -> Self {
        Self { ctx }
    }

    pub fn route(&self, rule: &ShardingRule) -> Result<RouteResult> {
        match rule.first_table_rule() {
            Some(table_rule) => {
                let node = &table_rule.actual_data_nodes()[0];
                Ok(RouteResult::new(vec![RouteUnit::new(
                    node.data_source.clone(),
                )]))
            }
            None => {
                let table = self
                    .ctx
                    .table_names()
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| TableName::new(""));
                Err(RouteError::UnknownTable(table))
            }
        }
    }
}

/// Routes an insert whose table declares a generated key but no sharding
/// strategy: the statement lands on the table's first (canonical) data node,
/// and key generation is its only remaining sharding concern.
pub struct KeyGenerateOnlyRoutingEngine<'a> {
    ctx: &'a StatementContext,
}

impl<'a> KeyGenerateOnlyRoutingEngine<'a> {
    pub fn new(ctx: &'a StatementContext) -> Self {
        Self { ctx }
    }

    pub fn route(&self, rule: &ShardingRule) -> Result<RouteResult> {
        let table = self
            .ctx
            .table_names()
            .into_iter()
            .next()
            .expect("key-generate-only routing selected without a table");
        let table_rule = rule.table_rule(&table)?;
        let node = &table_rule.actual_data_nodes()[0];
        Ok(RouteResult::new(vec![RouteUnit::new(
            node.data_source.clone(),
        )
        .with_table_unit(TableUnit::new(table, node.table_name.clone()))]))
    }
}
