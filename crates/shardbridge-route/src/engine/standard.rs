//! Standard and complex routing: predicate-bearing DML/DQL.

use crate::context::{RouteResult, RouteUnit, TableUnit};
use crate::error::Result;
use crate::rule::ShardingRule;
use shardbridge_commons::{StatementContext, TableName};

/// Routes a statement over one sharded table, keeping only the data nodes
/// whose position matches the shard-key predicate.
pub struct StandardRoutingEngine<'a> {
    ctx: &'a StatementContext,
}

impl<'a> StandardRoutingEngine<'a> {
    pub fn new(ctx: &'a StatementContext) -> Self {
        Self { ctx }
    }

    pub fn route(&self, rule: &ShardingRule) -> Result<RouteResult> {
        let table = self
            .ctx
            .table_names()
            .into_iter()
            .find(|t| rule.contains_table(t))
            .expect("standard routing selected without a sharded table");
        let mut result = RouteResult::default();
        result.extend(route_table(rule, self.ctx, &table)?);
        Ok(result)
    }
}

/// Routes a statement referencing several sharded tables: each table routes
/// like standard, and units landing on one data source merge into a single
/// destination carrying every table substitution.
pub struct ComplexRoutingEngine<'a> {
    ctx: &'a StatementContext,
}

impl<'a> ComplexRoutingEngine<'a> {
    pub fn new(ctx: &'a StatementContext) -> Self {
        Self { ctx }
    }

    pub fn route(&self, rule: &ShardingRule) -> Result<RouteResult> {
        let mut result = RouteResult::default();
        for table in self.ctx.table_names() {
            if !rule.contains_table(&table) {
                continue;
            }
            for unit in route_table(rule, self.ctx, &table)? {
                result.merge(unit);
            }
        }
        Ok(result)
    }
}

/// Shared data-node iteration: same shape as broadcast, filtered to the
/// positions the sharding strategy matched. Declared node order is kept.
fn route_table(
    rule: &ShardingRule,
    ctx: &StatementContext,
    table: &TableName,
) -> Result<Vec<RouteUnit>> {
    let table_rule = rule.table_rule(table)?;
    let nodes = table_rule.actual_data_nodes();
    let positions = match table_rule.sharding_strategy() {
        Some(strategy) => strategy.matching_node_positions(ctx.conditions(), nodes.len()),
        None => (0..nodes.len()).collect(),
    };
    Ok(positions
        .into_iter()
        .map(|i| {
            let node = &nodes[i];
            RouteUnit::new(node.data_source.clone())
                .with_table_unit(TableUnit::new(table.clone(), node.table_name.clone()))
        })
        .collect())
}
