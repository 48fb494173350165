//! Broadcast routing: every shard hosting a table.

use crate::context::{RouteResult, RouteUnit, TableUnit};
use crate::error::{Result, RouteError};
use crate::metas::TableMetas;
use crate::rule::ShardingRule;
use shardbridge_commons::{StatementContext, StatementKind, TableName};

/// Routes DDL and unconditional statements to every data node of each
/// resolved logical table.
pub struct BroadcastRoutingEngine<'a> {
    metas: &'a TableMetas,
    ctx: &'a StatementContext,
}

impl<'a> BroadcastRoutingEngine<'a> {
    pub fn new(metas: &'a TableMetas, ctx: &'a StatementContext) -> Self {
        Self { metas, ctx }
    }

    pub fn route(&self, rule: &ShardingRule) -> Result<RouteResult> {
        let mut result = RouteResult::default();
        for table in self.logic_table_names()? {
            result.extend(self.all_route_units(rule, &table)?);
        }
        Ok(result)
    }

    /// The target logical table set.
    ///
    /// Drop-index statements name an index, not a table: the owning table is
    /// resolved by scanning table metadata. An index no table owns is a
    /// fatal configuration error, never a silent empty broadcast.
    fn logic_table_names(&self) -> Result<Vec<TableName>> {
        if self.ctx.kind() == StatementKind::DropIndex && !self.ctx.indexes().is_empty() {
            return self.table_names_from_metas();
        }
        Ok(self.ctx.table_names())
    }

    fn table_names_from_metas(&self) -> Result<Vec<TableName>> {
        let mut result = Vec::with_capacity(self.ctx.indexes().len());
        for index in self.ctx.indexes() {
            let table = self
                .metas
                .find_table_by_index(index)
                .ok_or_else(|| RouteError::UnknownIndex(index.clone()))?;
            result.push(table.clone());
        }
        Ok(result)
    }

    fn all_route_units(&self, rule: &ShardingRule, table: &TableName) -> Result<Vec<RouteUnit>> {
        let table_rule = rule.table_rule(table)?;
        Ok(table_rule
            .actual_data_nodes()
            .iter()
            .map(|node| {
                RouteUnit::new(node.data_source.clone())
                    .with_table_unit(TableUnit::new(table.clone(), node.table_name.clone()))
            })
            .collect())
    }
}
