//! Routing engines.
//!
//! Engine selection is a closed classification over statement shape: the
//! statement kind, the presence of a shard-key predicate, and how many of
//! the referenced tables carry sharding rules. Each engine is pure — it
//! reads the rule and the statement context and allocates a fresh
//! [`RouteResult`], never mutating its inputs.

mod broadcast;
mod standard;
mod unicast;

pub use broadcast::BroadcastRoutingEngine;
pub use standard::{ComplexRoutingEngine, StandardRoutingEngine};
pub use unicast::{KeyGenerateOnlyRoutingEngine, UnicastRoutingEngine};

use crate::context::RouteResult;
use crate::error::Result;
use crate::metas::TableMetas;
use crate::rule::ShardingRule;
use shardbridge_commons::{StatementContext, TableName};

/// The closed family of routing strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEngineKind {
    /// DDL and unconditional statements: every shard hosting the table.
    Broadcast,
    /// One sharded table with a shard-key predicate.
    Standard,
    /// Several sharded tables with a shard-key predicate.
    Complex,
    /// No sharded table involved: any single destination.
    Unicast,
    /// Insert needing only key generation; no sharding strategy to evaluate.
    KeyGenerateOnly,
}

/// Classifies a statement into its routing engine.
pub fn select_engine(rule: &ShardingRule, ctx: &StatementContext) -> RouteEngineKind {
    if ctx.kind().is_ddl() {
        return RouteEngineKind::Broadcast;
    }
    let sharded_tables: Vec<TableName> = ctx
        .table_names()
        .into_iter()
        .filter(|t| rule.contains_table(t))
        .collect();
    if sharded_tables.is_empty() {
        return RouteEngineKind::Unicast;
    }
    if ctx.kind().is_insert() {
        let needs_key_only = sharded_tables.iter().all(|t| {
            rule.find_table_rule(t)
                .map(|r| r.sharding_strategy().is_none())
                .unwrap_or(false)
        });
        if needs_key_only {
            return RouteEngineKind::KeyGenerateOnly;
        }
    }
    if !ctx.has_sharding_conditions() {
        return RouteEngineKind::Broadcast;
    }
    if sharded_tables.len() == 1 {
        RouteEngineKind::Standard
    } else {
        RouteEngineKind::Complex
    }
}

/// Routes one statement: selects the engine and runs it.
///
/// Pure and synchronous; identical inputs produce an identical result,
/// including unit order.
pub fn route(
    rule: &ShardingRule,
    metas: &TableMetas,
    ctx: &StatementContext,
) -> Result<RouteResult> {
    let kind = select_engine(rule, ctx);
    log::debug!("routing {:?} statement via {:?} engine", ctx.kind(), kind);
    match kind {
        RouteEngineKind::Broadcast => BroadcastRoutingEngine::new(metas, ctx).route(rule),
        RouteEngineKind::Standard => StandardRoutingEngine::new(ctx).route(rule),
        RouteEngineKind::Complex => ComplexRoutingEngine::new(ctx).route(rule),
        RouteEngineKind::Unicast => UnicastRoutingEngine::new(ctx).route(rule),
        RouteEngineKind::KeyGenerateOnly => KeyGenerateOnlyRoutingEngine::new(ctx).route(rule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::SequenceKeyGenerator;
    use crate::rule::{DataNode, EncryptRule, ShardingAlgorithm, ShardingStrategy, TableRule};
    use shardbridge_commons::{ColumnName, Span, StatementKind};
    use std::sync::Arc;

    fn rule() -> ShardingRule {
        ShardingRule::new(
            vec![
                TableRule::new(
                    "t_order",
                    vec![
                        DataNode::new("ds0", "t_order_0"),
                        DataNode::new("ds1", "t_order_1"),
                    ],
                    Some(ColumnName::new("order_id")),
                    Some(ShardingStrategy::new(
                        ColumnName::new("user_id"),
                        ShardingAlgorithm::Mod,
                    )),
                ),
                TableRule::new(
                    "t_order_item",
                    vec![
                        DataNode::new("ds0", "t_order_item_0"),
                        DataNode::new("ds1", "t_order_item_1"),
                    ],
                    None,
                    Some(ShardingStrategy::new(
                        ColumnName::new("user_id"),
                        ShardingAlgorithm::Mod,
                    )),
                ),
                TableRule::new(
                    "t_broadcastless",
                    vec![DataNode::new("ds0", "t_broadcastless")],
                    Some(ColumnName::new("id")),
                    None,
                ),
            ],
            EncryptRule::default(),
            Arc::new(SequenceKeyGenerator::default()),
        )
        .unwrap()
    }

    #[test]
    fn test_ddl_selects_broadcast() {
        let ctx = StatementContext::new(StatementKind::DropTable).push_table("t_order", Span::new(11, 17));
        assert_eq!(select_engine(&rule(), &ctx), RouteEngineKind::Broadcast);
    }

    #[test]
    fn test_predicate_on_one_table_selects_standard() {
        let ctx = StatementContext::new(StatementKind::Select)
            .push_table("t_order", Span::new(14, 20))
            .push_condition("user_id", vec![1]);
        assert_eq!(select_engine(&rule(), &ctx), RouteEngineKind::Standard);
    }

    #[test]
    fn test_predicate_on_two_tables_selects_complex() {
        let ctx = StatementContext::new(StatementKind::Select)
            .push_table("t_order", Span::new(14, 20))
            .push_table("t_order_item", Span::new(27, 38))
            .push_condition("user_id", vec![1]);
        assert_eq!(select_engine(&rule(), &ctx), RouteEngineKind::Complex);
    }

    #[test]
    fn test_unknown_table_selects_unicast() {
        let ctx = StatementContext::new(StatementKind::Select).push_table("t_other", Span::new(14, 20));
        assert_eq!(select_engine(&rule(), &ctx), RouteEngineKind::Unicast);
    }

    #[test]
    fn test_keyed_insert_without_strategy_selects_key_generate_only() {
        let ctx = StatementContext::new(StatementKind::Insert)
            .push_table("t_broadcastless", Span::new(12, 26));
        assert_eq!(
            select_engine(&rule(), &ctx),
            RouteEngineKind::KeyGenerateOnly
        );
    }

    #[test]
    fn test_unconditional_dml_selects_broadcast() {
        let ctx = StatementContext::new(StatementKind::Select).push_table("t_order", Span::new(14, 20));
        assert_eq!(select_engine(&rule(), &ctx), RouteEngineKind::Broadcast);
    }
}
