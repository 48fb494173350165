//! The immutable sharding rule model.
//!
//! A `ShardingRule` is built once from validated configuration and never
//! mutated. Configuration changes swap the whole snapshot through
//! [`RuleHolder`], so an in-flight routing or rewriting call observes one
//! consistent rule from start to finish.

mod encrypt;
mod holder;
mod strategy;

pub use encrypt::{EncryptColumn, EncryptRule};
pub use holder::RuleHolder;
pub use strategy::{ShardingAlgorithm, ShardingStrategy};

use crate::error::{Result, RouteError};
use crate::keygen::{KeyGenerator, SequenceKeyGenerator};
use shardbridge_commons::{ColumnName, DataSourceName, TableName};
use shardbridge_configs::{ShardingAlgorithmConfig, ShardingRuleConfig};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One physical location of a logical table: a data source plus the actual
/// table name at that source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataNode {
    pub data_source: DataSourceName,
    pub table_name: TableName,
}

impl DataNode {
    pub fn new(data_source: impl Into<DataSourceName>, table_name: impl Into<TableName>) -> Self {
        Self {
            data_source: data_source.into(),
            table_name: table_name.into(),
        }
    }

    /// Parses `<data_source>.<table>` notation.
    pub fn parse(node: &str) -> Result<Self> {
        match node.split_once('.') {
            Some((data_source, table)) if !data_source.is_empty() && !table.is_empty() => {
                Ok(Self::new(data_source, table))
            }
            _ => Err(RouteError::InvalidRule(format!(
                "malformed data node '{}', expected '<data_source>.<table>'",
                node
            ))),
        }
    }
}

/// Placement and key-generation rule for one logical table.
///
/// The data node list order is the declared configuration order; it fixes
/// route unit order and must never be re-sorted.
#[derive(Debug, Clone)]
pub struct TableRule {
    logic_table: TableName,
    actual_data_nodes: Vec<DataNode>,
    generate_key_column: Option<ColumnName>,
    sharding_strategy: Option<ShardingStrategy>,
}

impl TableRule {
    pub fn new(
        logic_table: impl Into<TableName>,
        actual_data_nodes: Vec<DataNode>,
        generate_key_column: Option<ColumnName>,
        sharding_strategy: Option<ShardingStrategy>,
    ) -> Self {
        Self {
            logic_table: logic_table.into(),
            actual_data_nodes,
            generate_key_column,
            sharding_strategy,
        }
    }

    pub fn logic_table(&self) -> &TableName {
        &self.logic_table
    }

    pub fn actual_data_nodes(&self) -> &[DataNode] {
        &self.actual_data_nodes
    }

    pub fn generate_key_column(&self) -> Option<&ColumnName> {
        self.generate_key_column.as_ref()
    }

    pub fn sharding_strategy(&self) -> Option<&ShardingStrategy> {
        self.sharding_strategy.as_ref()
    }
}

/// The complete sharding rule: per-table rules, the embedded encrypt rule,
/// and the key generator shared by tables that declare a generate-key column.
///
/// Immutable for the duration of one routing/rewrite decision.
pub struct ShardingRule {
    table_rules: BTreeMap<TableName, TableRule>,
    encrypt_rule: EncryptRule,
    key_generator: Arc<dyn KeyGenerator>,
}

impl ShardingRule {
    pub fn new(
        table_rules: Vec<TableRule>,
        encrypt_rule: EncryptRule,
        key_generator: Arc<dyn KeyGenerator>,
    ) -> Result<Self> {
        let mut rules = BTreeMap::new();
        for rule in table_rules {
            if rule.actual_data_nodes().is_empty() {
                return Err(RouteError::NoDataNodes(rule.logic_table().clone()));
            }
            rules.insert(rule.logic_table().clone(), rule);
        }
        Ok(Self {
            table_rules: rules,
            encrypt_rule,
            key_generator,
        })
    }

    /// Builds a rule snapshot from validated configuration, using the default
    /// in-process sequence generator for generated keys.
    ///
    /// Deployments with a distributed key generator use [`Self::from_config_with_generator`].
    pub fn from_config(config: &ShardingRuleConfig) -> Result<Self> {
        Self::from_config_with_generator(config, Arc::new(SequenceKeyGenerator::default()))
    }

    pub fn from_config_with_generator(
        config: &ShardingRuleConfig,
        key_generator: Arc<dyn KeyGenerator>,
    ) -> Result<Self> {
        let mut table_rules = Vec::with_capacity(config.tables.len());
        for (table, table_config) in &config.tables {
            let nodes = table_config
                .expanded_data_nodes()
                .map_err(|e| RouteError::InvalidRule(e.to_string()))?;
            let mut data_nodes = Vec::with_capacity(nodes.len());
            for node in &nodes {
                data_nodes.push(DataNode::parse(node)?);
            }
            let sharding_strategy = match (&table_config.sharding_column, &table_config.sharding_algorithm) {
                (Some(column), Some(algorithm)) => Some(ShardingStrategy::new(
                    ColumnName::new(column.as_str()),
                    match algorithm {
                        ShardingAlgorithmConfig::Mod => ShardingAlgorithm::Mod,
                    },
                )),
                (None, None) => None,
                _ => {
                    return Err(RouteError::InvalidRule(format!(
                        "table '{}' must declare sharding_column and sharding_algorithm together",
                        table
                    )))
                }
            };
            table_rules.push(TableRule::new(
                table.as_str(),
                data_nodes,
                table_config
                    .key_generate_column
                    .as_deref()
                    .map(ColumnName::new),
                sharding_strategy,
            ));
        }
        Self::new(table_rules, EncryptRule::from_config(config), key_generator)
    }

    /// Looks up the table rule for a logical table.
    pub fn find_table_rule(&self, logic_table: &TableName) -> Option<&TableRule> {
        self.table_rules.get(logic_table)
    }

    /// Like [`Self::find_table_rule`] but surfaces a configuration error for
    /// tables routing is already committed to.
    pub fn table_rule(&self, logic_table: &TableName) -> Result<&TableRule> {
        self.find_table_rule(logic_table)
            .ok_or_else(|| RouteError::UnknownTable(logic_table.clone()))
    }

    /// True when the logical table has a rule (i.e. participates in sharding).
    pub fn contains_table(&self, logic_table: &TableName) -> bool {
        self.table_rules.contains_key(logic_table)
    }

    /// The first table rule in stable name order, used by unicast routing
    /// when the statement itself names no routable table.
    pub fn first_table_rule(&self) -> Option<&TableRule> {
        self.table_rules.values().next()
    }

    pub fn encrypt_rule(&self) -> &EncryptRule {
        &self.encrypt_rule
    }

    pub fn key_generator(&self) -> &Arc<dyn KeyGenerator> {
        &self.key_generator
    }
}

impl std::fmt::Debug for ShardingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShardingRule")
            .field("table_rules", &self.table_rules)
            .field("encrypt_rule", &self.encrypt_rule)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_node_parse() {
        let node = DataNode::parse("ds0.t_order_1").unwrap();
        assert_eq!(node.data_source.as_str(), "ds0");
        assert_eq!(node.table_name.as_str(), "t_order_1");

        assert!(DataNode::parse("ds0").is_err());
        assert!(DataNode::parse(".t_order").is_err());
    }

    #[test]
    fn test_rule_rejects_empty_data_nodes() {
        let rule = TableRule::new("t_order", Vec::new(), None, None);
        let result = ShardingRule::new(
            vec![rule],
            EncryptRule::default(),
            Arc::new(SequenceKeyGenerator::default()),
        );
        assert_eq!(
            result.err(),
            Some(RouteError::NoDataNodes(TableName::new("t_order")))
        );
    }

    #[test]
    fn test_from_config() {
        let config = shardbridge_configs::ShardingRuleConfig::from_toml_str(
            r#"
[tables.t_order]
actual_data_nodes = "ds${0..1}.t_order_${0..1}"
key_generate_column = "order_id"
sharding_column = "user_id"
sharding_algorithm = { type = "mod" }
"#,
        )
        .unwrap();
        let rule = ShardingRule::from_config(&config).unwrap();
        let table = rule.table_rule(&TableName::new("t_order")).unwrap();
        assert_eq!(table.actual_data_nodes().len(), 4);
        assert_eq!(
            table.generate_key_column(),
            Some(&ColumnName::new("order_id"))
        );
        assert!(table.sharding_strategy().is_some());
    }
}
