//! Loading and validating sharding rule configuration.

use super::types::{ActualDataNodes, ShardingRuleConfig};
use crate::inline::expand_inline_expression;
use std::fs;
use std::path::Path;

impl ShardingRuleConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string and validate it.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: ShardingRuleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration settings.
    ///
    /// A table with zero data nodes, a malformed node reference, or a
    /// sharding column without an algorithm (or vice versa) is rejected here
    /// so the route layer only ever sees well-formed rules.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (table, rule) in &self.tables {
            let nodes = rule.expanded_data_nodes()?;
            if nodes.is_empty() {
                return Err(anyhow::anyhow!(
                    "Table '{}' declares no actual data nodes",
                    table
                ));
            }
            for node in &nodes {
                let mut parts = node.splitn(2, '.');
                let data_source = parts.next().unwrap_or_default();
                let actual_table = parts.next().unwrap_or_default();
                if data_source.is_empty() || actual_table.is_empty() {
                    return Err(anyhow::anyhow!(
                        "Table '{}' has malformed data node '{}', expected '<data_source>.<table>'",
                        table,
                        node
                    ));
                }
            }
            if rule.sharding_column.is_some() != rule.sharding_algorithm.is_some() {
                return Err(anyhow::anyhow!(
                    "Table '{}' must declare sharding_column and sharding_algorithm together",
                    table
                ));
            }
            for (logic, encrypt) in &rule.encrypt_columns {
                if encrypt.cipher_column.is_empty() {
                    return Err(anyhow::anyhow!(
                        "Table '{}' encrypt column '{}' has an empty cipher_column",
                        table,
                        logic
                    ));
                }
            }
        }
        Ok(())
    }
}

impl super::types::TableRuleConfig {
    /// Data nodes in declared order, with inline expressions expanded.
    pub fn expanded_data_nodes(&self) -> anyhow::Result<Vec<String>> {
        match &self.actual_data_nodes {
            ActualDataNodes::Expression(expr) => expand_inline_expression(expr),
            ActualDataNodes::List(nodes) => Ok(nodes.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
query_with_cipher_column = true

[tables.t_order]
actual_data_nodes = "ds${0..1}.t_order_${0..1}"
key_generate_column = "order_id"
sharding_column = "user_id"
sharding_algorithm = { type = "mod" }

[tables.t_order.encrypt_columns.pwd]
cipher_column = "pwd_cipher"
plain_column = "pwd_plain"

[tables.t_config]
actual_data_nodes = ["ds0.t_config"]
"#;

    #[test]
    fn test_parse_sample_config() {
        let config = ShardingRuleConfig::from_toml_str(SAMPLE).unwrap();
        assert!(config.query_with_cipher_column);
        assert_eq!(config.tables.len(), 2);

        let order = &config.tables["t_order"];
        assert_eq!(order.key_generate_column.as_deref(), Some("order_id"));
        assert_eq!(
            order.expanded_data_nodes().unwrap(),
            vec![
                "ds0.t_order_0",
                "ds0.t_order_1",
                "ds1.t_order_0",
                "ds1.t_order_1"
            ]
        );
        assert_eq!(
            order.encrypt_columns["pwd"].plain_column.as_deref(),
            Some("pwd_plain")
        );
    }

    #[test]
    fn test_empty_data_nodes_rejected() {
        let toml = r#"
[tables.t_order]
actual_data_nodes = []
"#;
        assert!(ShardingRuleConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_malformed_data_node_rejected() {
        let toml = r#"
[tables.t_order]
actual_data_nodes = ["ds0"]
"#;
        assert!(ShardingRuleConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_sharding_column_without_algorithm_rejected() {
        let toml = r#"
[tables.t_order]
actual_data_nodes = ["ds0.t_order"]
sharding_column = "user_id"
"#;
        assert!(ShardingRuleConfig::from_toml_str(toml).is_err());
    }
}
