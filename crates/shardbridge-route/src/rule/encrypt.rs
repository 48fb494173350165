//! Logical-to-cipher/plain column mapping.

use shardbridge_commons::{ColumnName, TableName};
use shardbridge_configs::ShardingRuleConfig;
use std::collections::BTreeMap;

/// Physical columns backing one encrypted logical column.
///
/// The cipher column always exists; the plain column is optional and only
/// used by deployments that keep a cleartext copy during migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptColumn {
    pub cipher_column: ColumnName,
    pub plain_column: Option<ColumnName>,
}

/// Per-table mapping from logical column names to their cipher/plain
/// counterparts. This is a pure lookup structure; the ciphers themselves are
/// outside this workspace.
#[derive(Debug, Clone, Default)]
pub struct EncryptRule {
    columns: BTreeMap<TableName, BTreeMap<ColumnName, EncryptColumn>>,
}

impl EncryptRule {
    pub fn new(columns: BTreeMap<TableName, BTreeMap<ColumnName, EncryptColumn>>) -> Self {
        Self { columns }
    }

    pub fn from_config(config: &ShardingRuleConfig) -> Self {
        let mut columns: BTreeMap<TableName, BTreeMap<ColumnName, EncryptColumn>> = BTreeMap::new();
        for (table, table_config) in &config.tables {
            if table_config.encrypt_columns.is_empty() {
                continue;
            }
            let entry = columns.entry(TableName::new(table.as_str())).or_default();
            for (logic, encrypt) in &table_config.encrypt_columns {
                entry.insert(
                    ColumnName::new(logic.as_str()),
                    EncryptColumn {
                        cipher_column: ColumnName::new(encrypt.cipher_column.as_str()),
                        plain_column: encrypt.plain_column.as_deref().map(ColumnName::new),
                    },
                );
            }
        }
        Self { columns }
    }

    /// Logical -> cipher column pairs for one table, in stable column order.
    pub fn logic_and_cipher_columns(
        &self,
        table: &TableName,
    ) -> impl Iterator<Item = (&ColumnName, &ColumnName)> {
        self.columns
            .get(table)
            .into_iter()
            .flatten()
            .map(|(logic, encrypt)| (logic, &encrypt.cipher_column))
    }

    /// Logical -> plain column pairs for one table. Columns without a plain
    /// counterpart are skipped.
    pub fn logic_and_plain_columns(
        &self,
        table: &TableName,
    ) -> impl Iterator<Item = (&ColumnName, &ColumnName)> {
        self.columns
            .get(table)
            .into_iter()
            .flatten()
            .filter_map(|(logic, encrypt)| encrypt.plain_column.as_ref().map(|p| (logic, p)))
    }

    pub fn find_encrypt_column(
        &self,
        table: &TableName,
        logic_column: &ColumnName,
    ) -> Option<&EncryptColumn> {
        self.columns.get(table).and_then(|t| t.get(logic_column))
    }
}
