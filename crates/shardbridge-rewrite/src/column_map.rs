//! Per-statement logical-to-actual column map.

use shardbridge_commons::{ColumnName, TableName};
use shardbridge_route::EncryptRule;
use std::collections::BTreeMap;

/// Maps logical column labels to their actual (cipher or plain) names for
/// one statement/result pairing.
///
/// Built once per statement from the encrypt rule and a fixed
/// `use_cipher` setting; the setting is deliberately not re-read mid
/// statement, so metadata and row fetches always agree on the mapping.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    map: BTreeMap<ColumnName, ColumnName>,
}

impl ColumnMap {
    /// Builds the map for the statement's referenced tables.
    pub fn new(encrypt_rule: &EncryptRule, tables: &[TableName], use_cipher: bool) -> Self {
        let mut map = BTreeMap::new();
        for table in tables {
            if use_cipher {
                for (logic, cipher) in encrypt_rule.logic_and_cipher_columns(table) {
                    map.insert(logic.clone(), cipher.clone());
                }
            } else {
                for (logic, plain) in encrypt_rule.logic_and_plain_columns(table) {
                    map.insert(logic.clone(), plain.clone());
                }
            }
        }
        Self { map }
    }

    /// The actual column backing a logical column, if the map covers it.
    pub fn actual_column(&self, logic: &ColumnName) -> Option<&ColumnName> {
        self.map.get(logic)
    }

    /// Resolves a column label. Unknown labels are returned unchanged — the
    /// column is simply not encrypted.
    pub fn actual_label<'a>(&'a self, label: &'a str) -> &'a str {
        self.actual_column(&ColumnName::new(label))
            .map(|c| c.as_str())
            .unwrap_or(label)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
