//! Logical table metadata used by DDL routing.
//!
//! Loaded from the physical schemas by the execution layer outside this
//! workspace; routing only reads it, to resolve which logical table owns a
//! named index.

use shardbridge_commons::{IndexName, TableName};
use std::collections::BTreeMap;

/// Metadata for one logical table.
#[derive(Debug, Clone, Default)]
pub struct TableMeta {
    indexes: Vec<IndexName>,
}

impl TableMeta {
    pub fn new(indexes: Vec<IndexName>) -> Self {
        Self { indexes }
    }

    pub fn contains_index(&self, index: &IndexName) -> bool {
        self.indexes.contains(index)
    }
}

/// Metadata for every logical table, keyed by table name.
#[derive(Debug, Clone, Default)]
pub struct TableMetas {
    tables: BTreeMap<TableName, TableMeta>,
}

impl TableMetas {
    pub fn new(tables: BTreeMap<TableName, TableMeta>) -> Self {
        Self { tables }
    }

    pub fn insert(&mut self, table: impl Into<TableName>, meta: TableMeta) {
        self.tables.insert(table.into(), meta);
    }

    pub fn get(&self, table: &TableName) -> Option<&TableMeta> {
        self.tables.get(table)
    }

    /// The logical table owning `index`, scanning tables in stable name
    /// order.
    pub fn find_table_by_index(&self, index: &IndexName) -> Option<&TableName> {
        self.tables
            .iter()
            .find(|(_, meta)| meta.contains_index(index))
            .map(|(table, _)| table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_table_by_index() {
        let mut metas = TableMetas::default();
        metas.insert(
            "t_order",
            TableMeta::new(vec![IndexName::new("idx_user_id")]),
        );
        metas.insert("t_user", TableMeta::new(vec![IndexName::new("idx_name")]));

        assert_eq!(
            metas.find_table_by_index(&IndexName::new("idx_name")),
            Some(&TableName::new("t_user"))
        );
        assert_eq!(metas.find_table_by_index(&IndexName::new("idx_missing")), None);
    }
}
