//! Read-only view of a parsed SQL statement.
//!
//! The SQL parser lives outside this workspace; its adapter constructs a
//! `StatementContext` and hands it to routing and rewriting. Nothing in this
//! workspace mutates a context after construction.

use crate::models::{ColumnName, IndexName, Span, TableName};
use serde::{Deserialize, Serialize};

/// Statement classification consumed by engine selection.
///
/// This is a closed set: routing dispatches on it exhaustively, so adding a
/// variant forces every selection site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    CreateTable,
    DropTable,
    CreateIndex,
    DropIndex,
}

impl StatementKind {
    /// True for schema-changing statements, which broadcast to every shard
    /// hosting the table.
    pub fn is_ddl(&self) -> bool {
        matches!(
            self,
            StatementKind::CreateTable
                | StatementKind::DropTable
                | StatementKind::CreateIndex
                | StatementKind::DropIndex
        )
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, StatementKind::Insert)
    }
}

/// A literal or bound parameter value extracted from the statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Int(i64),
    Text(String),
    Null,
}

impl std::fmt::Display for SqlValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlValue::Int(v) => write!(f, "{}", v),
            SqlValue::Text(v) => write!(f, "{}", v),
            SqlValue::Null => write!(f, "NULL"),
        }
    }
}

/// One shard-key predicate extracted from the statement: the sharding column
/// and the values it is compared against (`=` or `IN`).
#[derive(Debug, Clone, PartialEq)]
pub struct ShardingCondition {
    pub column: ColumnName,
    pub values: Vec<i64>,
}

/// A table reference and the span of its name in the original text.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSegment {
    pub name: TableName,
    pub span: Span,
}

/// A column reference and the span of its name in the original text.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSegment {
    pub name: ColumnName,
    pub span: Span,
}

/// The explicit `(col, col, ...)` list of an insert statement.
///
/// `span` covers the whole parenthesized list; `span.stop` addresses the
/// closing parenthesis, which is where a generated-key column is spliced in.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertColumnsSegment {
    pub span: Span,
    pub columns: Vec<ColumnName>,
}

/// Read-only structural view of one parsed statement.
///
/// Construction is additive: the parser adapter starts from
/// [`StatementContext::new`] and pushes segments as it walks the AST.
#[derive(Debug, Clone)]
pub struct StatementContext {
    kind: StatementKind,
    tables: Vec<TableSegment>,
    columns: Vec<ColumnSegment>,
    insert_columns: Option<InsertColumnsSegment>,
    indexes: Vec<IndexName>,
    conditions: Vec<ShardingCondition>,
    /// Parameters grouped per inserted row; non-insert statements carry a
    /// single group.
    parameter_groups: Vec<Vec<SqlValue>>,
}

impl StatementContext {
    pub fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            tables: Vec::new(),
            columns: Vec::new(),
            insert_columns: None,
            indexes: Vec::new(),
            conditions: Vec::new(),
            parameter_groups: Vec::new(),
        }
    }

    pub fn push_table(mut self, name: impl Into<TableName>, span: Span) -> Self {
        self.tables.push(TableSegment {
            name: name.into(),
            span,
        });
        self
    }

    pub fn push_column(mut self, name: impl Into<ColumnName>, span: Span) -> Self {
        self.columns.push(ColumnSegment {
            name: name.into(),
            span,
        });
        self
    }

    pub fn push_index(mut self, name: impl Into<IndexName>) -> Self {
        self.indexes.push(name.into());
        self
    }

    pub fn with_insert_columns(mut self, span: Span, columns: Vec<ColumnName>) -> Self {
        self.insert_columns = Some(InsertColumnsSegment { span, columns });
        self
    }

    pub fn push_condition(mut self, column: impl Into<ColumnName>, values: Vec<i64>) -> Self {
        self.conditions.push(ShardingCondition {
            column: column.into(),
            values,
        });
        self
    }

    pub fn push_parameter_group(mut self, group: Vec<SqlValue>) -> Self {
        self.parameter_groups.push(group);
        self
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn tables(&self) -> &[TableSegment] {
        &self.tables
    }

    /// Distinct logical table names referenced by the statement, in first
    /// reference order.
    pub fn table_names(&self) -> Vec<TableName> {
        let mut result: Vec<TableName> = Vec::new();
        for segment in &self.tables {
            if !result.contains(&segment.name) {
                result.push(segment.name.clone());
            }
        }
        result
    }

    pub fn columns(&self) -> &[ColumnSegment] {
        &self.columns
    }

    pub fn insert_columns(&self) -> Option<&InsertColumnsSegment> {
        self.insert_columns.as_ref()
    }

    pub fn indexes(&self) -> &[IndexName] {
        &self.indexes
    }

    pub fn conditions(&self) -> &[ShardingCondition] {
        &self.conditions
    }

    pub fn parameter_groups(&self) -> &[Vec<SqlValue>] {
        &self.parameter_groups
    }

    /// Number of rows an insert statement writes. Statements without
    /// parameter groups count as a single row.
    pub fn row_count(&self) -> usize {
        self.parameter_groups.len().max(1)
    }

    /// True when the statement carries at least one shard-key predicate.
    pub fn has_sharding_conditions(&self) -> bool {
        !self.conditions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names_deduplicate_in_order() {
        let ctx = StatementContext::new(StatementKind::Select)
            .push_table("t_order", Span::new(14, 20))
            .push_table("t_order_item", Span::new(30, 41))
            .push_table("t_order", Span::new(50, 56));
        assert_eq!(
            ctx.table_names(),
            vec![TableName::new("t_order"), TableName::new("t_order_item")]
        );
    }

    #[test]
    fn test_row_count_defaults_to_one() {
        let ctx = StatementContext::new(StatementKind::Insert);
        assert_eq!(ctx.row_count(), 1);

        let ctx = ctx
            .push_parameter_group(vec![SqlValue::Int(1)])
            .push_parameter_group(vec![SqlValue::Int(2)]);
        assert_eq!(ctx.row_count(), 2);
    }

    #[test]
    fn test_ddl_classification() {
        assert!(StatementKind::DropIndex.is_ddl());
        assert!(StatementKind::CreateTable.is_ddl());
        assert!(!StatementKind::Insert.is_ddl());
        assert!(!StatementKind::Select.is_ddl());
    }
}
