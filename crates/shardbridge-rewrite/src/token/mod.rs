//! Rewrite tokens and their generators.
//!
//! A token is one positioned text edit against the original statement.
//! Generators are a closed, compile-time-enumerable family; each owns
//! exactly one rewrite concern and holds no state. The contract is
//! two-phase: `should_generate` answers whether the concern applies, and
//! `generate` may only be called after a `true` answer — calling it
//! otherwise is a programming error and panics.

use crate::column_map::ColumnMap;
use shardbridge_commons::{ColumnSegment, Span, StatementContext, TableSegment};
use shardbridge_route::{GeneratedKey, RouteUnit};

/// One positioned edit: replace an inclusive `[start, stop]` span, or splice
/// text in at a point without consuming source characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Replace { span: Span, text: String },
    Insert { position: usize, text: String },
}

impl Token {
    /// Source position the token applies at; tokens are sorted by this
    /// before application.
    pub fn start(&self) -> usize {
        match self {
            Token::Replace { span, .. } => span.start,
            Token::Insert { position, .. } => *position,
        }
    }

    /// Last source byte the token consumes, inclusive. Insertions consume
    /// nothing.
    pub fn stop(&self) -> Option<usize> {
        match self {
            Token::Replace { span, .. } => Some(span.stop),
            Token::Insert { .. } => None,
        }
    }
}

/// Inserts the generated-key column name into an insert statement's explicit
/// column list, just before the closing delimiter.
///
/// Fires only when the statement carries an explicit, non-empty column list.
/// With an implicit list there is nothing to edit: the database assigns the
/// column position by default.
pub struct GeneratedKeyInsertColumnGenerator;

impl GeneratedKeyInsertColumnGenerator {
    pub fn should_generate(ctx: &StatementContext) -> bool {
        ctx.insert_columns()
            .map(|segment| !segment.columns.is_empty())
            .unwrap_or(false)
    }

    /// # Panics
    ///
    /// Panics when called without a prior `true` from [`Self::should_generate`].
    pub fn generate(ctx: &StatementContext, generated_key: &GeneratedKey) -> Token {
        let segment = ctx
            .insert_columns()
            .filter(|segment| !segment.columns.is_empty())
            .expect("generated-key column token requested without an explicit column list");
        Token::Insert {
            position: segment.span.stop,
            text: format!(",{}", generated_key.column()),
        }
    }
}

/// Replaces a logical table reference with the destination's actual table
/// name. Varies per route unit.
pub struct TableTokenGenerator;

impl TableTokenGenerator {
    pub fn should_generate(segment: &TableSegment, unit: &RouteUnit) -> bool {
        unit.actual_table(&segment.name).is_some()
    }

    /// # Panics
    ///
    /// Panics when the route unit carries no substitution for the segment's
    /// table.
    pub fn generate(segment: &TableSegment, unit: &RouteUnit) -> Token {
        let actual = unit
            .actual_table(&segment.name)
            .expect("table token requested for a table the route unit does not substitute");
        Token::Replace {
            span: segment.span,
            text: actual.as_str().to_string(),
        }
    }
}

/// Replaces a logical column reference with its cipher or plain counterpart
/// through the statement's column map. Unit-invariant.
pub struct CipherColumnTokenGenerator;

impl CipherColumnTokenGenerator {
    pub fn should_generate(segment: &ColumnSegment, column_map: &ColumnMap) -> bool {
        column_map.actual_column(&segment.name).is_some()
    }

    /// # Panics
    ///
    /// Panics when the column map carries no mapping for the segment's
    /// column.
    pub fn generate(segment: &ColumnSegment, column_map: &ColumnMap) -> Token {
        let actual = column_map
            .actual_column(&segment.name)
            .expect("cipher column token requested for an unmapped column");
        Token::Replace {
            span: segment.span,
            text: actual.as_str().to_string(),
        }
    }
}
