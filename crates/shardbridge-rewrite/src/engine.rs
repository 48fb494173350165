//! The rewrite engine: merges tokens per destination and applies them.

use crate::column_map::ColumnMap;
use crate::error::{Result, RewriteError};
use crate::token::{
    CipherColumnTokenGenerator, GeneratedKeyInsertColumnGenerator, TableTokenGenerator, Token,
};
use shardbridge_commons::{DataSourceName, SqlValue, StatementContext};
use shardbridge_route::{GeneratedKey, RouteResult, RouteUnit};

/// The final SQL one destination receives, plus its ordered parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlUnit {
    pub data_source: DataSourceName,
    pub sql: String,
    pub parameters: Vec<SqlValue>,
}

/// Rewrites one statement for every destination in a route result.
///
/// The engine never mutates the original text; each destination gets a fresh
/// string assembled in a single left-to-right scan. Replaying the same
/// route result and token inputs reproduces byte-identical output.
pub struct SqlRewriteEngine<'a> {
    original_sql: &'a str,
    ctx: &'a StatementContext,
    column_map: ColumnMap,
}

impl<'a> SqlRewriteEngine<'a> {
    pub fn new(original_sql: &'a str, ctx: &'a StatementContext, column_map: ColumnMap) -> Self {
        Self {
            original_sql,
            ctx,
            column_map,
        }
    }

    /// Produces one [`SqlUnit`] per route unit, in route order.
    pub fn rewrite(
        &self,
        route_result: &RouteResult,
        generated_key: Option<&GeneratedKey>,
    ) -> Result<Vec<SqlUnit>> {
        let invariant = self.unit_invariant_tokens(generated_key);
        let parameters = self.parameters(generated_key);
        let mut result = Vec::with_capacity(route_result.len());
        for unit in route_result.route_units() {
            let mut tokens = invariant.clone();
            tokens.extend(self.table_tokens(unit));
            let sql = self.apply(tokens)?;
            log::debug!("rewrote statement for {}: {}", unit.data_source, sql);
            result.push(SqlUnit {
                data_source: unit.data_source.clone(),
                sql,
                parameters: parameters.clone(),
            });
        }
        Ok(result)
    }

    /// Tokens identical for every destination: generated-key column insertion
    /// and cipher/plain column substitution.
    fn unit_invariant_tokens(&self, generated_key: Option<&GeneratedKey>) -> Vec<Token> {
        let mut tokens = Vec::new();
        if let Some(key) = generated_key {
            if GeneratedKeyInsertColumnGenerator::should_generate(self.ctx) {
                tokens.push(GeneratedKeyInsertColumnGenerator::generate(self.ctx, key));
            }
        }
        for segment in self.ctx.columns() {
            if CipherColumnTokenGenerator::should_generate(segment, &self.column_map) {
                tokens.push(CipherColumnTokenGenerator::generate(segment, &self.column_map));
            }
        }
        tokens
    }

    /// Tokens that vary per destination: logical-to-actual table names.
    fn table_tokens(&self, unit: &RouteUnit) -> Vec<Token> {
        self.ctx
            .tables()
            .iter()
            .filter(|segment| TableTokenGenerator::should_generate(segment, unit))
            .map(|segment| TableTokenGenerator::generate(segment, unit))
            .collect()
    }

    /// Sorts tokens by ascending source position and applies them in one
    /// scan, copying untouched spans verbatim.
    ///
    /// # Panics
    ///
    /// Panics when two tokens target overlapping ranges — generators must
    /// never produce such a set for one destination.
    fn apply(&self, mut tokens: Vec<Token>) -> Result<String> {
        tokens.sort_by_key(|t| t.start());
        let original = self.original_sql;
        let mut sql = String::with_capacity(original.len() + 16);
        let mut cursor = 0usize;
        for token in &tokens {
            let start = token.start();
            if start > original.len() || token.stop().is_some_and(|stop| stop >= original.len()) {
                return Err(RewriteError::TokenOutOfBounds {
                    position: token.stop().unwrap_or(start),
                    length: original.len(),
                });
            }
            assert!(
                start >= cursor,
                "overlapping token ranges at byte {} (scan already at {})",
                start,
                cursor
            );
            sql.push_str(&original[cursor..start]);
            match token {
                Token::Replace { span, text } => {
                    sql.push_str(text);
                    cursor = span.stop + 1;
                }
                Token::Insert { text, .. } => {
                    sql.push_str(text);
                    cursor = start;
                }
            }
        }
        sql.push_str(&original[cursor..]);
        Ok(sql)
    }

    /// The final ordered parameter list: each row's parameters, with the
    /// generated-key value appended at the key column's positional slot.
    fn parameters(&self, generated_key: Option<&GeneratedKey>) -> Vec<SqlValue> {
        let groups = self.ctx.parameter_groups();
        match generated_key {
            Some(key) => {
                let mut result = Vec::new();
                for (i, value) in key.generated_values().iter().enumerate() {
                    if let Some(group) = groups.get(i) {
                        result.extend(group.iter().cloned());
                    }
                    result.push(SqlValue::Int(*value));
                }
                result
            }
            None => groups.iter().flatten().cloned().collect(),
        }
    }
}
