//! Sharding strategy evaluation.

use shardbridge_commons::{ColumnName, ShardingCondition};

/// Built-in sharding algorithms. Routing dispatches on this exhaustively;
/// new algorithms extend the enum rather than registering at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardingAlgorithm {
    /// Shard-key value modulo the table's data node count.
    Mod,
}

/// One table's sharding strategy: the shard-key column and the algorithm
/// mapping its values to data node positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardingStrategy {
    column: ColumnName,
    algorithm: ShardingAlgorithm,
}

impl ShardingStrategy {
    pub fn new(column: ColumnName, algorithm: ShardingAlgorithm) -> Self {
        Self { column, algorithm }
    }

    pub fn column(&self) -> &ColumnName {
        &self.column
    }

    /// Evaluates the statement's shard-key conditions against `node_count`
    /// data nodes and returns the matching node positions in ascending order.
    ///
    /// Conditions on other columns are ignored; absence of any condition on
    /// the strategy column means every node matches (the caller decides
    /// whether that degenerates to a broadcast).
    pub fn matching_node_positions(
        &self,
        conditions: &[ShardingCondition],
        node_count: usize,
    ) -> Vec<usize> {
        debug_assert!(node_count > 0, "table rule without data nodes");
        let values: Vec<i64> = conditions
            .iter()
            .filter(|c| c.column == self.column)
            .flat_map(|c| c.values.iter().copied())
            .collect();
        if values.is_empty() {
            return (0..node_count).collect();
        }
        let mut positions: Vec<usize> = values
            .into_iter()
            .map(|value| match self.algorithm {
                ShardingAlgorithm::Mod => (value.rem_euclid(node_count as i64)) as usize,
            })
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> ShardingStrategy {
        ShardingStrategy::new(ColumnName::new("user_id"), ShardingAlgorithm::Mod)
    }

    fn condition(column: &str, values: Vec<i64>) -> ShardingCondition {
        ShardingCondition {
            column: ColumnName::new(column),
            values,
        }
    }

    #[test]
    fn test_mod_selects_single_node() {
        let positions = strategy().matching_node_positions(&[condition("user_id", vec![5])], 4);
        assert_eq!(positions, vec![1]);
    }

    #[test]
    fn test_in_values_deduplicate() {
        let positions =
            strategy().matching_node_positions(&[condition("user_id", vec![1, 5, 9])], 4);
        assert_eq!(positions, vec![1]);
    }

    #[test]
    fn test_unrelated_condition_matches_all_nodes() {
        let positions = strategy().matching_node_positions(&[condition("status", vec![2])], 3);
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_negative_values_stay_in_range() {
        let positions = strategy().matching_node_positions(&[condition("user_id", vec![-3])], 4);
        assert_eq!(positions, vec![1]);
    }
}
