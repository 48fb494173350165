//! Routing output: the destinations a statement reaches.

use shardbridge_commons::{DataSourceName, TableName};

/// One logical-to-actual table substitution at a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableUnit {
    pub logic_table: TableName,
    pub actual_table: TableName,
}

impl TableUnit {
    pub fn new(logic_table: impl Into<TableName>, actual_table: impl Into<TableName>) -> Self {
        Self {
            logic_table: logic_table.into(),
            actual_table: actual_table.into(),
        }
    }

    /// The actual table for a logical name, if this unit covers it.
    pub fn actual_for(&self, logic_table: &TableName) -> Option<&TableName> {
        (&self.logic_table == logic_table).then_some(&self.actual_table)
    }
}

/// One physical destination plus its table substitutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteUnit {
    pub data_source: DataSourceName,
    pub table_units: Vec<TableUnit>,
}

impl RouteUnit {
    pub fn new(data_source: impl Into<DataSourceName>) -> Self {
        Self {
            data_source: data_source.into(),
            table_units: Vec::new(),
        }
    }

    pub fn with_table_unit(mut self, unit: TableUnit) -> Self {
        self.table_units.push(unit);
        self
    }

    /// The actual table this unit substitutes for `logic_table`, if any.
    pub fn actual_table(&self, logic_table: &TableName) -> Option<&TableName> {
        self.table_units
            .iter()
            .find_map(|unit| unit.actual_for(logic_table))
    }
}

/// The full routing decision for one statement.
///
/// Unit order is deterministic: it follows the declared data node order of
/// each table rule, and is identical across repeated calls on the same
/// inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteResult {
    route_units: Vec<RouteUnit>,
}

impl RouteResult {
    pub fn new(route_units: Vec<RouteUnit>) -> Self {
        Self { route_units }
    }

    pub fn push(&mut self, unit: RouteUnit) {
        self.route_units.push(unit);
    }

    pub fn extend(&mut self, units: impl IntoIterator<Item = RouteUnit>) {
        self.route_units.extend(units);
    }

    pub fn route_units(&self) -> &[RouteUnit] {
        &self.route_units
    }

    pub fn len(&self) -> usize {
        self.route_units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route_units.is_empty()
    }

    /// Merges another unit into an existing unit for the same data source,
    /// or appends it. Used by complex routing when several tables route to
    /// one destination.
    pub fn merge(&mut self, unit: RouteUnit) {
        if let Some(existing) = self
            .route_units
            .iter_mut()
            .find(|u| u.data_source == unit.data_source)
        {
            for table_unit in unit.table_units {
                if !existing.table_units.contains(&table_unit) {
                    existing.table_units.push(table_unit);
                }
            }
        } else {
            self.route_units.push(unit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_groups_by_data_source() {
        let mut result = RouteResult::default();
        result.merge(RouteUnit::new("ds0").with_table_unit(TableUnit::new("t_order", "t_order_0")));
        result.merge(
            RouteUnit::new("ds0").with_table_unit(TableUnit::new("t_order_item", "t_order_item_0")),
        );
        result.merge(RouteUnit::new("ds1").with_table_unit(TableUnit::new("t_order", "t_order_1")));

        assert_eq!(result.len(), 2);
        assert_eq!(result.route_units()[0].table_units.len(), 2);
        assert_eq!(
            result.route_units()[0]
                .actual_table(&TableName::new("t_order_item"))
                .unwrap()
                .as_str(),
            "t_order_item_0"
        );
    }
}
