//! Table Filtering
//!
//! Status chip filtering for the table grid.

use crate::models::{Table, TableStatus};

/// Chip selection on the table screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStatusFilter {
    #[default]
    All,
    Of(TableStatus),
}

/// Tables matching the selected chip, in floor-plan order
pub fn filter_by_status(tables: &[Table], filter: TableStatusFilter) -> Vec<Table> {
    match filter {
        TableStatusFilter::All => tables.to_vec(),
        TableStatusFilter::Of(status) => tables
            .iter()
            .filter(|table| table.status == status)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(id: u32, status: TableStatus) -> Table {
        Table {
            id,
            name: format!("Bàn {}", id),
            status,
        }
    }

    fn sample_tables() -> Vec<Table> {
        vec![
            make_table(1, TableStatus::Available),
            make_table(2, TableStatus::Occupied),
            make_table(3, TableStatus::Reserved),
            make_table(4, TableStatus::Available),
        ]
    }

    #[test]
    fn test_all_keeps_every_table_in_order() {
        let tables = sample_tables();
        let visible = filter_by_status(&tables, TableStatusFilter::All);

        assert_eq!(visible, tables);
    }

    #[test]
    fn test_status_chip_narrows() {
        let tables = sample_tables();
        let visible = filter_by_status(&tables, TableStatusFilter::Of(TableStatus::Available));

        let ids: Vec<u32> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let tables = vec![make_table(1, TableStatus::Available)];
        let visible = filter_by_status(&tables, TableStatusFilter::Of(TableStatus::Reserved));

        assert!(visible.is_empty());
    }
}
