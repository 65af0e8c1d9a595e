//! Static Catalog
//!
//! The menu and the table plan ship embedded as JSON. Parsing happens
//! once at startup; swapping either file for a backend fetch would not
//! touch the cart or filter logic.

use crate::models::Table;
use order_cart::MenuItem;

const MENU_JSON: &str = include_str!("../data/menu.json");
const TABLES_JSON: &str = include_str!("../data/tables.json");

/// Parse the embedded menu
pub fn load_menu() -> Result<Vec<MenuItem>, String> {
    serde_json::from_str(MENU_JSON).map_err(|e| e.to_string())
}

/// Parse the embedded table plan
pub fn load_tables() -> Result<Vec<Table>, String> {
    serde_json::from_str(TABLES_JSON).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TableStatus;

    #[test]
    fn test_menu_data_parses() {
        let menu = load_menu().unwrap();

        assert_eq!(menu.len(), 5);
        assert_eq!(menu[0].name, "Phở bò");
        assert_eq!(menu[0].price, 45000);
        assert_eq!(menu[0].category, "Món chính");
        // Every item carries an image and a description
        assert!(menu.iter().all(|item| !item.image.is_empty()));
        assert!(menu.iter().all(|item| !item.description.is_empty()));
    }

    #[test]
    fn test_table_data_parses() {
        let tables = load_tables().unwrap();

        assert_eq!(tables.len(), 12);
        assert_eq!(tables[0].name, "Bàn 1");
        assert_eq!(tables[1].status, TableStatus::Occupied);
        assert_eq!(tables[2].status, TableStatus::Reserved);
        assert_eq!(tables[5].status, TableStatus::Occupied);
        assert_eq!(
            tables
                .iter()
                .filter(|t| t.status == TableStatus::Available)
                .count(),
            9
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let menu = load_menu().unwrap();
        let tables = load_tables().unwrap();

        for (i, item) in menu.iter().enumerate() {
            assert!(menu.iter().skip(i + 1).all(|other| other.id != item.id));
        }
        for (i, table) in tables.iter().enumerate() {
            assert!(tables.iter().skip(i + 1).all(|other| other.id != table.id));
        }
    }
}
