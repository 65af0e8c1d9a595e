//! Menu Filtering
//!
//! Derives the visible slice of the menu from the search text and the
//! category chip. Pure functions, recomputed per gesture; an empty
//! result is a normal value, never an error.

use crate::item::MenuItem;

/// Category chip selection ("Tất cả" maps to `All`)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

/// Search text plus category selection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuFilter {
    pub query: String,
    pub category: CategoryFilter,
}

/// Items passing both the category chip and the search text, in menu
/// order. Matching is case-insensitive over name and description; the
/// query is trimmed first, so a whitespace-only query matches everything.
pub fn visible_items(menu: &[MenuItem], filter: &MenuFilter) -> Vec<MenuItem> {
    let query = filter.query.trim().to_lowercase();
    menu.iter()
        .filter(|item| match &filter.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(tag) => item.category == *tag,
        })
        .filter(|item| {
            query.is_empty()
                || item.name.to_lowercase().contains(&query)
                || item.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Distinct categories in first-appearance order, for the chip row
pub fn categories(menu: &[MenuItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in menu {
        if !seen.contains(&item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str, category: &str, description: &str) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            price: 10000 * id,
            category: category.to_string(),
            image: format!("https://example.com/{}.jpg", id),
            description: description.to_string(),
        }
    }

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            make_item(1, "Phở bò", "Món chính", "Phở bò thơm ngon đặc trưng"),
            make_item(2, "Cơm tấm", "Món chính", "Cơm tấm sườn bì chả"),
            make_item(3, "Gỏi cuốn", "Khai vị", "Gỏi cuốn tôm thịt"),
            make_item(4, "Cà phê sữa đá", "Đồ uống", "Cà phê sữa đá truyền thống"),
            make_item(5, "Trà đào", "Đồ uống", "Trà đào cam sả"),
        ]
    }

    #[test]
    fn test_default_filter_keeps_menu_order() {
        let menu = sample_menu();
        let visible = visible_items(&menu, &MenuFilter::default());

        assert_eq!(visible.len(), 5);
        let ids: Vec<u32> = visible.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_category_chip_narrows() {
        let menu = sample_menu();
        let filter = MenuFilter {
            query: String::new(),
            category: CategoryFilter::Only("Khai vị".to_string()),
        };

        let visible = visible_items(&menu, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Gỏi cuốn");
    }

    #[test]
    fn test_search_matches_name_case_insensitive() {
        let menu = sample_menu();
        let filter = MenuFilter {
            query: "TRÀ".to_string(),
            category: CategoryFilter::All,
        };

        let visible = visible_items(&menu, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 5);
    }

    #[test]
    fn test_search_matches_description_too() {
        let menu = sample_menu();
        let filter = MenuFilter {
            query: "cam sả".to_string(),
            category: CategoryFilter::All,
        };

        // "cam sả" appears only in the Trà đào description
        let visible = visible_items(&menu, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Trà đào");
    }

    #[test]
    fn test_search_and_category_combine() {
        let menu = sample_menu();

        // Same single match whichever way the query is cased
        for query in ["trà", "TRÀ"] {
            let filter = MenuFilter {
                query: query.to_string(),
                category: CategoryFilter::Only("Đồ uống".to_string()),
            };

            let visible = visible_items(&menu, &filter);
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0].id, 5);
        }
    }

    #[test]
    fn test_query_is_trimmed_before_matching() {
        let menu = sample_menu();
        let filter = MenuFilter {
            query: "  phở  ".to_string(),
            category: CategoryFilter::All,
        };

        let visible = visible_items(&menu, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_whitespace_only_query_matches_all() {
        let menu = sample_menu();
        let filter = MenuFilter {
            query: "   ".to_string(),
            category: CategoryFilter::All,
        };

        assert_eq!(visible_items(&menu, &filter).len(), 5);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let menu = sample_menu();
        let filter = MenuFilter {
            query: "pizza".to_string(),
            category: CategoryFilter::All,
        };

        assert!(visible_items(&menu, &filter).is_empty());
    }

    #[test]
    fn test_empty_menu_is_empty() {
        assert!(visible_items(&[], &MenuFilter::default()).is_empty());
    }

    #[test]
    fn test_categories_dedupe_in_menu_order() {
        let menu = sample_menu();
        assert_eq!(categories(&menu), vec!["Món chính", "Khai vị", "Đồ uống"]);
    }
}
