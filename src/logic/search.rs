//! Product search logic
//!
//! Case-insensitive substring filtering over product names. Queries
//! shorter than the minimum length match everything, so the list does not
//! flicker empty on the first keystroke.

use crate::store::Product;

/// Queries below this length are ignored
pub const MIN_QUERY_LEN: usize = 2;

/// Whether a product matches the search query
pub fn matches_query(product: &Product, query: &str) -> bool {
    if query.len() < MIN_QUERY_LEN {
        return true;
    }

    product
        .name
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Filter a product sequence by the search query, preserving order
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|product| matches_query(product, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: i64, name: &str) -> Product {
        Product {
            id,
            list_id: 1,
            name: name.to_string(),
            quantity: 1,
            price_cents: 100,
            checked: false,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_short_query_matches_everything() {
        let product = make_product(1, "milk");
        assert!(matches_query(&product, ""));
        assert!(matches_query(&product, "z"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let product = make_product(1, "Whole Milk");
        assert!(matches_query(&product, "milk"));
        assert!(matches_query(&product, "WHOLE"));
        assert!(!matches_query(&product, "bread"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let products = vec![
            make_product(1, "oat milk"),
            make_product(2, "bread"),
            make_product(3, "milk chocolate"),
        ];

        let filtered = filter_products(&products, "milk");
        let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_no_matches() {
        let products = vec![make_product(1, "bread")];
        assert!(filter_products(&products, "milk").is_empty());
    }
}
