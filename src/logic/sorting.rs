//! Sorting comparison logic
//!
//! Pure functions for comparing products across the persisted sort criteria.

use crate::store::Product;
use crate::SortCriteria;
use std::cmp::Ordering;

/// Compare two products according to the given sort criteria
///
/// # Arguments
/// * `a` - First product
/// * `b` - Second product
/// * `sort_by` - Which attribute to sort by
/// * `ascending` - Whether to keep the natural direction
///
/// # Sort Rules
/// - Name comparison is case-insensitive
/// - Quantity, price, and creation time tie-break on the name
pub fn compare_products(
    a: &Product,
    b: &Product,
    sort_by: SortCriteria,
    ascending: bool,
) -> Ordering {
    let result = match sort_by {
        SortCriteria::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortCriteria::Quantity => a
            .quantity
            .cmp(&b.quantity)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortCriteria::Price => a
            .price_cents
            .cmp(&b.price_cents)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortCriteria::Created => {
            // RFC 3339 timestamps compare correctly as strings
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
    };

    if ascending {
        result
    } else {
        result.reverse()
    }
}
