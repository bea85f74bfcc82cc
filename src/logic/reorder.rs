//! Checked-product reordering
//!
//! Pure functions for grouping checked products at the end of the list.
//! The partition is stable: products that share a checked flag never swap
//! relative to each other, so the list stays visually calm when a single
//! item is ticked off.

use crate::store::Product;

/// A single product's position change across one reorder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemMove {
    pub from: usize,
    pub to: usize,
    /// The viewport must be forced back to the top after applying the move.
    /// Moving the first row leaves the view scrolled to the destination
    /// otherwise.
    pub rescroll_to_top: bool,
}

/// Stable two-way partition: unchecked products first, checked products
/// last, both groups in their original relative order
///
/// Returns a new sequence; the input is never mutated. Empty input and
/// uniformly-flagged input come back in their original order.
pub fn move_checked_to_end(products: &[Product]) -> Vec<Product> {
    let (unchecked, checked): (Vec<Product>, Vec<Product>) =
        products.iter().cloned().partition(|product| !product.checked);

    let mut result = unchecked;
    result.extend(checked);
    result
}

/// Locate one product's index before and after a reorder
///
/// # Arguments
/// * `before` - Sequence as displayed prior to the reorder
/// * `after` - Sequence produced by [`move_checked_to_end`]
/// * `product_id` - The product whose move is being tracked
///
/// # Returns
/// * `Some(ItemMove)` - Old and new index, plus whether the view needs to
///   be scrolled back to position 0
/// * `None` - The product is absent from either sequence
pub fn plan_item_move(before: &[Product], after: &[Product], product_id: i64) -> Option<ItemMove> {
    let from = before.iter().position(|p| p.id == product_id)?;
    let to = after.iter().position(|p| p.id == product_id)?;

    Some(ItemMove {
        from,
        to,
        rescroll_to_top: from == 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: i64, name: &str, checked: bool) -> Product {
        Product {
            id,
            list_id: 1,
            name: name.to_string(),
            quantity: 1,
            price_cents: 100,
            checked,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_unchecked_before_checked_with_stable_order() {
        let input = vec![
            make_product(1, "a", false),
            make_product(2, "b", true),
            make_product(3, "c", false),
            make_product(4, "d", true),
        ];

        let output = move_checked_to_end(&input);
        assert_eq!(names(&output), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(move_checked_to_end(&[]).is_empty());
    }

    #[test]
    fn test_all_checked_order_unchanged() {
        let input = vec![
            make_product(1, "a", true),
            make_product(2, "b", true),
            make_product(3, "c", true),
        ];

        let output = move_checked_to_end(&input);
        assert_eq!(names(&output), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_all_unchecked_order_unchanged() {
        let input = vec![
            make_product(1, "a", false),
            make_product(2, "b", false),
        ];

        let output = move_checked_to_end(&input);
        assert_eq!(names(&output), vec!["a", "b"]);
    }

    #[test]
    fn test_length_and_items_preserved() {
        let input = vec![
            make_product(1, "a", true),
            make_product(2, "b", false),
            make_product(3, "c", true),
            make_product(4, "d", false),
            make_product(5, "e", true),
        ];

        let output = move_checked_to_end(&input);
        assert_eq!(output.len(), input.len());

        let mut input_ids: Vec<i64> = input.iter().map(|p| p.id).collect();
        let mut output_ids: Vec<i64> = output.iter().map(|p| p.id).collect();
        input_ids.sort_unstable();
        output_ids.sort_unstable();
        assert_eq!(input_ids, output_ids);
    }

    #[test]
    fn test_products_not_mutated_only_moved() {
        let input = vec![make_product(1, "a", true), make_product(2, "b", false)];

        let output = move_checked_to_end(&input);
        assert_eq!(output[0], input[1]);
        assert_eq!(output[1], input[0]);
    }

    #[test]
    fn test_idempotent_once_partitioned() {
        let input = vec![
            make_product(1, "a", true),
            make_product(2, "b", false),
            make_product(3, "c", true),
            make_product(4, "d", false),
        ];

        let once = move_checked_to_end(&input);
        let twice = move_checked_to_end(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_plan_item_move_tracks_indices() {
        let before = vec![
            make_product(1, "a", false),
            make_product(2, "b", true),
            make_product(3, "c", false),
        ];
        let after = move_checked_to_end(&before);

        let mv = plan_item_move(&before, &after, 2).unwrap();
        assert_eq!(mv.from, 1);
        assert_eq!(mv.to, 2);
        assert!(!mv.rescroll_to_top);
    }

    #[test]
    fn test_plan_item_move_from_first_row_rescrolls() {
        let before = vec![
            make_product(1, "a", true),
            make_product(2, "b", false),
            make_product(3, "c", false),
        ];
        let after = move_checked_to_end(&before);

        let mv = plan_item_move(&before, &after, 1).unwrap();
        assert_eq!(mv.from, 0);
        assert_eq!(mv.to, 2);
        assert!(mv.rescroll_to_top);
    }

    #[test]
    fn test_plan_item_move_unknown_product() {
        let before = vec![make_product(1, "a", false)];
        let after = move_checked_to_end(&before);

        assert_eq!(plan_item_move(&before, &after, 99), None);
    }

    #[test]
    fn test_plan_item_move_stationary_item() {
        let before = vec![
            make_product(1, "a", false),
            make_product(2, "b", true),
        ];
        let after = move_checked_to_end(&before);

        let mv = plan_item_move(&before, &after, 1).unwrap();
        assert_eq!(mv.from, 0);
        assert_eq!(mv.to, 0);
    }
}
