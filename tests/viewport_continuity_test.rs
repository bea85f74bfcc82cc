//! Tests for viewport continuity when checking products off
//!
//! Checking a product regroups it at the end of the list. The selection
//! normally rides along to the product's new index; checking the *first*
//! row instead snaps the view back to position 0, because following the
//! item would leave the viewport at the destination rather than showing
//! the origin the user was working at.

use shoptui::model::Model;
use shoptui::store::{ListDetails, Product};
use shoptui::SortCriteria;

fn make_list() -> ListDetails {
    ListDetails {
        id: 1,
        name: "Groceries".to_string(),
        sort_by: SortCriteria::Name,
        sort_ascending: true,
    }
}

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

fn loaded_model(move_checked_to_end: bool, products: Vec<Product>) -> Model {
    let mut model = Model::new(1, move_checked_to_end);
    model.finish_reload(make_list(), products);
    model
}

fn visible_names(model: &Model) -> Vec<String> {
    model.visible_products().iter().map(|p| p.name.clone()).collect()
}

#[test]
fn test_checking_middle_row_moves_item_and_selection_to_end() {
    let mut model = loaded_model(
        true,
        vec![
            make_product(1, "apples", false),
            make_product(2, "bread", false),
            make_product(3, "milk", false),
        ],
    );
    model.navigation.selected = Some(1);

    let (id, checked) = model.toggle_selected_checked().unwrap();

    assert_eq!((id, checked), (2, true));
    assert_eq!(visible_names(&model), vec!["apples", "milk", "bread"]);
    assert_eq!(model.navigation.selected, Some(2));
}

#[test]
fn test_checking_first_row_snaps_view_back_to_top() {
    let mut model = loaded_model(
        true,
        vec![
            make_product(1, "apples", false),
            make_product(2, "bread", false),
            make_product(3, "milk", false),
        ],
    );
    model.navigation.selected = Some(0);
    model.navigation.offset = 2; // viewport scrolled down from earlier work

    model.toggle_selected_checked().unwrap();

    assert_eq!(visible_names(&model), vec!["bread", "milk", "apples"]);
    assert_eq!(model.navigation.selected, Some(0));
    assert_eq!(model.navigation.offset, 0);
}

#[test]
fn test_unchecking_regroups_into_unchecked_block() {
    let mut model = loaded_model(
        true,
        vec![
            make_product(1, "apples", false),
            make_product(2, "bread", true),
            make_product(3, "milk", true),
        ],
    );
    // Reload grouped them as [apples, bread, milk]; select "milk"
    model.navigation.selected = Some(2);

    let (id, checked) = model.toggle_selected_checked().unwrap();

    assert_eq!((id, checked), (3, false));
    assert_eq!(visible_names(&model), vec!["apples", "milk", "bread"]);
    assert_eq!(model.navigation.selected, Some(1));
}

#[test]
fn test_move_preference_off_keeps_positions() {
    let mut model = loaded_model(
        false,
        vec![
            make_product(1, "apples", false),
            make_product(2, "bread", false),
        ],
    );
    model.navigation.selected = Some(0);
    model.navigation.offset = 1;

    let (id, checked) = model.toggle_selected_checked().unwrap();

    assert_eq!((id, checked), (1, true));
    assert_eq!(visible_names(&model), vec!["apples", "bread"]);
    assert_eq!(model.navigation.selected, Some(0));
    assert_eq!(model.navigation.offset, 1);
}

#[test]
fn test_checking_under_search_filter_moves_the_right_product() {
    let mut model = loaded_model(
        true,
        vec![
            make_product(1, "bread", false),
            make_product(2, "oat milk", false),
            make_product(3, "whole milk", false),
        ],
    );
    model.ui.search_query = "milk".to_string();
    model.navigation.selected = Some(0); // "oat milk" in the filtered view

    let (id, checked) = model.toggle_selected_checked().unwrap();

    assert_eq!((id, checked), (2, true));
    // Filtered view: the checked product regrouped behind the other match
    assert_eq!(visible_names(&model), vec!["whole milk", "oat milk"]);
    // Unfiltered sequence keeps unchecked products in front
    let full: Vec<&str> = model.shopping.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(full, vec!["bread", "whole milk", "oat milk"]);
}

#[test]
fn test_checking_keeps_totals_in_sync() {
    let mut model = loaded_model(
        true,
        vec![
            make_product(1, "apples", false),
            make_product(2, "bread", false),
        ],
    );
    assert_eq!(model.shopping.totals.checked_cents, 0);
    model.navigation.selected = Some(0);

    model.toggle_selected_checked().unwrap();
    assert_eq!(model.shopping.totals.checked_cents, 100);
    assert_eq!(model.shopping.totals.total_cents, 200);
}

#[test]
fn test_toggle_with_nothing_selected_is_a_no_op() {
    let mut model = loaded_model(true, vec![]);
    model.navigation.selected = None;

    assert!(model.toggle_selected_checked().is_none());
    assert!(model.shopping.products.is_empty());
}
