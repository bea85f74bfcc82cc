//! Pure Application Model
//!
//! This module defines the pure, cloneable state for the application,
//! organized into focused sub-models:
//!
//! - **ShoppingModel**: List details, products, totals, reload join
//! - **NavigationModel**: Selection and scroll offset
//! - **UiModel**: Preferences, popups, search
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the App/service layer
//! - State transitions shared by several entry points live here as
//!   side-effect-free methods, so they can be unit tested directly

pub mod navigation;
pub mod shopping;
pub mod ui;

pub use navigation::NavigationModel;
pub use shopping::{PendingReload, ShoppingModel};
pub use ui::UiModel;

use crate::logic;
use crate::store::{ListDetails, Product};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// List data (details, products, totals)
    pub shopping: ShoppingModel,

    /// Selection and viewport state
    pub navigation: NavigationModel,

    /// UI preferences and popups
    pub ui: UiModel,
}

impl Model {
    /// Create initial model for one list
    pub fn new(list_id: i64, move_checked_to_end: bool) -> Self {
        Self {
            shopping: ShoppingModel::new(list_id),
            navigation: NavigationModel::new(),
            ui: UiModel::new(move_checked_to_end),
        }
    }

    /// The product sequence as displayed: search filter applied, order kept
    pub fn visible_products(&self) -> Vec<Product> {
        logic::search::filter_products(&self.shopping.products, &self.ui.search_query)
    }

    /// The currently selected product, if any
    pub fn visible_selected(&self) -> Option<Product> {
        let visible = self.visible_products();
        self.navigation.selected.and_then(|idx| visible.get(idx).cloned())
    }

    /// Check if any modal popup is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Complete a reload with both fetch results
    ///
    /// Sorts by the list's persisted criteria, regroups checked products
    /// at the end when the preference is on, recomputes totals, and clamps
    /// the selection to the new visible length.
    pub fn finish_reload(&mut self, list: ListDetails, mut products: Vec<Product>) {
        products.sort_by(|a, b| {
            logic::sorting::compare_products(a, b, list.sort_by, list.sort_ascending)
        });

        if self.ui.move_checked_to_end {
            products = logic::reorder::move_checked_to_end(&products);
        }

        self.shopping.totals = logic::totals::compute_totals(&products);
        self.shopping.products = products;
        self.shopping.list = Some(list);
        self.shopping.loaded = true;

        let visible_len = self.visible_products().len();
        self.navigation.selected =
            logic::navigation::clamp_selection(self.navigation.selected, visible_len);
    }

    /// Flip the checked flag of the selected product
    ///
    /// Returns the product id and its new checked state for the store
    /// write, or None when nothing is selected. With the move preference
    /// on, the product is regrouped and the selection follows it to its
    /// new index. A move that started at the first visible row instead
    /// forces the view back to position 0, because following the item
    /// would leave the viewport at the destination instead of the origin.
    pub fn toggle_selected_checked(&mut self) -> Option<(i64, bool)> {
        let product = self.visible_selected()?;
        let checked = !product.checked;
        let before_visible = self.visible_products();

        if let Some(stored) = self.shopping.product_mut(product.id) {
            stored.checked = checked;
        }

        if self.ui.move_checked_to_end {
            self.shopping.products = logic::reorder::move_checked_to_end(&self.shopping.products);

            let after_visible = self.visible_products();
            if let Some(mv) =
                logic::reorder::plan_item_move(&before_visible, &after_visible, product.id)
            {
                if mv.rescroll_to_top {
                    self.navigation.selected = Some(0);
                    self.navigation.rescroll_to_top();
                } else {
                    self.navigation.selected = Some(mv.to);
                }
            }
        }

        self.shopping.totals = logic::totals::compute_totals(&self.shopping.products);
        Some((product.id, checked))
    }

    /// Re-sort the products by the list's current sort selection
    ///
    /// The selection stays on the same product where possible, falling
    /// back to the first row.
    pub fn apply_sort(&mut self) {
        let Some(list) = self.shopping.list.clone() else {
            return;
        };
        let selected_id = self.visible_selected().map(|p| p.id);

        self.shopping
            .products
            .sort_by(|a, b| logic::sorting::compare_products(a, b, list.sort_by, list.sort_ascending));

        if self.ui.move_checked_to_end {
            self.shopping.products = logic::reorder::move_checked_to_end(&self.shopping.products);
        }

        let visible = self.visible_products();
        self.navigation.selected = if visible.is_empty() {
            None
        } else {
            selected_id
                .and_then(|id| visible.iter().position(|p| p.id == id))
                .or(Some(0)) // Default to first item if not found
        };
    }

    /// Regroup checked products now, e.g. after the preference was enabled
    pub fn regroup_checked(&mut self) {
        let selected_id = self.visible_selected().map(|p| p.id);
        self.shopping.products = logic::reorder::move_checked_to_end(&self.shopping.products);

        let visible = self.visible_products();
        self.navigation.selected = selected_id
            .and_then(|id| visible.iter().position(|p| p.id == id))
            .or(logic::navigation::clamp_selection(None, visible.len()));
    }
}
