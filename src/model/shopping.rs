//! Shopping Model
//!
//! This sub-model contains the list data: list details, the product
//! sequence in display order, computed totals, and the reload join state.

use crate::logic::totals::Totals;
use crate::store::{ListDetails, Product};

/// Join point for the two independent reload fetches
///
/// A reload requests list details and products together, but the store
/// service answers each independently and in no guaranteed order. The
/// reload completes only once both halves have arrived.
#[derive(Debug, Clone, Default)]
pub struct PendingReload {
    list: Option<ListDetails>,
    products: Option<Vec<Product>>,
    in_flight: bool,
}

impl PendingReload {
    /// Start a fresh join, dropping any half-finished one
    pub fn begin(&mut self) {
        self.list = None;
        self.products = None;
        self.in_flight = true;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn record_list(&mut self, list: ListDetails) {
        if self.in_flight {
            self.list = Some(list);
        }
    }

    pub fn record_products(&mut self, products: Vec<Product>) {
        if self.in_flight {
            self.products = Some(products);
        }
    }

    /// Take both halves once present; None while the join is incomplete
    pub fn take_complete(&mut self) -> Option<(ListDetails, Vec<Product>)> {
        if !self.in_flight || self.list.is_none() || self.products.is_none() {
            return None;
        }

        self.in_flight = false;
        self.list.take().zip(self.products.take())
    }
}

/// List data for the one open shopping list
#[derive(Debug, Clone)]
pub struct ShoppingModel {
    /// Identity of the open list
    pub list_id: i64,

    /// List details once fetched (name, persisted sort selection)
    pub list: Option<ListDetails>,

    /// Products in display order
    pub products: Vec<Product>,

    /// Monetary totals over `products`
    pub totals: Totals,

    /// Reload join state
    pub pending_reload: PendingReload,

    /// At least one reload has completed; gates the empty-state panel
    pub loaded: bool,
}

impl ShoppingModel {
    pub fn new(list_id: i64) -> Self {
        Self {
            list_id,
            list: None,
            products: Vec::new(),
            totals: Totals::default(),
            pending_reload: PendingReload::default(),
            loaded: false,
        }
    }

    pub fn product_mut(&mut self, product_id: i64) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == product_id)
    }

    /// List name for the title bar, before details arrive an empty string
    pub fn list_name(&self) -> &str {
        self.list.as_ref().map(|l| l.name.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SortCriteria;

    fn make_list() -> ListDetails {
        ListDetails {
            id: 1,
            name: "groceries".to_string(),
            sort_by: SortCriteria::Name,
            sort_ascending: true,
        }
    }

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
    fn test_pending_reload_completes_in_either_order() {
        let mut first = PendingReload::default();
        first.begin();
        first.record_list(make_list());
        assert!(first.take_complete().is_none());
        first.record_products(vec![make_product(1, "milk")]);
        let (list_a, products_a) = first.take_complete().unwrap();

        let mut second = PendingReload::default();
        second.begin();
        second.record_products(vec![make_product(1, "milk")]);
        assert!(second.take_complete().is_none());
        second.record_list(make_list());
        let (list_b, products_b) = second.take_complete().unwrap();

        assert_eq!(list_a, list_b);
        assert_eq!(products_a, products_b);
    }

    #[test]
    fn test_pending_reload_completes_only_once() {
        let mut pending = PendingReload::default();
        pending.begin();
        pending.record_list(make_list());
        pending.record_products(vec![]);

        assert!(pending.take_complete().is_some());
        assert!(pending.take_complete().is_none());
        assert!(!pending.in_flight());
    }

    #[test]
    fn test_pending_reload_ignores_responses_when_idle() {
        let mut pending = PendingReload::default();
        pending.record_list(make_list());
        pending.record_products(vec![]);

        // Nothing was requested, so stale responses never complete a join
        assert!(pending.take_complete().is_none());
    }

    #[test]
    fn test_begin_drops_half_finished_join() {
        let mut pending = PendingReload::default();
        pending.begin();
        pending.record_list(make_list());

        pending.begin();
        pending.record_products(vec![]);

        // The list half belonged to the abandoned join
        assert!(pending.take_complete().is_none());
    }

    #[test]
    fn test_product_mut_finds_by_id() {
        let mut model = ShoppingModel::new(1);
        model.products = vec![make_product(1, "milk"), make_product(2, "bread")];

        model.product_mut(2).unwrap().checked = true;
        assert!(model.products[1].checked);
        assert!(model.product_mut(99).is_none());
    }

    #[test]
    fn test_list_name_defaults_to_empty() {
        let mut model = ShoppingModel::new(1);
        assert_eq!(model.list_name(), "");

        model.list = Some(make_list());
        assert_eq!(model.list_name(), "groceries");
    }
}
