//! List totals
//!
//! Pure functions for computing the monetary totals shown below the list.

use crate::store::Product;

/// Monetary totals over one product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of quantity × price over all products, in cents
    pub total_cents: i64,
    /// Same sum restricted to checked products
    pub checked_cents: i64,
}

impl Totals {
    /// The totals bar is hidden when there is nothing to show
    pub fn is_zero(&self) -> bool {
        self.total_cents == 0 && self.checked_cents == 0
    }
}

/// Compute both totals in one pass
pub fn compute_totals(products: &[Product]) -> Totals {
    let mut totals = Totals::default();

    for product in products {
        let line_total = product.quantity * product.price_cents;
        totals.total_cents += line_total;
        if product.checked {
            totals.checked_cents += line_total;
        }
    }

    totals
}

/// Format cents as a price string, e.g. `format_money(1234, "€")` → `"12.34 €"`
pub fn format_money(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}{}.{:02} {}", sign, cents / 100, cents % 100, currency)
}
