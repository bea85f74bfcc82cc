//! Product operation methods
//!
//! Checking off, adding, and deleting products. State changes are applied
//! to the model first; the matching store write follows over the service
//! channel, and a failed write is surfaced by the response handler.

use crate::logic;
use crate::services::store::StoreRequest;
use crate::App;

impl App {
    /// Flip the checked flag of the selected product
    pub fn toggle_selected_checked(&mut self) {
        if let Some((product_id, checked)) = self.model.toggle_selected_checked() {
            self.send(StoreRequest::SetChecked {
                product_id,
                checked,
            });
        }
    }

    /// Open the add-product popup
    pub fn open_add_product(&mut self) {
        self.model.ui.new_product_input = Some(String::new());
    }

    /// Parse and submit the add-product entry line
    ///
    /// An unparsable line keeps the popup open so the user can fix it.
    pub fn submit_new_product(&mut self) {
        let Some(line) = self.model.ui.new_product_input.clone() else {
            return;
        };

        match logic::input::parse_product_entry(&line) {
            Some(entry) => {
                self.model.ui.new_product_input = None;
                self.send(StoreRequest::AddProduct {
                    list_id: self.model.shopping.list_id,
                    name: entry.name,
                    quantity: entry.quantity,
                    price_cents: entry.price_cents,
                });
            }
            None => {
                self.model
                    .show_toast("Error: could not read product entry".to_string());
            }
        }
    }

    /// Ask for confirmation before deleting all checked products
    pub fn confirm_delete_checked(&mut self) {
        if self.model.shopping.products.iter().any(|p| p.checked) {
            self.model.ui.confirm_delete_checked = true;
        } else {
            self.model.show_toast("No checked products".to_string());
        }
    }

    /// Delete all checked products after confirmation
    pub fn delete_checked(&mut self) {
        self.model.ui.confirm_delete_checked = false;
        self.send(StoreRequest::DeleteChecked {
            list_id: self.model.shopping.list_id,
        });
    }

    /// Toggle the move-checked-to-end preference for this session
    pub fn toggle_move_preference(&mut self) {
        self.model.ui.move_checked_to_end = !self.model.ui.move_checked_to_end;
        if self.model.ui.move_checked_to_end {
            self.model.regroup_checked();
            self.model.show_toast("Checked products move to the end".to_string());
        } else {
            // Positions settle back on the next reload
            self.model.show_toast("Checked products stay in place".to_string());
        }
    }
}
