//! Sorting orchestration methods
//!
//! The sort selection lives on the list details and is persisted, so the
//! same order comes back on the next launch. Changing it re-sorts the
//! in-memory products immediately and writes the selection through the
//! store service.

use crate::logic;
use crate::services::store::StoreRequest;
use crate::App;

impl App {
    /// Advance to the next sort criteria
    pub fn cycle_sort_criteria(&mut self) {
        let Some(list) = self.model.shopping.list.as_mut() else {
            return;
        };

        list.sort_by = logic::ui::cycle_sort_criteria(list.sort_by);
        list.sort_ascending = true; // Reset direction when changing criteria
        self.persist_and_apply_sort();
    }

    /// Flip the sort direction
    pub fn toggle_sort_direction(&mut self) {
        let Some(list) = self.model.shopping.list.as_mut() else {
            return;
        };

        list.sort_ascending = !list.sort_ascending;
        self.persist_and_apply_sort();
    }

    fn persist_and_apply_sort(&mut self) {
        self.model.apply_sort();

        if let Some(list) = self.model.shopping.list.as_ref() {
            self.send(StoreRequest::SetSort {
                list_id: list.id,
                sort_by: list.sort_by,
                sort_ascending: list.sort_ascending,
            });
        }
    }
}
