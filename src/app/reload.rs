//! Reload orchestration
//!
//! A full reload issues two independent fetches, list details and
//! products, and joins them in the model before anything is re-rendered.
//! The store service answers them in no particular order.

use crate::services::store::StoreRequest;
use crate::App;

impl App {
    /// Re-fetch list details and products
    pub fn request_reload(&mut self) {
        let list_id = self.model.shopping.list_id;
        self.model.shopping.pending_reload.begin();

        self.send(StoreRequest::GetListDetails { list_id });
        self.send(StoreRequest::GetProducts { list_id });
    }

    /// Complete the reload once both fetches have answered
    pub(crate) fn try_finish_reload(&mut self) {
        if let Some((list, products)) = self.model.shopping.pending_reload.take_complete() {
            self.model.finish_reload(list, products);
        }
    }
}
