//! Store Response Handler
//!
//! Applies responses from the background store service to the model.
//! Fetch responses feed the reload join; a reload only completes once
//! both the list details and the product list have arrived, in whichever
//! order the service answers them. Write failures surface as toasts and,
//! where the model was changed optimistically, trigger a reload to
//! resynchronize.

use crate::services::store::StoreResponse;
use crate::utils::log_debug;
use crate::App;

/// Handle a store response from the background service
pub fn handle_store_response(app: &mut App, response: StoreResponse) {
    match response {
        StoreResponse::ListDetails { list_id, result } => match result {
            Ok(list) => {
                if list_id == app.model.shopping.list_id {
                    app.model.shopping.pending_reload.record_list(list);
                    app.try_finish_reload();
                }
            }
            Err(err) => show_error(app, "loading list", &err),
        },

        StoreResponse::Products { list_id, result } => match result {
            Ok(products) => {
                if list_id == app.model.shopping.list_id {
                    app.model.shopping.pending_reload.record_products(products);
                    app.try_finish_reload();
                }
            }
            Err(err) => show_error(app, "loading products", &err),
        },

        StoreResponse::CheckedSet { product_id, result } => {
            if let Err(err) = result {
                // The optimistic flip in the model no longer matches the
                // store; reload to resynchronize
                log_debug(&format!("set_checked({}) failed: {:#}", product_id, err));
                show_error(app, "saving checked state", &err);
                app.request_reload();
            }
        }

        StoreResponse::ProductAdded { list_id: _, result } => match result {
            Ok(product) => {
                app.model.show_toast(format!("Added {}", product.name));
                app.request_reload();
            }
            Err(err) => show_error(app, "adding product", &err),
        },

        StoreResponse::SortSet { list_id: _, result } => {
            if let Err(err) = result {
                show_error(app, "saving sort selection", &err);
            }
        }

        StoreResponse::CheckedDeleted { list_id: _, result } => match result {
            Ok(removed) => {
                let noun = if removed == 1 { "product" } else { "products" };
                app.model.show_toast(format!("Removed {} {}", removed, noun));
                app.request_reload();
            }
            Err(err) => show_error(app, "deleting checked products", &err),
        },
    }
}

fn show_error(app: &mut App, action: &str, err: &anyhow::Error) {
    app.model.show_toast(format!("Error: {} failed: {}", action, err));
}
