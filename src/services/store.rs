//! Store service
//!
//! Runs the SQLite store on a blocking worker so the render loop never
//! waits on disk. Requests arrive over an unbounded channel and every one
//! is answered with a response carrying a `Result`; failures surface to
//! the screen instead of panicking the worker.

use tokio::sync::mpsc;

use crate::store::{ListDetails, Product, StoreDb};
use crate::utils::log_debug;
use crate::SortCriteria;

/// Store request types
#[derive(Debug, Clone)]
pub enum StoreRequest {
    /// Fetch list details (name, persisted sort selection)
    GetListDetails { list_id: i64 },

    /// Fetch all products of a list
    GetProducts { list_id: i64 },

    /// Persist one product's checked flag
    SetChecked { product_id: i64, checked: bool },

    /// Insert a new product
    AddProduct {
        list_id: i64,
        name: String,
        quantity: i64,
        price_cents: i64,
    },

    /// Persist the sort selection for a list
    SetSort {
        list_id: i64,
        sort_by: SortCriteria,
        sort_ascending: bool,
    },

    /// Remove every checked product of a list
    DeleteChecked { list_id: i64 },
}

/// Store response types
#[derive(Debug)]
pub enum StoreResponse {
    ListDetails {
        list_id: i64,
        result: Result<ListDetails, anyhow::Error>,
    },

    Products {
        list_id: i64,
        result: Result<Vec<Product>, anyhow::Error>,
    },

    CheckedSet {
        product_id: i64,
        result: Result<(), anyhow::Error>,
    },

    ProductAdded {
        list_id: i64,
        result: Result<Product, anyhow::Error>,
    },

    SortSet {
        list_id: i64,
        result: Result<(), anyhow::Error>,
    },

    CheckedDeleted {
        list_id: i64,
        result: Result<usize, anyhow::Error>,
    },
}

/// Spawn the store service worker
///
/// Returns the request sender and response receiver. The worker owns the
/// store and processes requests in order until the request channel closes.
pub fn spawn_store_service(
    db: StoreDb,
) -> (
    mpsc::UnboundedSender<StoreRequest>,
    mpsc::UnboundedReceiver<StoreResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<StoreRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<StoreResponse>();

    tokio::task::spawn_blocking(move || {
        while let Some(request) = request_rx.blocking_recv() {
            log_debug(&format!("store service: {:?}", request));
            let response = handle_request(&db, request);
            if response_tx.send(response).is_err() {
                // Receiver gone, the app is shutting down
                break;
            }
        }
    });

    (request_tx, response_rx)
}

fn handle_request(db: &StoreDb, request: StoreRequest) -> StoreResponse {
    match request {
        StoreRequest::GetListDetails { list_id } => StoreResponse::ListDetails {
            list_id,
            result: db.get_list_details(list_id),
        },

        StoreRequest::GetProducts { list_id } => StoreResponse::Products {
            list_id,
            result: db.get_products(list_id),
        },

        StoreRequest::SetChecked {
            product_id,
            checked,
        } => StoreResponse::CheckedSet {
            product_id,
            result: db.set_checked(product_id, checked),
        },

        StoreRequest::AddProduct {
            list_id,
            name,
            quantity,
            price_cents,
        } => StoreResponse::ProductAdded {
            list_id,
            result: db.add_product(list_id, &name, quantity, price_cents),
        },

        StoreRequest::SetSort {
            list_id,
            sort_by,
            sort_ascending,
        } => StoreResponse::SortSet {
            list_id,
            result: db.set_sort(list_id, sort_by, sort_ascending),
        },

        StoreRequest::DeleteChecked { list_id } => StoreResponse::CheckedDeleted {
            list_id,
            result: db.delete_checked(list_id),
        },
    }
}
