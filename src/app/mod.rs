//! App Orchestration Methods
//!
//! The [`App`] owns the model and the channel ends of the store service.
//! Implementation methods are grouped by domain:
//! - reload: The two-fetch reload of list details and products
//! - products: Checking, adding, and deleting products
//! - sorting: Sort selection changes
//!
//! Methods orchestrate between the pure model transitions (src/model/)
//! and the store service (src/services/); the model never does I/O.

pub(crate) mod products;
pub(crate) mod reload;
pub(crate) mod sorting;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::model::Model;
use crate::services::store::{spawn_store_service, StoreRequest, StoreResponse};
use crate::store::StoreDb;
use crate::utils::log_debug;

pub struct App {
    pub model: Model,
    pub config: Config,

    store_tx: mpsc::UnboundedSender<StoreRequest>,
    pub store_rx: mpsc::UnboundedReceiver<StoreResponse>,
}

impl App {
    /// Open the named list (creating it on first use) and start the
    /// initial reload
    pub fn new(config: Config, list_name: &str) -> Result<Self> {
        let db = StoreDb::open(config.data_dir.as_deref())?;
        let list = db.open_or_create_list(list_name)?;

        let (store_tx, store_rx) = spawn_store_service(db);

        let mut app = App {
            model: Model::new(list.id, config.move_checked_to_end),
            config,
            store_tx,
            store_rx,
        };
        app.request_reload();

        Ok(app)
    }

    /// Send a request to the store service
    pub(crate) fn send(&self, request: StoreRequest) {
        if self.store_tx.send(request).is_err() {
            log_debug("store service is gone, request dropped");
        }
    }
}
