use std::sync::Arc;

use tracing::error;

use crate::storage::{Storage, create_storage};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// Build everything the server needs before it starts accepting requests.
/// A storage failure here is fatal; there is nothing to serve without it.
pub async fn prepare_server_startup() -> StartupContext {
    let storage = match create_storage().await {
        Ok(storage) => storage,
        Err(e) => {
            error!("Failed to initialize storage: {}", e);
            std::process::exit(1);
        }
    };

    StartupContext { storage }
}
