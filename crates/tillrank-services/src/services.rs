//! Service container - the single entry point for GUI access to the store.
//!
//! Services are stateless; app state lives in `AppModels` owned by the GUI.

use crate::StoreClient;

pub struct Services {
    pub store: StoreClient,
}

impl Services {
    pub fn new() -> Self {
        Self {
            store: StoreClient::default_url(),
        }
    }

    /// Create with a custom store URL (used by tests).
    pub fn with_store_url(base_url: impl Into<String>) -> Self {
        Self {
            store: StoreClient::new(base_url),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}
