//! # Contact Store
//!
//! The persistence collaborator behind loaders and actions. Everything
//! above this module sees only `Arc<dyn ContactStore>`.

pub mod backends;
pub mod contact_store;
pub mod seed;

use std::sync::Arc;

use log::info;

pub use backends::{JsonFileStore, MemoryStore, RemoteStore};
pub use contact_store::{ContactStore, StoreError, filter_and_sort, new_contact_id, now_millis};

use crate::core::config::{ResolvedConfig, StoreKind};

/// Build the store selected by the resolved config.
pub async fn build_store(config: &ResolvedConfig) -> Result<Arc<dyn ContactStore>, StoreError> {
    let store: Arc<dyn ContactStore> = match config.store {
        StoreKind::Memory => {
            let contacts = if config.seed {
                seed::sample_contacts(now_millis())
            } else {
                Vec::new()
            };
            Arc::new(MemoryStore::with_contacts(contacts))
        }
        StoreKind::File => {
            let store = JsonFileStore::open(&config.store_path)?;
            if config.seed && store.seed_if_empty(seed::sample_contacts(now_millis())).await? {
                info!("Seeded {}", store.path().display());
            }
            Arc::new(store)
        }
        StoreKind::Remote => Arc::new(RemoteStore::new(config.remote_url.clone())),
    };
    info!("Using {} contact store", store.name());
    Ok(store)
}
