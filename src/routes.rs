//! # Loaders and Actions
//!
//! The read and write paths of each route. Both adapters call these:
//! the web adapter per request, the terminal adapter from spawned tasks.
//!
//! ```text
//! root_loader      GET  /              → RootData { contacts, q }
//! contact_loader   GET  /contacts/:id  → Option<Contact>
//! create_action    POST /              → Redirect /contacts/{id}/edit
//! ```

use log::{debug, info};

use crate::core::contact::Contact;
use crate::core::location::{Location, Route};
use crate::core::page::{PageData, Redirect, RootData};
use crate::store::{ContactStore, StoreError};

/// Read `q` from the location and search the store with it.
pub async fn root_loader(
    store: &dyn ContactStore,
    location: &Location,
) -> Result<RootData, StoreError> {
    let q = location.query().map(str::to_string);
    let contacts = store.search(q.as_deref()).await?;
    debug!("root_loader q={:?} → {} contacts", q, contacts.len());
    Ok(RootData { contacts, q })
}

pub async fn contact_loader(
    store: &dyn ContactStore,
    id: &str,
) -> Result<Option<Contact>, StoreError> {
    store.get(id).await
}

/// Create a blank contact and send the user to its edit view.
pub async fn create_action(store: &dyn ContactStore) -> Result<Redirect, StoreError> {
    let contact = store.create_empty().await?;
    info!("Created contact {}", contact.id);
    Ok(Redirect::to(Location::new(contact.edit_href())))
}

/// Run every loader the location's route needs.
pub async fn load_page(
    store: &dyn ContactStore,
    location: &Location,
) -> Result<PageData, StoreError> {
    let root = root_loader(store, location).await?;
    let detail = match location.route() {
        Route::Contact(id) | Route::EditContact(id) => contact_loader(store, &id).await?,
        Route::Index | Route::NotFound => None,
    };
    Ok(PageData { root, detail })
}
