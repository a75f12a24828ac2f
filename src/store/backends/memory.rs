//! In-process store. Contents live as long as the process.

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use crate::core::contact::Contact;
use crate::store::{ContactStore, StoreError, filter_and_sort, new_contact_id, now_millis};

#[derive(Default)]
pub struct MemoryStore {
    contacts: RwLock<Vec<Contact>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: RwLock::new(contacts),
        }
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn search(&self, query: Option<&str>) -> Result<Vec<Contact>, StoreError> {
        let contacts = self.contacts.read().await;
        Ok(filter_and_sort(contacts.iter(), query))
    }

    async fn create_empty(&self) -> Result<Contact, StoreError> {
        let contact = Contact::empty(new_contact_id(), now_millis());
        self.contacts.write().await.push(contact.clone());
        debug!("Created contact {}", contact.id);
        Ok(contact)
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>, StoreError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|c| c.id == id).cloned())
    }
}
