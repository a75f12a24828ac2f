//! # JSON File Store
//!
//! All contacts in one JSON array on disk. Loaded once at open, rewritten
//! on every create.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::core::contact::Contact;
use crate::store::{ContactStore, StoreError, filter_and_sort, new_contact_id, now_millis};

pub struct JsonFileStore {
    path: PathBuf,
    contacts: RwLock<Vec<Contact>>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let contacts = if path.exists() {
            let json = fs::read_to_string(&path)?;
            serde_json::from_str(&json).map_err(|e| StoreError::Parse(e.to_string()))?
        } else {
            Vec::new()
        };
        info!("Opened {} with {} contacts", path.display(), contacts.len());
        Ok(Self {
            path,
            contacts: RwLock::new(contacts),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `contacts` to disk if the store is still empty. Returns whether it did.
    pub async fn seed_if_empty(&self, contacts: Vec<Contact>) -> Result<bool, StoreError> {
        let mut current = self.contacts.write().await;
        if !current.is_empty() {
            return Ok(false);
        }
        atomic_write_json(&self.path, &contacts)?;
        *current = contacts;
        Ok(true)
    }
}

#[async_trait]
impl ContactStore for JsonFileStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn search(&self, query: Option<&str>) -> Result<Vec<Contact>, StoreError> {
        let contacts = self.contacts.read().await;
        Ok(filter_and_sort(contacts.iter(), query))
    }

    async fn create_empty(&self) -> Result<Contact, StoreError> {
        let contact = Contact::empty(new_contact_id(), now_millis());
        let mut contacts = self.contacts.write().await;
        contacts.push(contact.clone());
        if let Err(e) = atomic_write_json(&self.path, &*contacts) {
            contacts.pop();
            return Err(e.into());
        }
        debug!("Created contact {} in {}", contact.id, self.path.display());
        Ok(contact)
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>, StoreError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|c| c.id == id).cloned())
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
