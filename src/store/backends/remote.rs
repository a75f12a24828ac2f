//! Store backed by a contacts JSON service.
//!
//! ```text
//! GET  {base}/contacts?q=...   → [Contact]
//! POST {base}/contacts         → Contact
//! GET  {base}/contacts/{id}    → Contact | 404
//! ```

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::core::contact::Contact;
use crate::core::location::QUERY_PARAM;
use crate::store::{ContactStore, StoreError};

pub struct RemoteStore {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn contacts_url(&self) -> String {
        format!("{}/contacts", self.base_url)
    }
}

/// Turn a non-2xx response into `StoreError::Api`, otherwise decode the body.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    let status = response.status();
    debug!("Remote store response status: {}", status);
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        warn!("Remote store error: {} - {}", status.as_u16(), message);
        return Err(StoreError::Api {
            status: status.as_u16(),
            message,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Parse(e.to_string()))
}

#[async_trait]
impl ContactStore for RemoteStore {
    fn name(&self) -> &str {
        "remote"
    }

    async fn search(&self, query: Option<&str>) -> Result<Vec<Contact>, StoreError> {
        let mut request = self.client.get(self.contacts_url());
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            request = request.query(&[(QUERY_PARAM, q)]);
        }
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn create_empty(&self) -> Result<Contact, StoreError> {
        let response = self
            .client
            .post(self.contacts_url())
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let contact: Contact = decode(response).await?;
        info!("Remote store created contact {}", contact.id);
        Ok(contact)
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>, StoreError> {
        let response = self
            .client
            .get(format!("{}/{}", self.contacts_url(), id))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).await.map(Some)
    }
}
