use std::sync::Arc;

use contacts::core::contact::Contact;
use contacts::store::{ContactStore, MemoryStore, StoreError};
use contacts::web::{AppState, build_router};
use reqwest::StatusCode;
use reqwest::header::LOCATION;
use tokio::net::TcpListener;

// ============================================================================
// Helper Functions
// ============================================================================

fn named(id: &str, first: &str, last: &str, favorite: bool) -> Contact {
    Contact {
        id: id.to_string(),
        first: Some(first.to_string()),
        last: Some(last.to_string()),
        favorite,
        ..Default::default()
    }
}

/// Spawns the app on an ephemeral port and returns its base URL.
async fn spawn_app(store: Arc<dyn ContactStore>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = build_router(AppState::new(store));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client")
}

fn seeded() -> Arc<dyn ContactStore> {
    Arc::new(MemoryStore::with_contacts(vec![
        named("1", "Ann", "Lee", true),
        named("2", "Bo", "Diaz", false),
    ]))
}

// ============================================================================
// Loader
// ============================================================================

#[tokio::test]
async fn test_index_lists_all_contacts() {
    let base = spawn_app(seeded()).await;
    let resp = client().get(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains("<a href=\"/contacts/1\">Ann Lee <span>★</span></a>"));
    assert!(body.contains("<a href=\"/contacts/2\">Bo Diaz</a>"));
    assert!(body.contains("value=\"\""));
    assert!(body.contains("aria-hidden hidden"));
}

#[tokio::test]
async fn test_search_filters_and_echoes_query() {
    let base = spawn_app(seeded()).await;
    let body = client()
        .get(format!("{base}/?q=an"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Ann Lee"));
    assert!(!body.contains("Bo Diaz"));
    assert!(body.contains("name=\"q\" value=\"an\""));
}

#[tokio::test]
async fn test_search_without_matches_shows_placeholder() {
    let base = spawn_app(seeded()).await;
    let body = client()
        .get(format!("{base}/?q=zzz"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("<p><i>No contacts</i></p>"));
    assert!(!body.contains("<ul>"));
}

// ============================================================================
// Create Action
// ============================================================================

#[tokio::test]
async fn test_post_creates_and_redirects_to_edit() {
    let store = Arc::new(MemoryStore::new());
    let base = spawn_app(store.clone()).await;

    let resp = client().post(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);

    let created = store.search(None).await.unwrap();
    assert_eq!(created.len(), 1);
    let location = resp.headers().get(LOCATION).unwrap().to_str().unwrap();
    assert_eq!(location, format!("/contacts/{}/edit", created[0].id));

    // The new, blank contact shows up as "No Name" on the edit view
    let body = client()
        .get(format!("{base}{location}"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("<i>No Name</i>"));
    assert!(body.contains("data-mode=\"edit\""));
    assert!(body.contains("class=\"active\""));
}

// ============================================================================
// Detail routes
// ============================================================================

#[tokio::test]
async fn test_contact_page_marks_link_active() {
    let base = spawn_app(seeded()).await;
    let resp = client().get(format!("{base}/contacts/2")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("<a href=\"/contacts/2\" class=\"active\">Bo Diaz</a>"));
    assert!(body.contains("<a href=\"/contacts/1\">"));
}

#[tokio::test]
async fn test_unknown_contact_is_404() {
    let base = spawn_app(seeded()).await;
    let resp = client().get(format!("{base}/contacts/nope")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.text().await.unwrap().contains("Not Found"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let base = spawn_app(seeded()).await;
    let resp = client().get(format!("{base}/elsewhere")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_healthz() {
    let base = spawn_app(seeded()).await;
    let resp = client().get(format!("{base}/healthz")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

// ============================================================================
// Store failures
// ============================================================================

struct OfflineStore;

#[async_trait::async_trait]
impl ContactStore for OfflineStore {
    fn name(&self) -> &str {
        "offline"
    }

    async fn search(&self, _query: Option<&str>) -> Result<Vec<Contact>, StoreError> {
        Err(StoreError::Network("connection refused".to_string()))
    }

    async fn create_empty(&self) -> Result<Contact, StoreError> {
        Err(StoreError::Network("connection refused".to_string()))
    }

    async fn get(&self, _id: &str) -> Result<Option<Contact>, StoreError> {
        Err(StoreError::Network("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_store_failure_is_generic_500() {
    let base = spawn_app(Arc::new(OfflineStore)).await;

    let resp = client().get(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = resp.text().await.unwrap();
    assert!(body.contains("unexpected error"));
    assert!(!body.contains("connection refused"));

    let resp = client().post(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
