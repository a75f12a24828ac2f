//! # Web Adapter
//!
//! Serves the page shell over HTTP with axum. Every request runs the
//! loaders for its location and renders the view with no navigation in
//! flight; the browser owns pending state between requests.
//!
//! ```text
//! GET  /                    → page shell (search via ?q=)
//! POST /                    → 302 /contacts/{id}/edit
//! GET  /contacts/:id        → page shell + contact, 404 if missing
//! GET  /contacts/:id/edit   → page shell + contact (edit mode)
//! GET  /healthz             → "ok"
//! ```

pub mod markup;

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use log::{error, info, warn};

use crate::core::location::{Location, Route};
use crate::core::navigation::Navigation;
use crate::core::view::RootView;
use crate::routes;
use crate::store::{ContactStore, StoreError};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler).post(create_handler))
        .route("/contacts/:id", get(page_handler))
        .route("/contacts/:id/edit", get(page_handler))
        .route("/healthz", get(healthz_handler))
        .fallback(page_handler)
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, build_router(state)).await
}

/// Store failures as a generic 500 page. Missing contacts are not errors;
/// `render` answers those with a 404 page shell.
pub struct WebError(StoreError);

impl From<StoreError> for WebError {
    fn from(e: StoreError) -> Self {
        WebError(e)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(markup::render_error_page()),
        )
            .into_response()
    }
}

fn request_location(uri: &Uri) -> Location {
    let href = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    Location::parse(href).unwrap_or_else(|e| {
        warn!("Unparseable request target {}: {}", href, e);
        Location::new(uri.path())
    })
}

async fn page_handler(State(state): State<AppState>, uri: Uri) -> Result<Response, WebError> {
    render(&state, request_location(&uri)).await
}

async fn render(state: &AppState, location: Location) -> Result<Response, WebError> {
    let data = routes::load_page(state.store.as_ref(), &location).await?;
    let search_value = data.root.q.clone().unwrap_or_default();
    let status = match location.route() {
        Route::Index => StatusCode::OK,
        Route::Contact(_) | Route::EditContact(_) if data.detail.is_some() => StatusCode::OK,
        Route::Contact(_) | Route::EditContact(_) | Route::NotFound => StatusCode::NOT_FOUND,
    };
    let view = RootView::derive(&data, &location, &Navigation::Idle, &search_value);
    Ok((status, Html(markup::render_page(&view))).into_response())
}

async fn create_handler(State(state): State<AppState>) -> Result<Response, WebError> {
    let redirect = routes::create_action(state.store.as_ref()).await?;
    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, redirect.location.href())],
    )
        .into_response())
}

async fn healthz_handler() -> &'static str {
    "ok"
}
