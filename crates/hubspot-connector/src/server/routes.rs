//! HTTP routes for the HubSpot integration.
//!
//! Paths match what the front end already calls:
//! - `POST /integrations/hubspot/authorize` → consent URL (JSON string)
//! - `GET  /integrations/hubspot/oauth2callback` → window-closing HTML
//! - `POST /integrations/hubspot/credentials` → raw token response, once
//! - `POST /integrations/hubspot/load` → normalized contacts
//!
//! Form endpoints accept urlencoded and multipart bodies. Errors render as
//! `{"detail": "..."}`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::extract::FormFields;
use super::pages::CLOSE_WINDOW_PAGE;
use crate::error::{IntegrationError, IntegrationResult};
use crate::items::ItemFetcher;
use crate::models::{CallbackQuery, IntegrationItem};
use crate::oauth::OAuthFlow;

/// Shared state for HTTP handlers.
#[derive(Debug)]
pub struct HttpState {
    pub oauth: OAuthFlow,
    pub items: ItemFetcher,
}

/// Form body identifying the user an operation is for.
#[derive(Debug, Deserialize)]
pub struct IdentityForm {
    pub user_id: String,
    pub org_id: String,
}

/// Form body of the load endpoint.
#[derive(Debug, Deserialize)]
pub struct LoadForm {
    /// Token response as a JSON string.
    pub credentials: String,
}

/// Create the HTTP router.
pub fn create_router(oauth: OAuthFlow, items: ItemFetcher) -> Router {
    let state = Arc::new(HttpState { oauth, items });

    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/integrations/hubspot/authorize", post(handle_authorize))
        .route("/integrations/hubspot/oauth2callback", get(handle_callback))
        .route("/integrations/hubspot/credentials", post(handle_credentials))
        .route("/integrations/hubspot/load", post(handle_load))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "hubspot-connector",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `POST /integrations/hubspot/authorize`
async fn handle_authorize(
    State(state): State<Arc<HttpState>>,
    FormFields(form): FormFields<IdentityForm>,
) -> IntegrationResult<Json<String>> {
    let url = state.oauth.authorize(&form.user_id, &form.org_id).await?;
    Ok(Json(url))
}

/// `GET /integrations/hubspot/oauth2callback`
async fn handle_callback(
    State(state): State<Arc<HttpState>>,
    query: Result<Query<CallbackQuery>, QueryRejection>,
) -> IntegrationResult<Html<&'static str>> {
    let Query(query) = query.map_err(|e| IntegrationError::bad_request(e.body_text()))?;
    state.oauth.callback(&query).await?;
    Ok(Html(CLOSE_WINDOW_PAGE))
}

/// `POST /integrations/hubspot/credentials`
async fn handle_credentials(
    State(state): State<Arc<HttpState>>,
    FormFields(form): FormFields<IdentityForm>,
) -> IntegrationResult<Json<serde_json::Value>> {
    let credentials = state.oauth.credentials(&form.user_id, &form.org_id).await?;
    Ok(Json(credentials))
}

/// `POST /integrations/hubspot/load`
async fn handle_load(
    State(state): State<Arc<HttpState>>,
    FormFields(form): FormFields<LoadForm>,
) -> IntegrationResult<Json<Vec<IntegrationItem>>> {
    let items = state.items.fetch(&form.credentials).await?;
    Ok(Json(items))
}
