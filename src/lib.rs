//! TerraVerde Discovery Backend
//!
//! The catalog, search-filter, and selection model behind the TerraVerde
//! community and place discovery views, plus the REST surface the frontend
//! consumes. Catalog data is compiled in and immutable; every lookup is a
//! pure in-memory computation.

pub mod api;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod search;
pub mod selection;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use catalog::communities::CommunityCategory;
use catalog::places::PlaceCategory;
use catalog::Catalog;
use models::{Community, Place};

/// Application state shared across all handlers.
///
/// The catalogs are built once at startup and only ever read, so sharing
/// them is plain `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    pub communities: Arc<Catalog<CommunityCategory, Community>>,
    pub places: Arc<Catalog<PlaceCategory, Place>>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Datastore
        .route("/datastore", get(api::get_datastore))
        // Communities
        .route("/communities", get(api::list_communities))
        .route("/communities/categories", get(api::list_community_categories))
        .route("/communities/{id}", get(api::get_community))
        // Places
        .route("/places", get(api::list_places))
        .route("/places/categories", get(api::list_place_categories))
        .route("/places/{id}", get(api::get_place));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
