//! Place API endpoints.

use axum::extract::{Path, Query, State};

use super::{error, success, ApiResult, ListQuery};
use crate::catalog::CategoryInfo;
use crate::errors::AppError;
use crate::models::Place;
use crate::search;
use crate::AppState;

/// GET /api/places/categories - List the map explorer modes.
pub async fn list_place_categories(State(state): State<AppState>) -> ApiResult<Vec<CategoryInfo>> {
    success(state.places.categories())
}

/// GET /api/places - List places for a map mode, filtered by the search
/// query.
pub async fn list_places(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> ApiResult<Vec<Place>> {
    let results = match &params.category {
        Some(key) => search::filter(state.places.by_category(key), &params.q),
        None => search::filter(state.places.iter(), &params.q),
    };

    success(results.into_iter().cloned().collect())
}

/// GET /api/places/:id - Get a single place.
pub async fn get_place(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult<Place> {
    match state.places.by_id(id) {
        Some(place) => success(place.clone()),
        None => error(AppError::NotFound(format!("Place {} not found", id))),
    }
}
