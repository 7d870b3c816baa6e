//! Datastore API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::Datastore;
use crate::AppState;

/// GET /api/datastore - Get the full datastore for the frontend's initial
/// load, both catalogs flattened in partition declaration order.
pub async fn get_datastore(State(state): State<AppState>) -> ApiResult<Datastore> {
    success(Datastore {
        communities: state.communities.iter().cloned().collect(),
        places: state.places.iter().cloned().collect(),
    })
}
