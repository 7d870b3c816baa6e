//! Community API endpoints.

use axum::extract::{Path, Query, State};

use super::{error, success, ApiResult, ListQuery};
use crate::catalog::CategoryInfo;
use crate::errors::AppError;
use crate::models::Community;
use crate::search;
use crate::AppState;

/// GET /api/communities/categories - List the community category tabs.
pub async fn list_community_categories(
    State(state): State<AppState>,
) -> ApiResult<Vec<CategoryInfo>> {
    success(state.communities.categories())
}

/// GET /api/communities - List communities for a category tab, filtered by
/// the search query.
pub async fn list_communities(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> ApiResult<Vec<Community>> {
    let results = match &params.category {
        Some(key) => search::filter(state.communities.by_category(key), &params.q),
        None => search::filter(state.communities.iter(), &params.q),
    };

    success(results.into_iter().cloned().collect())
}

/// GET /api/communities/:id - Get a single community.
pub async fn get_community(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Community> {
    match state.communities.by_id(id) {
        Some(community) => success(community.clone()),
        None => error(AppError::NotFound(format!("Community {} not found", id))),
    }
}
