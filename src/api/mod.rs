//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod communities;
mod datastore;
mod places;

pub use communities::*;
pub use datastore::*;
pub use places::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: crate::errors::AppError) -> ApiResult<T> {
    Err(err)
}

/// Query parameters shared by the record listing endpoints.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Category tab key. Omitted means the union of all partitions;
    /// unknown keys yield an empty list, never an error.
    pub category: Option<String>,
    /// Search query string (default: empty, which filters nothing).
    #[serde(default)]
    pub q: String,
}
