//! Studio catalog handlers (public).

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::StudioResponse;
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Create studio routes (public, no authentication)
pub fn studio_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_studios))
        .route("/:id", get(get_studio))
}

/// List all studios
#[utoipa::path(
    get,
    path = "/api/studios",
    tag = "Studios",
    responses(
        (status = 200, description = "Studio catalog", body = [StudioResponse])
    )
)]
pub async fn list_studios(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<StudioResponse>>>> {
    let studios = state.studio_service.list_studios().await?;
    let responses = studios.into_iter().map(StudioResponse::from).collect();
    Ok(Json(ApiResponse::success(responses)))
}

/// Get a studio by ID
#[utoipa::path(
    get,
    path = "/api/studios/{id}",
    tag = "Studios",
    params(("id" = i32, Path, description = "Studio ID")),
    responses(
        (status = 200, description = "Studio", body = StudioResponse),
        (status = 404, description = "Studio not found")
    )
)]
pub async fn get_studio(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<StudioResponse>>> {
    let studio = state.studio_service.get_studio(id).await?;
    Ok(Json(ApiResponse::success(StudioResponse::from(studio))))
}
