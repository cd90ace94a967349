// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::result::AdminResultEntry,
    quiz::admin::{AdminError, AdminViewer, delete_confirmed},
    state::AppState,
    utils::jwt::Claims,
};

impl From<AdminError> for AppError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::NotConfirmed => AppError::BadRequest(
                "Deletion must be confirmed with confirm=true".to_string(),
            ),
            AdminError::Store(e) => AppError::from(e),
        }
    }
}

/// Lists all stored results, newest first.
/// Admin only.
#[utoipa::path(
    get,
    path = "/api/admin/results",
    responses(
        (status = 200, description = "Stored results", body = [AdminResultEntry]),
        (status = 401, description = "Missing or invalid token"),
        (status = 503, description = "Storage unreachable")
    ),
    tag = "admin"
)]
pub async fn list_results(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminResultEntry>>, AppError> {
    let viewer = AdminViewer::load(state.results.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch results: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(viewer.entries()))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteParams {
    /// Must be `true`; deletion cannot be undone.
    #[serde(default)]
    pub confirm: bool,
}

/// Deletes one stored result.
/// Admin only.
#[utoipa::path(
    delete,
    path = "/api/admin/results/{id}",
    params(("id" = Uuid, Path, description = "Result id"), DeleteParams),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Not confirmed"),
        (status = 404, description = "No such result"),
        (status = 503, description = "Storage unreachable")
    ),
    tag = "admin"
)]
pub async fn delete_result(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, AppError> {
    delete_confirmed(state.results.as_ref(), id, params.confirm)
        .await
        .map_err(|e| {
            tracing::warn!("{} could not delete result {}: {:?}", claims.sub, id, e);
            AppError::from(e)
        })?;

    Ok(StatusCode::NO_CONTENT)
}
