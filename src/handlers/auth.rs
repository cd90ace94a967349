// src/handlers/auth.rs

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{LoginRequest, TokenResponse},
    state::AppState,
    utils::{
        hash::verify_password,
        jwt::{ADMIN_ROLE, sign_jwt},
    },
};

/// Authenticates the administrator and returns a JWT token.
///
/// Credentials come from configuration; with none configured every login fails.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token", body = TokenResponse),
        (status = 400, description = "Malformed credentials"),
        (status = 401, description = "Wrong credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let admin = state
        .admin
        .as_ref()
        .filter(|admin| admin.username == payload.username)
        .ok_or(AppError::AuthError("Invalid credentials".to_string()))?;

    if !verify_password(&payload.password, &admin.password_hash)? {
        tracing::warn!("Failed admin login for {}", payload.username);
        return Err(AppError::AuthError("Invalid credentials".to_string()));
    }

    let token = sign_jwt(
        &admin.username,
        ADMIN_ROLE,
        &state.config.jwt_secret,
        state.config.jwt_expiration,
    )?;

    Ok(Json(TokenResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.config.jwt_expiration,
    }))
}
