//! Authentication routes: login and invitation-based registration.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use domain::models::{CompleteRegistrationRequest, LoginRequest};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::auth;

/// POST /api/v1/auth/login
///
/// Verifies credentials and returns an access token with the user profile.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let response = auth::login(&state.pool, &state.jwt, &request).await?;

    Ok(Json(response))
}

/// POST /api/v1/auth/register/complete
///
/// Finishes registration with an invitation token and a chosen password.
/// The invitation must still be pending and unexpired; a token past its
/// deadline is flipped to expired as a side effect of this check.
pub async fn complete_registration(
    State(state): State<AppState>,
    Json(request): Json<CompleteRegistrationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let user = auth::complete_registration(&state.pool, &request, Utc::now()).await?;

    info!(user_id = %user.id, "Registration completed");

    Ok((StatusCode::CREATED, Json(user)))
}
