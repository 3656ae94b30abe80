//! Invitation routes.
//!
//! Creating an invitation is admin-only. Validation is public (the invitee
//! is not logged in yet) and keyed solely by the token.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use domain::models::CreateInvitationRequest;
use persistence::repositories::InvitationRepository;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::invitations;

/// Query parameters for the public validation endpoint.
#[derive(Debug, Deserialize)]
pub struct ValidateTokenQuery {
    pub token: String,
}

/// Validation outcome shown on the registration page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateTokenResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation: Option<domain::models::InvitationWithOrganization>,
}

/// POST /api/v1/invitations
///
/// Creates a pending invitation and emails the registration link.
/// Email delivery is best-effort: a failed send is logged, never an error.
pub async fn create_invitation(
    State(state): State<AppState>,
    Json(request): Json<CreateInvitationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let invitation = invitations::create_invitation(&state.pool, &request, Utc::now()).await?;

    let url = invitations::registration_url(&state.config.server.app_base_url, &invitation.token);

    let repo = InvitationRepository::new(state.pool.clone());
    let org_name = repo
        .find_by_token_with_organization(&invitation.token)
        .await?
        .map(|joined| joined.organization.name)
        .unwrap_or_default();

    if let Err(e) = state
        .email
        .send_invitation_email(&invitation.email, &invitation.name, &org_name, &url)
        .await
    {
        warn!(
            invitation_id = %invitation.id,
            error = %e,
            "Failed to send invitation email"
        );
    }

    info!(
        invitation_id = %invitation.id,
        organization_id = %invitation.organization_id,
        role = %invitation.role,
        "Created invitation"
    );

    Ok((StatusCode::CREATED, Json(invitation)))
}

/// GET /api/v1/invitations/validate?token=...
///
/// Public endpoint checked by the registration page before showing the
/// password form. A pending token past its deadline is flipped to expired
/// here; an invalid token yields `valid: false` rather than an error.
pub async fn validate_invitation(
    State(state): State<AppState>,
    Query(query): Query<ValidateTokenQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let valid = invitations::validate_token(&state.pool, &query.token, Utc::now()).await?;

    if !valid {
        return Ok(Json(ValidateTokenResponse {
            valid: false,
            invitation: None,
        }));
    }

    let repo = InvitationRepository::new(state.pool.clone());
    let invitation = repo.find_by_token_with_organization(&query.token).await?;

    Ok(Json(ValidateTokenResponse {
        valid: true,
        invitation,
    }))
}

/// GET /api/v1/organizations/:org_id/invitations
///
/// Pending, unexpired invitations for an organization. A read filter only;
/// rows past their deadline are excluded but not mutated.
pub async fn list_pending_invitations(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let pending = invitations::pending_for_organization(&state.pool, org_id).await?;

    Ok(Json(pending))
}
