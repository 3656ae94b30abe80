//! Invitation lifecycle: create, validate (with lazy expiry), accept.
//!
//! State machine: `pending` -> `accepted` (terminal) or `pending` ->
//! `expired` (terminal). Expiry is never swept in the background; it is
//! materialized when a validation check first runs past the deadline. The
//! expire-on-check update is idempotent, so two racing checks only cost a
//! redundant write.

use chrono::{DateTime, Duration, Utc};
use domain::models::{CreateInvitationRequest, Invitation, INVITATION_TTL_DAYS};
use persistence::repositories::{InvitationRepository, OrganizationRepository};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiError;

/// Errors from invitation operations.
#[derive(Debug, Error)]
pub enum InvitationError {
    #[error("Organization not found")]
    OrganizationNotFound,

    #[error("No pending invitation matches this token")]
    TokenNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<InvitationError> for ApiError {
    fn from(err: InvitationError) -> Self {
        match err {
            InvitationError::OrganizationNotFound => {
                ApiError::NotFound("Organization not found".to_string())
            }
            InvitationError::TokenNotFound => {
                ApiError::NotFound("No pending invitation matches this token".to_string())
            }
            InvitationError::Database(e) => e.into(),
        }
    }
}

/// Expiry deadline for an invitation created at `created_at`.
pub fn expiry_for(created_at: DateTime<Utc>) -> DateTime<Utc> {
    created_at + Duration::days(INVITATION_TTL_DAYS)
}

/// Creates a new pending invitation for an existing organization.
///
/// The returned record carries the token; delivering it (email) is the
/// caller's concern and is best-effort — a failed send never rolls back
/// the invitation row.
pub async fn create_invitation(
    pool: &PgPool,
    request: &CreateInvitationRequest,
    now: DateTime<Utc>,
) -> Result<Invitation, InvitationError> {
    let org_repo = OrganizationRepository::new(pool.clone());
    if org_repo.find_by_id(request.organization_id).await?.is_none() {
        return Err(InvitationError::OrganizationNotFound);
    }

    let token = shared::token::generate_invite_token();
    let invitation_repo = InvitationRepository::new(pool.clone());

    invitation_repo
        .create(
            &request.email,
            &request.name,
            request.role,
            request.organization_id,
            &token,
            expiry_for(now),
        )
        .await
        .map_err(Into::into)
}

/// Checks whether a token can still be redeemed at `now`.
///
/// Not read-only: a pending invitation past its deadline is flipped to
/// `expired` in storage as a side effect of the check.
pub async fn validate_token(
    pool: &PgPool,
    token: &str,
    now: DateTime<Utc>,
) -> Result<bool, sqlx::Error> {
    let repo = InvitationRepository::new(pool.clone());

    let invitation = match repo.find_by_token(token).await? {
        Some(invitation) => invitation,
        None => return Ok(false),
    };

    if invitation.status != domain::models::InvitationStatus::Pending {
        return Ok(false);
    }

    if invitation.is_expired(now) {
        repo.expire_if_pending(token).await?;
        return Ok(false);
    }

    Ok(true)
}

/// Marks a still-pending invitation as accepted.
///
/// Expiry is not re-checked here; callers validate first. Accepting an
/// unknown, already-accepted or already-expired token is a typed
/// `TokenNotFound` rather than a driver-dependent no-op.
pub async fn accept_invitation(
    pool: &PgPool,
    token: &str,
) -> Result<Invitation, InvitationError> {
    let repo = InvitationRepository::new(pool.clone());

    repo.accept(token)
        .await?
        .ok_or(InvitationError::TokenNotFound)
}

/// Registration link delivered to the invitee.
pub fn registration_url(base_url: &str, token: &str) -> String {
    format!("{}/register/complete?token={}", base_url, token)
}

/// Pending, unexpired invitations for an organization.
pub async fn pending_for_organization(
    pool: &PgPool,
    organization_id: Uuid,
) -> Result<Vec<Invitation>, InvitationError> {
    let org_repo = OrganizationRepository::new(pool.clone());
    if org_repo.find_by_id(organization_id).await?.is_none() {
        return Err(InvitationError::OrganizationNotFound);
    }

    let repo = InvitationRepository::new(pool.clone());
    repo.list_pending_by_organization(organization_id)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_is_exactly_seven_days() {
        let created: DateTime<Utc> = "2025-06-01T12:00:00Z".parse().unwrap();
        let expires = expiry_for(created);
        assert_eq!(expires - created, Duration::hours(168));
    }

    #[test]
    fn test_registration_url_shape() {
        let url = registration_url("https://portal.example.com", "abc123");
        assert_eq!(
            url,
            "https://portal.example.com/register/complete?token=abc123"
        );
    }

    #[test]
    fn test_token_not_found_maps_to_404() {
        let api: ApiError = InvitationError::TokenNotFound.into();
        assert!(matches!(api, ApiError::NotFound(_)));
    }

    #[test]
    fn test_org_not_found_maps_to_404() {
        let api: ApiError = InvitationError::OrganizationNotFound.into();
        assert!(matches!(api, ApiError::NotFound(_)));
    }
}
