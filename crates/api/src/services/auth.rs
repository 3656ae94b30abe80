//! Identity service: login and invitation-based registration completion.

use chrono::{DateTime, Utc};
use domain::models::{
    CompleteRegistrationRequest, InvitationRole, LoginRequest, LoginResponse, User, UserRole,
};
use persistence::repositories::{InvitationRepository, UserRepository};
use shared::jwt::JwtConfig;
use shared::password::{hash_password, verify_password};
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::error::ApiError;
use crate::services::invitations;

/// Errors from identity operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid or expired invitation")]
    InvalidInvitation,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid email or password".to_string())
            }
            AuthError::InvalidInvitation => {
                ApiError::NotFound("Invalid or expired invitation".to_string())
            }
            AuthError::EmailTaken => ApiError::Conflict("Email is already registered".to_string()),
            AuthError::Internal(msg) => ApiError::Internal(msg),
            AuthError::Database(e) => e.into(),
        }
    }
}

/// Role a user receives when redeeming an invitation.
fn role_for_invitation(role: InvitationRole) -> UserRole {
    match role {
        InvitationRole::Client => UserRole::Client,
        InvitationRole::TeamMember => UserRole::TeamMember,
    }
}

/// Verifies credentials and issues an access token.
pub async fn login(
    pool: &PgPool,
    jwt: &JwtConfig,
    request: &LoginRequest,
) -> Result<LoginResponse, AuthError> {
    let user_repo = UserRepository::new(pool.clone());

    let user = user_repo
        .find_by_email(&request.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let password_ok = verify_password(&request.password, &user.password_hash)
        .map_err(|e| AuthError::Internal(e.to_string()))?;
    if !password_ok {
        return Err(AuthError::InvalidCredentials);
    }

    let access_token = jwt
        .generate_access_token(user.id, &user.role.to_string(), user.organization_id)
        .map_err(|e| AuthError::Internal(e.to_string()))?;

    info!(user_id = %user.id, role = %user.role, "User logged in");

    Ok(LoginResponse { access_token, user })
}

/// Finishes registration with an invitation token and a chosen password.
///
/// Validates the token (lazily expiring it if the deadline has passed),
/// creates the user with the invitation's role and organization, then marks
/// the invitation accepted.
pub async fn complete_registration(
    pool: &PgPool,
    request: &CompleteRegistrationRequest,
    now: DateTime<Utc>,
) -> Result<User, AuthError> {
    if !invitations::validate_token(pool, &request.token, now).await? {
        return Err(AuthError::InvalidInvitation);
    }

    let invitation_repo = InvitationRepository::new(pool.clone());
    let invitation = invitation_repo
        .find_by_token(&request.token)
        .await?
        .ok_or(AuthError::InvalidInvitation)?;

    let user_repo = UserRepository::new(pool.clone());
    if user_repo.find_by_email(&invitation.email).await?.is_some() {
        return Err(AuthError::EmailTaken);
    }

    let password_hash =
        hash_password(&request.password).map_err(|e| AuthError::Internal(e.to_string()))?;

    let user = user_repo
        .create(
            &invitation.email,
            &invitation.name,
            role_for_invitation(invitation.role),
            Some(invitation.organization_id),
            &password_hash,
        )
        .await?;

    invitations::accept_invitation(pool, &request.token)
        .await
        .map_err(|e| match e {
            invitations::InvitationError::Database(e) => AuthError::Database(e),
            _ => AuthError::InvalidInvitation,
        })?;

    info!(
        user_id = %user.id,
        organization_id = %invitation.organization_id,
        role = %user.role,
        "Completed registration from invitation"
    );

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invitation_roles_map_to_user_roles() {
        assert_eq!(role_for_invitation(InvitationRole::Client), UserRole::Client);
        assert_eq!(
            role_for_invitation(InvitationRole::TeamMember),
            UserRole::TeamMember
        );
    }

    #[test]
    fn test_invalid_credentials_maps_to_401() {
        let api: ApiError = AuthError::InvalidCredentials.into();
        assert!(matches!(api, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_invalid_invitation_maps_to_404() {
        let api: ApiError = AuthError::InvalidInvitation.into();
        assert!(matches!(api, ApiError::NotFound(_)));
    }

    #[test]
    fn test_email_taken_maps_to_conflict() {
        let api: ApiError = AuthError::EmailTaken.into();
        assert!(matches!(api, ApiError::Conflict(_)));
    }
}
