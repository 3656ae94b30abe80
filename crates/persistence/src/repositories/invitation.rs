//! Repository for invitation database operations.

use chrono::{DateTime, Utc};
use domain::models::{Invitation, InvitationRole, InvitationWithOrganization};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{InvitationEntity, InvitationRoleDb, InvitationWithOrganizationEntity};

/// Repository for invitation operations.
#[derive(Clone)]
pub struct InvitationRepository {
    pool: PgPool,
}

impl InvitationRepository {
    /// Creates a new invitation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a new invitation with status `pending`.
    pub async fn create(
        &self,
        email: &str,
        name: &str,
        role: InvitationRole,
        organization_id: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Invitation, sqlx::Error> {
        let entity = sqlx::query_as::<_, InvitationEntity>(
            r#"
            INSERT INTO invitations (email, name, role, organization_id, token, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, name, role, organization_id, token, status, expires_at, created_at
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(InvitationRoleDb::from(role))
        .bind(organization_id)
        .bind(token)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Finds an invitation by its token.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<Invitation>, sqlx::Error> {
        let entity = sqlx::query_as::<_, InvitationEntity>(
            r#"
            SELECT id, email, name, role, organization_id, token, status, expires_at, created_at
            FROM invitations
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Finds an invitation by token, joined with the organization display
    /// fields shown on the registration page. Performs no expiry mutation.
    pub async fn find_by_token_with_organization(
        &self,
        token: &str,
    ) -> Result<Option<InvitationWithOrganization>, sqlx::Error> {
        let entity = sqlx::query_as::<_, InvitationWithOrganizationEntity>(
            r#"
            SELECT i.id, i.email, i.name, i.role, i.organization_id, i.token, i.status,
                   i.expires_at, i.created_at,
                   o.name AS org_name, o.company AS org_company
            FROM invitations i
            JOIN organizations o ON o.id = i.organization_id
            WHERE i.token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Flips a still-pending invitation to `expired`.
    ///
    /// Returns `true` if a row changed. Idempotent: a concurrent check that
    /// already expired the row makes this a no-op.
    pub async fn expire_if_pending(&self, token: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE invitations
            SET status = 'expired'
            WHERE token = $1 AND status = 'pending'
            "#,
        )
        .bind(token)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Marks a still-pending invitation as accepted.
    ///
    /// Returns the updated record, or `None` when no pending invitation
    /// matches the token (unknown token, already accepted or already
    /// expired). Does not re-check the deadline; callers validate first.
    pub async fn accept(&self, token: &str) -> Result<Option<Invitation>, sqlx::Error> {
        let entity = sqlx::query_as::<_, InvitationEntity>(
            r#"
            UPDATE invitations
            SET status = 'accepted'
            WHERE token = $1 AND status = 'pending'
            RETURNING id, email, name, role, organization_id, token, status, expires_at, created_at
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Lists pending, unexpired invitations for an organization.
    ///
    /// A read filter only: rows past their deadline are excluded but not
    /// flipped to `expired` here.
    pub async fn list_pending_by_organization(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<Invitation>, sqlx::Error> {
        let entities = sqlx::query_as::<_, InvitationEntity>(
            r#"
            SELECT id, email, name, role, organization_id, token, status, expires_at, created_at
            FROM invitations
            WHERE organization_id = $1 AND status = 'pending' AND expires_at > NOW()
            ORDER BY created_at DESC
            "#,
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }
}
