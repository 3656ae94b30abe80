//! Invitation entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{
    Invitation, InvitationRole, InvitationStatus, InvitationWithOrganization, OrganizationSummary,
};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for invitation_status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "invitation_status", rename_all = "lowercase")]
pub enum InvitationStatusDb {
    Pending,
    Accepted,
    Expired,
}

impl From<InvitationStatusDb> for InvitationStatus {
    fn from(db: InvitationStatusDb) -> Self {
        match db {
            InvitationStatusDb::Pending => Self::Pending,
            InvitationStatusDb::Accepted => Self::Accepted,
            InvitationStatusDb::Expired => Self::Expired,
        }
    }
}

impl From<InvitationStatus> for InvitationStatusDb {
    fn from(status: InvitationStatus) -> Self {
        match status {
            InvitationStatus::Pending => Self::Pending,
            InvitationStatus::Accepted => Self::Accepted,
            InvitationStatus::Expired => Self::Expired,
        }
    }
}

/// Database enum for invitation_role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "invitation_role", rename_all = "camelCase")]
pub enum InvitationRoleDb {
    Client,
    TeamMember,
}

impl From<InvitationRoleDb> for InvitationRole {
    fn from(db: InvitationRoleDb) -> Self {
        match db {
            InvitationRoleDb::Client => Self::Client,
            InvitationRoleDb::TeamMember => Self::TeamMember,
        }
    }
}

impl From<InvitationRole> for InvitationRoleDb {
    fn from(role: InvitationRole) -> Self {
        match role {
            InvitationRole::Client => Self::Client,
            InvitationRole::TeamMember => Self::TeamMember,
        }
    }
}

/// Database row mapping for the invitations table.
#[derive(Debug, Clone, FromRow)]
pub struct InvitationEntity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: InvitationRoleDb,
    pub organization_id: Uuid,
    pub token: String,
    pub status: InvitationStatusDb,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<InvitationEntity> for Invitation {
    fn from(entity: InvitationEntity) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: entity.role.into(),
            organization_id: entity.organization_id,
            token: entity.token,
            status: entity.status.into(),
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        }
    }
}

/// Invitation row joined with organization display fields.
#[derive(Debug, Clone, FromRow)]
pub struct InvitationWithOrganizationEntity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: InvitationRoleDb,
    pub organization_id: Uuid,
    pub token: String,
    pub status: InvitationStatusDb,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub org_name: String,
    pub org_company: String,
}

impl From<InvitationWithOrganizationEntity> for InvitationWithOrganization {
    fn from(entity: InvitationWithOrganizationEntity) -> Self {
        Self {
            organization: OrganizationSummary {
                id: entity.organization_id,
                name: entity.org_name,
                company: entity.org_company,
            },
            invitation: Invitation {
                id: entity.id,
                email: entity.email,
                name: entity.name,
                role: entity.role.into(),
                organization_id: entity.organization_id,
                token: entity.token,
                status: entity.status.into(),
                expires_at: entity.expires_at,
                created_at: entity.created_at,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion_round_trip() {
        for status in [
            InvitationStatus::Pending,
            InvitationStatus::Accepted,
            InvitationStatus::Expired,
        ] {
            let db: InvitationStatusDb = status.into();
            assert_eq!(InvitationStatus::from(db), status);
        }
    }

    #[test]
    fn test_role_conversion_round_trip() {
        for role in [InvitationRole::Client, InvitationRole::TeamMember] {
            let db: InvitationRoleDb = role.into();
            assert_eq!(InvitationRole::from(db), role);
        }
    }
}
