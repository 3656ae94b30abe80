//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{User, UserRole};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for user_role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "camelCase")]
pub enum UserRoleDb {
    Admin,
    Client,
    TeamMember,
}

impl From<UserRoleDb> for UserRole {
    fn from(db: UserRoleDb) -> Self {
        match db {
            UserRoleDb::Admin => Self::Admin,
            UserRoleDb::Client => Self::Client,
            UserRoleDb::TeamMember => Self::TeamMember,
        }
    }
}

impl From<UserRole> for UserRoleDb {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::Admin,
            UserRole::Client => Self::Client,
            UserRole::TeamMember => Self::TeamMember,
        }
    }
}

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRoleDb,
    pub organization_id: Option<Uuid>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserEntity> for User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: entity.role.into(),
            organization_id: entity.organization_id,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_conversion_round_trip() {
        for role in [UserRole::Admin, UserRole::Client, UserRole::TeamMember] {
            let db: UserRoleDb = role.into();
            assert_eq!(UserRole::from(db), role);
        }
    }
}
