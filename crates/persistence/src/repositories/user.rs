//! User repository for database operations.

use domain::models::{User, UserRole};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{UserEntity, UserRoleDb};

/// Repository for user database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user.
    pub async fn create(
        &self,
        email: &str,
        name: &str,
        role: UserRole,
        organization_id: Option<Uuid>,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let entity = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (email, name, role, organization_id, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, name, role, organization_id, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(UserRoleDb::from(role))
        .bind(organization_id)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Find user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let entity = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, email, name, role, organization_id, password_hash, created_at
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Find user by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let entity = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, email, name, role, organization_id, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }
}
