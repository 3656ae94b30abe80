//! Organization repository for database operations.

use domain::models::{Organization, Plan};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::OrganizationEntity;

/// Repository for organization database operations.
#[derive(Clone)]
pub struct OrganizationRepository {
    pool: PgPool,
}

impl OrganizationRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new organization.
    pub async fn create(
        &self,
        name: &str,
        company: &str,
        plan: Plan,
    ) -> Result<Organization, sqlx::Error> {
        let entity = sqlx::query_as::<_, OrganizationEntity>(
            r#"
            INSERT INTO organizations (name, company, plan)
            VALUES ($1, $2, $3)
            RETURNING id, name, company, plan, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(company)
        .bind(plan.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Find organization by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Organization>, sqlx::Error> {
        let entity = sqlx::query_as::<_, OrganizationEntity>(
            r#"
            SELECT id, name, company, plan, created_at, updated_at
            FROM organizations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// List all organizations, newest first.
    pub async fn list(&self) -> Result<Vec<Organization>, sqlx::Error> {
        let entities = sqlx::query_as::<_, OrganizationEntity>(
            r#"
            SELECT id, name, company, plan, created_at, updated_at
            FROM organizations
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    /// Update organization fields; absent fields keep their current value.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        company: Option<&str>,
        plan: Option<Plan>,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let entity = sqlx::query_as::<_, OrganizationEntity>(
            r#"
            UPDATE organizations
            SET
                name = COALESCE($2, name),
                company = COALESCE($3, company),
                plan = COALESCE($4, plan),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, company, plan, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(company)
        .bind(plan.map(|p| p.to_string()))
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Delete an organization.
    ///
    /// Dependent projects, invitations and users are never cascaded; the
    /// foreign keys are RESTRICT, so the delete fails until dependents are
    /// detached first.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM organizations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
