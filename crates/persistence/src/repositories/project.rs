//! Project repository for database operations.

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::{Project, ProjectStatus};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{ProjectEntity, ProjectStatusDb};

/// Repository for project database operations.
#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new project with status `not_started`.
    ///
    /// Callers run the monthly quota check first; this insert is a separate
    /// statement, so the count-then-insert sequence is not atomic.
    pub async fn create(
        &self,
        organization_id: Uuid,
        title: &str,
        start_date: NaiveDate,
        due_date: Option<NaiveDate>,
    ) -> Result<Project, sqlx::Error> {
        let entity = sqlx::query_as::<_, ProjectEntity>(
            r#"
            INSERT INTO projects (organization_id, title, start_date, due_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, organization_id, title, status, start_date, due_date, created_at
            "#,
        )
        .bind(organization_id)
        .bind(title)
        .bind(start_date)
        .bind(due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Find project by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
        let entity = sqlx::query_as::<_, ProjectEntity>(
            r#"
            SELECT id, organization_id, title, status, start_date, due_date, created_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// List projects for an organization, newest first.
    pub async fn list_by_organization(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let entities = sqlx::query_as::<_, ProjectEntity>(
            r#"
            SELECT id, organization_id, title, status, start_date, due_date, created_at
            FROM projects
            WHERE organization_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    /// Count projects created for an organization since `since` (inclusive).
    ///
    /// Used by the monthly quota check with the first instant of the current
    /// calendar month as the lower bound.
    pub async fn count_created_since(
        &self,
        organization_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<i64, sqlx::Error> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM projects
            WHERE organization_id = $1 AND created_at >= $2
            "#,
        )
        .bind(organization_id)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Move a project to another workflow step.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ProjectStatus,
    ) -> Result<Option<Project>, sqlx::Error> {
        let entity = sqlx::query_as::<_, ProjectEntity>(
            r#"
            UPDATE projects
            SET status = $2
            WHERE id = $1
            RETURNING id, organization_id, title, status, start_date, due_date, created_at
            "#,
        )
        .bind(id)
        .bind(ProjectStatusDb::from(status))
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Delete a project.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
