//! Project entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::{Project, ProjectStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for project_status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
pub enum ProjectStatusDb {
    NotStarted,
    Writing,
    Filming,
    Editing,
    Revising,
    Delivered,
}

impl From<ProjectStatusDb> for ProjectStatus {
    fn from(db: ProjectStatusDb) -> Self {
        match db {
            ProjectStatusDb::NotStarted => Self::NotStarted,
            ProjectStatusDb::Writing => Self::Writing,
            ProjectStatusDb::Filming => Self::Filming,
            ProjectStatusDb::Editing => Self::Editing,
            ProjectStatusDb::Revising => Self::Revising,
            ProjectStatusDb::Delivered => Self::Delivered,
        }
    }
}

impl From<ProjectStatus> for ProjectStatusDb {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::NotStarted => Self::NotStarted,
            ProjectStatus::Writing => Self::Writing,
            ProjectStatus::Filming => Self::Filming,
            ProjectStatus::Editing => Self::Editing,
            ProjectStatus::Revising => Self::Revising,
            ProjectStatus::Delivered => Self::Delivered,
        }
    }
}

/// Database row mapping for the projects table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectEntity {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub status: ProjectStatusDb,
    pub start_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectEntity> for Project {
    fn from(entity: ProjectEntity) -> Self {
        Self {
            id: entity.id,
            organization_id: entity.organization_id,
            title: entity.title,
            status: entity.status.into(),
            start_date: entity.start_date,
            due_date: entity.due_date,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion_round_trip() {
        for status in ProjectStatus::WORKFLOW {
            let db: ProjectStatusDb = status.into();
            assert_eq!(ProjectStatus::from(db), status);
        }
    }
}
