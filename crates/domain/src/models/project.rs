//! Project domain models.
//!
//! Projects step through a fixed production workflow. Status changes are
//! driven by the UI; the server records whatever step the caller picks and
//! does not police transition order.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Production workflow status for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    NotStarted,
    Writing,
    Filming,
    Editing,
    Revising,
    Delivered,
}

impl ProjectStatus {
    /// The workflow steps in display order.
    pub const WORKFLOW: [ProjectStatus; 6] = [
        ProjectStatus::NotStarted,
        ProjectStatus::Writing,
        ProjectStatus::Filming,
        ProjectStatus::Editing,
        ProjectStatus::Revising,
        ProjectStatus::Delivered,
    ];
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProjectStatus::NotStarted => "not_started",
            ProjectStatus::Writing => "writing",
            ProjectStatus::Filming => "filming",
            ProjectStatus::Editing => "editing",
            ProjectStatus::Revising => "revising",
            ProjectStatus::Delivered => "delivered",
        };
        write!(f, "{}", s)
    }
}

/// Project domain model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a project. Creation is gated by the
/// organization's monthly quota.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub organization_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    pub start_date: NaiveDate,

    pub due_date: Option<NaiveDate>,
}

/// Request payload for moving a project to another workflow step.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectStatusRequest {
    pub status: ProjectStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_uses_snake_case() {
        let json = serde_json::to_string(&ProjectStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not_started\"");

        let status: ProjectStatus = serde_json::from_str("\"filming\"").unwrap();
        assert_eq!(status, ProjectStatus::Filming);
    }

    #[test]
    fn test_status_display_matches_serde() {
        for status in ProjectStatus::WORKFLOW {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_workflow_order() {
        assert_eq!(ProjectStatus::WORKFLOW.first(), Some(&ProjectStatus::NotStarted));
        assert_eq!(ProjectStatus::WORKFLOW.last(), Some(&ProjectStatus::Delivered));
        assert_eq!(ProjectStatus::WORKFLOW.len(), 6);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<ProjectStatus, _> = serde_json::from_str("\"archived\"");
        assert!(result.is_err());
    }
}
