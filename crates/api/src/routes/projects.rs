//! Project routes.
//!
//! Creation is gated by the monthly quota: the plan-derived limit is
//! checked against the calendar month's count before the insert. The two
//! steps are separate statements, so concurrent creations can briefly
//! overshoot the limit.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use domain::models::{CreateProjectRequest, ProjectStatus, UpdateProjectStatusRequest};
use persistence::repositories::ProjectRepository;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::quota;

/// Non-admin callers may only touch projects of their own organization.
fn check_organization_access(user: &AuthUser, organization_id: Uuid) -> Result<(), ApiError> {
    if user.is_admin() || user.organization_id == Some(organization_id) {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "Access to this organization is not allowed".to_string(),
        ))
    }
}

/// POST /api/v1/projects
///
/// Creates a project after the monthly quota check passes. A full month
/// yields 403 with the limit in the message.
pub async fn create_project(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    check_organization_access(&user, request.organization_id)?;

    let check = quota::check_monthly_quota(&state.pool, request.organization_id, Utc::now())
        .await
        .map_err(ApiError::from)?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .create(
            request.organization_id,
            &request.title,
            request.start_date,
            request.due_date,
        )
        .await?;

    info!(
        project_id = %project.id,
        organization_id = %project.organization_id,
        used = check.used + 1,
        limit = check.limit,
        "Created project"
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects/workflow
///
/// The production workflow steps in display order, for the project board UI.
pub async fn workflow_steps() -> Json<[ProjectStatus; 6]> {
    Json(ProjectStatus::WORKFLOW)
}

/// GET /api/v1/organizations/:org_id/projects
pub async fn list_projects(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(org_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    check_organization_access(&user, org_id)?;

    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.list_by_organization(org_id).await?;

    Ok(Json(projects))
}

/// GET /api/v1/projects/:project_id
pub async fn get_project(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    check_organization_access(&user, project.organization_id)?;

    Ok(Json(project))
}

/// PATCH /api/v1/projects/:project_id/status
///
/// Moves the project to another workflow step. Any step can be set
/// directly; the workflow order is advisory, not enforced.
pub async fn update_project_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(project_id): Path<Uuid>,
    Json(request): Json<UpdateProjectStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProjectRepository::new(state.pool.clone());
    let existing = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    check_organization_access(&user, existing.organization_id)?;

    let project = repo
        .update_status(project_id, request.status)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    info!(
        project_id = %project_id,
        status = %project.status,
        "Updated project status"
    );

    Ok(Json(project))
}

/// DELETE /api/v1/projects/:project_id
///
/// Deleting frees no quota for the month the project was created in; the
/// count is over creations, not surviving rows.
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProjectRepository::new(state.pool.clone());
    let existing = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    check_organization_access(&user, existing.organization_id)?;

    repo.delete(project_id).await?;

    info!(project_id = %project_id, "Deleted project");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::UserRole;

    fn user(role: UserRole, org: Option<Uuid>) -> AuthUser {
        AuthUser {
            user_id: Uuid::new_v4(),
            role,
            organization_id: org,
        }
    }

    #[test]
    fn test_admin_may_access_any_organization() {
        let admin = user(UserRole::Admin, None);
        assert!(check_organization_access(&admin, Uuid::new_v4()).is_ok());
    }

    #[test]
    fn test_member_may_access_own_organization() {
        let org = Uuid::new_v4();
        let member = user(UserRole::TeamMember, Some(org));
        assert!(check_organization_access(&member, org).is_ok());
    }

    #[test]
    fn test_member_may_not_access_other_organization() {
        let member = user(UserRole::Client, Some(Uuid::new_v4()));
        let result = check_organization_access(&member, Uuid::new_v4());
        assert!(matches!(result, Err(ApiError::Forbidden(_))));
    }

    #[test]
    fn test_member_without_organization_is_rejected() {
        let member = user(UserRole::Client, None);
        let result = check_organization_access(&member, Uuid::new_v4());
        assert!(matches!(result, Err(ApiError::Forbidden(_))));
    }

    #[test]
    fn test_workflow_steps_serialize_in_board_order() {
        let json = serde_json::to_value(ProjectStatus::WORKFLOW).unwrap();
        let steps: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            steps,
            ["not_started", "writing", "filming", "editing", "revising", "delivered"]
        );
    }
}
