//! Organization admin routes.
//!
//! CRUD over the paying customer entity. All endpoints require the admin
//! role; plan changes take effect on the next quota check.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use domain::models::{CreateOrganizationRequest, UpdateOrganizationRequest};
use persistence::repositories::OrganizationRepository;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// POST /api/v1/organizations
pub async fn create_organization(
    State(state): State<AppState>,
    Json(request): Json<CreateOrganizationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let repo = OrganizationRepository::new(state.pool.clone());
    let organization = repo
        .create(&request.name, &request.company, request.plan)
        .await?;

    info!(
        organization_id = %organization.id,
        plan = %organization.plan,
        "Created organization"
    );

    Ok((StatusCode::CREATED, Json(organization)))
}

/// GET /api/v1/organizations
pub async fn list_organizations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = OrganizationRepository::new(state.pool.clone());
    let organizations = repo.list().await?;

    Ok(Json(organizations))
}

/// GET /api/v1/organizations/:org_id
pub async fn get_organization(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = OrganizationRepository::new(state.pool.clone());
    let organization = repo
        .find_by_id(org_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Organization not found".to_string()))?;

    Ok(Json(organization))
}

/// PATCH /api/v1/organizations/:org_id
///
/// Partial update; absent fields keep their current value.
pub async fn update_organization(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
    Json(request): Json<UpdateOrganizationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let repo = OrganizationRepository::new(state.pool.clone());
    let organization = repo
        .update(
            org_id,
            request.name.as_deref(),
            request.company.as_deref(),
            request.plan,
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Organization not found".to_string()))?;

    info!(organization_id = %org_id, "Updated organization");

    Ok(Json(organization))
}

/// DELETE /api/v1/organizations/:org_id
///
/// Fails with 409 while projects, invitations or users still reference the
/// organization.
pub async fn delete_organization(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = OrganizationRepository::new(state.pool.clone());
    let deleted = repo.delete(org_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Organization not found".to_string()));
    }

    info!(organization_id = %org_id, "Deleted organization");

    Ok(StatusCode::NO_CONTENT)
}
