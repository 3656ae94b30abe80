//! Monthly project-quota enforcement.
//!
//! Gates project creation so an organization cannot exceed its plan's
//! monthly allowance. The window is the calendar month (UTC) containing the
//! proposed creation time, from the 1st at 00:00:00 inclusive.
//!
//! The check is read-then-act: the count and the subsequent insert are
//! separate statements, so two concurrent requests can both pass before
//! either insert commits. Known gap, kept deliberately.

use chrono::{DateTime, Utc};
use persistence::repositories::{OrganizationRepository, ProjectRepository};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiError;

/// Outcome of a quota check that permitted creation.
#[derive(Debug, Clone, Copy)]
pub struct QuotaCheck {
    /// Plan-derived monthly limit.
    pub limit: i64,
    /// Projects already created this calendar month.
    pub used: i64,
}

/// Errors from the quota check.
#[derive(Debug, Error)]
pub enum QuotaError {
    #[error("Organization not found")]
    OrganizationNotFound,

    #[error("Monthly project limit ({limit}) reached for this organization")]
    Exceeded { limit: i64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<QuotaError> for ApiError {
    fn from(err: QuotaError) -> Self {
        match err {
            QuotaError::OrganizationNotFound => {
                ApiError::NotFound("Organization not found".to_string())
            }
            QuotaError::Exceeded { limit } => ApiError::QuotaExceeded { limit },
            QuotaError::Database(e) => e.into(),
        }
    }
}

/// Pure quota decision: reject once the month's count has reached the limit.
fn enforce(used: i64, limit: i64) -> Result<(), QuotaError> {
    if used >= limit {
        Err(QuotaError::Exceeded { limit })
    } else {
        Ok(())
    }
}

/// Checks whether the organization may create a project at `proposed_at`.
///
/// Read-only: permitting creation reserves nothing; the caller performs the
/// insert as a separate, subsequent operation.
pub async fn check_monthly_quota(
    pool: &PgPool,
    organization_id: Uuid,
    proposed_at: DateTime<Utc>,
) -> Result<QuotaCheck, QuotaError> {
    let org_repo = OrganizationRepository::new(pool.clone());
    let organization = org_repo
        .find_by_id(organization_id)
        .await?
        .ok_or(QuotaError::OrganizationNotFound)?;

    let limit = organization.plan.monthly_project_quota();
    let window_start = shared::time::month_start(proposed_at);

    let project_repo = ProjectRepository::new(pool.clone());
    let used = project_repo
        .count_created_since(organization_id, window_start)
        .await?;

    enforce(used, limit)?;

    Ok(QuotaCheck { limit, used })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::Plan;

    #[test]
    fn test_enforce_permits_below_limit() {
        assert!(enforce(0, 8).is_ok());
        assert!(enforce(7, 8).is_ok());
        assert!(enforce(15, 16).is_ok());
    }

    #[test]
    fn test_enforce_rejects_at_limit() {
        let err = enforce(8, 8).unwrap_err();
        assert!(matches!(err, QuotaError::Exceeded { limit: 8 }));
    }

    #[test]
    fn test_enforce_rejects_above_limit() {
        // Counts above the limit can exist (concurrent creations slipped
        // through the race window); they must still reject.
        assert!(matches!(enforce(9, 8), Err(QuotaError::Exceeded { limit: 8 })));
    }

    #[test]
    fn test_creator_org_full_month_is_rejected() {
        let limit = Plan::Creator.monthly_project_quota();
        assert!(matches!(
            enforce(8, limit),
            Err(QuotaError::Exceeded { limit: 8 })
        ));
    }

    #[test]
    fn test_studio_org_gets_the_larger_limit() {
        let limit = Plan::Studio.monthly_project_quota();
        assert!(enforce(8, limit).is_ok());
        assert!(enforce(15, limit).is_ok());
        assert!(matches!(
            enforce(16, limit),
            Err(QuotaError::Exceeded { limit: 16 })
        ));
    }

    #[test]
    fn test_exceeded_maps_to_quota_api_error() {
        let api: ApiError = QuotaError::Exceeded { limit: 8 }.into();
        assert!(matches!(api, ApiError::QuotaExceeded { limit: 8 }));
    }

    #[test]
    fn test_not_found_maps_to_404_error() {
        let api: ApiError = QuotaError::OrganizationNotFound.into();
        assert!(matches!(api, ApiError::NotFound(_)));
    }
}
