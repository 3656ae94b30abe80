//! Organization domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Subscription plans available for organizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Creator,
    Studio,
}

impl Plan {
    /// Maximum number of projects an organization on this plan may create
    /// within one calendar month.
    pub fn monthly_project_quota(&self) -> i64 {
        match self {
            Plan::Studio => 16,
            Plan::Creator => 8,
        }
    }

    /// Parses a stored plan value. Anything other than `studio` collapses to
    /// the `creator` tier, including unrecognized values, so a bad plan
    /// string degrades to the lower quota instead of breaking project
    /// creation.
    pub fn from_stored(value: &str) -> Plan {
        if value.eq_ignore_ascii_case("studio") {
            Plan::Studio
        } else {
            Plan::Creator
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Plan::Creator => write!(f, "creator"),
            Plan::Studio => write!(f, "studio"),
        }
    }
}

/// Organization domain model. The paying customer entity; owns projects,
/// invitations and users.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub company: String,
    pub plan: Plan,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating an organization.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: String,

    #[validate(length(max = 120, message = "Company must be at most 120 characters"))]
    #[serde(default)]
    pub company: String,

    pub plan: Plan,
}

/// Request payload for updating an organization. All fields optional; the
/// plan is mutable so a client can move between tiers.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 120, message = "Company must be at most 120 characters"))]
    pub company: Option<String>,

    pub plan: Option<Plan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_studio_quota_is_sixteen() {
        assert_eq!(Plan::Studio.monthly_project_quota(), 16);
    }

    #[test]
    fn test_creator_quota_is_eight() {
        assert_eq!(Plan::Creator.monthly_project_quota(), 8);
    }

    #[test]
    fn test_from_stored_known_plans() {
        assert_eq!(Plan::from_stored("studio"), Plan::Studio);
        assert_eq!(Plan::from_stored("creator"), Plan::Creator);
    }

    #[test]
    fn test_from_stored_unknown_plan_falls_back_to_creator_tier() {
        assert_eq!(Plan::from_stored("enterprise"), Plan::Creator);
        assert_eq!(Plan::from_stored(""), Plan::Creator);
        assert_eq!(Plan::from_stored("studioo"), Plan::Creator);
    }

    #[test]
    fn test_unknown_plan_gets_the_eight_project_quota() {
        assert_eq!(Plan::from_stored("gold").monthly_project_quota(), 8);
    }

    #[test]
    fn test_plan_serde_round_trip() {
        let json = serde_json::to_string(&Plan::Studio).unwrap();
        assert_eq!(json, "\"studio\"");
        let plan: Plan = serde_json::from_str("\"creator\"").unwrap();
        assert_eq!(plan, Plan::Creator);
    }

    #[test]
    fn test_plan_display() {
        assert_eq!(Plan::Creator.to_string(), "creator");
        assert_eq!(Plan::Studio.to_string(), "studio");
    }
}
