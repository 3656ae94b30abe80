//! Invitation domain models.
//!
//! An invitation is a time-boxed, single-use token granting registration
//! rights to a named email for a given role within an organization.
//!
//! State machine: `pending` (initial) -> `accepted` (terminal) or
//! `pending` -> `expired` (terminal). Expiry is materialized lazily, on the
//! next validation check after `expires_at` has passed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Invitations are valid for 7 days (168 hours) from creation.
pub const INVITATION_TTL_DAYS: i64 = 7;

/// Role an invitee will hold after completing registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvitationRole {
    #[serde(rename = "client")]
    Client,
    #[serde(rename = "teamMember")]
    TeamMember,
}

impl std::fmt::Display for InvitationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvitationRole::Client => write!(f, "client"),
            InvitationRole::TeamMember => write!(f, "teamMember"),
        }
    }
}

/// Invitation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Expired,
}

/// Invitation domain model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: InvitationRole,
    pub organization_id: Uuid,
    /// Unique random token; the sole lookup key for validation/acceptance.
    pub token: String,
    pub status: InvitationStatus,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    /// Pure expiry predicate: the deadline has passed at `now`, regardless
    /// of whether storage has caught up.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// Whether this invitation can still be redeemed at `now`: stored status
    /// is `pending` and the deadline has not passed.
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.status == InvitationStatus::Pending && !self.is_expired(now)
    }
}

/// Minimal organization fields shown on the registration page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSummary {
    pub id: Uuid,
    pub name: String,
    pub company: String,
}

/// Invitation joined with its organization's display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationWithOrganization {
    #[serde(flatten)]
    pub invitation: Invitation,
    pub organization: OrganizationSummary,
}

/// Request payload for creating an invitation (admin-only).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationRequest {
    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,

    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: String,

    pub role: InvitationRole,

    pub organization_id: Uuid,
}

/// Request payload for finishing registration with an invitation token.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRegistrationRequest {
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,

    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn invitation(status: InvitationStatus, expires_at: DateTime<Utc>) -> Invitation {
        Invitation {
            id: Uuid::new_v4(),
            email: SafeEmail().fake(),
            name: Name().fake(),
            role: InvitationRole::Client,
            organization_id: Uuid::new_v4(),
            token: "deadbeef".to_string(),
            status,
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_pending_unexpired_is_usable() {
        let now = Utc::now();
        let inv = invitation(InvitationStatus::Pending, now + Duration::days(3));
        assert!(inv.is_usable(now));
        assert!(!inv.is_expired(now));
    }

    #[test]
    fn test_pending_past_deadline_is_not_usable() {
        // Status still reads pending but the deadline has passed; the
        // invitation is invalid before storage flips it to expired.
        let now = Utc::now();
        let inv = invitation(InvitationStatus::Pending, now - Duration::hours(1));
        assert!(inv.is_expired(now));
        assert!(!inv.is_usable(now));
    }

    #[test]
    fn test_accepted_is_not_usable_even_before_deadline() {
        let now = Utc::now();
        let inv = invitation(InvitationStatus::Accepted, now + Duration::days(3));
        assert!(!inv.is_usable(now));
    }

    #[test]
    fn test_expired_status_is_not_usable() {
        let now = Utc::now();
        let inv = invitation(InvitationStatus::Expired, now - Duration::days(1));
        assert!(!inv.is_usable(now));
    }

    #[test]
    fn test_role_serde_uses_camel_case_values() {
        assert_eq!(serde_json::to_string(&InvitationRole::TeamMember).unwrap(), "\"teamMember\"");
        assert_eq!(serde_json::to_string(&InvitationRole::Client).unwrap(), "\"client\"");

        let role: InvitationRole = serde_json::from_str("\"teamMember\"").unwrap();
        assert_eq!(role, InvitationRole::TeamMember);
    }

    #[test]
    fn test_admin_is_not_an_invitable_role() {
        let result: Result<InvitationRole, _> = serde_json::from_str("\"admin\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(serde_json::to_string(&InvitationStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&InvitationStatus::Accepted).unwrap(), "\"accepted\"");
        assert_eq!(serde_json::to_string(&InvitationStatus::Expired).unwrap(), "\"expired\"");
    }
}
