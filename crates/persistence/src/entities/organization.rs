//! Organization entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Organization, Plan};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the organizations table.
///
/// The plan column is plain text rather than a database enum: any value
/// other than `studio` maps to the creator tier, so an unrecognized plan
/// string degrades to the lower quota instead of failing row decoding.
#[derive(Debug, Clone, FromRow)]
pub struct OrganizationEntity {
    pub id: Uuid,
    pub name: String,
    pub company: String,
    pub plan: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<OrganizationEntity> for Organization {
    fn from(entity: OrganizationEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            company: entity.company,
            plan: Plan::from_stored(&entity.plan),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(plan: &str) -> OrganizationEntity {
        OrganizationEntity {
            id: Uuid::new_v4(),
            name: "Acme Media".to_string(),
            company: "Acme Inc".to_string(),
            plan: plan.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_studio_plan_maps_to_studio() {
        let org: Organization = entity("studio").into();
        assert_eq!(org.plan, Plan::Studio);
    }

    #[test]
    fn test_unknown_plan_maps_to_creator() {
        let org: Organization = entity("premium").into();
        assert_eq!(org.plan, Plan::Creator);
    }
}
