//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod invitation;
pub mod organization;
pub mod project;
pub mod user;

pub use invitation::{
    InvitationEntity, InvitationRoleDb, InvitationStatusDb, InvitationWithOrganizationEntity,
};
pub use organization::OrganizationEntity;
pub use project::{ProjectEntity, ProjectStatusDb};
pub use user::{UserEntity, UserRoleDb};
