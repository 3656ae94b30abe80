//! Domain models for Studio Portal.

pub mod invitation;
pub mod organization;
pub mod project;
pub mod user;

pub use invitation::{
    CompleteRegistrationRequest, CreateInvitationRequest, Invitation, InvitationRole,
    InvitationStatus, InvitationWithOrganization, OrganizationSummary, INVITATION_TTL_DAYS,
};
pub use organization::{
    CreateOrganizationRequest, Organization, Plan, UpdateOrganizationRequest,
};
pub use project::{
    CreateProjectRequest, Project, ProjectStatus, UpdateProjectStatusRequest,
};
pub use user::{LoginRequest, LoginResponse, User, UserRole};
