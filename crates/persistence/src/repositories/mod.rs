//! Repository implementations for database operations.

pub mod invitation;
pub mod organization;
pub mod project;
pub mod user;

pub use invitation::InvitationRepository;
pub use organization::OrganizationRepository;
pub use project::ProjectRepository;
pub use user::UserRepository;
