//! Business rule services and external collaborators.

pub mod auth;
pub mod email;
pub mod invitations;
pub mod quota;

pub use email::EmailService;
