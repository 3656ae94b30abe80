//! HTTP route handlers.

pub mod auth;
pub mod health;
pub mod invitations;
pub mod organizations;
pub mod projects;
