//! Domain layer for Studio Portal backend.
//!
//! This crate contains:
//! - Domain models (Organization, Project, Invitation, User)
//! - Request/response DTOs with validation
//! - Pure business rules (plan quotas, invitation validity)

pub mod models;
