//! Shared utilities and common types for Studio Portal backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Invitation token generation
//! - Calendar-month window helpers for quota accounting
//! - Password hashing with Argon2id
//! - JWT token utilities

pub mod jwt;
pub mod password;
pub mod time;
pub mod token;
