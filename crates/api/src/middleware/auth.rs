//! JWT authentication middleware.
//!
//! Validates the Bearer token and stores the caller's identity, role and
//! organization in request extensions for downstream handlers. This layer
//! only establishes who the caller is; handlers decide what they may do.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use domain::models::UserRole;
use shared::jwt::{Claims, JwtConfig};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// Authenticated caller information extracted from the JWT.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: UserRole,
    pub organization_id: Option<Uuid>,
}

impl AuthUser {
    /// Builds caller info from validated claims.
    fn from_claims(claims: Claims) -> Result<Self, ApiError> {
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".to_string()))?;

        let role = match claims.role.as_str() {
            "admin" => UserRole::Admin,
            "client" => UserRole::Client,
            "teamMember" => UserRole::TeamMember,
            other => {
                return Err(ApiError::Unauthorized(format!(
                    "Unknown role in token: {}",
                    other
                )))
            }
        };

        Ok(AuthUser {
            user_id,
            role,
            organization_id: claims.org,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

fn bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
}

fn authenticate(jwt: &JwtConfig, req: &Request<Body>) -> Result<AuthUser, ApiError> {
    let token = bearer_token(req).ok_or_else(|| {
        ApiError::Unauthorized("Missing or invalid Authorization header".to_string())
    })?;

    let claims = jwt
        .validate_token(token)
        .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

    AuthUser::from_claims(claims)
}

/// Middleware that requires a valid JWT.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match authenticate(&state.jwt, &req) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}

/// Middleware that requires a valid JWT carrying the admin role.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match authenticate(&state.jwt, &req) {
        Ok(user) if user.is_admin() => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Ok(_) => ApiError::Forbidden("Admin access required".to_string()).into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: &str, sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            role: role.to_string(),
            org: None,
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn test_from_claims_maps_roles() {
        let id = Uuid::new_v4();
        let user = AuthUser::from_claims(claims("admin", &id.to_string())).unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert!(user.is_admin());

        let user = AuthUser::from_claims(claims("teamMember", &id.to_string())).unwrap();
        assert_eq!(user.role, UserRole::TeamMember);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_from_claims_rejects_unknown_role() {
        let id = Uuid::new_v4();
        let result = AuthUser::from_claims(claims("superuser", &id.to_string()));
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_from_claims_rejects_bad_subject() {
        let result = AuthUser::from_claims(claims("admin", "not-a-uuid"));
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }
}
