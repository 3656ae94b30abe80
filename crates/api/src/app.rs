use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{require_admin, require_auth};
use crate::routes::{auth, health, invitations, organizations, projects};
use crate::services::EmailService;
use shared::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub jwt: JwtConfig,
    pub email: EmailService,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let jwt = JwtConfig::new(&config.jwt.secret, config.jwt.access_token_expiry_secs);
    let email = EmailService::new(config.email.clone());
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
        jwt,
        email,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::readiness))
        .route("/api/health/live", get(health::liveness))
        .route("/api/v1/auth/login", post(auth::login))
        .route(
            "/api/v1/auth/register/complete",
            post(auth::complete_registration),
        )
        // Checked by the registration page before the invitee has an account
        .route(
            "/api/v1/invitations/validate",
            get(invitations::validate_invitation),
        );

    // Authenticated routes (any valid user)
    let authed_routes = Router::new()
        .route("/api/v1/projects", post(projects::create_project))
        .route("/api/v1/projects/workflow", get(projects::workflow_steps))
        .route("/api/v1/projects/:project_id", get(projects::get_project))
        .route(
            "/api/v1/projects/:project_id/status",
            patch(projects::update_project_status),
        )
        .route(
            "/api/v1/projects/:project_id",
            delete(projects::delete_project),
        )
        .route(
            "/api/v1/organizations/:org_id/projects",
            get(projects::list_projects),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Admin routes
    let admin_routes = Router::new()
        .route(
            "/api/v1/organizations",
            post(organizations::create_organization).get(organizations::list_organizations),
        )
        .route(
            "/api/v1/organizations/:org_id",
            get(organizations::get_organization)
                .patch(organizations::update_organization)
                .delete(organizations::delete_organization),
        )
        .route(
            "/api/v1/invitations",
            post(invitations::create_invitation),
        )
        .route(
            "/api/v1/organizations/:org_id/invitations",
            get(invitations::list_pending_invitations),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(authed_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
