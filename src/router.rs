use crate::auth::guard::require_auth;
use crate::handlers::{
    auth::{change_password, change_password_page, login, login_page, logout, root},
    health::health_check,
    parts::{
        create_part, delete_part, delete_part_page, edit_part, edit_part_page, get_part,
        new_part_page,
    },
    projects::{
        create_project, dashboards, delete_project, delete_project_page, edit_project,
        edit_project_page, get_project, list_projects, new_project_page, project_dashboard,
    },
    users::{
        create_user, delete_user, delete_user_page, edit_user, edit_user_page, list_users,
        new_user_page,
    },
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Everything except the login page (and the ambient health/docs
    // endpoints) sits behind the authentication gate.
    let protected = Router::new()
        .route("/", get(root))
        .route("/logout", get(logout))
        .route(
            "/change_password",
            get(change_password_page).post(change_password),
        )
        // Project routes
        .route("/projects", get(list_projects).post(create_project))
        .route("/new_project", get(new_project_page))
        .route("/projects/:project_id", get(get_project))
        .route(
            "/projects/:project_id/edit",
            get(edit_project_page).post(edit_project),
        )
        .route(
            "/projects/:project_id/delete",
            get(delete_project_page).post(delete_project),
        )
        .route("/projects/:project_id/dashboard", get(project_dashboard))
        .route("/projects/:project_id/new_part", get(new_part_page))
        .route("/dashboards", get(dashboards))
        // Part routes
        .route("/parts", post(create_part))
        .route("/parts/:part_id", get(get_part))
        .route("/parts/:part_id/edit", get(edit_part_page).post(edit_part))
        .route(
            "/parts/:part_id/delete",
            get(delete_part_page).post(delete_part),
        )
        // User administration routes
        .route("/users", get(list_users).post(create_user))
        .route("/new_user", get(new_user_page))
        .route("/users/:user_id/edit", get(edit_user_page).post(edit_user))
        .route(
            "/users/:user_id/delete",
            get(delete_user_page).post(delete_user),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Login is the one application route reachable without a session
        .route("/login", get(login_page).post(login))
        .merge(protected)
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(session_layer),
        )
        .with_state(state)
}
