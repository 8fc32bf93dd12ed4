use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::auth::login_page,
        crate::handlers::auth::login,
        crate::handlers::auth::logout,
        crate::handlers::auth::change_password,
        crate::handlers::projects::list_projects,
        crate::handlers::projects::create_project,
        crate::handlers::projects::get_project,
        crate::handlers::projects::project_dashboard,
        crate::handlers::parts::create_part,
        crate::handlers::parts::get_part,
        crate::handlers::parts::edit_part,
        crate::handlers::parts::delete_part,
        crate::handlers::users::list_users,
        crate::handlers::users::create_user,
    ),
    components(
        schemas(
            HealthResponse,
            crate::handlers::auth::LoginPage,
            crate::handlers::projects::ProjectResponse,
            crate::handlers::projects::ProjectDetail,
            crate::handlers::projects::DashboardResponse,
            crate::handlers::projects::StatusCount,
            crate::handlers::parts::PartResponse,
            crate::handlers::parts::PartDetail,
            crate::handlers::users::UserResponse,
        )
    ),
    tags(
        (name = "auth", description = "Login, logout and password management"),
        (name = "projects", description = "Project management endpoints"),
        (name = "parts", description = "Part and assembly endpoints"),
        (name = "users", description = "User administration endpoints"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Shopparts API",
        description = "Workshop parts tracker - projects, assemblies and parts with role-gated editing",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
