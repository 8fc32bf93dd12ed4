use axum::http::StatusCode;
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use model::entities::user::{self, Permission};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::auth::password::hash_password;
use crate::router::create_router;
use crate::schemas::AppState;

pub const ADMIN_EMAIL: &str = "lead@workshop.test";
pub const EDITOR_EMAIL: &str = "machinist@workshop.test";
pub const READONLY_EMAIL: &str = "visitor@workshop.test";
pub const TEST_PASSWORD: &str = "bag-of-bolts";

/// Create an in-memory SQLite database for testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    // Run migrations
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

async fn seed_user(db: &DatabaseConnection, email: &str, permission: Permission) {
    user::ActiveModel {
        email: Set(email.to_string()),
        first_name: Set("Test".to_string()),
        last_name: Set("User".to_string()),
        password_hash: Set(hash_password(TEST_PASSWORD).expect("Failed to hash password")),
        permission: Set(permission),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed user");
}

/// Create AppState with one seeded user per permission level
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;

    seed_user(&db, ADMIN_EMAIL, Permission::Admin).await;
    seed_user(&db, EDITOR_EMAIL, Permission::Editor).await;
    seed_user(&db, READONLY_EMAIL, Permission::ReadOnly).await;

    AppState { db }
}

/// Create a test server with cookie persistence, so the session cookie set
/// by `login_as` sticks across subsequent requests.
pub async fn setup_test_server() -> TestServer {
    let state = setup_test_app_state().await;
    let router = create_router(state);
    let mut server = TestServer::new(router).expect("Failed to start test server");
    server.do_save_cookies();
    server
}

/// Sign in through the real login route, replacing any current session.
pub async fn login_as(server: &TestServer, email: &str) {
    let response = server
        .post("/login")
        .form(&[("email", email), ("password", TEST_PASSWORD)])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
}
