use anyhow::Result;
use sea_orm::Database;

use crate::schemas::AppState;

/// Initialize application state for the given database URL
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    Ok(AppState { db })
}

/// Get database URL from environment or use default
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://shopparts.db".to_string())
}

/// Get bind address from environment or use default
pub fn get_bind_address() -> String {
    std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
