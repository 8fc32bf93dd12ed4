use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::initialize_app_state_with_url;
use crate::router::create_router;

pub async fn serve(database_url: &str, bind_address: &str) -> Result<()> {
    info!("Parts tracker starting up");
    debug!("Database URL: {}", database_url);
    debug!("Bind address: {}", bind_address);

    let state = match initialize_app_state_with_url(database_url).await {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    let app = create_router(state);

    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
