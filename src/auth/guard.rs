//! Authentication and permission gates.
//!
//! Every route except `/login` (and the unauthenticated health and docs
//! endpoints) sits behind `require_auth`, which resolves the session user
//! and makes it available to handlers through request extensions. Handlers
//! then apply the route-specific permission gate with `require_permission`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use model::entities::user;
use sea_orm::EntityTrait;
use tower_sessions::Session;
use tracing::debug;

use crate::{auth::session::AuthSession, error::AppError, schemas::AppState};

/// The authenticated user for the current request.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub user::Model);

/// Middleware enforcing the authentication gate.
///
/// A request without a resolvable session user is redirected to the login
/// page with the originally requested path preserved. A session pointing at
/// a user that no longer exists counts as logged out.
pub async fn require_auth(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth = AuthSession::new(&session);
    let user = match auth.user_id().await? {
        Some(user_id) => user::Entity::find_by_id(user_id).one(&state.db).await?,
        None => None,
    };

    match user {
        Some(user) => {
            request.extensions_mut().insert(CurrentUser(user));
            Ok(next.run(request).await)
        }
        None => {
            let path = request.uri().path().to_owned();
            debug!("Unauthenticated request to {}, redirecting to login", path);
            Ok(Redirect::to(&format!("/login?redirect={}", path)).into_response())
        }
    }
}

/// The permission gate: halts the request with a 400 when the capability
/// check fails, mirroring the terminal no-retry error contract.
pub fn require_permission(user_permitted: bool) -> Result<(), AppError> {
    if user_permitted {
        Ok(())
    } else {
        Err(AppError::bad_request("Insufficient permissions."))
    }
}
