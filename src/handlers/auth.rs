use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Redirect, Response},
    Extension, Form,
};
use model::entities::user;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use crate::auth::{guard::CurrentUser, password, session::AuthSession};
use crate::error::AppError;
use crate::schemas::AppState;

/// Query parameters for the login page
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub failed: Option<String>,
    pub redirect: Option<String>,
}

/// Login page state
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginPage {
    /// Whether the previous login attempt was rejected
    pub failed: bool,
    /// Path to return to after a successful login
    pub redirect: String,
}

/// Login form body
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Path to return to after a successful login
    pub redirect: Option<String>,
}

/// Change-password page state
#[derive(Debug, Serialize, ToSchema)]
pub struct ChangePasswordPage {
    pub email: String,
}

/// Change-password form body
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChangePasswordForm {
    pub old_password: Option<String>,
    pub password: Option<String>,
}

/// The project list is the landing page.
pub async fn root() -> Redirect {
    Redirect::to("/projects")
}

/// Login page
#[utoipa::path(
    get,
    path = "/login",
    tag = "auth",
    responses(
        (status = 200, description = "Login page state", body = LoginPage),
        (status = 303, description = "Already signed in; redirected to logout")
    )
)]
#[instrument(skip_all)]
pub async fn login_page(
    session: Session,
    Query(query): Query<LoginQuery>,
) -> Result<Response, AppError> {
    // A signed-in user has no business on the login page.
    if AuthSession::new(&session).user_id().await?.is_some() {
        return Ok(Redirect::to("/logout").into_response());
    }

    let page = LoginPage {
        failed: query.failed.as_deref() == Some("1"),
        redirect: sanitize_redirect(query.redirect),
    };
    Ok(Json(page).into_response())
}

/// Authenticate and establish a session
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the requested page on success, or back to the login page with failed=1")
    )
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    let user = match (&form.email, &form.password) {
        (Some(email), Some(password)) => authenticate(&state, email, password).await?,
        _ => None,
    };

    let Some(user) = user else {
        warn!("Rejected login attempt for {:?}", form.email);
        return Ok(Redirect::to("/login?failed=1"));
    };

    AuthSession::new(&session).set_user_id(user.id).await?;
    info!("User {} logged in", user.email);
    Ok(Redirect::to(&sanitize_redirect(form.redirect)))
}

/// End the current session
#[utoipa::path(
    get,
    path = "/logout",
    tag = "auth",
    responses((status = 303, description = "Session cleared; redirect to the landing page"))
)]
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Redirect {
    AuthSession::new(&session).clear().await;
    Redirect::to("/")
}

/// Change-password page
pub async fn change_password_page(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<ChangePasswordPage> {
    Json(ChangePasswordPage { email: user.email })
}

/// Change the signed-in user's password
#[utoipa::path(
    post,
    path = "/change_password",
    tag = "auth",
    request_body(content = ChangePasswordForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Password changed; redirect to the landing page"),
        (status = 400, description = "Missing new password or wrong old password")
    )
)]
#[instrument(skip_all)]
pub async fn change_password(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<ChangePasswordForm>,
) -> Result<Redirect, AppError> {
    let new_password = form
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::bad_request("Missing password."))?;

    let old_password = form.old_password.unwrap_or_default();
    if !password::verify_password(&old_password, &user.password_hash) {
        return Err(AppError::bad_request("Invalid old password."));
    }

    let email = user.email.clone();
    let mut active: user::ActiveModel = user.into();
    active.password_hash = Set(password::hash_password(&new_password)?);
    active.update(&state.db).await?;

    info!("User {} changed their password", email);
    Ok(Redirect::to("/"))
}

/// Look up a user by email and check the supplied password.
async fn authenticate(
    state: &AppState,
    email: &str,
    password_input: &str,
) -> Result<Option<user::Model>, AppError> {
    let user = user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(&state.db)
        .await?;
    Ok(user.filter(|u| password::verify_password(password_input, &u.password_hash)))
}

/// Only local absolute paths are honored as post-login targets; anything
/// else falls back to the root.
fn sanitize_redirect(redirect: Option<String>) -> String {
    match redirect {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/".to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::sanitize_redirect;

    #[test]
    fn redirect_targets_stay_local() {
        assert_eq!(sanitize_redirect(Some("/projects/3".into())), "/projects/3");
        assert_eq!(sanitize_redirect(Some("https://evil.test".into())), "/");
        assert_eq!(sanitize_redirect(Some("//evil.test".into())), "/");
        assert_eq!(sanitize_redirect(None), "/");
    }
}
