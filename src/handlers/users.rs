use axum::{
    extract::{Path, State},
    response::{Json, Redirect},
    Extension, Form,
};
use model::entities::user::{self, Permission};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, Iterable, ModelTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::auth::guard::{require_permission, CurrentUser};
use crate::auth::password;
use crate::error::AppError;
use crate::helpers::forms;
use crate::schemas::AppState;

/// Form body for creating a user
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserForm {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub permission: Option<String>,
}

/// Form body for editing a user; absent fields are left unchanged
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct EditUserForm {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub permission: Option<String>,
}

/// User response model; the password hash never leaves the server
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub permission: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            permission: model.permission.as_str().to_string(),
        }
    }
}

/// New-user page state
#[derive(Debug, Serialize, ToSchema)]
pub struct NewUserPage {
    pub permissions: Vec<String>,
}

/// Edit-user page state
#[derive(Debug, Serialize, ToSchema)]
pub struct UserEditPage {
    pub user: UserResponse,
    pub permissions: Vec<String>,
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = [UserResponse]),
        (status = 400, description = "Insufficient permissions")
    )
)]
#[instrument(skip_all)]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    require_permission(user.permission.can_administer())?;

    let users = user::Entity::find()
        .order_by_asc(user::Column::Email)
        .all(&state.db)
        .await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// New-user page
pub async fn new_user_page(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<NewUserPage>, AppError> {
    require_permission(user.permission.can_administer())?;
    Ok(Json(NewUserPage {
        permissions: permission_options(),
    }))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body(content = CreateUserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "User created; redirect to the user list"),
        (status = 400, description = "Missing fields, duplicate email, or invalid permission")
    )
)]
#[instrument(skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<CreateUserForm>,
) -> Result<Redirect, AppError> {
    require_permission(user.permission.can_administer())?;

    // Check parameter existence and format.
    let email = forms::required(form.email, "Missing email.")?;
    if user::Entity::find()
        .filter(user::Column::Email.eq(&email))
        .one(&state.db)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest(format!(
            "User {} already exists.",
            email
        )));
    }
    let first_name = forms::required(form.first_name, "Missing first name.")?;
    let last_name = forms::required(form.last_name, "Missing last name.")?;
    let plaintext = forms::required(form.password, "Missing password.")?;
    let permission = forms::required(form.permission, "Missing permission.")?;
    let permission = Permission::from_str(&permission)
        .ok_or_else(|| AppError::bad_request("Invalid permission."))?;

    let created = user::ActiveModel {
        email: Set(email),
        first_name: Set(first_name),
        last_name: Set(last_name),
        password_hash: Set(password::hash_password(&plaintext)?),
        permission: Set(permission),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(
        "User {} created with permission {}",
        created.email,
        created.permission.as_str()
    );
    Ok(Redirect::to("/users"))
}

/// Edit-user page
pub async fn edit_user_page(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<UserEditPage>, AppError> {
    require_permission(user.permission.can_administer())?;
    let user_edit = find_user(&state, user_id).await?;
    Ok(Json(UserEditPage {
        user: UserResponse::from(user_edit),
        permissions: permission_options(),
    }))
}

/// Apply edits to a user
#[instrument(skip_all)]
pub async fn edit_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<EditUserForm>,
) -> Result<Redirect, AppError> {
    require_permission(user.permission.can_administer())?;
    let user_edit = find_user(&state, user_id).await?;

    let mut active: user::ActiveModel = user_edit.into();
    if let Some(email) = form.email {
        active.email = Set(email);
    }
    if let Some(first_name) = form.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(last_name) = form.last_name {
        active.last_name = Set(last_name);
    }
    if let Some(plaintext) = form.password.filter(|p| !p.is_empty()) {
        active.password_hash = Set(password::hash_password(&plaintext)?);
    }
    if let Some(permission) = form.permission {
        let permission = Permission::from_str(&permission)
            .ok_or_else(|| AppError::bad_request("Invalid permission."))?;
        active.permission = Set(permission);
    }
    active.update(&state.db).await?;

    Ok(Redirect::to("/users"))
}

/// Delete-user confirmation page
pub async fn delete_user_page(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<UserResponse>, AppError> {
    require_permission(user.permission.can_administer())?;
    let user_delete = find_user(&state, user_id).await?;
    Ok(Json(UserResponse::from(user_delete)))
}

/// Delete a user
#[instrument(skip_all)]
pub async fn delete_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Redirect, AppError> {
    require_permission(user.permission.can_administer())?;
    let user_delete = find_user(&state, user_id).await?;

    info!("Deleting user {}", user_delete.email);
    user_delete.delete(&state.db).await?;

    Ok(Redirect::to("/users"))
}

fn permission_options() -> Vec<String> {
    Permission::iter().map(|p| p.as_str().to_string()).collect()
}

async fn find_user(state: &AppState, user_id: i32) -> Result<user::Model, AppError> {
    user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::bad_request("Invalid user."))
}
