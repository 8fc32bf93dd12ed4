use axum::{
    extract::{Path, State},
    response::{Json, Redirect},
    Extension, Form,
};
use model::entities::part::{self, PartStatus};
use model::entities::project;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, Iterable, ModelTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::auth::guard::{require_permission, CurrentUser};
use crate::error::AppError;
use crate::handlers::parts::PartResponse;
use crate::helpers::forms;
use crate::schemas::AppState;

/// Form body for creating a project
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateProjectForm {
    pub name: Option<String>,
    pub part_number_prefix: Option<String>,
}

/// Form body for editing a project; absent fields are left unchanged
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct EditProjectForm {
    pub name: Option<String>,
    pub part_number_prefix: Option<String>,
}

/// Project response model
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: i32,
    pub name: String,
    pub part_number_prefix: String,
}

impl From<project::Model> for ProjectResponse {
    fn from(model: project::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            part_number_prefix: model.part_number_prefix,
        }
    }
}

/// A project together with its parts, ordered by part number
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectDetail {
    pub project: ProjectResponse,
    pub parts: Vec<PartResponse>,
}

/// New-project page state
#[derive(Debug, Serialize, ToSchema)]
pub struct NewProjectPage {}

/// Part count for one workflow status
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusCount {
    pub status: String,
    pub label: String,
    pub count: usize,
}

/// Dashboard page state: parts per workflow status for one project
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub project: ProjectResponse,
    pub status_counts: Vec<StatusCount>,
    pub part_count: usize,
}

/// List all projects
#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    responses((status = 200, description = "Projects retrieved successfully", body = [ProjectResponse]))
)]
#[instrument(skip_all)]
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let projects = project::Entity::find()
        .order_by_asc(project::Column::Name)
        .all(&state.db)
        .await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

/// New-project page
pub async fn new_project_page(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<NewProjectPage>, AppError> {
    require_permission(user.permission.can_administer())?;
    Ok(Json(NewProjectPage {}))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "/projects",
    tag = "projects",
    request_body(content = CreateProjectForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Project created; redirect to its page"),
        (status = 400, description = "Missing name, invalid prefix, or insufficient permissions")
    )
)]
#[instrument(skip_all)]
pub async fn create_project(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<CreateProjectForm>,
) -> Result<Redirect, AppError> {
    require_permission(user.permission.can_administer())?;

    // Check parameter existence and format.
    let name = forms::required(form.name, "Missing project name.")?;
    let prefix = form
        .part_number_prefix
        .filter(|p| forms::is_digits(p))
        .ok_or_else(|| AppError::bad_request("Missing or invalid part number prefix."))?;

    let created = project::ActiveModel {
        name: Set(name),
        part_number_prefix: Set(prefix),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!("Project {} ({}) created", created.name, created.id);
    Ok(Redirect::to(&format!("/projects/{}", created.id)))
}

/// Show a project and its parts
#[utoipa::path(
    get,
    path = "/projects/{project_id}",
    tag = "projects",
    params(("project_id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project retrieved successfully", body = ProjectDetail),
        (status = 400, description = "Invalid project")
    )
)]
#[instrument(skip_all)]
pub async fn get_project(
    Path(project_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ProjectDetail>, AppError> {
    let project = find_project(&state, project_id).await?;

    let parts = part::Entity::find()
        .filter(part::Column::ProjectId.eq(project.id))
        .order_by_asc(part::Column::Number)
        .all(&state.db)
        .await?;
    let parts = parts
        .into_iter()
        .map(|p| PartResponse::from_model(p, &project.part_number_prefix))
        .collect();

    Ok(Json(ProjectDetail {
        project: ProjectResponse::from(project),
        parts,
    }))
}

/// Edit-project page
pub async fn edit_project_page(
    Path(project_id): Path<i32>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ProjectResponse>, AppError> {
    require_permission(user.permission.can_administer())?;
    let project = find_project(&state, project_id).await?;
    Ok(Json(ProjectResponse::from(project)))
}

/// Apply edits to a project
#[instrument(skip_all)]
pub async fn edit_project(
    Path(project_id): Path<i32>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<EditProjectForm>,
) -> Result<Redirect, AppError> {
    require_permission(user.permission.can_administer())?;
    let project = find_project(&state, project_id).await?;

    let mut active: project::ActiveModel = project.into();
    if let Some(name) = form.name {
        active.name = Set(name);
    }
    if let Some(prefix) = form.part_number_prefix {
        if !forms::is_digits(&prefix) {
            return Err(AppError::bad_request("Invalid part number prefix."));
        }
        active.part_number_prefix = Set(prefix);
    }
    active.update(&state.db).await?;

    Ok(Redirect::to(&format!("/projects/{}", project_id)))
}

/// Delete-project confirmation page
pub async fn delete_project_page(
    Path(project_id): Path<i32>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ProjectResponse>, AppError> {
    require_permission(user.permission.can_administer())?;
    let project = find_project(&state, project_id).await?;
    Ok(Json(ProjectResponse::from(project)))
}

/// Delete a project
#[instrument(skip_all)]
pub async fn delete_project(
    Path(project_id): Path<i32>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Redirect, AppError> {
    require_permission(user.permission.can_administer())?;
    let project = find_project(&state, project_id).await?;

    info!("Deleting project {} ({})", project.name, project.id);
    project.delete(&state.db).await?;

    Ok(Redirect::to("/projects"))
}

/// Dashboard for one project
#[utoipa::path(
    get,
    path = "/projects/{project_id}/dashboard",
    tag = "projects",
    params(("project_id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Dashboard state retrieved successfully", body = DashboardResponse),
        (status = 400, description = "Invalid project")
    )
)]
#[instrument(skip_all)]
pub async fn project_dashboard(
    Path(project_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let project = find_project(&state, project_id).await?;

    let parts = part::Entity::find()
        .filter(part::Column::ProjectId.eq(project.id))
        .all(&state.db)
        .await?;

    let status_counts = PartStatus::iter()
        .map(|status| StatusCount {
            status: status.as_str().to_string(),
            label: status.label().to_string(),
            count: parts.iter().filter(|p| p.status == status).count(),
        })
        .collect();

    Ok(Json(DashboardResponse {
        project: ProjectResponse::from(project),
        status_counts,
        part_count: parts.len(),
    }))
}

/// Projects available for dashboards
pub async fn dashboards(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let projects = project::Entity::find()
        .order_by_asc(project::Column::Name)
        .all(&state.db)
        .await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

pub(crate) async fn find_project(
    state: &AppState,
    project_id: i32,
) -> Result<project::Model, AppError> {
    project::Entity::find_by_id(project_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::bad_request("Invalid project."))
}
