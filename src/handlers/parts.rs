use axum::{
    extract::{Path, Query, State},
    response::{Json, Redirect},
    Extension, Form,
};
use model::entities::part::{self, PartStatus, PartType};
use model::entities::project;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, Iterable, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use crate::auth::guard::{require_permission, CurrentUser};
use crate::error::AppError;
use crate::handlers::projects::{find_project, ProjectResponse};
use crate::helpers::{forms, part_numbers};
use crate::schemas::AppState;

/// Query parameters for the new-part page
#[derive(Debug, Deserialize)]
pub struct NewPartQuery {
    pub parent_part_id: Option<String>,
    #[serde(rename = "type")]
    pub part_type: Option<String>,
}

/// Form body for creating a part
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePartForm {
    pub project_id: Option<String>,
    #[serde(rename = "type")]
    pub part_type: Option<String>,
    pub name: Option<String>,
    pub parent_part_id: Option<String>,
}

/// Form body for editing a part; absent text fields are left unchanged,
/// while the checkbox fields follow HTML semantics and are rewritten on
/// every submission
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct EditPartForm {
    pub name: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub source_material: Option<String>,
    pub have_material: Option<String>,
    pub cut_length: Option<String>,
    pub quantity: Option<String>,
    pub drawing_created: Option<String>,
    pub priority: Option<String>,
}

/// Part response model
#[derive(Debug, Serialize, ToSchema)]
pub struct PartResponse {
    pub id: i32,
    pub project_id: i32,
    pub parent_part_id: Option<i32>,
    pub part_type: String,
    /// Full generated identifier, e.g. "1678-0204"
    pub part_number: String,
    pub name: String,
    pub status: String,
    pub status_label: String,
    pub notes: Option<String>,
    pub source_material: Option<String>,
    pub have_material: bool,
    pub cut_length: Option<String>,
    pub quantity: Option<String>,
    pub drawing_created: bool,
    pub priority: i32,
}

impl PartResponse {
    pub fn from_model(model: part::Model, prefix: &str) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            parent_part_id: model.parent_part_id,
            part_type: model.part_type.as_str().to_string(),
            part_number: model.full_number(prefix),
            name: model.name,
            status: model.status.as_str().to_string(),
            status_label: model.status.label().to_string(),
            notes: model.notes,
            source_material: model.source_material,
            have_material: model.have_material,
            cut_length: model.cut_length,
            quantity: model.quantity,
            drawing_created: model.drawing_created,
            priority: model.priority,
        }
    }
}

/// A part with its owning project and any children
#[derive(Debug, Serialize, ToSchema)]
pub struct PartDetail {
    pub part: PartResponse,
    pub project: ProjectResponse,
    pub children: Vec<PartResponse>,
}

/// One selectable workflow status
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusOption {
    pub value: String,
    pub label: String,
}

/// New-part page state
#[derive(Debug, Serialize, ToSchema)]
pub struct NewPartPage {
    pub project: ProjectResponse,
    pub parent_part_id: Option<i32>,
    pub part_type: String,
}

/// Edit-part page state
#[derive(Debug, Serialize, ToSchema)]
pub struct PartEditPage {
    pub part: PartResponse,
    pub statuses: Vec<StatusOption>,
}

/// New-part page under a project
#[instrument(skip_all)]
pub async fn new_part_page(
    Path(project_id): Path<i32>,
    Query(query): Query<NewPartQuery>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<NewPartPage>, AppError> {
    require_permission(user.permission.can_edit())?;
    let project = find_project(&state, project_id).await?;

    let part_type = query.part_type.unwrap_or_else(|| "part".to_string());
    let part_type = PartType::from_str(&part_type)
        .ok_or_else(|| AppError::bad_request("Invalid part type."))?;

    let parent_part_id = parse_optional_id(query.parent_part_id, "Invalid parent part ID.")?;

    Ok(Json(NewPartPage {
        project: ProjectResponse::from(project),
        parent_part_id,
        part_type: part_type.as_str().to_string(),
    }))
}

/// Create a new part
///
/// The part number is allocated and the row inserted inside one transaction
/// so concurrent creates cannot commit the same number.
#[utoipa::path(
    post,
    path = "/parts",
    tag = "parts",
    request_body(content = CreatePartForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Part created; redirect to its page"),
        (status = 400, description = "Invalid parameters, project, or parent part")
    )
)]
#[instrument(skip_all)]
pub async fn create_part(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<CreatePartForm>,
) -> Result<Redirect, AppError> {
    require_permission(user.permission.can_edit())?;

    // Check parameter existence and format.
    let project_id: i32 = form
        .project_id
        .filter(|id| forms::is_digits(id))
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| AppError::bad_request("Missing project ID."))?;
    let part_type = form
        .part_type
        .ok_or_else(|| AppError::bad_request("Missing part type."))?;
    let part_type = PartType::from_str(&part_type)
        .ok_or_else(|| AppError::bad_request("Invalid part type."))?;
    let name = forms::required(form.name, "Missing part name.")?;
    let parent_part_id = parse_optional_id(form.parent_part_id, "Invalid parent part ID.")?;

    let txn = state.db.begin().await?;

    let project = project::Entity::find_by_id(project_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::bad_request("Invalid project."))?;

    // The parent must be an assembly in the same project.
    let parent = match parent_part_id {
        Some(parent_id) => Some(
            part::Entity::find()
                .filter(part::Column::Id.eq(parent_id))
                .filter(part::Column::ProjectId.eq(project.id))
                .filter(part::Column::PartType.eq(PartType::Assembly))
                .one(&txn)
                .await?
                .ok_or_else(|| {
                    warn!("Rejected part under invalid parent {}", parent_id);
                    AppError::bad_request("Invalid parent part.")
                })?,
        ),
        None => None,
    };

    let number = part_numbers::next_number(&txn, project.id, parent.as_ref()).await?;

    let created = part::ActiveModel {
        project_id: Set(project.id),
        parent_part_id: Set(parent.as_ref().map(|p| p.id)),
        part_type: Set(part_type),
        number: Set(number),
        name: Set(name),
        status: Set(PartStatus::Designing),
        notes: Set(None),
        source_material: Set(None),
        have_material: Set(false),
        cut_length: Set(None),
        quantity: Set(None),
        drawing_created: Set(false),
        priority: Set(1),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(
        "Part {} ({}) created in project {}",
        created.full_number(&project.part_number_prefix),
        created.name,
        project.id
    );
    Ok(Redirect::to(&format!("/parts/{}", created.id)))
}

/// Show a part with its project and children
#[utoipa::path(
    get,
    path = "/parts/{part_id}",
    tag = "parts",
    params(("part_id" = i32, Path, description = "Part ID")),
    responses(
        (status = 200, description = "Part retrieved successfully", body = PartDetail),
        (status = 400, description = "Invalid part")
    )
)]
#[instrument(skip_all)]
pub async fn get_part(
    Path(part_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<PartDetail>, AppError> {
    let part = find_part(&state, part_id).await?;
    let project = find_project(&state, part.project_id).await?;

    let children = part::Entity::find()
        .filter(part::Column::ParentPartId.eq(part.id))
        .order_by_asc(part::Column::Number)
        .all(&state.db)
        .await?;
    let children = children
        .into_iter()
        .map(|c| PartResponse::from_model(c, &project.part_number_prefix))
        .collect();

    Ok(Json(PartDetail {
        part: PartResponse::from_model(part, &project.part_number_prefix),
        project: ProjectResponse::from(project),
        children,
    }))
}

/// Edit-part page
pub async fn edit_part_page(
    Path(part_id): Path<i32>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<PartEditPage>, AppError> {
    require_permission(user.permission.can_edit())?;
    let part = find_part(&state, part_id).await?;
    let project = find_project(&state, part.project_id).await?;

    let statuses = PartStatus::iter()
        .map(|status| StatusOption {
            value: status.as_str().to_string(),
            label: status.label().to_string(),
        })
        .collect();

    Ok(Json(PartEditPage {
        part: PartResponse::from_model(part, &project.part_number_prefix),
        statuses,
    }))
}

/// Apply edits to a part
#[utoipa::path(
    post,
    path = "/parts/{part_id}/edit",
    tag = "parts",
    params(("part_id" = i32, Path, description = "Part ID")),
    request_body(content = EditPartForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Part updated; redirect to its page"),
        (status = 400, description = "Invalid part, status, or priority")
    )
)]
#[instrument(skip_all)]
pub async fn edit_part(
    Path(part_id): Path<i32>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<EditPartForm>,
) -> Result<Redirect, AppError> {
    require_permission(user.permission.can_edit())?;
    let part = find_part(&state, part_id).await?;

    let mut active: part::ActiveModel = part.into();
    if let Some(name) = form.name {
        active.name = Set(name);
    }
    if let Some(status) = form.status {
        let status = PartStatus::from_str(&status)
            .ok_or_else(|| AppError::bad_request("Invalid status."))?;
        active.status = Set(status);
    }
    if let Some(notes) = form.notes {
        active.notes = Set(Some(notes));
    }
    if let Some(source_material) = form.source_material {
        active.source_material = Set(Some(source_material));
    }
    active.have_material = Set(forms::checkbox(form.have_material.as_ref()));
    if let Some(cut_length) = form.cut_length {
        active.cut_length = Set(Some(cut_length));
    }
    if let Some(quantity) = form.quantity {
        active.quantity = Set(Some(quantity));
    }
    active.drawing_created = Set(forms::checkbox(form.drawing_created.as_ref()));
    if let Some(priority) = form.priority {
        let priority: i32 = priority
            .parse()
            .map_err(|_| AppError::bad_request("Invalid priority."))?;
        active.priority = Set(priority);
    }
    active.update(&state.db).await?;

    Ok(Redirect::to(&format!("/parts/{}", part_id)))
}

/// Delete-part confirmation page
pub async fn delete_part_page(
    Path(part_id): Path<i32>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<PartResponse>, AppError> {
    require_permission(user.permission.can_edit())?;
    let part = find_part(&state, part_id).await?;
    let project = find_project(&state, part.project_id).await?;
    Ok(Json(PartResponse::from_model(
        part,
        &project.part_number_prefix,
    )))
}

/// Delete a part
///
/// An assembly keeps its children's numbering intact: it cannot be deleted
/// while any child still exists.
#[utoipa::path(
    post,
    path = "/parts/{part_id}/delete",
    tag = "parts",
    params(("part_id" = i32, Path, description = "Part ID")),
    responses(
        (status = 303, description = "Part deleted; redirect to its project"),
        (status = 400, description = "Invalid part or assembly still has children")
    )
)]
#[instrument(skip_all)]
pub async fn delete_part(
    Path(part_id): Path<i32>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Redirect, AppError> {
    require_permission(user.permission.can_edit())?;
    let part = find_part(&state, part_id).await?;

    let children = part::Entity::find()
        .filter(part::Column::ParentPartId.eq(part.id))
        .count(&state.db)
        .await?;
    if children > 0 {
        return Err(AppError::bad_request(
            "Can't delete assembly with existing children.",
        ));
    }

    let project_id = part.project_id;
    info!("Deleting part {} ({})", part.id, part.name);
    part::Entity::delete_by_id(part.id).exec(&state.db).await?;

    Ok(Redirect::to(&format!("/projects/{}", project_id)))
}

async fn find_part(state: &AppState, part_id: i32) -> Result<part::Model, AppError> {
    part::Entity::find_by_id(part_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::bad_request("Invalid part."))
}

/// Parse an optional numeric id field, treating an empty value as absent.
fn parse_optional_id(value: Option<String>, message: &str) -> Result<Option<i32>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => {
            if !forms::is_digits(&raw) {
                return Err(AppError::bad_request(message));
            }
            raw.parse()
                .map(Some)
                .map_err(|_| AppError::bad_request(message))
        }
    }
}
