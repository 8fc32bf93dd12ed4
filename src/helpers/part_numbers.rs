//! Sequential part-number allocation.
//!
//! Numbers are scoped to a project. Top-level parts and assemblies take the
//! next free multiple of [`BLOCK_SIZE`] (100, 200, ...); parts nested under
//! an assembly are numbered sequentially after their parent, so the children
//! of assembly 200 run 201..=299. The rendered identifier combines the
//! project prefix with the zero-padded number, e.g. "1678-0204".

use model::entities::part;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::error::AppError;

/// Spacing between top-level part numbers; each assembly owns the block of
/// numbers after its own until the next multiple.
const BLOCK_SIZE: i32 = 100;

/// Allocate the next part number within a project.
///
/// Callers run this inside the same transaction as the insert so the
/// allocated number and the new row commit together.
pub async fn next_number<C>(
    db: &C,
    project_id: i32,
    parent: Option<&part::Model>,
) -> Result<i32, AppError>
where
    C: ConnectionTrait,
{
    match parent {
        Some(parent) => {
            let highest_child = part::Entity::find()
                .filter(part::Column::ParentPartId.eq(parent.id))
                .order_by_desc(part::Column::Number)
                .one(db)
                .await?;
            let next = match highest_child {
                Some(child) => child.number + 1,
                None => parent.number + 1,
            };
            if next >= parent.number + BLOCK_SIZE {
                return Err(AppError::bad_request(
                    "No part numbers left under this assembly.",
                ));
            }
            Ok(next)
        }
        None => {
            let highest_top_level = part::Entity::find()
                .filter(part::Column::ProjectId.eq(project_id))
                .filter(part::Column::ParentPartId.is_null())
                .order_by_desc(part::Column::Number)
                .one(db)
                .await?;
            Ok(match highest_top_level {
                Some(part) => (part.number / BLOCK_SIZE + 1) * BLOCK_SIZE,
                None => BLOCK_SIZE,
            })
        }
    }
}
