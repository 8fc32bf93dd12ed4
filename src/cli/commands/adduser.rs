use anyhow::{bail, Result};
use model::entities::user::{self, Permission};
use sea_orm::{ActiveModelTrait, ColumnTrait, Database, EntityTrait, QueryFilter, Set};
use tracing::info;

use crate::auth::password::hash_password;

/// Create a user directly, bypassing the HTTP surface.
///
/// User management over HTTP requires an administrator session, so the very
/// first administrator has to come from somewhere else: this command.
pub async fn add_user(
    database_url: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
    password: &str,
    permission: &str,
) -> Result<()> {
    let Some(permission) = Permission::from_str(permission) else {
        bail!(
            "Invalid permission '{}'; expected readonly, editor or admin",
            permission
        );
    };

    let db = Database::connect(database_url).await?;

    if user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(&db)
        .await?
        .is_some()
    {
        bail!("User {} already exists", email);
    }

    let created = user::ActiveModel {
        email: Set(email.to_string()),
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        password_hash: Set(hash_password(password)?),
        permission: Set(permission),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    info!(
        "Created user {} with permission {}",
        created.email,
        created.permission.as_str()
    );
    Ok(())
}
