use sea_orm::entity::prelude::*;

/// Access level gating what a user may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Permission {
    /// May browse projects and parts but not change anything.
    #[sea_orm(string_value = "readonly")]
    ReadOnly,
    /// May create, edit and delete parts.
    #[sea_orm(string_value = "editor")]
    Editor,
    /// Full control, including project and user administration.
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ReadOnly => "readonly",
            Permission::Editor => "editor",
            Permission::Admin => "admin",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "readonly" => Some(Permission::ReadOnly),
            "editor" => Some(Permission::Editor),
            "admin" => Some(Permission::Admin),
            _ => None,
        }
    }

    pub fn can_edit(&self) -> bool {
        matches!(self, Permission::Editor | Permission::Admin)
    }

    pub fn can_administer(&self) -> bool {
        matches!(self, Permission::Admin)
    }
}

/// A member of the workshop team.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2id hash in PHC string format.
    pub password_hash: String,
    pub permission: Permission,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
