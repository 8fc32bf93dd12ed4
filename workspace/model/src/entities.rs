//! This file serves as the root for all SeaORM entity modules.
//! The data model is small: users with permission levels, projects with a
//! part-number prefix, and parts that may nest one level under an assembly.

pub mod part;
pub mod project;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::part::Entity as Part;
    pub use super::project::Entity as Project;
    pub use super::user::Entity as User;
}
