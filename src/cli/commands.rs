pub mod adduser;
pub mod initdb;
pub mod serve;

pub use adduser::add_user;
pub use initdb::init_database;
pub use serve::serve;
