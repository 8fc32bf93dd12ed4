//! Type-safe wrapper over the tower-sessions session.
//!
//! Session access goes through `AuthSession` so the session key and value
//! type live in one place instead of being repeated at every call site.

use tower_sessions::Session;

use crate::error::AppError;

const SESSION_USER_ID: &str = "auth:user";

/// Authentication state for the current request's session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id, establishing a logged-in session.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_USER_ID, user_id).await?;
        Ok(())
    }

    /// Returns the logged-in user's id, or `None` when nobody is signed in.
    pub async fn user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_USER_ID).await?)
    }

    /// Removes all session data. Used on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
