//! Type-safe session management wrapper.
//!
//! The session is the only authentication state of the application. After a
//! successful login the full user record is stored under a single fixed key;
//! logging out flushes the whole session.

use tower_sessions::Session;

use crate::{model::user::UserDto, server::error::AppError};

// Session key constants
const SESSION_AUTH_USER: &str = "auth:user";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user record and the
/// session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user record in the session.
    ///
    /// Called after successful login, and again after the logged-in user updates
    /// their own profile so the session copy stays current.
    ///
    /// # Returns
    /// - `Ok(())` - User successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user(&self, user: &UserDto) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    /// Retrieves the user record from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<UserDto>, AppError> {
        let user = self.session.get::<UserDto>(SESSION_AUTH_USER).await?;
        Ok(user)
    }

    /// Issues a new session id while keeping the session data.
    ///
    /// Called at login before the user is stored so a session id handed out
    /// before authentication cannot be reused afterwards. The old record is
    /// removed from the store.
    pub async fn cycle_id(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        Ok(())
    }

    /// Invalidates the session.
    ///
    /// Removes all session data and deletes the record from the store, so the
    /// session cookie no longer resolves to anything.
    pub async fn flush(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
