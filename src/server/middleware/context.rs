//! Per-request authentication context.
//!
//! `RequestContext` is an axum extractor that resolves the session handle and the
//! logged-in user (if any) once per request. Handlers that need an identity call
//! [`RequestContext::require_user`]; handlers that only record who acted call
//! [`RequestContext::actor`].

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::audit::SYSTEM_ACTOR,
    },
};

pub struct RequestContext {
    session: Session,
    user: Option<UserDto>,
}

impl RequestContext {
    /// Builds a context from an already-extracted session.
    ///
    /// # Returns
    /// - `Ok(RequestContext)` - Context with the session's user, if any
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn from_session(session: Session) -> Result<Self, AppError> {
        let user = AuthSession::new(&session).get_user().await?;
        Ok(Self { session, user })
    }

    /// Typed access to the session of this request.
    pub fn session(&self) -> AuthSession<'_> {
        AuthSession::new(&self.session)
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&UserDto> {
        self.user.as_ref()
    }

    /// Returns the logged-in user or fails with 401.
    pub fn require_user(&self) -> Result<&UserDto, AppError> {
        self.user
            .as_ref()
            .ok_or_else(|| AuthError::NotLoggedIn.into())
    }

    /// Actor id for audit stamps: the logged-in user, or the system actor.
    pub fn actor(&self) -> &str {
        self.user
            .as_ref()
            .map(|user| user.user_id.as_str())
            .unwrap_or(SYSTEM_ACTOR)
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::InternalError(msg.to_string()))?;

        Self::from_session(session).await
    }
}
