use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user exists with the supplied id, or the password does not match.
    ///
    /// Both cases share one variant so the response does not reveal which ids exist.
    #[error("Invalid user id or password")]
    InvalidCredentials,

    /// The request requires a logged-in user but the session holds none.
    #[error("User not logged in")]
    NotLoggedIn,
}

/// Converts authentication errors into HTTP responses.
///
/// Every authentication failure maps to 401 Unauthorized. Details are logged at
/// debug level; the client only sees a short message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid user id or password",
            Self::NotLoggedIn => "Login required",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
