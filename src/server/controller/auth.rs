use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::context::RequestContext,
        model::user::RegisterUserParam,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user.
///
/// Id, password and name are mandatory. The new row is stamped by the system
/// actor. No session is created; the client logs in separately.
///
/// # Returns
/// - `200 OK` - User registered
/// - `400 Bad Request` - A mandatory field is missing or the image is not base64
/// - `500 Internal Server Error` - Insert failed (duplicate id or nickname)
#[utoipa::path(
    post,
    path = "/users/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User registered", body = String),
        (status = 400, description = "Missing mandatory field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterUserParam::from_dto(payload)?;

    AuthService::new(&state.db).register(param).await?;

    Ok((StatusCode::OK, "User registered successfully"))
}

/// Log in with user id and password.
///
/// On success the session id is rotated and the full user record is stored in
/// the session.
///
/// # Returns
/// - `200 OK` - Logged in, session cookie set
/// - `401 Unauthorized` - Unknown id or wrong password
#[utoipa::path(
    post,
    path = "/users/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = String),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.user_id, &payload.user_password)
        .await?;

    let session = ctx.session();
    session.cycle_id().await?;
    session.set_user(&user.into_dto()).await?;

    Ok((StatusCode::OK, "Login successful"))
}

/// Log out by invalidating the whole session.
///
/// Succeeds whether or not anyone was logged in.
#[utoipa::path(
    post,
    path = "/users/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(ctx: RequestContext) -> Result<impl IntoResponse, AppError> {
    if let Some(user) = ctx.user() {
        tracing::info!(user_id = %user.user_id, "user logged out");
    }

    ctx.session().flush().await?;

    Ok((StatusCode::OK, "Logout successful"))
}

/// Get the user stored in the session.
///
/// # Returns
/// - `200 OK` - The logged-in user
/// - `401 Unauthorized` - No user in session
#[utoipa::path(
    get,
    path = "/users/current-user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged-in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn current_user(ctx: RequestContext) -> Result<impl IntoResponse, AppError> {
    let user = ctx.require_user()?;

    Ok((StatusCode::OK, Json(user.clone())))
}
