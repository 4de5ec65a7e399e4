use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{
            AdminUpdateUserDto, CheckDuplicateDto, DuplicateCheckDto, FindIdDto,
            FindPasswordDto, ProfileFormDto, UserDto,
        },
    },
    server::{
        error::AppError,
        middleware::context::RequestContext,
        model::user::{AdminUpdateUserParam, UpdateProfileParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every registered user.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all_users().await?;

    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Update a user's profile from a multipart form.
///
/// Expects the text fields `userNickname`, `userName` and `userPassword`, an
/// optional `userLevel` and an optional `profileImage` file. When the logged-in
/// user updates their own profile the session copy is refreshed.
///
/// # Access Control
/// Requires a logged-in user.
///
/// # Returns
/// - `200 OK` - Profile updated
/// - `400 Bad Request` - Missing text field or non-numeric level
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Upload unreadable or database error
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    request_body(content = ProfileFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Profile updated", body = String),
        (status = 400, description = "Invalid form", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_profile(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(user_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let actor = ctx.require_user()?.user_id.clone();

    let form = read_profile_form(multipart).await?;
    let param = UpdateProfileParam::from_dto(user_id, form);

    let user = UserService::new(&state.db)
        .update_profile(param, &actor)
        .await?;

    if user.user_id == actor {
        ctx.session().set_user(&user.into_dto()).await?;
    }

    Ok((StatusCode::OK, "Profile updated successfully"))
}

/// Replace a user's password. The request body is the new password as plain text.
///
/// # Access Control
/// Requires a logged-in user.
#[utoipa::path(
    put,
    path = "/users/{id}/password",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    request_body(content = String, content_type = "text/plain", description = "New password"),
    responses(
        (status = 200, description = "Password updated", body = String),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(user_id): Path<String>,
    new_password: String,
) -> Result<impl IntoResponse, AppError> {
    let actor = ctx.require_user()?.user_id.clone();

    let user = UserService::new(&state.db)
        .update_password(&user_id, new_password, &actor)
        .await?;

    if user.user_id == actor {
        ctx.session().set_user(&user.into_dto()).await?;
    }

    Ok((StatusCode::OK, "Password updated successfully"))
}

/// Delete a user by id.
///
/// No existence check is made. A user who still owns boards cannot be deleted
/// and the request fails with 500.
#[utoipa::path(
    delete,
    path = "/users/delete/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete_user(&user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Recover a user id from a nickname submitted as a form.
#[utoipa::path(
    post,
    path = "/users/find-id",
    tag = USER_TAG,
    request_body(content = FindIdDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Message containing the user id", body = String),
        (status = 404, description = "No user with that nickname", body = ErrorDto)
    ),
)]
pub async fn find_id(
    State(state): State<AppState>,
    Form(params): Form<FindIdDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = UserService::new(&state.db)
        .find_id_by_nickname(&params.nickname)
        .await?;

    Ok((StatusCode::OK, format!("Your user id is: {}", user_id)))
}

/// Recover a password from nickname and user id submitted as a form.
///
/// Returns the stored password as entered at registration.
#[utoipa::path(
    post,
    path = "/users/find-password",
    tag = USER_TAG,
    request_body(content = FindPasswordDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Message containing the password", body = String),
        (status = 404, description = "No user matches", body = ErrorDto)
    ),
)]
pub async fn find_password(
    State(state): State<AppState>,
    Form(params): Form<FindPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let password = UserService::new(&state.db)
        .find_password_by_nickname_and_id(&params.nickname, &params.user_id)
        .await?;

    Ok((StatusCode::OK, format!("Your password is: {}", password)))
}

/// Administrative update of nickname, name, level and password.
///
/// All four fields are required and overwrite the stored values; `userLevel`
/// may be a number or a numeric string. Updated-by records the logged-in user
/// when there is one and the system actor otherwise.
#[utoipa::path(
    put,
    path = "/users/admin/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    request_body = AdminUpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_update_user(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(user_id): Path<String>,
    Json(payload): Json<AdminUpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = AdminUpdateUserParam::from_dto(user_id, payload)?;

    let user = UserService::new(&state.db)
        .update_user(param, ctx.actor())
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Check whether a user id and a nickname are already taken.
///
/// Each value is checked on its own; absent or empty values report `false`.
#[utoipa::path(
    post,
    path = "/users/check-duplicate",
    tag = USER_TAG,
    request_body = CheckDuplicateDto,
    responses(
        (status = 200, description = "Existence of each value", body = DuplicateCheckDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_duplicate(
    State(state): State<AppState>,
    Json(payload): Json<CheckDuplicateDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user_id_exists = service
        .is_user_id_or_nickname_exists(payload.user_id.as_deref(), None)
        .await?;
    let nickname_exists = service
        .is_user_id_or_nickname_exists(None, payload.user_nickname.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(DuplicateCheckDto {
            user_id_exists,
            nickname_exists,
        }),
    ))
}

/// Reads the profile update form.
///
/// Text fields are mandatory. The image is only taken from a file part, so a
/// browser sending a placeholder string for an unset file is ignored.
async fn read_profile_form(mut multipart: Multipart) -> Result<ProfileFormDto, AppError> {
    let mut nickname = None;
    let mut name = None;
    let mut password = None;
    let mut form = ProfileFormDto::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(field_name) = field.name().map(str::to_owned) else {
            continue;
        };

        match field_name.as_str() {
            "userNickname" => nickname = Some(field.text().await?),
            "userName" => name = Some(field.text().await?),
            "userPassword" => password = Some(field.text().await?),
            "userLevel" => {
                let raw = field.text().await?;
                let raw = raw.trim();
                if !raw.is_empty() {
                    form.user_level = Some(raw.parse::<i32>().map_err(|_| {
                        AppError::BadRequest(format!("Invalid userLevel: {}", raw))
                    })?);
                }
            }
            "profileImage" if field.file_name().is_some() => {
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    form.profile_image = Some(bytes.to_vec());
                }
            }
            _ => {}
        }
    }

    form.user_nickname = nickname.ok_or_else(|| missing_form_field("userNickname"))?;
    form.user_name = name.ok_or_else(|| missing_form_field("userName"))?;
    form.user_password = password.ok_or_else(|| missing_form_field("userPassword"))?;

    Ok(form)
}

fn missing_form_field(name: &str) -> AppError {
    AppError::BadRequest(format!("Missing required field: {}", name))
}
