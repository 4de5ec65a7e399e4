use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        board::{BoardAuthorDto, BoardDto, SaveBoardDto, UpdateBoardDto},
        user::{
            AdminUpdateUserDto, CheckDuplicateDto, DuplicateCheckDto, FindIdDto,
            FindPasswordDto, LoginDto, ProfileFormDto, RegisterUserDto, UserDto,
        },
    },
    server::{
        controller::{
            auth::{self, AUTH_TAG},
            board::{self, BOARD_TAG},
            user::{self, USER_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::current_user,
        user::get_users,
        user::update_user_profile,
        user::update_password,
        user::delete_user,
        user::find_id,
        user::find_password,
        user::admin_update_user,
        user::check_duplicate,
        board::get_all_boards,
        board::get_post_count,
        board::get_posts_by_user,
        board::create_board,
        board::save_board,
        board::save_board_by_number,
        board::get_boards_by_category,
        board::get_board_detail,
        board::update_board,
        board::delete_board,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        RegisterUserDto,
        LoginDto,
        AdminUpdateUserDto,
        CheckDuplicateDto,
        DuplicateCheckDto,
        FindIdDto,
        FindPasswordDto,
        ProfileFormDto,
        BoardDto,
        BoardAuthorDto,
        SaveBoardDto,
        UpdateBoardDto,
    )),
    tags(
        (name = AUTH_TAG, description = "Registration, login and session"),
        (name = USER_TAG, description = "User profiles and account recovery"),
        (name = BOARD_TAG, description = "Board posts")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(user::get_users))
        .route("/users/register", post(auth::register))
        .route("/users/login", post(auth::login))
        .route("/users/logout", post(auth::logout))
        .route("/users/current-user", get(auth::current_user))
        .route("/users/{id}", put(user::update_user_profile))
        .route("/users/{id}/password", put(user::update_password))
        .route("/users/delete/{id}", delete(user::delete_user))
        .route("/users/find-id", post(user::find_id))
        .route("/users/find-password", post(user::find_password))
        .route("/users/admin/{id}", put(user::admin_update_user))
        .route("/users/check-duplicate", post(user::check_duplicate))
        .route("/boards", get(board::get_all_boards).post(board::save_board))
        .route("/boards/count/{user_id}", get(board::get_post_count))
        .route("/boards/user/{user_id}", get(board::get_posts_by_user))
        .route("/boards/create", post(board::create_board))
        .route("/boards/{board_number}", put(board::save_board_by_number))
        .route("/boards/category/{category}", get(board::get_boards_by_category))
        .route("/boards/detail/{board_number}", get(board::get_board_detail))
        .route("/boards/update/{board_number}", put(board::update_board))
        .route("/boards/delete/{board_number}", delete(board::delete_board))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

/// Assembles the complete application: routes, state, sessions, CORS and request tracing.
pub fn app(
    state: AppState,
    session: SessionManagerLayer<SqliteStore>,
    cors: CorsLayer,
) -> Router {
    router()
        .with_state(state)
        .layer(session)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!(
                        "http_request",
                        %method,
                        uri = %uri,
                        status = tracing::field::Empty
                    )
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}
