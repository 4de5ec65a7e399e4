use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        board::{BoardDto, SaveBoardDto, UpdateBoardDto},
    },
    server::{
        error::AppError,
        middleware::context::RequestContext,
        model::board::{BoardContentParam, CategoryFilter, SaveBoardParam},
        service::board::BoardService,
        state::AppState,
    },
};

/// Tag for grouping board endpoints in OpenAPI documentation
pub static BOARD_TAG: &str = "board";

/// List every board ordered by board number.
#[utoipa::path(
    get,
    path = "/boards",
    tag = BOARD_TAG,
    responses(
        (status = 200, description = "All boards", body = Vec<BoardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_boards(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let boards = BoardService::new(&state.db).get_all_boards().await?;

    let boards_dto: Vec<_> = boards.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(boards_dto)))
}

/// Count the boards owned by a user.
#[utoipa::path(
    get,
    path = "/boards/count/{user_id}",
    tag = BOARD_TAG,
    params(
        ("user_id" = String, Path, description = "Owner user id")
    ),
    responses(
        (status = 200, description = "Number of boards", body = u64),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_count(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let count = BoardService::new(&state.db)
        .get_post_count_by_user_id(&user_id)
        .await?;

    Ok((StatusCode::OK, Json(count)))
}

/// List the boards owned by a user.
#[utoipa::path(
    get,
    path = "/boards/user/{user_id}",
    tag = BOARD_TAG,
    params(
        ("user_id" = String, Path, description = "Owner user id")
    ),
    responses(
        (status = 200, description = "Boards of the user", body = Vec<BoardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let boards = BoardService::new(&state.db)
        .get_posts_by_user_id(&user_id)
        .await?;

    let boards_dto: Vec<_> = boards.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(boards_dto)))
}

/// Create a board owned by the logged-in user.
///
/// # Access Control
/// Requires a logged-in user.
///
/// # Returns
/// - `200 OK` - Board created
/// - `400 Bad Request` - Unknown category or body too long
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/boards/create",
    tag = BOARD_TAG,
    request_body = SaveBoardDto,
    responses(
        (status = 200, description = "Board created", body = String),
        (status = 400, description = "Invalid board", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_board(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(payload): Json<SaveBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = ctx.require_user()?;

    BoardService::new(&state.db)
        .create_board(SaveBoardParam::from_dto(payload), &user.user_id)
        .await?;

    Ok((StatusCode::OK, "Post created successfully"))
}

/// Save a board as the logged-in user.
///
/// Inserts when the payload has no `boardNumber`, otherwise updates that board.
///
/// # Access Control
/// Requires a logged-in user.
///
/// # Returns
/// - `201 Created` - The saved board
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - `boardNumber` refers to no board
#[utoipa::path(
    post,
    path = "/boards",
    tag = BOARD_TAG,
    request_body = SaveBoardDto,
    responses(
        (status = 201, description = "Board saved", body = BoardDto),
        (status = 400, description = "Invalid board", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_board(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(payload): Json<SaveBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = ctx.require_user()?;

    let board = BoardService::new(&state.db)
        .save_board(SaveBoardParam::from_dto(payload), &user.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(board.into_dto())))
}

/// Update the board with the given number as the logged-in user.
///
/// Any `boardNumber` in the payload is replaced by the path value.
///
/// # Access Control
/// Requires a logged-in user.
#[utoipa::path(
    put,
    path = "/boards/{board_number}",
    tag = BOARD_TAG,
    params(
        ("board_number" = i64, Path, description = "Board number")
    ),
    request_body = SaveBoardDto,
    responses(
        (status = 200, description = "Board updated", body = BoardDto),
        (status = 400, description = "Invalid board", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_board_by_number(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(board_number): Path<i64>,
    Json(payload): Json<SaveBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = ctx.require_user()?;

    let mut param = SaveBoardParam::from_dto(payload);
    param.board_number = Some(board_number);

    let board = BoardService::new(&state.db)
        .save_board(param, &user.user_id)
        .await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// List boards of a category.
///
/// `all` lists every board; `free`, `questions` and `notice` select their
/// category; any other segment selects the general category.
#[utoipa::path(
    get,
    path = "/boards/category/{category}",
    tag = BOARD_TAG,
    params(
        ("category" = String, Path, description = "all, free, questions, notice or anything else for general")
    ),
    responses(
        (status = 200, description = "Boards of the category", body = Vec<BoardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_boards_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = BoardService::new(&state.db);

    let boards = match CategoryFilter::from_path_segment(&category) {
        CategoryFilter::All => service.get_all_boards().await?,
        CategoryFilter::Only(category) => service.get_boards_by_category(category).await?,
    };

    let boards_dto: Vec<_> = boards.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(boards_dto)))
}

/// Get one board.
#[utoipa::path(
    get,
    path = "/boards/detail/{board_number}",
    tag = BOARD_TAG,
    params(
        ("board_number" = i64, Path, description = "Board number")
    ),
    responses(
        (status = 200, description = "The board", body = BoardDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board_detail(
    State(state): State<AppState>,
    Path(board_number): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let board = BoardService::new(&state.db)
        .get_board_detail(board_number)
        .await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// Replace the title and body of a board.
///
/// No login is required. Updated-by records the logged-in user when there is
/// one and the system actor otherwise.
#[utoipa::path(
    put,
    path = "/boards/update/{board_number}",
    tag = BOARD_TAG,
    params(
        ("board_number" = i64, Path, description = "Board number")
    ),
    request_body = UpdateBoardDto,
    responses(
        (status = 200, description = "Board updated", body = BoardDto),
        (status = 400, description = "Body too long", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_board(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(board_number): Path<i64>,
    Json(payload): Json<UpdateBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let board = BoardService::new(&state.db)
        .update_board(board_number, BoardContentParam::from_dto(payload), ctx.actor())
        .await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// Delete a board. Unknown numbers still answer 204.
#[utoipa::path(
    delete,
    path = "/boards/delete/{board_number}",
    tag = BOARD_TAG,
    params(
        ("board_number" = i64, Path, description = "Board number")
    ),
    responses(
        (status = 204, description = "Board deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_board(
    State(state): State<AppState>,
    Path(board_number): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    BoardService::new(&state.db)
        .delete_board(board_number)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
