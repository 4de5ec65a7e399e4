//! Board service for business logic.
//!
//! Validates category codes and body length, stamps audit fields and maps missing
//! boards to `AppError::NotFound`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::board::BoardRepository,
    error::AppError,
    model::{
        audit::AuditStamp,
        board::{
            Board, BoardCategory, BoardContentParam, CreateBoardParam, SaveBoardParam,
            UpdateBoardParam, BOARD_WRITE_MAX_CHARS,
        },
    },
};

pub struct BoardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a board owned by the logged-in user.
    ///
    /// Any board number in the param is ignored; this path always inserts.
    ///
    /// # Arguments
    /// - `param` - Submitted board
    /// - `user_id` - Owner, also recorded as created-by and updated-by
    ///
    /// # Returns
    /// - `Ok(Board)` - The created board
    /// - `Err(AppError::BadRequest)` - Unknown category or body too long
    pub async fn create_board(
        &self,
        param: SaveBoardParam,
        user_id: &str,
    ) -> Result<Board, AppError> {
        validate_category(param.board_category)?;
        validate_write(&param.board_write)?;

        let board = BoardRepository::new(self.db)
            .create(CreateBoardParam {
                board_category: param.board_category,
                board_title: param.board_title,
                board_write: param.board_write,
                user_id: user_id.to_string(),
                stamp: AuditStamp::by(user_id),
            })
            .await?;

        tracing::info!(board_number = board.board_number, user_id = %user_id, "created board");

        Ok(board)
    }

    /// Inserts or updates a board depending on whether it carries a number.
    ///
    /// Without a number a new board is inserted with the actor as owner and
    /// created-by. With a number the category, title and body of that row are
    /// overwritten; owner and created-by stay as they were. Updated-by is always
    /// the actor.
    ///
    /// # Returns
    /// - `Ok(Board)` - The created or updated board
    /// - `Err(AppError::BadRequest)` - Unknown category or body too long
    /// - `Err(AppError::NotFound)` - The number refers to no board
    pub async fn save_board(&self, param: SaveBoardParam, actor: &str) -> Result<Board, AppError> {
        let Some(board_number) = param.board_number else {
            return self.create_board(param, actor).await;
        };

        validate_category(param.board_category)?;
        validate_write(&param.board_write)?;

        let board = BoardRepository::new(self.db)
            .update(UpdateBoardParam {
                board_number,
                board_category: Some(param.board_category),
                board_title: param.board_title,
                board_write: param.board_write,
                stamp: AuditStamp::by(actor),
            })
            .await?
            .ok_or_else(post_not_found)?;

        tracing::info!(board_number, actor = %actor, "saved board");

        Ok(board)
    }

    /// Replaces the title and body of a board.
    ///
    /// # Returns
    /// - `Ok(Board)` - The updated board
    /// - `Err(AppError::NotFound)` - No board with that number
    pub async fn update_board(
        &self,
        board_number: i64,
        param: BoardContentParam,
        actor: &str,
    ) -> Result<Board, AppError> {
        validate_write(&param.board_write)?;

        let board = BoardRepository::new(self.db)
            .update(UpdateBoardParam {
                board_number,
                board_category: None,
                board_title: param.board_title,
                board_write: param.board_write,
                stamp: AuditStamp::by(actor),
            })
            .await?
            .ok_or_else(post_not_found)?;

        tracing::info!(board_number, "updated board");

        Ok(board)
    }

    /// Deletes a board by number. Unknown numbers are not an error.
    pub async fn delete_board(&self, board_number: i64) -> Result<(), AppError> {
        let rows = BoardRepository::new(self.db).delete(board_number).await?;

        tracing::info!(board_number, rows, "deleted board");

        Ok(())
    }

    /// Retrieves a board that must exist.
    ///
    /// # Returns
    /// - `Ok(Board)` - Board found
    /// - `Err(AppError::NotFound)` - No board with that number
    pub async fn get_board_detail(&self, board_number: i64) -> Result<Board, AppError> {
        self.get_board_by_id(board_number)
            .await?
            .ok_or_else(post_not_found)
    }

    /// Retrieves a board if it exists.
    pub async fn get_board_by_id(&self, board_number: i64) -> Result<Option<Board>, AppError> {
        let board = BoardRepository::new(self.db).find_by_id(board_number).await?;
        Ok(board)
    }

    pub async fn get_boards_by_category(
        &self,
        category: BoardCategory,
    ) -> Result<Vec<Board>, AppError> {
        let boards = BoardRepository::new(self.db)
            .find_by_category(category.code())
            .await?;
        Ok(boards)
    }

    pub async fn get_all_boards(&self) -> Result<Vec<Board>, AppError> {
        let boards = BoardRepository::new(self.db).find_all().await?;
        Ok(boards)
    }

    pub async fn get_posts_by_user_id(&self, user_id: &str) -> Result<Vec<Board>, AppError> {
        let boards = BoardRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?;
        Ok(boards)
    }

    pub async fn get_post_count_by_user_id(&self, user_id: &str) -> Result<u64, AppError> {
        let count = BoardRepository::new(self.db)
            .count_by_user_id(user_id)
            .await?;
        Ok(count)
    }
}

fn post_not_found() -> AppError {
    AppError::NotFound("Post not found".to_string())
}

fn validate_category(code: i32) -> Result<BoardCategory, AppError> {
    BoardCategory::from_code(code)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown board category: {}", code)))
}

fn validate_write(board_write: &str) -> Result<(), AppError> {
    if board_write.chars().count() > BOARD_WRITE_MAX_CHARS {
        return Err(AppError::BadRequest(format!(
            "Board body exceeds {} characters",
            BOARD_WRITE_MAX_CHARS
        )));
    }
    Ok(())
}
