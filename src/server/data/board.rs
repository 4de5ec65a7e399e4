//! Board data repository for database operations.
//!
//! This module provides the `BoardRepository` for managing `board_tb` rows. Every
//! read joins the owning `user_tb` row so domain boards carry their author summary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::board::{Board, CreateBoardParam, UpdateBoardParam};

/// Repository providing database operations for board posts.
pub struct BoardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardRepository<'a> {
    /// Creates a new BoardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new board row.
    ///
    /// The board number is assigned by the database. Created and updated audit
    /// columns are both taken from the param's stamp.
    ///
    /// # Arguments
    /// - `param` - Board content, owner id and audit stamp
    ///
    /// # Returns
    /// - `Ok(Board)` - The inserted board with its author
    /// - `Err(DbErr)` - Database error, including an unknown owner id
    pub async fn create(&self, param: CreateBoardParam) -> Result<Board, DbErr> {
        let entity = entity::board::ActiveModel {
            board_category: ActiveValue::Set(param.board_category),
            board_title: ActiveValue::Set(param.board_title),
            board_write: ActiveValue::Set(param.board_write),
            user_id: ActiveValue::Set(param.user_id),
            created_date: ActiveValue::Set(param.stamp.at),
            created_by: ActiveValue::Set(param.stamp.actor.clone()),
            updated_date: ActiveValue::Set(param.stamp.at),
            updated_by: ActiveValue::Set(param.stamp.actor),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let author = entity
            .find_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(Board::from_entity(entity, author))
    }

    /// Finds a board by its number.
    ///
    /// # Returns
    /// - `Ok(Some(Board))` - Board found
    /// - `Ok(None)` - No board with that number
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, board_number: i64) -> Result<Option<Board>, DbErr> {
        let row = entity::prelude::Board::find_by_id(board_number)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.map(|(board, author)| Board::from_entity(board, author)))
    }

    /// Gets every board ordered by board number.
    pub async fn find_all(&self) -> Result<Vec<Board>, DbErr> {
        self.fetch(entity::prelude::Board::find()).await
    }

    /// Gets the boards of one category code ordered by board number.
    pub async fn find_by_category(&self, category: i32) -> Result<Vec<Board>, DbErr> {
        self.fetch(
            entity::prelude::Board::find()
                .filter(entity::board::Column::BoardCategory.eq(category)),
        )
        .await
    }

    /// Gets the boards owned by a user ordered by board number.
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Board>, DbErr> {
        self.fetch(
            entity::prelude::Board::find().filter(entity::board::Column::UserId.eq(user_id)),
        )
        .await
    }

    /// Counts the boards owned by a user.
    pub async fn count_by_user_id(&self, user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::Board::find()
            .filter(entity::board::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Updates the content of an existing board.
    ///
    /// Title and body are always overwritten, the category only when supplied.
    /// Owner, created-by and created-date never change.
    ///
    /// # Returns
    /// - `Ok(Some(Board))` - The updated board
    /// - `Ok(None)` - No board with that number
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateBoardParam) -> Result<Option<Board>, DbErr> {
        let Some(existing) = entity::prelude::Board::find_by_id(param.board_number)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::board::ActiveModel = existing.into();
        if let Some(category) = param.board_category {
            active.board_category = ActiveValue::Set(category);
        }
        active.board_title = ActiveValue::Set(param.board_title);
        active.board_write = ActiveValue::Set(param.board_write);
        active.updated_date = ActiveValue::Set(param.stamp.at);
        active.updated_by = ActiveValue::Set(param.stamp.actor);

        let entity = active.update(self.db).await?;

        let author = entity
            .find_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(Some(Board::from_entity(entity, author)))
    }

    /// Deletes a board by number.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of deleted rows (0 when the board did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, board_number: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::Board::delete_by_id(board_number)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn fetch(&self, query: Select<entity::prelude::Board>) -> Result<Vec<Board>, DbErr> {
        let rows = query
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::board::Column::BoardNumber)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(board, author)| Board::from_entity(board, author))
            .collect())
    }
}
