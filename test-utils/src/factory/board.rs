//! Board factory for creating test board entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test boards owned by an existing user.
///
/// The owner id is recorded as created-by and updated-by, as it is for boards
/// created through the API.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::board::BoardFactory;
///
/// let board = BoardFactory::new(&db, &user.user_id)
///     .category(2)
///     .title("T")
///     .write("W")
///     .build()
///     .await?;
/// ```
pub struct BoardFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    category: i32,
    title: String,
    write: String,
}

impl<'a> BoardFactory<'a> {
    /// Creates a new BoardFactory with default values.
    ///
    /// Defaults:
    /// - category: `1`
    /// - title: `"Board {id}"`
    /// - write: `"Body of board {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owner; the user row must already exist
    pub fn new(db: &'a DatabaseConnection, user_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: user_id.to_string(),
            category: 1,
            title: format!("Board {}", id),
            write: format!("Body of board {}", id),
        }
    }

    pub fn category(mut self, category: i32) -> Self {
        self.category = category;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn write(mut self, write: impl Into<String>) -> Self {
        self.write = write.into();
        self
    }

    /// Inserts the board into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created board entity
    /// - `Err(DbErr)` - Database error during insertion (e.g. unknown owner)
    pub async fn build(self) -> Result<entity::board::Model, DbErr> {
        let now = Utc::now();

        entity::board::ActiveModel {
            board_category: ActiveValue::Set(self.category),
            board_title: ActiveValue::Set(self.title),
            board_write: ActiveValue::Set(self.write),
            user_id: ActiveValue::Set(self.user_id.clone()),
            created_date: ActiveValue::Set(now),
            created_by: ActiveValue::Set(self.user_id.clone()),
            updated_date: ActiveValue::Set(now),
            updated_by: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a general-category board owned by `user_id`.
pub async fn create_board(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::board::Model, DbErr> {
    BoardFactory::new(db, user_id).build().await
}
