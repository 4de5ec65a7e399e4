//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing `user_tb` rows. It handles
//! creation, lookups, existence checks, full-row updates and deletion, converting
//! entity models to domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    ///
    /// Created and updated audit columns are both taken from the param's stamp.
    /// No duplicate check is made; an existing id or nickname fails on the
    /// primary key or unique index.
    ///
    /// # Arguments
    /// - `param` - Validated user fields and audit stamp
    ///
    /// # Returns
    /// - `Ok(User)` - The inserted user
    /// - `Err(DbErr)` - Database error, including constraint violations
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            user_name: ActiveValue::Set(param.user_name),
            user_nickname: ActiveValue::Set(param.user_nickname),
            user_password: ActiveValue::Set(param.user_password),
            user_image: ActiveValue::Set(param.user_image),
            user_level: ActiveValue::Set(param.user_level),
            created_date: ActiveValue::Set(param.stamp.at),
            created_by: ActiveValue::Set(param.stamp.actor.clone()),
            updated_date: ActiveValue::Set(param.stamp.at),
            updated_by: ActiveValue::Set(param.stamp.actor),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets every user ordered by id.
    pub async fn find_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::UserId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by nickname.
    pub async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::UserNickname.eq(nickname))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user matching both nickname and id.
    pub async fn find_by_nickname_and_id(
        &self,
        nickname: &str,
        user_id: &str,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::UserNickname.eq(nickname))
            .filter(entity::user::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether a user with the given id exists.
    pub async fn exists_by_id(&self, user_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a user with the given nickname exists.
    pub async fn exists_by_nickname(&self, nickname: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::UserNickname.eq(nickname))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Overwrites the mutable columns of an existing user.
    ///
    /// Created-by and created-date are left as stored. Updated-by and updated-date
    /// come from the param's stamp.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotUpdated)` - No user with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, param: UpdateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            user_id: ActiveValue::Unchanged(param.user_id),
            user_name: ActiveValue::Set(param.user_name),
            user_nickname: ActiveValue::Set(param.user_nickname),
            user_password: ActiveValue::Set(param.user_password),
            user_image: ActiveValue::Set(param.user_image),
            user_level: ActiveValue::Set(param.user_level),
            updated_date: ActiveValue::Set(param.stamp.at),
            updated_by: ActiveValue::Set(param.stamp.actor),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a user by id.
    ///
    /// Boards referencing the user are not removed; while any exist the foreign
    /// key refuses the delete.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of deleted rows (0 when the id did not exist)
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn delete(&self, user_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
