//! User service for business logic.
//!
//! This module provides the `UserService` for profile management, account
//! recovery lookups, duplicate checks and deletion. Every update loads the stored
//! user first, so an unknown id surfaces as `AppError::NotFound`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        audit::AuditStamp,
        user::{AdminUpdateUserParam, UpdateProfileParam, UpdateUserParam, User},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every registered user.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).find_all().await?;
        Ok(users)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_user_by_id(&self, user_id: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))
    }

    /// Applies a self-service profile update.
    ///
    /// Nickname, name and password are always overwritten. The level is only
    /// overwritten when supplied, and the image only when a non-empty upload was
    /// provided.
    ///
    /// # Arguments
    /// - `param` - Submitted profile form
    /// - `actor` - Id recorded as updated-by
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update_profile(
        &self,
        param: UpdateProfileParam,
        actor: &str,
    ) -> Result<User, AppError> {
        let user = self.get_user_by_id(&param.user_id).await?;

        let mut update = UpdateUserParam::from_user(user, AuditStamp::by(actor));
        update.user_nickname = Some(param.user_nickname);
        update.user_name = param.user_name;
        update.user_password = param.user_password;
        if let Some(level) = param.user_level {
            update.user_level = level;
        }
        if let Some(image) = param.profile_image.filter(|bytes| !bytes.is_empty()) {
            update.user_image = Some(image);
        }

        let user = UserRepository::new(self.db).update(update).await?;

        tracing::info!(user_id = %user.user_id, "updated user profile");

        Ok(user)
    }

    /// Replaces a user's password.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update_password(
        &self,
        user_id: &str,
        new_password: String,
        actor: &str,
    ) -> Result<User, AppError> {
        let user = self.get_user_by_id(user_id).await?;

        let mut update = UpdateUserParam::from_user(user, AuditStamp::by(actor));
        update.user_password = new_password;

        let user = UserRepository::new(self.db).update(update).await?;

        tracing::info!(user_id = %user.user_id, "updated user password");

        Ok(user)
    }

    /// Administrative update of nickname, name, level and password.
    ///
    /// All four values overwrite the stored ones.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update_user(
        &self,
        param: AdminUpdateUserParam,
        actor: &str,
    ) -> Result<User, AppError> {
        let user = self.get_user_by_id(&param.user_id).await?;

        let mut update = UpdateUserParam::from_user(user, AuditStamp::by(actor));
        update.user_nickname = Some(param.user_nickname);
        update.user_name = param.user_name;
        update.user_password = param.user_password;
        update.user_level = param.user_level;

        let user = UserRepository::new(self.db).update(update).await?;

        tracing::info!(user_id = %user.user_id, actor = %actor, "admin updated user");

        Ok(user)
    }

    /// Looks up the id registered under a nickname.
    ///
    /// # Returns
    /// - `Ok(String)` - The user id
    /// - `Err(AppError::NotFound)` - No user with that nickname
    pub async fn find_id_by_nickname(&self, nickname: &str) -> Result<String, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_nickname(nickname)
            .await?
            .ok_or_else(|| AppError::NotFound("No user found with that nickname".to_string()))?;

        Ok(user.user_id)
    }

    /// Looks up the stored password of the user matching nickname and id.
    ///
    /// # Returns
    /// - `Ok(String)` - The stored password
    /// - `Err(AppError::NotFound)` - No user matches both values
    pub async fn find_password_by_nickname_and_id(
        &self,
        nickname: &str,
        user_id: &str,
    ) -> Result<String, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_nickname_and_id(nickname, user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No user found with that nickname and id".to_string())
            })?;

        Ok(user.user_password)
    }

    /// Checks whether either the id or the nickname is already taken.
    ///
    /// Absent or empty inputs count as not existing.
    pub async fn is_user_id_or_nickname_exists(
        &self,
        user_id: Option<&str>,
        nickname: Option<&str>,
    ) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        let id_exists = match user_id.filter(|id| !id.is_empty()) {
            Some(id) => repo.exists_by_id(id).await?,
            None => false,
        };
        let nickname_exists = match nickname.filter(|nickname| !nickname.is_empty()) {
            Some(nickname) => repo.exists_by_nickname(nickname).await?,
            None => false,
        };

        Ok(id_exists || nickname_exists)
    }

    /// Deletes a user by id.
    ///
    /// No existence check is made. Boards owned by the user are kept; while any
    /// exist the database refuses the delete.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        let rows = UserRepository::new(self.db).delete(user_id).await?;

        tracing::info!(user_id = %user_id, rows, "deleted user");

        Ok(())
    }
}

fn user_not_found(user_id: &str) -> AppError {
    AppError::NotFound(format!("User {} not found", user_id))
}
