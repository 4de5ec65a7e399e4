//! Authentication service for registration and credential checks.
//!
//! Session handling stays in the controller; this service only decides whether a
//! candidate may be registered and whether a pair of credentials is valid.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        audit::AuditStamp,
        user::{CreateUserParam, RegisterUserParam, User},
    },
};

const DEFAULT_USER_LEVEL: i32 = 1;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// Id, password and name are mandatory; an absent or empty value is rejected
    /// before anything is persisted. The row is stamped by the system actor and
    /// the level defaults to 1. Duplicate ids or nicknames are left to the
    /// database constraints.
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::BadRequest)` - A mandatory field is missing
    /// - `Err(AppError::DbErr)` - Insert failed (duplicate id, duplicate nickname, ...)
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let user_id = require_field(param.user_id, "userId")?;
        let user_password = require_field(param.user_password, "userPassword")?;
        let user_name = require_field(param.user_name, "userName")?;

        let user = UserRepository::new(self.db)
            .create(CreateUserParam {
                user_id,
                user_name,
                user_nickname: param.user_nickname,
                user_password,
                user_image: param.user_image,
                user_level: param.user_level.unwrap_or(DEFAULT_USER_LEVEL),
                stamp: AuditStamp::system(),
            })
            .await?;

        tracing::info!(user_id = %user.user_id, "registered user");

        Ok(user)
    }

    /// Checks a user id and password pair.
    ///
    /// The stored password must equal the supplied one exactly.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown id or wrong password
    pub async fn login(&self, user_id: &str, password: &str) -> Result<User, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        match user {
            Some(user) if user.user_password == password => {
                tracing::info!(user_id = %user.user_id, "user logged in");
                Ok(user)
            }
            _ => {
                tracing::warn!(user_id = %user_id, "rejected login");
                Err(AuthError::InvalidCredentials.into())
            }
        }
    }
}

fn require_field(value: Option<String>, name: &str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            tracing::warn!(field = name, "registration missing mandatory field");
            Err(AppError::BadRequest(format!("Missing required field: {}", name)))
        }
    }
}
