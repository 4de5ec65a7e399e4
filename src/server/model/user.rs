//! User domain models and parameters.
//!
//! Provides the `User` domain model converted from `user_tb` rows at the
//! repository boundary, plus the parameter types each user operation accepts.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};

use crate::{
    model::user::{AdminUpdateUserDto, ProfileFormDto, RegisterUserDto, UserDto},
    server::{error::AppError, model::audit::AuditStamp},
};

/// Registered user with credentials, profile data and audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Login identifier supplied at registration.
    pub user_id: String,
    /// Display name.
    pub user_name: String,
    /// Unique nickname, used for id and password recovery.
    pub user_nickname: Option<String>,
    /// Stored as entered.
    pub user_password: String,
    /// Raw profile image bytes.
    pub user_image: Option<Vec<u8>>,
    pub user_level: i32,
    pub created_date: DateTime<Utc>,
    pub created_by: String,
    pub updated_date: DateTime<Utc>,
    pub updated_by: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The `user_tb` row
    ///
    /// # Returns
    /// - `User` - The converted domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            user_name: entity.user_name,
            user_nickname: entity.user_nickname,
            user_password: entity.user_password,
            user_image: entity.user_image,
            user_level: entity.user_level,
            created_date: entity.created_date,
            created_by: entity.created_by,
            updated_date: entity.updated_date,
            updated_by: entity.updated_by,
        }
    }

    /// Converts the user domain model to a DTO for API responses and the session.
    ///
    /// The image blob is encoded as standard base64.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.user_id,
            user_name: self.user_name,
            user_nickname: self.user_nickname,
            user_password: self.user_password,
            user_image: self.user_image.map(|bytes| STANDARD.encode(bytes)),
            user_level: self.user_level,
            created_date: self.created_date,
            created_by: self.created_by,
            updated_date: self.updated_date,
            updated_by: self.updated_by,
        }
    }
}

/// Candidate user as submitted for registration, before validation.
#[derive(Debug, Clone, Default)]
pub struct RegisterUserParam {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_nickname: Option<String>,
    pub user_password: Option<String>,
    pub user_image: Option<Vec<u8>>,
    pub user_level: Option<i32>,
}

impl RegisterUserParam {
    /// Converts the registration DTO, decoding the optional base64 image.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParam)` - Decoded candidate
    /// - `Err(AppError::BadRequest)` - `userImage` is not valid base64
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        let user_image = match dto.user_image {
            Some(encoded) if !encoded.is_empty() => Some(
                STANDARD
                    .decode(encoded)
                    .map_err(|e| AppError::BadRequest(format!("Invalid userImage: {}", e)))?,
            ),
            _ => None,
        };

        Ok(Self {
            user_id: dto.user_id,
            user_name: dto.user_name,
            user_nickname: dto.user_nickname,
            user_password: dto.user_password,
            user_image,
            user_level: dto.user_level,
        })
    }
}

/// Validated parameters for inserting a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub user_id: String,
    pub user_name: String,
    pub user_nickname: Option<String>,
    pub user_password: String,
    pub user_image: Option<Vec<u8>>,
    pub user_level: i32,
    pub stamp: AuditStamp,
}

/// Full overwrite of a user's mutable columns.
///
/// Created-by and created-date are never touched by an update.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub user_id: String,
    pub user_name: String,
    pub user_nickname: Option<String>,
    pub user_password: String,
    pub user_image: Option<Vec<u8>>,
    pub user_level: i32,
    pub stamp: AuditStamp,
}

impl UpdateUserParam {
    /// Starts an update from the currently stored user, keeping every value.
    pub fn from_user(user: User, stamp: AuditStamp) -> Self {
        Self {
            user_id: user.user_id,
            user_name: user.user_name,
            user_nickname: user.user_nickname,
            user_password: user.user_password,
            user_image: user.user_image,
            user_level: user.user_level,
            stamp,
        }
    }
}

/// Self-service profile update submitted as a multipart form.
#[derive(Debug, Clone)]
pub struct UpdateProfileParam {
    pub user_id: String,
    pub user_nickname: String,
    pub user_name: String,
    pub user_password: String,
    /// Overwrites the stored level only when present.
    pub user_level: Option<i32>,
    /// Replaces the stored image only when present and non-empty.
    pub profile_image: Option<Vec<u8>>,
}

impl UpdateProfileParam {
    pub fn from_dto(user_id: String, dto: ProfileFormDto) -> Self {
        Self {
            user_id,
            user_nickname: dto.user_nickname,
            user_name: dto.user_name,
            user_password: dto.user_password,
            user_level: dto.user_level,
            profile_image: dto.profile_image,
        }
    }
}

/// Administrative overwrite of nickname, name, level and password.
///
/// All four values are replaced; there is no partial update on this path.
#[derive(Debug, Clone)]
pub struct AdminUpdateUserParam {
    pub user_id: String,
    pub user_nickname: String,
    pub user_name: String,
    pub user_password: String,
    pub user_level: i32,
}

impl AdminUpdateUserParam {
    /// Converts the admin DTO, requiring every field.
    ///
    /// # Returns
    /// - `Ok(AdminUpdateUserParam)` - All four fields present
    /// - `Err(AppError::BadRequest)` - A field is missing
    pub fn from_dto(user_id: String, dto: AdminUpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id,
            user_nickname: required(dto.user_nickname, "userNickname")?,
            user_name: required(dto.user_name, "userName")?,
            user_password: required(dto.user_password, "userPassword")?,
            user_level: required(dto.user_level, "userLevel")?,
        })
    }
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing required field: {}", name)))
}
