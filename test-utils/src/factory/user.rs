//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Actor stamped on factory-created rows.
const FACTORY_ACTOR: &str = "System";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .user_id("u1")
///     .name("Ann")
///     .password("p")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    name: String,
    nickname: Option<String>,
    password: String,
    image: Option<Vec<u8>>,
    level: i32,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `"user_{id}"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - nickname: `"nick_{id}"`
    /// - password: `"password"`
    /// - image: none
    /// - level: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: format!("user_{}", id),
            name: format!("User {}", id),
            nickname: Some(format!("nick_{}", id)),
            password: "password".to_string(),
            image: None,
            level: 1,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the nickname. Pass `None` to leave the column null.
    pub fn nickname(mut self, nickname: Option<&str>) -> Self {
        self.nickname = nickname.map(str::to_string);
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn image(mut self, image: Vec<u8>) -> Self {
        self.image = Some(image);
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Inserts the user into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            user_name: ActiveValue::Set(self.name),
            user_nickname: ActiveValue::Set(self.nickname),
            user_password: ActiveValue::Set(self.password),
            user_image: ActiveValue::Set(self.image),
            user_level: ActiveValue::Set(self.level),
            created_date: ActiveValue::Set(now),
            created_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            updated_date: ActiveValue::Set(now),
            updated_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created user entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
