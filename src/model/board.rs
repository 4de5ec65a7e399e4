use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author summary embedded in every board response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardAuthorDto {
    pub user_id: String,
    pub user_nickname: Option<String>,
    pub user_name: String,
    pub user_level: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardDto {
    pub board_number: i64,
    pub board_category: i32,
    pub board_title: String,
    pub board_write: String,
    /// `None` when the owning user row can no longer be resolved.
    pub user: Option<BoardAuthorDto>,
    pub created_date: DateTime<Utc>,
    pub created_by: String,
    pub updated_date: DateTime<Utc>,
    pub updated_by: String,
}

/// Create/save payload. `board_number` selects the row to update when present.
#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveBoardDto {
    pub board_number: Option<i64>,
    pub board_category: Option<i32>,
    pub board_title: String,
    pub board_write: String,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardDto {
    pub board_title: String,
    pub board_write: String,
}
