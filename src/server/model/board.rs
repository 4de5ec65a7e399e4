//! Board domain models, category codes and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::board::{BoardAuthorDto, BoardDto, SaveBoardDto, UpdateBoardDto},
    server::model::audit::AuditStamp,
};

/// Maximum number of characters accepted for a board body.
pub const BOARD_WRITE_MAX_CHARS: usize = 1000;

/// Fixed classification of a board post, stored as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCategory {
    General,
    Free,
    Questions,
    Notice,
}

impl BoardCategory {
    pub fn code(self) -> i32 {
        match self {
            Self::General => 1,
            Self::Free => 2,
            Self::Questions => 3,
            Self::Notice => 4,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::General),
            2 => Some(Self::Free),
            3 => Some(Self::Questions),
            4 => Some(Self::Notice),
            _ => None,
        }
    }
}

/// Category selection parsed from the `/boards/category/{cat}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(BoardCategory),
}

impl CategoryFilter {
    /// Maps a path segment to a filter. Unknown segments select the general category.
    pub fn from_path_segment(segment: &str) -> Self {
        match segment {
            "all" => Self::All,
            "free" => Self::Only(BoardCategory::Free),
            "questions" => Self::Only(BoardCategory::Questions),
            "notice" => Self::Only(BoardCategory::Notice),
            _ => Self::Only(BoardCategory::General),
        }
    }
}

/// Public summary of the user who owns a board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardAuthor {
    pub user_id: String,
    pub user_nickname: Option<String>,
    pub user_name: String,
    pub user_level: i32,
}

impl BoardAuthor {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            user_nickname: entity.user_nickname,
            user_name: entity.user_name,
            user_level: entity.user_level,
        }
    }

    pub fn into_dto(self) -> BoardAuthorDto {
        BoardAuthorDto {
            user_id: self.user_id,
            user_nickname: self.user_nickname,
            user_name: self.user_name,
            user_level: self.user_level,
        }
    }
}

/// Board post with its owner and audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub board_number: i64,
    pub board_category: i32,
    pub board_title: String,
    pub board_write: String,
    /// Owner id, fixed at creation.
    pub user_id: String,
    /// Owner summary; `None` when the owning row no longer resolves.
    pub author: Option<BoardAuthor>,
    pub created_date: DateTime<Utc>,
    pub created_by: String,
    pub updated_date: DateTime<Utc>,
    pub updated_by: String,
}

impl Board {
    /// Converts a `board_tb` row and its optionally joined owner row.
    pub fn from_entity(entity: entity::board::Model, author: Option<entity::user::Model>) -> Self {
        Self {
            board_number: entity.board_number,
            board_category: entity.board_category,
            board_title: entity.board_title,
            board_write: entity.board_write,
            user_id: entity.user_id,
            author: author.map(BoardAuthor::from_entity),
            created_date: entity.created_date,
            created_by: entity.created_by,
            updated_date: entity.updated_date,
            updated_by: entity.updated_by,
        }
    }

    pub fn into_dto(self) -> BoardDto {
        BoardDto {
            board_number: self.board_number,
            board_category: self.board_category,
            board_title: self.board_title,
            board_write: self.board_write,
            user: self.author.map(BoardAuthor::into_dto),
            created_date: self.created_date,
            created_by: self.created_by,
            updated_date: self.updated_date,
            updated_by: self.updated_by,
        }
    }
}

/// Parameters for inserting a board row.
#[derive(Debug, Clone)]
pub struct CreateBoardParam {
    pub board_category: i32,
    pub board_title: String,
    pub board_write: String,
    pub user_id: String,
    pub stamp: AuditStamp,
}

/// Parameters for updating an existing board row.
///
/// `board_category` is left untouched when `None`. Owner and created-by are
/// never part of an update.
#[derive(Debug, Clone)]
pub struct UpdateBoardParam {
    pub board_number: i64,
    pub board_category: Option<i32>,
    pub board_title: String,
    pub board_write: String,
    pub stamp: AuditStamp,
}

/// Board submitted for creation or save, before validation.
#[derive(Debug, Clone)]
pub struct SaveBoardParam {
    /// Row to update; `None` inserts a new board.
    pub board_number: Option<i64>,
    pub board_category: i32,
    pub board_title: String,
    pub board_write: String,
}

impl SaveBoardParam {
    /// Converts the DTO, defaulting an absent category to general.
    pub fn from_dto(dto: SaveBoardDto) -> Self {
        Self {
            board_number: dto.board_number,
            board_category: dto
                .board_category
                .unwrap_or(BoardCategory::General.code()),
            board_title: dto.board_title,
            board_write: dto.board_write,
        }
    }
}

/// Title and body replacement for an existing board.
#[derive(Debug, Clone)]
pub struct BoardContentParam {
    pub board_title: String,
    pub board_write: String,
}

impl BoardContentParam {
    pub fn from_dto(dto: UpdateBoardDto) -> Self {
        Self {
            board_title: dto.board_title,
            board_write: dto.board_write,
        }
    }
}
