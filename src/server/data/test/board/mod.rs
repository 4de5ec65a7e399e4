use crate::server::{
    data::board::BoardRepository,
    model::{
        audit::AuditStamp,
        board::{CreateBoardParam, UpdateBoardParam},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_category;
mod find_by_id;
mod find_by_user_id;
mod update;
