use crate::server::{
    data::user::UserRepository,
    model::{
        audit::AuditStamp,
        user::{CreateUserParam, UpdateUserParam},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists;
mod find_all;
mod find_by_id;
mod find_by_nickname;
mod update;

fn create_param(user_id: &str, nickname: Option<&str>) -> CreateUserParam {
    CreateUserParam {
        user_id: user_id.to_string(),
        user_name: "Ann".to_string(),
        user_nickname: nickname.map(str::to_string),
        user_password: "p".to_string(),
        user_image: None,
        user_level: 1,
        stamp: AuditStamp::system(),
    }
}
