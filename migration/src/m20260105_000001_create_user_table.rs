use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserTb::Table)
                    .if_not_exists()
                    .col(string(UserTb::UserId).primary_key())
                    .col(string(UserTb::UserName))
                    .col(string_null(UserTb::UserNickname).unique_key())
                    .col(string(UserTb::UserPassword))
                    .col(blob_null(UserTb::UserImage))
                    .col(integer(UserTb::UserLevel).default(1))
                    .col(timestamp_with_time_zone(UserTb::CreatedDate))
                    .col(string(UserTb::CreatedBy))
                    .col(timestamp_with_time_zone(UserTb::UpdatedDate))
                    .col(string(UserTb::UpdatedBy))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserTb::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserTb {
    Table,
    UserId,
    UserName,
    UserNickname,
    UserPassword,
    UserImage,
    UserLevel,
    CreatedDate,
    CreatedBy,
    UpdatedDate,
    UpdatedBy,
}
