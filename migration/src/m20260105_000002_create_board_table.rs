use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::UserTb;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardTb::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardTb::BoardNumber))
                    .col(integer(BoardTb::BoardCategory).default(1))
                    .col(string(BoardTb::BoardTitle))
                    .col(string_len(BoardTb::BoardWrite, 1000))
                    .col(string(BoardTb::UserId))
                    .col(timestamp_with_time_zone(BoardTb::CreatedDate))
                    .col(string(BoardTb::CreatedBy))
                    .col(timestamp_with_time_zone(BoardTb::UpdatedDate))
                    .col(string(BoardTb::UpdatedBy))
                    // No cascade: deleting an owner that still has posts is refused.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_user_id")
                            .from(BoardTb::Table, BoardTb::UserId)
                            .to(UserTb::Table, UserTb::UserId)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_board_category")
                    .table(BoardTb::Table)
                    .col(BoardTb::BoardCategory)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardTb::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardTb {
    Table,
    BoardNumber,
    BoardCategory,
    BoardTitle,
    BoardWrite,
    UserId,
    CreatedDate,
    CreatedBy,
    UpdatedDate,
    UpdatedBy,
}
