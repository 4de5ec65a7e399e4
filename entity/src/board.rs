use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "board_tb")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Integer")]
    pub board_number: i64,
    pub board_category: i32,
    pub board_title: String,
    #[sea_orm(column_type = "String(StringLen::N(1000))")]
    pub board_write: String,
    pub user_id: String,
    pub created_date: DateTimeUtc,
    pub created_by: String,
    pub updated_date: DateTimeUtc,
    pub updated_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
