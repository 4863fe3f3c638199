use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::portfolio_user::Entity",
        from = "Column::UserId",
        to = "super::portfolio_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PortfolioUser,
}

impl Related<super::portfolio_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
