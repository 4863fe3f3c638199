use sea_orm::entity::prelude::*;

/// Account lifecycle state, stored as its upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserStatus {
    #[sea_orm(string_value = "UNCONFIRMED")]
    Unconfirmed,
    #[sea_orm(string_value = "CONFIRMED")]
    Confirmed,
    #[sea_orm(string_value = "DISABLED")]
    Disabled,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub status: UserStatus,
    pub is_admin: bool,
    #[sea_orm(unique)]
    pub confirmation_token: Option<String>,
    pub created_at: DateTime,
    pub confirmed_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::portfolio_task::Entity")]
    PortfolioTask,
}

impl Related<super::portfolio_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioTask.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
