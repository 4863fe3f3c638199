use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_create_portfolio_user_table::PortfolioUser;

static IDX_TASK_USER_ID: &str = "idx_portfolio_task_user_id";
static FK_TASK_USER_ID: &str = "fk_portfolio_task_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioTask::Table)
                    .if_not_exists()
                    .col(pk_auto(PortfolioTask::Id))
                    .col(integer(PortfolioTask::UserId))
                    .col(string_len(PortfolioTask::Title, 200))
                    .col(boolean(PortfolioTask::Completed).default(false))
                    .col(timestamp(PortfolioTask::CreatedAt))
                    .col(timestamp(PortfolioTask::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TASK_USER_ID)
                    .table(PortfolioTask::Table)
                    .col(PortfolioTask::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TASK_USER_ID)
                    .from_tbl(PortfolioTask::Table)
                    .from_col(PortfolioTask::UserId)
                    .to_tbl(PortfolioUser::Table)
                    .to_col(PortfolioUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TASK_USER_ID)
                    .table(PortfolioTask::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TASK_USER_ID)
                    .table(PortfolioTask::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioTask::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PortfolioTask {
    Table,
    Id,
    UserId,
    Title,
    Completed,
    CreatedAt,
    UpdatedAt,
}
