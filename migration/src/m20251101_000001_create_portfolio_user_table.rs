use sea_orm_migration::{prelude::*, schema::*};

static IDX_USER_CONFIRMATION_TOKEN: &str = "idx_portfolio_user_confirmation_token";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioUser::Table)
                    .if_not_exists()
                    .col(pk_auto(PortfolioUser::Id))
                    .col(string_uniq(PortfolioUser::Email))
                    .col(string(PortfolioUser::Name))
                    .col(string(PortfolioUser::PasswordHash))
                    .col(string_len(PortfolioUser::Status, 16))
                    .col(boolean(PortfolioUser::IsAdmin).default(false))
                    .col(string_null(PortfolioUser::ConfirmationToken))
                    .col(timestamp(PortfolioUser::CreatedAt))
                    .col(timestamp_null(PortfolioUser::ConfirmedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_CONFIRMATION_TOKEN)
                    .table(PortfolioUser::Table)
                    .col(PortfolioUser::ConfirmationToken)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_CONFIRMATION_TOKEN)
                    .table(PortfolioUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PortfolioUser {
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    Status,
    IsAdmin,
    ConfirmationToken,
    CreatedAt,
    ConfirmedAt,
}
