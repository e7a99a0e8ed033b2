//! Create `modules` table.
//! Status and week are constrained at the storage layer as well as in the API.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Modules::Table)
                    .if_not_exists()
                    .col(pk_auto(Modules::Id))
                    .col(string_len(Modules::Title, 120))
                    .col(text(Modules::Description).default(""))
                    .col(integer(Modules::Week).check(Expr::col(Modules::Week).gte(0)))
                    .col(
                        string_len(Modules::Status, 16)
                            .default("planned")
                            .check(Expr::col(Modules::Status).is_in(["planned", "in_progress", "done"])),
                    )
                    .col(
                        timestamp_with_time_zone(Modules::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Modules::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Modules::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Modules {
    Table,
    Id,
    Title,
    Description,
    Week,
    Status,
    CreatedAt,
    UpdatedAt,
}
