use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Modules: listing is always ORDER BY week, id
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_modules_week_id")
                    .table(Modules::Table)
                    .col(Modules::Week)
                    .col(Modules::Id)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_modules_week_id").table(Modules::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Modules { Table, Week, Id }
