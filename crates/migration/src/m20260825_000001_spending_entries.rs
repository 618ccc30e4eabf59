use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpendingEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpendingEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SpendingEntries::Category).string().not_null())
                    .col(
                        ColumnDef::new(SpendingEntries::Amount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SpendingEntries::Date).date().not_null())
                    .col(ColumnDef::new(SpendingEntries::Description).string())
                    .col(
                        ColumnDef::new(SpendingEntries::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpendingEntries::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum SpendingEntries {
    Table,
    Id,
    Category,
    Amount,
    Date,
    Description,
    CreatedAt,
}
