use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(topics_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await
    }
}

/// Free-form text columns; only blankness is validated.
fn topics_table() -> TableCreateStatement {
    Table::create()
        .table(Topics::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Topics::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Topics::Title).text().not_null())
        .col(ColumnDef::new(Topics::Message).text().not_null())
        .col(
            ColumnDef::new(Topics::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Topics::Status)
                .string_len(20)
                .not_null()
                .default("ACTIVE"),
        )
        .col(ColumnDef::new(Topics::Author).text().not_null())
        .col(ColumnDef::new(Topics::Course).text().not_null())
        .to_owned()
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
    Title,
    Message,
    CreatedAt,
    Status,
    Author,
    Course,
}
