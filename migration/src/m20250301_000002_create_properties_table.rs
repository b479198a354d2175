use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `properties` table and its columns.
#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    Name,
    Type,
    Price,
    Location,
    Description,
    Image,
    Coordinates,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Properties::Name).string().not_null())
                    // Apartment | House | Villa | Commercial | Land
                    .col(ColumnDef::new(Properties::Type).string().not_null())
                    .col(ColumnDef::new(Properties::Price).double().not_null())
                    .col(ColumnDef::new(Properties::Location).string().not_null())
                    .col(ColumnDef::new(Properties::Description).text().not_null())
                    .col(ColumnDef::new(Properties::Image).string().not_null())
                    .col(
                        ColumnDef::new(Properties::Coordinates)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing order is newest first.
        manager
            .create_index(
                Index::create()
                    .name("idx_properties_created_at")
                    .table(Properties::Table)
                    .col(Properties::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}
