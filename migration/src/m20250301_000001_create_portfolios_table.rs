use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `portfolios` table and its columns.
#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
    TemplateId,
    Hero,
    About,
    Skills,
    Services,
    Projects,
    Testimonials,
    Blog,
    Contact,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portfolios::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Portfolios::TemplateId)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Portfolios::Hero).json_binary().not_null())
                    .col(ColumnDef::new(Portfolios::About).json_binary().not_null())
                    .col(ColumnDef::new(Portfolios::Skills).json_binary().not_null())
                    .col(ColumnDef::new(Portfolios::Services).json_binary().not_null())
                    .col(ColumnDef::new(Portfolios::Projects).json_binary().not_null())
                    .col(
                        ColumnDef::new(Portfolios::Testimonials)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Portfolios::Blog).json_binary().not_null())
                    .col(ColumnDef::new(Portfolios::Contact).json_binary().not_null())
                    .col(
                        ColumnDef::new(Portfolios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Portfolios::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await
    }
}
