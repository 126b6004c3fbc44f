use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Starship::Table)
                    .if_not_exists()
                    .col(pk_auto(Starship::Id))
                    .col(string(Starship::Name))
                    .col(string_null(Starship::Model))
                    .col(string_null(Starship::Manufacturer))
                    .col(string_null(Starship::StarshipClass))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Starship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Starship {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    StarshipClass,
}
