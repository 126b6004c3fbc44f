use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000001_create_user_table::User;
use super::m20250101_000002_create_planet_table::Planet;
use super::m20250101_000003_create_character_table::Character;
use super::m20250101_000004_create_starship_table::Starship;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer_null(Favorite::PlanetId))
                    .col(integer_null(Favorite::CharacterId))
                    .col(integer_null(Favorite::StarshipId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_user_id")
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planet_id")
                            .from(Favorite::Table, Favorite::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_character_id")
                            .from(Favorite::Table, Favorite::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_starship_id")
                            .from(Favorite::Table, Favorite::StarshipId)
                            .to(Starship::Table, Starship::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // NULLs compare distinct, so each index only binds rows of its own kind
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_favorite_user_planet_unique")
                            .col(Favorite::UserId)
                            .col(Favorite::PlanetId),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_favorite_user_character_unique")
                            .col(Favorite::UserId)
                            .col(Favorite::CharacterId),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_favorite_user_starship_unique")
                            .col(Favorite::UserId)
                            .col(Favorite::StarshipId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    PlanetId,
    CharacterId,
    StarshipId,
}
