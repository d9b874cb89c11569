//! Create player table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Player::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Player::SchoolId).string_len(32).not_null())
                    .col(ColumnDef::new(Player::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Player::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Player::Age).integer().not_null())
                    .col(ColumnDef::new(Player::Sex).string_len(16).not_null())
                    .col(ColumnDef::new(Player::ClassLevel).string_len(8).not_null())
                    .col(ColumnDef::new(Player::LearnerId).string_len(32).not_null())
                    .col(ColumnDef::new(Player::GuardianContact).string_len(32))
                    .col(ColumnDef::new(Player::PhotoKey).string_len(256))
                    .col(ColumnDef::new(Player::PhotoUrl).string_len(1024))
                    .col(
                        ColumnDef::new(Player::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_school")
                            .from(Player::Table, Player::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: school_id (roster lookup)
        manager
            .create_index(
                Index::create()
                    .name("idx_player_school_id")
                    .table(Player::Table)
                    .col(Player::SchoolId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Player {
    Table,
    Id,
    SchoolId,
    Name,
    DateOfBirth,
    Age,
    Sex,
    ClassLevel,
    LearnerId,
    GuardianContact,
    PhotoKey,
    PhotoUrl,
    CreatedAt,
}

#[derive(Iden)]
enum School {
    Table,
    Id,
}
