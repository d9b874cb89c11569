//! Create school table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(School::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(School::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(School::AccountId).string_len(32).not_null())
                    .col(ColumnDef::new(School::Name).string_len(256).not_null())
                    .col(ColumnDef::new(School::CentreNumber).string_len(32))
                    .col(ColumnDef::new(School::Email).string_len(256))
                    .col(ColumnDef::new(School::OfficeContact).string_len(32).not_null())
                    .col(ColumnDef::new(School::Region).string_len(32).not_null())
                    .col(ColumnDef::new(School::District).string_len(64).not_null())
                    .col(ColumnDef::new(School::BadgeKey).string_len(256))
                    .col(ColumnDef::new(School::BadgeUrl).string_len(1024))
                    .col(ColumnDef::new(School::AdminName).string_len(256).not_null())
                    .col(ColumnDef::new(School::AdminNin).string_len(32))
                    .col(ColumnDef::new(School::AdminContact).string_len(32).not_null())
                    .col(ColumnDef::new(School::AdminEmail).string_len(256).not_null())
                    .col(ColumnDef::new(School::AdminRole).string_len(64).not_null())
                    .col(ColumnDef::new(School::AdminEducation).string_len(64).not_null())
                    .col(ColumnDef::new(School::AdminPhotoKey).string_len(256))
                    .col(ColumnDef::new(School::AdminPhotoUrl).string_len(1024))
                    .col(
                        ColumnDef::new(School::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(School::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: account_id (owner lookup; deliberately not unique)
        manager
            .create_index(
                Index::create()
                    .name("idx_school_account_id")
                    .table(School::Table)
                    .col(School::AccountId)
                    .to_owned(),
            )
            .await?;

        // Index: created_at
        manager
            .create_index(
                Index::create()
                    .name("idx_school_created_at")
                    .table(School::Table)
                    .col(School::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(School::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum School {
    Table,
    Id,
    AccountId,
    Name,
    CentreNumber,
    Email,
    OfficeContact,
    Region,
    District,
    BadgeKey,
    BadgeUrl,
    AdminName,
    AdminNin,
    AdminContact,
    AdminEmail,
    AdminRole,
    AdminEducation,
    AdminPhotoKey,
    AdminPhotoUrl,
    Status,
    CreatedAt,
}
