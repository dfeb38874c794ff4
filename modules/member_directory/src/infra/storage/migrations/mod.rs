//! Database migrations for member directory

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_members::Migration)]
    }
}

mod m20250101_000001_create_members {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Members::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Members::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Members::IdNumber).string().not_null())
                        .col(ColumnDef::new(Members::FullName).string().not_null())
                        .col(ColumnDef::new(Members::FullNameSearch).string().not_null())
                        .col(ColumnDef::new(Members::PhoneNumber).string().not_null())
                        .col(ColumnDef::new(Members::Email).string().not_null())
                        .col(ColumnDef::new(Members::Department).string().not_null())
                        .col(ColumnDef::new(Members::DateOfBirth).date().not_null())
                        .col(ColumnDef::new(Members::StateOfOrigin).string().not_null())
                        .col(ColumnDef::new(Members::Interests).text().not_null())
                        .col(ColumnDef::new(Members::Hobbies).text().not_null())
                        .col(
                            ColumnDef::new(Members::BestEngineeringQuote)
                                .text()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Members::SubmittedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            // Lookup by ID number (not unique)
            manager
                .create_index(
                    Index::create()
                        .name("idx_members_id_number")
                        .table(Members::Table)
                        .col(Members::IdNumber)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_members_department")
                        .table(Members::Table)
                        .col(Members::Department)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Members::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Members {
        Table,
        Id,
        IdNumber,
        FullName,
        FullNameSearch,
        PhoneNumber,
        Email,
        Department,
        DateOfBirth,
        StateOfOrigin,
        Interests,
        Hobbies,
        BestEngineeringQuote,
        SubmittedAt,
    }
}
