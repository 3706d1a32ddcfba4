//! Migration: Create instructors table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Instructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Instructors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Instructors::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Instructors::Age).integer().not_null())
                    .col(
                        ColumnDef::new(Instructors::Cpf)
                            .string_len(11)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Instructors::Contact).string_len(11).not_null())
                    .col(ColumnDef::new(Instructors::Campus).string_len(100).not_null())
                    .col(ColumnDef::new(Instructors::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Instructors::Salary).double().not_null())
                    .col(
                        ColumnDef::new(Instructors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Instructors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_instructors_name")
                    .table(Instructors::Table)
                    .col(Instructors::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Instructors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Instructors {
    Table,
    Id,
    Name,
    Age,
    Cpf,
    Contact,
    Campus,
    Title,
    Salary,
    CreatedAt,
    UpdatedAt,
}
