//! Create the `employees` table.
//!
//! Seven free-text columns; `id` is the primary key and deletion lookup key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(string(Employees::Id).primary_key())
                    .col(string(Employees::Code))
                    .col(string(Employees::Email))
                    .col(string(Employees::FirstName))
                    .col(string(Employees::LastName))
                    .col(string(Employees::Status))
                    .col(string(Employees::LastLogin))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employees::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employees { Table, Id, Code, Email, FirstName, LastName, Status, LastLogin }
