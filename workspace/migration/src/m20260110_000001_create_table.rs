use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Email).unique_key())
                    .col(string(Users::FirstName))
                    .col(string(Users::LastName))
                    .col(string(Users::PasswordHash))
                    .col(string_len(Users::Permission, 16))
                    .to_owned(),
            )
            .await?;

        // Create projects table
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(string(Projects::Name))
                    .col(string(Projects::PartNumberPrefix))
                    .to_owned(),
            )
            .await?;

        // Create parts table
        manager
            .create_table(
                Table::create()
                    .table(Parts::Table)
                    .if_not_exists()
                    .col(pk_auto(Parts::Id))
                    .col(integer(Parts::ProjectId))
                    .col(integer_null(Parts::ParentPartId))
                    .col(string_len(Parts::PartType, 16))
                    .col(integer(Parts::Number))
                    .col(string(Parts::Name))
                    .col(string_len(Parts::Status, 20))
                    .col(string_null(Parts::Notes))
                    .col(string_null(Parts::SourceMaterial))
                    .col(boolean(Parts::HaveMaterial).default(false))
                    .col(string_null(Parts::CutLength))
                    .col(string_null(Parts::Quantity))
                    .col(boolean(Parts::DrawingCreated).default(false))
                    .col(integer(Parts::Priority).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_part_project")
                            .from(Parts::Table, Parts::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_part_parent")
                            .from(Parts::Table, Parts::ParentPartId)
                            .to(Parts::Table, Parts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(Parts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    PasswordHash,
    Permission,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Name,
    PartNumberPrefix,
}

#[derive(DeriveIden)]
enum Parts {
    Table,
    Id,
    ProjectId,
    ParentPartId,
    PartType,
    Number,
    Name,
    Status,
    Notes,
    SourceMaterial,
    HaveMaterial,
    CutLength,
    Quantity,
    DrawingCreated,
    Priority,
}
