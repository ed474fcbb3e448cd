use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Students::BirthYear).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // by-year statistics group on this column
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_birth_year")
                    .table(Students::Table)
                    .col(Students::BirthYear)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_students_birth_year")
                    .table(Students::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    Name,
    BirthYear,
}
