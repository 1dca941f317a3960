use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scientist::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scientist::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Scientist::Name).string().not_null())
                    .col(ColumnDef::new(Scientist::FieldOfStudy).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scientist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Scientist {
    #[sea_orm(iden = "scientists")]
    Table,
    Id,
    Name,
    FieldOfStudy,
}
