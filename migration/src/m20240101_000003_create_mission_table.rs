use crate::m20240101_000001_create_scientist_table::Scientist;
use crate::m20240101_000002_create_planet_table::Planet;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mission::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Mission::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Mission::Name).string().not_null())
                    .col(ColumnDef::new(Mission::ScientistId).integer().not_null())
                    .col(ColumnDef::new(Mission::PlanetId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_missions_scientist_id_scientists")
                            .from(Mission::Table, Mission::ScientistId)
                            .to(Scientist::Table, Scientist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_missions_planet_id_planets")
                            .from(Mission::Table, Mission::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Mission {
    #[sea_orm(iden = "missions")]
    Table,
    Id,
    Name,
    ScientistId,
    PlanetId,
}
