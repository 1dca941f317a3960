use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,
    pub name: String,
    pub distance_from_earth: i32,
    pub nearest_star: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mission::Entity")]
    Mission,
}

impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

impl Related<super::scientist::Entity> for Entity {
    fn to() -> RelationDef {
        super::mission::Relation::Scientist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mission::Relation::Planet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
