use crate::validation::{require_text, ValidationErrors};
use sea_orm::{entity::prelude::*, ConnectionTrait};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "scientists")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
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

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::mission::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mission::Relation::Scientist.def().rev())
    }
}

impl ActiveModel {
    /// Check `name` and `field_of_study`.
    pub fn validate(&self, insert: bool) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_text(&mut errors, "name", &self.name, insert);
        require_text(&mut errors, "field_of_study", &self.field_of_study, insert);
        errors.into_result()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.validate(insert)?;
        Ok(self)
    }
}
