use super::{Edge, EntityKind};
use ::entity::{mission, planet, prelude::*, scientist};
use async_trait::async_trait;
use sea_orm::*;
use serde_json::{Map, Value};

/// A loaded row of any entity kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Scientist(scientist::Model),
    Planet(planet::Model),
    Mission(mission::Model),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Scientist(_) => EntityKind::Scientist,
            Self::Planet(_) => EntityKind::Planet,
            Self::Mission(_) => EntityKind::Mission,
        }
    }

    /// The record's own columns as a JSON object
    pub(crate) fn scalars(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let value = match self {
            Self::Scientist(m) => serde_json::to_value(m)?,
            Self::Planet(m) => serde_json::to_value(m)?,
            Self::Mission(m) => serde_json::to_value(m)?,
        };
        Ok(match value {
            Value::Object(map) => map,
            _ => Map::new(),
        })
    }
}

impl From<scientist::Model> for Record {
    fn from(model: scientist::Model) -> Self {
        Self::Scientist(model)
    }
}

impl From<planet::Model> for Record {
    fn from(model: planet::Model) -> Self {
        Self::Planet(model)
    }
}

impl From<mission::Model> for Record {
    fn from(model: mission::Model) -> Self {
        Self::Mission(model)
    }
}

/// Source of related records for the serializer
#[async_trait]
pub trait Graph: Sync {
    /// Records reachable from `record` through `edge`. A one-valued edge
    /// yields at most one record.
    async fn follow(&self, record: &Record, edge: Edge) -> Result<Vec<Record>, DbErr>;
}

/// [`Graph`] backed by a database connection or transaction
#[derive(Debug)]
pub struct DbGraph<'a, C>(pub &'a C);

#[async_trait]
impl<C> Graph for DbGraph<'_, C>
where
    C: ConnectionTrait + Sync,
{
    async fn follow(&self, record: &Record, edge: Edge) -> Result<Vec<Record>, DbErr> {
        let db = self.0;
        let related = match (record, edge) {
            (Record::Scientist(m), Edge::ScientistMissions) => into_records(
                m.find_related(Mission)
                    .order_by_asc(mission::Column::Id)
                    .all(db)
                    .await?,
            ),
            (Record::Scientist(m), Edge::ScientistPlanets) => into_records(
                m.find_related(Planet)
                    .distinct()
                    .order_by_asc(planet::Column::Id)
                    .all(db)
                    .await?,
            ),
            (Record::Planet(m), Edge::PlanetMissions) => into_records(
                m.find_related(Mission)
                    .order_by_asc(mission::Column::Id)
                    .all(db)
                    .await?,
            ),
            (Record::Planet(m), Edge::PlanetScientists) => into_records(
                m.find_related(Scientist)
                    .distinct()
                    .order_by_asc(scientist::Column::Id)
                    .all(db)
                    .await?,
            ),
            (Record::Mission(m), Edge::MissionScientist) => {
                into_records(m.find_related(Scientist).one(db).await?)
            }
            (Record::Mission(m), Edge::MissionPlanet) => {
                into_records(m.find_related(Planet).one(db).await?)
            }
            (record, edge) => {
                return Err(DbErr::Custom(format!(
                    "{} has no relation `{}`",
                    record.kind(),
                    edge.field()
                )));
            }
        };
        Ok(related)
    }
}

fn into_records<I>(models: I) -> Vec<Record>
where
    I: IntoIterator,
    I::Item: Into<Record>,
{
    models.into_iter().map(Into::into).collect()
}
