use async_trait::async_trait;
use entity::{mission, planet, scientist};
use mission_control_service::{
    sea_orm::DbErr,
    serializer::{serialize, serialize_all, Edge, Exclusions, Graph, Record, ShapeError},
    EntityKind, ServiceError,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Graph held entirely in memory, counting every relation it is asked to
/// follow.
#[derive(Default)]
struct MemoryGraph {
    scientists: Vec<scientist::Model>,
    planets: Vec<planet::Model>,
    missions: Vec<mission::Model>,
    follows: AtomicUsize,
}

impl MemoryGraph {
    fn follows(&self) -> usize {
        self.follows.load(Ordering::SeqCst)
    }

    fn missions_where(&self, pred: impl Fn(&mission::Model) -> bool) -> Vec<&mission::Model> {
        self.missions.iter().filter(|m| pred(*m)).collect()
    }

    fn scientist(&self, id: i32) -> Option<Record> {
        self.scientists
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .map(Record::from)
    }

    fn planet(&self, id: i32) -> Option<Record> {
        self.planets
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .map(Record::from)
    }
}

#[async_trait]
impl Graph for MemoryGraph {
    async fn follow(&self, record: &Record, edge: Edge) -> Result<Vec<Record>, DbErr> {
        self.follows.fetch_add(1, Ordering::SeqCst);

        let mut related: Vec<Record> = match (record, edge) {
            (Record::Scientist(s), Edge::ScientistMissions) => self
                .missions_where(|m| m.scientist_id == s.id)
                .into_iter()
                .cloned()
                .map(Record::from)
                .collect(),
            (Record::Scientist(s), Edge::ScientistPlanets) => self
                .missions_where(|m| m.scientist_id == s.id)
                .into_iter()
                .filter_map(|m| self.planet(m.planet_id))
                .collect(),
            (Record::Planet(p), Edge::PlanetMissions) => self
                .missions_where(|m| m.planet_id == p.id)
                .into_iter()
                .cloned()
                .map(Record::from)
                .collect(),
            (Record::Planet(p), Edge::PlanetScientists) => self
                .missions_where(|m| m.planet_id == p.id)
                .into_iter()
                .filter_map(|m| self.scientist(m.scientist_id))
                .collect(),
            (Record::Mission(m), Edge::MissionScientist) => {
                self.scientist(m.scientist_id).into_iter().collect()
            }
            (Record::Mission(m), Edge::MissionPlanet) => {
                self.planet(m.planet_id).into_iter().collect()
            }
            _ => return Err(DbErr::Custom(format!("bad edge {edge:?}"))),
        };
        related.dedup();
        Ok(related)
    }
}

fn fixture() -> MemoryGraph {
    MemoryGraph {
        scientists: vec![
            scientist::Model {
                id: 1,
                name: "Ada".to_owned(),
                field_of_study: "Computing".to_owned(),
            },
            scientist::Model {
                id: 2,
                name: "Carl".to_owned(),
                field_of_study: "Astronomy".to_owned(),
            },
        ],
        planets: vec![planet::Model {
            id: 1,
            name: "Mars".to_owned(),
            distance_from_earth: 140,
            nearest_star: "Sun".to_owned(),
        }],
        missions: vec![
            mission::Model {
                id: 1,
                name: "Rover".to_owned(),
                scientist_id: 1,
                planet_id: 1,
            },
            mission::Model {
                id: 2,
                name: "Probe".to_owned(),
                scientist_id: 2,
                planet_id: 1,
            },
        ],
        ..Default::default()
    }
}

#[tokio::test]
async fn mission_includes_both_ends_without_their_lists() {
    let graph = fixture();
    let mission: Record = graph.missions[0].clone().into();

    let body = serialize(&graph, &mission, &Exclusions::none())
        .await
        .unwrap();

    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Rover",
            "scientist_id": 1,
            "planet_id": 1,
            "scientist": {"id": 1, "name": "Ada", "field_of_study": "Computing"},
            "planet": {"id": 1, "name": "Mars", "distance_from_earth": 140, "nearest_star": "Sun"},
        })
    );
    assert_eq!(graph.follows(), 2);
}

#[tokio::test]
async fn planet_tree_never_walks_back() {
    let graph = fixture();
    let mars: Record = graph.planets[0].clone().into();

    let body = serialize(&graph, &mars, &Exclusions::none()).await.unwrap();

    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Mars",
            "distance_from_earth": 140,
            "nearest_star": "Sun",
            "missions": [
                {
                    "id": 1, "name": "Rover", "scientist_id": 1, "planet_id": 1,
                    "scientist": {"id": 1, "name": "Ada", "field_of_study": "Computing"},
                },
                {
                    "id": 2, "name": "Probe", "scientist_id": 2, "planet_id": 1,
                    "scientist": {"id": 2, "name": "Carl", "field_of_study": "Astronomy"},
                },
            ],
            "scientists": [
                {"id": 1, "name": "Ada", "field_of_study": "Computing"},
                {"id": 2, "name": "Carl", "field_of_study": "Astronomy"},
            ],
        })
    );
    // missions, scientist of each mission, scientists
    assert_eq!(graph.follows(), 1 + 2 + 1);
}

#[tokio::test]
async fn list_of_scalars_follows_nothing() {
    let graph = fixture();

    let body = serialize_all(
        &graph,
        EntityKind::Scientist,
        graph.scientists.clone(),
        &Exclusions::scalars_only(EntityKind::Scientist),
    )
    .await
    .unwrap();

    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Ada", "field_of_study": "Computing"},
            {"id": 2, "name": "Carl", "field_of_study": "Astronomy"},
        ])
    );
    assert_eq!(graph.follows(), 0);
}

#[tokio::test]
async fn empty_list() {
    let graph = MemoryGraph::default();
    let body = serialize_all(
        &graph,
        EntityKind::Planet,
        Vec::<planet::Model>::new(),
        &Exclusions::none(),
    )
    .await
    .unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn missing_one_end_is_null() {
    let mut graph = fixture();
    graph.planets.clear();
    let mission: Record = graph.missions[0].clone().into();

    let body = serialize(&graph, &mission, &Exclusions::from(["scientist"]))
        .await
        .unwrap();

    assert_eq!(
        body,
        json!({"id": 1, "name": "Rover", "scientist_id": 1, "planet_id": 1, "planet": null})
    );
}

#[tokio::test]
async fn mixed_kinds_are_rejected() {
    let graph = fixture();
    let records: Vec<Record> = vec![
        graph.scientists[0].clone().into(),
        graph.planets[0].clone().into(),
    ];

    let err = serialize_all(&graph, EntityKind::Scientist, records, &Exclusions::none())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Shape(ShapeError::KindMismatch {
            expected: EntityKind::Scientist,
            found: EntityKind::Planet,
        })
    ));
}

#[tokio::test]
async fn unknown_exclusion_is_reported_before_any_lookup() {
    let graph = fixture();
    let ada: Record = graph.scientists[0].clone().into();

    let err = serialize(&graph, &ada, &Exclusions::from(["missions.scientists"]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Shape(ShapeError::UnknownRelation {
            kind: EntityKind::Mission,
            ..
        })
    ));
    assert_eq!(graph.follows(), 0);
}
