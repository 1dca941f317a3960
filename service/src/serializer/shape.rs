use std::fmt;
use thiserror::Error;

/// The three persisted record types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum EntityKind {
    Scientist,
    Planet,
    Mission,
}

/// A relationship that may be followed while serializing a record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    ScientistMissions,
    /// Virtual, via missions
    ScientistPlanets,
    PlanetMissions,
    /// Virtual, via missions
    PlanetScientists,
    MissionScientist,
    MissionPlanet,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [Self::Scientist, Self::Planet, Self::Mission];

    pub const fn edges(self) -> &'static [Edge] {
        match self {
            Self::Scientist => &[Edge::ScientistMissions, Edge::ScientistPlanets],
            Self::Planet => &[Edge::PlanetMissions, Edge::PlanetScientists],
            Self::Mission => &[Edge::MissionScientist, Edge::MissionPlanet],
        }
    }

    /// Relation paths that are never serialized below a record of this kind.
    /// Each one cuts a back-reference to the record it starts from.
    pub const fn default_rules(self) -> &'static [&'static str] {
        match self {
            Self::Scientist => &[
                "missions.scientist",
                "planets.scientists",
                "planets.missions",
            ],
            Self::Planet => &[
                "missions.planet",
                "scientists.planets",
                "scientists.missions",
            ],
            Self::Mission => &[
                "scientist.missions",
                "scientist.planets",
                "planet.missions",
                "planet.scientists",
            ],
        }
    }

    pub fn edge(self, field: &str) -> Option<Edge> {
        self.edges().iter().copied().find(|e| e.field() == field)
    }
}

impl Edge {
    pub const fn source(self) -> EntityKind {
        match self {
            Self::ScientistMissions | Self::ScientistPlanets => EntityKind::Scientist,
            Self::PlanetMissions | Self::PlanetScientists => EntityKind::Planet,
            Self::MissionScientist | Self::MissionPlanet => EntityKind::Mission,
        }
    }

    pub const fn target(self) -> EntityKind {
        match self {
            Self::ScientistMissions | Self::PlanetMissions => EntityKind::Mission,
            Self::ScientistPlanets | Self::MissionPlanet => EntityKind::Planet,
            Self::PlanetScientists | Self::MissionScientist => EntityKind::Scientist,
        }
    }

    /// Key under which the related records appear
    pub const fn field(self) -> &'static str {
        match self {
            Self::ScientistMissions | Self::PlanetMissions => "missions",
            Self::ScientistPlanets => "planets",
            Self::PlanetScientists => "scientists",
            Self::MissionScientist => "scientist",
            Self::MissionPlanet => "planet",
        }
    }

    pub const fn is_many(self) -> bool {
        !matches!(self, Self::MissionScientist | Self::MissionPlanet)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("{kind} has no relation `{field}`")]
    UnknownRelation { kind: EntityKind, field: String },
    #[error("serializing {root} would loop through `{path}`")]
    Cycle { root: EntityKind, path: String },
    #[error("expected a {expected} record, got a {found}")]
    KindMismatch {
        expected: EntityKind,
        found: EntityKind,
    },
}

/// Extra relation paths to leave out for one call, on top of the defaults.
///
/// A single segment such as `"missions"` drops that relation entirely; a
/// dotted path such as `"missions.planet"` drops it below the named one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exclusions(Vec<String>);

impl Exclusions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn exclude(mut self, path: impl Into<String>) -> Self {
        self.0.push(path.into());
        self
    }

    /// Leave out every relation of `kind`, keeping only its columns.
    pub fn scalars_only(kind: EntityKind) -> Self {
        Self(kind.edges().iter().map(|e| e.field().to_owned()).collect())
    }

    fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<const N: usize> From<[&str; N]> for Exclusions {
    fn from(paths: [&str; N]) -> Self {
        Self(paths.iter().map(|p| (*p).to_owned()).collect())
    }
}

/// The shape of a serialized tree, derived from the schema alone.
///
/// Building a plan either yields a finite tree or fails: no path in a plan
/// follows the same [`Edge`] twice, so its depth never exceeds the number of
/// edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    kind: EntityKind,
    relations: Vec<(Edge, Plan)>,
}

type Rules = fn(EntityKind) -> &'static [&'static str];

impl Plan {
    pub fn new(kind: EntityKind, exclusions: &Exclusions) -> Result<Self, ShapeError> {
        Self::with_rules(kind, exclusions, EntityKind::default_rules)
    }

    /// Check that every kind serializes to a finite tree under its default
    /// rules alone.
    pub fn verify_defaults() -> Result<(), ShapeError> {
        for kind in EntityKind::ALL {
            Self::new(kind, &Exclusions::none())?;
        }
        Ok(())
    }

    fn with_rules(
        kind: EntityKind,
        exclusions: &Exclusions,
        rules: Rules,
    ) -> Result<Self, ShapeError> {
        let pending = exclusions.paths().map(split).collect();
        build(kind, pending, rules, &mut Vec::new())
    }

    pub fn relations(&self) -> &[(Edge, Plan)] {
        &self.relations
    }

    pub fn depth(&self) -> usize {
        self.relations
            .iter()
            .map(|(_, nested)| nested.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

fn split(path: &str) -> Vec<&str> {
    path.split('.').collect()
}

fn build<'a>(
    kind: EntityKind,
    inherited: Vec<Vec<&'a str>>,
    rules: Rules,
    trail: &mut Vec<Edge>,
) -> Result<Plan, ShapeError> {
    let mut pending = inherited;
    pending.extend(rules(kind).iter().copied().map(split));

    for rule in &pending {
        if kind.edge(rule[0]).is_none() {
            return Err(ShapeError::UnknownRelation {
                kind,
                field: rule[0].to_owned(),
            });
        }
    }

    let mut relations = Vec::new();
    for &edge in kind.edges() {
        let field = edge.field();
        if pending.iter().any(|r| r.len() == 1 && r[0] == field) {
            continue;
        }
        if trail.contains(&edge) {
            return Err(cycle(trail, edge));
        }

        let nested = pending
            .iter()
            .filter(|r| r.len() > 1 && r[0] == field)
            .map(|r| r[1..].to_vec())
            .collect();

        trail.push(edge);
        let plan = build(edge.target(), nested, rules, trail)?;
        trail.pop();

        relations.push((edge, plan));
    }

    Ok(Plan { kind, relations })
}

fn cycle(trail: &[Edge], edge: Edge) -> ShapeError {
    let root = trail.first().copied().unwrap_or(edge).source();
    let path = trail
        .iter()
        .chain(std::iter::once(&edge))
        .map(|e| e.field())
        .collect::<Vec<_>>()
        .join(".");
    ShapeError::Cycle { root, path }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.relations.is_empty() {
            f.write_str(" {")?;
            for (i, (edge, nested)) in self.relations.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, " {}: {}", edge.field(), nested)?;
            }
            f.write_str(" }")?;
        }
        Ok(())
    }
}
