use serde::{Deserialize, Deserializer};

/// Fields accepted when creating a scientist. Absent fields are rejected by
/// the entity validators, not by deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ScientistForm {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

/// The fields of a scientist that may be patched.
///
/// `None` leaves the column untouched, `Some(None)` is an explicit `null` and
/// is assigned as an empty value so that it fails validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScientistPatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub field_of_study: Option<Option<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PlanetForm {
    pub name: String,
    pub distance_from_earth: i32,
    pub nearest_star: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MissionForm {
    pub name: Option<String>,
    pub scientist_id: Option<i32>,
    pub planet_id: Option<i32>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
