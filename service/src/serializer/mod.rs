//! Turns loaded records into plain JSON trees.
//!
//! Scientists, planets and missions reference each other in both
//! directions, so a naive walk never ends. Every kind declares default
//! exclusion rules that cut the back-references, callers may add their own
//! [`Exclusions`], and the result is compiled into a [`Plan`] before any
//! data is touched. Planning rejects any shape that would follow the same
//! relationship twice on one path.
//!
//! ```ignore
//! let graph = DbGraph(db);
//! let full = serialize(&graph, &scientist.into(), &Exclusions::none()).await?;
//! let list = serialize_all(
//!     &graph,
//!     EntityKind::Scientist,
//!     scientists,
//!     &Exclusions::scalars_only(EntityKind::Scientist),
//! )
//! .await?;
//! ```

mod graph;
mod render;
mod shape;

pub use graph::{DbGraph, Graph, Record};
pub use shape::{Edge, EntityKind, Exclusions, Plan, ShapeError};

use crate::ServiceResult;
use render::render;
use serde_json::Value;

/// Serialize one record, applying its default rules and `exclusions`.
pub async fn serialize<G>(
    graph: &G,
    record: &Record,
    exclusions: &Exclusions,
) -> ServiceResult<Value>
where
    G: Graph + ?Sized,
{
    let plan = Plan::new(record.kind(), exclusions)?;
    render(graph, record, &plan).await
}

/// Serialize records of one kind into a JSON array sharing a single plan.
pub async fn serialize_all<G, I>(
    graph: &G,
    kind: EntityKind,
    records: I,
    exclusions: &Exclusions,
) -> ServiceResult<Value>
where
    G: Graph + ?Sized,
    I: IntoIterator,
    I::Item: Into<Record>,
{
    let plan = Plan::new(kind, exclusions)?;

    let mut items = Vec::new();
    for record in records.into_iter().map(Into::into) {
        if record.kind() != kind {
            return Err(ShapeError::KindMismatch {
                expected: kind,
                found: record.kind(),
            }
            .into());
        }
        items.push(render(graph, &record, &plan).await?);
    }

    Ok(Value::Array(items))
}
