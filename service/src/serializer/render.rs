use super::{Graph, Plan, Record};
use crate::ServiceResult;
use futures_util::future::{BoxFuture, FutureExt};
use serde_json::Value;

/// Walk `record` along `plan`, following only the edges the plan keeps.
pub(crate) fn render<'a, G>(
    graph: &'a G,
    record: &'a Record,
    plan: &'a Plan,
) -> BoxFuture<'a, ServiceResult<Value>>
where
    G: Graph + ?Sized,
{
    async move {
        let mut object = record.scalars()?;

        for (edge, nested) in plan.relations() {
            let related = graph.follow(record, *edge).await?;
            let value = if edge.is_many() {
                let mut items = Vec::with_capacity(related.len());
                for r in &related {
                    items.push(render(graph, r, nested).await?);
                }
                Value::Array(items)
            } else {
                match related.first() {
                    Some(r) => render(graph, r, nested).await?,
                    None => Value::Null,
                }
            };
            object.insert(edge.field().to_owned(), value);
        }

        Ok(Value::Object(object))
    }
    .boxed()
}
