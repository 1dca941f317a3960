mod error;
mod form;
mod mutation;
mod query;
pub mod serializer;

pub use error::{ServiceError, ServiceResult};
pub use form::*;
pub use mutation::*;
pub use query::*;
pub use serializer::EntityKind;

pub use sea_orm;
