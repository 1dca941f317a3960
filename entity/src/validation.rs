//! Field validators shared by the entity `ActiveModel`s.
//!
//! A guarded field is checked whenever it is assigned. On insert a guarded
//! field that was never assigned is also a failure.

use sea_orm::{ActiveValue, DbErr};
use thiserror::Error;

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    /// Column name of the rejected field
    pub field: &'static str,
    /// Why the value was rejected
    pub reason: &'static str,
}

/// Every field rejected by one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", joined(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when nothing was rejected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|e| e.field)
    }
}

fn joined(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationErrors> for DbErr {
    fn from(errors: ValidationErrors) -> Self {
        DbErr::Custom(format!("[before_save] {errors}"))
    }
}

const EMPTY: &str = "cannot be empty";
const MISSING: &str = "is required";
const NOT_POSITIVE: &str = "must be a positive id";

/// A guarded text column must be a non-empty string.
pub fn require_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &ActiveValue<String>,
    insert: bool,
) {
    match value {
        ActiveValue::Set(v) if v.is_empty() => errors.push(ValidationError {
            field,
            reason: EMPTY,
        }),
        ActiveValue::NotSet if insert => errors.push(ValidationError {
            field,
            reason: MISSING,
        }),
        _ => {}
    }
}

/// A guarded foreign key must be present and strictly positive.
pub fn require_id(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &ActiveValue<i32>,
    insert: bool,
) {
    match value {
        ActiveValue::Set(v) if *v <= 0 => errors.push(ValidationError {
            field,
            reason: NOT_POSITIVE,
        }),
        ActiveValue::NotSet if insert => errors.push(ValidationError {
            field,
            reason: MISSING,
        }),
        _ => {}
    }
}

/// `Set` when the caller provided a value, `NotSet` otherwise.
pub fn assign<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    match value {
        Some(v) => ActiveValue::Set(v),
        None => ActiveValue::NotSet,
    }
}
