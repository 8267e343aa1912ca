use crate::{
    types::{Decimal, Timestamp},
    value::Value,
};
use standin_primitives::{ColumnType, DefaultCoercion};
use thiserror::Error as ThisError;

///
/// CoercionError
///
/// A raw default that does not parse as its column type. The resolver
/// treats this as "no default", never as a fault.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("cannot coerce default '{raw}' to {ty}: {reason}")]
pub struct CoercionError {
    pub ty: ColumnType,
    pub raw: String,
    pub reason: String,
}

impl CoercionError {
    fn new(ty: ColumnType, raw: &str, reason: impl ToString) -> Self {
        Self {
            ty,
            raw: raw.to_string(),
            reason: reason.to_string(),
        }
    }
}

///
/// Convert a column's raw default into a typed value.
///
/// Booleans map only the literals `true` and `false`; anything else is an
/// absent value rather than an error. Types without a coercion return the
/// raw text unchanged.
///
pub fn coerce_default(ty: ColumnType, raw: &str) -> Result<Value, CoercionError> {
    match ty.coercion() {
        DefaultCoercion::Integer => raw
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| CoercionError::new(ty, raw, e)),

        DefaultCoercion::Float => raw
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| CoercionError::new(ty, raw, e)),

        DefaultCoercion::Decimal => Decimal::parse_default(raw)
            .map(Value::Decimal)
            .ok_or_else(|| CoercionError::new(ty, raw, "not a decimal")),

        DefaultCoercion::DateTime => Timestamp::parse_flexible(raw)
            .map(Value::Timestamp)
            .map_err(|e| CoercionError::new(ty, raw, e)),

        DefaultCoercion::Boolean => Ok(match raw {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::Null,
        }),

        DefaultCoercion::Verbatim => Ok(Value::Text(raw.to_string())),
    }
}
