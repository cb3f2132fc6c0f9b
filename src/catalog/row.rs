//! Row values and the default-fill row builder.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::catalog::table::{ColType, ColumnDef};

/// One cell of an introspection-table row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int64(i64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    Null,
}

impl Value {
    pub fn string(s: impl Into<String>) -> Value {
        Value::String(s.into())
    }

    /// A string value, or SQL NULL when absent.
    pub fn opt_string(s: Option<String>) -> Value {
        match s {
            Some(s) => Value::String(s),
            None => Value::Null,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

pub type Row = Vec<Value>;

/// Keys are the canonical upper-case column-name constants from
/// [`crate::catalog::metadata`].
pub type Overrides = HashMap<&'static str, Value>;

/// Type-appropriate default for a column left out of an override map.
pub fn default_for(coltype: ColType) -> Value {
    match coltype {
        ColType::Text => Value::String(String::new()),
        ColType::BigInt => Value::Int64(0),
        ColType::Boolean => Value::Bool(false),
        ColType::Timestamp => Value::Timestamp(DateTime::<Utc>::UNIX_EPOCH),
    }
}

/// Builds one row for `columns`, in declared order: the override value
/// when one is present for the column, else the type default.
///
/// Override keys must come from the canonical upper-case constant set. A
/// key in lower case means dialect lower-casing leaked into the override
/// map, which would silently miss every lookup; that is a caller defect
/// and aborts.
pub fn row_from_overrides(table_name: &str, columns: &[ColumnDef], overrides: &Overrides) -> Row {
    let mut row = Vec::with_capacity(columns.len());
    for column in columns {
        let lower = column.name.to_ascii_lowercase();
        assert!(
            !overrides.contains_key(lower.as_str()),
            "override key `{}` for {}.{} must use the canonical upper-case constant",
            lower,
            table_name,
            column.name,
        );
        let canonical = column.name.to_ascii_uppercase();
        match overrides.get(canonical.as_str()) {
            Some(value) => row.push(value.clone()),
            None => row.push(default_for(column.coltype)),
        }
    }
    row
}
