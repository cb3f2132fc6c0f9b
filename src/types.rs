//! Scalar column types and their declarative text rendering.

use serde::{Deserialize, Serialize};

/// Column type of a user table, view output column or index key column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    Bool,
    Int64,
    Float64,
    String,
    Bytes,
    Timestamp,
    Date,
    Array(Box<ScalarType>),
}

impl ScalarType {
    pub fn is_array(&self) -> bool {
        matches!(self, ScalarType::Array(_))
    }

    /// Renders the declarative type text, e.g. `STRING(42)`, `STRING(MAX)`,
    /// `ARRAY<INT64>`. Sized types without a declared length render as MAX.
    pub fn render(&self, declared_max_length: Option<i64>) -> String {
        match self {
            ScalarType::Bool => "BOOL".to_string(),
            ScalarType::Int64 => "INT64".to_string(),
            ScalarType::Float64 => "FLOAT64".to_string(),
            ScalarType::Timestamp => "TIMESTAMP".to_string(),
            ScalarType::Date => "DATE".to_string(),
            ScalarType::String => match declared_max_length {
                Some(n) => format!("STRING({})", n),
                None => "STRING(MAX)".to_string(),
            },
            ScalarType::Bytes => match declared_max_length {
                Some(n) => format!("BYTES({})", n),
                None => "BYTES(MAX)".to_string(),
            },
            ScalarType::Array(elem) => format!("ARRAY<{}>", elem.render(declared_max_length)),
        }
    }
}
