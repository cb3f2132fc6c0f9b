//! Output dialect of the synthesized catalog.
//!
//! Every dialect-sensitive decision the row synthesizers make goes
//! through this adapter: identifier casing, the user schema's name, the
//! option-type phrasing, and the Postgres numeric precision columns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::row::Value;
use crate::types::ScalarType;

const FLOAT64_NUMERIC_PRECISION: i64 = 53;
const INT64_NUMERIC_PRECISION: i64 = 64;
const NUMERIC_PRECISION_RADIX: i64 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Upper-case introspection identifiers, unnamed user schema.
    #[default]
    Native,
    /// Lower-case introspection identifiers, `public` user schema.
    Postgres,
}

impl Dialect {
    /// The single choke point for emitting introspection identifiers.
    /// Identifiers are defined in their upper-case canonical form; the
    /// Postgres convention lower-cases them. Idempotent and total.
    pub fn name_for_dialect(&self, identifier: &str) -> String {
        match self {
            Dialect::Native => identifier.to_string(),
            Dialect::Postgres => identifier.to_ascii_lowercase(),
        }
    }

    /// Name of the unnamed default schema user entities live in.
    pub fn user_schema_name(&self) -> &'static str {
        match self {
            Dialect::Native => "",
            Dialect::Postgres => "public",
        }
    }

    /// Type text reported for database options.
    pub fn option_type_name(&self) -> &'static str {
        match self {
            Dialect::Native => "STRING",
            Dialect::Postgres => "character varying",
        }
    }

    /// Value of the `database_dialect` database option.
    pub fn option_value(&self) -> &'static str {
        match self {
            Dialect::Native => "NATIVE",
            Dialect::Postgres => "POSTGRESQL",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dialect::Native => "native",
            Dialect::Postgres => "postgres",
        })
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(Dialect::Native),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            other => Err(format!("unknown dialect `{}`", other)),
        }
    }
}

/// NUMERIC_PRECISION for the Postgres COLUMNS rows: bit width of the
/// floating point mantissa or of the integer type, null for everything
/// else.
pub fn pg_numeric_precision(ty: &ScalarType) -> Value {
    match ty {
        ScalarType::Float64 => Value::Int64(FLOAT64_NUMERIC_PRECISION),
        ScalarType::Int64 => Value::Int64(INT64_NUMERIC_PRECISION),
        _ => Value::Null,
    }
}

/// NUMERIC_PRECISION_RADIX for the Postgres COLUMNS rows.
pub fn pg_numeric_precision_radix(ty: &ScalarType) -> Value {
    match ty {
        ScalarType::Float64 | ScalarType::Int64 => Value::Int64(NUMERIC_PRECISION_RADIX),
        _ => Value::Null,
    }
}

/// NUMERIC_SCALE for the Postgres COLUMNS rows: integers are exact.
pub fn pg_numeric_scale(ty: &ScalarType) -> Value {
    match ty {
        ScalarType::Int64 => Value::Int64(0),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casing_is_idempotent() {
        let d = Dialect::Postgres;
        let once = d.name_for_dialect("TABLE_NAME");
        assert_eq!(once, "table_name");
        assert_eq!(d.name_for_dialect(&once), once);
        assert_eq!(Dialect::Native.name_for_dialect("TABLE_NAME"), "TABLE_NAME");
    }

    #[test]
    fn schema_and_option_values_differ_per_dialect() {
        assert_eq!(Dialect::Native.user_schema_name(), "");
        assert_eq!(Dialect::Postgres.user_schema_name(), "public");
        assert_eq!(Dialect::Native.option_type_name(), "STRING");
        assert_eq!(Dialect::Postgres.option_type_name(), "character varying");
    }

    #[test]
    fn numeric_precision_rules() {
        assert_eq!(pg_numeric_precision(&ScalarType::Float64), Value::Int64(53));
        assert_eq!(pg_numeric_precision(&ScalarType::Int64), Value::Int64(64));
        assert_eq!(pg_numeric_precision(&ScalarType::String), Value::Null);
        assert_eq!(pg_numeric_precision_radix(&ScalarType::Int64), Value::Int64(2));
        assert_eq!(pg_numeric_scale(&ScalarType::Int64), Value::Int64(0));
        assert_eq!(pg_numeric_scale(&ScalarType::Float64), Value::Null);
    }

    #[test]
    fn parses_from_config_text() {
        assert_eq!("native".parse::<Dialect>().unwrap(), Dialect::Native);
        assert_eq!("POSTGRESQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert!("mysql".parse::<Dialect>().is_err());
    }
}
