//! Typed introspection tables and the factory that declares them.

use chrono::NaiveDateTime;
use once_cell::sync::OnceCell;
use polars::prelude::{DataFrame, NamedFrom, Series};

use crate::catalog::dialect::Dialect;
use crate::catalog::metadata;
use crate::catalog::row::{Row, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColType {
    Text,
    BigInt,
    Boolean,
    Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Dialect-cased column name as exposed to queries.
    pub name: String,
    pub coltype: ColType,
}

/// Column type carried by a registry type string. Unknown type text is a
/// registry defect and aborts.
pub fn coltype_for_spanner_type(spanner_type: &str) -> ColType {
    match spanner_type {
        "INT64" => ColType::BigInt,
        "BOOL" => ColType::Boolean,
        "TIMESTAMP" => ColType::Timestamp,
        s if s.starts_with("STRING") => ColType::Text,
        other => panic!("registry declares unsupported column type `{}`", other),
    }
}

/// One synthesized introspection table: a fixed, ordered column schema
/// and a row set installed exactly once per catalog build.
#[derive(Debug)]
pub struct InfoTable {
    name: String,
    columns: Vec<ColumnDef>,
    rows: Option<Vec<Row>>,
    frame: OnceCell<DataFrame>,
}

impl InfoTable {
    /// Declares a table whose column list comes from the registry, in
    /// registry order. A table name the registry does not describe is a
    /// programming defect and aborts.
    pub fn from_registry(dialect: Dialect, canonical_name: &'static str) -> InfoTable {
        let entries = metadata::registry_columns(canonical_name)
            .unwrap_or_else(|| panic!("no registry metadata for table {}", canonical_name));
        let columns = entries
            .iter()
            .map(|entry| ColumnDef {
                name: dialect.name_for_dialect(entry.column_name),
                coltype: coltype_for_spanner_type(entry.spanner_type),
            })
            .collect();
        InfoTable {
            name: dialect.name_for_dialect(canonical_name),
            columns,
            rows: None,
            frame: OnceCell::new(),
        }
    }

    /// Declares a table from an explicit column list, for the
    /// relationship tables whose shape is not registry-driven.
    pub fn with_columns(
        dialect: Dialect,
        canonical_name: &'static str,
        columns: &[(&'static str, ColType)],
    ) -> InfoTable {
        let columns = columns
            .iter()
            .map(|(name, coltype)| ColumnDef {
                name: dialect.name_for_dialect(name),
                coltype: *coltype,
            })
            .collect();
        InfoTable {
            name: dialect.name_for_dialect(canonical_name),
            columns,
            rows: None,
            frame: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// True once the populate phase has installed this table's rows.
    pub fn is_populated(&self) -> bool {
        self.rows.is_some()
    }

    /// Installs the complete row set, as one batch. Installing twice, or
    /// installing a row whose arity or value types disagree with the
    /// declared columns, is a programming defect and aborts.
    pub(crate) fn install_rows(&mut self, rows: Vec<Row>) {
        assert!(self.rows.is_none(), "rows for {} installed twice", self.name);
        for row in &rows {
            assert_eq!(
                row.len(),
                self.columns.len(),
                "row arity mismatch in {}",
                self.name
            );
            for (value, column) in row.iter().zip(&self.columns) {
                let ok = matches!(
                    (value, column.coltype),
                    (Value::Null, _)
                        | (Value::String(_), ColType::Text)
                        | (Value::Int64(_), ColType::BigInt)
                        | (Value::Bool(_), ColType::Boolean)
                        | (Value::Timestamp(_), ColType::Timestamp)
                );
                assert!(ok, "value type mismatch in {}.{}", self.name, column.name);
            }
        }
        self.rows = Some(rows);
    }

    pub fn rows(&self) -> &[Row] {
        self.rows.as_deref().unwrap_or(&[])
    }

    /// The materialized columnar form handed to query execution. Built
    /// once, on first access.
    pub fn dataframe(&self) -> &DataFrame {
        self.frame.get_or_init(|| {
            let rows = self.rows();
            let mut series: Vec<Series> = Vec::with_capacity(self.columns.len());
            for (j, column) in self.columns.iter().enumerate() {
                let name = column.name.as_str();
                match column.coltype {
                    ColType::Text => {
                        let vals: Vec<Option<String>> =
                            rows.iter().map(|r| cell_str(&r[j], name)).collect();
                        series.push(Series::new(name.into(), vals));
                    }
                    ColType::BigInt => {
                        let vals: Vec<Option<i64>> =
                            rows.iter().map(|r| cell_i64(&r[j], name)).collect();
                        series.push(Series::new(name.into(), vals));
                    }
                    ColType::Boolean => {
                        let vals: Vec<Option<bool>> =
                            rows.iter().map(|r| cell_bool(&r[j], name)).collect();
                        series.push(Series::new(name.into(), vals));
                    }
                    ColType::Timestamp => {
                        let vals: Vec<Option<NaiveDateTime>> =
                            rows.iter().map(|r| cell_timestamp(&r[j], name)).collect();
                        series.push(Series::new(name.into(), vals));
                    }
                }
            }
            DataFrame::new(series.into_iter().map(|s| s.into()).collect())
                .expect("all column series share the row count")
        })
    }
}

fn cell_str(value: &Value, column: &str) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => panic!("non-string value {:?} in string column {}", other, column),
    }
}

fn cell_i64(value: &Value, column: &str) -> Option<i64> {
    match value {
        Value::Int64(v) => Some(*v),
        Value::Null => None,
        other => panic!("non-integer value {:?} in integer column {}", other, column),
    }
}

fn cell_bool(value: &Value, column: &str) -> Option<bool> {
    match value {
        Value::Bool(v) => Some(*v),
        Value::Null => None,
        other => panic!("non-boolean value {:?} in boolean column {}", other, column),
    }
}

fn cell_timestamp(value: &Value, column: &str) -> Option<NaiveDateTime> {
    match value {
        Value::Timestamp(v) => Some(v.naive_utc()),
        Value::Null => None,
        other => panic!("non-timestamp value {:?} in timestamp column {}", other, column),
    }
}
