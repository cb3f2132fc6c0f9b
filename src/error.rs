//! Errors surfaced while assembling a schema snapshot.
//!
//! Catalog synthesis itself is infallible on a valid snapshot; dangling
//! name references are rejected once, here, when the snapshot is built.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("unknown table `{table}` referenced by {context}")]
    UnknownTable { table: String, context: String },
    #[error("unknown column `{column}` on table `{table}` referenced by {context}")]
    UnknownColumn {
        table: String,
        column: String,
        context: String,
    },
    #[error("unknown index `{index}` on table `{table}` referenced by foreign key `{foreign_key}`")]
    UnknownIndex {
        index: String,
        table: String,
        foreign_key: String,
    },
    #[error("duplicate {kind} name `{name}`")]
    DuplicateName { kind: &'static str, name: String },
}

pub type SchemaResult<T> = Result<T, SchemaError>;
