//! Live-schema object model, consumed read-only by catalog synthesis.
//!
//! Entities reference each other by name. A snapshot is assembled through
//! [`SchemaBuilder`], which resolves those references once so that the
//! catalog never has to handle a dangling name.

use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};
use crate::types::ScalarType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnDeleteAction {
    NoAction,
    Cascade,
}

impl OnDeleteAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnDeleteAction::NoAction => "NO ACTION",
            OnDeleteAction::Cascade => "CASCADE",
        }
    }
}

/// Age-based row expiry declared on a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDeletionPolicy {
    pub column: String,
    pub older_than_days: i64,
}

impl RowDeletionPolicy {
    pub fn render(&self) -> String {
        format!("OLDER_THAN({}, INTERVAL {} DAY)", self.column, self.older_than_days)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub ty: ScalarType,
    #[serde(default = "yes")]
    pub nullable: bool,
    /// Expression of a stored generated column, with its outer parentheses.
    #[serde(default)]
    pub generation_expression: Option<String>,
    /// Columns the generation expression reads.
    #[serde(default)]
    pub dependent_columns: Vec<String>,
    #[serde(default)]
    pub default_expression: Option<String>,
    #[serde(default)]
    pub declared_max_length: Option<i64>,
    #[serde(default)]
    pub allows_commit_timestamp: bool,
}

fn yes() -> bool {
    true
}

impl Column {
    pub fn new(name: impl Into<String>, ty: ScalarType) -> Self {
        Column {
            name: name.into(),
            ty,
            nullable: true,
            generation_expression: None,
            dependent_columns: Vec::new(),
            default_expression: None,
            declared_max_length: None,
            allows_commit_timestamp: false,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn with_max_length(mut self, len: i64) -> Self {
        self.declared_max_length = Some(len);
        self
    }

    pub fn with_default(mut self, expression: impl Into<String>) -> Self {
        self.default_expression = Some(expression.into());
        self
    }

    pub fn generated(mut self, expression: impl Into<String>, deps: &[&str]) -> Self {
        self.generation_expression = Some(expression.into());
        self.dependent_columns = deps.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn commit_timestamp(mut self) -> Self {
        self.allows_commit_timestamp = true;
        self
    }

    pub fn is_generated(&self) -> bool {
        self.generation_expression.is_some()
    }
}

/// One column of a primary key or secondary index, with sort direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyColumn {
    pub column: String,
    #[serde(default)]
    pub descending: bool,
}

impl KeyColumn {
    pub fn asc(column: impl Into<String>) -> Self {
        KeyColumn { column: column.into(), descending: false }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        KeyColumn { column: column.into(), descending: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub name: String,
    pub key_columns: Vec<KeyColumn>,
    #[serde(default)]
    pub storing_columns: Vec<String>,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub null_filtered: bool,
    /// True for indexes the engine created on its own behalf, e.g. to back
    /// a foreign key.
    #[serde(default)]
    pub managed: bool,
    #[serde(default)]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub name: String,
    pub referencing_columns: Vec<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
    /// Unique index on the referenced table backing this key. `None` means
    /// the referenced table's primary key is the backing index.
    #[serde(default)]
    pub referenced_index: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConstraint {
    pub name: String,
    pub expression: String,
    #[serde(default)]
    pub dependent_columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewColumn {
    pub name: String,
    pub ty: ScalarType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub name: String,
    pub definition: String,
    pub columns: Vec<ViewColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub primary_key: Vec<KeyColumn>,
    #[serde(default)]
    pub indexes: Vec<Index>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
    #[serde(default)]
    pub check_constraints: Vec<CheckConstraint>,
    /// Interleave parent, when this table is interleaved in another.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub on_delete_action: Option<OnDeleteAction>,
    #[serde(default)]
    pub row_deletion_policy: Option<RowDeletionPolicy>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Table {
            name: name.into(),
            columns: Vec::new(),
            primary_key: Vec::new(),
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
            check_constraints: Vec::new(),
            parent: None,
            on_delete_action: None,
            row_deletion_policy: None,
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn index(&self, name: &str) -> Option<&Index> {
        self.indexes.iter().find(|i| i.name == name)
    }
}

/// An immutable snapshot of the user schema: the input to catalog
/// synthesis. Construct via [`SchemaBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    tables: Vec<Table>,
    views: Vec<View>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    pub fn empty() -> Self {
        Schema { tables: Vec::new(), views: Vec::new() }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    tables: Vec<Table>,
    views: Vec<View>,
}

impl SchemaBuilder {
    pub fn table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn view(mut self, view: View) -> Self {
        self.views.push(view);
        self
    }

    /// Resolves every by-name reference in the snapshot. The returned
    /// schema is guaranteed free of dangling names, which is what lets
    /// catalog synthesis run infallibly.
    pub fn finish(self) -> SchemaResult<Schema> {
        let schema = Schema { tables: self.tables, views: self.views };

        let mut seen = std::collections::HashSet::new();
        for table in &schema.tables {
            if !seen.insert(table.name.as_str()) {
                return Err(SchemaError::DuplicateName { kind: "table", name: table.name.clone() });
            }
        }
        for view in &schema.views {
            if !seen.insert(view.name.as_str()) {
                return Err(SchemaError::DuplicateName { kind: "view", name: view.name.clone() });
            }
        }

        for table in &schema.tables {
            check_key_columns(table, &table.primary_key, "the primary key")?;

            if let Some(parent) = &table.parent {
                if schema.table(parent).is_none() {
                    return Err(SchemaError::UnknownTable {
                        table: parent.clone(),
                        context: format!("the interleave parent of `{}`", table.name),
                    });
                }
            }

            for column in &table.columns {
                for dep in &column.dependent_columns {
                    if table.column(dep).is_none() {
                        return Err(SchemaError::UnknownColumn {
                            table: table.name.clone(),
                            column: dep.clone(),
                            context: format!("generated column `{}`", column.name),
                        });
                    }
                }
            }

            for index in &table.indexes {
                check_key_columns(table, &index.key_columns, &format!("index `{}`", index.name))?;
                for stored in &index.storing_columns {
                    if table.column(stored).is_none() {
                        return Err(SchemaError::UnknownColumn {
                            table: table.name.clone(),
                            column: stored.clone(),
                            context: format!("index `{}`", index.name),
                        });
                    }
                }
            }

            for check in &table.check_constraints {
                for dep in &check.dependent_columns {
                    if table.column(dep).is_none() {
                        return Err(SchemaError::UnknownColumn {
                            table: table.name.clone(),
                            column: dep.clone(),
                            context: format!("check constraint `{}`", check.name),
                        });
                    }
                }
            }

            for fk in &table.foreign_keys {
                for col in &fk.referencing_columns {
                    if table.column(col).is_none() {
                        return Err(SchemaError::UnknownColumn {
                            table: table.name.clone(),
                            column: col.clone(),
                            context: format!("foreign key `{}`", fk.name),
                        });
                    }
                }
                let Some(referenced) = schema.table(&fk.referenced_table) else {
                    return Err(SchemaError::UnknownTable {
                        table: fk.referenced_table.clone(),
                        context: format!("foreign key `{}`", fk.name),
                    });
                };
                for col in &fk.referenced_columns {
                    if referenced.column(col).is_none() {
                        return Err(SchemaError::UnknownColumn {
                            table: referenced.name.clone(),
                            column: col.clone(),
                            context: format!("foreign key `{}`", fk.name),
                        });
                    }
                }
                if let Some(index) = &fk.referenced_index {
                    if referenced.index(index).is_none() {
                        return Err(SchemaError::UnknownIndex {
                            index: index.clone(),
                            table: referenced.name.clone(),
                            foreign_key: fk.name.clone(),
                        });
                    }
                }
            }
        }

        Ok(schema)
    }
}

fn check_key_columns(table: &Table, key: &[KeyColumn], context: &str) -> SchemaResult<()> {
    for kc in key {
        if table.column(&kc.column).is_none() {
            return Err(SchemaError::UnknownColumn {
                table: table.name.clone(),
                column: kc.column.clone(),
                context: context.to_string(),
            });
        }
    }
    Ok(())
}
