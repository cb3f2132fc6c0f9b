//! Catalog synthesis: declares every introspection table, walks the
//! schema snapshot once and derives consistent rows across the whole
//! table family.
//!
//! Construction is a strict two-phase pipeline. Phase 1 declares every
//! table shape in a fixed order; phase 2 installs rows in a fixed order,
//! metadata-only tables first and the self-descriptive tables (those
//! that enumerate all declared tables, TABLES and COLUMNS among them)
//! last. The phase gate exists because filling a self-descriptive table
//! before every shape is declared silently produces an incomplete
//! catalog.

pub mod dialect;
pub mod metadata;
pub mod row;
pub mod table;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::schema::{ForeignKey, Index, OnDeleteAction, Schema};
use crate::types::ScalarType;
use dialect::{pg_numeric_precision, pg_numeric_precision_radix, pg_numeric_scale, Dialect};
use metadata::*;
use row::{row_from_overrides, Overrides, Row, Value};
use table::{ColType, InfoTable};

const BASE_TABLE: &str = "BASE TABLE";
const VIEW: &str = "VIEW";
const COMMITTED: &str = "COMMITTED";
const IN_PARENT: &str = "IN PARENT";
const ALWAYS: &str = "ALWAYS";
const NEVER: &str = "NEVER";
const PRIMARY_KEY_INDEX: &str = "PRIMARY_KEY";
const PRIMARY_KEY: &str = "PRIMARY KEY";
const CHECK: &str = "CHECK";
const FOREIGN_KEY: &str = "FOREIGN KEY";
const UNIQUE: &str = "UNIQUE";
const INDEX: &str = "INDEX";
const SIMPLE: &str = "SIMPLE";
const NO_ACTION: &str = "NO ACTION";
const READ_WRITE: &str = "READ_WRITE";
const ASC: &str = "ASC";
const DESC: &str = "DESC";
const DATABASE_DIALECT_OPTION: &str = "database_dialect";
const ALLOW_COMMIT_TIMESTAMP: &str = "allow_commit_timestamp";
const COMMIT_TIMESTAMP_TYPE: &str = "spanner.commit_timestamp";
const BOOL_OPTION_TYPE: &str = "BOOL";
const TRUE_OPTION_VALUE: &str = "TRUE";

// Shapes of the relationship tables that are declared by hand rather
// than from the registry. The registry still describes them (the
// lock-step contract is covered by tests), but their columns are fixed
// here where the rows are synthesized.
const INDEXES_SHAPE: &[(&str, ColType)] = &[
    (TABLE_CATALOG, ColType::Text),
    (TABLE_SCHEMA, ColType::Text),
    (TABLE_NAME, ColType::Text),
    (INDEX_NAME, ColType::Text),
    (INDEX_TYPE, ColType::Text),
    (PARENT_TABLE_NAME, ColType::Text),
    (IS_UNIQUE, ColType::Boolean),
    (IS_NULL_FILTERED, ColType::Boolean),
    (INDEX_STATE, ColType::Text),
    (SPANNER_IS_MANAGED, ColType::Boolean),
];

const INDEX_COLUMNS_SHAPE: &[(&str, ColType)] = &[
    (TABLE_CATALOG, ColType::Text),
    (TABLE_SCHEMA, ColType::Text),
    (TABLE_NAME, ColType::Text),
    (INDEX_NAME, ColType::Text),
    (INDEX_TYPE, ColType::Text),
    (COLUMN_NAME, ColType::Text),
    (ORDINAL_POSITION, ColType::BigInt),
    (COLUMN_ORDERING, ColType::Text),
    (IS_NULLABLE, ColType::Text),
    (SPANNER_TYPE, ColType::Text),
];

const COLUMN_OPTIONS_SHAPE: &[(&str, ColType)] = &[
    (TABLE_CATALOG, ColType::Text),
    (TABLE_SCHEMA, ColType::Text),
    (TABLE_NAME, ColType::Text),
    (COLUMN_NAME, ColType::Text),
    (OPTION_NAME, ColType::Text),
    (OPTION_TYPE, ColType::Text),
    (OPTION_VALUE, ColType::Text),
];

const TABLE_CONSTRAINTS_SHAPE: &[(&str, ColType)] = &[
    (CONSTRAINT_CATALOG, ColType::Text),
    (CONSTRAINT_SCHEMA, ColType::Text),
    (CONSTRAINT_NAME, ColType::Text),
    (TABLE_CATALOG, ColType::Text),
    (TABLE_SCHEMA, ColType::Text),
    (TABLE_NAME, ColType::Text),
    (CONSTRAINT_TYPE, ColType::Text),
    (IS_DEFERRABLE, ColType::Text),
    (INITIALLY_DEFERRED, ColType::Text),
    (ENFORCED, ColType::Text),
];

const CHECK_CONSTRAINTS_SHAPE: &[(&str, ColType)] = &[
    (CONSTRAINT_CATALOG, ColType::Text),
    (CONSTRAINT_SCHEMA, ColType::Text),
    (CONSTRAINT_NAME, ColType::Text),
    (CHECK_CLAUSE, ColType::Text),
    (SPANNER_STATE, ColType::Text),
];

const CONSTRAINT_TABLE_USAGE_SHAPE: &[(&str, ColType)] = &[
    (TABLE_CATALOG, ColType::Text),
    (TABLE_SCHEMA, ColType::Text),
    (TABLE_NAME, ColType::Text),
    (CONSTRAINT_CATALOG, ColType::Text),
    (CONSTRAINT_SCHEMA, ColType::Text),
    (CONSTRAINT_NAME, ColType::Text),
];

const REFERENTIAL_CONSTRAINTS_SHAPE: &[(&str, ColType)] = &[
    (CONSTRAINT_CATALOG, ColType::Text),
    (CONSTRAINT_SCHEMA, ColType::Text),
    (CONSTRAINT_NAME, ColType::Text),
    (UNIQUE_CONSTRAINT_CATALOG, ColType::Text),
    (UNIQUE_CONSTRAINT_SCHEMA, ColType::Text),
    (UNIQUE_CONSTRAINT_NAME, ColType::Text),
    (MATCH_OPTION, ColType::Text),
    (UPDATE_RULE, ColType::Text),
    (DELETE_RULE, ColType::Text),
    (SPANNER_STATE, ColType::Text),
];

const KEY_COLUMN_USAGE_SHAPE: &[(&str, ColType)] = &[
    (CONSTRAINT_CATALOG, ColType::Text),
    (CONSTRAINT_SCHEMA, ColType::Text),
    (CONSTRAINT_NAME, ColType::Text),
    (TABLE_CATALOG, ColType::Text),
    (TABLE_SCHEMA, ColType::Text),
    (TABLE_NAME, ColType::Text),
    (COLUMN_NAME, ColType::Text),
    (ORDINAL_POSITION, ColType::BigInt),
    (POSITION_IN_UNIQUE_CONSTRAINT, ColType::BigInt),
];

const CONSTRAINT_COLUMN_USAGE_SHAPE: &[(&str, ColType)] = &[
    (TABLE_CATALOG, ColType::Text),
    (TABLE_SCHEMA, ColType::Text),
    (TABLE_NAME, ColType::Text),
    (COLUMN_NAME, ColType::Text),
    (CONSTRAINT_CATALOG, ColType::Text),
    (CONSTRAINT_SCHEMA, ColType::Text),
    (CONSTRAINT_NAME, ColType::Text),
];

fn primary_key_name(table: &str) -> String {
    format!("PK_{}", table)
}

fn check_not_null_name(table: &str, column: &str) -> String {
    format!("CK_IS_NOT_NULL_{}_{}", table, column)
}

fn check_not_null_clause(column: &str) -> String {
    format!("{} IS NOT NULL", column)
}

/// Name of the unique constraint backing a foreign key. A key without an
/// explicit backing index rides on the referenced table's primary key,
/// whose constraint name is derived from the table name.
fn foreign_key_referenced_index_name(fk: &ForeignKey) -> String {
    match &fk.referenced_index {
        Some(index) => index.clone(),
        None => primary_key_name(&fk.referenced_table),
    }
}

/// The explicit backing index of a foreign key, when there is one.
fn backing_index<'a>(schema: &'a Schema, fk: &ForeignKey) -> Option<&'a Index> {
    let index_name = fk.referenced_index.as_deref()?;
    schema
        .table(&fk.referenced_table)
        .and_then(|t| t.index(index_name))
}

fn strip_outer_parens(expression: &str) -> &str {
    let e = expression.strip_prefix('(').unwrap_or(expression);
    e.strip_suffix(')').unwrap_or(e)
}

fn scalar_for_coltype(coltype: ColType) -> ScalarType {
    match coltype {
        ColType::Text => ScalarType::String,
        ColType::BigInt => ScalarType::Int64,
        ColType::Boolean => ScalarType::Bool,
        ColType::Timestamp => ScalarType::Timestamp,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuildPhase {
    Declare,
    Populate,
}

/// Construction parameters for one catalog build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    /// Catalog name reported in the *_CATALOG columns. Usually empty.
    pub catalog_name: String,
    pub dialect: Dialect,
}

impl CatalogOptions {
    pub fn with_dialect(dialect: Dialect) -> Self {
        CatalogOptions { catalog_name: String::new(), dialect }
    }
}

/// The synthesized catalog: every introspection table for one schema
/// version. Immutable once the constructor returns; rebuild from scratch
/// when the schema changes.
#[derive(Debug)]
pub struct InformationSchemaCatalog {
    options: CatalogOptions,
    tables: Vec<InfoTable>,
    by_name: HashMap<String, usize>,
    phase: BuildPhase,
}

impl InformationSchemaCatalog {
    pub fn new(options: CatalogOptions, schema: &Schema) -> Self {
        let mut catalog = InformationSchemaCatalog {
            options,
            tables: Vec::new(),
            by_name: HashMap::new(),
            phase: BuildPhase::Declare,
        };
        catalog.declare_all();
        catalog.phase = BuildPhase::Populate;
        catalog.populate_all(schema);
        debug!(
            target: "infoschema::catalog",
            "catalog built: dialect={} tables={}",
            catalog.options.dialect,
            catalog.tables.len()
        );
        catalog
    }

    /// Builds with the given dialect and an empty catalog name.
    pub fn with_dialect(dialect: Dialect, schema: &Schema) -> Self {
        Self::new(CatalogOptions::with_dialect(dialect), schema)
    }

    pub fn dialect(&self) -> Dialect {
        self.options.dialect
    }

    pub fn catalog_name(&self) -> &str {
        &self.options.catalog_name
    }

    /// Dialect-cased name of the introspection namespace itself.
    pub fn schema_name(&self) -> String {
        self.options.dialect.name_for_dialect(INFORMATION_SCHEMA)
    }

    /// All tables, in declaration order.
    pub fn tables(&self) -> &[InfoTable] {
        &self.tables
    }

    /// Looks up a table by its exact dialect-cased name.
    pub fn table(&self, name: &str) -> Option<&InfoTable> {
        self.by_name.get(name).map(|&i| &self.tables[i])
    }

    // ---- phase 1: declare ------------------------------------------------

    fn declare_all(&mut self) {
        let dialect = self.options.dialect;

        // Registry-driven shapes first.
        for name in [
            SCHEMATA,
            DATABASE_OPTIONS,
            SPANNER_STATISTICS,
            TABLES,
            COLUMNS,
            COLUMN_COLUMN_USAGE,
            VIEWS,
        ] {
            self.declare(InfoTable::from_registry(dialect, name));
        }

        // Relationship tables, declared by hand.
        self.declare(InfoTable::with_columns(dialect, INDEXES, INDEXES_SHAPE));
        self.declare(InfoTable::with_columns(dialect, INDEX_COLUMNS, INDEX_COLUMNS_SHAPE));
        self.declare(InfoTable::with_columns(dialect, COLUMN_OPTIONS, COLUMN_OPTIONS_SHAPE));
        self.declare(InfoTable::with_columns(dialect, CHECK_CONSTRAINTS, CHECK_CONSTRAINTS_SHAPE));
        self.declare(InfoTable::with_columns(dialect, TABLE_CONSTRAINTS, TABLE_CONSTRAINTS_SHAPE));
        self.declare(InfoTable::with_columns(
            dialect,
            CONSTRAINT_TABLE_USAGE,
            CONSTRAINT_TABLE_USAGE_SHAPE,
        ));
        self.declare(InfoTable::with_columns(
            dialect,
            REFERENTIAL_CONSTRAINTS,
            REFERENTIAL_CONSTRAINTS_SHAPE,
        ));
        self.declare(InfoTable::with_columns(dialect, KEY_COLUMN_USAGE, KEY_COLUMN_USAGE_SHAPE));
        self.declare(InfoTable::with_columns(
            dialect,
            CONSTRAINT_COLUMN_USAGE,
            CONSTRAINT_COLUMN_USAGE_SHAPE,
        ));

        debug!(target: "infoschema::catalog", "declared {} tables", self.tables.len());
    }

    fn declare(&mut self, table: InfoTable) {
        assert_eq!(
            self.phase,
            BuildPhase::Declare,
            "table {} declared after populate began",
            table.name()
        );
        let previous = self.by_name.insert(table.name().to_string(), self.tables.len());
        assert!(previous.is_none(), "table {} declared twice", table.name());
        self.tables.push(table);
    }

    /// A declared table, by canonical name. Declaration happens before
    /// any row synthesis, so a miss is a programming defect.
    fn declared(&self, canonical: &'static str) -> &InfoTable {
        let name = self.options.dialect.name_for_dialect(canonical);
        self.table(&name)
            .unwrap_or_else(|| panic!("table {} was never declared", canonical))
    }

    // ---- phase 2: populate -----------------------------------------------

    fn populate_all(&mut self, schema: &Schema) {
        // Metadata-only tables first.
        let rows = self.rows_for_schemata();
        self.install(SCHEMATA, rows);
        let rows = self.rows_for_database_options();
        self.install(DATABASE_OPTIONS, rows);
        // Statistics packages are never synthesized here; the table stays empty.
        self.install(SPANNER_STATISTICS, Vec::new());
        let rows = self.rows_for_column_options(schema);
        self.install(COLUMN_OPTIONS, rows);
        let rows = self.rows_for_referential_constraints(schema);
        self.install(REFERENTIAL_CONSTRAINTS, rows);
        let rows = self.rows_for_views(schema);
        self.install(VIEWS, rows);
        let rows = self.rows_for_column_column_usage(schema);
        self.install(COLUMN_COLUMN_USAGE, rows);

        // Self-descriptive tables last: these enumerate every declared
        // table, so every shape must already exist.
        let rows = self.rows_for_tables(schema);
        self.install(TABLES, rows);
        let rows = self.rows_for_columns(schema);
        self.install(COLUMNS, rows);
        let rows = self.rows_for_indexes(schema);
        self.install(INDEXES, rows);
        let rows = self.rows_for_index_columns(schema);
        self.install(INDEX_COLUMNS, rows);
        let rows = self.rows_for_check_constraints(schema);
        self.install(CHECK_CONSTRAINTS, rows);
        let rows = self.rows_for_table_constraints(schema);
        self.install(TABLE_CONSTRAINTS, rows);
        let rows = self.rows_for_constraint_table_usage(schema);
        self.install(CONSTRAINT_TABLE_USAGE, rows);
        let rows = self.rows_for_key_column_usage(schema);
        self.install(KEY_COLUMN_USAGE, rows);
        let rows = self.rows_for_constraint_column_usage(schema);
        self.install(CONSTRAINT_COLUMN_USAGE, rows);

        for table in &self.tables {
            assert!(table.is_populated(), "table {} left unpopulated", table.name());
        }
    }

    fn install(&mut self, canonical: &'static str, rows: Vec<Row>) {
        assert_eq!(
            self.phase,
            BuildPhase::Populate,
            "rows for {} installed before declaration finished",
            canonical
        );
        let name = self.options.dialect.name_for_dialect(canonical);
        let index = *self
            .by_name
            .get(&name)
            .unwrap_or_else(|| panic!("table {} was never declared", canonical));
        debug!(target: "infoschema::catalog", "populated {}: rows={}", name, rows.len());
        self.tables[index].install_rows(rows);
    }

    fn catalog_value(&self) -> Value {
        Value::string(&self.options.catalog_name)
    }

    fn user_schema_value(&self) -> Value {
        Value::string(self.options.dialect.user_schema_name())
    }

    fn self_schema_value(&self) -> Value {
        Value::String(self.schema_name())
    }

    // ---- row synthesis ---------------------------------------------------

    fn rows_for_schemata(&self) -> Vec<Row> {
        let table = self.declared(SCHEMATA);
        let mut rows = Vec::new();

        // Row for the unnamed default schema the user entities live in.
        let mut overrides = Overrides::new();
        overrides.insert(CATALOG_NAME, self.catalog_value());
        overrides.insert(SCHEMA_NAME, self.user_schema_value());
        rows.push(row_from_overrides(table.name(), table.columns(), &overrides));

        // Row for the introspection schema itself.
        let mut overrides = Overrides::new();
        overrides.insert(CATALOG_NAME, self.catalog_value());
        overrides.insert(SCHEMA_NAME, self.self_schema_value());
        rows.push(row_from_overrides(table.name(), table.columns(), &overrides));

        rows
    }

    fn rows_for_database_options(&self) -> Vec<Row> {
        let table = self.declared(DATABASE_OPTIONS);
        let dialect = self.options.dialect;

        let mut overrides = Overrides::new();
        overrides.insert(CATALOG_NAME, self.catalog_value());
        overrides.insert(SCHEMA_NAME, self.user_schema_value());
        overrides.insert(OPTION_NAME, Value::string(DATABASE_DIALECT_OPTION));
        overrides.insert(OPTION_TYPE, Value::string(dialect.option_type_name()));
        overrides.insert(OPTION_VALUE, Value::string(dialect.option_value()));

        vec![row_from_overrides(table.name(), table.columns(), &overrides)]
    }

    fn rows_for_tables(&self, schema: &Schema) -> Vec<Row> {
        let table = self.declared(TABLES);
        let mut rows = Vec::new();

        for user_table in schema.tables() {
            let mut o = Overrides::new();
            o.insert(TABLE_CATALOG, self.catalog_value());
            o.insert(TABLE_SCHEMA, self.user_schema_value());
            o.insert(TABLE_NAME, Value::string(&user_table.name));
            o.insert(TABLE_TYPE, Value::string(BASE_TABLE));
            o.insert(PARENT_TABLE_NAME, Value::opt_string(user_table.parent.clone()));
            o.insert(
                ON_DELETE_ACTION,
                match &user_table.parent {
                    Some(_) => Value::string(
                        user_table.on_delete_action.unwrap_or(OnDeleteAction::NoAction).as_str(),
                    ),
                    None => Value::Null,
                },
            );
            o.insert(SPANNER_STATE, Value::string(COMMITTED));
            // Only INTERLEAVE IN PARENT is supported.
            o.insert(
                INTERLEAVE_TYPE,
                if user_table.parent.is_some() { Value::string(IN_PARENT) } else { Value::Null },
            );
            o.insert(
                ROW_DELETION_POLICY_EXPRESSION,
                match self.options.dialect {
                    Dialect::Native => Value::opt_string(
                        user_table.row_deletion_policy.as_ref().map(|p| p.render()),
                    ),
                    Dialect::Postgres => Value::Null,
                },
            );
            rows.push(row_from_overrides(table.name(), table.columns(), &o));
        }

        for view in schema.views() {
            let mut o = Overrides::new();
            o.insert(TABLE_CATALOG, self.catalog_value());
            o.insert(TABLE_SCHEMA, self.user_schema_value());
            o.insert(TABLE_NAME, Value::string(&view.name));
            o.insert(TABLE_TYPE, Value::string(VIEW));
            o.insert(PARENT_TABLE_NAME, Value::Null);
            o.insert(ON_DELETE_ACTION, Value::Null);
            o.insert(
                SPANNER_STATE,
                match self.options.dialect {
                    Dialect::Native => Value::string(COMMITTED),
                    Dialect::Postgres => Value::Null,
                },
            );
            o.insert(INTERLEAVE_TYPE, Value::Null);
            o.insert(ROW_DELETION_POLICY_EXPRESSION, Value::Null);
            rows.push(row_from_overrides(table.name(), table.columns(), &o));
        }

        // The introspection tables describe themselves.
        for info_table in self.tables() {
            let mut o = Overrides::new();
            o.insert(TABLE_CATALOG, self.catalog_value());
            o.insert(TABLE_SCHEMA, self.self_schema_value());
            o.insert(TABLE_NAME, Value::string(info_table.name()));
            o.insert(TABLE_TYPE, Value::string(VIEW));
            o.insert(PARENT_TABLE_NAME, Value::Null);
            o.insert(ON_DELETE_ACTION, Value::Null);
            o.insert(SPANNER_STATE, Value::Null);
            o.insert(INTERLEAVE_TYPE, Value::Null);
            o.insert(ROW_DELETION_POLICY_EXPRESSION, Value::Null);
            rows.push(row_from_overrides(table.name(), table.columns(), &o));
        }

        rows
    }

    fn rows_for_columns(&self, schema: &Schema) -> Vec<Row> {
        let table = self.declared(COLUMNS);
        let dialect = self.options.dialect;
        let mut rows = Vec::new();

        for user_table in schema.tables() {
            for (i, column) in user_table.columns.iter().enumerate() {
                let mut o = Overrides::new();
                o.insert(TABLE_CATALOG, self.catalog_value());
                o.insert(TABLE_SCHEMA, self.user_schema_value());
                o.insert(TABLE_NAME, Value::string(&user_table.name));
                o.insert(COLUMN_NAME, Value::string(&column.name));
                o.insert(ORDINAL_POSITION, Value::Int64(i as i64 + 1));
                o.insert(
                    IS_NULLABLE,
                    Value::string(if column.nullable { YES } else { NO }),
                );
                o.insert(
                    IS_GENERATED,
                    Value::string(if column.is_generated() { ALWAYS } else { NEVER }),
                );
                o.insert(
                    IS_STORED,
                    if column.is_generated() { Value::string(YES) } else { Value::Null },
                );
                o.insert(SPANNER_STATE, Value::string(COMMITTED));
                match dialect {
                    Dialect::Postgres => {
                        o.insert(COLUMN_DEFAULT, Value::Null);
                        o.insert(GENERATION_EXPRESSION, Value::Null);
                        if column.allows_commit_timestamp {
                            o.insert(DATA_TYPE, Value::string(COMMIT_TIMESTAMP_TYPE));
                            o.insert(SPANNER_TYPE, Value::string(COMMIT_TIMESTAMP_TYPE));
                        } else {
                            o.insert(DATA_TYPE, Value::Null);
                            o.insert(SPANNER_TYPE, Value::Null);
                        }
                        o.insert(
                            CHARACTER_MAXIMUM_LENGTH,
                            match column.declared_max_length {
                                Some(len) if !column.ty.is_array() => Value::Int64(len),
                                _ => Value::Null,
                            },
                        );
                        o.insert(NUMERIC_PRECISION, pg_numeric_precision(&column.ty));
                        o.insert(NUMERIC_PRECISION_RADIX, pg_numeric_precision_radix(&column.ty));
                        o.insert(NUMERIC_SCALE, pg_numeric_scale(&column.ty));
                    }
                    Dialect::Native => {
                        o.insert(
                            COLUMN_DEFAULT,
                            Value::opt_string(column.default_expression.clone()),
                        );
                        o.insert(
                            GENERATION_EXPRESSION,
                            match &column.generation_expression {
                                Some(expr) => Value::string(strip_outer_parens(expr)),
                                None => Value::Null,
                            },
                        );
                        o.insert(DATA_TYPE, Value::Null);
                        o.insert(
                            SPANNER_TYPE,
                            Value::String(column.ty.render(column.declared_max_length)),
                        );
                        o.insert(CHARACTER_MAXIMUM_LENGTH, Value::Null);
                        o.insert(NUMERIC_PRECISION, Value::Null);
                        o.insert(NUMERIC_PRECISION_RADIX, Value::Null);
                        o.insert(NUMERIC_SCALE, Value::Null);
                    }
                }
                rows.push(row_from_overrides(table.name(), table.columns(), &o));
            }
        }

        for view in schema.views() {
            for (i, column) in view.columns.iter().enumerate() {
                let mut o = Overrides::new();
                o.insert(TABLE_CATALOG, self.catalog_value());
                o.insert(TABLE_SCHEMA, self.user_schema_value());
                o.insert(TABLE_NAME, Value::string(&view.name));
                o.insert(COLUMN_NAME, Value::string(&column.name));
                o.insert(ORDINAL_POSITION, Value::Int64(i as i64 + 1));
                o.insert(COLUMN_DEFAULT, Value::Null);
                o.insert(IS_NULLABLE, Value::string(YES));
                o.insert(IS_GENERATED, Value::string(NEVER));
                o.insert(GENERATION_EXPRESSION, Value::Null);
                o.insert(IS_STORED, Value::Null);
                o.insert(SPANNER_STATE, Value::string(COMMITTED));
                match dialect {
                    Dialect::Postgres => {
                        o.insert(DATA_TYPE, Value::Null);
                        o.insert(SPANNER_TYPE, Value::Null);
                        // View output columns carry no declared length.
                        o.insert(CHARACTER_MAXIMUM_LENGTH, Value::Null);
                        o.insert(NUMERIC_PRECISION, pg_numeric_precision(&column.ty));
                        o.insert(NUMERIC_PRECISION_RADIX, pg_numeric_precision_radix(&column.ty));
                        o.insert(NUMERIC_SCALE, pg_numeric_scale(&column.ty));
                    }
                    Dialect::Native => {
                        o.insert(DATA_TYPE, Value::Null);
                        o.insert(SPANNER_TYPE, Value::String(column.ty.render(None)));
                        o.insert(CHARACTER_MAXIMUM_LENGTH, Value::Null);
                        o.insert(NUMERIC_PRECISION, Value::Null);
                        o.insert(NUMERIC_PRECISION_RADIX, Value::Null);
                        o.insert(NUMERIC_SCALE, Value::Null);
                    }
                }
                rows.push(row_from_overrides(table.name(), table.columns(), &o));
            }
        }

        // Columns of the introspection tables themselves, described by
        // the registry.
        for info_table in self.tables() {
            for (i, column) in info_table.columns().iter().enumerate() {
                let meta = metadata::column_metadata(info_table.name(), &column.name);
                let mut o = Overrides::new();
                o.insert(TABLE_CATALOG, self.catalog_value());
                o.insert(TABLE_SCHEMA, self.self_schema_value());
                o.insert(TABLE_NAME, Value::string(info_table.name()));
                o.insert(COLUMN_NAME, Value::string(&column.name));
                o.insert(ORDINAL_POSITION, Value::Int64(i as i64 + 1));
                o.insert(COLUMN_DEFAULT, Value::Null);
                o.insert(IS_NULLABLE, Value::string(meta.is_nullable));
                o.insert(IS_GENERATED, Value::string(NEVER));
                o.insert(GENERATION_EXPRESSION, Value::Null);
                o.insert(IS_STORED, Value::Null);
                o.insert(SPANNER_STATE, Value::Null);
                match dialect {
                    Dialect::Postgres => {
                        let ty = scalar_for_coltype(column.coltype);
                        o.insert(DATA_TYPE, Value::Null);
                        o.insert(SPANNER_TYPE, Value::Null);
                        o.insert(CHARACTER_MAXIMUM_LENGTH, Value::Null);
                        o.insert(NUMERIC_PRECISION, pg_numeric_precision(&ty));
                        o.insert(NUMERIC_PRECISION_RADIX, pg_numeric_precision_radix(&ty));
                        o.insert(NUMERIC_SCALE, pg_numeric_scale(&ty));
                    }
                    Dialect::Native => {
                        o.insert(DATA_TYPE, Value::Null);
                        o.insert(SPANNER_TYPE, Value::string(meta.spanner_type));
                        o.insert(CHARACTER_MAXIMUM_LENGTH, Value::Null);
                        o.insert(NUMERIC_PRECISION, Value::Null);
                        o.insert(NUMERIC_PRECISION_RADIX, Value::Null);
                        o.insert(NUMERIC_SCALE, Value::Null);
                    }
                }
                rows.push(row_from_overrides(table.name(), table.columns(), &o));
            }
        }

        rows
    }

    fn rows_for_column_column_usage(&self, schema: &Schema) -> Vec<Row> {
        let mut rows = Vec::new();
        for user_table in schema.tables() {
            for column in &user_table.columns {
                if !column.is_generated() {
                    continue;
                }
                for used in &column.dependent_columns {
                    rows.push(vec![
                        self.catalog_value(),
                        self.user_schema_value(),
                        Value::string(&user_table.name),
                        Value::string(used),
                        Value::string(&column.name),
                    ]);
                }
            }
        }
        rows
    }

    fn rows_for_indexes(&self, schema: &Schema) -> Vec<Row> {
        let mut rows = Vec::new();

        for user_table in schema.tables() {
            for index in &user_table.indexes {
                rows.push(vec![
                    self.catalog_value(),
                    self.user_schema_value(),
                    Value::string(&user_table.name),
                    Value::string(&index.name),
                    Value::string(INDEX),
                    Value::string(index.parent.as_deref().unwrap_or("")),
                    Value::Bool(index.unique),
                    Value::Bool(index.null_filtered),
                    Value::string(READ_WRITE),
                    Value::Bool(index.managed),
                ]);
            }

            // The primary key, reported as a pseudo-index.
            rows.push(vec![
                self.catalog_value(),
                self.user_schema_value(),
                Value::string(&user_table.name),
                Value::string(PRIMARY_KEY_INDEX),
                Value::string(PRIMARY_KEY_INDEX),
                Value::string(""),
                Value::Bool(true),
                Value::Bool(false),
                Value::Null,
                Value::Bool(false),
            ]);
        }

        for info_table in self.tables() {
            rows.push(vec![
                self.catalog_value(),
                self.self_schema_value(),
                Value::string(info_table.name()),
                Value::string(PRIMARY_KEY_INDEX),
                Value::string(PRIMARY_KEY_INDEX),
                Value::string(""),
                Value::Bool(true),
                Value::Bool(false),
                Value::Null,
                Value::Bool(false),
            ]);
        }

        rows
    }

    fn rows_for_index_columns(&self, schema: &Schema) -> Vec<Row> {
        let mut rows = Vec::new();

        for user_table in schema.tables() {
            for index in &user_table.indexes {
                let mut pos = 1i64;
                for key_column in &index.key_columns {
                    let column = user_table
                        .column(&key_column.column)
                        .expect("schema snapshot resolves key columns");
                    rows.push(vec![
                        self.catalog_value(),
                        self.user_schema_value(),
                        Value::string(&user_table.name),
                        Value::string(&index.name),
                        Value::string(INDEX),
                        Value::string(&column.name),
                        Value::Int64(pos),
                        Value::string(if key_column.descending { DESC } else { ASC }),
                        Value::string(if column.nullable && !index.null_filtered {
                            YES
                        } else {
                            NO
                        }),
                        Value::String(column.ty.render(column.declared_max_length)),
                    ]);
                    pos += 1;
                }

                for stored in &index.storing_columns {
                    let column = user_table
                        .column(stored)
                        .expect("schema snapshot resolves storing columns");
                    rows.push(vec![
                        self.catalog_value(),
                        self.user_schema_value(),
                        Value::string(&user_table.name),
                        Value::string(&index.name),
                        Value::string(INDEX),
                        Value::string(&column.name),
                        Value::Null,
                        Value::Null,
                        Value::string(if column.nullable { YES } else { NO }),
                        Value::String(column.ty.render(column.declared_max_length)),
                    ]);
                }
            }

            let mut pos = 1i64;
            for key_column in &user_table.primary_key {
                let column = user_table
                    .column(&key_column.column)
                    .expect("schema snapshot resolves key columns");
                rows.push(vec![
                    self.catalog_value(),
                    self.user_schema_value(),
                    Value::string(&user_table.name),
                    Value::string(PRIMARY_KEY_INDEX),
                    Value::string(PRIMARY_KEY_INDEX),
                    Value::string(&column.name),
                    Value::Int64(pos),
                    Value::string(if key_column.descending { DESC } else { ASC }),
                    Value::string(if column.nullable { YES } else { NO }),
                    Value::String(column.ty.render(column.declared_max_length)),
                ]);
                pos += 1;
            }
        }

        // Primary-key columns of the introspection tables, from the
        // key-column registry.
        for info_table in self.tables() {
            for column in info_table.columns() {
                let Some(meta) = metadata::find_key_column_metadata(info_table.name(), &column.name)
                else {
                    continue; // Not a primary-key column.
                };
                rows.push(vec![
                    self.catalog_value(),
                    self.self_schema_value(),
                    Value::string(info_table.name()),
                    Value::string(PRIMARY_KEY_INDEX),
                    Value::string(PRIMARY_KEY_INDEX),
                    Value::string(&column.name),
                    Value::Int64(meta.primary_key_ordinal),
                    Value::string(meta.column_ordering),
                    Value::string(meta.is_nullable),
                    Value::string(meta.spanner_type),
                ]);
            }
        }

        rows
    }

    fn rows_for_column_options(&self, schema: &Schema) -> Vec<Row> {
        let mut rows = Vec::new();
        for user_table in schema.tables() {
            for column in &user_table.columns {
                if !column.allows_commit_timestamp {
                    continue;
                }
                rows.push(vec![
                    self.catalog_value(),
                    self.user_schema_value(),
                    Value::string(&user_table.name),
                    Value::string(&column.name),
                    Value::string(ALLOW_COMMIT_TIMESTAMP),
                    Value::string(BOOL_OPTION_TYPE),
                    Value::string(TRUE_OPTION_VALUE),
                ]);
            }
        }
        rows
    }

    fn rows_for_check_constraints(&self, schema: &Schema) -> Vec<Row> {
        let mut rows = Vec::new();

        for user_table in schema.tables() {
            // One NOT NULL check constraint per non-nullable column.
            for column in &user_table.columns {
                if column.nullable {
                    continue;
                }
                rows.push(vec![
                    self.catalog_value(),
                    self.user_schema_value(),
                    Value::String(check_not_null_name(&user_table.name, &column.name)),
                    Value::String(check_not_null_clause(&column.name)),
                    Value::string(COMMITTED),
                ]);
            }

            for check in &user_table.check_constraints {
                rows.push(vec![
                    self.catalog_value(),
                    self.user_schema_value(),
                    Value::string(&check.name),
                    Value::string(&check.expression),
                    Value::string(COMMITTED),
                ]);
            }
        }

        for info_table in self.tables() {
            for column in info_table.columns() {
                let meta = metadata::column_metadata(info_table.name(), &column.name);
                if meta.is_nullable() {
                    continue;
                }
                rows.push(vec![
                    self.catalog_value(),
                    self.self_schema_value(),
                    Value::String(check_not_null_name(info_table.name(), &column.name)),
                    Value::String(check_not_null_clause(&column.name)),
                    Value::string(COMMITTED),
                ]);
            }
        }

        rows
    }

    fn table_constraint_row(
        &self,
        constraint_schema: Value,
        constraint_name: String,
        table_schema: Value,
        table_name: &str,
        constraint_type: &str,
    ) -> Row {
        vec![
            self.catalog_value(),
            constraint_schema,
            Value::String(constraint_name),
            self.catalog_value(),
            table_schema,
            Value::string(table_name),
            Value::string(constraint_type),
            Value::string(NO),
            Value::string(NO),
            Value::string(YES),
        ]
    }

    fn rows_for_table_constraints(&self, schema: &Schema) -> Vec<Row> {
        let mut rows = Vec::new();

        for user_table in schema.tables() {
            rows.push(self.table_constraint_row(
                self.user_schema_value(),
                primary_key_name(&user_table.name),
                self.user_schema_value(),
                &user_table.name,
                PRIMARY_KEY,
            ));

            for column in &user_table.columns {
                if column.nullable {
                    continue;
                }
                rows.push(self.table_constraint_row(
                    self.user_schema_value(),
                    check_not_null_name(&user_table.name, &column.name),
                    self.user_schema_value(),
                    &user_table.name,
                    CHECK,
                ));
            }

            for check in &user_table.check_constraints {
                rows.push(self.table_constraint_row(
                    self.user_schema_value(),
                    check.name.clone(),
                    self.user_schema_value(),
                    &user_table.name,
                    CHECK,
                ));
            }

            for fk in &user_table.foreign_keys {
                rows.push(self.table_constraint_row(
                    self.user_schema_value(),
                    fk.name.clone(),
                    self.user_schema_value(),
                    &user_table.name,
                    FOREIGN_KEY,
                ));

                // An explicit backing index surfaces as a synthetic
                // UNIQUE constraint on the referenced table.
                if let Some(index) = &fk.referenced_index {
                    rows.push(self.table_constraint_row(
                        self.user_schema_value(),
                        index.clone(),
                        self.user_schema_value(),
                        &fk.referenced_table,
                        UNIQUE,
                    ));
                }
            }
        }

        for info_table in self.tables() {
            rows.push(self.table_constraint_row(
                self.self_schema_value(),
                primary_key_name(info_table.name()),
                self.self_schema_value(),
                info_table.name(),
                PRIMARY_KEY,
            ));

            for column in info_table.columns() {
                let meta = metadata::column_metadata(info_table.name(), &column.name);
                if meta.is_nullable() {
                    continue;
                }
                rows.push(self.table_constraint_row(
                    self.self_schema_value(),
                    check_not_null_name(info_table.name(), &column.name),
                    self.self_schema_value(),
                    info_table.name(),
                    CHECK,
                ));
            }
        }

        rows
    }

    fn constraint_table_usage_row(
        &self,
        table_schema: Value,
        table_name: &str,
        constraint_schema: Value,
        constraint_name: String,
    ) -> Row {
        vec![
            self.catalog_value(),
            table_schema,
            Value::string(table_name),
            self.catalog_value(),
            constraint_schema,
            Value::String(constraint_name),
        ]
    }

    fn rows_for_constraint_table_usage(&self, schema: &Schema) -> Vec<Row> {
        let mut rows = Vec::new();

        for user_table in schema.tables() {
            rows.push(self.constraint_table_usage_row(
                self.user_schema_value(),
                &user_table.name,
                self.user_schema_value(),
                primary_key_name(&user_table.name),
            ));

            for column in &user_table.columns {
                if column.nullable {
                    continue;
                }
                rows.push(self.constraint_table_usage_row(
                    self.user_schema_value(),
                    &user_table.name,
                    self.user_schema_value(),
                    check_not_null_name(&user_table.name, &column.name),
                ));
            }

            for check in &user_table.check_constraints {
                rows.push(self.constraint_table_usage_row(
                    self.user_schema_value(),
                    &user_table.name,
                    self.user_schema_value(),
                    check.name.clone(),
                ));
            }

            // Foreign keys are usages of the table they reference.
            for fk in &user_table.foreign_keys {
                rows.push(self.constraint_table_usage_row(
                    self.user_schema_value(),
                    &fk.referenced_table,
                    self.user_schema_value(),
                    fk.name.clone(),
                ));

                if let Some(index) = &fk.referenced_index {
                    rows.push(self.constraint_table_usage_row(
                        self.user_schema_value(),
                        &fk.referenced_table,
                        self.user_schema_value(),
                        index.clone(),
                    ));
                }
            }
        }

        for info_table in self.tables() {
            rows.push(self.constraint_table_usage_row(
                self.self_schema_value(),
                info_table.name(),
                self.self_schema_value(),
                primary_key_name(info_table.name()),
            ));

            for column in info_table.columns() {
                let meta = metadata::column_metadata(info_table.name(), &column.name);
                if meta.is_nullable() {
                    continue;
                }
                rows.push(self.constraint_table_usage_row(
                    self.self_schema_value(),
                    info_table.name(),
                    self.self_schema_value(),
                    check_not_null_name(info_table.name(), &column.name),
                ));
            }
        }

        rows
    }

    fn rows_for_referential_constraints(&self, schema: &Schema) -> Vec<Row> {
        let mut rows = Vec::new();
        for user_table in schema.tables() {
            for fk in &user_table.foreign_keys {
                rows.push(vec![
                    self.catalog_value(),
                    self.user_schema_value(),
                    Value::string(&fk.name),
                    self.catalog_value(),
                    self.user_schema_value(),
                    Value::String(foreign_key_referenced_index_name(fk)),
                    Value::string(SIMPLE),
                    Value::string(NO_ACTION),
                    Value::string(NO_ACTION),
                    Value::string(COMMITTED),
                ]);
            }
        }
        rows
    }

    fn key_column_usage_row(
        &self,
        constraint_schema: Value,
        constraint_name: String,
        table_schema: Value,
        table_name: &str,
        column_name: &str,
        ordinal_position: i64,
        position_in_unique_constraint: Value,
    ) -> Row {
        vec![
            self.catalog_value(),
            constraint_schema,
            Value::String(constraint_name),
            self.catalog_value(),
            table_schema,
            Value::string(table_name),
            Value::string(column_name),
            Value::Int64(ordinal_position),
            position_in_unique_constraint,
        ]
    }

    fn rows_for_key_column_usage(&self, schema: &Schema) -> Vec<Row> {
        let mut rows = Vec::new();

        for user_table in schema.tables() {
            // Primary-key columns, ordered by declared key ordinal.
            let mut pos = 1i64;
            for key_column in &user_table.primary_key {
                rows.push(self.key_column_usage_row(
                    self.user_schema_value(),
                    primary_key_name(&user_table.name),
                    self.user_schema_value(),
                    &user_table.name,
                    &key_column.column,
                    pos,
                    Value::Null,
                ));
                pos += 1;
            }

            for fk in &user_table.foreign_keys {
                // Referencing columns pair element-wise with the
                // referenced index's key columns; the shared ordinal is
                // both the position in the key and in the unique
                // constraint.
                let mut fk_pos = 1i64;
                for column in &fk.referencing_columns {
                    rows.push(self.key_column_usage_row(
                        self.user_schema_value(),
                        fk.name.clone(),
                        self.user_schema_value(),
                        &user_table.name,
                        column,
                        fk_pos,
                        Value::Int64(fk_pos),
                    ));
                    fk_pos += 1;
                }

                if let Some(index) = backing_index(schema, fk) {
                    let mut index_pos = 1i64;
                    for key_column in &index.key_columns {
                        rows.push(self.key_column_usage_row(
                            self.user_schema_value(),
                            index.name.clone(),
                            self.user_schema_value(),
                            &fk.referenced_table,
                            &key_column.column,
                            index_pos,
                            Value::Null,
                        ));
                        index_pos += 1;
                    }
                }
            }
        }

        for info_table in self.tables() {
            for column in info_table.columns() {
                let Some(meta) = metadata::find_key_column_metadata(info_table.name(), &column.name)
                else {
                    continue; // Not a primary-key column.
                };
                rows.push(self.key_column_usage_row(
                    self.self_schema_value(),
                    primary_key_name(info_table.name()),
                    self.self_schema_value(),
                    info_table.name(),
                    &column.name,
                    meta.primary_key_ordinal,
                    Value::Null,
                ));
            }
        }

        rows
    }

    fn constraint_column_usage_row(
        &self,
        table_schema: Value,
        table_name: &str,
        column_name: &str,
        constraint_schema: Value,
        constraint_name: String,
    ) -> Row {
        vec![
            self.catalog_value(),
            table_schema,
            Value::string(table_name),
            Value::string(column_name),
            self.catalog_value(),
            constraint_schema,
            Value::String(constraint_name),
        ]
    }

    fn rows_for_constraint_column_usage(&self, schema: &Schema) -> Vec<Row> {
        let mut rows = Vec::new();

        for user_table in schema.tables() {
            for key_column in &user_table.primary_key {
                rows.push(self.constraint_column_usage_row(
                    self.user_schema_value(),
                    &user_table.name,
                    &key_column.column,
                    self.user_schema_value(),
                    primary_key_name(&user_table.name),
                ));
            }

            for column in &user_table.columns {
                if column.nullable {
                    continue;
                }
                rows.push(self.constraint_column_usage_row(
                    self.user_schema_value(),
                    &user_table.name,
                    &column.name,
                    self.user_schema_value(),
                    check_not_null_name(&user_table.name, &column.name),
                ));
            }

            for check in &user_table.check_constraints {
                for dep in &check.dependent_columns {
                    rows.push(self.constraint_column_usage_row(
                        self.user_schema_value(),
                        &user_table.name,
                        dep,
                        self.user_schema_value(),
                        check.name.clone(),
                    ));
                }
            }

            for fk in &user_table.foreign_keys {
                // A foreign key uses the columns it references.
                for column in &fk.referenced_columns {
                    rows.push(self.constraint_column_usage_row(
                        self.user_schema_value(),
                        &fk.referenced_table,
                        column,
                        self.user_schema_value(),
                        fk.name.clone(),
                    ));
                }

                if let Some(index) = backing_index(schema, fk) {
                    for key_column in &index.key_columns {
                        rows.push(self.constraint_column_usage_row(
                            self.user_schema_value(),
                            &fk.referenced_table,
                            &key_column.column,
                            self.user_schema_value(),
                            index.name.clone(),
                        ));
                    }
                }
            }
        }

        for info_table in self.tables() {
            for column in info_table.columns() {
                if metadata::find_key_column_metadata(info_table.name(), &column.name).is_none() {
                    continue; // Not a primary-key column.
                }
                rows.push(self.constraint_column_usage_row(
                    self.self_schema_value(),
                    info_table.name(),
                    &column.name,
                    self.self_schema_value(),
                    primary_key_name(info_table.name()),
                ));
            }
        }

        for info_table in self.tables() {
            for column in info_table.columns() {
                let meta = metadata::column_metadata(info_table.name(), &column.name);
                if meta.is_nullable() {
                    continue;
                }
                rows.push(self.constraint_column_usage_row(
                    self.self_schema_value(),
                    info_table.name(),
                    &column.name,
                    self.self_schema_value(),
                    check_not_null_name(info_table.name(), &column.name),
                ));
            }
        }

        rows
    }

    fn rows_for_views(&self, schema: &Schema) -> Vec<Row> {
        let table = self.declared(VIEWS);
        let mut rows = Vec::new();

        for view in schema.views() {
            let mut overrides = Overrides::new();
            overrides.insert(TABLE_CATALOG, self.catalog_value());
            overrides.insert(TABLE_SCHEMA, self.user_schema_value());
            overrides.insert(TABLE_NAME, Value::string(&view.name));
            overrides.insert(VIEW_DEFINITION, Value::string(&view.definition));
            rows.push(row_from_overrides(table.name(), table.columns(), &overrides));
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, KeyColumn, Table};

    fn one_table_schema() -> Schema {
        let mut t = Table::new("Users");
        t.columns = vec![Column::new("id", ScalarType::Int64).not_null()];
        t.primary_key = vec![KeyColumn::asc("id")];
        Schema::builder().table(t).finish().unwrap()
    }

    #[test]
    fn declares_all_sixteen_tables() {
        let catalog = InformationSchemaCatalog::with_dialect(Dialect::Native, &one_table_schema());
        assert_eq!(catalog.tables().len(), 16);
        for name in [
            SCHEMATA,
            DATABASE_OPTIONS,
            SPANNER_STATISTICS,
            TABLES,
            COLUMNS,
            COLUMN_COLUMN_USAGE,
            VIEWS,
            INDEXES,
            INDEX_COLUMNS,
            COLUMN_OPTIONS,
            TABLE_CONSTRAINTS,
            CHECK_CONSTRAINTS,
            CONSTRAINT_TABLE_USAGE,
            REFERENTIAL_CONSTRAINTS,
            KEY_COLUMN_USAGE,
            CONSTRAINT_COLUMN_USAGE,
        ] {
            assert!(catalog.table(name).is_some(), "{} missing", name);
        }
    }

    #[test]
    fn every_table_is_populated_after_build() {
        let catalog = InformationSchemaCatalog::with_dialect(Dialect::Native, &one_table_schema());
        for table in catalog.tables() {
            assert!(table.is_populated(), "{} not populated", table.name());
        }
    }

    #[test]
    fn postgres_dialect_exposes_lowered_names() {
        let catalog =
            InformationSchemaCatalog::with_dialect(Dialect::Postgres, &one_table_schema());
        assert_eq!(catalog.schema_name(), "information_schema");
        assert!(catalog.table("tables").is_some());
        assert!(catalog.table("TABLES").is_none());
    }

    #[test]
    fn strip_outer_parens_unwraps_generated_expressions() {
        assert_eq!(strip_outer_parens("(a + b)"), "a + b");
        assert_eq!(strip_outer_parens("a + b"), "a + b");
    }
}
