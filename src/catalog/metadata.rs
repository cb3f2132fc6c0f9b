//! Static column metadata for the introspection tables themselves.
//!
//! Every introspection table, including the hand-declared ones, is
//! described here so the catalog can answer questions about its own
//! shape (its columns, their nullability, its primary-key layout). The
//! registry and the code consuming it are kept in lock-step at build
//! time: a lookup miss is a programming defect and aborts.

use once_cell::sync::Lazy;
use std::collections::HashMap;

// Introspection namespace and table names, upper-case canonical.
pub const INFORMATION_SCHEMA: &str = "INFORMATION_SCHEMA";
pub const SCHEMATA: &str = "SCHEMATA";
pub const DATABASE_OPTIONS: &str = "DATABASE_OPTIONS";
pub const SPANNER_STATISTICS: &str = "SPANNER_STATISTICS";
pub const TABLES: &str = "TABLES";
pub const COLUMNS: &str = "COLUMNS";
pub const COLUMN_COLUMN_USAGE: &str = "COLUMN_COLUMN_USAGE";
pub const VIEWS: &str = "VIEWS";
pub const INDEXES: &str = "INDEXES";
pub const INDEX_COLUMNS: &str = "INDEX_COLUMNS";
pub const COLUMN_OPTIONS: &str = "COLUMN_OPTIONS";
pub const TABLE_CONSTRAINTS: &str = "TABLE_CONSTRAINTS";
pub const CHECK_CONSTRAINTS: &str = "CHECK_CONSTRAINTS";
pub const CONSTRAINT_TABLE_USAGE: &str = "CONSTRAINT_TABLE_USAGE";
pub const REFERENTIAL_CONSTRAINTS: &str = "REFERENTIAL_CONSTRAINTS";
pub const KEY_COLUMN_USAGE: &str = "KEY_COLUMN_USAGE";
pub const CONSTRAINT_COLUMN_USAGE: &str = "CONSTRAINT_COLUMN_USAGE";

// Column names, upper-case canonical. These constants are the only
// legal keys of a default-row override map.
pub const CATALOG_NAME: &str = "CATALOG_NAME";
pub const SCHEMA_NAME: &str = "SCHEMA_NAME";
pub const EFFECTIVE_TIMESTAMP: &str = "EFFECTIVE_TIMESTAMP";
pub const OPTION_NAME: &str = "OPTION_NAME";
pub const OPTION_TYPE: &str = "OPTION_TYPE";
pub const OPTION_VALUE: &str = "OPTION_VALUE";
pub const PACKAGE_NAME: &str = "PACKAGE_NAME";
pub const ALLOW_GC: &str = "ALLOW_GC";
pub const TABLE_CATALOG: &str = "TABLE_CATALOG";
pub const TABLE_SCHEMA: &str = "TABLE_SCHEMA";
pub const TABLE_NAME: &str = "TABLE_NAME";
pub const TABLE_TYPE: &str = "TABLE_TYPE";
pub const PARENT_TABLE_NAME: &str = "PARENT_TABLE_NAME";
pub const ON_DELETE_ACTION: &str = "ON_DELETE_ACTION";
pub const SPANNER_STATE: &str = "SPANNER_STATE";
pub const INTERLEAVE_TYPE: &str = "INTERLEAVE_TYPE";
pub const ROW_DELETION_POLICY_EXPRESSION: &str = "ROW_DELETION_POLICY_EXPRESSION";
pub const COLUMN_NAME: &str = "COLUMN_NAME";
pub const ORDINAL_POSITION: &str = "ORDINAL_POSITION";
pub const COLUMN_DEFAULT: &str = "COLUMN_DEFAULT";
pub const DATA_TYPE: &str = "DATA_TYPE";
pub const IS_NULLABLE: &str = "IS_NULLABLE";
pub const SPANNER_TYPE: &str = "SPANNER_TYPE";
pub const IS_GENERATED: &str = "IS_GENERATED";
pub const GENERATION_EXPRESSION: &str = "GENERATION_EXPRESSION";
pub const IS_STORED: &str = "IS_STORED";
pub const CHARACTER_MAXIMUM_LENGTH: &str = "CHARACTER_MAXIMUM_LENGTH";
pub const NUMERIC_PRECISION: &str = "NUMERIC_PRECISION";
pub const NUMERIC_PRECISION_RADIX: &str = "NUMERIC_PRECISION_RADIX";
pub const NUMERIC_SCALE: &str = "NUMERIC_SCALE";
pub const DEPENDENT_COLUMN: &str = "DEPENDENT_COLUMN";
pub const VIEW_DEFINITION: &str = "VIEW_DEFINITION";
pub const INDEX_NAME: &str = "INDEX_NAME";
pub const INDEX_TYPE: &str = "INDEX_TYPE";
pub const IS_UNIQUE: &str = "IS_UNIQUE";
pub const IS_NULL_FILTERED: &str = "IS_NULL_FILTERED";
pub const INDEX_STATE: &str = "INDEX_STATE";
pub const SPANNER_IS_MANAGED: &str = "SPANNER_IS_MANAGED";
pub const COLUMN_ORDERING: &str = "COLUMN_ORDERING";
pub const CONSTRAINT_CATALOG: &str = "CONSTRAINT_CATALOG";
pub const CONSTRAINT_SCHEMA: &str = "CONSTRAINT_SCHEMA";
pub const CONSTRAINT_NAME: &str = "CONSTRAINT_NAME";
pub const CONSTRAINT_TYPE: &str = "CONSTRAINT_TYPE";
pub const IS_DEFERRABLE: &str = "IS_DEFERRABLE";
pub const INITIALLY_DEFERRED: &str = "INITIALLY_DEFERRED";
pub const ENFORCED: &str = "ENFORCED";
pub const CHECK_CLAUSE: &str = "CHECK_CLAUSE";
pub const UNIQUE_CONSTRAINT_CATALOG: &str = "UNIQUE_CONSTRAINT_CATALOG";
pub const UNIQUE_CONSTRAINT_SCHEMA: &str = "UNIQUE_CONSTRAINT_SCHEMA";
pub const UNIQUE_CONSTRAINT_NAME: &str = "UNIQUE_CONSTRAINT_NAME";
pub const MATCH_OPTION: &str = "MATCH_OPTION";
pub const UPDATE_RULE: &str = "UPDATE_RULE";
pub const DELETE_RULE: &str = "DELETE_RULE";
pub const POSITION_IN_UNIQUE_CONSTRAINT: &str = "POSITION_IN_UNIQUE_CONSTRAINT";

pub const YES: &str = "YES";
pub const NO: &str = "NO";

const STRING_MAX: &str = "STRING(MAX)";
const INT64: &str = "INT64";
const BOOL: &str = "BOOL";
const TIMESTAMP: &str = "TIMESTAMP";

/// Shape of one column of one introspection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnsMetaEntry {
    pub table_name: &'static str,
    pub column_name: &'static str,
    pub spanner_type: &'static str,
    pub is_nullable: &'static str,
}

impl ColumnsMetaEntry {
    pub fn is_nullable(&self) -> bool {
        self.is_nullable == YES
    }
}

/// One primary-key column of one introspection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexColumnsMetaEntry {
    pub table_name: &'static str,
    pub column_name: &'static str,
    pub column_ordering: &'static str,
    pub is_nullable: &'static str,
    pub spanner_type: &'static str,
    pub primary_key_ordinal: i64,
}

const fn col(
    table_name: &'static str,
    column_name: &'static str,
    spanner_type: &'static str,
    is_nullable: &'static str,
) -> ColumnsMetaEntry {
    ColumnsMetaEntry { table_name, column_name, spanner_type, is_nullable }
}

const fn key(
    table_name: &'static str,
    column_name: &'static str,
    primary_key_ordinal: i64,
) -> IndexColumnsMetaEntry {
    // Every introspection-table key column is an ascending, non-null string.
    IndexColumnsMetaEntry {
        table_name,
        column_name,
        column_ordering: "ASC",
        is_nullable: NO,
        spanner_type: STRING_MAX,
        primary_key_ordinal,
    }
}

/// Columns of every introspection table, in declaration order.
pub const COLUMNS_METADATA: &[ColumnsMetaEntry] = &[
    col(SCHEMATA, CATALOG_NAME, STRING_MAX, NO),
    col(SCHEMATA, SCHEMA_NAME, STRING_MAX, NO),
    col(SCHEMATA, EFFECTIVE_TIMESTAMP, TIMESTAMP, YES),
    col(DATABASE_OPTIONS, CATALOG_NAME, STRING_MAX, NO),
    col(DATABASE_OPTIONS, SCHEMA_NAME, STRING_MAX, NO),
    col(DATABASE_OPTIONS, OPTION_NAME, STRING_MAX, NO),
    col(DATABASE_OPTIONS, OPTION_TYPE, STRING_MAX, NO),
    col(DATABASE_OPTIONS, OPTION_VALUE, STRING_MAX, NO),
    col(SPANNER_STATISTICS, CATALOG_NAME, STRING_MAX, NO),
    col(SPANNER_STATISTICS, SCHEMA_NAME, STRING_MAX, NO),
    col(SPANNER_STATISTICS, PACKAGE_NAME, STRING_MAX, NO),
    col(SPANNER_STATISTICS, ALLOW_GC, BOOL, NO),
    col(TABLES, TABLE_CATALOG, STRING_MAX, NO),
    col(TABLES, TABLE_SCHEMA, STRING_MAX, NO),
    col(TABLES, TABLE_NAME, STRING_MAX, NO),
    col(TABLES, TABLE_TYPE, STRING_MAX, NO),
    col(TABLES, PARENT_TABLE_NAME, STRING_MAX, YES),
    col(TABLES, ON_DELETE_ACTION, STRING_MAX, YES),
    col(TABLES, SPANNER_STATE, STRING_MAX, YES),
    col(TABLES, INTERLEAVE_TYPE, STRING_MAX, YES),
    col(TABLES, ROW_DELETION_POLICY_EXPRESSION, STRING_MAX, YES),
    col(COLUMNS, TABLE_CATALOG, STRING_MAX, NO),
    col(COLUMNS, TABLE_SCHEMA, STRING_MAX, NO),
    col(COLUMNS, TABLE_NAME, STRING_MAX, NO),
    col(COLUMNS, COLUMN_NAME, STRING_MAX, NO),
    col(COLUMNS, ORDINAL_POSITION, INT64, NO),
    col(COLUMNS, COLUMN_DEFAULT, STRING_MAX, YES),
    col(COLUMNS, DATA_TYPE, STRING_MAX, YES),
    col(COLUMNS, IS_NULLABLE, STRING_MAX, YES),
    col(COLUMNS, SPANNER_TYPE, STRING_MAX, YES),
    col(COLUMNS, IS_GENERATED, STRING_MAX, NO),
    col(COLUMNS, GENERATION_EXPRESSION, STRING_MAX, YES),
    col(COLUMNS, IS_STORED, STRING_MAX, YES),
    col(COLUMNS, SPANNER_STATE, STRING_MAX, YES),
    col(COLUMNS, CHARACTER_MAXIMUM_LENGTH, INT64, YES),
    col(COLUMNS, NUMERIC_PRECISION, INT64, YES),
    col(COLUMNS, NUMERIC_PRECISION_RADIX, INT64, YES),
    col(COLUMNS, NUMERIC_SCALE, INT64, YES),
    col(COLUMN_COLUMN_USAGE, TABLE_CATALOG, STRING_MAX, NO),
    col(COLUMN_COLUMN_USAGE, TABLE_SCHEMA, STRING_MAX, NO),
    col(COLUMN_COLUMN_USAGE, TABLE_NAME, STRING_MAX, NO),
    col(COLUMN_COLUMN_USAGE, COLUMN_NAME, STRING_MAX, NO),
    col(COLUMN_COLUMN_USAGE, DEPENDENT_COLUMN, STRING_MAX, NO),
    col(VIEWS, TABLE_CATALOG, STRING_MAX, NO),
    col(VIEWS, TABLE_SCHEMA, STRING_MAX, NO),
    col(VIEWS, TABLE_NAME, STRING_MAX, NO),
    col(VIEWS, VIEW_DEFINITION, STRING_MAX, YES),
    col(INDEXES, TABLE_CATALOG, STRING_MAX, NO),
    col(INDEXES, TABLE_SCHEMA, STRING_MAX, NO),
    col(INDEXES, TABLE_NAME, STRING_MAX, NO),
    col(INDEXES, INDEX_NAME, STRING_MAX, NO),
    col(INDEXES, INDEX_TYPE, STRING_MAX, NO),
    col(INDEXES, PARENT_TABLE_NAME, STRING_MAX, NO),
    col(INDEXES, IS_UNIQUE, BOOL, NO),
    col(INDEXES, IS_NULL_FILTERED, BOOL, NO),
    col(INDEXES, INDEX_STATE, STRING_MAX, YES),
    col(INDEXES, SPANNER_IS_MANAGED, BOOL, NO),
    col(INDEX_COLUMNS, TABLE_CATALOG, STRING_MAX, NO),
    col(INDEX_COLUMNS, TABLE_SCHEMA, STRING_MAX, NO),
    col(INDEX_COLUMNS, TABLE_NAME, STRING_MAX, NO),
    col(INDEX_COLUMNS, INDEX_NAME, STRING_MAX, NO),
    col(INDEX_COLUMNS, INDEX_TYPE, STRING_MAX, NO),
    col(INDEX_COLUMNS, COLUMN_NAME, STRING_MAX, NO),
    col(INDEX_COLUMNS, ORDINAL_POSITION, INT64, YES),
    col(INDEX_COLUMNS, COLUMN_ORDERING, STRING_MAX, YES),
    col(INDEX_COLUMNS, IS_NULLABLE, STRING_MAX, YES),
    col(INDEX_COLUMNS, SPANNER_TYPE, STRING_MAX, YES),
    col(COLUMN_OPTIONS, TABLE_CATALOG, STRING_MAX, NO),
    col(COLUMN_OPTIONS, TABLE_SCHEMA, STRING_MAX, NO),
    col(COLUMN_OPTIONS, TABLE_NAME, STRING_MAX, NO),
    col(COLUMN_OPTIONS, COLUMN_NAME, STRING_MAX, NO),
    col(COLUMN_OPTIONS, OPTION_NAME, STRING_MAX, NO),
    col(COLUMN_OPTIONS, OPTION_TYPE, STRING_MAX, NO),
    col(COLUMN_OPTIONS, OPTION_VALUE, STRING_MAX, NO),
    col(TABLE_CONSTRAINTS, CONSTRAINT_CATALOG, STRING_MAX, NO),
    col(TABLE_CONSTRAINTS, CONSTRAINT_SCHEMA, STRING_MAX, NO),
    col(TABLE_CONSTRAINTS, CONSTRAINT_NAME, STRING_MAX, NO),
    col(TABLE_CONSTRAINTS, TABLE_CATALOG, STRING_MAX, NO),
    col(TABLE_CONSTRAINTS, TABLE_SCHEMA, STRING_MAX, NO),
    col(TABLE_CONSTRAINTS, TABLE_NAME, STRING_MAX, NO),
    col(TABLE_CONSTRAINTS, CONSTRAINT_TYPE, STRING_MAX, NO),
    col(TABLE_CONSTRAINTS, IS_DEFERRABLE, STRING_MAX, NO),
    col(TABLE_CONSTRAINTS, INITIALLY_DEFERRED, STRING_MAX, NO),
    col(TABLE_CONSTRAINTS, ENFORCED, STRING_MAX, NO),
    col(CHECK_CONSTRAINTS, CONSTRAINT_CATALOG, STRING_MAX, NO),
    col(CHECK_CONSTRAINTS, CONSTRAINT_SCHEMA, STRING_MAX, NO),
    col(CHECK_CONSTRAINTS, CONSTRAINT_NAME, STRING_MAX, NO),
    col(CHECK_CONSTRAINTS, CHECK_CLAUSE, STRING_MAX, NO),
    col(CHECK_CONSTRAINTS, SPANNER_STATE, STRING_MAX, NO),
    col(CONSTRAINT_TABLE_USAGE, TABLE_CATALOG, STRING_MAX, NO),
    col(CONSTRAINT_TABLE_USAGE, TABLE_SCHEMA, STRING_MAX, NO),
    col(CONSTRAINT_TABLE_USAGE, TABLE_NAME, STRING_MAX, NO),
    col(CONSTRAINT_TABLE_USAGE, CONSTRAINT_CATALOG, STRING_MAX, NO),
    col(CONSTRAINT_TABLE_USAGE, CONSTRAINT_SCHEMA, STRING_MAX, NO),
    col(CONSTRAINT_TABLE_USAGE, CONSTRAINT_NAME, STRING_MAX, NO),
    col(REFERENTIAL_CONSTRAINTS, CONSTRAINT_CATALOG, STRING_MAX, NO),
    col(REFERENTIAL_CONSTRAINTS, CONSTRAINT_SCHEMA, STRING_MAX, NO),
    col(REFERENTIAL_CONSTRAINTS, CONSTRAINT_NAME, STRING_MAX, NO),
    col(REFERENTIAL_CONSTRAINTS, UNIQUE_CONSTRAINT_CATALOG, STRING_MAX, YES),
    col(REFERENTIAL_CONSTRAINTS, UNIQUE_CONSTRAINT_SCHEMA, STRING_MAX, YES),
    col(REFERENTIAL_CONSTRAINTS, UNIQUE_CONSTRAINT_NAME, STRING_MAX, YES),
    col(REFERENTIAL_CONSTRAINTS, MATCH_OPTION, STRING_MAX, YES),
    col(REFERENTIAL_CONSTRAINTS, UPDATE_RULE, STRING_MAX, YES),
    col(REFERENTIAL_CONSTRAINTS, DELETE_RULE, STRING_MAX, YES),
    col(REFERENTIAL_CONSTRAINTS, SPANNER_STATE, STRING_MAX, YES),
    col(KEY_COLUMN_USAGE, CONSTRAINT_CATALOG, STRING_MAX, NO),
    col(KEY_COLUMN_USAGE, CONSTRAINT_SCHEMA, STRING_MAX, NO),
    col(KEY_COLUMN_USAGE, CONSTRAINT_NAME, STRING_MAX, NO),
    col(KEY_COLUMN_USAGE, TABLE_CATALOG, STRING_MAX, NO),
    col(KEY_COLUMN_USAGE, TABLE_SCHEMA, STRING_MAX, NO),
    col(KEY_COLUMN_USAGE, TABLE_NAME, STRING_MAX, NO),
    col(KEY_COLUMN_USAGE, COLUMN_NAME, STRING_MAX, NO),
    col(KEY_COLUMN_USAGE, ORDINAL_POSITION, INT64, NO),
    col(KEY_COLUMN_USAGE, POSITION_IN_UNIQUE_CONSTRAINT, INT64, YES),
    col(CONSTRAINT_COLUMN_USAGE, TABLE_CATALOG, STRING_MAX, NO),
    col(CONSTRAINT_COLUMN_USAGE, TABLE_SCHEMA, STRING_MAX, NO),
    col(CONSTRAINT_COLUMN_USAGE, TABLE_NAME, STRING_MAX, NO),
    col(CONSTRAINT_COLUMN_USAGE, COLUMN_NAME, STRING_MAX, NO),
    col(CONSTRAINT_COLUMN_USAGE, CONSTRAINT_CATALOG, STRING_MAX, NO),
    col(CONSTRAINT_COLUMN_USAGE, CONSTRAINT_SCHEMA, STRING_MAX, NO),
    col(CONSTRAINT_COLUMN_USAGE, CONSTRAINT_NAME, STRING_MAX, NO),
];

/// Primary-key columns of every introspection table.
pub const INDEX_COLUMNS_METADATA: &[IndexColumnsMetaEntry] = &[
    key(SCHEMATA, CATALOG_NAME, 1),
    key(SCHEMATA, SCHEMA_NAME, 2),
    key(DATABASE_OPTIONS, CATALOG_NAME, 1),
    key(DATABASE_OPTIONS, SCHEMA_NAME, 2),
    key(DATABASE_OPTIONS, OPTION_NAME, 3),
    key(SPANNER_STATISTICS, CATALOG_NAME, 1),
    key(SPANNER_STATISTICS, SCHEMA_NAME, 2),
    key(SPANNER_STATISTICS, PACKAGE_NAME, 3),
    key(TABLES, TABLE_CATALOG, 1),
    key(TABLES, TABLE_SCHEMA, 2),
    key(TABLES, TABLE_NAME, 3),
    key(COLUMNS, TABLE_CATALOG, 1),
    key(COLUMNS, TABLE_SCHEMA, 2),
    key(COLUMNS, TABLE_NAME, 3),
    key(COLUMNS, COLUMN_NAME, 4),
    key(COLUMN_COLUMN_USAGE, TABLE_CATALOG, 1),
    key(COLUMN_COLUMN_USAGE, TABLE_SCHEMA, 2),
    key(COLUMN_COLUMN_USAGE, TABLE_NAME, 3),
    key(COLUMN_COLUMN_USAGE, COLUMN_NAME, 4),
    key(COLUMN_COLUMN_USAGE, DEPENDENT_COLUMN, 5),
    key(VIEWS, TABLE_CATALOG, 1),
    key(VIEWS, TABLE_SCHEMA, 2),
    key(VIEWS, TABLE_NAME, 3),
    key(INDEXES, TABLE_CATALOG, 1),
    key(INDEXES, TABLE_SCHEMA, 2),
    key(INDEXES, TABLE_NAME, 3),
    key(INDEXES, INDEX_NAME, 4),
    key(INDEXES, INDEX_TYPE, 5),
    key(INDEX_COLUMNS, TABLE_CATALOG, 1),
    key(INDEX_COLUMNS, TABLE_SCHEMA, 2),
    key(INDEX_COLUMNS, TABLE_NAME, 3),
    key(INDEX_COLUMNS, INDEX_NAME, 4),
    key(INDEX_COLUMNS, INDEX_TYPE, 5),
    key(INDEX_COLUMNS, COLUMN_NAME, 6),
    key(COLUMN_OPTIONS, TABLE_CATALOG, 1),
    key(COLUMN_OPTIONS, TABLE_SCHEMA, 2),
    key(COLUMN_OPTIONS, TABLE_NAME, 3),
    key(COLUMN_OPTIONS, COLUMN_NAME, 4),
    key(COLUMN_OPTIONS, OPTION_NAME, 5),
    key(TABLE_CONSTRAINTS, CONSTRAINT_CATALOG, 1),
    key(TABLE_CONSTRAINTS, CONSTRAINT_SCHEMA, 2),
    key(TABLE_CONSTRAINTS, CONSTRAINT_NAME, 3),
    key(CHECK_CONSTRAINTS, CONSTRAINT_CATALOG, 1),
    key(CHECK_CONSTRAINTS, CONSTRAINT_SCHEMA, 2),
    key(CHECK_CONSTRAINTS, CONSTRAINT_NAME, 3),
    key(CONSTRAINT_TABLE_USAGE, TABLE_CATALOG, 1),
    key(CONSTRAINT_TABLE_USAGE, TABLE_SCHEMA, 2),
    key(CONSTRAINT_TABLE_USAGE, TABLE_NAME, 3),
    key(CONSTRAINT_TABLE_USAGE, CONSTRAINT_CATALOG, 4),
    key(CONSTRAINT_TABLE_USAGE, CONSTRAINT_SCHEMA, 5),
    key(CONSTRAINT_TABLE_USAGE, CONSTRAINT_NAME, 6),
    key(REFERENTIAL_CONSTRAINTS, CONSTRAINT_CATALOG, 1),
    key(REFERENTIAL_CONSTRAINTS, CONSTRAINT_SCHEMA, 2),
    key(REFERENTIAL_CONSTRAINTS, CONSTRAINT_NAME, 3),
    key(KEY_COLUMN_USAGE, CONSTRAINT_CATALOG, 1),
    key(KEY_COLUMN_USAGE, CONSTRAINT_SCHEMA, 2),
    key(KEY_COLUMN_USAGE, CONSTRAINT_NAME, 3),
    key(KEY_COLUMN_USAGE, COLUMN_NAME, 4),
    key(CONSTRAINT_COLUMN_USAGE, TABLE_CATALOG, 1),
    key(CONSTRAINT_COLUMN_USAGE, TABLE_SCHEMA, 2),
    key(CONSTRAINT_COLUMN_USAGE, TABLE_NAME, 3),
    key(CONSTRAINT_COLUMN_USAGE, COLUMN_NAME, 4),
    key(CONSTRAINT_COLUMN_USAGE, CONSTRAINT_CATALOG, 5),
    key(CONSTRAINT_COLUMN_USAGE, CONSTRAINT_SCHEMA, 6),
    key(CONSTRAINT_COLUMN_USAGE, CONSTRAINT_NAME, 7),
];

static COLUMNS_BY_TABLE: Lazy<HashMap<&'static str, Vec<&'static ColumnsMetaEntry>>> =
    Lazy::new(|| {
        let mut map: HashMap<&'static str, Vec<&'static ColumnsMetaEntry>> = HashMap::new();
        for entry in COLUMNS_METADATA {
            map.entry(entry.table_name).or_default().push(entry);
        }
        map
    });

static COLUMN_INDEX: Lazy<HashMap<&'static str, HashMap<&'static str, &'static ColumnsMetaEntry>>> =
    Lazy::new(|| {
        let mut map: HashMap<&'static str, HashMap<&'static str, &'static ColumnsMetaEntry>> =
            HashMap::new();
        for entry in COLUMNS_METADATA {
            map.entry(entry.table_name).or_default().insert(entry.column_name, entry);
        }
        map
    });

static KEY_COLUMN_INDEX: Lazy<
    HashMap<&'static str, HashMap<&'static str, &'static IndexColumnsMetaEntry>>,
> = Lazy::new(|| {
    let mut map: HashMap<&'static str, HashMap<&'static str, &'static IndexColumnsMetaEntry>> =
        HashMap::new();
    for entry in INDEX_COLUMNS_METADATA {
        map.entry(entry.table_name).or_default().insert(entry.column_name, entry);
    }
    map
});

/// Registry entries for one introspection table, in declaration order.
/// `None` for a table the registry does not describe.
pub fn registry_columns(table_name: &str) -> Option<&'static [&'static ColumnsMetaEntry]> {
    let canonical = table_name.to_ascii_uppercase();
    COLUMNS_BY_TABLE.get(canonical.as_str()).map(|v| v.as_slice())
}

/// Metadata for one introspection-table column. Names are canonicalized
/// to upper case, so dialect-lowered names resolve to the same entry.
///
/// Panics when the pair is unknown: the registry and the consuming code
/// are kept in lock-step at build time, so a miss is a programming
/// defect, not bad input.
pub fn column_metadata(table_name: &str, column_name: &str) -> &'static ColumnsMetaEntry {
    let table = table_name.to_ascii_uppercase();
    let column = column_name.to_ascii_uppercase();
    COLUMN_INDEX
        .get(table.as_str())
        .and_then(|by_column| by_column.get(column.as_str()))
        .unwrap_or_else(|| {
            panic!("missing metadata for column {}.{}", table_name, column_name)
        })
}

/// Primary-key metadata for one introspection-table column, or `None`
/// when the column is not part of its table's key.
pub fn find_key_column_metadata(
    table_name: &str,
    column_name: &str,
) -> Option<&'static IndexColumnsMetaEntry> {
    let table = table_name.to_ascii_uppercase();
    let column = column_name.to_ascii_uppercase();
    KEY_COLUMN_INDEX
        .get(table.as_str())
        .and_then(|by_column| by_column.get(column.as_str()))
        .copied()
}
