//! End-to-end catalog synthesis over a representative schema: two
//! interrelated tables, a view, generated and commit-timestamp columns,
//! secondary indexes, check constraints and foreign keys.

use infoschema::catalog::row::{Row, Value};
use infoschema::catalog::table::InfoTable;
use infoschema::schema::{
    CheckConstraint, Column, ForeignKey, Index, KeyColumn, OnDeleteAction, RowDeletionPolicy,
    Schema, Table, View, ViewColumn,
};
use infoschema::types::ScalarType;
use infoschema::{Dialect, InformationSchemaCatalog};

fn fixture_schema() -> Schema {
    let mut users = Table::new("Users");
    users.columns = vec![
        Column::new("id", ScalarType::Int64).not_null(),
        Column::new("name", ScalarType::String).not_null().with_max_length(64),
        Column::new("nick", ScalarType::String).with_default("'anonymous'"),
        Column::new("created", ScalarType::Timestamp).commit_timestamp(),
        Column::new("bio", ScalarType::String).generated("(LOWER(name))", &["name"]),
    ];
    users.primary_key = vec![KeyColumn::asc("id")];
    users.indexes = vec![Index {
        name: "IDX_Users_Name".into(),
        key_columns: vec![KeyColumn::desc("name")],
        storing_columns: vec!["nick".into()],
        unique: true,
        null_filtered: false,
        managed: false,
        parent: None,
    }];
    users.check_constraints = vec![CheckConstraint {
        name: "CK_Users_IdPositive".into(),
        expression: "id > 0".into(),
        dependent_columns: vec!["id".into()],
    }];

    let mut orders = Table::new("Orders");
    orders.columns = vec![
        Column::new("order_id", ScalarType::Int64).not_null(),
        Column::new("user_id", ScalarType::Int64).not_null(),
        Column::new("user_name", ScalarType::String).with_max_length(64),
        Column::new("created_at", ScalarType::Timestamp),
    ];
    orders.primary_key = vec![KeyColumn::asc("order_id")];
    orders.parent = Some("Users".into());
    orders.on_delete_action = Some(OnDeleteAction::Cascade);
    orders.row_deletion_policy =
        Some(RowDeletionPolicy { column: "created_at".into(), older_than_days: 30 });
    orders.foreign_keys = vec![
        ForeignKey {
            name: "FK_Orders_Users".into(),
            referencing_columns: vec!["user_id".into()],
            referenced_table: "Users".into(),
            referenced_columns: vec!["id".into()],
            referenced_index: None,
        },
        ForeignKey {
            name: "FK_Orders_UserNames".into(),
            referencing_columns: vec!["user_name".into()],
            referenced_table: "Users".into(),
            referenced_columns: vec!["name".into()],
            referenced_index: Some("IDX_Users_Name".into()),
        },
    ];

    let view = View {
        name: "ActiveUsers".into(),
        definition: "SELECT id, name FROM Users".into(),
        columns: vec![
            ViewColumn { name: "id".into(), ty: ScalarType::Int64 },
            ViewColumn { name: "name".into(), ty: ScalarType::String },
        ],
    };

    Schema::builder().table(users).table(orders).view(view).finish().unwrap()
}

fn native_catalog() -> InformationSchemaCatalog {
    // RUST_LOG=infoschema=debug surfaces the per-table fill counts.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    InformationSchemaCatalog::with_dialect(Dialect::Native, &fixture_schema())
}

fn col(table: &InfoTable, name: &str) -> usize {
    table
        .columns()
        .iter()
        .position(|c| c.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(|| panic!("no column {} in {}", name, table.name()))
}

fn text(value: &Value) -> &str {
    value.as_str().unwrap_or_else(|| panic!("expected string value, got {:?}", value))
}

fn rows_where<'a>(table: &'a InfoTable, column: &str, value: &str) -> Vec<&'a Row> {
    let j = col(table, column);
    table.rows().iter().filter(|r| r[j].as_str() == Some(value)).collect()
}

#[test]
fn tables_catalog_lists_user_tables_views_and_self() {
    let catalog = native_catalog();
    let tables = catalog.table("TABLES").unwrap();

    let users = rows_where(tables, "TABLE_NAME", "Users");
    assert_eq!(users.len(), 1);
    assert_eq!(text(&users[0][col(tables, "TABLE_TYPE")]), "BASE TABLE");
    assert_eq!(text(&users[0][col(tables, "SPANNER_STATE")]), "COMMITTED");
    assert!(users[0][col(tables, "PARENT_TABLE_NAME")].is_null());
    assert!(users[0][col(tables, "INTERLEAVE_TYPE")].is_null());

    let view_rows = rows_where(tables, "TABLE_NAME", "ActiveUsers");
    assert_eq!(view_rows.len(), 1);
    assert_eq!(text(&view_rows[0][col(tables, "TABLE_TYPE")]), "VIEW");

    // 2 user tables + 1 view + 16 introspection tables.
    infoschema::tprintln!("[catalog_tests] TABLES rows={}", tables.rows().len());
    assert_eq!(tables.rows().len(), 19);
}

#[test]
fn interleaved_table_reports_parent_and_policy() {
    let catalog = native_catalog();
    let tables = catalog.table("TABLES").unwrap();

    let orders = rows_where(tables, "TABLE_NAME", "Orders");
    assert_eq!(orders.len(), 1);
    let row = orders[0];
    assert_eq!(text(&row[col(tables, "PARENT_TABLE_NAME")]), "Users");
    assert_eq!(text(&row[col(tables, "ON_DELETE_ACTION")]), "CASCADE");
    assert_eq!(text(&row[col(tables, "INTERLEAVE_TYPE")]), "IN PARENT");
    assert_eq!(
        text(&row[col(tables, "ROW_DELETION_POLICY_EXPRESSION")]),
        "OLDER_THAN(created_at, INTERVAL 30 DAY)"
    );
}

#[test]
fn columns_catalog_reports_ordinals_and_types() {
    let catalog = native_catalog();
    let columns = catalog.table("COLUMNS").unwrap();

    let users_rows = rows_where(columns, "TABLE_NAME", "Users");
    assert_eq!(users_rows.len(), 5);

    let name_row = users_rows
        .iter()
        .find(|r| r[col(columns, "COLUMN_NAME")].as_str() == Some("name"))
        .unwrap();
    assert_eq!(name_row[col(columns, "ORDINAL_POSITION")].as_i64(), Some(2));
    assert_eq!(text(&name_row[col(columns, "IS_NULLABLE")]), "NO");
    assert_eq!(text(&name_row[col(columns, "SPANNER_TYPE")]), "STRING(64)");
    assert_eq!(text(&name_row[col(columns, "IS_GENERATED")]), "NEVER");

    let bio_row = users_rows
        .iter()
        .find(|r| r[col(columns, "COLUMN_NAME")].as_str() == Some("bio"))
        .unwrap();
    assert_eq!(text(&bio_row[col(columns, "IS_GENERATED")]), "ALWAYS");
    assert_eq!(text(&bio_row[col(columns, "GENERATION_EXPRESSION")]), "LOWER(name)");
    assert_eq!(text(&bio_row[col(columns, "IS_STORED")]), "YES");

    let nick_row = users_rows
        .iter()
        .find(|r| r[col(columns, "COLUMN_NAME")].as_str() == Some("nick"))
        .unwrap();
    assert_eq!(text(&nick_row[col(columns, "COLUMN_DEFAULT")]), "'anonymous'");
    assert_eq!(text(&nick_row[col(columns, "IS_NULLABLE")]), "YES");
}

#[test]
fn generated_column_dependencies_land_in_column_column_usage() {
    let catalog = native_catalog();
    let usage = catalog.table("COLUMN_COLUMN_USAGE").unwrap();

    assert_eq!(usage.rows().len(), 1);
    let row = &usage.rows()[0];
    assert_eq!(text(&row[col(usage, "TABLE_NAME")]), "Users");
    assert_eq!(text(&row[col(usage, "COLUMN_NAME")]), "name");
    assert_eq!(text(&row[col(usage, "DEPENDENT_COLUMN")]), "bio");
}

#[test]
fn commit_timestamp_column_gets_a_column_option() {
    let catalog = native_catalog();
    let options = catalog.table("COLUMN_OPTIONS").unwrap();

    assert_eq!(options.rows().len(), 1);
    let row = &options.rows()[0];
    assert_eq!(text(&row[col(options, "TABLE_NAME")]), "Users");
    assert_eq!(text(&row[col(options, "COLUMN_NAME")]), "created");
    assert_eq!(text(&row[col(options, "OPTION_NAME")]), "allow_commit_timestamp");
    assert_eq!(text(&row[col(options, "OPTION_TYPE")]), "BOOL");
    assert_eq!(text(&row[col(options, "OPTION_VALUE")]), "TRUE");
}

#[test]
fn not_null_columns_synthesize_check_constraints() {
    let catalog = native_catalog();
    let checks = catalog.table("CHECK_CONSTRAINTS").unwrap();
    let constraints = catalog.table("TABLE_CONSTRAINTS").unwrap();
    let usage = catalog.table("CONSTRAINT_COLUMN_USAGE").unwrap();

    for (table, column) in
        [("Users", "id"), ("Users", "name"), ("Orders", "order_id"), ("Orders", "user_id")]
    {
        let name = format!("CK_IS_NOT_NULL_{}_{}", table, column);

        let check_rows = rows_where(checks, "CONSTRAINT_NAME", &name);
        assert_eq!(check_rows.len(), 1, "check constraint {}", name);
        assert_eq!(
            text(&check_rows[0][col(checks, "CHECK_CLAUSE")]),
            format!("{} IS NOT NULL", column)
        );

        let constraint_rows = rows_where(constraints, "CONSTRAINT_NAME", &name);
        assert_eq!(constraint_rows.len(), 1);
        assert_eq!(text(&constraint_rows[0][col(constraints, "CONSTRAINT_TYPE")]), "CHECK");
        assert_eq!(text(&constraint_rows[0][col(constraints, "TABLE_NAME")]), table);

        let usage_rows = rows_where(usage, "CONSTRAINT_NAME", &name);
        assert_eq!(usage_rows.len(), 1);
        assert_eq!(text(&usage_rows[0][col(usage, "COLUMN_NAME")]), column);
    }
}

#[test]
fn declared_check_constraint_keeps_its_expression() {
    let catalog = native_catalog();
    let checks = catalog.table("CHECK_CONSTRAINTS").unwrap();

    let rows = rows_where(checks, "CONSTRAINT_NAME", "CK_Users_IdPositive");
    assert_eq!(rows.len(), 1);
    assert_eq!(text(&rows[0][col(checks, "CHECK_CLAUSE")]), "id > 0");
}

#[test]
fn primary_keys_are_enforced_never_deferrable() {
    let catalog = native_catalog();
    let constraints = catalog.table("TABLE_CONSTRAINTS").unwrap();

    let pk = rows_where(constraints, "CONSTRAINT_NAME", "PK_Users");
    assert_eq!(pk.len(), 1);
    let row = pk[0];
    assert_eq!(text(&row[col(constraints, "CONSTRAINT_TYPE")]), "PRIMARY KEY");
    assert_eq!(text(&row[col(constraints, "TABLE_NAME")]), "Users");
    assert_eq!(text(&row[col(constraints, "IS_DEFERRABLE")]), "NO");
    assert_eq!(text(&row[col(constraints, "INITIALLY_DEFERRED")]), "NO");
    assert_eq!(text(&row[col(constraints, "ENFORCED")]), "YES");
}

#[test]
fn foreign_key_without_index_links_to_primary_key_constraint() {
    let catalog = native_catalog();
    let referential = catalog.table("REFERENTIAL_CONSTRAINTS").unwrap();

    let rows = rows_where(referential, "CONSTRAINT_NAME", "FK_Orders_Users");
    assert_eq!(rows.len(), 1);
    let row = rows[0];
    assert_eq!(text(&row[col(referential, "UNIQUE_CONSTRAINT_NAME")]), "PK_Users");
    assert_eq!(text(&row[col(referential, "MATCH_OPTION")]), "SIMPLE");
    assert_eq!(text(&row[col(referential, "UPDATE_RULE")]), "NO ACTION");
    assert_eq!(text(&row[col(referential, "DELETE_RULE")]), "NO ACTION");
}

#[test]
fn foreign_key_with_backing_index_emits_synthetic_unique_constraint() {
    let catalog = native_catalog();
    let referential = catalog.table("REFERENTIAL_CONSTRAINTS").unwrap();
    let constraints = catalog.table("TABLE_CONSTRAINTS").unwrap();

    let rows = rows_where(referential, "CONSTRAINT_NAME", "FK_Orders_UserNames");
    assert_eq!(rows.len(), 1);
    assert_eq!(text(&rows[0][col(referential, "UNIQUE_CONSTRAINT_NAME")]), "IDX_Users_Name");

    let unique = rows_where(constraints, "CONSTRAINT_NAME", "IDX_Users_Name");
    assert_eq!(unique.len(), 1);
    assert_eq!(text(&unique[0][col(constraints, "CONSTRAINT_TYPE")]), "UNIQUE");
    assert_eq!(text(&unique[0][col(constraints, "TABLE_NAME")]), "Users");
}

#[test]
fn key_column_usage_pairs_foreign_key_columns_elementwise() {
    let catalog = native_catalog();
    let kcu = catalog.table("KEY_COLUMN_USAGE").unwrap();

    // Primary key columns start at ordinal 1 with no unique-constraint position.
    let pk_rows = rows_where(kcu, "CONSTRAINT_NAME", "PK_Users");
    assert_eq!(pk_rows.len(), 1);
    assert_eq!(text(&pk_rows[0][col(kcu, "COLUMN_NAME")]), "id");
    assert_eq!(pk_rows[0][col(kcu, "ORDINAL_POSITION")].as_i64(), Some(1));
    assert!(pk_rows[0][col(kcu, "POSITION_IN_UNIQUE_CONSTRAINT")].is_null());

    // Foreign key referencing columns carry matching ordinal and position.
    let fk_rows = rows_where(kcu, "CONSTRAINT_NAME", "FK_Orders_Users");
    assert_eq!(fk_rows.len(), 1);
    assert_eq!(text(&fk_rows[0][col(kcu, "TABLE_NAME")]), "Orders");
    assert_eq!(text(&fk_rows[0][col(kcu, "COLUMN_NAME")]), "user_id");
    assert_eq!(fk_rows[0][col(kcu, "ORDINAL_POSITION")].as_i64(), Some(1));
    assert_eq!(fk_rows[0][col(kcu, "POSITION_IN_UNIQUE_CONSTRAINT")].as_i64(), Some(1));

    // The explicit backing index contributes its own key columns.
    let index_rows = rows_where(kcu, "CONSTRAINT_NAME", "IDX_Users_Name");
    assert_eq!(index_rows.len(), 1);
    assert_eq!(text(&index_rows[0][col(kcu, "TABLE_NAME")]), "Users");
    assert_eq!(text(&index_rows[0][col(kcu, "COLUMN_NAME")]), "name");
    assert!(index_rows[0][col(kcu, "POSITION_IN_UNIQUE_CONSTRAINT")].is_null());
}

#[test]
fn foreign_key_uses_referenced_table_in_table_usage() {
    let catalog = native_catalog();
    let usage = catalog.table("CONSTRAINT_TABLE_USAGE").unwrap();

    let rows = rows_where(usage, "CONSTRAINT_NAME", "FK_Orders_Users");
    assert_eq!(rows.len(), 1);
    assert_eq!(text(&rows[0][col(usage, "TABLE_NAME")]), "Users");
}

#[test]
fn foreign_key_referenced_columns_land_in_constraint_column_usage() {
    let catalog = native_catalog();
    let usage = catalog.table("CONSTRAINT_COLUMN_USAGE").unwrap();

    let rows = rows_where(usage, "CONSTRAINT_NAME", "FK_Orders_Users");
    assert_eq!(rows.len(), 1);
    assert_eq!(text(&rows[0][col(usage, "TABLE_NAME")]), "Users");
    assert_eq!(text(&rows[0][col(usage, "COLUMN_NAME")]), "id");
}

#[test]
fn secondary_indexes_and_their_columns_are_reported() {
    let catalog = native_catalog();
    let indexes = catalog.table("INDEXES").unwrap();
    let index_columns = catalog.table("INDEX_COLUMNS").unwrap();

    let idx = rows_where(indexes, "INDEX_NAME", "IDX_Users_Name");
    assert_eq!(idx.len(), 1);
    let row = idx[0];
    assert_eq!(text(&row[col(indexes, "INDEX_TYPE")]), "INDEX");
    assert_eq!(row[col(indexes, "IS_UNIQUE")], Value::Bool(true));
    assert_eq!(row[col(indexes, "IS_NULL_FILTERED")], Value::Bool(false));
    assert_eq!(text(&row[col(indexes, "INDEX_STATE")]), "READ_WRITE");
    assert_eq!(row[col(indexes, "SPANNER_IS_MANAGED")], Value::Bool(false));

    let key_rows = rows_where(index_columns, "INDEX_NAME", "IDX_Users_Name");
    assert_eq!(key_rows.len(), 2);
    let name_row = key_rows
        .iter()
        .find(|r| r[col(index_columns, "COLUMN_NAME")].as_str() == Some("name"))
        .unwrap();
    assert_eq!(text(&name_row[col(index_columns, "COLUMN_ORDERING")]), "DESC");
    assert_eq!(name_row[col(index_columns, "ORDINAL_POSITION")].as_i64(), Some(1));
    // Storing columns carry no ordinal or ordering.
    let nick_row = key_rows
        .iter()
        .find(|r| r[col(index_columns, "COLUMN_NAME")].as_str() == Some("nick"))
        .unwrap();
    assert!(nick_row[col(index_columns, "ORDINAL_POSITION")].is_null());
    assert!(nick_row[col(index_columns, "COLUMN_ORDERING")].is_null());
}

#[test]
fn every_user_table_gets_a_primary_key_pseudo_index() {
    let catalog = native_catalog();
    let indexes = catalog.table("INDEXES").unwrap();
    let index_columns = catalog.table("INDEX_COLUMNS").unwrap();

    for table in ["Users", "Orders"] {
        let rows: Vec<_> = rows_where(indexes, "TABLE_NAME", table)
            .into_iter()
            .filter(|r| r[col(indexes, "INDEX_TYPE")].as_str() == Some("PRIMARY_KEY"))
            .collect();
        assert_eq!(rows.len(), 1, "primary key pseudo-index for {}", table);
        assert_eq!(rows[0][col(indexes, "IS_UNIQUE")], Value::Bool(true));
        assert!(rows[0][col(indexes, "INDEX_STATE")].is_null());
    }

    let users_pk: Vec<_> = rows_where(index_columns, "TABLE_NAME", "Users")
        .into_iter()
        .filter(|r| r[col(index_columns, "INDEX_TYPE")].as_str() == Some("PRIMARY_KEY"))
        .collect();
    assert_eq!(users_pk.len(), 1);
    assert_eq!(text(&users_pk[0][col(index_columns, "COLUMN_NAME")]), "id");
}

#[test]
fn views_catalog_carries_definitions() {
    let catalog = native_catalog();
    let views = catalog.table("VIEWS").unwrap();

    assert_eq!(views.rows().len(), 1);
    let row = &views.rows()[0];
    assert_eq!(text(&row[col(views, "TABLE_NAME")]), "ActiveUsers");
    assert_eq!(text(&row[col(views, "VIEW_DEFINITION")]), "SELECT id, name FROM Users");
}

#[test]
fn statistics_table_is_declared_but_empty() {
    let catalog = native_catalog();
    let stats = catalog.table("SPANNER_STATISTICS").unwrap();
    assert!(stats.is_populated());
    assert!(stats.rows().is_empty());
}

#[test]
fn every_table_constraint_resolves_to_column_or_key_usage() {
    let catalog = native_catalog();
    let constraints = catalog.table("TABLE_CONSTRAINTS").unwrap();
    let kcu = catalog.table("KEY_COLUMN_USAGE").unwrap();
    let ccu = catalog.table("CONSTRAINT_COLUMN_USAGE").unwrap();

    let kcu_pairs: Vec<(String, String)> = kcu
        .rows()
        .iter()
        .map(|r| {
            (
                r[col(kcu, "CONSTRAINT_NAME")].as_str().unwrap().to_string(),
                r[col(kcu, "TABLE_NAME")].as_str().unwrap().to_string(),
            )
        })
        .collect();
    let ccu_pairs: Vec<(String, String)> = ccu
        .rows()
        .iter()
        .map(|r| {
            (
                r[col(ccu, "CONSTRAINT_NAME")].as_str().unwrap().to_string(),
                r[col(ccu, "TABLE_NAME")].as_str().unwrap().to_string(),
            )
        })
        .collect();

    for row in constraints.rows() {
        let name = row[col(constraints, "CONSTRAINT_NAME")].as_str().unwrap();
        let resolved = kcu_pairs.iter().any(|(n, _)| n == name)
            || ccu_pairs.iter().any(|(n, _)| n == name);
        assert!(resolved, "constraint {} has no column/key usage rows", name);
    }
}

#[test]
fn end_to_end_minimal_users_schema() {
    // The canonical two-column example: Users(id INT64, name STRING NOT
    // NULL), primary key (id).
    let mut users = Table::new("Users");
    users.columns = vec![
        Column::new("id", ScalarType::Int64),
        Column::new("name", ScalarType::String).not_null(),
    ];
    users.primary_key = vec![KeyColumn::asc("id")];
    let schema = Schema::builder().table(users).finish().unwrap();
    let catalog = InformationSchemaCatalog::with_dialect(Dialect::Native, &schema);

    let tables = catalog.table("TABLES").unwrap();
    let users_rows = rows_where(tables, "TABLE_NAME", "Users");
    assert_eq!(users_rows.len(), 1);
    assert_eq!(text(&users_rows[0][col(tables, "TABLE_TYPE")]), "BASE TABLE");

    let columns = catalog.table("COLUMNS").unwrap();
    let users_cols = rows_where(columns, "TABLE_NAME", "Users");
    assert_eq!(users_cols.len(), 2);
    let id_row = users_cols
        .iter()
        .find(|r| r[col(columns, "COLUMN_NAME")].as_str() == Some("id"))
        .unwrap();
    assert_eq!(id_row[col(columns, "ORDINAL_POSITION")].as_i64(), Some(1));
    let name_row = users_cols
        .iter()
        .find(|r| r[col(columns, "COLUMN_NAME")].as_str() == Some("name"))
        .unwrap();
    assert_eq!(name_row[col(columns, "ORDINAL_POSITION")].as_i64(), Some(2));
    assert_eq!(text(&name_row[col(columns, "IS_NULLABLE")]), "NO");

    let constraints = catalog.table("TABLE_CONSTRAINTS").unwrap();
    let pk = rows_where(constraints, "CONSTRAINT_NAME", "PK_Users");
    assert_eq!(pk.len(), 1);
    assert_eq!(text(&pk[0][col(constraints, "CONSTRAINT_TYPE")]), "PRIMARY KEY");
    let ck = rows_where(constraints, "CONSTRAINT_NAME", "CK_IS_NOT_NULL_Users_name");
    assert_eq!(ck.len(), 1);
    assert_eq!(text(&ck[0][col(constraints, "CONSTRAINT_TYPE")]), "CHECK");

    let checks = catalog.table("CHECK_CONSTRAINTS").unwrap();
    let ck_rows = rows_where(checks, "CONSTRAINT_NAME", "CK_IS_NOT_NULL_Users_name");
    assert_eq!(ck_rows.len(), 1);
    assert_eq!(text(&ck_rows[0][col(checks, "CHECK_CLAUSE")]), "name IS NOT NULL");

    let kcu = catalog.table("KEY_COLUMN_USAGE").unwrap();
    let pk_usage = rows_where(kcu, "CONSTRAINT_NAME", "PK_Users");
    assert_eq!(pk_usage.len(), 1);
    assert_eq!(text(&pk_usage[0][col(kcu, "COLUMN_NAME")]), "id");
    assert_eq!(pk_usage[0][col(kcu, "ORDINAL_POSITION")].as_i64(), Some(1));
}

#[test]
fn no_field_leaks_between_consecutive_rows() {
    // Orders (with parent, policy, interleave) is synthesized right
    // after Users (with none of those); a stale override would surface
    // in whichever row follows the richer one.
    let catalog = native_catalog();
    let tables = catalog.table("TABLES").unwrap();

    let users = rows_where(tables, "TABLE_NAME", "Users")[0];
    assert!(users[col(tables, "PARENT_TABLE_NAME")].is_null());
    assert!(users[col(tables, "ON_DELETE_ACTION")].is_null());
    assert!(users[col(tables, "ROW_DELETION_POLICY_EXPRESSION")].is_null());

    // And the view row after Orders must not inherit Orders' fields.
    let view = rows_where(tables, "TABLE_NAME", "ActiveUsers")[0];
    assert!(view[col(tables, "PARENT_TABLE_NAME")].is_null());
    assert!(view[col(tables, "ON_DELETE_ACTION")].is_null());
    assert!(view[col(tables, "INTERLEAVE_TYPE")].is_null());
    assert!(view[col(tables, "ROW_DELETION_POLICY_EXPRESSION")].is_null());
}
