use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use infoschema::schema::{Column, ForeignKey, Index, KeyColumn, Schema, Table};
use infoschema::types::ScalarType;
use infoschema::{Dialect, InformationSchemaCatalog};

fn gen_schema(n_tables: usize) -> Schema {
    let mut builder = Schema::builder();
    for i in 0..n_tables {
        let mut table = Table::new(format!("Table{}", i));
        table.columns = vec![
            Column::new("id", ScalarType::Int64).not_null(),
            Column::new("name", ScalarType::String).not_null().with_max_length(128),
            Column::new("payload", ScalarType::Bytes),
            Column::new("score", ScalarType::Float64),
            Column::new("created_at", ScalarType::Timestamp),
        ];
        table.primary_key = vec![KeyColumn::asc("id")];
        table.indexes = vec![Index {
            name: format!("IDX_Table{}_Name", i),
            key_columns: vec![KeyColumn::asc("name")],
            storing_columns: vec!["score".into()],
            unique: true,
            null_filtered: false,
            managed: false,
            parent: None,
        }];
        if i > 0 {
            table.foreign_keys = vec![ForeignKey {
                name: format!("FK_Table{}_Table0", i),
                referencing_columns: vec!["id".into()],
                referenced_table: "Table0".into(),
                referenced_columns: vec!["id".into()],
                referenced_index: None,
            }];
        }
        builder = builder.table(table);
    }
    builder.finish().expect("generated schema resolves")
}

fn bench_catalog_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_build");
    group.sample_size(20);

    for &n in &[10usize, 100usize] {
        let schema = gen_schema(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("native", n), &n, |b, _| {
            b.iter(|| InformationSchemaCatalog::with_dialect(Dialect::Native, &schema));
        });
        group.bench_with_input(BenchmarkId::new("postgres", n), &n, |b, _| {
            b.iter(|| InformationSchemaCatalog::with_dialect(Dialect::Postgres, &schema));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_catalog_build);
criterion_main!(benches);
