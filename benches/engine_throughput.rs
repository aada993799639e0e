use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mapper_codegen::codegen::metadata::{ColumnId, ColumnMetadata, JdbcType, TableMetadata};
use mapper_codegen::codegen::orchestrator::Orchestrator;
use mapper_codegen::config::NamingConfig;

fn wide_table(columns: usize) -> TableMetadata {
    let columns = (0..columns)
        .map(|i| {
            let jdbc_type = match i % 3 {
                0 => JdbcType::BigInt,
                1 => JdbcType::Varchar,
                _ => JdbcType::Clob,
            };
            ColumnMetadata::builder()
                .java_property(format!("field{}", i))
                .actual_column_name(format!("field_{}", i))
                .java_type("java.lang.String")
                .jdbc_type(jdbc_type.code())
                .identity(i == 0)
                .build()
        })
        .collect();

    TableMetadata::builder()
        .fully_qualified_table("bench.wide")
        .runtime_table_name("wide")
        .base_record_type("com.example.model.Wide")
        .columns(columns)
        .primary_key_columns(vec![ColumnId(0)])
        .generated_key("JDBC")
        .build()
}

fn bench_augment_table(c: &mut Criterion) {
    let config = NamingConfig::builder()
        .mappers(vec!["tk.mybatis.mapper.common.Mapper".to_string()])
        .beginning_delimiter("`")
        .ending_delimiter("`")
        .build();
    let orchestrator = Orchestrator::new(config).unwrap();

    let mut group = c.benchmark_group("augment_table");
    for size in [10, 100, 500] {
        let table = wide_table(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| black_box(orchestrator.augment_table(table).unwrap()))
        });
    }
    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let config = NamingConfig::builder()
        .mappers(vec!["tk.mybatis.mapper.common.Mapper".to_string()])
        .build();
    let orchestrator = Orchestrator::new(config).unwrap();
    let tables: Vec<TableMetadata> = (0..50).map(|_| wide_table(20)).collect();

    c.bench_function("run_50_tables", |b| {
        b.iter(|| black_box(orchestrator.run(&tables).unwrap()))
    });
}

criterion_group!(benches, bench_augment_table, bench_run);
criterion_main!(benches);
