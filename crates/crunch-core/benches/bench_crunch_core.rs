use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crunch_core::{BuildConfig, ConstantTable, ExclusionSet, Literal};

fn bench_constant_table(c: &mut Criterion) {
    let mut json = serde_json::Map::new();
    for i in 0..1000 {
        json.insert(format!("CONST_{i}"), serde_json::json!(i));
    }
    c.bench_function("constant_table_from_json_1000", |b| {
        b.iter(|| black_box(ConstantTable::from_json(black_box(&json)).unwrap()))
    });
}

fn bench_literal_to_source(c: &mut Criterion) {
    let values = [Literal::Number(0.1), Literal::Number(1e6), Literal::from("quoted \"text\"")];
    c.bench_function("literal_to_source", |b| {
        b.iter(|| {
            for v in &values {
                black_box(v.to_source());
            }
        })
    });
}

fn bench_config_parse(c: &mut Criterion) {
    let text = r#"{"input": {"sources": ["a.js"]}, "constants": {"DEBUG": false, "W": 320}}"#;
    c.bench_function("config_parse", |b| {
        b.iter(|| black_box(BuildConfig::from_json(black_box(text)).unwrap()))
    });
    c.bench_function("exclusions_javascript", |b| b.iter(|| black_box(ExclusionSet::javascript())));
}

criterion_group!(benches, bench_constant_table, bench_literal_to_source, bench_config_parse);
criterion_main!(benches);
