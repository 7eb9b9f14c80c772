use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crunch_compactor::{analyze, apply_map, build_map, substitute, Alphabet, AnalyzerOptions, Compactor, MangleOptions};
use crunch_core::{ConstantTable, ExclusionSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_source(size_kb: usize) -> String {
    const NAMES: &[&str] = &[
        "player", "enemy", "bullet", "update", "render", "context", "velocity",
        "position", "spawnTimer", "collide", "score", "level", "DEBUG", "WIDTH",
    ];
    let mut rng = StdRng::seed_from_u64(1);
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        let a = NAMES[rng.gen_range(0..NAMES.len())];
        let b = NAMES[rng.gen_range(0..NAMES.len())];
        text.push_str(&format!("function {a}_{b}({a}){{ {a}.{b} += {b}; return {a}; }}\n"));
    }
    text
}

fn constants() -> ConstantTable {
    ConstantTable::new()
        .with("DEBUG", false)
        .and_then(|t| t.with("WIDTH", 320))
        .unwrap()
}

fn bench_encoder(c: &mut Criterion) {
    let alphabet = Alphabet::extended();
    c.bench_function("encode_10k", |b| {
        b.iter(|| {
            for i in 0..10_000u64 {
                black_box(alphabet.encode(black_box(i)));
            }
        })
    });
}

fn bench_stages(c: &mut Criterion) {
    let src = generate_source(64);
    let table = constants();
    let exclusions = ExclusionSet::javascript();
    let substituted = substitute(&src, &table);
    let candidates = analyze(&substituted, &exclusions, &AnalyzerOptions::default());
    let map = build_map(&candidates, &substituted, &exclusions, &MangleOptions::default()).unwrap();

    c.bench_function("substitute_64kb", |b| b.iter(|| black_box(substitute(black_box(&src), &table))));
    c.bench_function("analyze_64kb", |b| {
        b.iter(|| black_box(analyze(black_box(&substituted), &exclusions, &AnalyzerOptions::default())))
    });
    c.bench_function("build_map_64kb", |b| {
        b.iter(|| black_box(build_map(&candidates, black_box(&substituted), &exclusions, &MangleOptions::default())))
    });
    c.bench_function("apply_map_64kb", |b| b.iter(|| black_box(apply_map(black_box(&substituted), &map))));
}

fn bench_compact(c: &mut Criterion) {
    let table = constants();
    let compactor = Compactor::new().with_exclusions(ExclusionSet::javascript());
    for kb in [1, 16, 128] {
        let src = generate_source(kb);
        c.bench_function(&format!("compact_minified_{kb}kb"), |b| {
            b.iter(|| black_box(compactor.compact(black_box(&src), &table, true)))
        });
        c.bench_function(&format!("compact_debug_{kb}kb"), |b| {
            b.iter(|| black_box(compactor.compact(black_box(&src), &table, false)))
        });
    }
}

criterion_group!(benches, bench_encoder, bench_stages, bench_compact);
criterion_main!(benches);
