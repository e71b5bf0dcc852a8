use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use postit_engine::parsing::{BlockType, format_inline, parse, segment};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(20);

    for size in [1, 10, 100] {
        let note = common::generate_note(size);
        group.bench_with_input(BenchmarkId::new("segment", size), &note, |b, note| {
            b.iter(|| segment(std::hint::black_box(note)));
        });
        group.bench_with_input(BenchmarkId::new("parse", size), &note, |b, note| {
            b.iter(|| parse(std::hint::black_box(note)));
        });
    }

    let storm = common::generate_delimiter_storm(200);
    group.bench_function("format_inline_delimiter_storm", |b| {
        b.iter(|| format_inline(std::hint::black_box(&storm), BlockType::Text));
    });

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
