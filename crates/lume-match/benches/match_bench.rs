//! Benchmarks for the match engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lume_match::{transliterations, MatchEngine};

fn bench_latin_score(c: &mut Criterion) {
    let engine = MatchEngine::new();
    let label = "Microsoft SQL Server Management Studio";

    let mut group = c.benchmark_group("score");
    group.throughput(Throughput::Bytes(label.len() as u64));

    group.bench_function("latin_acronym", |b| {
        b.iter(|| black_box(engine.match_score(black_box(label), black_box("mssms"), false)))
    });

    group.finish();
}

fn bench_pinyin_score(c: &mut Criterion) {
    let engine = MatchEngine::new();
    let label = "网易云音乐";

    let mut group = c.benchmark_group("score");
    group.throughput(Throughput::Bytes(label.len() as u64));

    group.bench_function("pinyin_abbreviation", |b| {
        b.iter(|| black_box(engine.match_score(black_box(label), black_box("yyy"), true)))
    });

    group.finish();
}

fn bench_long_label_score(c: &mut Criterion) {
    let engine = MatchEngine::new();
    // Several hundred characters with heavy polyphone expansion.
    let label: String = "网易云音乐播放器".repeat(30);

    let mut group = c.benchmark_group("score");
    group.throughput(Throughput::Bytes(label.len() as u64));

    group.bench_function("long_cjk_label", |b| {
        b.iter(|| black_box(engine.match_score(black_box(&label), black_box("wyyyy"), true)))
    });

    group.finish();
}

fn bench_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    for label in ["QQ音乐", "网易云音乐播放器"] {
        group.bench_with_input(BenchmarkId::new("transliterations", label), &label, |b, l| {
            b.iter(|| black_box(transliterations(black_box(l), 1000)))
        });
    }

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let engine = MatchEngine::new();
    let labels: Vec<String> = (0..10_000)
        .map(|i| format!("Application Entry {i}"))
        .collect();

    let mut group = c.benchmark_group("rank");
    group.throughput(Throughput::Elements(labels.len() as u64));

    group.bench_function("10k_labels", |b| {
        b.iter(|| black_box(engine.rank(black_box(&labels), black_box("apen"), false)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_latin_score,
    bench_pinyin_score,
    bench_long_label_score,
    bench_expansion,
    bench_rank
);
criterion_main!(benches);
