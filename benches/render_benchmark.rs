//! Benchmarks for layout and PDF assembly.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use samplepdf::{layout_document, Block, Document, Fixture, RenderOptions, StandardMetrics};

/// A synthetic document of `count` ~200 character paragraphs.
fn paragraphs(count: usize) -> Document {
    let blocks = (0..count)
        .map(|i| {
            Block::paragraph(format!(
                "<b>Parágrafo {}:</b> Lorem ipsum dolor sit amet, consectetur adipiscing \
                 elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
                 Ut enim ad minim veniam, quis nostrud exercitation.",
                i
            ))
        })
        .collect();
    Document::with_blocks(blocks)
}

/// Benchmark flow layout alone at various sizes.
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let metrics = StandardMetrics::new();

    for count in [10, 100, 500].iter() {
        let doc = paragraphs(*count);
        group.bench_function(format!("{}_paragraphs", count), |b| {
            b.iter(|| layout_document(black_box(&doc), &metrics).unwrap());
        });
    }

    group.finish();
}

/// Benchmark full rendering, with and without stream compression.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let doc = paragraphs(100);

    group.bench_function("compressed", |b| {
        let options = RenderOptions::default();
        b.iter(|| samplepdf::render_to_bytes(black_box(&doc), &options).unwrap());
    });
    group.bench_function("uncompressed", |b| {
        let options = RenderOptions::new().uncompressed();
        b.iter(|| samplepdf::render_to_bytes(black_box(&doc), &options).unwrap());
    });

    group.finish();
}

/// Benchmark each built-in fixture end to end.
fn bench_fixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixtures");
    let options = RenderOptions::default();

    for fixture in Fixture::ALL {
        let doc = fixture.document();
        group.bench_function(fixture.name(), |b| {
            b.iter(|| samplepdf::render_to_bytes(black_box(&doc), &options).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout, bench_render, bench_fixtures);
criterion_main!(benches);
