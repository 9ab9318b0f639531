//! Parsing and export benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use dctext_core::exporter::exporter_for_format;
use dctext_core::MetadataParser;
use std::hint::black_box;

fn raw_file(n: usize) -> Vec<String> {
    (0..15).map(|i| format!("  value {} of record {}  ", i, n)).collect()
}

fn parse_benchmark(c: &mut Criterion) {
    let files: Vec<Vec<String>> = (0..1000).map(raw_file).collect();

    c.bench_function("parse 1000 files", |b| {
        b.iter(|| {
            let mut parser = MetadataParser::new();
            parser
                .set_shared([("publisher", "Wallace Library"), ("collection", "LibA")])
                .unwrap();
            for (i, lines) in files.iter().enumerate() {
                parser.process_metadata_file(lines, i as u32 + 1, "bench.txt");
            }
            black_box(parser.into_collection())
        })
    });
}

fn export_benchmark(c: &mut Criterion) {
    let mut parser = MetadataParser::new();
    for i in 0..1000 {
        parser.process_metadata_file(&raw_file(i), i as u32 + 1, "bench.txt");
    }
    let collection = parser.into_collection();

    for format in ["csv", "json", "mrk"] {
        let exporter = exporter_for_format(format).unwrap();
        c.bench_function(&format!("export 1000 records to {}", format), |b| {
            b.iter(|| {
                let mut out = Vec::new();
                exporter.process_collection(&collection, &mut out).unwrap();
                black_box(out)
            })
        });
    }
}

criterion_group!(benches, parse_benchmark, export_benchmark);
criterion_main!(benches);
