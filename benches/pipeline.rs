//! Benchmarks for the siam pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use siam::types::EXAMPLE_SYSTEM;
use siam::{emit_document, parse_system_source, resolve_system, System};

fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).unwrap()
}

/// A large document: the starter system's elements repeated under new names.
fn large_system(copies: usize) -> String {
    let (head, elements) = EXAMPLE_SYSTEM.split_once("elements\n").unwrap();
    let mut source = format!("{}elements\n", head);
    for i in 0..copies {
        for line in elements.lines() {
            if let Some(name) = line.strip_prefix('\t').filter(|l| !l.starts_with('\t')) {
                source.push_str(&format!("\t{}{}\n", name, i));
            } else {
                source.push_str(line);
                source.push('\n');
            }
        }
    }
    source
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let fixture = load_fixture("system.ssf");
    let large = large_system(100);

    group.bench_function("parse_fixture", |b| {
        b.iter(|| parse_system_source(black_box(&fixture)))
    });

    group.bench_function("parse_large", |b| {
        b.iter(|| parse_system_source(black_box(&large)))
    });

    let tree = parse_system_source(&large);
    group.bench_function("emit_large", |b| b.iter(|| emit_document(black_box(&tree))));

    group.finish();
}

// -- Resolution benchmarks --

fn bench_resolving(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolving");

    let example = System::parse(EXAMPLE_SYSTEM);
    let large = System::parse(&large_system(100));

    group.bench_function("resolve_example", |b| {
        b.iter(|| resolve_system(black_box(&example)))
    });

    group.bench_function("resolve_large", |b| {
        b.iter(|| resolve_system(black_box(&large)))
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_resolving);
criterion_main!(benches);
