//! Benchmarks for whole proofs by both methods.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use geoprove::prelude::*;

fn midline() -> (ConstructionProtocol, Statement) {
    let mut p = ConstructionProtocol::new();
    for label in ["A", "B", "C"] {
        p.add_free_point(label).unwrap();
    }
    p.add_midpoint("M", "A", "C").unwrap();
    p.add_midpoint("N", "B", "C").unwrap();
    let statement = p.parallel("M", "N", "A", "B").unwrap();
    (p, statement)
}

fn parallelogram() -> (ConstructionProtocol, Statement) {
    let mut p = ConstructionProtocol::new();
    for label in ["A", "B", "C"] {
        p.add_free_point(label).unwrap();
    }
    p.add_ratio_point("D", "C", "B", "A", Ratio::new(1, 1)).unwrap();
    p.add_intersection("O", "A", "C", "B", "D").unwrap();
    let statement = p.equal_segments("O", "A", "O", "C").unwrap();
    (p, statement)
}

fn circumcenter() -> (ConstructionProtocol, Statement) {
    let mut p = ConstructionProtocol::new();
    for label in ["A", "B", "C"] {
        p.add_free_point(label).unwrap();
    }
    p.add_circumcenter("O", "A", "B", "C").unwrap();
    let statement = p.equal_segments("O", "B", "O", "C").unwrap();
    (p, statement)
}

fn bench_theorems(c: &mut Criterion) {
    let mut group = c.benchmark_group("prove");
    let ctx = ProverContext::default();

    for (name, (protocol, statement)) in [("midline", midline()), ("parallelogram", parallelogram())] {
        group.bench_function(format!("{name}/wu"), |b| {
            b.iter(|| black_box(prove(&protocol, &statement, Method::Wu, &ctx).unwrap()));
        });
        group.bench_function(format!("{name}/area"), |b| {
            b.iter(|| black_box(prove(&protocol, &statement, Method::Area, &ctx).unwrap()));
        });
    }

    let (protocol, statement) = circumcenter();
    group.bench_function("circumcenter/wu", |b| {
        b.iter(|| black_box(prove(&protocol, &statement, Method::Wu, &ctx).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_theorems);

criterion_main!(benches);
