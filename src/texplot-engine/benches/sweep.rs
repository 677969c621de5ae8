// Copyright 2026 The Texplot Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use texplot_engine::{SweepSpecs, eval, parse, sweep};

fn bench_parse(c: &mut Criterion) {
    let source = "\\frac{\\sin^{2}(x) + 1}{x^2 + 1} - \\sqrt{x\\cos(x)}";

    c.bench_function("parse", |b| b.iter(|| parse(source).unwrap()));
}

fn bench_eval(c: &mut Criterion) {
    let ast = parse("\\frac{\\sin^{2}(x) + 1}{x^2 + 1}").unwrap();

    c.bench_function("eval", |b| b.iter(|| eval(&ast, 0.37)));
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let ast = parse("\\sin(x)\\cos(2x) + \\frac{x}{x^2 + 1}").unwrap();

    for &samples in &[900, 10_000, 100_000] {
        let specs = SweepSpecs {
            min: -10.0,
            max: 10.0,
            samples,
        };

        group.bench_with_input(BenchmarkId::from_parameter(samples), &specs, |b, specs| {
            b.iter(|| sweep(&ast, specs))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_eval, bench_sweep);
criterion_main!(benches);
