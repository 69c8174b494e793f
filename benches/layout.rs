// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use parentela::layout::{compute_depths, layout_tree};

mod fixtures;

// Benchmark identity (keep stable):
// - Group names: `layout.depths`, `layout.tree`
// - Case IDs (`small`, `medium`, `large`) must remain stable across refactors
//   so results stay comparable over time.
fn bench_depths(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout.depths");
    for (id, generations, couples) in [("small", 2, 2), ("medium", 4, 8), ("large", 6, 24)] {
        let tree = fixtures::build_family(generations, couples);
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_function(id, |b| {
            b.iter(|| compute_depths(black_box(&tree)));
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout.tree");
    for (id, generations, couples) in [("small", 2, 2), ("medium", 4, 8), ("large", 6, 24)] {
        let tree = fixtures::build_family(generations, couples);
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_function(id, |b| {
            b.iter(|| layout_tree(black_box(&tree)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_depths, bench_layout);
criterion_main!(benches);
