// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use conflux_core::Teardown;
use criterion::{BenchmarkId, Criterion};
use std::hint::black_box;

pub fn bench_teardown(c: &mut Criterion) {
    let mut group = c.benchmark_group("teardown");

    for &children in &[1usize, 16, 256] {
        let id = BenchmarkId::from_parameter(format!("chain_{children}"));
        group.bench_with_input(id, &children, |bencher, &children| {
            bencher.iter(|| {
                let parent = Teardown::new();
                for _ in 0..children {
                    parent.add(Teardown::from_fn(|| {
                        black_box(());
                    }));
                }
                parent.dispose();
                black_box(parent.is_disposed());
            });
        });
    }

    group.finish();
}
