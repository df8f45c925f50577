// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use pwstretch_erase::{scrub_buffer, scrub_stack};

fn benchmark_scrub_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrub_buffer");

    for len in [32usize, 256, 4096].iter() {
        group.throughput(Throughput::Bytes(*len as u64));
        group.bench_with_input(format!("{} bytes", len), len, |b, &len| {
            let mut buf = vec![0xA5u8; len];
            b.iter(|| scrub_buffer(black_box(&mut buf)));
        });
    }
    group.finish();
}

fn benchmark_scrub_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrub_stack");

    for depth in [0usize, 512, 4096].iter() {
        group.bench_with_input(format!("{} bytes", depth), depth, |b, &depth| {
            b.iter(|| scrub_stack(black_box(depth)));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_scrub_buffer, benchmark_scrub_stack);
criterion_main!(benches);
