use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quhexa_core::Register;
use quhexa_gates::controlled::{
    controlled_levelswap, controlled_phase, level_dependent_power_swap,
};
use quhexa_gates::generators::{bit_swap, fourier};
use std::f64::consts::PI;

fn benchmark_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementary_generators");

    group.bench_function("fourier", |b| {
        b.iter(|| black_box(fourier()));
    });

    for i in 1..6usize {
        group.bench_with_input(BenchmarkId::new("bit_swap", i), &i, |b, &i| {
            b.iter(|| black_box(bit_swap(i).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_composite_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite_gates");
    group.sample_size(20);

    let angles = [0.0, PI / 3.0, 2.0 * PI / 3.0, PI, 4.0 * PI / 3.0, 5.0 * PI / 3.0];

    group.bench_function("controlled_phase", |b| {
        b.iter(|| black_box(controlled_phase(1, &angles).unwrap()));
    });

    group.bench_function("level_dependent_power_swap", |b| {
        b.iter(|| black_box(level_dependent_power_swap()));
    });

    group.bench_function("controlled_levelswap", |b| {
        b.iter(|| black_box(controlled_levelswap(Register::R0, Register::R2).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_generators, benchmark_composite_gates);
criterion_main!(benches);
