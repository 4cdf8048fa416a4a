// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_gesture_math::{
    Rotation, ValueMapping, angle_to_point, normalized_angle, point_to_angle,
};

fn angles(len: usize) -> Vec<f64> {
    (0..len).map(|i| (i as f64) * 0.37 - 100.0).collect()
}

fn bench_angle_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("math/angles");
    let origin = Point::new(100.0, 100.0);

    for len in [256usize, 4_096] {
        let input = angles(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("normalized_angle", len), &input, |b, input| {
            b.iter(|| {
                let mut acc = 0.0;
                for &a in input {
                    acc += normalized_angle(black_box(a));
                }
                black_box(acc)
            });
        });

        group.bench_with_input(BenchmarkId::new("point_round_trip", len), &input, |b, input| {
            b.iter(|| {
                let mut acc = 0.0;
                for &a in input {
                    let p = angle_to_point(black_box(a), origin, 80.0);
                    acc += point_to_angle(p, origin);
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("math/rotation");
    let dial = ValueMapping::new(0.0, 1.0, TAU / 4.0, 5.0 * TAU / 4.0);
    let interval = dial.angle_interval();

    // A pointer circling forwards in small steps: mostly no-wrap, one wrap per turn.
    let steps: Vec<f64> = (0..1_024).map(|i| f64::from(i) * TAU / 64.0).collect();
    group.throughput(Throughput::Elements(steps.len() as u64));

    group.bench_function("advance_unbounded", |b| {
        b.iter(|| {
            let mut rotation = Rotation::default();
            for &s in &steps {
                rotation = rotation.advance(black_box(s));
            }
            black_box(rotation.full_rotations())
        });
    });

    group.bench_function("advance_clamped_with_value", |b| {
        b.iter(|| {
            let mut rotation = Rotation::new(TAU / 4.0);
            let mut acc = 0.0;
            for &s in &steps {
                rotation = rotation.advance(black_box(s)).clamped(&interval);
                acc += dial.angle_to_value(rotation.total_angle());
            }
            black_box(acc)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_angle_helpers, bench_rotation);
criterion_main!(benches);
