// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_gesture::InputEvent;
use understory_gesture::rotate::{RotateConfig, RotateEngine};
use understory_gesture::slider::{Slider, SliderConfig};
use understory_gesture_math::angle_to_point;

const MOVES: usize = 1_024;

fn circle_moves() -> Vec<InputEvent> {
    let centre = Point::new(200.0, 200.0);
    (0..MOVES)
        .map(|i| {
            let p = angle_to_point((i as f64) * TAU / 96.0, centre, 90.0);
            InputEvent::pointer_move(p.x, p.y)
        })
        .collect()
}

fn bench_rotate_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("trackers/rotate");
    let area = Rect::new(100.0, 100.0, 300.0, 300.0);
    let knob = Rect::new(280.0, 190.0, 300.0, 210.0);
    let moves = circle_moves();
    group.throughput(Throughput::Elements(MOVES as u64));

    group.bench_function("pointer_drag", |b| {
        b.iter_batched(
            || {
                let mut engine = RotateEngine::new(area, knob, RotateConfig::default(), 0.0);
                let _ = engine.handle(&InputEvent::pointer_down(290.0, 200.0));
                engine
            },
            |mut engine| {
                for event in &moves {
                    let _ = engine.handle(black_box(event));
                }
                black_box(engine.output())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("dial_adjust", |b| {
        let adjust: Vec<InputEvent> = (0..MOVES)
            .map(|i| InputEvent::pointer_move(150.0, 250.0 - ((i % 64) as f64)))
            .collect();
        b.iter_batched(
            || {
                let mut engine =
                    RotateEngine::new(area, knob, RotateConfig::dial(0.0, 1.0, 0.5), 0.0);
                let _ = engine.handle(&InputEvent::pointer_down(150.0, 250.0));
                engine
            },
            |mut engine| {
                for event in &adjust {
                    let _ = engine.handle(black_box(event));
                }
                black_box(engine.output())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_slider_wheel(c: &mut Criterion) {
    let mut group = c.benchmark_group("trackers/slider");
    let track = Rect::new(0.0, 0.0, 40.0, 400.0);
    let thumb = Rect::new(0.0, 0.0, 40.0, 20.0);
    let wheel: Vec<InputEvent> = (1..=MOVES)
        .map(|i| InputEvent::wheel(20.0, 200.0, -3.0, (i as f64) * 16.0))
        .collect();
    group.throughput(Throughput::Elements(MOVES as u64));

    group.bench_function("wheel", |b| {
        b.iter_batched(
            || Slider::new(track, thumb, SliderConfig::default(), 0.0),
            |mut slider| {
                for event in &wheel {
                    let _ = slider.handle(black_box(event));
                }
                black_box(slider.output())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_rotate_drag, bench_slider_wheel);
criterion_main!(benches);
