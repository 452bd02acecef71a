// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use understory_slider::{Control, DotValues, SliderConfig, SliderFlags, SliderValue};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A pointer trace across the track, overshooting both ends a little.
fn gen_drag_path(len: usize) -> Vec<f64> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..len).map(|_| rng.next_f64() * 120.0 - 10.0).collect()
}

/// `handles` evenly spread values in `0..=1000` stepping by `0.01`.
fn fine_slider(handles: usize, flags: SliderFlags) -> Control {
    let config = SliderConfig {
        max: Decimal::from(1000),
        interval: Decimal::new(1, 2),
        flags,
        ..Default::default()
    };
    let values: DotValues = (0..handles)
        .map(|i| Decimal::from(i * 1000 / handles.max(1)))
        .collect();
    Control::new(config, values)
}

fn bench_drag(c: &mut Criterion) {
    let path = gen_drag_path(256);
    let mut group = c.benchmark_group("drag");
    group.throughput(Throughput::Elements(path.len() as u64));
    for &handles in &[1usize, 4, 16] {
        for (name, flags) in [
            ("cross", SliderFlags::ENABLE_CROSS),
            ("no_cross", SliderFlags::empty()),
            ("fixed", SliderFlags::FIXED | SliderFlags::ENABLE_CROSS),
        ] {
            group.bench_function(format!("{name}_h{handles}"), |b| {
                b.iter_batched(
                    || fine_slider(handles, flags),
                    |mut slider| {
                        for &pos in &path {
                            let index = slider.recent_dot(pos).unwrap_or(0);
                            black_box(slider.set_dot_pos(pos, index));
                        }
                        black_box(slider.dots());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let slider = fine_slider(1, SliderFlags::default());
    let values: Vec<SliderValue> = (0..1000)
        .map(|i| SliderValue::from(Decimal::new(i * 37, 2)))
        .collect();
    let path = gen_drag_path(1000);
    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("parse_value", |b| {
        b.iter(|| {
            for v in &values {
                black_box(slider.parse_value(v));
            }
        })
    });
    group.bench_function("parse_pos", |b| {
        b.iter(|| {
            for &pos in &path {
                black_box(slider.parse_pos(pos));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_drag, bench_convert);
criterion_main!(benches);
