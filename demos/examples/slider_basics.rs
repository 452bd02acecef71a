// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider basics.
//!
//! Builds a two-handle range slider, drags the handles against each other,
//! and prints the resulting positions and values.
//!
//! Run:
//! - `cargo run -p understory_demos --example slider_basics`

use rust_decimal::Decimal;
use understory_slider::{Control, ErrorKind, SliderConfig, SliderFlags};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .init();

    let config = SliderConfig {
        min: Decimal::ZERO,
        max: Decimal::ONE,
        interval: Decimal::new(5, 2),
        flags: SliderFlags::empty(),
        ..Default::default()
    };
    let report = |kind: ErrorKind, msg: &str| println!("  error {kind:?}: {msg}");
    let mut slider = Control::with_error_sink(
        config,
        [Decimal::new(2, 1), Decimal::new(75, 2)],
        report,
    );

    println!("== Initial ==");
    for dot in slider.dots() {
        println!("  pos={:>6.2}%  value={}", dot.pos, dot.value);
    }

    println!("== Drag handle 0 to 90% (blocked by handle 1) ==");
    let moved = slider.set_dot_pos(90.0, 0);
    println!("  moved={moved}");
    for dot in slider.dots() {
        println!("  pos={:>6.2}%  value={}", dot.pos, dot.value);
    }

    println!("== Out-of-range value ==");
    slider.set_value(Decimal::from(2));
    println!("  positions={:?}", slider.dots_pos());

    println!("== Marks ==");
    slider.set_value([Decimal::new(25, 2), Decimal::new(5, 1)]);
    for mark in slider.marks().iter().step_by(5) {
        println!(
            "  {:>6.2}%  {}  active={}",
            mark.pos, mark.value, mark.active
        );
    }
}
