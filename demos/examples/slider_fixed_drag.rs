// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-mode dragging.
//!
//! In fixed mode every handle moves by the same delta. When one handle would
//! leave its range, the delta shrinks so the spacing is kept.
//!
//! Run:
//! - `cargo run -p understory_demos --example slider_fixed_drag`

use understory_slider::{Control, SliderConfig, SliderFlags};

fn main() {
    let config =
        SliderConfig::default().with_flags(SliderFlags::FIXED | SliderFlags::ENABLE_CROSS);
    let mut slider = Control::new(config, [10, 30, 50]);

    for target in [20.0, 70.0, 90.0, -40.0] {
        let moved = slider.set_dot_pos(target, 0);
        println!(
            "drag handle 0 to {target:>5.1}%: moved={moved:<5} positions={:?}",
            slider.dots_pos()
        );
    }
}
