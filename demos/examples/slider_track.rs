// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input on a laid-out track.
//!
//! Maps pointer locations on a vertical track to percentages, picks the
//! nearest handle, and drags it along a discrete domain.
//!
//! Run:
//! - `cargo run -p understory_demos --example slider_track`

use kurbo::{Point, Vec2};
use understory_slider::{Control, SliderConfig, Track};

fn main() {
    // Bottom-to-top track, 300px tall.
    let track = Track::new(Point::new(20.0, 320.0), Point::new(20.0, 20.0));
    let config = SliderConfig {
        data: Some(["xs", "s", "m", "l", "xl"].map(Into::into).to_vec()),
        ..Default::default()
    };
    let mut slider = Control::new(config, ["s", "l"]);

    let press = Point::new(24.0, 110.0);
    let pos = track.pos_at(press);
    let Some(index) = slider.recent_dot(pos) else {
        return;
    };
    println!("press at {press:?} -> {pos:.1}% -> handle {index}");

    let mut pointer_pos = slider.dots_pos()[index];
    let moves = [
        Vec2::new(0.0, -30.0),
        Vec2::new(1.0, -60.0),
        Vec2::new(0.0, 200.0),
    ];
    for delta in moves {
        pointer_pos += track.pos_delta(delta);
        slider.set_dot_pos(pointer_pos, index);
        let dot = &slider.dots()[index];
        println!(
            "  move {delta:?}: pos={:.1}% value={} at {:?}",
            dot.pos,
            dot.value,
            track.point_at(dot.pos)
        );
    }
}
