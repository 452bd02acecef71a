// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: a headless position/value model for multi-handle sliders.
//!
//! This crate keeps a consistent, bidirectional mapping between handle
//! ("dot") positions on a track and the values they stand for, and applies
//! drag updates under ordering, crossing, and spacing constraints.
//! It does not render, capture pointers, or animate. A host toolkit feeds it
//! target positions and draws from [`Control::dots`].
//!
//! ## Concepts
//!
//! - Positions are percentages (`0..=100`) along the track, as `f64`.
//! - Values are [`SliderValue`]s drawn from a domain: either a numeric range
//!   `[min, max]` stepping by `interval`, or an explicit `data` list.
//!   Numeric values are [`Decimal`](rust_decimal::Decimal)s, so step arithmetic
//!   such as `(0.3 - 0.05) / 0.05` is exact.
//! - The domain has `total` steps; step `i` sits at `i * 100 / total` percent.
//! - Each handle may move within a [`PosRange`] derived from the configuration
//!   and the other handles: the whole track, its neighbors (when crossing is
//!   disabled), or a band leaving room for `min_range` steps between handles.
//! - In fixed mode ([`SliderFlags::FIXED`]) a drag translates all handles by
//!   the same delta, shrunk as needed so that none leaves its range.
//!
//! ## Errors
//!
//! Nothing here panics on bad configuration or input. Problems are reported
//! through an [`ErrorSink`] (any `Fn(ErrorKind, &str)` works) and the
//! operation falls back to a safe default, typically position `0`.
//! `try_*` variants return [`ErrorKind`] directly.
//!
//! ## Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use understory_slider::{Control, SliderConfig, SliderFlags, SliderValue};
//!
//! // 0..=100 in steps of 10, two handles that may not cross.
//! let config = SliderConfig {
//!     interval: Decimal::from(10),
//!     flags: SliderFlags::empty(),
//!     ..Default::default()
//! };
//! let mut slider = Control::new(config, [20, 80]);
//! assert_eq!(slider.dots_pos(), &[20.0, 80.0]);
//!
//! // Dragging the first handle past the second stops on it.
//! assert!(slider.set_dot_pos(95.0, 0));
//! assert_eq!(slider.dots_pos(), &[80.0, 80.0]);
//! assert_eq!(slider.dots()[0].value, SliderValue::from(80));
//!
//! // Pushing further is a no-op.
//! assert!(!slider.set_dot_pos(95.0, 0));
//! ```
//!
//! A discrete domain:
//!
//! ```
//! use understory_slider::{Control, SliderConfig};
//!
//! let config = SliderConfig {
//!     data: Some(vec!["a".into(), "b".into(), "c".into()]),
//!     ..Default::default()
//! };
//! let slider = Control::new(config, "b");
//! assert_eq!(slider.dots_pos(), &[50.0]);
//! ```
//!
//! ## Layering
//!
//! [`Track`] maps a straight track in layout coordinates (Kurbo points) to
//! percentages, so hosts can translate pointer locations or deltas before
//! calling [`Control::set_dot_pos`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod control;
pub mod domain;
pub mod error;
pub mod process;
pub mod range;
pub mod track;
pub mod value;

pub use config::{SliderConfig, SliderFlags};
pub use control::{Control, Dot};
pub use domain::Domain;
pub use error::{ErrorKind, ErrorSink, Silent};
pub use process::Mark;
pub use range::{PosRange, ValidPos};
pub use track::Track;
pub use value::{DotValues, SliderValue, Symbol};
