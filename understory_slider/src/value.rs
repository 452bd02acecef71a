// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic handle values and the conversions that feed them into a slider.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rust_decimal::Decimal;

/// An opaque, named tag usable as a slider value.
///
/// Symbols never participate in arithmetic. They are only meaningful in a
/// discrete `data` domain, where they are matched by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol(pub &'static str);

impl Symbol {
    /// The symbol's name.
    pub const fn name(self) -> &'static str {
        self.0
    }
}

/// The semantic value a handle represents.
///
/// Numbers are decimals so that step arithmetic against `min` and `interval`
/// is exact (`0.1 - 0.05 == 0.05`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SliderValue {
    /// A numeric value.
    Number(Decimal),
    /// A string value, either a `data` entry or a decimal literal.
    Text(String),
    /// A symbolic value.
    Symbol(Symbol),
}

impl SliderValue {
    /// The value as a decimal for numeric-range domains.
    ///
    /// Text is parsed as a decimal literal (surrounding whitespace allowed);
    /// symbols and unparsable text yield `None`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Symbol(_) => None,
        }
    }
}

impl fmt::Display for SliderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Symbol(s) => write!(f, "Symbol({})", s.name()),
        }
    }
}

impl From<Decimal> for SliderValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for SliderValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for SliderValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for SliderValue {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for SliderValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for SliderValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Symbol> for SliderValue {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

/// An ordered list of handle values, one per handle.
///
/// Built from a single value (one handle) or from any list of values, which
/// lets [`Control::set_value`](crate::Control::set_value) accept either.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DotValues(pub Vec<SliderValue>);

impl DotValues {
    /// Consume into the underlying list.
    pub fn into_vec(self) -> Vec<SliderValue> {
        self.0
    }
}

impl From<SliderValue> for DotValues {
    fn from(value: SliderValue) -> Self {
        Self(alloc::vec![value])
    }
}

impl From<Decimal> for DotValues {
    fn from(value: Decimal) -> Self {
        SliderValue::from(value).into()
    }
}

impl From<i32> for DotValues {
    fn from(value: i32) -> Self {
        SliderValue::from(value).into()
    }
}

impl From<&str> for DotValues {
    fn from(value: &str) -> Self {
        SliderValue::from(value).into()
    }
}

impl From<Symbol> for DotValues {
    fn from(value: Symbol) -> Self {
        SliderValue::from(value).into()
    }
}

impl<V: Into<SliderValue>> From<Vec<V>> for DotValues {
    fn from(values: Vec<V>) -> Self {
        Self(values.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<SliderValue>, const N: usize> From<[V; N]> for DotValues {
    fn from(values: [V; N]) -> Self {
        Self(values.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<SliderValue>> FromIterator<V> for DotValues {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
