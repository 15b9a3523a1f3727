//! Core identifier newtypes.
//!
//! Block indices and scroll positions travel between the host and the search
//! core; wrapping them keeps the two from being mixed up with raw offsets.

use serde::Serialize;
use std::fmt;

/// Identifies one displayed message block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BlockIndex(usize);

impl BlockIndex {
    /// Wrap a raw block index.
    pub fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Raw index value.
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for BlockIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Proportional scroll offset in `[0.0, 1.0]`.
///
/// The host maps this onto its own scrollable range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ScrollPosition(f64);

impl ScrollPosition {
    /// Top of the scrollable range.
    pub const TOP: Self = Self(0.0);

    /// Position of the block at `ordinal` in a corpus of `len` blocks.
    ///
    /// Monotonic in `ordinal`. A single-block corpus (or an out-of-range
    /// ordinal) clamps into `[0.0, 1.0]`.
    pub fn for_block(ordinal: usize, len: usize) -> Self {
        if len <= 1 {
            return Self::TOP;
        }
        let fraction = ordinal as f64 / (len - 1) as f64;
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Fraction of the scrollable range.
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Map onto an integer scrollbar range `0..=max`, rounding to nearest.
    pub fn to_offset(self, max: usize) -> usize {
        (self.0 * max as f64).round() as usize
    }
}
