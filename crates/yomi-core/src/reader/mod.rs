//! Reading scanner.
//!
//! Turns a reading into a sequence of [`PhoneticUnit`]s: a base kana plus the
//! flags that were folded away to reach it. Scanning runs in two stages:
//! [`expand`] composes the input and applies every context-free substitution,
//! then [`CharReader`] walks the expanded units, resolving ー and ゝ against the
//! previous kana and absorbing trailing sound marks.

mod expand;
mod resolve;

use std::iter::FusedIterator;

use serde::Serialize;

use crate::flags::CharFlags;

pub use expand::expand;
pub use resolve::{resolve, Resolved};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhoneticUnit {
    pub ch: char,
    pub flags: CharFlags,
}

impl PhoneticUnit {
    pub const fn new(ch: char, flags: CharFlags) -> Self {
        Self { ch, flags }
    }
}

/// Forward-only scanner over one reading.
///
/// Not restartable except through [`CharReader::reset`].
#[derive(Debug, Clone, Default)]
pub struct CharReader {
    units: Vec<char>,
    pos: usize,
    prev: Option<char>,
}

impl CharReader {
    pub fn new(reading: &str) -> Self {
        Self {
            units: expand(reading),
            pos: 0,
            prev: None,
        }
    }

    /// Start over on a new reading, reusing the unit buffer.
    pub fn reset(&mut self, reading: &str) {
        self.units.clear();
        self.units.extend(expand(reading));
        self.pos = 0;
        self.prev = None;
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.units.len()
    }
}

impl Iterator for CharReader {
    type Item = PhoneticUnit;

    fn next(&mut self) -> Option<PhoneticUnit> {
        let current = *self.units.get(self.pos)?;
        let lookahead = self.units.get(self.pos + 1).copied();
        let r = resolve(self.prev, current, lookahead);
        self.pos += if r.consumes_lookahead { 2 } else { 1 };
        self.prev = r.prev;
        Some(r.unit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.units.len() - self.pos.min(self.units.len());
        (left.div_ceil(2), Some(left))
    }
}

impl FusedIterator for CharReader {}

/// All units of `reading`, in order.
pub fn decompose(reading: &str) -> Vec<PhoneticUnit> {
    CharReader::new(reading).collect()
}

/// Base characters only, with every flag dropped.
///
/// This is the primary sort key. It cannot reproduce the tie-break on its
/// own; use [`crate::sort_key`] when sorting by precomputed key.
pub fn canonical_key(reading: &str) -> String {
    CharReader::new(reading).map(|u| u.ch).collect()
}
