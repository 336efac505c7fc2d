//! First stage of the reader: canonical composition plus table expansion.
//!
//! Every substitution that does not depend on scan state happens here, so the
//! second stage only ever looks at a flat, immutable unit sequence.

use unicode_normalization::UnicodeNormalization;

use crate::tables::{dakuon_base, handakuon_base, ligature, single_replace};
use crate::unicode::{DAKUTEN, HANDAKUTEN};

/// Compose `reading` to NFC and expand it into scan units.
///
/// Ligatures become their base kana followed by the paired unit, voiced and
/// semi-voiced kana become their base followed by ゛ or ゜, and
/// single-replacement characters are swapped one for one.
pub fn expand(reading: &str) -> Vec<char> {
    let mut units = Vec::with_capacity(reading.len());
    for c in reading.nfc() {
        if let Some((base, paired)) = ligature(c) {
            units.push(base);
            units.push(paired);
        } else if let Some(r) = single_replace(c) {
            units.push(r);
        } else if let Some(base) = dakuon_base(c) {
            units.push(base);
            units.push(DAKUTEN);
        } else if let Some(base) = handakuon_base(c) {
            units.push(base);
            units.push(HANDAKUTEN);
        } else {
            units.push(c);
        }
    }
    units
}
