//! Precomputed sort keys.

use std::cmp::Ordering;

use serde::Serialize;

use crate::flags::CharFlags;
use crate::reader::CharReader;

/// Full collation key: the canonical kana followed by the per-unit flags.
///
/// Field order matters for the derived `Ord`. `String` compares by UTF-8
/// bytes, which matches code point order, and the flag vectors of two equal
/// keys always have the same length, so `a.cmp(&b)` agrees in sign with
/// [`crate::compare`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SortKey {
    pub key: String,
    pub flags: Vec<CharFlags>,
}

impl SortKey {
    /// Ordering by the canonical kana alone.
    pub fn cmp_primary(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

pub fn sort_key(reading: &str) -> SortKey {
    let mut key = String::with_capacity(reading.len());
    let mut flags = Vec::with_capacity(reading.chars().count());
    for unit in CharReader::new(reading) {
        key.push(unit.ch);
        flags.push(unit.flags);
    }
    SortKey { key, flags }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_carries_flags() {
        let k = sort_key("ガー");
        assert_eq!(k.key, "かあ");
        assert_eq!(
            k.flags,
            [CharFlags::KATAKANA | CharFlags::DAKUON, CharFlags::TYOUON]
        );
    }

    #[test]
    fn tie_break_through_key() {
        assert!(sort_key("ぼんど") < sort_key("ホント"));
        assert!(sort_key("あろえ") < sort_key("アロエ"));
        assert_eq!(
            sort_key("ぼんど").cmp_primary(&sort_key("ホント")),
            Ordering::Equal
        );
    }

    #[test]
    fn prefix_sorts_first() {
        assert!(sort_key("てえた") < sort_key("てえたあ"));
        assert!(sort_key("") < sort_key("あ"));
    }
}
