//! Second stage of the reader: resolve one unit against the scan state.

use crate::flags::CharFlags;
use crate::tables::{kogaki, vowel_of};
use crate::unicode::{
    is_foldable_katakana, is_hiragana_syllable, katakana_to_hiragana, CHOONPU, DAKUTEN,
    HANDAKUTEN, ITERATION_MARK,
};

use super::PhoneticUnit;

/// Outcome of resolving one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub unit: PhoneticUnit,
    /// The lookahead was a sound mark folded into `unit`; skip it.
    pub consumes_lookahead: bool,
    /// Previous kana to carry into the next step.
    pub prev: Option<char>,
}

/// Resolve `current` given the previously remembered kana and one unit of
/// lookahead. Pure: the same inputs always give the same output.
pub fn resolve(prev: Option<char>, current: char, lookahead: Option<char>) -> Resolved {
    if current == CHOONPU {
        let ch = prev.and_then(vowel_of).unwrap_or(CHOONPU);
        return Resolved {
            unit: PhoneticUnit::new(ch, CharFlags::TYOUON),
            consumes_lookahead: false,
            prev,
        };
    }

    if current == ITERATION_MARK {
        return Resolved {
            unit: PhoneticUnit::new(prev.unwrap_or(ITERATION_MARK), CharFlags::KURIKAESI),
            consumes_lookahead: false,
            prev,
        };
    }

    let mut ch = current;
    let mut flags = CharFlags::NORMAL;

    if let Some(full) = kogaki(ch) {
        ch = full;
        flags |= CharFlags::KOGAKI;
    }

    if is_foldable_katakana(ch) {
        ch = katakana_to_hiragana(ch);
        flags |= CharFlags::KATAKANA;
    }

    let consumes_lookahead = match lookahead {
        Some(DAKUTEN) => {
            flags |= CharFlags::DAKUON;
            true
        }
        Some(HANDAKUTEN) => {
            flags |= CharFlags::HANDAKUON;
            true
        }
        _ => false,
    };

    Resolved {
        unit: PhoneticUnit::new(ch, flags),
        consumes_lookahead,
        prev: is_hiragana_syllable(ch).then_some(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_vowel_takes_previous_vowel() {
        let r = resolve(Some('か'), CHOONPU, None);
        assert_eq!(r.unit, PhoneticUnit::new('あ', CharFlags::TYOUON));
        assert_eq!(r.prev, Some('か'));
        assert!(!r.consumes_lookahead);
    }

    #[test]
    fn long_vowel_without_previous_passes_through() {
        let r = resolve(None, CHOONPU, Some(DAKUTEN));
        assert_eq!(r.unit, PhoneticUnit::new(CHOONPU, CharFlags::TYOUON));
        assert!(!r.consumes_lookahead);
        assert_eq!(r.prev, None);
    }

    #[test]
    fn iteration_mark_repeats_previous() {
        let r = resolve(Some('た'), ITERATION_MARK, None);
        assert_eq!(r.unit, PhoneticUnit::new('た', CharFlags::KURIKAESI));
        assert_eq!(r.prev, Some('た'));

        let r = resolve(None, ITERATION_MARK, None);
        assert_eq!(r.unit.ch, ITERATION_MARK);
    }

    #[test]
    fn small_katakana_with_mark() {
        // ヵ followed by ゛: small, katakana and voiced at once.
        let r = resolve(None, 'ヵ', Some(DAKUTEN));
        assert_eq!(r.unit.ch, 'か');
        assert_eq!(r.unit.flags.bits(), 8 | 32 | 1);
        assert!(r.consumes_lookahead);
        assert_eq!(r.prev, Some('か'));
    }

    #[test]
    fn semi_voiced_mark() {
        let r = resolve(Some('あ'), 'は', Some(HANDAKUTEN));
        assert_eq!(r.unit, PhoneticUnit::new('は', CharFlags::HANDAKUON));
        assert!(r.consumes_lookahead);
    }

    #[test]
    fn non_kana_clears_previous() {
        let r = resolve(Some('か'), 'a', Some('b'));
        assert_eq!(r.unit, PhoneticUnit::new('a', CharFlags::NORMAL));
        assert_eq!(r.prev, None);
        assert!(!r.consumes_lookahead);
    }

    #[test]
    fn folded_kana_is_remembered() {
        let r = resolve(None, 'ッ', None);
        assert_eq!(r.unit.ch, 'つ');
        assert_eq!(r.prev, Some('つ'));
    }
}
