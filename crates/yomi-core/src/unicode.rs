//! Character-level Unicode classification for kana readings.

/// Offset between a katakana letter and its hiragana counterpart.
const KATAKANA_SHIFT: u32 = 0x60;

/// Voiced sound mark ゛ (U+309B). Dakuon decomposition inserts it after the base kana.
pub const DAKUTEN: char = '\u{309B}';

/// Semi-voiced sound mark ゜ (U+309C).
pub const HANDAKUTEN: char = '\u{309C}';

/// Prolonged sound mark ー (U+30FC).
pub const CHOONPU: char = 'ー';

/// Hiragana iteration mark ゝ (U+309D). Every repeat-mark variant folds to it.
pub const ITERATION_MARK: char = 'ゝ';

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the ligatures
/// ヷ..ヺ and ヿ, which the reader expands before folding.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Half-width katakana, including the half-width sound marks (U+FF66..U+FF9F).
pub fn is_halfwidth_katakana(c: char) -> bool {
    ('\u{FF66}'..='\u{FF9F}').contains(&c)
}

/// Hiragana syllables あ..=ん. Only these are remembered as the previous kana
/// when resolving a following ー or ゝ.
pub fn is_hiragana_syllable(c: char) -> bool {
    ('あ'..='ん').contains(&c)
}

/// Katakana letters that have a hiragana counterpart 0x60 below (ァ..=ヶ).
pub fn is_foldable_katakana(c: char) -> bool {
    ('ァ'..='ヶ').contains(&c)
}

/// Fold a katakana letter onto the hiragana block. Other characters are
/// returned unchanged.
pub fn katakana_to_hiragana(c: char) -> char {
    if is_foldable_katakana(c) {
        char::from_u32(c as u32 - KATAKANA_SHIFT).unwrap_or(c)
    } else {
        c
    }
}

/// Check if a string looks like a kana reading: non-empty, and every character
/// is hiragana, katakana or half-width katakana.
pub fn is_kana_reading(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| is_hiragana(c) || is_katakana(c) || is_halfwidth_katakana(c))
}
