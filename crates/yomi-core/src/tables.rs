//! Static kana lookup tables.
//!
//! Each table is a `match` keyed by a single scalar, so lookups are
//! allocation-free and the tables are trivially shared between threads.

use crate::unicode::{CHOONPU, DAKUTEN, HANDAKUTEN, ITERATION_MARK};

/// A character that expands into two units: a base kana followed by either a
/// sound mark or a literal kana.
pub fn ligature(c: char) -> Option<(char, char)> {
    let pair = match c {
        'ゟ' => ('よ', 'り'),
        'ヷ' => ('ワ', DAKUTEN),
        'ヸ' => ('ヰ', DAKUTEN),
        'ヹ' => ('ヱ', DAKUTEN),
        'ヺ' => ('ヲ', DAKUTEN),
        'ヿ' => ('コ', 'ト'),
        _ => return None,
    };
    Some(pair)
}

/// One-to-one replacements: half-width katakana, stray sound marks, repeat
/// mark variants and long-vowel look-alikes.
pub fn single_replace(c: char) -> Option<char> {
    let r = match c {
        'ｦ' => 'ヲ',
        'ｧ' => 'ァ',
        'ｨ' => 'ィ',
        'ｩ' => 'ゥ',
        'ｪ' => 'ェ',
        'ｫ' => 'ォ',
        'ｬ' => 'ャ',
        'ｭ' => 'ュ',
        'ｮ' => 'ョ',
        'ｯ' => 'ッ',
        'ｰ' => CHOONPU,
        'ｱ' => 'ア',
        'ｲ' => 'イ',
        'ｳ' => 'ウ',
        'ｴ' => 'エ',
        'ｵ' => 'オ',
        'ｶ' => 'カ',
        'ｷ' => 'キ',
        'ｸ' => 'ク',
        'ｹ' => 'ケ',
        'ｺ' => 'コ',
        'ｻ' => 'サ',
        'ｼ' => 'シ',
        'ｽ' => 'ス',
        'ｾ' => 'セ',
        'ｿ' => 'ソ',
        'ﾀ' => 'タ',
        'ﾁ' => 'チ',
        'ﾂ' => 'ツ',
        'ﾃ' => 'テ',
        'ﾄ' => 'ト',
        'ﾅ' => 'ナ',
        'ﾆ' => 'ニ',
        'ﾇ' => 'ヌ',
        'ﾈ' => 'ネ',
        'ﾉ' => 'ノ',
        'ﾊ' => 'ハ',
        'ﾋ' => 'ヒ',
        'ﾌ' => 'フ',
        'ﾍ' => 'ヘ',
        'ﾎ' => 'ホ',
        'ﾏ' => 'マ',
        'ﾐ' => 'ミ',
        'ﾑ' => 'ム',
        'ﾒ' => 'メ',
        'ﾓ' => 'モ',
        'ﾔ' => 'ヤ',
        'ﾕ' => 'ユ',
        'ﾖ' => 'ヨ',
        'ﾗ' => 'ラ',
        'ﾘ' => 'リ',
        'ﾙ' => 'ル',
        'ﾚ' => 'レ',
        'ﾛ' => 'ロ',
        'ﾜ' => 'ワ',
        'ﾝ' => 'ン',
        'ﾞ' | '\u{3099}' => DAKUTEN,
        'ﾟ' | '\u{309A}' => HANDAKUTEN,
        'ゞ' | 'ヽ' | 'ヾ' => ITERATION_MARK,
        '－' => CHOONPU,
        _ => return None,
    };
    Some(r)
}

/// Voiced kana to its unvoiced base.
pub fn dakuon_base(c: char) -> Option<char> {
    let base = match c {
        'が' => 'か',
        'ぎ' => 'き',
        'ぐ' => 'く',
        'げ' => 'け',
        'ご' => 'こ',
        'ざ' => 'さ',
        'じ' => 'し',
        'ず' => 'す',
        'ぜ' => 'せ',
        'ぞ' => 'そ',
        'だ' => 'た',
        'ぢ' => 'ち',
        'づ' => 'つ',
        'で' => 'て',
        'ど' => 'と',
        'ば' => 'は',
        'び' => 'ひ',
        'ぶ' => 'ふ',
        'べ' => 'へ',
        'ぼ' => 'ほ',
        'ゔ' => 'う',
        'ガ' => 'カ',
        'ギ' => 'キ',
        'グ' => 'ク',
        'ゲ' => 'ケ',
        'ゴ' => 'コ',
        'ザ' => 'サ',
        'ジ' => 'シ',
        'ズ' => 'ス',
        'ゼ' => 'セ',
        'ゾ' => 'ソ',
        'ダ' => 'タ',
        'ヂ' => 'チ',
        'ヅ' => 'ツ',
        'デ' => 'テ',
        'ド' => 'ト',
        'バ' => 'ハ',
        'ビ' => 'ヒ',
        'ブ' => 'フ',
        'ベ' => 'ヘ',
        'ボ' => 'ホ',
        'ヴ' => 'ウ',
        _ => return None,
    };
    Some(base)
}

/// Semi-voiced kana to its unvoiced base.
pub fn handakuon_base(c: char) -> Option<char> {
    let base = match c {
        'ぱ' => 'は',
        'ぴ' => 'ひ',
        'ぷ' => 'ふ',
        'ぺ' => 'へ',
        'ぽ' => 'ほ',
        'パ' => 'ハ',
        'ピ' => 'ヒ',
        'プ' => 'フ',
        'ペ' => 'ヘ',
        'ポ' => 'ホ',
        _ => return None,
    };
    Some(base)
}

/// Small kana to the full-size form.
pub fn kogaki(c: char) -> Option<char> {
    let full = match c {
        'ぁ' => 'あ',
        'ぃ' => 'い',
        'ぅ' => 'う',
        'ぇ' => 'え',
        'ぉ' => 'お',
        'ゃ' => 'や',
        'ゅ' => 'ゆ',
        'ょ' => 'よ',
        'っ' => 'つ',
        'ゕ' => 'か',
        'ゖ' => 'け',
        'ゎ' => 'わ',
        'ァ' => 'ア',
        'ィ' => 'イ',
        'ゥ' => 'ウ',
        'ェ' => 'エ',
        'ォ' => 'オ',
        'ャ' => 'ヤ',
        'ュ' => 'ユ',
        'ョ' => 'ヨ',
        'ッ' => 'ツ',
        'ヵ' => 'カ',
        'ヶ' => 'ケ',
        'ヮ' => 'ワ',
        _ => return None,
    };
    Some(full)
}

/// The vowel a following ー stretches, keyed by hiragana syllable.
pub fn vowel_of(c: char) -> Option<char> {
    let vowel = match c {
        'あ' | 'か' | 'さ' | 'た' | 'な' | 'は' | 'ま' | 'や' | 'ら' | 'わ' => 'あ',
        'い' | 'き' | 'し' | 'ち' | 'に' | 'ひ' | 'み' | 'り' | 'ゐ' => 'い',
        'う' | 'く' | 'す' | 'つ' | 'ぬ' | 'ふ' | 'む' | 'ゆ' | 'る' => 'う',
        'え' | 'け' | 'せ' | 'て' | 'ね' | 'へ' | 'め' | 'れ' | 'ゑ' => 'え',
        'お' | 'こ' | 'そ' | 'と' | 'の' | 'ほ' | 'も' | 'よ' | 'ろ' | 'を' => 'お',
        'ん' => 'ん',
        _ => return None,
    };
    Some(vowel)
}
