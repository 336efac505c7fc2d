//! Dictionary-order collation for Japanese readings (読み).
//!
//! Readings are ordered by kana pronunciation first. When two readings have
//! the same kana, voicing, long-vowel, small-kana, repeat-mark and script
//! differences decide, in that order of flag weight.
//!
//! ```
//! use yomi_core::{canonical_key, compare};
//!
//! assert!(compare("あろえ", "アロエ") < 0);
//! assert!(compare("ぼんど", "ホント") < 0);
//! assert_eq!(canonical_key("ぼんど"), "ほんと");
//! ```

pub mod compare;
pub mod error;
pub mod flags;
pub mod key;
pub mod order;
pub mod reader;
pub mod settings;
pub mod tables;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use compare::{compare, try_compare};
pub use error::{CollateError, Operand};
pub use flags::CharFlags;
pub use key::{sort_key, SortKey};
pub use order::DictionaryOrder;
pub use reader::{canonical_key, decompose, CharReader, PhoneticUnit};
