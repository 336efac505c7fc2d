//! Secondary phonetic annotations attached to each reading unit.
//!
//! The numeric value of a flag set is compared arithmetically when two
//! readings share the same kana, so the bit assignment is part of the
//! ordering: a voiced unit (1) sorts before a katakana one (32).

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CharFlags(u8);

impl CharFlags {
    pub const NORMAL: Self = Self(0);
    /// 濁音: voiced sound mark.
    pub const DAKUON: Self = Self(1);
    /// 半濁音: semi-voiced sound mark.
    pub const HANDAKUON: Self = Self(2);
    /// 長音: resolved prolonged sound mark.
    pub const TYOUON: Self = Self(4);
    /// 小書き: small kana.
    pub const KOGAKI: Self = Self(8);
    /// 繰り返し: resolved iteration mark.
    pub const KURIKAESI: Self = Self(16);
    /// Written in katakana.
    pub const KATAKANA: Self = Self(32);

    const NAMED: [(Self, &'static str); 6] = [
        (Self::KATAKANA, "Katakana"),
        (Self::KURIKAESI, "Kurikaesi"),
        (Self::KOGAKI, "Kogaki"),
        (Self::TYOUON, "Tyouon"),
        (Self::HANDAKUON, "Handakuon"),
        (Self::DAKUON, "Dakuon"),
    ];

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_normal(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Signed difference used by the tie-break phase.
    pub fn diff(self, other: Self) -> i32 {
        i32::from(self.0) - i32::from(other.0)
    }
}

impl BitOr for CharFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CharFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for CharFlags {
    /// `Normal`, or the set flag names joined by `|`, most significant first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_normal() {
            return f.write_str("Normal");
        }
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
