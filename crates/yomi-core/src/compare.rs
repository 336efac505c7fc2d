//! Two-phase dictionary comparison.
//!
//! Phase one compares base kana code points in lockstep while logging each
//! side's flags. Only when the kana are identical does phase two compare the
//! flag logs. Results carry magnitude: a kana mismatch returns the code point
//! difference, a flag mismatch the flag value difference.

use crate::error::CollateError;
use crate::flags::CharFlags;
use crate::order::DictionaryOrder;
use crate::reader::CharReader;

/// Compare two readings in dictionary order.
///
/// Negative when `a` sorts first, positive when `b` does, zero when both
/// phases tie.
pub fn compare(a: &str, b: &str) -> i32 {
    compare_with(a, b, true)
}

/// Like [`compare`], but rejects a missing operand.
pub fn try_compare(a: Option<&str>, b: Option<&str>) -> Result<i32, CollateError> {
    DictionaryOrder::new().try_compare(a, b)
}

/// Shared implementation. With `tie_break` off, readings that differ only in
/// their flags compare equal.
pub(crate) fn compare_with(a: &str, b: &str, tie_break: bool) -> i32 {
    let mut reader_a = CharReader::new(a);
    let mut reader_b = CharReader::new(b);
    let mut log_a: Vec<CharFlags> = Vec::with_capacity(a.len());
    let mut log_b: Vec<CharFlags> = Vec::with_capacity(b.len());

    loop {
        match (reader_a.next(), reader_b.next()) {
            (None, None) => break,
            (Some(_), None) => return 1,
            (None, Some(_)) => return -1,
            (Some(ua), Some(ub)) => {
                let diff = ua.ch as i32 - ub.ch as i32;
                if diff != 0 {
                    return diff;
                }
                log_a.push(ua.flags);
                log_b.push(ub.flags);
            }
        }
    }

    if tie_break {
        compare_flags(&log_a, &log_b)
    } else {
        0
    }
}

fn compare_flags(a: &[CharFlags], b: &[CharFlags]) -> i32 {
    let mut ia = a.iter();
    let mut ib = b.iter();
    loop {
        match (ia.next(), ib.next()) {
            (None, None) => return 0,
            (Some(_), None) => return 1,
            (None, Some(_)) => return -1,
            (Some(fa), Some(fb)) => {
                let diff = fa.diff(*fb);
                if diff != 0 {
                    return diff;
                }
            }
        }
    }
}
