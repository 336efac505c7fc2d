use std::cmp::Ordering;

use tracing::{debug, debug_span};

use crate::compare::compare_with;
use crate::error::{CollateError, Operand};
use crate::key::{sort_key, SortKey};
use crate::reader::canonical_key;
use crate::settings::Settings;

/// Dictionary-order comparator, ready to hand to a sort.
///
/// Holds no scan state: every comparison builds its own readers, so one
/// instance can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryOrder {
    tie_break: bool,
}

impl Default for DictionaryOrder {
    fn default() -> Self {
        Self { tie_break: true }
    }
}

impl DictionaryOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kana order only: readings that differ in flags alone compare equal.
    pub fn primary_only() -> Self {
        Self { tie_break: false }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            tie_break: settings.collation.tie_break,
        }
    }

    pub fn tie_break(&self) -> bool {
        self.tie_break
    }

    pub fn compare(&self, a: &str, b: &str) -> i32 {
        compare_with(a, b, self.tie_break)
    }

    pub fn try_compare(&self, a: Option<&str>, b: Option<&str>) -> Result<i32, CollateError> {
        let a = a.ok_or(CollateError::MissingOperand(Operand::Left))?;
        let b = b.ok_or(CollateError::MissingOperand(Operand::Right))?;
        Ok(self.compare(a, b))
    }

    pub fn ordering(&self, a: &str, b: &str) -> Ordering {
        self.compare(a, b).cmp(&0)
    }

    pub fn canonical_key(&self, reading: &str) -> String {
        canonical_key(reading)
    }

    pub fn sort_key(&self, reading: &str) -> SortKey {
        sort_key(reading)
    }

    /// Stable sort of readings.
    pub fn sort<S: AsRef<str>>(&self, readings: &mut [S]) {
        let _span = debug_span!("sort", len = readings.len(), tie_break = self.tie_break).entered();
        readings.sort_by(|a, b| self.ordering(a.as_ref(), b.as_ref()));
    }

    /// Stable sort of records by the reading `reading` extracts.
    ///
    /// Fails without reordering anything if some record has no reading.
    pub fn sort_by_reading<T, F>(&self, records: &mut [T], reading: F) -> Result<(), CollateError>
    where
        F: Fn(&T) -> Option<&str>,
    {
        let _span = debug_span!("sort_by_reading", len = records.len()).entered();
        if let Some(index) = records.iter().position(|r| reading(r).is_none()) {
            debug!(index, "record without reading");
            return Err(CollateError::MissingReading { index });
        }
        records.sort_by(|a, b| {
            self.ordering(
                reading(a).unwrap_or_default(),
                reading(b).unwrap_or_default(),
            )
        });
        Ok(())
    }
}
