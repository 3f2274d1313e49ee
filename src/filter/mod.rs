//! Filter evaluation over stored string records
//!
//! A filter set is a mapping of optional constraints combined with AND
//! logic; absent keys impose no constraint. The same predicate backs the
//! direct query-parameter endpoint and the natural-language endpoint.

use serde::{Deserialize, Serialize};

use crate::store::StringRecord;

/// Optional constraints over stored records.
///
/// Length bounds are signed so the interpreter can derive an unsatisfiable
/// bound (e.g. "shorter than 0" yields `max_length = -1`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringFilters {
    /// Exact palindrome status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Inclusive lower bound on character length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,

    /// Inclusive upper bound on character length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,

    /// Exact word count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,

    /// Case-sensitive single-character containment in the original value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl StringFilters {
    /// True when no constraint is present.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Returns the offending `(min, max)` pair when both bounds are present
    /// and cannot hold simultaneously.
    pub fn bounds_conflict(&self) -> Option<(i64, i64)> {
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) if min > max => Some((min, max)),
            _ => None,
        }
    }

    /// A record matches iff it satisfies every present constraint.
    pub fn matches(&self, record: &StringRecord) -> bool {
        if let Some(p) = self.is_palindrome {
            if record.is_palindrome != p {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if (record.length as i64) < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if (record.length as i64) > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if record.word_count as i64 != count {
                return false;
            }
        }
        if let Some(c) = self.contains_character {
            if !record.value.contains(c) {
                return false;
            }
        }
        true
    }
}
