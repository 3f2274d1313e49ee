//! Stored string analysis records

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{self, StringProperties};

/// A persisted string analysis.
///
/// `id` is the SHA-256 content hash of `value`, so identity is a pure
/// function of content and doubles as the dedup key (`word_hash` carries
/// the same digest). Records are immutable once inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringRecord {
    pub id: String,
    pub value: String,
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub word_hash: String,
    pub character_frequency_map: HashMap<char, u64>,
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Build a record from a value and its extracted properties.
    ///
    /// `created_at` is set here, once, and never changes.
    pub fn new(value: impl Into<String>, properties: StringProperties) -> Self {
        Self {
            id: properties.word_hash.clone(),
            value: value.into(),
            length: properties.length,
            is_palindrome: properties.is_palindrome,
            unique_characters: properties.unique_characters,
            word_count: properties.word_count,
            word_hash: properties.word_hash,
            character_frequency_map: properties.character_frequency_map,
            created_at: Utc::now(),
        }
    }

    /// Analyze `value` and build its record in one step.
    pub fn from_value(value: &str) -> Self {
        Self::new(value, analysis::extract(value))
    }
}
