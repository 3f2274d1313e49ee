//! Derived string properties
//!
//! The content hash (lowercase hex SHA-256 of the UTF-8 bytes) doubles as
//! the record id, so identity is a deterministic function of the value.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Properties derived from a string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Character count (Unicode scalar values, not bytes)
    pub length: usize,

    /// Whether the normalized form reads the same reversed
    pub is_palindrome: bool,

    /// Count of distinct characters in the original value
    pub unique_characters: usize,

    /// Count of whitespace-delimited tokens
    pub word_count: usize,

    /// Lowercase hex SHA-256 of the original value; doubles as record id
    pub word_hash: String,

    /// Per-character occurrence counts over the original value
    pub character_frequency_map: HashMap<char, u64>,
}

/// Compute the lowercase hex SHA-256 digest of the UTF-8 bytes of `value`.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Derive all properties of `value`.
///
/// The palindrome check runs over the lowercased value with ASCII spaces
/// removed (only `' '`, not all whitespace); an empty normalized form is
/// not a palindrome. Everything else is computed over the original value.
pub fn extract(value: &str) -> StringProperties {
    let normalized: String = value.to_lowercase().chars().filter(|c| *c != ' ').collect();
    let is_palindrome = !normalized.is_empty() && normalized.chars().eq(normalized.chars().rev());

    let mut character_frequency_map: HashMap<char, u64> = HashMap::new();
    for c in value.chars() {
        *character_frequency_map.entry(c).or_insert(0) += 1;
    }

    StringProperties {
        length: value.chars().count(),
        is_palindrome,
        unique_characters: value.chars().collect::<HashSet<_>>().len(),
        word_count: value.split_whitespace().count(),
        word_hash: content_hash(value),
        character_frequency_map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_known_vector() {
        // SHA-256 of the empty string
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_extract_is_idempotent() {
        let a = extract("Hello World");
        let b = extract("Hello World");
        assert_eq!(a, b);
        assert_eq!(a.word_hash, content_hash("Hello World"));
    }

    #[test]
    fn test_extract_empty_string() {
        let props = extract("");
        assert_eq!(props.length, 0);
        assert!(!props.is_palindrome);
        assert_eq!(props.unique_characters, 0);
        assert_eq!(props.word_count, 0);
        assert!(props.character_frequency_map.is_empty());
    }

    #[test]
    fn test_palindrome_ignores_case_and_spaces() {
        // "Never odd or even" normalizes to "neveroddoreven"
        assert!(extract("Never odd or even").is_palindrome);
        assert!(extract("racecar").is_palindrome);
        // "amanaman" reversed is "namanama"
        assert!(!extract("A man a man").is_palindrome);
        assert!(!extract("banana").is_palindrome);
    }

    #[test]
    fn test_palindrome_keeps_non_space_whitespace() {
        // A tab survives normalization and breaks the palindrome
        assert!(extract("ab a ba").is_palindrome);
        assert!(!extract("ab\taba").is_palindrome);
    }

    #[test]
    fn test_hello_world_properties() {
        let props = extract("Hello World");
        assert_eq!(props.length, 11);
        assert_eq!(props.word_count, 2);
        // H, e, l, o, space, W, r, d
        assert_eq!(props.unique_characters, 8);
        assert_eq!(props.character_frequency_map[&'l'], 3);
        assert_eq!(props.character_frequency_map[&'o'], 2);
        assert_eq!(props.character_frequency_map[&' '], 1);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let props = extract("héllo");
        assert_eq!(props.length, 5);
        // h, é, l, o
        assert_eq!(props.unique_characters, 4);
    }

    #[test]
    fn test_word_count_collapses_whitespace_runs() {
        assert_eq!(extract("  a   b  c ").word_count, 3);
        assert_eq!(extract("   ").word_count, 0);
    }

    #[test]
    fn test_frequency_map_is_case_sensitive() {
        let props = extract("Aa");
        assert_eq!(props.character_frequency_map[&'A'], 1);
        assert_eq!(props.character_frequency_map[&'a'], 1);
        assert_eq!(props.unique_characters, 2);
    }
}
