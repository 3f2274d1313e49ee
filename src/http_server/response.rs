//! Response envelopes
//!
//! Wire shapes for the string endpoints. `created_at` is rendered as
//! RFC 3339 with a `Z` suffix.

use std::collections::HashMap;

use chrono::SecondsFormat;
use serde::Serialize;

use crate::filter::StringFilters;
use crate::nlq::InterpretedQuery;
use crate::store::StringRecord;

/// Derived properties as exposed on the wire
#[derive(Debug, Clone, Serialize)]
pub struct PropertiesBody {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub word_hash: String,
    pub character_frequency_map: HashMap<char, u64>,
}

/// A single stored string with its analysis
#[derive(Debug, Clone, Serialize)]
pub struct StringResponse {
    pub id: String,
    pub value: String,
    pub properties: PropertiesBody,
    pub created_at: String,
}

impl From<StringRecord> for StringResponse {
    fn from(record: StringRecord) -> Self {
        Self {
            created_at: record
                .created_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            properties: PropertiesBody {
                length: record.length,
                is_palindrome: record.is_palindrome,
                unique_characters: record.unique_characters,
                word_count: record.word_count,
                word_hash: record.word_hash,
                character_frequency_map: record.character_frequency_map,
            },
            id: record.id,
            value: record.value,
        }
    }
}

/// Listing with the filters that produced it
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub data: Vec<StringResponse>,
    pub count: usize,
    pub filters_applied: StringFilters,
}

impl ListResponse {
    pub fn new(records: Vec<StringRecord>, filters_applied: StringFilters) -> Self {
        let data: Vec<StringResponse> = records.into_iter().map(Into::into).collect();
        Self {
            count: data.len(),
            data,
            filters_applied,
        }
    }
}

/// Listing produced by the natural-language endpoint
#[derive(Debug, Clone, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringResponse>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

impl NaturalLanguageResponse {
    pub fn new(records: Vec<StringRecord>, interpreted_query: InterpretedQuery) -> Self {
        let data: Vec<StringResponse> = records.into_iter().map(Into::into).collect();
        Self {
            count: data.len(),
            data,
            interpreted_query,
        }
    }
}

/// Delete acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self { deleted: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_response_shape() {
        let response: StringResponse = StringRecord::from_value("Hello World").into();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], json["properties"]["word_hash"]);
        assert_eq!(json["value"], "Hello World");
        assert_eq!(json["properties"]["length"], 11);
        assert_eq!(json["properties"]["word_count"], 2);
        assert_eq!(json["properties"]["character_frequency_map"]["l"], 3);
        // Z-suffixed UTC timestamp
        assert!(json["created_at"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_list_response_counts_and_echoes_filters() {
        let filters = StringFilters {
            word_count: Some(2),
            ..Default::default()
        };
        let response = ListResponse::new(
            vec![StringRecord::from_value("two words")],
            filters.clone(),
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["filters_applied"], serde_json::json!({"word_count": 2}));
    }
}
