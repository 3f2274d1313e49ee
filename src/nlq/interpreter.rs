//! Free-text query interpretation

use serde::Serialize;

use crate::filter::StringFilters;

use super::errors::{NlqError, NlqResult};
use super::rules::{build_rules, Rule};

/// A successfully interpreted query: the derived filter set together with
/// the original text it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretedQuery {
    pub original_query: String,
    pub filters: StringFilters,
}

/// Rule-based natural-language query interpreter.
///
/// Best-effort fixed pattern matching, not language understanding. The
/// rule table (and its regexes) is compiled once; construct at startup and
/// inject where needed.
pub struct QueryInterpreter {
    rules: Vec<Rule>,
}

impl QueryInterpreter {
    pub fn new() -> Self {
        Self {
            rules: build_rules(),
        }
    }

    /// Translate free text into a filter set.
    ///
    /// All rules run, in order, over the lowercased query. Fails with
    /// `ConflictingFilters` when derived bounds cannot hold, and with
    /// `UnparseableQuery` when no rule fired.
    pub fn interpret(&self, query: &str) -> NlqResult<InterpretedQuery> {
        let lowered = query.to_lowercase();
        let mut filters = StringFilters::default();

        for rule in &self.rules {
            rule.apply(&lowered, &mut filters);
        }

        if let Some((min, max)) = filters.bounds_conflict() {
            return Err(NlqError::ConflictingFilters { min, max });
        }
        if filters.is_empty() {
            return Err(NlqError::UnparseableQuery {
                query: query.to_string(),
            });
        }

        Ok(InterpretedQuery {
            original_query: query.to_string(),
            filters,
        })
    }
}

impl Default for QueryInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_query() {
        let interpreter = QueryInterpreter::new();
        let result = interpreter
            .interpret("single word palindromes longer than 5")
            .unwrap();

        assert_eq!(result.original_query, "single word palindromes longer than 5");
        assert_eq!(result.filters.is_palindrome, Some(true));
        assert_eq!(result.filters.word_count, Some(1));
        assert_eq!(result.filters.min_length, Some(6));
        assert_eq!(result.filters.max_length, None);
        assert_eq!(result.filters.contains_character, None);
    }

    #[test]
    fn test_case_insensitive() {
        let interpreter = QueryInterpreter::new();
        let result = interpreter.interpret("PALINDROMES LONGER THAN 7").unwrap();

        assert_eq!(result.filters.is_palindrome, Some(true));
        assert_eq!(result.filters.min_length, Some(8));
        // The original text is returned untouched
        assert_eq!(result.original_query, "PALINDROMES LONGER THAN 7");
    }

    #[test]
    fn test_conflicting_bounds() {
        let interpreter = QueryInterpreter::new();
        let err = interpreter
            .interpret("shorter than 3 but at least 5 characters")
            .unwrap_err();

        assert_eq!(err, NlqError::ConflictingFilters { min: 5, max: 2 });
    }

    #[test]
    fn test_unparseable_query() {
        let interpreter = QueryInterpreter::new();
        let err = interpreter.interpret("banana").unwrap_err();

        assert_eq!(
            err,
            NlqError::UnparseableQuery {
                query: "banana".to_string()
            }
        );
    }

    #[test]
    fn test_satisfiable_bounds_pass_validation() {
        let interpreter = QueryInterpreter::new();
        let result = interpreter
            .interpret("longer than 2 and shorter than 10")
            .unwrap();

        assert_eq!(result.filters.min_length, Some(3));
        assert_eq!(result.filters.max_length, Some(9));
    }

    #[test]
    fn test_equal_bounds_are_not_a_conflict() {
        let interpreter = QueryInterpreter::new();
        let result = interpreter
            .interpret("at least 5 characters shorter than 6")
            .unwrap();

        assert_eq!(result.filters.min_length, Some(5));
        assert_eq!(result.filters.max_length, Some(5));
    }
}
