//! Ordered rule table for the query interpreter
//!
//! Each rule is a (matcher, effect) pair over the lowercased query text.
//! Rules run in a fixed order and are independent: several may fire on the
//! same query, and a later rule overwrites an earlier one where their
//! effects collide (`at least N characters` over `longer than N`,
//! `first vowel` over the letter patterns).

use regex::Regex;

use crate::filter::StringFilters;

/// A single (matcher, effect) pair.
pub(crate) struct Rule {
    apply: Box<dyn Fn(&str, &mut StringFilters) -> bool + Send + Sync>,
}

impl Rule {
    fn new(apply: impl Fn(&str, &mut StringFilters) -> bool + Send + Sync + 'static) -> Self {
        Self {
            apply: Box::new(apply),
        }
    }

    /// Run the rule against the lowercased query. Returns whether it fired.
    pub fn apply(&self, query: &str, filters: &mut StringFilters) -> bool {
        (self.apply)(query, filters)
    }
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("hardcoded pattern")
}

/// One captured integer from `re`, if the query matches and the number
/// fits in an i64.
fn captured_number(re: &Regex, query: &str) -> Option<i64> {
    re.captures(query)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Build the rule table in evaluation order.
pub(crate) fn build_rules() -> Vec<Rule> {
    let longer_than = pattern(r"longer than (\d+)");
    let shorter_than = pattern(r"shorter than (\d+)");
    let at_least = pattern(r"at least (\d+) characters");
    let letter_patterns = vec![
        pattern(r"contain(?:s|ing) (?:the letter|the character) ([a-z])"),
        pattern(r"with (?:the letter|the character) ([a-z])"),
        pattern(r"that (?:has|have) (?:the letter|the character) ([a-z])"),
    ];

    vec![
        Rule::new(|query, filters| {
            if query.contains("palindrom") {
                filters.is_palindrome = Some(true);
                true
            } else {
                false
            }
        }),
        Rule::new(|query, filters| {
            // Mutually exclusive phrases: the first present wins.
            const PHRASES: [(&str, i64); 5] = [
                ("single word", 1),
                ("two word", 2),
                ("2 word", 2),
                ("three word", 3),
                ("3 word", 3),
            ];
            for (phrase, count) in PHRASES {
                if query.contains(phrase) {
                    filters.word_count = Some(count);
                    return true;
                }
            }
            false
        }),
        Rule::new(move |query, filters| {
            match captured_number(&longer_than, query) {
                Some(n) => {
                    filters.min_length = Some(n.saturating_add(1));
                    true
                }
                None => false,
            }
        }),
        Rule::new(move |query, filters| {
            match captured_number(&shorter_than, query) {
                Some(n) => {
                    filters.max_length = Some(n.saturating_sub(1));
                    true
                }
                None => false,
            }
        }),
        Rule::new(move |query, filters| {
            match captured_number(&at_least, query) {
                Some(n) => {
                    filters.min_length = Some(n);
                    true
                }
                None => false,
            }
        }),
        Rule::new(move |query, filters| {
            // First matching pattern wins; the rest are not tried.
            for re in &letter_patterns {
                if let Some(caps) = re.captures(query) {
                    filters.contains_character = caps[1].chars().next();
                    return true;
                }
            }
            false
        }),
        Rule::new(|query, filters| {
            if query.contains("first vowel") {
                filters.contains_character = Some('a');
                true
            } else {
                false
            }
        }),
    ]
}
