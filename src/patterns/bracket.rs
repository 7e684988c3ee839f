use super::PatternMatcher;
use crate::pattern::{self, MatchResult, Pattern};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BRACKET_PATTERN: Regex = Regex::new(
        r"^<.*>$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    BRACKET_PATTERN.is_match(value)
}

/// Longest `<`...`>` span in `text`. The inner run is greedy, so with
/// several closing brackets on a line the span ends at the last one.
pub fn extract_span(text: &str) -> MatchResult {
    pattern::extract(text, Pattern::angle_span())
}

pub struct BracketMatcher {}

impl PatternMatcher for BracketMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_spans() {
        let valid_spans = vec![
            "<To serve man>",
            "<>",
            "<a <nested> b>",
            "<To serve man> for dinner.>",
        ];

        for span in valid_spans {
            assert!(is_match(span), "Span should be valid: {}", span);
        }
    }

    #[test]
    fn test_invalid_spans() {
        let invalid_spans = vec![
            "To serve man",
            "<unclosed",
            "unopened>",
            "before <x> after",
        ];

        for span in invalid_spans {
            assert!(!is_match(span), "Span should be invalid: {}", span);
        }
    }

    #[test]
    fn test_extract_reaches_last_bracket() {
        let result = extract_span("<To serve man> for dinner.>");
        assert_eq!(result.text(), Some("<To serve man> for dinner.>"));
    }

    #[test]
    fn test_extract_single_span() {
        let result = extract_span("say <hello> loudly");
        assert_eq!(result.text(), Some("<hello>"));
    }

    #[test]
    fn test_extract_without_span() {
        assert_eq!(extract_span("no brackets at all"), MatchResult::NotFound);
        assert_eq!(extract_span("<only opened"), MatchResult::NotFound);
    }
}
