use super::PatternMatcher;
use crate::pattern::{self, MatchResult, Pattern};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anchored form of the extraction grammar: the whole value must be one token
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// First email-like token in `text`, if any.
pub fn extract_email(text: &str) -> MatchResult {
    pattern::extract(text, Pattern::email())
}

pub struct EmailMatcher {}

impl PatternMatcher for EmailMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}
