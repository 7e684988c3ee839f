use super::PatternMatcher;
use crate::pattern::{self, MatchResult, Pattern};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Area code is optional, the exchange-number tail is not
    static ref PHONE_PATTERN: Regex = Regex::new(
        r"^(\d{3}-)?\d{3}-\d{4}$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// First phone-like token in `text`, if any. Prefers the form with an area
/// code when both readings start at the same position.
pub fn extract_phonenumber(text: &str) -> MatchResult {
    pattern::extract(text, Pattern::phone())
}

pub struct PhoneNumberMatcher {}

impl PatternMatcher for PhoneNumberMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}
