pub mod freq;
pub mod pattern;
pub mod patterns;
pub mod validate;

use patterns::PatternMatcher;
use std::collections::HashMap;

/// Main classification function that takes a string value and returns the
/// list of grammars the whole value satisfies
pub fn classify(value: &str) -> Vec<String> {
    if value.is_empty() {
        return vec![];
    }

    let mut matches = Vec::new();

    // Check each pattern
    if patterns::bracket::is_match(value) {
        matches.push("bracket".to_string());
    }
    if patterns::email::is_match(value) {
        matches.push("email".to_string());
    }
    if patterns::phonenumber::is_match(value) {
        matches.push("phonenumber".to_string());
    }

    matches
}

pub fn get_all_matchers() -> HashMap<String, Box<dyn PatternMatcher>> {
    let mut matchers: HashMap<String, Box<dyn PatternMatcher>> = HashMap::new();

    matchers.insert("bracket".to_string(), Box::new(patterns::bracket::BracketMatcher {}));
    matchers.insert("email".to_string(), Box::new(patterns::email::EmailMatcher {}));
    matchers.insert("phonenumber".to_string(), Box::new(patterns::phonenumber::PhoneNumberMatcher {}));

    matchers
}
