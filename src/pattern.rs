use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    // Preset grammars, compiled once at first use
    static ref EMAIL: Pattern = Pattern {
        regex: Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,3}").unwrap(),
    };
    static ref PHONE: Pattern = Pattern {
        regex: Regex::new(r"(\d{3}-)?\d{3}-\d{4}").unwrap(),
    };
    static ref ANGLE_SPAN: Pattern = Pattern {
        regex: Regex::new(r"<.*>").unwrap(),
    };
}

/// Failure to construct a pattern. Matching itself never fails; a pattern
/// that compiled is valid for every subsequent `extract` call.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("malformed pattern expression: {0}")]
    Malformed(#[from] regex::Error),
}

/// An immutable description of a token shape. Compiled once, then only read.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile an expression into a pattern. All grammar validation happens
    /// here; `extract` takes well-formedness as a given.
    pub fn new(expr: &str) -> Result<Pattern, PatternError> {
        Ok(Pattern {
            regex: Regex::new(expr)?,
        })
    }

    /// Email-like tokens: local part, `@`, domain, dot, 2-3 letter TLD.
    pub fn email() -> &'static Pattern {
        &EMAIL
    }

    /// Phone-like tokens: optional `ddd-` area code, then `ddd-dddd`.
    pub fn phone() -> &'static Pattern {
        &PHONE
    }

    /// `<` followed by the longest possible run of characters, then `>`.
    /// Greedy: given several closing brackets, the span reaches the last one.
    pub fn angle_span() -> &'static Pattern {
        &ANGLE_SPAN
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    fn find(&self, text: &str) -> Option<(usize, usize)> {
        self.regex.find(text).map(|m| (m.start(), m.end()))
    }
}

/// Outcome of a single extraction attempt. `NotFound` is a normal result,
/// not an error; callers branch on the variant before reading any field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Found {
        text: String,
        start: usize,
        end: usize,
    },
    NotFound,
}

impl MatchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found { .. })
    }

    /// The matched substring, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            MatchResult::Found { text, .. } => Some(text),
            MatchResult::NotFound => None,
        }
    }

    /// Byte offsets of the match within the input, if any.
    pub fn span(&self) -> Option<(usize, usize)> {
        match self {
            MatchResult::Found { start, end, .. } => Some((*start, *end)),
            MatchResult::NotFound => None,
        }
    }
}

/// Scan `text` left to right and return the leftmost substring matching
/// `pattern`, with its byte offsets. Quantifiers are greedy: the match takes
/// the longest span that still satisfies trailing literal requirements.
/// Empty text, or text with no candidate substring, yields `NotFound`.
pub fn extract(text: &str, pattern: &Pattern) -> MatchResult {
    match pattern.find(text) {
        Some((start, end)) => MatchResult::Found {
            text: text[start..end].to_string(),
            start,
            end,
        },
        None => MatchResult::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email_found() {
        let text = "Please contact us at shadyahmed@gmail.com  for further information.";
        let result = extract(text, Pattern::email());
        match result {
            MatchResult::Found { text: found, start, end } => {
                assert_eq!(found, "shadyahmed@gmail.com");
                assert_eq!(&text[start..end], "shadyahmed@gmail.com");
                assert!(start <= end);
            }
            MatchResult::NotFound => panic!("expected a match"),
        }
    }

    #[test]
    fn test_extract_no_at_sign_is_not_found() {
        let result = extract("does not contain email", Pattern::email());
        assert_eq!(result, MatchResult::NotFound);
        assert!(result.text().is_none());
    }

    #[test]
    fn test_extract_phone_with_area_code() {
        let result = extract("My number is 415-555-4242", Pattern::phone());
        assert_eq!(result.text(), Some("415-555-4242"));
    }

    #[test]
    fn test_extract_phone_without_area_code() {
        let result = extract("My number is 555-4242", Pattern::phone());
        assert_eq!(result.text(), Some("555-4242"));
    }

    #[test]
    fn test_angle_span_is_greedy() {
        let result = extract("<To serve man> for dinner.>", Pattern::angle_span());
        assert_eq!(result.text(), Some("<To serve man> for dinner.>"));
        assert_eq!(result.span(), Some((0, 27)));
    }

    #[test]
    fn test_extract_is_deterministic() {
        let text = "reach me at user@example.com today";
        let first = extract(text, Pattern::email());
        let second = extract(text, Pattern::email());
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_text_yields_not_found_for_every_grammar() {
        for pattern in [Pattern::email(), Pattern::phone(), Pattern::angle_span()] {
            assert_eq!(extract("", pattern), MatchResult::NotFound);
        }
    }

    #[test]
    fn test_leftmost_match_wins() {
        let result = extract("a@b.com then c@d.org", Pattern::email());
        assert_eq!(result.text(), Some("a@b.com"));
    }

    #[test]
    fn test_malformed_expression_is_a_construction_error() {
        assert!(Pattern::new(r"(unclosed").is_err());
    }

    #[test]
    fn test_custom_pattern_extraction() {
        let pattern = Pattern::new(r"\d{4}-\d{2}-\d{2}").unwrap();
        let result = extract("built on 2023-11-05, shipped later", &pattern);
        assert_eq!(result.text(), Some("2023-11-05"));
    }
}
