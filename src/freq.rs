use serde::Serialize;
use std::collections::HashMap;

/// Occurrence count for one distinct character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharCount {
    pub character: char,
    pub count: usize,
}

/// Count how often each character occurs in `text`.
pub fn count_chars(text: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for character in text.chars() {
        *counts.entry(character).or_insert(0) += 1;
    }
    counts
}

/// Counts sorted by character, for stable reporting.
pub fn sorted_counts(counts: &HashMap<char, usize>) -> Vec<CharCount> {
    let mut entries: Vec<CharCount> = counts
        .iter()
        .map(|(&character, &count)| CharCount { character, count })
        .collect();
    entries.sort_by_key(|entry| entry.character);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE: &str =
        "It was a bright cold day in April, and the clocks were striking thirteen.";

    #[test]
    fn test_counts_cover_every_character() {
        let counts = count_chars(MESSAGE);
        let total: usize = counts.values().sum();
        assert_eq!(total, MESSAGE.chars().count());
    }

    #[test]
    fn test_individual_counts() {
        let counts = count_chars(MESSAGE);
        assert_eq!(counts[&'I'], 1);
        assert_eq!(counts[&'t'], 6);
        assert_eq!(counts[&','], 1);
        assert_eq!(counts[&'.'], 1);
        assert!(!counts.contains_key(&'z'));
    }

    #[test]
    fn test_empty_text_has_no_counts() {
        assert!(count_chars("").is_empty());
    }

    #[test]
    fn test_sorted_counts_are_ordered() {
        let counts = count_chars("banana");
        let entries = sorted_counts(&counts);
        assert_eq!(
            entries,
            vec![
                CharCount { character: 'a', count: 3 },
                CharCount { character: 'b', count: 1 },
                CharCount { character: 'n', count: 2 },
            ]
        );
    }
}
