//! Literal file name matching
//!
//! The picker's `--regex` flag is escaped before use, so what it really
//! does is a plain substring search. `MatchPattern` makes that explicit:
//! `.`, `*`, `[` and friends are compared as ordinary characters.

use std::fmt;

/// Literal substring pattern over file names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPattern {
    literal: String,
}

impl MatchPattern {
    /// Create a pattern from user input, taken literally
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    /// Check whether the pattern occurs anywhere in `name`
    pub fn matches(&self, name: &str) -> bool {
        name.contains(self.literal.as_str())
    }

    /// Return the first item (in iteration order) whose name contains the pattern
    pub fn first_match<'a, T, I>(&self, names: I) -> Option<&'a T>
    where
        T: AsRef<str> + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        names.into_iter().find(|name| self.matches((*name).as_ref()))
    }

    /// The pattern text as given
    pub fn as_str(&self) -> &str {
        &self.literal
    }
}

impl fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_literal_dot() {
        let pattern = MatchPattern::new(".txt");
        assert!(pattern.matches("notes.txt"));
        assert!(!pattern.matches("notesatxt"));
    }

    #[test]
    fn test_special_characters_not_interpreted() {
        let pattern = MatchPattern::new("img[1]*");
        assert!(pattern.matches("img[1]*.png"));
        assert!(!pattern.matches("img1.png"));
        assert!(!pattern.matches("img11111.png"));
    }

    #[test]
    fn test_first_match_keeps_order() {
        let names = vec![
            "b_result.png".to_string(),
            "a_result.png".to_string(),
        ];
        let pattern = MatchPattern::new("_result");
        assert_eq!(
            pattern.first_match(&names).map(String::as_str),
            Some("b_result.png")
        );
    }

    #[test]
    fn test_first_match_none() {
        let names = vec!["a.png".to_string(), "b.png".to_string()];
        assert_eq!(MatchPattern::new("zzz").first_match(&names), None);
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        assert!(MatchPattern::new("").matches("anything"));
    }

    #[quickcheck]
    fn prop_matches_when_embedded(prefix: String, literal: String, suffix: String) -> bool {
        let name = format!("{}{}{}", prefix, literal, suffix);
        MatchPattern::new(literal).matches(&name)
    }

    #[quickcheck]
    fn prop_agrees_with_contains(name: String, literal: String) -> bool {
        MatchPattern::new(literal.clone()).matches(&name) == name.contains(&literal)
    }
}
