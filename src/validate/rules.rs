//! Stateless rule primitives shared by every level.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Window, tab and field identifiers: uppercase letter first, then
/// uppercase letters, digits and underscores.
static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Z][A-Z0-9_]*$").expect("identifier pattern compiles"));

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn follows_id_convention(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}

pub fn longer_than(value: &str, limit: usize) -> bool {
    value.chars().count() > limit
}

/// True when both bounds are declared and the lower exceeds the upper.
pub fn range_inverted<T: PartialOrd>(min: Option<T>, max: Option<T>) -> bool {
    match (min, max) {
        (Some(min), Some(max)) => min > max,
        _ => false,
    }
}

/// Compile an authored pattern, returning the compiler's complaint on failure.
/// Authored patterns may use look-around and backreferences, so they go
/// through the backtracking engine rather than `regex`.
pub fn compile_pattern(pattern: &str) -> Result<fancy_regex::Regex, String> {
    fancy_regex::Regex::new(pattern).map_err(|e| e.to_string())
}

/// Tracks identifiers and sequence numbers among one set of siblings.
#[derive(Debug, Default)]
pub struct SiblingTracker<'a> {
    ids: HashSet<&'a str>,
    sequences: HashSet<i32>,
}

impl<'a> SiblingTracker<'a> {
    /// Record an identifier; true if a sibling already used it.
    /// Blank identifiers are not tracked.
    pub fn repeat_id(&mut self, id: &'a str) -> bool {
        if is_blank(id) {
            return false;
        }
        !self.ids.insert(id)
    }

    /// Record a sequence value; true if a sibling already used it.
    pub fn repeat_sequence(&mut self, sequence: i32) -> bool {
        !self.sequences.insert(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_convention() {
        assert!(follows_id_convention("ABC_1"));
        assert!(follows_id_convention("A"));
        assert!(!follows_id_convention("abc"));
        assert!(!follows_id_convention("1ABC"));
        assert!(!follows_id_convention("_ABC"));
        assert!(!follows_id_convention("AB-C"));
        assert!(!follows_id_convention(""));
    }

    #[test]
    fn blank_strings() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn length_limit_counts_chars() {
        assert!(!longer_than(&"é".repeat(100), 100));
        assert!(longer_than(&"é".repeat(101), 100));
    }

    #[test]
    fn inverted_ranges() {
        assert!(range_inverted(Some(10.0), Some(5.0)));
        assert!(!range_inverted(Some(5.0), Some(10.0)));
        assert!(!range_inverted(Some(5), Some(5)));
        assert!(!range_inverted(Some(5), None));
        assert!(!range_inverted::<i64>(None, None));
    }

    #[test]
    fn pattern_compile() {
        assert!(compile_pattern(".*").is_ok());
        assert!(compile_pattern("[invalid(").is_err());
        assert!(compile_pattern("(unclosed").is_err());
    }

    #[test]
    fn pattern_compile_allows_lookaround_and_backreferences() {
        let password = compile_pattern(r"^(?=.*\d).{8,}$").unwrap();
        assert!(password.is_match("secret12").unwrap());
        assert!(!password.is_match("secretxx").unwrap());
        assert!(compile_pattern(r"^(?!admin$).+$").is_ok());
        assert!(compile_pattern(r"(?<=\$)\d+").is_ok());
        assert!(compile_pattern(r"^(\w)\1$").is_ok());
    }

    #[test]
    fn tracker_flags_only_repeats() {
        let mut tracker = SiblingTracker::default();
        assert!(!tracker.repeat_id("GENERAL"));
        assert!(tracker.repeat_id("GENERAL"));
        assert!(!tracker.repeat_id(""));
        assert!(!tracker.repeat_id(""));
        assert!(!tracker.repeat_sequence(0));
        assert!(tracker.repeat_sequence(0));
    }
}
