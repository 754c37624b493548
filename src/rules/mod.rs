//! Per-feed rule compilation.
//!
//! A feed's rules are regular-expression fragments; more than one rule is
//! OR-combined into a single alternation before compiling.

use regex::{Regex, RegexBuilder};

use crate::app::{DaruiError, Result};

/// Compile a feed's rule list into one case-insensitive pattern.
///
/// An empty rule list is a configuration error for that feed, never a
/// silent match-all.
pub fn compile(rules: &[String]) -> Result<Regex> {
    let pattern = match rules {
        [] => return Err(DaruiError::EmptyRules),
        [only] => only.clone(),
        many => many.join("|"),
    };

    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(fragments: &[&str]) -> Vec<String> {
        fragments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_rule_matches_case_insensitively() {
        let pattern = compile(&rules(&["foo"])).unwrap();
        assert!(pattern.is_match("FOO fighters reunite"));
        assert!(pattern.is_match("about foo"));
        assert!(!pattern.is_match("nothing relevant"));
    }

    #[test]
    fn test_match_is_unanchored() {
        let pattern = compile(&rules(&["widget"])).unwrap();
        assert!(pattern.is_match("Widget v2 released today"));
    }

    #[test]
    fn test_multiple_rules_are_or_combined() {
        let pattern = compile(&rules(&["foo", "bar"])).unwrap();
        assert!(pattern.is_match("all about foo"));
        assert!(pattern.is_match("BAR opens downtown"));
        assert!(!pattern.is_match("baz only"));
    }

    #[test]
    fn test_empty_rule_list_is_an_error() {
        assert!(matches!(compile(&[]), Err(DaruiError::EmptyRules)));
    }

    #[test]
    fn test_malformed_pattern_is_an_error() {
        assert!(matches!(compile(&rules(&["(unclosed"])), Err(DaruiError::Rule(_))));
    }
}
