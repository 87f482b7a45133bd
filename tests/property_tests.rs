//! Property-based tests for gowords
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use gowords::report::report;
use gowords::word_set::WordSet;
use gowords_core::{NormalizePolicy, normalize};
use proptest::prelude::*;

// =============================================================================
// Normalizer Properties
// =============================================================================

proptest! {
    /// Property: a leading letter run followed by a non-letter suffix yields exactly that run
    #[test]
    fn strict_keeps_leading_letter_run(
        prefix in "[a-zA-Z]{1,12}",
        suffix in "[0-9_.][a-zA-Z0-9_.]{0,8}",
    ) {
        let raw = format!("{prefix}{suffix}");
        prop_assert_eq!(
            normalize(&raw, NormalizePolicy::strict()),
            vec![prefix.to_ascii_lowercase()]
        );
        prop_assert_eq!(
            normalize(&raw, NormalizePolicy::strict().with_fold_case(false)),
            vec![prefix]
        );
    }

    /// Property: no leading letter, no word
    #[test]
    fn strict_without_leading_letter_is_empty(raw in "[0-9_.][a-zA-Z0-9_.]{0,12}") {
        prop_assert!(normalize(&raw, NormalizePolicy::strict()).is_empty());
    }

    /// Property: strict output is non-empty lowercase ASCII letters, for any input
    #[test]
    fn strict_output_is_lowercase_alpha(raw in "\\PC{0,24}") {
        for word in normalize(&raw, NormalizePolicy::strict()) {
            prop_assert!(!word.is_empty());
            prop_assert!(word.bytes().all(|b| b.is_ascii_lowercase()), "{:?}", word);
        }
    }

    /// Property: verbatim is the identity on non-empty tokens
    #[test]
    fn verbatim_is_identity(raw in "\\PC{1,24}") {
        prop_assert_eq!(normalize(&raw, NormalizePolicy::verbatim()), vec![raw]);
    }
}

// =============================================================================
// Word Set / Report Properties
// =============================================================================

proptest! {
    /// Property: inserting the same word N times keeps one copy
    #[test]
    fn repeated_insert_keeps_one(word in "[a-z]{1,10}", n in 1usize..50) {
        let mut set = WordSet::default();
        set.add_words(std::iter::repeat_n(word.as_str(), n));
        prop_assert_eq!(set.len(), 1);
        prop_assert!(set.contains(&word));
    }

    /// Property: the report is strictly increasing byte-wise, one line per word
    #[test]
    fn report_is_strictly_increasing(tokens in prop::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,8}", 0..64)) {
        let mut set = WordSet::new(NormalizePolicy::strict().with_fold_case(false));
        set.add_words(&tokens);

        let mut buf = Vec::new();
        let lines = report(&set, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let rendered: Vec<&str> = text.lines().collect();

        prop_assert_eq!(lines, set.len());
        prop_assert_eq!(rendered.len(), lines);
        prop_assert!(rendered.windows(2).all(|w| w[0].as_bytes() < w[1].as_bytes()));
    }
}

// =============================================================================
// Syntax Frontend Properties
// =============================================================================

proptest! {
    /// Property: parsing arbitrary text never panics
    #[test]
    fn frontend_never_panics(source in "\\PC{0,200}") {
        let _ = gowords_syntax::parse_source(&source);
    }

    /// Property: a generated exported declaration is always extracted
    #[test]
    fn exported_function_is_extracted(name in "[A-Z][a-zA-Z0-9_]{0,12}") {
        let source = format!("package p\n\nfunc {name}() {{}}\n");
        let file = gowords_syntax::parse_source(&source).unwrap();
        let names = gowords::extract::exported_identifiers(&file).unwrap();
        prop_assert_eq!(names.len(), 1);
        prop_assert_eq!(&names[0].node, &name);
    }

    /// Property: unexported declarations are never extracted
    #[test]
    fn unexported_var_is_dropped(name in "[a-z_][a-zA-Z0-9_]{0,12}") {
        let source = format!("package p\n\nvar {name} int\n");
        prop_assume!(gowords_core::lang::keywords::from_str(&name).is_none());
        let file = gowords_syntax::parse_source(&source).unwrap();
        prop_assert!(gowords::extract::exported_identifiers(&file).unwrap().is_empty());
    }
}
