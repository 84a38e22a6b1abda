//! Property-based tests for identifier normalization.

use proptest::prelude::*;
use restgen_core::{to_camel_case, to_pascal_case, to_snake_case};

// Strategy: ASCII identifiers made of letters, digits and underscores
fn arb_identifier() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{0,24}"
}

// Strategy: identifiers without digits or consecutive uppercase runs
fn arb_snake_words() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..5).prop_map(|words| words.join("_"))
}

proptest! {
    /// Property: snake -> camel -> snake is stable for any identifier
    #[test]
    fn proptest_snake_camel_snake_idempotent(s in arb_identifier()) {
        let snake = to_snake_case(&s);
        prop_assert_eq!(to_snake_case(&to_camel_case(&snake)), snake);
    }

    /// Property: snake_case output never contains uppercase letters
    #[test]
    fn proptest_snake_case_is_lowercase(s in arb_identifier()) {
        let snake = to_snake_case(&s);
        prop_assert!(!snake.chars().any(|c| c.is_ascii_uppercase()));
    }

    /// Property: camelCase and snake_case invert each other on plain words
    #[test]
    fn proptest_camel_snake_inverse(s in arb_snake_words()) {
        let camel = to_camel_case(&s);
        prop_assert!(!camel.contains('_'));
        prop_assert_eq!(to_snake_case(&camel), s);
    }

    /// Property: PascalCase differs from camelCase only in the first letter
    #[test]
    fn proptest_pascal_matches_camel_tail(s in arb_snake_words()) {
        let camel = to_camel_case(&s);
        let pascal = to_pascal_case(&s);
        prop_assert_eq!(&camel[1..], &pascal[1..]);
        prop_assert!(pascal.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
    }
}
