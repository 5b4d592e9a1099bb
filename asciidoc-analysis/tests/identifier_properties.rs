use asciidoc_analysis::identifier::IdentifierGrammar;
use asciidoc_analysis::AnalysisConfig;
use proptest::prelude::*;

proptest! {
    #[test]
    fn well_formed_keys_are_valid(key in "[a-zA-Z_:][a-zA-Z0-9_:.-]{0,24}") {
        let grammar = IdentifierGrammar::asciidoc();
        prop_assert!(grammar.is_valid(&key));
        prop_assert_eq!(grammar.explain_deviation(&key), "");
    }

    #[test]
    fn whitespace_is_always_reported_first(
        head in "[0-9a-z$]{0,5}",
        blank in "[ \t]",
        tail in "[a-z]{0,5}",
    ) {
        let key = format!("{head}{blank}{tail}");
        let grammar = IdentifierGrammar::asciidoc();
        prop_assert!(!grammar.is_valid(&key));
        prop_assert_eq!(grammar.explain_deviation(&key), "must not contain spaces or tabs");
    }

    #[test]
    fn leading_digits_name_the_first_character(digit in "[0-9]", rest in "[a-z]{0,8}") {
        let key = format!("{digit}{rest}");
        let grammar = IdentifierGrammar::asciidoc();
        prop_assert!(!grammar.is_valid(&key));
        prop_assert_eq!(
            grammar.explain_deviation(&key),
            format!("problem starting at '{digit}'")
        );
    }

    #[test]
    fn bad_characters_after_a_valid_prefix_are_quoted(
        prefix in "[a-z][a-z0-9]{0,6}",
        bad in "[$%!?/]",
        rest in "[a-z]{0,4}",
    ) {
        let key = format!("{prefix}{bad}{rest}");
        let grammar = IdentifierGrammar::asciidoc();
        prop_assert_eq!(
            grammar.explain_deviation(&key),
            format!("problem with prefix: '{prefix}{bad}'")
        );
    }
}

fn hyphenated_grammar() -> IdentifierGrammar {
    AnalysisConfig::from_toml_str("identifier_pattern = \"[a-z]+(-[a-z]+)*\"\n")
        .expect("config parses")
        .identifier_grammar()
        .expect("grammar compiles")
}

proptest! {
    #[test]
    fn configured_keys_that_match_explain_nothing(key in "[a-z]{1,6}(-[a-z]{1,6}){0,3}") {
        let grammar = hyphenated_grammar();
        prop_assert!(grammar.is_valid(&key));
        prop_assert_eq!(grammar.explain_deviation(&key), "");
    }

    #[test]
    fn configured_keys_blame_the_first_dead_character(
        head in "[a-z]{1,6}-[a-z]{1,6}",
        digit in "[0-9]",
        tail in "[a-z]{0,4}",
    ) {
        let key = format!("{head}{digit}{tail}");
        let grammar = hyphenated_grammar();
        prop_assert_eq!(
            grammar.explain_deviation(&key),
            format!("problem with prefix: '{head}{digit}'")
        );
    }
}
