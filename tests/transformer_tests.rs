// tests/transformer_tests.rs

use parsgen::combinators::{alternation, many, sequence};
use parsgen::elementary::{symbol, token};
use parsgen::lexeme::{lower_run, pattern, run, upper_run};
use parsgen::transformers::{apply, at_most, first, full_parses, is_ambiguous, just, some, sp};
use parsgen::{ErrorType, ParseError, Parser};

/// Splits a run of `a`s into `aa` and `a` pieces in every possible way.
fn splits<'a>() -> Parser<'a, &'a str, Vec<String>> {
    let piece = apply(|matched: &str| matched.to_string(), alternation(token("aa"), token("a")));
    many(piece)
}

#[test]
fn test_apply_maps_trees_not_remainders() {
    let upper = apply(|c: char| c.to_ascii_uppercase(), symbol('a'));
    assert_eq!(upper.parse("ab").collect::<Vec<_>>(), vec![('A', "b")]);
}

#[test]
fn test_sp_skips_leading_layout_only() {
    let word = sp(lower_run());
    assert_eq!(word.parse(" \n\tabc  ").collect::<Vec<_>>(), vec![("abc".to_string(), "  ")]);
    assert_eq!(word.parse("abc").collect::<Vec<_>>(), vec![("abc".to_string(), "")]);
}

#[test]
fn test_just_keeps_complete_parses() {
    let results: Vec<_> = just(many(symbol('a'))).parse("aaa").collect();
    assert_eq!(results, vec![(vec!['a', 'a', 'a'], "")]);
    assert_eq!(just(many(symbol('a'))).parse("aab").count(), 0);
}

#[test]
fn test_first_and_at_most_truncate() {
    assert_eq!(first(many(symbol('a'))).parse("aa").count(), 1);
    assert_eq!(at_most(many(symbol('a')), 2).parse("aaaa").count(), 2);
    assert_eq!(first(symbol('a')).parse("b").count(), 0);
}

#[test]
fn test_some_returns_first_full_parse() {
    let pair = sequence(symbol('x'), symbol('y'));
    assert_eq!(some(&pair, "xy").unwrap(), ('x', 'y'));
}

#[test]
fn test_some_without_full_parse_errors() {
    let err = some(&symbol('x'), "xy").unwrap_err();
    assert!(matches!(err, ParseError::NoFullParse));
    assert_eq!(err.error_type(), ErrorType::NoFullParse);
}

#[test]
fn test_full_parses_and_ambiguity() {
    let parser = splits();
    let readings = full_parses(&parser, "aaa", 10);
    assert_eq!(
        readings,
        vec![
            vec!["aa".to_string(), "a".to_string()],
            vec!["a".to_string(), "aa".to_string()],
            vec!["a".to_string(), "a".to_string(), "a".to_string()],
        ]
    );
    assert!(is_ambiguous(&parser, "aaa"));
    assert!(!is_ambiguous(&parser, "a"));
    assert!(!is_ambiguous(&parser, "b"));
}

// ---
// Result sets
// ---

#[test]
fn test_result_set_is_restartable() {
    let results = many(symbol('a')).results("aab");
    assert_eq!(results.iter().count(), 3);
    assert_eq!(results.iter().count(), 3);
    assert_eq!(results.first(), Some((vec!['a', 'a'], "b")));
    assert_eq!(results.prefix(2).len(), 2);
    assert_eq!(*results.input(), "aab");
    assert!(!results.is_empty());
    assert!(symbol('x').results("aab").is_empty());
}

#[test]
fn test_result_set_iterates_by_reference() {
    let results = symbol('a').results("ab");
    let mut seen = Vec::new();
    for (tree, rest) in &results {
        seen.push((tree, rest));
    }
    assert_eq!(seen, vec![('a', "b")]);
}

// ---
// Lexeme recognizers
// ---

#[test]
fn test_runs_are_deterministic() {
    assert_eq!(upper_run().parse("ABc").collect::<Vec<_>>(), vec![("AB".to_string(), "c")]);
    assert_eq!(upper_run().parse("abc").count(), 0);
    assert_eq!(
        run(|c| c.is_ascii_digit()).parse("2024-10").collect::<Vec<_>>(),
        vec![("2024".to_string(), "-10")]
    );
}

#[test]
fn test_run_handles_very_long_lexemes() {
    let identifier = "x".repeat(50_000);
    let word = some(&run(|c| c.is_ascii_lowercase()), identifier.as_str()).unwrap();
    assert_eq!(word.len(), 50_000);
}

#[test]
fn test_pattern_is_anchored() {
    let number = pattern("[0-9]+").unwrap();
    assert_eq!(number.parse("42 apples").collect::<Vec<_>>(), vec![("42".to_string(), " apples")]);
    assert_eq!(number.parse("apples 42").count(), 0);
}

#[test]
fn test_pattern_never_matches_empty() {
    let maybe = pattern("[0-9]*").unwrap();
    assert_eq!(maybe.parse("abc").count(), 0);
}

#[test]
fn test_invalid_pattern_is_reported() {
    let err = pattern("(unclosed").unwrap_err();
    assert_eq!(err.error_type(), ErrorType::InvalidPattern);
    assert!(err.to_string().contains("(unclosed"));
}
