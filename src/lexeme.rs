//! Ready-made lexeme recognizers for grammar text.
//!
//! The BNF reader needs two recognizers telling nonterminal lexemes from
//! terminal ones. These helpers build the usual choices. All of them are
//! deterministic: they yield at most one result.

use regex::Regex;

use crate::combinators::greedy1;
use crate::elementary::satisfy;
use crate::errors::ParseError;
use crate::parser::{optional, Parser};
use crate::transformers::apply;

/// The longest non-empty run of characters satisfying `predicate`.
pub fn run<'a, F>(predicate: F) -> Parser<'a, &'a str, String>
where
    F: Fn(char) -> bool + 'a,
{
    apply(
        |chars: Vec<char>| chars.into_iter().collect::<String>(),
        greedy1(satisfy(move |c: &char| predicate(*c))),
    )
}

/// A run of ASCII uppercase letters, e.g. `BLOCK`.
pub fn upper_run<'a>() -> Parser<'a, &'a str, String> {
    run(|c| c.is_ascii_uppercase())
}

/// A run of ASCII lowercase letters, e.g. `begin`.
pub fn lower_run<'a>() -> Parser<'a, &'a str, String> {
    run(|c| c.is_ascii_lowercase())
}

/// A non-empty match of the regular expression `pattern` anchored at the
/// start of the input, chosen the way `regex` chooses (leftmost-first).
///
/// ```rust
/// use parsgen::lexeme::pattern;
/// let ident = pattern("[A-Za-z_][A-Za-z0-9_]*").unwrap();
/// let results: Vec<_> = ident.parse("foo_1 bar").collect();
/// assert_eq!(results, vec![("foo_1".to_string(), " bar")]);
/// ```
pub fn pattern<'a>(pattern: &str) -> Result<Parser<'a, &'a str, String>, ParseError> {
    let regex =
        Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| ParseError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
    Ok(Parser::new(move |input: &'a str| {
        optional(
            regex
                .find(input)
                .filter(|found| found.end() > 0)
                .map(|found| (found.as_str().to_string(), &input[found.end()..])),
        )
    }))
}
