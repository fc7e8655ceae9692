//! Parser transformers: mapping trees, skipping layout and filtering results.

use std::rc::Rc;

use crate::errors::ParseError;
use crate::input::Symbols;
use crate::parser::Parser;

/// Maps `f` over every tree `parser` produces. Remainders are untouched.
pub fn apply<'a, I, A, B, F>(f: F, parser: Parser<'a, I, A>) -> Parser<'a, I, B>
where
    I: Symbols + 'a,
    A: 'a,
    B: 'a,
    F: Fn(A) -> B + 'a,
{
    let f = Rc::new(f);
    Parser::new(move |input: I| {
        let f = Rc::clone(&f);
        Box::new(parser.parse(input).map(move |(tree, rest)| (f(tree), rest)))
    })
}

/// Skips leading layout before running `parser`. Trailing layout is left alone.
pub fn sp<'a, I, O>(parser: Parser<'a, I, O>) -> Parser<'a, I, O>
where
    I: Symbols + 'a,
    O: 'a,
{
    Parser::new(move |input: I| parser.parse(input.skip_layout()))
}

/// Keeps only the results that consumed the whole input.
pub fn just<'a, I, O>(parser: Parser<'a, I, O>) -> Parser<'a, I, O>
where
    I: Symbols + 'a,
    O: 'a,
{
    Parser::new(move |input: I| Box::new(parser.parse(input).filter(|(_, rest)| rest.is_empty())))
}

/// At most the first result of `parser`. Later results are never evaluated.
pub fn first<'a, I, O>(parser: Parser<'a, I, O>) -> Parser<'a, I, O>
where
    I: Symbols + 'a,
    O: 'a,
{
    at_most(parser, 1)
}

/// Truncates the result set of `parser` to `limit` results.
pub fn at_most<'a, I, O>(parser: Parser<'a, I, O>, limit: usize) -> Parser<'a, I, O>
where
    I: Symbols + 'a,
    O: 'a,
{
    Parser::new(move |input: I| Box::new(parser.parse(input).take(limit)))
}

/// The tree of the first parse that consumes all of `input`.
///
/// ```rust
/// use parsgen::combinators::many;
/// use parsgen::elementary::symbol;
/// use parsgen::transformers::some;
/// assert_eq!(some(&many(symbol('a')), "aaa").unwrap(), vec!['a', 'a', 'a']);
/// assert!(some(&many(symbol('a')), "aab").is_err());
/// ```
pub fn some<'a, I, O>(parser: &Parser<'a, I, O>, input: I) -> Result<O, ParseError>
where
    I: Symbols + 'a,
    O: 'a,
{
    just(parser.clone())
        .parse(input)
        .next()
        .map(|(tree, _)| tree)
        .ok_or(ParseError::NoFullParse)
}

/// Up to `limit` trees of full-consumption parses, in result order.
pub fn full_parses<'a, I, O>(parser: &Parser<'a, I, O>, input: I, limit: usize) -> Vec<O>
where
    I: Symbols + 'a,
    O: 'a,
{
    just(parser.clone())
        .parse(input)
        .take(limit)
        .map(|(tree, _)| tree)
        .collect()
}

/// True when `input` has more than one full-consumption parse.
pub fn is_ambiguous<'a, I, O>(parser: &Parser<'a, I, O>, input: I) -> bool
where
    I: Symbols + 'a,
    O: 'a,
{
    just(parser.clone()).parse(input).nth(1).is_some()
}
