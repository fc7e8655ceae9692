//! Primitive recognizers.
//!
//! Every parser here is total: a mismatch is the empty result set, never an
//! error or a panic.

use crate::input::{Lexemes, Symbols};
use crate::parser::{none, optional, single, Parser};

/// Matches exactly the symbol `expected`, consuming it.
pub fn symbol<'a, I>(expected: I::Symbol) -> Parser<'a, I, I::Symbol>
where
    I: Symbols + 'a,
    I::Symbol: 'a,
{
    Parser::new(move |input: I| {
        optional(
            input
                .head()
                .filter(|found| *found == expected)
                .map(|found| (found, input.tail())),
        )
    })
}

/// Matches the sequence `expected` as a prefix of the input.
///
/// ```rust
/// use parsgen::elementary::token;
/// let results: Vec<_> = token("::=").parse("::= rest").collect();
/// assert_eq!(results, vec![("::=", " rest")]);
/// ```
pub fn token<'a, I>(expected: I) -> Parser<'a, I, I>
where
    I: Symbols + 'a,
{
    let width = expected.symbol_count();
    Parser::new(move |input: I| {
        if input.take_front(width) == expected {
            single(expected.clone(), input.drop_front(width))
        } else {
            none()
        }
    })
}

/// Matches one symbol for which `predicate` holds.
pub fn satisfy<'a, I, F>(predicate: F) -> Parser<'a, I, I::Symbol>
where
    I: Symbols + 'a,
    F: Fn(&I::Symbol) -> bool + 'a,
{
    Parser::new(move |input: I| {
        optional(
            input
                .head()
                .filter(|found| predicate(found))
                .map(|found| (found, input.tail())),
        )
    })
}

/// Always succeeds with `value`, consuming nothing.
pub fn succeed<'a, I, O>(value: O) -> Parser<'a, I, O>
where
    I: Symbols + 'a,
    O: Clone + 'a,
{
    Parser::new(move |input: I| single(value.clone(), input))
}

/// The empty match carrying no value.
pub fn epsilon<'a, I>() -> Parser<'a, I, ()>
where
    I: Symbols + 'a,
{
    succeed(())
}

/// Never succeeds.
pub fn fail<'a, I, O>() -> Parser<'a, I, O>
where
    I: Symbols + 'a,
    O: 'a,
{
    Parser::new(|_: I| none())
}

/// Matches one grammar terminal lexeme called `name`.
///
/// On text this is a literal prefix; on a token slice it is one whole token.
pub fn literal<'a, I>(name: impl Into<String>) -> Parser<'a, I, ()>
where
    I: Lexemes + 'a,
{
    let name = name.into();
    Parser::new(move |input: I| optional(input.strip_terminal(&name).map(|rest| ((), rest))))
}
