//! Combinators that build larger parsers out of smaller ones.
//!
//! Ambiguity is preserved everywhere: alternation tries both branches and
//! sequencing pairs every result of the first parser with every result of the
//! second. Result order is deterministic. Sequence results come in the order of
//! the first parser's results, and the left branch of an alternation comes
//! before the right.
//!
//! Repetition is defined recursively (`many p = p many p | []`) and relies on
//! result sets being lazy. Building `many(p)` allocates a single closure; each
//! further level of the recursion is only built when a result that needs it is
//! pulled.
//!
//! Pulling a result of `many` nests one stack level per element consumed, so
//! runs of a few thousand elements can exhaust the stack. [`greedy`] and
//! [`greedy1`] iterate instead and are the ones to use for tokenizing.

use std::iter;

use crate::elementary::{fail, succeed, symbol, token};
use crate::input::Symbols;
use crate::parser::{none, single, Parser, Results};
use crate::transformers::{apply, first};

// ============================================================================
// SEQUENCING AND ALTERNATION
// ============================================================================

/// Runs `second` on every remainder left by `first`, pairing the trees.
pub fn sequence<'a, I, A, B>(
    first: Parser<'a, I, A>,
    second: Parser<'a, I, B>,
) -> Parser<'a, I, (A, B)>
where
    I: Symbols + 'a,
    A: Clone + 'a,
    B: 'a,
{
    Parser::new(move |input: I| {
        let second = second.clone();
        Box::new(first.parse(input).flat_map(move |(left, rest)| {
            second
                .parse(rest)
                .map(move |(right, rest)| ((left.clone(), right), rest))
        }))
    })
}

/// All results of `first`, then all results of `second`, on the same input.
///
/// `second` is not started until `first` is exhausted.
pub fn alternation<'a, I, O>(first: Parser<'a, I, O>, second: Parser<'a, I, O>) -> Parser<'a, I, O>
where
    I: Symbols + 'a,
    O: 'a,
{
    Parser::new(move |input: I| {
        let second = second.clone();
        let again = input.clone();
        Box::new(
            first
                .parse(input)
                .chain(iter::once_with(move || second.parse(again)).flatten()),
        )
    })
}

/// Left-to-right alternation over `parsers`. No parsers means failure.
pub fn choice<'a, I, O>(parsers: impl IntoIterator<Item = Parser<'a, I, O>>) -> Parser<'a, I, O>
where
    I: Symbols + 'a,
    O: 'a,
{
    parsers
        .into_iter()
        .reduce(alternation)
        .unwrap_or_else(fail)
}

/// Like [`alternation`], but `fallback` only runs when `primary` fails.
pub fn or_else<'a, I, O>(primary: Parser<'a, I, O>, fallback: Parser<'a, I, O>) -> Parser<'a, I, O>
where
    I: Symbols + 'a,
    O: 'a,
{
    Parser::new(move |input: I| {
        let mut results = primary.parse(input.clone()).peekable();
        if results.peek().is_some() {
            Box::new(results)
        } else {
            fallback.parse(input)
        }
    })
}

/// Sequence keeping only the first tree.
pub fn seq_keep_first<'a, I, A, B>(
    first: Parser<'a, I, A>,
    second: Parser<'a, I, B>,
) -> Parser<'a, I, A>
where
    I: Symbols + 'a,
    A: Clone + 'a,
    B: 'a,
{
    apply(|(kept, _)| kept, sequence(first, second))
}

/// Sequence keeping only the second tree.
pub fn seq_keep_second<'a, I, A, B>(
    first: Parser<'a, I, A>,
    second: Parser<'a, I, B>,
) -> Parser<'a, I, B>
where
    I: Symbols + 'a,
    A: Clone + 'a,
    B: 'a,
{
    apply(|(_, kept)| kept, sequence(first, second))
}

// ============================================================================
// OPTIONALITY AND REPETITION
// ============================================================================

/// Zero or one occurrence: `Some(tree)` results first, then `None`.
pub fn option<'a, I, O>(parser: Parser<'a, I, O>) -> Parser<'a, I, Option<O>>
where
    I: Symbols + 'a,
    O: Clone + 'a,
{
    alternation(apply(Some, parser), succeed(None))
}

/// Zero or more occurrences, longest run first, always ending with `[]`.
///
/// An occurrence that consumes no input ends the run instead of being
/// repeated, so a parser that can succeed without consuming still terminates.
pub fn many<'a, I, O>(parser: Parser<'a, I, O>) -> Parser<'a, I, Vec<O>>
where
    I: Symbols + 'a,
    O: Clone + 'a,
{
    alternation(many1(parser), succeed(Vec::new()))
}

/// One or more occurrences, longest run first.
pub fn many1<'a, I, O>(parser: Parser<'a, I, O>) -> Parser<'a, I, Vec<O>>
where
    I: Symbols + 'a,
    O: Clone + 'a,
{
    Parser::new(move |input: I| {
        let origin = input.clone();
        let item = parser.clone();
        Box::new(parser.parse(input).flat_map(move |(head, rest)| -> Results<'a, I, Vec<O>> {
            if rest == origin {
                return single(vec![head], rest);
            }
            Box::new(many(item.clone()).parse(rest).map(move |(tail, rest)| {
                let mut items = Vec::with_capacity(tail.len() + 1);
                items.push(head.clone());
                items.extend(tail);
                (items, rest)
            }))
        }))
    })
}

/// The single longest run of `parser`, possibly empty.
///
/// Equal to the first result of [`many`], but built iteratively: each step
/// takes the first result of `parser` on the remainder, so arbitrarily long
/// runs use constant stack.
pub fn greedy<'a, I, O>(parser: Parser<'a, I, O>) -> Parser<'a, I, Vec<O>>
where
    I: Symbols + 'a,
    O: 'a,
{
    Parser::new(move |input: I| {
        let (items, rest) = longest_run(&parser, input);
        single(items, rest)
    })
}

/// The single longest non-empty run of `parser`.
pub fn greedy1<'a, I, O>(parser: Parser<'a, I, O>) -> Parser<'a, I, Vec<O>>
where
    I: Symbols + 'a,
    O: 'a,
{
    Parser::new(move |input: I| {
        let (items, rest) = longest_run(&parser, input);
        if items.is_empty() {
            none()
        } else {
            single(items, rest)
        }
    })
}

/// Follows the first result of `parser` until it fails or stops consuming.
///
/// A zero-width occurrence is kept once and ends the run, as in [`many1`].
fn longest_run<'a, I, O>(parser: &Parser<'a, I, O>, input: I) -> (Vec<O>, I)
where
    I: Symbols + 'a,
    O: 'a,
{
    let mut items = Vec::new();
    let mut rest = input;
    while let Some((item, next)) = parser.parse(rest.clone()).next() {
        items.push(item);
        let stalled = next == rest;
        rest = next;
        if stalled {
            break;
        }
    }
    (items, rest)
}

/// An optional construct that is never required and never wrapped.
///
/// Yields the first result of `parser`, or `O::default()` when it fails.
pub fn compulsion<'a, I, O>(parser: Parser<'a, I, O>) -> Parser<'a, I, O>
where
    I: Symbols + 'a,
    O: Clone + Default + 'a,
{
    first(alternation(parser, succeed(O::default())))
}

// ============================================================================
// LISTS AND BRACKETING
// ============================================================================

/// `item (separator item)*`, longest list first; `[]` only if `item` fails.
pub fn list_of<'a, I, O, S>(
    item: Parser<'a, I, O>,
    separator: Parser<'a, I, S>,
) -> Parser<'a, I, Vec<O>>
where
    I: Symbols + 'a,
    O: Clone + 'a,
    S: Clone + 'a,
{
    let items = apply(
        |(head, tail): (O, Vec<O>)| iter::once(head).chain(tail).collect::<Vec<O>>(),
        sequence(item.clone(), many(seq_keep_second(separator, item))),
    );
    or_else(items, succeed(Vec::new()))
}

/// Comma-separated list of `item`.
pub fn comma_list<'a, I, O>(item: Parser<'a, I, O>) -> Parser<'a, I, Vec<O>>
where
    I: Symbols<Symbol = char> + 'a,
    O: Clone + 'a,
{
    list_of(item, symbol(','))
}

/// Semicolon-separated list of `item`.
pub fn semic_list<'a, I, O>(item: Parser<'a, I, O>) -> Parser<'a, I, Vec<O>>
where
    I: Symbols<Symbol = char> + 'a,
    O: Clone + 'a,
{
    list_of(item, symbol(';'))
}

/// `content` between `open` and `close`, keeping only the content tree.
pub fn pack<'a, I, A, O, B>(
    open: Parser<'a, I, A>,
    content: Parser<'a, I, O>,
    close: Parser<'a, I, B>,
) -> Parser<'a, I, O>
where
    I: Symbols + 'a,
    A: Clone + 'a,
    O: Clone + 'a,
    B: 'a,
{
    seq_keep_first(seq_keep_second(open, content), close)
}

/// `( content )`
pub fn parenthesized<'a, I, O>(content: Parser<'a, I, O>) -> Parser<'a, I, O>
where
    I: Symbols<Symbol = char> + 'a,
    O: Clone + 'a,
{
    pack(symbol('('), content, symbol(')'))
}

/// `[ content ]`
pub fn bracketed<'a, I, O>(content: Parser<'a, I, O>) -> Parser<'a, I, O>
where
    I: Symbols<Symbol = char> + 'a,
    O: Clone + 'a,
{
    pack(symbol('['), content, symbol(']'))
}

/// `begin content end`
pub fn compound<'a, O>(content: Parser<'a, &'a str, O>) -> Parser<'a, &'a str, O>
where
    O: Clone + 'a,
{
    pack(token("begin"), content, token("end"))
}

// ============================================================================
// OPERATOR CHAINS
// ============================================================================

/// `item (op item)*` folded left: `1+2+3` becomes `((1+2)+3)`.
///
/// `op` yields the function combining the trees on either side of it.
pub fn chain_left<'a, I, O, F>(item: Parser<'a, I, O>, op: Parser<'a, I, F>) -> Parser<'a, I, O>
where
    I: Symbols + 'a,
    O: Clone + 'a,
    F: Fn(O, O) -> O + Clone + 'a,
{
    apply(
        |(head, tail): (O, Vec<(F, O)>)| {
            tail.into_iter()
                .fold(head, |acc, (combine, operand)| combine(acc, operand))
        },
        sequence(item.clone(), many(sequence(op, item))),
    )
}

/// `item (op item)*` folded right: `1+2+3` becomes `(1+(2+3))`.
///
/// The input is scanned left to right exactly as in [`chain_left`]; only the
/// associativity of the resulting tree differs.
pub fn chain_right<'a, I, O, F>(item: Parser<'a, I, O>, op: Parser<'a, I, F>) -> Parser<'a, I, O>
where
    I: Symbols + 'a,
    O: Clone + 'a,
    F: Fn(O, O) -> O + Clone + 'a,
{
    apply(
        |(head, tail): (O, Vec<(F, O)>)| {
            let mut pending = Vec::with_capacity(tail.len());
            let mut last = head;
            for (combine, operand) in tail {
                pending.push((last, combine));
                last = operand;
            }
            pending
                .into_iter()
                .rev()
                .fold(last, |acc, (operand, combine)| combine(operand, acc))
        },
        sequence(item.clone(), many(sequence(op, item))),
    )
}
