//! The parser type and its lazy result sets.
//!
//! A parser maps an input to a possibly infinite sequence of
//! `(tree, remainder)` candidates. Candidates are produced on demand: pulling
//! the first result never evaluates the alternatives behind it. An empty
//! sequence is a parse failure.

use std::fmt;
use std::rc::Rc;

use crate::input::Symbols;

/// A lazily produced result set: `(tree, remainder)` pairs in combinator order.
pub type Results<'a, I, O> = Box<dyn Iterator<Item = (O, I)> + 'a>;

// ============================================================================
// PARSER
// ============================================================================

/// A shareable parse function from `I` to a result set of `O` trees.
///
/// Cloning is cheap; clones share the same underlying closure.
pub struct Parser<'a, I, O> {
    run: Rc<dyn Fn(I) -> Results<'a, I, O> + 'a>,
}

impl<'a, I, O> Parser<'a, I, O>
where
    I: Symbols + 'a,
    O: 'a,
{
    /// Wraps a parse function.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(I) -> Results<'a, I, O> + 'a,
    {
        Self { run: Rc::new(run) }
    }

    /// Runs the parser, returning its lazy result set.
    pub fn parse(&self, input: I) -> Results<'a, I, O> {
        (self.run)(input)
    }

    /// Binds the parser to `input` as a restartable result set.
    pub fn results(&self, input: I) -> ResultSet<'a, I, O> {
        ResultSet {
            parser: self.clone(),
            input,
        }
    }
}

impl<'a, I, O> Clone for Parser<'a, I, O> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<'a, I, O> fmt::Debug for Parser<'a, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

// ============================================================================
// RESULT SETS
// ============================================================================

/// A parser applied to a fixed input.
///
/// Parsers are pure, so every call to [`ResultSet::iter`] restarts the
/// enumeration from scratch and yields the same sequence.
#[derive(Clone, Debug)]
pub struct ResultSet<'a, I, O> {
    parser: Parser<'a, I, O>,
    input: I,
}

impl<'a, I, O> ResultSet<'a, I, O>
where
    I: Symbols + 'a,
    O: 'a,
{
    /// A fresh enumeration of the results.
    pub fn iter(&self) -> Results<'a, I, O> {
        self.parser.parse(self.input.clone())
    }

    /// True when the parser fails on the bound input.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn first(&self) -> Option<(O, I)> {
        self.iter().next()
    }

    /// The first `n` results; later ones are never evaluated.
    pub fn prefix(&self, n: usize) -> Vec<(O, I)> {
        self.iter().take(n).collect()
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}

impl<'s, 'a, I, O> IntoIterator for &'s ResultSet<'a, I, O>
where
    I: Symbols + 'a,
    O: 'a,
{
    type Item = (O, I);
    type IntoIter = Results<'a, I, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// INTERNAL HELPERS
// ============================================================================

/// A result set holding exactly one candidate.
pub(crate) fn single<'a, I: 'a, O: 'a>(tree: O, rest: I) -> Results<'a, I, O> {
    Box::new(std::iter::once((tree, rest)))
}

/// The empty result set.
pub(crate) fn none<'a, I: 'a, O: 'a>() -> Results<'a, I, O> {
    Box::new(std::iter::empty())
}

/// A result set with at most one candidate.
pub(crate) fn optional<'a, I: 'a, O: 'a>(found: Option<(O, I)>) -> Results<'a, I, O> {
    Box::new(found.into_iter())
}
