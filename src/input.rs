//! Symbol sequences consumed by parsers.
//!
//! A parser never mutates its input. Every step hands back a suffix view of the
//! sequence it was given, so a result's remainder can be compared against the
//! original input with plain equality.

use std::fmt::Debug;

// ============================================================================
// TRAITS
// ============================================================================

/// An immutable, re-sliceable sequence of atomic symbols.
///
/// Implemented for text (`&str`, one symbol per `char`) and for pre-lexed
/// token slices (`&[T]`).
pub trait Symbols: Clone + PartialEq + Debug {
    /// The atomic element of the sequence.
    type Symbol: Clone + PartialEq + Debug;

    fn is_empty(&self) -> bool;

    /// The first symbol, if any.
    fn head(&self) -> Option<Self::Symbol>;

    /// Everything after the first symbol. Empty input stays empty.
    fn tail(&self) -> Self {
        self.drop_front(1)
    }

    /// Drops up to `n` leading symbols.
    fn drop_front(&self, n: usize) -> Self;

    /// Keeps at most `n` leading symbols.
    fn take_front(&self, n: usize) -> Self;

    /// Number of symbols in the sequence.
    fn symbol_count(&self) -> usize;

    /// Skips insignificant layout before the next symbol.
    ///
    /// Text skips whitespace. Token slices carry no layout and return themselves.
    fn skip_layout(&self) -> Self;
}

/// Inputs whose symbols can be matched against a grammar terminal by name.
pub trait Lexemes: Symbols {
    /// Strips one occurrence of the terminal `name` from the front.
    fn strip_terminal(&self, name: &str) -> Option<Self>;
}

// ============================================================================
// TEXT
// ============================================================================

impl<'a> Symbols for &'a str {
    type Symbol = char;

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }

    fn head(&self) -> Option<char> {
        self.chars().next()
    }

    fn drop_front(&self, n: usize) -> Self {
        let text: &'a str = *self;
        match text.char_indices().nth(n) {
            Some((offset, _)) => &text[offset..],
            None => &text[text.len()..],
        }
    }

    fn take_front(&self, n: usize) -> Self {
        let text: &'a str = *self;
        match text.char_indices().nth(n) {
            Some((offset, _)) => &text[..offset],
            None => text,
        }
    }

    fn symbol_count(&self) -> usize {
        self.chars().count()
    }

    fn skip_layout(&self) -> Self {
        let text: &'a str = *self;
        text.trim_start()
    }
}

impl<'a> Lexemes for &'a str {
    fn strip_terminal(&self, name: &str) -> Option<Self> {
        let text: &'a str = *self;
        text.strip_prefix(name)
    }
}

// ============================================================================
// TOKEN SLICES
// ============================================================================

impl<'a, T> Symbols for &'a [T]
where
    T: Clone + PartialEq + Debug,
{
    type Symbol = T;

    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }

    fn head(&self) -> Option<T> {
        self.first().cloned()
    }

    fn drop_front(&self, n: usize) -> Self {
        let tokens: &'a [T] = *self;
        &tokens[n.min(tokens.len())..]
    }

    fn take_front(&self, n: usize) -> Self {
        let tokens: &'a [T] = *self;
        &tokens[..n.min(tokens.len())]
    }

    fn symbol_count(&self) -> usize {
        self.len()
    }

    fn skip_layout(&self) -> Self {
        *self
    }
}

impl<'a, T> Lexemes for &'a [T]
where
    T: AsRef<str> + Clone + PartialEq + Debug,
{
    fn strip_terminal(&self, name: &str) -> Option<Self> {
        let tokens: &'a [T] = *self;
        match tokens.split_first() {
            Some((token, rest)) if token.as_ref() == name => Some(rest),
            _ => None,
        }
    }
}
