//! Parsgen Error Handling
//!
//! Ordinary parse failure is never an error: it is an empty result set and is
//! recovered from by alternation. The variants below only cover the points
//! where a caller asked for a definite answer (`some`, grammar generation) and
//! none exists, plus invalid lexeme patterns supplied by the caller.
//!
//! Every variant is a `miette` diagnostic with a stable code and a help line;
//! grammar errors carry the grammar text as source code so a reporter can
//! point at the offending position.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Type-safe classification of [`ParseError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// No parse consumed the whole input.
    NoFullParse,
    /// Grammar text could not be read as exactly one grammar.
    MalformedGrammar,
    /// A grammar refers to a nonterminal it never defines.
    UndefinedNonterminal,
    /// A lexeme pattern failed to compile.
    InvalidPattern,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::NoFullParse => "NoFullParse",
            ErrorType::MalformedGrammar => "MalformedGrammar",
            ErrorType::UndefinedNonterminal => "UndefinedNonterminal",
            ErrorType::InvalidPattern => "InvalidPattern",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unified error type for every operation that must produce a definite answer.
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("no parse consumed the entire input")]
    #[diagnostic(
        code(parsgen::no_full_parse),
        help(
            "every candidate parse left unconsumed input; check the input or the grammar's coverage"
        )
    )]
    NoFullParse,

    #[error("malformed grammar: {reason}")]
    #[diagnostic(
        code(parsgen::malformed_grammar),
        help(
            "rules have the form `NAME ::= alt | alt .` with lexemes accepted by the recognizers"
        )
    )]
    MalformedGrammar {
        reason: String,
        #[source_code]
        grammar: NamedSource<String>,
        #[label("grammar reading stops here")]
        at: SourceSpan,
    },

    #[error("nonterminal `{name}` is used but never defined")]
    #[diagnostic(
        code(parsgen::undefined_nonterminal),
        help("add a rule `{name} ::= ... .` or correct the reference")
    )]
    UndefinedNonterminal {
        name: String,
        /// The rule whose right-hand side mentions `name`; `None` for the start symbol.
        referenced_by: Option<String>,
    },

    #[error("invalid lexeme pattern `{pattern}`")]
    #[diagnostic(code(parsgen::invalid_pattern))]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ParseError {
    /// Returns the type-safe classification of this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ParseError::NoFullParse => ErrorType::NoFullParse,
            ParseError::MalformedGrammar { .. } => ErrorType::MalformedGrammar,
            ParseError::UndefinedNonterminal { .. } => ErrorType::UndefinedNonterminal,
            ParseError::InvalidPattern { .. } => ErrorType::InvalidPattern,
        }
    }

    /// Builds a [`ParseError::MalformedGrammar`] pointing at byte `offset` of `text`.
    pub(crate) fn malformed(reason: impl Into<String>, text: &str, offset: usize) -> Self {
        let width = usize::from(offset < text.len());
        ParseError::MalformedGrammar {
            reason: reason.into(),
            grammar: NamedSource::new("grammar", text.to_string()),
            at: SourceSpan::new(offset.into(), width),
        }
    }
}
