//! # parsgen
//!
//! Lazy, non-deterministic parser combinators, and a generator that turns a
//! BNF grammar into a parser for the language it describes.
//!
//! A [`Parser`] maps an input to the lazy sequence of every way it can
//! succeed: each result pairs a value with the input left unconsumed. Results
//! are produced on demand, so taking the first one never pays for the rest.
//!
//! ```rust
//! use parsgen::{generate_parser, some};
//! use parsgen::grammar::GrammarSymbol;
//! use parsgen::lexeme::{lower_run, upper_run};
//!
//! let blocks = generate_parser(
//!     upper_run(),
//!     lower_run(),
//!     "BLOCK ::= begin BLOCK end BLOCK | .",
//!     &GrammarSymbol::nonterminal("BLOCK"),
//! )
//! .unwrap();
//!
//! let tree = some(&blocks, "begin begin end end").unwrap();
//! assert_eq!(tree.leaves(), vec!["begin", "begin", "end", "end"]);
//! ```

pub use crate::errors::{ErrorType, ParseError};
pub use crate::generator::{generate_parser, Generator};
pub use crate::input::{Lexemes, Symbols};
pub use crate::parser::{Parser, ResultSet, Results};
pub use crate::transformers::some;

pub mod combinators;
pub mod elementary;
pub mod errors;
pub mod generator;
pub mod grammar;
pub mod input;
pub mod lexeme;
pub mod parser;
pub mod transformers;
