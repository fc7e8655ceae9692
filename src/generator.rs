//! Generator entry point: grammar text in, parser for the described language out.
//!
//! ## Usage Workflow
//! ```rust
//! use parsgen::generator::generate_parser;
//! use parsgen::grammar::GrammarSymbol;
//! use parsgen::lexeme::{lower_run, upper_run};
//! use parsgen::transformers::some;
//!
//! let parser = generate_parser(
//!     upper_run(),
//!     lower_run(),
//!     "BLOCK ::= begin BLOCK end BLOCK | .",
//!     &GrammarSymbol::nonterminal("BLOCK"),
//! )
//! .unwrap();
//! let tree = some(&parser, "begin end").unwrap();
//! assert_eq!(tree.to_string(), "BLOCK(begin, BLOCK(), end, BLOCK())");
//! ```

use tracing::{debug, instrument};

use crate::errors::ParseError;
use crate::grammar::{
    bnf, parse_grammar_with, Grammar, GrammarSymbol, InterpreterOptions, ParseNode,
};
use crate::input::Lexemes;
use crate::parser::Parser;
use crate::transformers::just;

/// Reads grammar text with a fixed pair of lexeme recognizers and builds
/// parsers from it.
#[derive(Debug, Clone)]
pub struct Generator<'g> {
    nontp: Parser<'g, &'g str, String>,
    termp: Parser<'g, &'g str, String>,
    options: InterpreterOptions,
}

impl<'g> Generator<'g> {
    pub fn new(nontp: Parser<'g, &'g str, String>, termp: Parser<'g, &'g str, String>) -> Self {
        Self {
            nontp,
            termp,
            options: InterpreterOptions::default(),
        }
    }

    /// Options handed to the interpreter for every generated parser.
    pub fn with_options(self, options: InterpreterOptions) -> Self {
        Self { options, ..self }
    }

    pub fn options(&self) -> InterpreterOptions {
        self.options
    }

    /// Reads `text` into a validated grammar environment.
    ///
    /// # Errors
    /// - [`ParseError::MalformedGrammar`] if no reading consumes the whole text,
    ///   or two readings produce different grammars.
    /// - [`ParseError::UndefinedNonterminal`] if a rule refers to a nonterminal
    ///   that has no rule of its own.
    pub fn grammar(&self, text: &'g str) -> Result<Grammar, ParseError> {
        let reader = bnf(self.nontp.clone(), self.termp.clone());
        let mut readings = just(reader.clone()).parse(text);

        let Some((grammar, _)) = readings.next() else {
            let unread = reader
                .parse(text)
                .map(|(_, rest)| rest.len())
                .min()
                .unwrap_or(text.len());
            return Err(ParseError::malformed(
                "the text does not parse to completion",
                text,
                text.len() - unread,
            ));
        };
        if readings.any(|(other, _)| other != grammar) {
            return Err(ParseError::malformed("the text has more than one reading", text, 0));
        }

        if let Some((rule, name)) = grammar.undefined_references().into_iter().next() {
            return Err(ParseError::UndefinedNonterminal {
                name,
                referenced_by: Some(rule),
            });
        }

        debug!(rules = grammar.len(), "read grammar");
        Ok(grammar)
    }

    /// Reads `text` and returns the parser for the language it describes,
    /// starting from `start`.
    #[instrument(level = "debug", skip_all, fields(start = %start))]
    pub fn generate<'a, I>(
        &self,
        text: &'g str,
        start: &GrammarSymbol,
    ) -> Result<Parser<'a, I, ParseNode>, ParseError>
    where
        I: Lexemes + 'a,
    {
        let grammar = self.grammar(text)?;
        if let GrammarSymbol::Nonterminal(name) = start {
            if !grammar.contains(name) {
                return Err(ParseError::UndefinedNonterminal {
                    name: name.clone(),
                    referenced_by: None,
                });
            }
        }
        debug!(nonterminals = grammar.len(), "generated parser");
        Ok(parse_grammar_with(&grammar, start, self.options))
    }
}

/// Parser for the language that `grammar_text` describes, starting at `start`.
///
/// `nontp` and `termp` decide which lexemes of the grammar text are
/// nonterminals and which are terminals.
pub fn generate_parser<'g, 'a, I>(
    nontp: Parser<'g, &'g str, String>,
    termp: Parser<'g, &'g str, String>,
    grammar_text: &'g str,
    start: &GrammarSymbol,
) -> Result<Parser<'a, I, ParseNode>, ParseError>
where
    I: Lexemes + 'a,
{
    Generator::new(nontp, termp).generate(grammar_text, start)
}
