//! Grammar interpreter: turns a [`Grammar`] into a parser for its language.
//!
//! Nothing is compiled ahead of time. A nonterminal's parser holds only its
//! name and a (cheap) copy of the environment; the alternatives are looked up
//! and their parsers built each time the nonterminal is invoked on some input.
//! Constructing the parser for a recursive rule therefore never recurses.
//!
//! Expansion is bounded by the input for grammars that consume at least one
//! symbol before re-entering a nonterminal. Left-recursive rules, and rules
//! that can reach themselves through empty alternatives without consuming
//! anything, do not terminate.
//!
//! Generated parsers evaluate recursively: pulling a result nests stack frames
//! for every symbol consumed and every nonterminal expanded on the way, so
//! inputs of a few thousand lexemes can exhaust the stack of a default thread.
//! Run large inputs on a thread with a larger stack.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::combinators::{choice, sequence};
use crate::elementary::{literal, succeed};
use crate::grammar::{Alternative, Grammar, GrammarSymbol, ParseNode};
use crate::input::Lexemes;
use crate::parser::{none, Parser};
use crate::transformers::{apply, at_most, sp};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Knobs for the parsers an [`Interpreter`] builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterOptions {
    /// Skip layout before every terminal. On by default.
    pub skip_layout: bool,
    /// Cap on the number of results the start symbol yields.
    pub max_results: Option<usize>,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            skip_layout: true,
            max_results: None,
        }
    }
}

impl InterpreterOptions {
    /// Reads options from JSON; missing fields keep their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

// ============================================================================
// INTERPRETER
// ============================================================================

/// Builds parsers for the symbols of one grammar.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    grammar: Grammar,
    options: InterpreterOptions,
}

impl Interpreter {
    pub fn new(grammar: Grammar) -> Self {
        Self::with_options(grammar, InterpreterOptions::default())
    }

    pub fn with_options(grammar: Grammar, options: InterpreterOptions) -> Self {
        Self { grammar, options }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn options(&self) -> InterpreterOptions {
        self.options
    }

    /// Parser for a single grammar symbol.
    pub fn symbol<'a, I>(&self, symbol: &GrammarSymbol) -> Parser<'a, I, ParseNode>
    where
        I: Lexemes + 'a,
    {
        match symbol {
            GrammarSymbol::Terminal(name) => self.terminal(name),
            GrammarSymbol::Nonterminal(name) => self.nonterminal(name),
        }
    }

    /// Parser for one alternative, yielding the child nodes in order.
    pub fn alternative<'a, I>(&self, symbols: &[GrammarSymbol]) -> Parser<'a, I, Vec<ParseNode>>
    where
        I: Lexemes + 'a,
    {
        symbols.iter().fold(succeed(Vec::new()), |children, symbol| {
            apply(
                |(mut children, child): (Vec<ParseNode>, ParseNode)| {
                    children.push(child);
                    children
                },
                sequence(children, self.symbol(symbol)),
            )
        })
    }

    /// Parser trying each alternative in declared order.
    pub fn alternatives<'a, I>(&self, alternatives: &[Alternative]) -> Parser<'a, I, Vec<ParseNode>>
    where
        I: Lexemes + 'a,
    {
        choice(
            alternatives
                .iter()
                .map(|alternative| self.alternative(alternative))
                .collect::<Vec<_>>(),
        )
    }

    /// Parser for the start symbol, honoring `max_results`.
    pub fn start<'a, I>(&self, start: &GrammarSymbol) -> Parser<'a, I, ParseNode>
    where
        I: Lexemes + 'a,
    {
        let parser = self.symbol(start);
        match self.options.max_results {
            Some(limit) => at_most(parser, limit),
            None => parser,
        }
    }

    fn terminal<'a, I>(&self, name: &str) -> Parser<'a, I, ParseNode>
    where
        I: Lexemes + 'a,
    {
        let node = ParseNode::terminal(name);
        let matcher = literal(name);
        let matcher = if self.options.skip_layout {
            sp(matcher)
        } else {
            matcher
        };
        apply(move |()| node.clone(), matcher)
    }

    fn nonterminal<'a, I>(&self, name: &str) -> Parser<'a, I, ParseNode>
    where
        I: Lexemes + 'a,
    {
        let interpreter = self.clone();
        let name = name.to_string();
        Parser::new(move |input: I| {
            let Some(alternatives) = interpreter.grammar.alternatives(&name) else {
                warn!(nonterminal = %name, "expanding undefined nonterminal; no parse");
                return none();
            };
            trace!(nonterminal = %name, alternatives = alternatives.len(), "expanding nonterminal");
            let label = name.clone();
            apply(
                move |children| ParseNode::nonterminal(label.clone(), children),
                interpreter.alternatives(alternatives),
            )
            .parse(input)
        })
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parser for `symbol` under `grammar`, with default options.
pub fn parse_symbol<'a, I>(grammar: &Grammar, symbol: &GrammarSymbol) -> Parser<'a, I, ParseNode>
where
    I: Lexemes + 'a,
{
    Interpreter::new(grammar.clone()).symbol(symbol)
}

/// Parser for one alternative of `grammar`.
pub fn parse_alternative<'a, I>(
    grammar: &Grammar,
    symbols: &[GrammarSymbol],
) -> Parser<'a, I, Vec<ParseNode>>
where
    I: Lexemes + 'a,
{
    Interpreter::new(grammar.clone()).alternative(symbols)
}

/// Parser for a rule's right-hand side under `grammar`.
pub fn parse_alternatives<'a, I>(
    grammar: &Grammar,
    alternatives: &[Alternative],
) -> Parser<'a, I, Vec<ParseNode>>
where
    I: Lexemes + 'a,
{
    Interpreter::new(grammar.clone()).alternatives(alternatives)
}

/// Parser for the language `grammar` describes from `start`.
pub fn parse_grammar<'a, I>(grammar: &Grammar, start: &GrammarSymbol) -> Parser<'a, I, ParseNode>
where
    I: Lexemes + 'a,
{
    parse_symbol(grammar, start)
}

/// [`parse_grammar`] with explicit options.
pub fn parse_grammar_with<'a, I>(
    grammar: &Grammar,
    start: &GrammarSymbol,
    options: InterpreterOptions,
) -> Parser<'a, I, ParseNode>
where
    I: Lexemes + 'a,
{
    Interpreter::with_options(grammar.clone(), options).start(start)
}
