//! Grammar data model: symbols, alternatives and the grammar environment.
//!
//! A [`Grammar`] maps each nonterminal name to its ordered alternatives. It is
//! produced once by the BNF reader and never mutated afterwards; "updates"
//! return a new environment sharing structure with the old one, which also
//! makes cloning cheap enough for every interpreter closure to own a copy.

use im::{HashMap, Vector};
use serde::{Deserialize, Serialize};

pub mod bnf;
pub mod interp;
pub mod node;

pub use bnf::bnf;
pub use interp::{
    parse_alternative, parse_alternatives, parse_grammar, parse_grammar_with, parse_symbol,
    Interpreter, InterpreterOptions,
};
pub use node::{ParseNode, SymbolKind};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A terminal or nonterminal occurring in a grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrammarSymbol {
    Terminal(String),
    Nonterminal(String),
}

/// One right-hand side of a rule: a possibly empty run of symbols.
pub type Alternative = Vec<GrammarSymbol>;

impl GrammarSymbol {
    pub fn terminal(name: impl Into<String>) -> Self {
        GrammarSymbol::Terminal(name.into())
    }

    pub fn nonterminal(name: impl Into<String>) -> Self {
        GrammarSymbol::Nonterminal(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            GrammarSymbol::Terminal(name) | GrammarSymbol::Nonterminal(name) => name,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GrammarSymbol::Terminal(_))
    }
}

impl std::fmt::Display for GrammarSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The grammar environment: nonterminal name to ordered alternatives.
///
/// Lookups go by name every time a nonterminal is expanded, which is what lets
/// self-referential and mutually recursive rules be interpreted without
/// building an infinite parser up front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    rules: HashMap<String, Vec<Alternative>>,
    order: Vector<String>,
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Grammar {
    /// The empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment holding the single rule `name ::= alternatives`.
    pub fn singleton(name: impl Into<String>, alternatives: Vec<Alternative>) -> Self {
        Self::new().with_rule(name, alternatives)
    }

    /// Builds an environment from rules in declaration order.
    ///
    /// Several rules for the same nonterminal contribute their alternatives in
    /// the order they were declared.
    pub fn from_rules<N>(rules: impl IntoIterator<Item = (N, Vec<Alternative>)>) -> Self
    where
        N: Into<String>,
    {
        rules
            .into_iter()
            .fold(Self::new(), |grammar, (name, alternatives)| {
                grammar.with_rule(name, alternatives)
            })
    }

    /// Returns a new environment with `alternatives` appended to `name`'s rule.
    pub fn with_rule(&self, name: impl Into<String>, alternatives: Vec<Alternative>) -> Self {
        let name = name.into();
        let mut next = self.clone();
        match next.rules.get_mut(&name) {
            Some(existing) => existing.extend(alternatives),
            None => {
                next.order.push_back(name.clone());
                next.rules.insert(name, alternatives);
            }
        }
        next
    }

    /// The alternatives of nonterminal `name`, if it is defined.
    pub fn alternatives(&self, name: &str) -> Option<&[Alternative]> {
        self.rules.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Defined nonterminals in declaration order.
    pub fn nonterminals(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// `(name, alternatives)` pairs in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &[Alternative])> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.alternatives(name).map(|alts| (name.as_str(), alts)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Applies `f` to every rule's alternatives, keeping names and order.
    pub fn map_alternatives<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&[Alternative]) -> Vec<Alternative>,
    {
        Self::from_rules(
            self.rules()
                .map(|(name, alternatives)| (name.to_string(), f(alternatives)))
                .collect::<Vec<_>>(),
        )
    }

    /// Every `(rule, missing)` pair where `rule` mentions an undefined nonterminal.
    pub fn undefined_references(&self) -> Vec<(String, String)> {
        let mut missing = Vec::new();
        for (rule, alternatives) in self.rules() {
            for symbol in alternatives.iter().flatten().filter(|symbol| !symbol.is_terminal()) {
                let pair = (rule.to_string(), symbol.name().to_string());
                if !self.contains(symbol.name()) && !missing.contains(&pair) {
                    missing.push(pair);
                }
            }
        }
        missing
    }
}

impl std::fmt::Display for Grammar {
    /// Renders the environment back in BNF notation, one rule per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, alternatives) in self.rules() {
            write!(f, "{name} ::=")?;
            for (index, alternative) in alternatives.iter().enumerate() {
                if index > 0 {
                    f.write_str(" |")?;
                }
                for symbol in alternative {
                    write!(f, " {symbol}")?;
                }
            }
            writeln!(f, " .")?;
        }
        Ok(())
    }
}
