//! Reader for grammars written in BNF.
//!
//! ```text
//! grammar     ::= rule*
//! rule        ::= NONTERM "::=" alternative ("|" alternative)* "."
//! alternative ::= (TERM | NONTERM)*
//! ```
//!
//! What counts as a terminal or nonterminal lexeme is decided by two
//! recognizers supplied by the caller. Layout is insignificant between lexemes.
//! The reader is itself assembled from the combinators of this crate.

use crate::combinators::{alternation, list_of, many, seq_keep_first, seq_keep_second, sequence};
use crate::elementary::{epsilon, symbol, token};
use crate::grammar::{Alternative, Grammar, GrammarSymbol};
use crate::parser::Parser;
use crate::transformers::{apply, sp};

/// Builds a parser reading grammar text into a [`Grammar`].
///
/// `nontp` and `termp` recognize nonterminal and terminal lexemes; both should
/// be deterministic (see [`crate::lexeme`]) or the reader becomes ambiguous.
///
/// ```rust
/// use parsgen::grammar::{bnf, GrammarSymbol};
/// use parsgen::lexeme::{lower_run, upper_run};
/// use parsgen::transformers::some;
///
/// let grammar = some(&bnf(upper_run(), lower_run()), "S ::= a S | .").unwrap();
/// assert_eq!(
///     grammar.alternatives("S").unwrap(),
///     &[vec![GrammarSymbol::terminal("a"), GrammarSymbol::nonterminal("S")], vec![]][..]
/// );
/// ```
pub fn bnf<'a>(
    nontp: Parser<'a, &'a str, String>,
    termp: Parser<'a, &'a str, String>,
) -> Parser<'a, &'a str, Grammar> {
    let nonterminal = apply(GrammarSymbol::Nonterminal, sp(nontp.clone()));
    let terminal = apply(GrammarSymbol::Terminal, sp(termp));
    let alternative: Parser<'a, &'a str, Alternative> = many(alternation(terminal, nonterminal));
    let right_hand_side = list_of(alternative, sp(symbol('|')));

    let rule = sequence(
        sp(nontp),
        seq_keep_second(
            sp(token("::=")),
            seq_keep_first(right_hand_side, sp(symbol('.'))),
        ),
    );

    apply(
        |rules: Vec<(String, Vec<Alternative>)>| Grammar::from_rules(rules),
        seq_keep_first(many(rule), sp(epsilon())),
    )
}
