// tests/grammar_tests.rs

use parsgen::grammar::{
    bnf, parse_alternative, parse_alternatives, parse_grammar, parse_grammar_with, parse_symbol,
    Grammar, GrammarSymbol, Interpreter, InterpreterOptions, ParseNode, SymbolKind,
};
use parsgen::lexeme::{lower_run, upper_run};
use parsgen::transformers::{full_parses, some};

fn t(name: &str) -> GrammarSymbol {
    GrammarSymbol::terminal(name)
}

fn n(name: &str) -> GrammarSymbol {
    GrammarSymbol::nonterminal(name)
}

fn block_grammar() -> Grammar {
    Grammar::singleton("BLOCK", vec![vec![t("begin"), n("BLOCK"), t("end"), n("BLOCK")], vec![]])
}

fn empty_block() -> ParseNode {
    ParseNode::nonterminal("BLOCK", vec![])
}

// ---
// BNF reader
// ---

#[test]
fn test_bnf_reads_block_grammar() {
    let text = "BLOCK ::= begin BLOCK end BLOCK | .";
    let grammar = some(&bnf(upper_run(), lower_run()), text).unwrap();
    assert_eq!(grammar, block_grammar());
}

#[test]
fn test_bnf_reads_several_rules_in_order() {
    let text = "
        S ::= NP VP .
        NP ::= the N .
        VP ::= runs | sleeps .
        N ::= dog | cat .
    ";
    let grammar = some(&bnf(upper_run(), lower_run()), text).unwrap();
    assert_eq!(grammar.nonterminals().collect::<Vec<_>>(), vec!["S", "NP", "VP", "N"]);
    assert_eq!(grammar.alternatives("VP"), Some(&[vec![t("runs")], vec![t("sleeps")]][..]));
}

#[test]
fn test_bnf_merges_repeated_rules() {
    let grammar = some(&bnf(upper_run(), lower_run()), "S ::= a . S ::= b .").unwrap();
    assert_eq!(grammar.alternatives("S"), Some(&[vec![t("a")], vec![t("b")]][..]));
}

#[test]
fn test_bnf_reads_empty_text_as_empty_grammar() {
    let grammar = some(&bnf(upper_run(), lower_run()), "  ").unwrap();
    assert!(grammar.is_empty());
}

#[test]
fn test_bnf_rejects_rule_without_terminator() {
    assert!(some(&bnf(upper_run(), lower_run()), "S ::= a S").is_err());
    assert!(some(&bnf(upper_run(), lower_run()), "s ::= a .").is_err());
}

#[test]
fn test_grammar_display_reads_back() {
    let text = block_grammar().to_string();
    let reread = some(&bnf(upper_run(), lower_run()), text.as_str()).unwrap();
    assert_eq!(reread, block_grammar());
}

// ---
// Interpreter
// ---

#[test]
fn test_terminal_symbol_skips_layout() {
    let parser = parse_symbol(&block_grammar(), &t("begin"));
    let results: Vec<_> = parser.parse("  begin end").collect();
    assert_eq!(results, vec![(ParseNode::terminal("begin"), " end")]);
}

#[test]
fn test_block_results_in_order() {
    let parser = parse_grammar(&block_grammar(), &n("BLOCK"));
    let input = "begin end begin begin end end";
    let results: Vec<_> = parser.parse(input).collect();

    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0].0.to_string(),
        concat!(
            "BLOCK(begin, BLOCK(), end, ",
            "BLOCK(begin, BLOCK(begin, BLOCK(), end, BLOCK()), end, BLOCK()))"
        )
    );
    assert_eq!(results[0].1, "");
    assert_eq!(
        results[1],
        (
            ParseNode::nonterminal(
                "BLOCK",
                vec![
                    ParseNode::terminal("begin"),
                    empty_block(),
                    ParseNode::terminal("end"),
                    empty_block(),
                ]
            ),
            " begin begin end end"
        )
    );
    assert_eq!(results[2], (empty_block(), input));
}

#[test]
fn test_empty_input_gives_empty_block() {
    let parser = parse_grammar(&block_grammar(), &n("BLOCK"));
    assert_eq!(some(&parser, "").unwrap(), empty_block());
}

#[test]
fn test_alternative_yields_children_in_order() {
    let parser = parse_alternative(&block_grammar(), &[t("begin"), n("BLOCK"), t("end")]);
    let children = some(&parser, "begin end").unwrap();
    assert_eq!(
        children,
        vec![ParseNode::terminal("begin"), empty_block(), ParseNode::terminal("end")]
    );
}

#[test]
fn test_alternatives_try_each_in_declared_order() {
    let grammar = block_grammar();
    let parser = parse_alternatives(&grammar, grammar.alternatives("BLOCK").unwrap_or_default());
    let first = parser.parse("begin end").next().unwrap();
    assert_eq!(first.0.len(), 4);
    assert_eq!(first.1, "");
}

#[test]
fn test_undefined_nonterminal_fails_quietly() {
    let parser = parse_grammar(&block_grammar(), &n("MISSING"));
    assert_eq!(parser.parse("begin end").count(), 0);
}

#[test]
fn test_ambiguous_grammar_yields_every_tree() {
    let text = "S ::= A B | C . A ::= x . B ::= y . C ::= x y .";
    let grammar = some(&bnf(upper_run(), lower_run()), text).unwrap();
    let parser = parse_grammar(&grammar, &n("S"));
    let trees: Vec<String> =
        full_parses(&parser, "x y", 5).iter().map(ParseNode::to_string).collect();
    assert_eq!(trees, vec!["S(A(x), B(y))", "S(C(x, y))"]);
}

#[test]
fn test_interpreter_over_token_slices() {
    let tokens: Vec<String> =
        ["begin", "begin", "end", "end"].iter().map(|word| word.to_string()).collect();
    let input: &[String] = &tokens;
    let parser = parse_grammar(&block_grammar(), &n("BLOCK"));
    let tree = some(&parser, input).unwrap();
    assert_eq!(tree.leaves(), vec!["begin", "begin", "end", "end"]);
    assert_eq!(tree.kind, SymbolKind::Nonterminal);
}

#[test]
fn test_token_terminals_must_match_whole_tokens() {
    let tokens = ["beginend"];
    let input: &[&str] = &tokens;
    let parser = parse_grammar(&block_grammar(), &n("BLOCK"));
    assert!(some(&parser, input).is_err());
}

#[test]
fn test_options_limit_results_and_layout() {
    let strict = InterpreterOptions {
        skip_layout: false,
        max_results: None,
    };
    let parser = parse_grammar_with(&block_grammar(), &n("BLOCK"), strict);
    assert!(some(&parser, "beginend").is_ok());
    assert!(some(&parser, "begin end").is_err());

    let capped = InterpreterOptions {
        skip_layout: true,
        max_results: Some(1),
    };
    let parser = parse_grammar_with(&block_grammar(), &n("BLOCK"), capped);
    assert_eq!(parser.parse("begin end begin end").count(), 1);
}

#[test]
fn test_interpreter_exposes_its_grammar() {
    let interpreter = Interpreter::new(block_grammar());
    assert_eq!(interpreter.grammar(), &block_grammar());
    assert_eq!(interpreter.options(), InterpreterOptions::default());
    let parser = interpreter.symbol(&n("BLOCK"));
    assert!(some(&parser, "begin end").is_ok());
}

// ---
// Serialization
// ---

#[test]
fn test_grammar_round_trips_through_json() {
    let json = serde_json::to_string(&block_grammar()).unwrap();
    let restored: Grammar = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, block_grammar());
    assert_eq!(restored.nonterminals().collect::<Vec<_>>(), vec!["BLOCK"]);
}

#[test]
fn test_grammar_symbol_round_trips_through_json() {
    for symbol in [t("begin"), n("BLOCK")] {
        let json = serde_json::to_string(&symbol).unwrap();
        let restored: GrammarSymbol = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, symbol);
    }
}

#[test]
fn test_parse_tree_round_trips_through_json() {
    let parser = parse_grammar(&block_grammar(), &n("BLOCK"));
    let tree = some(&parser, "begin begin end end").unwrap();
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["symbol"], "BLOCK");
    assert_eq!(json["kind"], "Nonterminal");
    let restored: ParseNode = serde_json::from_value(json).unwrap();
    assert_eq!(restored, tree);
}
