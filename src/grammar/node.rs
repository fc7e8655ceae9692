//! Generic labeled parse trees produced by the grammar interpreter.

use serde::{Deserialize, Serialize};

/// Whether a node was produced by a terminal or a nonterminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    Terminal,
    Nonterminal,
}

/// One matched grammar symbol.
///
/// Terminal nodes never have children. A nonterminal node's children are the
/// nodes of the alternative that matched, in order; an empty alternative gives
/// a nonterminal with no children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParseNode {
    pub symbol: String,
    pub kind: SymbolKind,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    pub fn terminal(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            kind: SymbolKind::Terminal,
            children: Vec::new(),
        }
    }

    pub fn nonterminal(symbol: impl Into<String>, children: Vec<ParseNode>) -> Self {
        Self {
            symbol: symbol.into(),
            kind: SymbolKind::Nonterminal,
            children,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == SymbolKind::Terminal
    }

    /// The terminal symbols at the leaves, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'n>(&'n self, leaves: &mut Vec<&'n str>) {
        if self.is_terminal() {
            leaves.push(&self.symbol);
        }
        for child in &self.children {
            child.collect_leaves(leaves);
        }
    }
}

impl std::fmt::Display for ParseNode {
    /// Terminals print as their name, nonterminals as `NAME(child, ...)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol)?;
        if self.is_terminal() {
            return Ok(());
        }
        f.write_str("(")?;
        for (index, child) in self.children.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{child}")?;
        }
        f.write_str(")")
    }
}
