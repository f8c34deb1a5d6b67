use std::collections::BTreeMap;
use std::collections::BTreeSet;

use log::log_enabled;
use log::trace;
use log::Level::Trace;

use crate::tree::HuffmanNode;

/// symbol to bit-string code, one entry per leaf of the tree
///
/// Codes are prefix-free by construction, no code is a prefix of another.
/// The table is derived once per tree and cached alongside it, it becomes
/// stale if a new tree is built.
pub type CodeTable = BTreeMap<char, String>;

/// derives the code table from the tree with a depth-first walk: left
/// edges append `0`, right edges `1`, reaching a leaf records the
/// accumulated path as its code
///
/// A bare leaf root (single-symbol input) has an empty path and gets the
/// one-bit code `0` instead, so every symbol ends up with a non-empty code.
pub fn tree_to_codes(root: &HuffmanNode) -> CodeTable {
    let mut codes = CodeTable::new();
    assign_codes(root, String::new(), &mut codes);

    if log_enabled!(Trace) {
        for (symbol, code) in &codes {
            trace!("{:?}: {}", symbol, code);
        }
    }
    codes
}

fn assign_codes(node: &HuffmanNode, path: String, codes: &mut CodeTable) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            let code = if path.is_empty() { "0".to_string() } else { path };
            codes.insert(*symbol, code);
        }
        HuffmanNode::Internal { left, right, .. } => {
            assign_codes(left, format!("{}0", path), codes);
            assign_codes(right, format!("{}1", path), codes);
        }
    }
}

/// presentation view of the code table: one row per distinct symbol,
/// ordered by the symbol's first occurrence in `source`
///
/// Purely a display derivative, encode and decode never consult it.
pub fn display_table(codes: &CodeTable, source: &str) -> Vec<(char, String)> {
    let mut seen = BTreeSet::new();
    let mut rows = Vec::with_capacity(codes.len());
    for symbol in source.chars() {
        if !seen.insert(symbol) {
            continue;
        }
        if let Some(code) = codes.get(&symbol) {
            rows.push((symbol, code.clone()));
        }
    }
    rows
}

/// validates that no code in the table is a prefix of another.
/// Slow pairwise check, meant for tests and debugging, not for the
/// regular encode path.
pub fn check_prefix_property(codes: &CodeTable) {
    for (symbol, code) in codes {
        for (other_symbol, other_code) in codes {
            if symbol == other_symbol {
                continue;
            }
            if other_code.starts_with(code.as_str()) {
                panic!(
                    "code {} of {:?} is a prefix of {} of {:?}",
                    code, symbol, other_code, other_symbol
                );
            }
        }
    }
}
