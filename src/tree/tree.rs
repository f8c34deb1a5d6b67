use std::fmt;

use log::debug;

use crate::count_chars;
use crate::decode::decode_with_tree;
use crate::encode::encode_with_table;
use crate::error::HuffmanError;
use crate::table;
use crate::table::CodeTable;
use crate::tree::build_tree::build_tree;
use crate::tree::render_tree::render_to;
use crate::tree::tree_node::HuffmanNode;

/// An immutable huffman code snapshot: the tree, its cached code table and
/// the text it was built from.
///
/// `build` is the only constructor; encode, decode and the table views are
/// reads against the snapshot. A new build produces an independent snapshot,
/// a published tree is never mutated, so one tree can be read from several
/// threads concurrently without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
    codes: CodeTable,
    source: String,
}

impl HuffmanTree {
    /// counts symbol frequencies, merges the tree and derives the code
    /// table in one pass. Fails with `EmptyInput` for empty text.
    pub fn build(text: &str) -> Result<Self, HuffmanError> {
        let freqs = count_chars(text);
        let root = build_tree(&freqs).ok_or(HuffmanError::EmptyInput)?;
        let codes = table::tree_to_codes(&root);
        debug!(
            "built tree: {} distinct symbols, depth {}",
            codes.len(),
            codes.values().map(|code| code.len()).max().unwrap_or(0)
        );
        Ok(HuffmanTree {
            root,
            codes,
            source: text.to_string(),
        })
    }

    /// maps every symbol of `text` to its code and concatenates them.
    /// Fails with `UnknownSymbol` if a symbol has no entry in the table.
    pub fn encode(&self, text: &str) -> Result<String, HuffmanError> {
        encode_with_table(&self.codes, text)
    }

    /// encodes the text the tree was built from
    pub fn encode_source(&self) -> Result<String, HuffmanError> {
        self.encode(&self.source)
    }

    /// walks the tree bit by bit and emits a symbol per completed code.
    /// Fails with `MisalignedCode` if the bits stop mid-code.
    pub fn decode(&self, bits: &str) -> Result<String, HuffmanError> {
        decode_with_tree(&self.root, bits)
    }

    /// code table rows for display, one per distinct source symbol,
    /// ordered by first occurrence in the source text
    pub fn display_table(&self) -> Vec<(char, String)> {
        table::display_table(&self.codes, &self.source)
    }

    /// the tree shape, read-only, for collaborators that render it
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// length of the longest code, the depth of the tree
    pub fn depth(&self) -> usize {
        self.codes.values().map(|code| code.len()).max().unwrap_or(0)
    }

    /// walks the tree depth-first, calling `fun` with each node, the 0/1
    /// path that leads to it and its depth. The root comes first with an
    /// empty path.
    pub fn walk<F>(&self, fun: &mut F)
    where
        F: FnMut(&HuffmanNode, &str, usize),
    {
        let mut path = String::new();
        walk_node(&self.root, &mut path, fun);
    }
}

fn walk_node<F>(node: &HuffmanNode, path: &mut String, fun: &mut F)
where
    F: FnMut(&HuffmanNode, &str, usize),
{
    fun(node, path, path.len());
    if let Some((left, right)) = node.children() {
        path.push('0');
        walk_node(left, path, fun);
        path.pop();

        path.push('1');
        walk_node(right, path, fun);
        path.pop();
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_to(self, f)
    }
}
