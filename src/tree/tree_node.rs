use core::cmp::Ordering;

/// A node of the huffman tree.
///
/// Leaves carry one symbol and its occurrence count, internal nodes carry
/// the sum of their two children. The tree is built bottom-up and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: char,
        count: u32,
    },
    Internal {
        count: u32,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn count(&self) -> u32 {
        match self {
            HuffmanNode::Leaf { count, .. } => *count,
            HuffmanNode::Internal { count, .. } => *count,
        }
    }

    /// the symbol for leaves, `None` for internal nodes
    pub fn symbol(&self) -> Option<char> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// left and right child for internal nodes, `None` for leaves
    pub fn children(&self) -> Option<(&HuffmanNode, &HuffmanNode)> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, right, .. } => Some((left, right)),
        }
    }

    /// displayable label for renderers: the count, plus the symbol for
    /// leaves. A blank symbol is spelled out so it stays visible.
    pub fn label(&self) -> String {
        match self.symbol() {
            Some(' ') => format!("{} space", self.count()),
            Some(symbol) => format!("{} {}", self.count(), symbol),
            None => format!("{}", self.count()),
        }
    }
}

/// Queue entry during tree construction.
///
/// `seq` is the creation sequence number of the node, assigned when it
/// enters the queue. It is the last tie break key, so rebuilds on the same
/// input always merge in the same order.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct HeapNode {
    pub(crate) node: HuffmanNode,
    pub(crate) seq: u64,
}

impl HeapNode {
    /// total order: count asc, leaves before internal nodes, symbol
    /// code point asc, creation order asc
    fn key(&self) -> (u32, u8, Option<char>, u64) {
        let kind = if self.node.is_leaf() { 0 } else { 1 };
        (self.node.count(), kind, self.node.symbol(), self.seq)
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}
