use std::collections::BinaryHeap;

use log::debug;

use crate::tree::tree_node::{HeapNode, HuffmanNode};
use crate::FrequencyMap;

/// builds a huffman tree from the frequency map via a min-priority-queue
///
/// The two lowest nodes under the deterministic order are merged into an
/// internal node until a single node remains. The first popped node becomes
/// the left child and owns the `0` branch.
///
/// A map with a single entry yields the bare leaf as root; code generation
/// and decoding handle that shape so the symbol still gets the one-bit
/// code `0`. An empty map yields `None`.
pub fn build_tree(freqs: &FrequencyMap) -> Option<HuffmanNode> {
    let mut seq: u64 = 0;
    let mut heap = BinaryHeap::with_capacity(freqs.len());
    for (&symbol, &count) in freqs {
        heap.push(HeapNode {
            node: HuffmanNode::Leaf { symbol, count },
            seq,
        });
        seq += 1;
    }
    debug!("building tree from {} distinct symbols", heap.len());

    while let (Some(first), second) = (heap.pop(), heap.pop()) {
        match second {
            Some(second) => {
                let merged = HuffmanNode::Internal {
                    count: first.node.count() + second.node.count(),
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                };
                heap.push(HeapNode { node: merged, seq });
                seq += 1;
            }
            // last node, which is the root node
            None => return Some(first.node),
        }
    }
    None
}
