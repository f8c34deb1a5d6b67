use crate::error::HuffmanError;
use crate::tree::HuffmanNode;

/// decodes a bit-string by walking the tree from the root: `0` descends
/// left, `1` right, reaching a leaf emits its symbol and resets the walk
/// to the root
///
/// The walk must rest at the root when the bits run out, otherwise the
/// last code is truncated and the whole decode is rejected. Characters
/// other than `0` and `1` are rejected as well.
pub fn decode_with_tree(root: &HuffmanNode, bits: &str) -> Result<String, HuffmanError> {
    // single-symbol tree: the root is the leaf itself and its code is "0"
    if let HuffmanNode::Leaf { symbol, .. } = root {
        let mut text = String::new();
        for bit in bits.chars() {
            match bit {
                '0' => text.push(*symbol),
                // no node owns the 1 branch in a single-leaf tree
                '1' => return Err(HuffmanError::MisalignedCode),
                other => return Err(HuffmanError::InvalidBit(other)),
            }
        }
        return Ok(text);
    }

    let mut text = String::new();
    let mut current = root;
    for bit in bits.chars() {
        let (left, right) = match current {
            HuffmanNode::Internal { left, right, .. } => (left.as_ref(), right.as_ref()),
            // the walk resets to the root right after emitting a leaf
            HuffmanNode::Leaf { .. } => unreachable!("walk rested on a leaf"),
        };
        current = match bit {
            '0' => left,
            '1' => right,
            other => return Err(HuffmanError::InvalidBit(other)),
        };
        if let HuffmanNode::Leaf { symbol, .. } = current {
            text.push(*symbol);
            current = root;
        }
    }

    if !std::ptr::eq(current, root) {
        return Err(HuffmanError::MisalignedCode);
    }
    Ok(text)
}
