use crate::tree::HuffmanTree;

/// renders the tree shape as indented text, one node per line: the edge
/// bit that leads to the node, then its displayable label
///
/// ```text
/// 5
///   0 -> 2 b
///   1 -> 3 a
/// ```
pub fn render_to<W: core::fmt::Write>(
    tree: &HuffmanTree,
    output: &mut W,
) -> core::fmt::Result {
    let mut result = Ok(());
    tree.walk(&mut |node, path, depth| {
        if result.is_err() {
            return;
        }
        result = match path.chars().last() {
            Some(edge) => writeln!(
                output,
                "{}{} -> {}",
                "  ".repeat(depth),
                edge,
                node.label()
            ),
            None => writeln!(output, "{}", node.label()),
        };
    });
    result
}
