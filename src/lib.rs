/*!
huffcode builds a prefix-free binary code for a piece of text using
Huffman's algorithm, encodes text into a bit-string with that code and
decodes it back.

The tree is merged with a min-priority-queue over a fully deterministic
node order (count, leaf-before-internal, symbol, creation sequence), so
building twice from the same input always yields the same tree and the
same code table. A built [`HuffmanTree`] is an immutable snapshot: the
root node, the cached code table and the source text, safe to read from
several threads at once.

```
use huffcode::HuffmanTree;

let tree = HuffmanTree::build("abracadabra")?;
let bits = tree.encode_source()?;
assert_eq!(tree.decode(&bits)?, "abracadabra");

// code table rows in first-occurrence order: a, b, r, c, d
for (symbol, code) in tree.display_table() {
    println!("{}: {}", symbol, code);
}
# Ok::<(), huffcode::HuffmanError>(())
```
*/

pub mod decode;
pub mod encode;
mod error;
pub mod table;
pub mod tree;

use std::collections::BTreeMap;

pub use crate::error::HuffmanError;
pub use crate::table::CodeTable;
pub use crate::tree::HuffmanNode;
pub use crate::tree::HuffmanTree;

/// symbol to occurrence count. Ordered map, so iteration (and with it leaf
/// creation order during the tree build) is deterministic.
pub type FrequencyMap = BTreeMap<char, u32>;

/// creates a map with the counts of each symbol
#[inline]
pub fn count_chars(text: &str) -> FrequencyMap {
    let mut counts = FrequencyMap::new();
    for symbol in text.chars() {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use crate::count_chars;
    use crate::table::check_prefix_property;
    use crate::tree::minimum_tree_depth;
    use crate::tree::HuffmanNode;
    use crate::HuffmanError;
    use crate::HuffmanTree;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// structural checks every built tree must pass
    fn validate_tree(tree: &HuffmanTree) {
        // internal counts are the sums of their children
        fn check_counts(node: &HuffmanNode) {
            if let Some((left, right)) = node.children() {
                assert_eq!(node.count(), left.count() + right.count());
                check_counts(left);
                check_counts(right);
            }
        }
        check_counts(tree.root());

        // one non-empty code per distinct symbol, no symbol repeats
        let freqs = count_chars(tree.source());
        assert_eq!(tree.codes().len(), freqs.len());
        for symbol in freqs.keys() {
            assert!(!tree.codes()[symbol].is_empty());
        }

        check_prefix_property(tree.codes());

        let depth = tree.depth();
        assert!(depth >= minimum_tree_depth(freqs.len()));
        assert!(depth < freqs.len().max(2));
    }

    fn round_trip(text: &str) {
        let tree = HuffmanTree::build(text).unwrap();
        validate_tree(&tree);
        let bits = tree.encode(text).unwrap();
        assert!(bits.chars().all(|bit| bit == '0' || bit == '1'));
        assert_eq!(tree.decode(&bits).unwrap(), text);
        assert_eq!(tree.encode_source().unwrap(), bits);
    }

    #[test]
    fn test_count_chars() {
        let counts = count_chars("abracadabra");
        assert_eq!(counts[&'a'], 5);
        assert_eq!(counts[&'b'], 2);
        assert_eq!(counts[&'r'], 2);
        assert_eq!(counts[&'c'], 1);
        assert_eq!(counts[&'d'], 1);
        assert_eq!(counts.values().sum::<u32>(), 11);
    }

    #[test]
    fn round_trips() {
        init_logging();
        round_trip("aaabb");
        round_trip("abracadabra");
        round_trip("the quick brown fox jumps over the lazy dog");
        round_trip("mississippi");
        round_trip("ab");
        round_trip("a");
    }

    #[test]
    fn round_trips_non_ascii() {
        // every char is one atomic symbol, multi-byte or not
        round_trip("árbol de huffman");
        round_trip("ñandú ñoño");
        round_trip("日本語のテキスト");
    }

    #[test]
    fn round_trips_all_distinct_symbols() {
        let text: String = ('a'..='z').collect();
        round_trip(&text);
    }

    #[test]
    fn round_trips_skewed_distribution() {
        // fibonacci-ish counts produce a maximally deep tree
        let mut text = String::new();
        for (symbol, repeat) in ('a'..='f').zip(&[1_usize, 1, 2, 3, 5, 8]) {
            for _ in 0..*repeat {
                text.push(symbol);
            }
        }
        let tree = HuffmanTree::build(&text).unwrap();
        validate_tree(&tree);
        assert_eq!(tree.depth(), 5);
        round_trip(&text);
    }

    #[test]
    fn single_symbol_input() {
        let tree = HuffmanTree::build("aaaa").unwrap();
        assert_eq!(tree.codes()[&'a'], "0");
        assert!(tree.codes()[&'a'].len() >= 1);
        let bits = tree.encode_source().unwrap();
        assert_eq!(bits, "0000");
        assert_eq!(tree.decode(&bits).unwrap(), "aaaa");
    }

    #[test]
    fn concrete_scenario_aaabb() {
        // {a:3, b:2}: b pops first and takes the 0 branch
        let tree = HuffmanTree::build("aaabb").unwrap();
        assert_eq!(tree.codes()[&'a'], "1");
        assert_eq!(tree.codes()[&'b'], "0");
        let bits = tree.encode("aaabb").unwrap();
        assert_eq!(bits, "11100");
        assert_eq!(tree.decode(&bits).unwrap(), "aaabb");
    }

    #[test]
    fn higher_frequency_never_gets_a_longer_code() {
        let text = "aaaaaaaabbbbccd";
        let tree = HuffmanTree::build(text).unwrap();
        let freqs = count_chars(text);
        for (symbol, code) in tree.codes() {
            for (other, other_code) in tree.codes() {
                if freqs[symbol] > freqs[other] {
                    assert!(
                        code.len() <= other_code.len(),
                        "{:?} ({}x, {}) vs {:?} ({}x, {})",
                        symbol,
                        freqs[symbol],
                        code,
                        other,
                        freqs[other],
                        other_code
                    );
                }
            }
        }
    }

    #[test]
    fn identical_input_builds_identical_tables() {
        let text = "abracadabra abracadabra";
        let first = HuffmanTree::build(text).unwrap();
        for _ in 0..5 {
            let rebuilt = HuffmanTree::build(text).unwrap();
            assert_eq!(rebuilt.codes(), first.codes());
            assert_eq!(rebuilt.display_table(), first.display_table());
        }
    }

    #[test]
    fn display_table_order_and_completeness() {
        let tree = HuffmanTree::build("abracadabra").unwrap();
        let rows = tree.display_table();
        let order: Vec<char> = rows.iter().map(|(symbol, _)| *symbol).collect();
        assert_eq!(order, vec!['a', 'b', 'r', 'c', 'd']);
        for (symbol, code) in rows {
            assert_eq!(&tree.codes()[&symbol], &code);
        }
    }

    #[test]
    fn encoding_other_text_with_the_same_tree() {
        let tree = HuffmanTree::build("abba").unwrap();
        let bits = tree.encode("bb").unwrap();
        assert_eq!(tree.decode(&bits).unwrap(), "bb");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(HuffmanTree::build(""), Err(HuffmanError::EmptyInput));
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let tree = HuffmanTree::build("ab").unwrap();
        assert_eq!(
            tree.encode("ac"),
            Err(HuffmanError::UnknownSymbol('c'))
        );
    }

    #[test]
    fn truncated_bits_are_rejected() {
        let tree = HuffmanTree::build("aabc").unwrap();
        // codes: a = "0", b = "10", c = "11"
        let bits = tree.encode("ac").unwrap();
        assert_eq!(bits, "011");
        assert_eq!(
            tree.decode(&bits[..bits.len() - 1]),
            Err(HuffmanError::MisalignedCode)
        );
    }

    #[test]
    fn error_values_are_inspectable() {
        assert_eq!(HuffmanError::EmptyInput.to_string(), "input is empty");
        assert_eq!(
            HuffmanError::UnknownSymbol('x').to_string(),
            "symbol 'x' is not in the code table"
        );
        assert_eq!(
            HuffmanError::MisalignedCode.to_string(),
            "bit string ends in the middle of a code"
        );
    }

    #[test]
    fn trees_are_shareable_across_threads() {
        use std::sync::Arc;

        let tree = Arc::new(HuffmanTree::build("concurrent reads on one tree").unwrap());
        let bits = tree.encode_source().unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tree = Arc::clone(&tree);
                let bits = bits.clone();
                std::thread::spawn(move || {
                    assert_eq!(tree.decode(&bits).unwrap(), tree.source());
                    assert_eq!(tree.encode_source().unwrap(), bits);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
