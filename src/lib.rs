//! # Huffman prefix-code construction
//!
//! *Optimal bit-length assignment over a byte alphabet, driven by a
//! generic binary min-heap.*
//!
//! ## Intuition First
//!
//! Imagine paying for a telegram by the bit. Characters you send often
//! should get short codewords; characters you rarely send can afford long
//! ones. Huffman's algorithm finds the cheapest possible such assignment:
//! it keeps gluing together the two rarest things into one bundle until a
//! single tree remains, and each symbol's depth in that tree is its
//! codeword length.
//!
//! ## The Problem
//!
//! A variable-length code is only decodable if no codeword is a prefix of
//! another. Prefix-free codes are exactly the leaves of a binary tree, so
//! the question becomes: which tree shape minimizes
//! $\sum_s f_s \cdot d_s$, the total weighted path length, for observed
//! frequencies $f_s$?
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon    Entropy as the fundamental limit
//! 1949  Fano       Top-down splitting: close, but not optimal
//! 1952  Huffman    Bottom-up merging: provably optimal prefix codes
//! 1976  Gallager   Sibling property, adaptive variants
//! 1985  Knuth      Dynamic Huffman coding
//! ```
//!
//! Huffman's insight was to build the tree bottom-up: the two least
//! frequent symbols must be siblings at maximum depth in some optimal
//! tree, so merge them and recurse on the smaller problem.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n \log n)$ for $n$ participating symbols — $2(n-1)$
//!   heap extractions and $n-1$ insertions at $O(\log n)$ each.
//! - **Space**: $O(n)$ — the node arena holds exactly $2n - 1$ nodes.
//!
//! ## Failure Modes
//!
//! 1. **Zero-length codes**: a one-symbol alphabet would make the root
//!    itself the only leaf. The builder wraps such a leaf so every code
//!    is at least one bit (see [`tree::HuffmanTree::from_frequencies`]).
//! 2. **Tie-order drift**: equal weights can merge in either order and
//!    still be optimal. This crate fixes the order (symbol value, then
//!    node creation order) so builds are reproducible bit for bit.
//!
//! ## Implementation Notes
//!
//! The alphabet has 257 symbols: byte values 0–255 plus a reserved
//! end-of-stream sentinel that always receives a code, guaranteeing every
//! encoded stream a terminator. This crate produces the tree, per-symbol
//! code lengths, and root-to-leaf bit paths; packing bits into an output
//! stream (and any container framing) is a downstream concern.
//!
//! ```rust
//! use huffcode::{FrequencyTable, HuffmanTree, EOS_SYMBOL};
//!
//! let freqs = FrequencyTable::count_bytes(b"abracadabra");
//! let tree = HuffmanTree::from_frequencies(&freqs);
//!
//! // 'a' dominates, so it gets the shortest code.
//! let a = tree.code_len(b'a' as u16).unwrap();
//! assert!(a <= tree.code_len(b'c' as u16).unwrap());
//!
//! // The sentinel is always coded, even at frequency zero.
//! assert!(tree.code_len(EOS_SYMBOL).unwrap() >= 1);
//! ```
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."
//! - Knuth, D. (1997). *The Art of Computer Programming*, Vol. 1, §2.3.4.5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod freq;
pub mod pqueue;
pub mod report;
pub mod tree;

pub use error::Error;
pub use freq::{FrequencyTable, ALPHABET_SIZE, EOS_SYMBOL};
pub use pqueue::PriorityQueue;
pub use report::{report, SymbolReport};
pub use tree::{HuffmanTree, NodeId, NodeKind};
