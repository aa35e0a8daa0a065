//! Huffman tree construction.
//!
//! Builds an optimal prefix-free code over the 257-symbol alphabet from a
//! frequency table, by repeatedly merging the two lowest-weight nodes
//! through a [`PriorityQueue`](crate::pqueue::PriorityQueue).
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT.
//! It was the first practical algorithm for constructing optimal prefix
//! codes: the resulting tree minimizes $\sum_s f_s \cdot d_s$, the total
//! weighted path length over all symbols.
//!
//! # Implementation Notes
//!
//! Nodes live in an owning arena (`Vec<Node>`) addressed by [`NodeId`];
//! parent and child links are indices, never pointers. Leaves keep parent
//! links so code lengths fall out of a root-ward walk, and internal nodes
//! keep explicit left/right children so full bit paths can be
//! reconstructed for a downstream packer.
//!
//! Construction is deterministic: queue entries carry an insertion
//! sequence number, and ties in weight resolve by that sequence. Leaves
//! are seeded in ascending symbol order, so equal-weight symbols merge
//! lowest-symbol-first and two builds of the same table are identical.

use crate::freq::{FrequencyTable, ALPHABET_SIZE, EOS_SYMBOL};
use crate::pqueue::PriorityQueue;

/// Bit value assigned to a left-child edge.
pub const LEFT_BIT: u8 = 0;
/// Bit value assigned to a right-child edge.
pub const RIGHT_BIT: u8 = 1;

/// Index of a node in a [`HuffmanTree`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a tree node is: a symbol leaf, a structural padding leaf, or an
/// internal merge node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A leaf carrying one alphabet symbol (0–255 byte value, or
    /// [`EOS_SYMBOL`]).
    Leaf {
        /// The symbol this leaf encodes.
        symbol: u16,
    },
    /// A zero-weight leaf with no symbol, created only by the single-leaf
    /// policy so the lone real leaf never ends up with a zero-length code.
    /// No code is ever emitted for it.
    Padding,
    /// A merge node whose weight is the sum of its two children's weights.
    Internal {
        /// Lower-weight child of the merge; its edge carries [`LEFT_BIT`].
        left: NodeId,
        /// Higher-weight child of the merge; its edge carries [`RIGHT_BIT`].
        right: NodeId,
    },
}

/// One node of a built tree. Immutable once construction completes.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    weight: u64,
    parent: Option<NodeId>,
    kind: NodeKind,
}

impl Node {
    /// The node's weight: its symbol's frequency for a leaf, the sum of
    /// its children's weights for an internal node.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// The node's parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The node's kind and links.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

/// A queue entry during construction: weight first, then insertion
/// sequence for deterministic tie-breaking.
struct PendingNode {
    weight: u64,
    seq: u32,
    id: NodeId,
}

/// An immutable Huffman tree over the 257-symbol alphabet.
///
/// Every symbol present in the input, plus the end-of-stream sentinel
/// unconditionally, owns exactly one leaf. The tree is strictly binary:
/// every internal node has exactly two children.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
    leaves: [Option<NodeId>; ALPHABET_SIZE],
}

impl HuffmanTree {
    /// Build a tree from a fully populated frequency table.
    ///
    /// Seeds one leaf per nonzero-count symbol plus the sentinel
    /// regardless of its count, then merges the two lowest-weight nodes
    /// until one root remains. Performs exactly `leaves - 1` merges.
    ///
    /// If only the sentinel participates (empty input), the lone leaf is
    /// wrapped under one synthetic internal node with a zero-weight
    /// padding twin, forcing its code length to 1.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Self {
        let mut nodes: Vec<Node> = Vec::new();
        let mut leaves = [None; ALPHABET_SIZE];
        let mut queue = PriorityQueue::new(|a: &PendingNode, b: &PendingNode| {
            (a.weight, a.seq).cmp(&(b.weight, b.seq))
        });
        let mut seq = 0u32;

        for symbol in 0..ALPHABET_SIZE as u16 {
            let weight = freqs.get(symbol);
            if weight == 0 && symbol != EOS_SYMBOL {
                continue;
            }
            let id = alloc(&mut nodes, weight, NodeKind::Leaf { symbol });
            leaves[symbol as usize] = Some(id);
            queue.push(PendingNode { weight, seq, id });
            seq += 1;
        }

        // Single participating symbol: a bare leaf root would assign a
        // zero-length code, which no bitstream can carry. Wrap it.
        if queue.len() == 1 {
            let only = queue.pop_min();
            let pad = alloc(&mut nodes, 0, NodeKind::Padding);
            let root = alloc(
                &mut nodes,
                only.weight,
                NodeKind::Internal {
                    left: only.id,
                    right: pad,
                },
            );
            nodes[only.id.index()].parent = Some(root);
            nodes[pad.index()].parent = Some(root);
            return Self { nodes, root, leaves };
        }

        while queue.len() > 1 {
            let first = queue.pop_min();
            let second = queue.pop_min();
            let weight = first.weight + second.weight;
            let id = alloc(
                &mut nodes,
                weight,
                NodeKind::Internal {
                    left: first.id,
                    right: second.id,
                },
            );
            nodes[first.id.index()].parent = Some(id);
            nodes[second.id.index()].parent = Some(id);
            queue.push(PendingNode { weight, seq, id });
            seq += 1;
        }

        let root = queue.pop_min().id;
        Self { nodes, root, leaves }
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrow a node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// The leaf carrying `symbol`, or `None` if the symbol was absent
    /// from the input (never `None` for the sentinel).
    ///
    /// This is the packer-facing mapping: from the leaf, the full
    /// root-to-leaf path is reconstructible via parent and child links.
    pub fn leaf(&self, symbol: u16) -> Option<NodeId> {
        self.leaves[symbol as usize]
    }

    /// Code length in bits for `symbol`: the number of parent links
    /// between its leaf and the root. `None` for absent symbols.
    /// Always at least 1 for present symbols.
    pub fn code_len(&self, symbol: u16) -> Option<usize> {
        let mut id = self.leaf(symbol)?;
        let mut hops = 0;
        while let Some(parent) = self.nodes[id.index()].parent {
            id = parent;
            hops += 1;
        }
        Some(hops)
    }

    /// Root-to-leaf bit path for `symbol`, one bit per element:
    /// [`LEFT_BIT`] for each left edge, [`RIGHT_BIT`] for each right
    /// edge, ordered root-first. `None` for absent symbols.
    pub fn code(&self, symbol: u16) -> Option<Vec<u8>> {
        let mut id = self.leaf(symbol)?;
        let mut bits = Vec::new();
        while let Some(parent) = self.nodes[id.index()].parent {
            match self.nodes[parent.index()].kind {
                NodeKind::Internal { left, .. } => {
                    bits.push(if id == left { LEFT_BIT } else { RIGHT_BIT });
                }
                _ => unreachable!("parent of a tree node is always internal"),
            }
            id = parent;
        }
        bits.reverse();
        Some(bits)
    }

    /// Bit paths for all 257 symbols, indexed by symbol value; `None`
    /// entries mark absent symbols. The complete contract toward the
    /// external bit packer.
    pub fn code_table(&self) -> Vec<Option<Vec<u8>>> {
        (0..ALPHABET_SIZE as u16).map(|s| self.code(s)).collect()
    }

    /// Number of symbol leaves in the tree (padding excluded).
    pub fn leaf_count(&self) -> usize {
        self.leaves.iter().filter(|l| l.is_some()).count()
    }

    /// Total number of nodes in the arena, internal and padding included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total weighted path length: $\sum_s f_s \cdot d_s$ over present
    /// symbols. The quantity Huffman construction minimizes.
    pub fn weighted_path_length(&self) -> u64 {
        (0..ALPHABET_SIZE as u16)
            .filter_map(|s| {
                let id = self.leaf(s)?;
                let depth = self.code_len(s)? as u64;
                Some(self.nodes[id.index()].weight * depth)
            })
            .sum()
    }
}

fn alloc(nodes: &mut Vec<Node>, weight: u64, kind: NodeKind) -> NodeId {
    let id = NodeId(nodes.len() as u32);
    nodes.push(Node {
        weight,
        parent: None,
        kind,
    });
    id
}
