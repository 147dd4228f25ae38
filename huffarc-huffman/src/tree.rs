//! Huffman tree construction and shape serialization.
//!
//! Trees are strict binary trees: every internal node has exactly two
//! children, so every leaf's root-to-leaf path is a genuine prefix code.
//!
//! # Tie-break contract
//!
//! Construction uses a min-heap keyed by `(weight, creation order)`.
//! Leaves are seeded in ascending symbol order, and merged nodes are
//! created after all leaves, so among equal weights the heap always
//! yields the earliest-created node first; the first node extracted
//! becomes the left child. This makes tree shape and code lengths fully
//! deterministic and part of the format contract - re-encoding the same
//! input always produces an identical archive.
//!
//! # Shape serialization
//!
//! Pre-order traversal, one bit per node: `0` for an internal node
//! (followed by its left then right subtree), `1` for a leaf (followed
//! by the 8-bit symbol). The shape alone reconstructs topology and
//! symbol assignment at decode time; weights are not stored.

use crate::freq::FrequencyTable;
use huffarc_core::bitstream::{BitReader, BitWriter};
use huffarc_core::error::{HuffArcError, Result};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Deepest tree accepted when deserializing (256 leaves can never need more).
const MAX_TREE_DEPTH: usize = 256;

/// A node of a Huffman tree, owned exclusively by its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// Terminal node carrying a symbol.
    Leaf {
        /// The byte symbol this leaf encodes.
        symbol: u8,
        /// Occurrence count (zero for deserialized or synthetic leaves).
        weight: u64,
    },
    /// Binary branch; weight is the sum of both children.
    Internal {
        /// Left subtree (bit 0).
        left: Box<HuffmanNode>,
        /// Right subtree (bit 1).
        right: Box<HuffmanNode>,
        /// Combined weight of the subtree.
        weight: u64,
    },
}

impl HuffmanNode {
    /// Weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// Heap entry ordered by `(weight, seq)`; `seq` is node creation order.
struct HeapEntry {
    weight: u64,
    seq: u32,
    node: HuffmanNode,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap acts as a min-heap
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

/// A complete Huffman prefix-code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Build a tree from a frequency table.
    ///
    /// Fails with [`HuffArcError::EmptyAlphabet`] if the table has no
    /// non-zero counts. A single-symbol alphabet gets a synthetic,
    /// never-emitted sibling leaf so the real symbol still receives a
    /// 1-bit code.
    pub fn from_frequencies(table: &FrequencyTable) -> Result<Self> {
        if table.is_empty() {
            return Err(HuffArcError::EmptyAlphabet);
        }

        let mut seq = 0u32;
        let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::with_capacity(table.distinct());

        for (symbol, weight) in table.iter() {
            heap.push(HeapEntry {
                weight,
                seq,
                node: HuffmanNode::Leaf { symbol, weight },
            });
            seq += 1;
        }

        if heap.len() == 1 {
            let only = heap.pop().expect("heap has one entry");
            let HuffmanNode::Leaf { symbol, weight } = only.node else {
                unreachable!("seeded heap holds only leaves");
            };
            return Ok(Self {
                root: HuffmanNode::Internal {
                    left: Box::new(HuffmanNode::Leaf { symbol, weight }),
                    right: Box::new(HuffmanNode::Leaf {
                        symbol: symbol.wrapping_add(1),
                        weight: 0,
                    }),
                    weight,
                },
            });
        }

        while heap.len() > 1 {
            let first = heap.pop().expect("heap len checked");
            let second = heap.pop().expect("heap len checked");
            let weight = first.weight + second.weight;
            heap.push(HeapEntry {
                weight,
                seq,
                node: HuffmanNode::Internal {
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                    weight,
                },
            });
            seq += 1;
        }

        let root = heap.pop().expect("one node remains").node;
        Ok(Self { root })
    }

    /// The root node.
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Number of leaves (distinct symbols, plus the synthetic one if any).
    pub fn leaf_count(&self) -> usize {
        fn count(node: &HuffmanNode) -> usize {
            match node {
                HuffmanNode::Leaf { .. } => 1,
                HuffmanNode::Internal { left, right, .. } => count(left) + count(right),
            }
        }
        count(&self.root)
    }

    /// Serialize the tree shape into `writer`.
    pub fn write_shape(&self, writer: &mut BitWriter) {
        fn write_node(node: &HuffmanNode, writer: &mut BitWriter) {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    writer.write_bit(true);
                    writer.write_bits(u32::from(*symbol), 8);
                }
                HuffmanNode::Internal { left, right, .. } => {
                    writer.write_bit(false);
                    write_node(left, writer);
                    write_node(right, writer);
                }
            }
        }
        write_node(&self.root, writer);
    }

    /// Serialize the tree shape to `(bytes, bit_count)`.
    pub fn to_bits(&self) -> (Vec<u8>, u64) {
        let mut writer = BitWriter::new();
        self.write_shape(&mut writer);
        writer.finish()
    }

    /// Reconstruct a tree from its serialized shape.
    ///
    /// Rejects a bare-leaf root (the encoder never produces one), overly
    /// deep structures, and trailing bits beyond the tree description.
    /// Running out of bits mid-structure is a format error.
    pub fn from_bits(data: &[u8], bit_len: u64) -> Result<Self> {
        fn read_node(reader: &mut BitReader<'_>, depth: usize) -> Result<HuffmanNode> {
            if depth > MAX_TREE_DEPTH {
                return Err(HuffArcError::invalid_tree("tree too deep"));
            }
            if reader.read_bit()? {
                let symbol = reader.read_bits(8)? as u8;
                Ok(HuffmanNode::Leaf { symbol, weight: 0 })
            } else {
                let left = Box::new(read_node(reader, depth + 1)?);
                let right = Box::new(read_node(reader, depth + 1)?);
                Ok(HuffmanNode::Internal {
                    left,
                    right,
                    weight: 0,
                })
            }
        }

        let mut reader = BitReader::new(data, bit_len);
        let root = read_node(&mut reader, 0)?;

        if root.is_leaf() {
            return Err(HuffArcError::invalid_tree("root must be an internal node"));
        }
        if !reader.is_exhausted() {
            return Err(HuffArcError::invalid_tree(
                "trailing bits after tree description",
            ));
        }

        Ok(Self { root })
    }
}
