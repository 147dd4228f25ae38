//! Tree descriptions for rendering.
//!
//! [`build_tree`] is the visualizer entry point: it takes caller-supplied
//! symbol/frequency pairs and returns a serializable description of the
//! resulting tree plus its code table. It runs the exact same
//! `FrequencyTable -> HuffmanTree -> CodeBook` pipeline as the
//! compressor, so the rendered tree always matches what compression
//! would actually produce, degenerate single-symbol case included.

use crate::codebook::CodeBook;
use crate::freq::FrequencyTable;
use crate::tree::{HuffmanNode, HuffmanTree};
use huffarc_core::error::Result;
use serde::Serialize;

/// One node of a rendered tree: weight, optional leaf symbol, children
/// in left-to-right order (edge labels 0 and 1 are implied by position).
#[derive(Debug, Clone, Serialize)]
pub struct TreeDescription {
    /// Subtree weight (occurrence count).
    pub weight: u64,
    /// Leaf symbol, absent for internal nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<u8>,
    /// Child descriptions; empty for leaves.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeDescription>,
}

impl TreeDescription {
    fn from_node(node: &HuffmanNode) -> Self {
        match node {
            HuffmanNode::Leaf { symbol, weight } => Self {
                weight: *weight,
                symbol: Some(*symbol),
                children: Vec::new(),
            },
            HuffmanNode::Internal {
                left,
                right,
                weight,
            } => Self {
                weight: *weight,
                symbol: None,
                children: vec![Self::from_node(left), Self::from_node(right)],
            },
        }
    }
}

/// A code table row for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolCode {
    /// The byte symbol.
    pub symbol: u8,
    /// Its code as a string of '0'/'1' characters.
    pub code: String,
}

/// Build a tree description and code table from frequency pairs.
///
/// Duplicate symbols and an all-zero alphabet are caller input errors.
/// The code table lists only the supplied symbols; the synthetic leaf
/// of the degenerate single-symbol case appears in the tree description
/// (it is part of the real tree shape) but never in the code table.
pub fn build_tree(pairs: &[(u8, u64)]) -> Result<(TreeDescription, Vec<SymbolCode>)> {
    let table = FrequencyTable::from_pairs(pairs)?;
    let tree = HuffmanTree::from_frequencies(&table)?;
    let book = CodeBook::from_tree(&tree)?;

    let codes = book
        .iter()
        .filter(|(symbol, _)| table.count(*symbol) > 0)
        .map(|(symbol, code)| SymbolCode {
            symbol,
            code: code.to_string(),
        })
        .collect();

    Ok((TreeDescription::from_node(tree.root()), codes))
}
