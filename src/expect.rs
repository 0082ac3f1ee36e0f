//! Structural validators, they only look at the kind and size of a node, never its contents.
use crate::*;

fn expect_kind(node: &Node, expected: NodeKind) -> ConvertResult<()> {
    if node.kind() == expected {
        Ok(())
    } else {
        Err(ConvertError::kind_mismatch(expected, node))
    }
}

fn expect_len(node: &Node, expected: NodeKind, size: usize) -> ConvertResult<()> {
    expect_kind(node, expected)?;
    if node.len() == size {
        Ok(())
    } else {
        Err(ConvertError::size_mismatch(size, node.len()))
    }
}

/// Require a map node.
///
/// ```
/// use yaml_param::{expect_map, node};
/// assert!(expect_map(&node!({"a" => 1})).is_ok());
/// assert!(expect_map(&node!([1])).is_err());
/// ```
pub fn expect_map(node: &Node) -> ConvertResult<()> {
    expect_kind(node, NodeKind::Map)
}

/// Require a map node with exactly `size` entries.
pub fn expect_map_len(node: &Node, size: usize) -> ConvertResult<()> {
    expect_len(node, NodeKind::Map, size)
}

/// Require a sequence node.
pub fn expect_seq(node: &Node) -> ConvertResult<()> {
    expect_kind(node, NodeKind::Sequence)
}

/// Require a sequence node with exactly `size` elements.
///
/// ```
/// use yaml_param::{expect_seq_len, node};
/// let err = expect_seq_len(&node!([1, 2, 3]), 4).unwrap_err();
/// assert_eq!(err.message(), "wrong number of elements, expected 4, got 3");
/// ```
pub fn expect_seq_len(node: &Node, size: usize) -> ConvertResult<()> {
    expect_len(node, NodeKind::Sequence, size)
}

/// Require a scalar node.
pub fn expect_scalar(node: &Node) -> ConvertResult<()> {
    expect_kind(node, NodeKind::Scalar)
}
