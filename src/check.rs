//! Structural audit of the red-black invariants.
//!
//! Used by the test suites to verify a tree after arbitrary insertion
//! sequences. [`audit`] walks the whole structure and either returns its
//! black-height or names the first broken invariant. [`colored_pre_order`]
//! snapshots values with their colors so tests can assert exact shapes.

use crate::tree::{Color, NIL, NodeId, RbTree};

/// A broken red-black invariant, reported by [`audit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The root node is red.
    RedRoot,
    /// A red node has a red child.
    RedRedEdge,
    /// Two paths to absent children cross different black counts.
    BlackHeightMismatch,
    /// In-order traversal produced a decreasing pair.
    OutOfOrder,
    /// A child's parent link does not point back at the child's parent.
    BadParentLink,
}

/// Verify every red-black invariant and return the tree's black-height
/// (the black count from the root to any absent child, root excluded).
/// An empty tree audits cleanly with black-height 0.
pub fn audit<T: Ord>(tree: &RbTree<T>) -> Result<usize, Violation> {
    if tree.root_id() == NIL {
        return Ok(0);
    }
    if tree.color_of(tree.root_id()) == Color::Red {
        return Err(Violation::RedRoot);
    }

    let black_height = audit_node(tree, tree.root_id(), NIL)?;

    // Sortedness is a property of the whole traversal, checked flat.
    let mut prev: Option<&T> = None;
    for value in tree.in_order() {
        if let Some(prev) = prev {
            if prev > value {
                return Err(Violation::OutOfOrder);
            }
        }
        prev = Some(value);
    }

    // The root counts toward neither path, matching the usual definition.
    return Ok(black_height - 1);
}

/// Recursive audit of one subtree. Returns the number of black nodes on
/// any path from `id` to an absent child, including `id` itself.
fn audit_node<T: Ord>(
    tree: &RbTree<T>,
    id: NodeId,
    parent: NodeId,
) -> Result<usize, Violation> {
    if id == NIL {
        // Absent children are black and contribute one to every path.
        return Ok(1);
    }

    if tree.parent_of(id) != parent {
        return Err(Violation::BadParentLink);
    }

    let color = tree.color_of(id);
    if color == Color::Red {
        if tree.color_of(tree.left_of(id)) == Color::Red
            || tree.color_of(tree.right_of(id)) == Color::Red
        {
            return Err(Violation::RedRedEdge);
        }
    }

    let left = audit_node(tree, tree.left_of(id), id)?;
    let right = audit_node(tree, tree.right_of(id), id)?;
    if left != right {
        return Err(Violation::BlackHeightMismatch);
    }

    let own = if color == Color::Black { 1 } else { 0 };
    return Ok(left + own);
}

/// Snapshot the tree in pre-order as (value, color) pairs. Deterministic
/// scenario tests use this to pin down exact shapes after rotations.
pub fn colored_pre_order<T: Ord>(tree: &RbTree<T>) -> Vec<(&T, Color)> {
    let mut out = Vec::with_capacity(tree.len());
    collect_pre_order(tree, tree.root_id(), &mut out);
    return out;
}

fn collect_pre_order<'a, T: Ord>(
    tree: &'a RbTree<T>,
    id: NodeId,
    out: &mut Vec<(&'a T, Color)>,
) {
    if id == NIL {
        return;
    }
    out.push((tree.value_at(id), tree.color_of(id)));
    collect_pre_order(tree, tree.left_of(id), out);
    collect_pre_order(tree, tree.right_of(id), out);
}
