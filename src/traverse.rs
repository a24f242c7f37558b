//! Lazy traversal iterators over the tree.
//!
//! All three classical orders are provided. Each iterator borrows the tree,
//! performs no mutation, and is restartable by asking the tree for a fresh
//! one. The explicit stacks are bounded by tree height, so small trees
//! iterate without touching the heap.

use smallvec::SmallVec;

use crate::tree::{NIL, NodeId, RbTree};

/// Inline stack capacity. Height is at most 2 * log2(n + 1), so 32 frames
/// hold any tree up to ~32k nodes; larger trees spill to the heap.
const STACK: usize = 32;

impl<T: Ord> RbTree<T> {
    /// Iterate values in sorted (in-order) order.
    ///
    /// ```
    /// use redwood::tree::RbTree;
    ///
    /// let tree: RbTree<u32> = [30, 10, 20].into_iter().collect();
    /// let sorted: Vec<u32> = tree.in_order().copied().collect();
    /// assert_eq!(sorted, vec![10, 20, 30]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, T> {
        return InOrder {
            tree: self,
            stack: SmallVec::new(),
            cur: self.root_id(),
        };
    }

    /// Iterate values in pre-order (node before its subtrees).
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        let mut stack = SmallVec::new();
        if self.root_id() != NIL {
            stack.push(self.root_id());
        }
        return PreOrder { tree: self, stack };
    }

    /// Iterate values in post-order (subtrees before their node).
    pub fn post_order(&self) -> PostOrder<'_, T> {
        let mut stack = SmallVec::new();
        if self.root_id() != NIL {
            stack.push((self.root_id(), false));
        }
        return PostOrder { tree: self, stack };
    }

    /// Alias for [`Self::in_order`], the conventional iteration order.
    pub fn iter(&self) -> InOrder<'_, T> {
        return self.in_order();
    }
}

impl<'a, T: Ord> IntoIterator for &'a RbTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.in_order();
    }
}

/// Sorted-order iterator. Descends leftmost first, keeping the path of
/// unvisited ancestors on an explicit stack.
pub struct InOrder<'a, T> {
    tree: &'a RbTree<T>,
    /// Ancestors whose own value and right subtree are still pending.
    stack: SmallVec<[NodeId; STACK]>,
    /// Subtree still to be descended into (NIL when none).
    cur: NodeId,
}

impl<'a, T: Ord> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cur != NIL {
            self.stack.push(self.cur);
            self.cur = self.tree.left_of(self.cur);
        }
        let id = self.stack.pop()?;
        self.cur = self.tree.right_of(id);
        return Some(self.tree.value_at(id));
    }
}

/// Pre-order iterator: each node is yielded before either subtree.
pub struct PreOrder<'a, T> {
    tree: &'a RbTree<T>,
    /// Pending subtree roots, right below left so left pops first.
    stack: SmallVec<[NodeId; STACK]>,
}

impl<'a, T: Ord> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let right = self.tree.right_of(id);
        if right != NIL {
            self.stack.push(right);
        }
        let left = self.tree.left_of(id);
        if left != NIL {
            self.stack.push(left);
        }
        return Some(self.tree.value_at(id));
    }
}

/// Post-order iterator: both subtrees are yielded before their node.
/// Each stack frame carries an expanded flag; a node is yielded only the
/// second time it is popped, after its children have been emitted.
pub struct PostOrder<'a, T> {
    tree: &'a RbTree<T>,
    stack: SmallVec<[(NodeId, bool); STACK]>,
}

impl<'a, T: Ord> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, expanded)) = self.stack.pop() {
            if expanded {
                return Some(self.tree.value_at(id));
            }
            self.stack.push((id, true));
            let right = self.tree.right_of(id);
            if right != NIL {
                self.stack.push((right, false));
            }
            let left = self.tree.left_of(id);
            if left != NIL {
                self.stack.push((left, false));
            }
        }
        return None;
    }
}
