//! Red-black tree core: node arena, insertion, rotation, and fixup.
//!
//! Structure:
//! - Nodes live in a `Vec` arena and refer to each other by `u32` index
//! - `NIL` (u32::MAX) marks an absent child or parent; absent children
//!   count as black for the balancing invariants
//! - The parent link is a plain index, so there are no ownership cycles
//!   and no raw pointers anywhere in the crate
//!
//! Operations:
//! - insert: O(log n) - BST placement followed by the recolor/rotate fixup
//! - find / contains: O(log n) - three-way comparison descent
//! - min / max: O(log n) - leftmost / rightmost descent
//! - len / is_empty: O(1) - stored counter
//! - height: O(n) - longest root-to-leaf path, used by the height bound
//!
//! Values are compared with `Ord`; equal values are routed to the right
//! subtree, so duplicates are permitted and land in a consistent place.
//! This core never removes nodes, so the arena has no free list.

use core::cmp::Ordering;

/// Index into the node arena.
pub(crate) type NodeId = u32;

/// Sentinel value for no parent / no child.
pub(crate) const NIL: NodeId = u32::MAX;

/// The color of a node. Absent children are treated as `Black` by
/// [`RbTree::color_of`] rather than by a null-check convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// A single tree node. Pure data: all behavior lives on [`RbTree`].
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    /// The stored value. Never mutated after insertion.
    pub(crate) value: T,
    /// Balancing color.
    pub(crate) color: Color,
    /// Left child index (NIL for none).
    pub(crate) left: NodeId,
    /// Right child index (NIL for none).
    pub(crate) right: NodeId,
    /// Parent index (NIL only for the root).
    pub(crate) parent: NodeId,
}

impl<T> Node<T> {
    fn new(value: T) -> Node<T> {
        return Node {
            value,
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent: NIL,
        };
    }
}

/// Error returned when `min` or `max` is asked of a tree with no nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyTree;

/// An ordered container backed by a red-black tree.
///
/// Values are kept in `Ord` order; insertion and search are O(log n) and
/// the in-order iterator yields a sorted sequence. Duplicates are allowed.
pub struct RbTree<T> {
    /// Node arena. Nodes are never removed, so indices stay stable.
    pub(crate) nodes: Vec<Node<T>>,
    /// Root index (NIL when the tree is empty).
    pub(crate) root: NodeId,
    /// Number of values stored, duplicates included.
    len: usize,
}

impl<T: Ord> RbTree<T> {
    /// Create a new empty tree.
    pub fn new() -> RbTree<T> {
        return RbTree {
            nodes: Vec::new(),
            root: NIL,
            len: 0,
        };
    }

    /// Number of values stored, duplicates included.
    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.len;
    }

    /// Return true if the tree has no values.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Push a fresh red node into the arena and return its index.
    fn alloc(&mut self, value: T) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(Node::new(value));
        return id;
    }

    /// Color of a node, with absent nodes counting as black.
    #[inline(always)]
    pub(crate) fn color_of(&self, id: NodeId) -> Color {
        if id == NIL {
            return Color::Black;
        }
        return self.nodes[id as usize].color;
    }

    #[inline(always)]
    pub(crate) fn root_id(&self) -> NodeId {
        return self.root;
    }

    #[inline(always)]
    pub(crate) fn left_of(&self, id: NodeId) -> NodeId {
        return self.nodes[id as usize].left;
    }

    #[inline(always)]
    pub(crate) fn right_of(&self, id: NodeId) -> NodeId {
        return self.nodes[id as usize].right;
    }

    #[inline(always)]
    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        return self.nodes[id as usize].parent;
    }

    #[inline(always)]
    pub(crate) fn value_at(&self, id: NodeId) -> &T {
        return &self.nodes[id as usize].value;
    }

    /// Insert a value, keeping the tree ordered and balanced.
    ///
    /// Duplicates are routed to the right subtree, so inserting an equal
    /// value grows the tree rather than replacing anything.
    ///
    /// ```
    /// use redwood::tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(20);
    /// tree.insert(10);
    /// tree.insert(30);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.find(&10), Some(&10));
    /// ```
    pub fn insert(&mut self, value: T) {
        let id = self.alloc(value);
        self.len += 1;

        if self.root == NIL {
            // A single black node satisfies every invariant on its own.
            self.root = id;
            self.nodes[id as usize].color = Color::Black;
            return;
        }

        // Standard BST descent. Equal values never stop the walk: they
        // take the right branch like any greater value would.
        let mut cur = self.root;
        loop {
            let ord = self.nodes[id as usize]
                .value
                .cmp(&self.nodes[cur as usize].value);
            let next = match ord {
                Ordering::Less => self.nodes[cur as usize].left,
                Ordering::Equal | Ordering::Greater => self.nodes[cur as usize].right,
            };
            if next == NIL {
                self.nodes[id as usize].parent = cur;
                match ord {
                    Ordering::Less => self.nodes[cur as usize].left = id,
                    Ordering::Equal | Ordering::Greater => self.nodes[cur as usize].right = id,
                }
                break;
            }
            cur = next;
        }

        self.insert_fixup(id);
    }

    /// Restore the red-black invariants after attaching the red node `z`.
    ///
    /// Each iteration either resolves the violation with at most two
    /// rotations, or (red-uncle case) moves it two levels up, so the loop
    /// runs O(height) times with constant stack.
    fn insert_fixup(&mut self, mut z: NodeId) {
        while z != self.root && self.color_of(self.nodes[z as usize].parent) == Color::Red {
            let p = self.nodes[z as usize].parent;
            let g = self.nodes[p as usize].parent;
            // A red parent is never the root, so the grandparent exists.
            debug_assert!(g != NIL);

            if p == self.nodes[g as usize].left {
                let uncle = self.nodes[g as usize].right;
                if self.color_of(uncle) == Color::Red {
                    // Red uncle: recolor and push the violation upward.
                    self.nodes[p as usize].color = Color::Black;
                    self.nodes[uncle as usize].color = Color::Black;
                    self.nodes[g as usize].color = Color::Red;
                    z = g;
                } else {
                    if z == self.nodes[p as usize].right {
                        // Left-right triangle: rotate into a left-left line.
                        z = p;
                        self.rotate_left(z);
                    }
                    // Left-left line: one rotation plus a color swap ends it.
                    let p = self.nodes[z as usize].parent;
                    let g = self.nodes[p as usize].parent;
                    self.nodes[p as usize].color = Color::Black;
                    self.nodes[g as usize].color = Color::Red;
                    self.rotate_right(g);
                }
            } else {
                // Mirror image: parent hangs off the grandparent's right.
                let uncle = self.nodes[g as usize].left;
                if self.color_of(uncle) == Color::Red {
                    self.nodes[p as usize].color = Color::Black;
                    self.nodes[uncle as usize].color = Color::Black;
                    self.nodes[g as usize].color = Color::Red;
                    z = g;
                } else {
                    if z == self.nodes[p as usize].left {
                        z = p;
                        self.rotate_right(z);
                    }
                    let p = self.nodes[z as usize].parent;
                    let g = self.nodes[p as usize].parent;
                    self.nodes[p as usize].color = Color::Black;
                    self.nodes[g as usize].color = Color::Red;
                    self.rotate_left(g);
                }
            }
        }
        // The root is always black.
        self.nodes[self.root as usize].color = Color::Black;
    }

    /// Pivot the subtree rooted at `x` to the left. Requires `x.right`.
    ///
    /// The right child takes `x`'s place (updating the parent's child slot,
    /// or the tree root when `x` was the root), `x` becomes its left child,
    /// and the displaced middle subtree moves under `x`. In-order sequence
    /// is preserved.
    fn rotate_left(&mut self, x: NodeId) {
        let y = self.nodes[x as usize].right;
        debug_assert!(y != NIL);

        let middle = self.nodes[y as usize].left;
        self.nodes[x as usize].right = middle;
        if middle != NIL {
            self.nodes[middle as usize].parent = x;
        }

        let parent = self.nodes[x as usize].parent;
        self.nodes[y as usize].parent = parent;
        if parent == NIL {
            self.root = y;
        } else if self.nodes[parent as usize].left == x {
            self.nodes[parent as usize].left = y;
        } else {
            self.nodes[parent as usize].right = y;
        }

        self.nodes[y as usize].left = x;
        self.nodes[x as usize].parent = y;
    }

    /// Pivot the subtree rooted at `x` to the right. Requires `x.left`.
    /// Mirror of [`Self::rotate_left`].
    fn rotate_right(&mut self, x: NodeId) {
        let y = self.nodes[x as usize].left;
        debug_assert!(y != NIL);

        let middle = self.nodes[y as usize].right;
        self.nodes[x as usize].left = middle;
        if middle != NIL {
            self.nodes[middle as usize].parent = x;
        }

        let parent = self.nodes[x as usize].parent;
        self.nodes[y as usize].parent = parent;
        if parent == NIL {
            self.root = y;
        } else if self.nodes[parent as usize].left == x {
            self.nodes[parent as usize].left = y;
        } else {
            self.nodes[parent as usize].right = y;
        }

        self.nodes[y as usize].right = x;
        self.nodes[x as usize].parent = y;
    }

    /// Look up a value. Returns the stored value, or `None` if no equal
    /// value was ever inserted.
    pub fn find(&self, value: &T) -> Option<&T> {
        let mut cur = self.root;
        while cur != NIL {
            let node = &self.nodes[cur as usize];
            match value.cmp(&node.value) {
                Ordering::Less => cur = node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => cur = node.right,
            }
        }
        return None;
    }

    /// Return true if an equal value is stored in the tree.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        return self.find(value).is_some();
    }

    /// The smallest stored value, or `Err(EmptyTree)` on an empty tree.
    pub fn min(&self) -> Result<&T, EmptyTree> {
        if self.root == NIL {
            return Err(EmptyTree);
        }
        let mut cur = self.root;
        loop {
            let left = self.nodes[cur as usize].left;
            if left == NIL {
                return Ok(&self.nodes[cur as usize].value);
            }
            cur = left;
        }
    }

    /// The largest stored value, or `Err(EmptyTree)` on an empty tree.
    pub fn max(&self) -> Result<&T, EmptyTree> {
        if self.root == NIL {
            return Err(EmptyTree);
        }
        let mut cur = self.root;
        loop {
            let right = self.nodes[cur as usize].right;
            if right == NIL {
                return Ok(&self.nodes[cur as usize].value);
            }
            cur = right;
        }
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    ///
    /// The balancing invariants bound this by 2 * log2(n + 1).
    pub fn height(&self) -> usize {
        return self.height_of(self.root);
    }

    fn height_of(&self, id: NodeId) -> usize {
        if id == NIL {
            return 0;
        }
        let node = &self.nodes[id as usize];
        let left = self.height_of(node.left);
        let right = self.height_of(node.right);
        return 1 + left.max(right);
    }
}

impl<T: Ord> Default for RbTree<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Ord> FromIterator<T> for RbTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RbTree::new();
        tree.extend(iter);
        return tree;
    }
}

impl<T: Ord> Extend<T> for RbTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
