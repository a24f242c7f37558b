//! Redwood - an ordered container backed by a red-black tree.
//!
//! Values are kept sorted under `Ord` by a self-balancing binary search
//! tree, giving O(log n) insertion and lookup and in-order iteration
//! without probabilistic balancing. Duplicates are allowed and always
//! routed to the right subtree.
//!
//! # Quick Start
//!
//! ```
//! use redwood::tree::RbTree;
//!
//! let mut tree = RbTree::new();
//!
//! tree.insert(30);
//! tree.insert(10);
//! tree.insert(20);
//!
//! assert_eq!(tree.min(), Ok(&10));
//! assert_eq!(tree.max(), Ok(&30));
//!
//! let sorted: Vec<u32> = tree.in_order().copied().collect();
//! assert_eq!(sorted, vec![10, 20, 30]);
//! ```

pub mod check;
pub mod traverse;
pub mod tree;
