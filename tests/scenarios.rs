//! Deterministic end-to-end scenarios for the public API.

use redwood::check::{audit, colored_pre_order};
use redwood::tree::{Color, EmptyTree, RbTree};

// =============================================================================
// Concrete insertion scenarios
// =============================================================================

#[test]
fn single_value_becomes_black_root() {
    let mut tree = RbTree::new();
    tree.insert(10);

    assert_eq!(tree.len(), 1);
    assert_eq!(colored_pre_order(&tree), vec![(&10, Color::Black)]);
    assert!(audit(&tree).is_ok());
}

#[test]
fn two_values_hang_red_under_black_root() {
    let mut tree = RbTree::new();
    tree.insert(10);
    tree.insert(20);

    assert_eq!(
        colored_pre_order(&tree),
        vec![(&10, Color::Black), (&20, Color::Red)]
    );
    assert!(audit(&tree).is_ok());
}

#[test]
fn ascending_line_promotes_middle_value() {
    let mut tree = RbTree::new();
    tree.insert(10);
    tree.insert(20);
    tree.insert(30);

    assert_eq!(
        colored_pre_order(&tree),
        vec![(&20, Color::Black), (&10, Color::Red), (&30, Color::Red)]
    );
    let sorted: Vec<u32> = tree.in_order().copied().collect();
    assert_eq!(sorted, vec![10, 20, 30]);
}

#[test]
fn triangle_insertion_produces_the_same_shape() {
    // 30, 10, 20 needs two rotations but must end up identical to the
    // ascending case: the sorted output is rotation-invariant.
    let mut tree = RbTree::new();
    tree.insert(30);
    tree.insert(10);
    tree.insert(20);

    assert_eq!(
        colored_pre_order(&tree),
        vec![(&20, Color::Black), (&10, Color::Red), (&30, Color::Red)]
    );
    let sorted: Vec<u32> = tree.in_order().copied().collect();
    assert_eq!(sorted, vec![10, 20, 30]);
}

#[test]
fn fifteen_ascending_inserts_respect_height_bound() {
    let mut tree = RbTree::new();
    for value in 1..=15 {
        tree.insert(value);
        // Invariants must hold after every completed insertion, not
        // just at the end of the sequence.
        assert!(audit(&tree).is_ok());
    }

    assert_eq!(tree.len(), 15);
    assert!(tree.height() <= 8, "height {} exceeds 2*log2(16)", tree.height());
}

#[test]
fn min_max_fail_on_empty_tree() {
    let tree: RbTree<u32> = RbTree::new();
    assert_eq!(tree.min(), Err(EmptyTree));
    assert_eq!(tree.max(), Err(EmptyTree));
}

// =============================================================================
// Ordering and duplicates
// =============================================================================

#[test]
fn descending_inserts_stay_sorted_and_balanced() {
    let tree: RbTree<u32> = (0..256).rev().collect();

    let sorted: Vec<u32> = tree.in_order().copied().collect();
    let expected: Vec<u32> = (0..256).collect();
    assert_eq!(sorted, expected);
    assert!(audit(&tree).is_ok());
}

#[test]
fn duplicates_count_toward_len_and_stay_adjacent() {
    let mut tree = RbTree::new();
    for value in [5, 3, 5, 8, 5, 3] {
        tree.insert(value);
    }

    assert_eq!(tree.len(), 6);
    let sorted: Vec<u32> = tree.in_order().copied().collect();
    assert_eq!(sorted, vec![3, 3, 5, 5, 5, 8]);
    assert!(audit(&tree).is_ok());
}

#[test]
fn find_distinguishes_inserted_from_absent() {
    let tree: RbTree<u32> = [2, 4, 6, 8].into_iter().collect();

    assert_eq!(tree.find(&4), Some(&4));
    assert_eq!(tree.find(&5), None);
    assert!(tree.contains(&8));
    assert!(!tree.contains(&1));
}

// =============================================================================
// Traversal behavior
// =============================================================================

#[test]
fn traversal_orders_on_a_known_shape() {
    // Seven values that settle into a full tree of height three.
    let tree: RbTree<u32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();

    let ins: Vec<u32> = tree.in_order().copied().collect();
    let pre: Vec<u32> = tree.pre_order().copied().collect();
    let post: Vec<u32> = tree.post_order().copied().collect();

    assert_eq!(ins, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(pre, vec![4, 2, 1, 3, 6, 5, 7]);
    assert_eq!(post, vec![1, 3, 2, 5, 7, 6, 4]);
}

#[test]
fn iterators_are_restartable_and_pure() {
    let tree: RbTree<u32> = (0..50).collect();

    let first: Vec<u32> = tree.iter().copied().collect();
    let second: Vec<u32> = tree.iter().copied().collect();
    assert_eq!(first, second);

    // Iterating must not disturb the structure.
    assert!(audit(&tree).is_ok());
    assert_eq!(tree.len(), 50);
}

#[test]
fn works_with_non_numeric_values() {
    let mut tree = RbTree::new();
    for word in ["pear", "apple", "quince", "banana", "apple"] {
        tree.insert(word.to_string());
    }

    assert_eq!(tree.min(), Ok(&"apple".to_string()));
    assert_eq!(tree.max(), Ok(&"quince".to_string()));
    let sorted: Vec<&String> = tree.in_order().collect();
    assert_eq!(sorted, vec!["apple", "apple", "banana", "pear", "quince"]);
}
