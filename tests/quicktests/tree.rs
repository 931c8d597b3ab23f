use bstree::{Tree, TreeError};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::quick::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same elements in both, and that every
/// step reported the same outcome.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(bst.insert(x.clone()), set.insert(x.clone()));
            }
            Op::Remove(x) => {
                assert_eq!(bst.remove(x), set.remove(x));
            }
            Op::Traverse => {
                assert_eq!(
                    bst.inorder_traversal(),
                    set.iter().cloned().collect::<Vec<_>>()
                );
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.is_valid_bst()
        && tree.len() == set.len()
        && tree.inorder_traversal() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn inorder_is_sorted_input(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.inorder_traversal() == expected && tree.len() == expected.len()
}

#[quickcheck]
fn insertion_order_does_not_change_contents(xs: Vec<i8>) -> bool {
    let forward: Tree<_> = xs.iter().copied().collect();
    let backward: Tree<_> = xs.iter().rev().copied().collect();

    forward.inorder_traversal() == backward.inorder_traversal()
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let len = tree.len();
    let preorder = tree.preorder_traversal();

    let all_ignored = xs.iter().all(|x| !tree.insert(*x));

    all_ignored && tree.len() == len && tree.preorder_traversal() == preorder && tree.is_valid_bst()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut still_present: BTreeSet<_> = xs.into_iter().collect();

    for delete in &deletes {
        let len = tree.len();
        let was_present = still_present.remove(delete);

        if tree.remove(delete) != was_present || !tree.is_valid_bst() {
            return false;
        }
        let expected_len = if was_present { len - 1 } else { len };
        if tree.len() != expected_len || tree.contains(delete) {
            return false;
        }
    }

    still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn preorder_rebuilds_same_shape(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let rebuilt: Tree<_> = tree.preorder().copied().collect();

    rebuilt.preorder_traversal() == tree.preorder_traversal()
        && rebuilt.postorder_traversal() == tree.postorder_traversal()
        && rebuilt.height() == tree.height()
}

#[quickcheck]
fn postorder_ends_with_root(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    match xs.first() {
        Some(root) => tree.postorder().last() == Some(root) && tree.preorder().next() == Some(root),
        None => tree.postorder().next().is_none(),
    }
}

#[quickcheck]
fn height_is_bounded_by_len(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let height = tree.height();

    if tree.is_empty() {
        return height == -1;
    }
    // A tree of `n` nodes has at least `ceil(lg(n + 1))` levels and at most `n`.
    let levels = (height + 1) as u32;
    let capacity = 1usize.checked_shl(levels).map_or(usize::MAX, |c| c - 1);
    levels as usize <= tree.len() && tree.len() <= capacity
}

#[quickcheck]
fn extremes_match_set(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let set: BTreeSet<_> = xs.into_iter().collect();

    match (set.first(), set.last()) {
        (Some(min), Some(max)) => tree.min() == Ok(min) && tree.max() == Ok(max),
        _ => tree.min() == Err(TreeError::Empty) && tree.max() == Err(TreeError::Empty),
    }
}
