//! An unbalanced BST storing unique elements. Every node is owned by exactly one parent through a
//! `Box` (the root is owned by the `Tree`), so releasing a link releases its whole subtree.
//!
//! Nothing here rebalances. Inserting already-sorted input degrades the tree into a list with a
//! height of `O(N)`, so every walk below uses a loop or an explicit stack instead of recursing
//! once per level.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting the same element again is ignored.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing reports whether anything was there.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::error::{Result, TreeError};
use crate::traversal::{Inorder, Postorder, Preorder};

/// An owning edge to a subtree. `None` marks the empty spot below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree of unique elements. This can be used for inserting, finding, and removing
/// elements as well as walking them in inorder, preorder, or postorder.
pub struct Tree<T> {
    root: Link<T>,
    /// Number of nodes reachable from `root`.
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of elements stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every element from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = [3, 1, 2].into_iter().collect();
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.len(), 0);
    ///
    /// // Clearing an empty tree is fine too.
    /// tree.clear();
    /// ```
    pub fn clear(&mut self) {
        release(self.root.take());
        self.len = 0;
        trace!("cleared tree");
    }

    /// Returns the smallest element in the tree, or [`TreeError::Empty`] if there isn't one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, TreeError};
    ///
    /// let mut tree: Tree<i32> = Tree::new();
    /// assert_eq!(tree.min(), Err(TreeError::Empty));
    ///
    /// tree.extend([10, 5, 15]);
    /// assert_eq!(tree.min(), Ok(&5));
    /// ```
    pub fn min(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(TreeError::Empty)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns the largest element in the tree, or [`TreeError::Empty`] if there isn't one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, TreeError};
    ///
    /// let mut tree: Tree<i32> = Tree::new();
    /// assert_eq!(tree.max(), Err(TreeError::Empty));
    ///
    /// tree.extend([10, 5, 15]);
    /// assert_eq!(tree.max(), Ok(&15));
    /// ```
    pub fn max(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(TreeError::Empty)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// The number of edges on the longest path from the root to a leaf. An empty tree has a
    /// height of `-1` and a tree with only a root has a height of `0`.
    ///
    /// This walks the whole tree on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(10);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.extend([5, 15, 2]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        let mut height: isize = -1;
        let mut stack: Vec<(&Node<T>, isize)> =
            self.root.as_deref().map(|root| (root, 0)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Visits elements in ascending order: left subtree, then node, then right subtree.
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root.as_deref())
    }

    /// Visits each node before its left subtree and then its right subtree. Inserting the
    /// visited elements into an empty tree rebuilds this exact shape.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root.as_deref())
    }

    /// Visits each node after its left subtree and then its right subtree, so children always
    /// come before their parent.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root.as_deref())
    }

    /// Iterates over the elements in ascending order. Same as [`Tree::inorder`].
    pub fn iter(&self) -> Inorder<'_, T> {
        self.inorder()
    }

    /// Collects the elements in inorder (ascending) into a new `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15, 2, 8].into_iter().collect();
    /// assert_eq!(tree.inorder_traversal(), vec![2, 5, 8, 10, 15]);
    /// ```
    pub fn inorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inorder().cloned().collect()
    }

    /// Collects the elements in preorder into a new `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15, 2, 8].into_iter().collect();
    /// assert_eq!(tree.preorder_traversal(), vec![10, 5, 2, 8, 15]);
    /// ```
    pub fn preorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.preorder().cloned().collect()
    }

    /// Collects the elements in postorder into a new `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15, 2, 8].into_iter().collect();
    /// assert_eq!(tree.postorder_traversal(), vec![2, 8, 5, 15, 10]);
    /// ```
    pub fn postorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.postorder().cloned().collect()
    }

    /// Inserts `value` unless an equal element is already stored. Returns whether the tree
    /// changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let slot = slot_for(&mut self.root, &value);
        if slot.is_some() {
            trace!(len = self.len, "ignored duplicate insert");
            return false;
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        trace!(len = self.len, "inserted element");
        true
    }

    /// Whether an element equal to `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15].into_iter().collect();
    ///
    /// assert!(tree.contains(&5));
    /// assert!(!tree.contains(&99));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Removes the element equal to `value`. Returns whether anything was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = [10, 5, 15].into_iter().collect();
    ///
    /// assert!(tree.remove(&10));
    /// assert!(!tree.contains(&10));
    /// assert!(!tree.remove(&10));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        self.take(value).is_some()
    }

    /// Removes the element equal to `value` and hands it back. If the tree has no such element,
    /// nothing happens and `None` is returned.
    ///
    /// A node with two children is replaced by its inorder successor: the smallest element of its
    /// right subtree moves up into the node and the successor's old node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = [10, 5, 15, 2, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.take(&10), Some(10));
    /// assert_eq!(tree.take(&10), None);
    ///
    /// // 15 was the smallest element to the right of 10 so it took 10's place.
    /// assert_eq!(tree.preorder_traversal(), vec![15, 5, 2, 8]);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let removed = unlink(slot_for(&mut self.root, value))?;
        self.len -= 1;
        trace!(len = self.len, "removed element");
        Some(removed.value)
    }

    /// Checks that every element is strictly greater than everything in its left subtree and
    /// strictly less than everything in its right subtree.
    ///
    /// The mutating methods always keep this true so it is mostly useful as a self-check.
    pub fn is_valid_bst(&self) -> bool
    where
        T: Ord,
    {
        // Each entry carries the open interval `(lower, upper)` its subtree must fall within.
        let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = self
            .root
            .as_deref()
            .map(|root| (root, None, None))
            .into_iter()
            .collect();

        while let Some((node, lower, upper)) = stack.pop() {
            let too_small = lower.is_some_and(|lower| node.value <= *lower);
            let too_large = upper.is_some_and(|upper| node.value >= *upper);
            if too_small || too_large {
                return false;
            }

            stack.extend(
                node.left
                    .as_deref()
                    .map(|left| (left, lower, Some(&node.value))),
            );
            stack.extend(
                node.right
                    .as_deref()
                    .map(|right| (right, Some(&node.value), upper)),
            );
        }

        true
    }
}

/// Rebuilt from the preorder walk, which reproduces the same shape.
impl<T> Clone for Tree<T>
where
    T: Clone + Ord,
{
    fn clone(&self) -> Self {
        self.preorder().cloned().collect()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// Follows `value` down from `slot` and returns the link that holds it. If `value` isn't stored,
/// this is the empty link where it would be inserted.
fn slot_for<'a, T>(mut slot: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
where
    T: Ord,
{
    // The direction is decided under a shared borrow so that `slot` itself can be handed back.
    while let Some(node) = slot.as_deref() {
        let ord = value.cmp(&node.value);
        slot = match (ord, slot) {
            (Ordering::Equal, slot) => return slot,
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, None) => unreachable!("`as_deref` just saw a node"),
        };
    }
    slot
}

/// Returns the link holding the smallest node of the subtree in `slot`.
fn leftmost_slot<T>(mut slot: &mut Link<T>) -> &mut Link<T> {
    while slot.as_ref().is_some_and(|node| node.left.is_some()) {
        slot = match slot {
            Some(node) => &mut node.left,
            None => unreachable!("loop condition saw a node"),
        };
    }
    slot
}

/// Detaches the node held in `slot` and returns it with no children. Whatever replaces it in
/// `slot` keeps the ordering invariant:
///
/// 1. a leaf leaves the link empty,
/// 2. a node with one child is replaced by that child,
/// 3. a node with two children keeps its place but takes its inorder successor's element, and
///    the successor's node is unlinked from the right subtree instead.
fn unlink<T>(slot: &mut Link<T>) -> Link<T> {
    let mut node = slot.take()?;
    match (node.left.take(), node.right.take()) {
        (None, None) => {}
        (Some(child), None) | (None, Some(child)) => *slot = Some(child),
        (Some(left), Some(right)) => {
            node.left = Some(left);
            node.right = Some(right);

            // The successor has no left child so this only ever hits case 1 or 2.
            let mut successor = unlink(leftmost_slot(&mut node.right))
                .expect("Two children => non-empty right subtree");
            mem::swap(&mut node.value, &mut successor.value);

            *slot = Some(node);
            return Some(successor);
        }
    }
    Some(node)
}

/// Drops a subtree one node at a time. Letting the boxes drop themselves would recurse once per
/// level.
fn release<T>(root: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
