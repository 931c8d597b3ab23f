//! Borrowing iterators over a [`Tree`][crate::Tree] in the three classical depth-first orders.
//!
//! Each iterator keeps its own explicit stack of pending nodes and produces elements lazily. They
//! borrow the tree immutably so it can't change underneath them; to walk the tree again after a
//! mutation, ask the tree for a new iterator.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! //       10
//! //      /  \
//! //     5    15
//! //    / \
//! //   2   8
//! let tree: Tree<_> = [10, 5, 15, 2, 8].into_iter().collect();
//!
//! assert!(tree.inorder().eq(&[2, 5, 8, 10, 15]));
//! assert!(tree.preorder().eq(&[10, 5, 2, 8, 15]));
//! assert!(tree.postorder().eq(&[2, 8, 5, 15, 10]));
//! ```

use std::iter::FusedIterator;

use crate::tree::Node;

/// Yields elements in ascending order. Created by [`Tree::inorder`][crate::Tree::inorder].
pub struct Inorder<'a, T> {
    /// Nodes whose left subtree has been (or is being) visited but which haven't been yielded.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and all of its left descendants. The smallest ends up on top.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for Inorder<'_, T> {}

/// Yields each element before its left and then right subtree. Created by
/// [`Tree::preorder`][crate::Tree::preorder].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes first so that left is popped first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for Preorder<'_, T> {}

enum Visit<'a, T> {
    /// The node's children haven't been scheduled yet.
    Expand(&'a Node<T>),
    /// Both subtrees are done so the node itself is next.
    Emit(&'a Node<T>),
}

/// Yields each element after its left and then right subtree. Created by
/// [`Tree::postorder`][crate::Tree::postorder].
pub struct Postorder<'a, T> {
    stack: Vec<Visit<'a, T>>,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(Visit::Expand).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(visit) = self.stack.pop() {
            match visit {
                Visit::Emit(node) => return Some(&node.value),
                Visit::Expand(node) => {
                    // Pushed in reverse: left subtree, right subtree, then the node come off.
                    self.stack.push(Visit::Emit(node));
                    self.stack.extend(node.right.as_deref().map(Visit::Expand));
                    self.stack.extend(node.left.as_deref().map(Visit::Expand));
                }
            }
        }
        None
    }
}

impl<T> FusedIterator for Postorder<'_, T> {}
