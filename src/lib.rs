//! This crate exposes an unbalanced Binary Search Tree that stores unique elements.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`Tree`] here never rebalances, so its height
//! depends entirely on insertion order: `O(lg N)` for random input but `O(N)` when elements
//! arrive sorted. BSTs also naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree (see [`traversal`]).
//!
//! # Examples
//!
//! ```
//! use bstree::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//! for x in [10, 5, 15, 2, 8] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.inorder_traversal(), vec![2, 5, 8, 10, 15]);
//! assert_eq!(tree.min(), Ok(&2));
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_valid_bst());
//!
//! tree.clear();
//! assert_eq!(tree.max(), Err(TreeError::Empty));
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traversal;
mod tree;

pub use error::TreeError;
pub use tree::Tree;
