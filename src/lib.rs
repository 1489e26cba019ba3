//! This crate exposes an in-memory ordered Binary Search Tree (BST) over
//! integer values, supporting insertion, deletion, search, a family of
//! traversal orders, and derived queries like height, minimum/maximum,
//! k-th smallest, and lowest common ancestor.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! This tree stores each value exactly once: inserting a value already present
//! is an error rather than an overwrite, so the tree behaves like an ordered
//! set. The tree performs no rebalancing; inserting values in sorted order
//! degenerates it to a linked-list shape.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! # fn main() -> Result<(), ordered_tree::Error> {
//! let mut tree = OrderedTree::from_values(vec![10, 5, 15, 3, 7, 12, 18])?;
//!
//! assert_eq!(tree.inorder(), vec![3, 5, 7, 10, 12, 15, 18]);
//! assert_eq!(tree.kth_smallest(3)?, 7);
//! assert_eq!(tree.lowest_common_ancestor(3, 7)?, 5);
//!
//! tree.delete(10)?;
//! assert!(!tree.contains(10));
//! assert!(tree.is_valid_bst());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod traversal;
pub mod tree;


pub use error::Error;
pub use traversal::{ReverseKind, Traversal};
pub use tree::OrderedTree;
