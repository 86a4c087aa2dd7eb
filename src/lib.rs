//! An unbalanced Binary Search Tree (BST) with inorder, preorder, and postorder traversals.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an element
//! and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` (where `height` is the number of `Node`s on
//! the longest path from the root `Node` to a leaf `Node`). This tree does
//! no rebalancing so its height depends only on the order elements are
//! added in. Adding elements in sorted order makes a chain as tall as the
//! tree is large.
//!
//! ## Traversals
//!
//! Elements can be visited in three depth-first orders, each of which is
//! its own iterator with an explicit stack:
//!
//! - inorder: left subtree, node, right subtree. This is ascending order.
//! - preorder: node, left subtree, right subtree.
//! - postorder: left subtree, right subtree, node.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
//!
//! assert!(tree.inorder_iter().eq(&[1, 3, 4, 5, 8]));
//! assert!(tree.preorder_iter().eq(&[5, 3, 1, 4, 8]));
//! assert!(tree.postorder_iter().eq(&[1, 4, 3, 8, 5]));
//! assert_eq!(tree.height(), 3);
//! ```
//!
//! ## Features
//!
//! - `serde`: serializes a `Tree` as the sequence of its elements in preorder
//!   and deserializes by adding them back one at a time, which rebuilds the
//!   same shape.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod node;
#[cfg(feature = "serde")]
mod serialize;
pub mod tree;


pub use error::TreeError;
pub use iter::{Inorder, Postorder, Preorder, Traversal};
pub use node::Node;
pub use tree::Tree;
