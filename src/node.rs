//! A single vertex of a [`Tree`][crate::Tree].
//!
//! A `Node` owns its element and, optionally, a left and a right child. Each child is itself a
//! `Node` exclusively owned by its parent so a node's subtree is fully self-contained: dropping
//! the node drops everything below it.
//!
//! `Node`s do no validation of their own. The ordering invariants of a binary search tree are
//! maintained entirely by [`Tree`][crate::Tree], which never hands out mutable access to the nodes
//! it owns. The setters here are for nodes the caller owns, such as those returned by
//! [`Tree::remove_min`][crate::Tree::remove_min].
//!
//! # Examples
//!
//! ```
//! use bstree::Node;
//!
//! let mut node = Node::new(5);
//! node.set_left(Some(Node::new(3)));
//! node.set_right(Some(Node::new(8)));
//!
//! assert_eq!(node.left().map(Node::element), Some(&3));
//! assert_eq!(node.right().map(Node::element), Some(&8));
//!
//! // Replacing a child drops the previous one.
//! node.set_left(None);
//! assert!(node.left().is_none());
//! ```

use std::fmt;

/// The optional, owned child of a `Node`.
pub(crate) type Link<E> = Option<Box<Node<E>>>;

/// A vertex holding one element and up to two owned children.
///
/// Dropping a `Node` you own drops its subtree recursively, so a very deep chain built by hand can
/// exhaust the stack. Nodes owned by a [`Tree`][crate::Tree] are torn down iteratively instead.
pub struct Node<E> {
    pub(crate) element: E,
    pub(crate) left: Link<E>,
    pub(crate) right: Link<E>,
}

/// Shows the element and the elements of the direct children only, so formatting a node never
/// walks its whole subtree.
impl<E> fmt::Debug for Node<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("left", &self.left().map(Node::element))
            .field("right", &self.right().map(Node::element))
            .finish()
    }
}

impl<E> Node<E> {
    /// Construct a new leaf `Node` holding `element`.
    pub fn new(element: E) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(element: E) -> Box<Self> {
        Box::new(Self::new(element))
    }

    /// The element stored in this node.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Replaces the element stored in this node, returning the previous one.
    pub fn set_element(&mut self, element: E) -> E {
        std::mem::replace(&mut self.element, element)
    }

    /// Consumes the node, returning its element. Any children are dropped.
    pub fn into_element(self) -> E {
        self.element
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Moves `left` (and its whole subtree) into the left slot of this node. Whatever was there
    /// before is dropped.
    pub fn set_left(&mut self, left: Option<Self>) {
        self.left = left.map(Box::new);
    }

    /// Moves `right` (and its whole subtree) into the right slot of this node. Whatever was there
    /// before is dropped.
    pub fn set_right(&mut self, right: Option<Self>) {
        self.right = right.map(Box::new);
    }

    /// Detaches and returns the left subtree.
    pub fn take_left(&mut self) -> Option<Self> {
        self.left.take().map(|n| *n)
    }

    /// Detaches and returns the right subtree.
    pub fn take_right(&mut self) -> Option<Self> {
        self.right.take().map(|n| *n)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
