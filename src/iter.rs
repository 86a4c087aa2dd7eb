//! Depth-first traversals of a [`Tree`][crate::Tree].
//!
//! Each traversal keeps its own explicit stack of borrowed nodes instead of recursing, so any
//! number of them can be alive over the same tree and advanced independently. They borrow the
//! tree, so it cannot be modified while one is in use.
//!
//! Traversals are single-pass. Call the factory method on the tree again to start over.
//!
//! # Examples
//!
//! ```
//! use bstree::{Traversal, Tree, TreeError};
//!
//! let tree: Tree<i32> = [5, 3, 8].into_iter().collect();
//! let mut inorder = tree.inorder_iter();
//!
//! assert_eq!(inorder.next_element(), Ok(&3));
//! assert_eq!(inorder.next_element(), Ok(&5));
//! assert_eq!(inorder.next_element(), Ok(&8));
//! assert!(!inorder.has_next());
//! assert_eq!(inorder.next_element(), Err(TreeError::Exhausted));
//! ```

use std::iter::FusedIterator;

use crate::error::TreeError;
use crate::node::Node;

/// A traversal over the elements of a tree. On top of [`Iterator`], this allows asking whether
/// anything is left and treats advancing past the end as an error.
pub trait Traversal: Iterator {
    /// Whether another call to [`next_element`][Traversal::next_element] would succeed.
    fn has_next(&self) -> bool;

    /// Yields the next element of the traversal.
    ///
    /// # Errors
    ///
    /// [`TreeError::Exhausted`] when every element has already been yielded.
    fn next_element(&mut self) -> Result<Self::Item, TreeError> {
        self.next().ok_or(TreeError::Exhausted)
    }
}

/// Visits the left subtree, then the node, then the right subtree. Yields elements in ascending
/// order. Created by [`Tree::inorder_iter`][crate::Tree::inorder_iter].
pub struct Inorder<'a, E> {
    stack: Vec<&'a Node<E>>,
    remaining: usize,
}

/// Manual implementation of `Clone` so `E` doesn't need to be `Clone`. Only the stack of
/// references is copied.
impl<E> Clone for Inorder<'_, E> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, E> Inorder<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and every node reached by following left children from it.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<E>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, E> Iterator for Inorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.element())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> Traversal for Inorder<'_, E> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<E> ExactSizeIterator for Inorder<'_, E> {}
impl<E> FusedIterator for Inorder<'_, E> {}

/// Visits the node, then its left subtree, then its right subtree. Created by
/// [`Tree::preorder_iter`][crate::Tree::preorder_iter].
///
/// Re-adding the elements of a tree in preorder to an empty tree rebuilds the same shape.
pub struct Preorder<'a, E> {
    stack: Vec<&'a Node<E>>,
    remaining: usize,
}

impl<E> Clone for Preorder<'_, E> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, E> Preorder<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, E> Iterator for Preorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is finished before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(node.element())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> Traversal for Preorder<'_, E> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<E> ExactSizeIterator for Preorder<'_, E> {}
impl<E> FusedIterator for Preorder<'_, E> {}

/// Visits the left subtree, then the right subtree, then the node. Created by
/// [`Tree::postorder_iter`][crate::Tree::postorder_iter].
///
/// Unlike the other traversals, the whole order is worked out when this is constructed, which
/// costs `O(n)` time and space up front.
pub struct Postorder<'a, E> {
    stack: Vec<&'a Node<E>>,
}

impl<E> Clone for Postorder<'_, E> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, E> Postorder<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>, len: usize) -> Self {
        // Popping `pending` visits nodes root, right, left. Pushing each onto `stack` means
        // popping `stack` later gives left, right, root.
        let mut pending: Vec<&'a Node<E>> = root.into_iter().collect();
        let mut stack = Vec::with_capacity(len);
        while let Some(node) = pending.pop() {
            stack.push(node);
            pending.extend(node.left());
            pending.extend(node.right());
        }

        Self { stack }
    }
}

impl<'a, E> Iterator for Postorder<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(Node::element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl<E> Traversal for Postorder<'_, E> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<E> ExactSizeIterator for Postorder<'_, E> {}
impl<E> FusedIterator for Postorder<'_, E> {}
