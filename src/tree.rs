//! An unbalanced Binary Search Tree. Elements are stored in the order they are added with no
//! rebalancing so the shape of the tree is determined entirely by insertion order.
//!
//! # Examples
//!
//! ```
//! use bstree::{Tree, TreeError};
//!
//! let mut tree: Tree<i32> = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.contains(&1), Ok(false));
//! assert_eq!(tree.root().unwrap_err(), TreeError::NotFound);
//!
//! assert_eq!(tree.add(1), Ok(true));
//! assert_eq!(tree.contains(&1), Ok(true));
//!
//! // Adding an element that is already present does nothing.
//! assert_eq!(tree.add(1), Ok(false));
//! assert_eq!(tree.size(), 1);
//!
//! // Absent elements are rejected.
//! assert_eq!(tree.add(None), Err(TreeError::InvalidArgument));
//!
//! // Removing the smallest element hands its node back.
//! let min = tree.remove_min().unwrap();
//! assert_eq!(min.into_element(), 1);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::TreeError;
use crate::iter::{Inorder, Postorder, Preorder};
use crate::node::{Link, Node};

/// A Binary Search Tree without self-balancing. This can be used for adding, searching, and
/// removing the smallest and largest elements, and for traversing elements inorder, preorder, and
/// postorder. Equal elements are never stored twice.
pub struct Tree<E> {
    root: Link<E>,
    size: usize,
}

impl<E> Default for Tree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for Tree<E> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Clones by re-adding every element in preorder, which rebuilds the same shape.
impl<E> Clone for Tree<E>
where
    E: Clone + Ord,
{
    fn clone(&self) -> Self {
        self.preorder_iter().cloned().collect()
    }
}

impl<E> fmt::Debug for Tree<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder_iter()).finish()
    }
}

impl<E> FromIterator<E> for Tree<E>
where
    E: Ord,
{
    /// Builds a tree by adding each element in turn. Duplicates after the first are skipped.
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<E> Extend<E> for Tree<E>
where
    E: Ord,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, E> IntoIterator for &'a Tree<E> {
    type Item = &'a E;
    type IntoIter = Inorder<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder_iter()
    }
}

impl<E> Tree<E> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Generate a new `Tree` whose root holds `element`.
    pub fn with_element(element: E) -> Self {
        Self {
            root: Some(Node::new_boxed(element)),
            size: 1,
        }
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of elements in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`Tree::size`].
    pub fn len(&self) -> usize {
        self.size
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has
    /// a height of 0 and a tree with only a root has a height of 1.
    ///
    /// This visits every node so it takes `O(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<i32> = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Ascending elements make a chain down the right.
    /// tree.extend([1, 2, 3]);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<E>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// The root node of the tree. This is a view into the tree, not a copy.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if the tree is empty.
    pub fn root(&self) -> Result<&Node<E>, TreeError> {
        self.root.as_deref().ok_or(TreeError::NotFound)
    }

    /// Returns `true` if an element equal to `entry` is in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if `entry` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, TreeError};
    ///
    /// let tree = Tree::with_element("b");
    ///
    /// assert_eq!(tree.contains(&"b"), Ok(true));
    /// assert_eq!(tree.contains(&"a"), Ok(false));
    /// assert_eq!(tree.contains(None), Err(TreeError::InvalidArgument));
    /// ```
    pub fn contains<'e>(&self, entry: impl Into<Option<&'e E>>) -> Result<bool, TreeError>
    where
        E: Ord + 'e,
    {
        self.search(entry).map(|found| found.is_some())
    }

    /// Potentially finds the node holding an element equal to `entry`. If no node matches,
    /// `Ok(None)` is returned. Takes `O(height)`.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if `entry` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let node = tree.search(&1).unwrap().unwrap();
    /// assert_eq!(node.element(), &1);
    /// assert!(tree.search(&42).unwrap().is_none());
    /// ```
    pub fn search<'e>(
        &self,
        entry: impl Into<Option<&'e E>>,
    ) -> Result<Option<&Node<E>>, TreeError>
    where
        E: Ord + 'e,
    {
        let entry = entry.into().ok_or(TreeError::InvalidArgument)?;

        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match entry.cmp(node.element()) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Ok(Some(node)),
                Ordering::Greater => current = node.right(),
            }
        }

        Ok(None)
    }

    /// Adds `entry` to the tree as a new leaf. Returns `Ok(false)`, leaving the tree untouched,
    /// if an equal element is already present. The existing element is not replaced.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if `entry` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<i32> = Tree::new();
    ///
    /// assert_eq!(tree.add(5), Ok(true));
    /// assert_eq!(tree.add(Some(3)), Ok(true));
    /// assert_eq!(tree.add(5), Ok(false));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn add(&mut self, entry: impl Into<Option<E>>) -> Result<bool, TreeError>
    where
        E: Ord,
    {
        let entry = entry.into().ok_or(TreeError::InvalidArgument)?;
        Ok(self.insert(entry))
    }

    fn insert(&mut self, entry: E) -> bool
    where
        E: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match entry.cmp(&node.element) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => link = &mut node.right,
            }
        }

        *link = Some(Node::new_boxed(entry));
        self.size += 1;
        true
    }

    /// Removes the node holding the smallest element and returns it, detached from the tree and
    /// without children. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove_min().map(|n| n.into_element()), Some(3));
    /// assert_eq!(tree.remove_min().map(|n| n.into_element()), Some(5));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn remove_min(&mut self) -> Option<Node<E>> {
        // Walk down the left spine to the slot holding the smallest node. That is the root's
        // slot when the root has no left child, otherwise its parent's left slot.
        let mut link = &mut self.root;
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            link = &mut link.as_mut().unwrap().left;
        }

        let mut min = link.take()?;
        *link = min.right.take();

        debug_assert!(min.left.is_none());
        self.size -= 1;
        Some(*min)
    }

    /// Removes the node holding the largest element and returns it, detached from the tree and
    /// without children. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove_max().map(|n| n.into_element()), Some(8));
    /// assert_eq!(tree.remove_max().map(|n| n.into_element()), Some(5));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn remove_max(&mut self) -> Option<Node<E>> {
        let mut link = &mut self.root;
        while link.as_ref().is_some_and(|node| node.right.is_some()) {
            link = &mut link.as_mut().unwrap().right;
        }

        let mut max = link.take()?;
        *link = max.left.take();

        debug_assert!(max.right.is_none());
        self.size -= 1;
        Some(*max)
    }

    /// Removes every element from the tree.
    ///
    /// Nodes are torn down one at a time so even a long chain of nodes is dropped without
    /// recursing.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<E>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.size = 0;
    }

    /// Traverses the elements in ascending order.
    pub fn inorder_iter(&self) -> Inorder<'_, E> {
        Inorder::new(self.root.as_deref(), self.size)
    }

    /// Same as [`Tree::inorder_iter`].
    pub fn iter(&self) -> Inorder<'_, E> {
        self.inorder_iter()
    }

    /// Traverses each node before its left subtree and then its right subtree.
    pub fn preorder_iter(&self) -> Preorder<'_, E> {
        Preorder::new(self.root.as_deref(), self.size)
    }

    /// Traverses each node after its left subtree and then its right subtree.
    pub fn postorder_iter(&self) -> Postorder<'_, E> {
        Postorder::new(self.root.as_deref(), self.size)
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of adds
    /// and removals we have the same elements in both.
    fn do_ops<E>(ops: &[Op<E>], bst: &mut Tree<E>, set: &mut BTreeSet<E>)
    where
        E: Ord + Clone + fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Add(x) => {
                    assert_eq!(bst.add(x.clone()), Ok(set.insert(x.clone())));
                }
                Op::RemoveMin => {
                    let expected = set.iter().next().cloned();
                    if let Some(x) = &expected {
                        set.remove(x);
                    }
                    assert_eq!(bst.remove_min().map(Node::into_element), expected);
                }
                Op::RemoveMax => {
                    let expected = set.iter().next_back().cloned();
                    if let Some(x) = &expected {
                        set.remove(x);
                    }
                    assert_eq!(bst.remove_max().map(Node::into_element), expected);
                }
                Op::Iter => {
                    assert!(bst.inorder_iter().eq(set.iter()));
                }
            }
            assert_eq!(bst.size(), set.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            set.iter().all(|x| tree.contains(x) == Ok(true))
                && tree.inorder_iter().eq(set.iter())
        }
    }

    quickcheck::quickcheck! {
        fn height_bounds(xs: Vec<u8>) -> bool {
            let tree: Tree<u8> = xs.into_iter().collect();
            let size = tree.size();
            let height = tree.height();

            // A binary tree of `size` nodes has at least `ceil(log2(size + 1))` levels and at
            // most `size` levels.
            let min_height = (usize::BITS - size.leading_zeros()) as usize;
            height <= size && height >= min_height
        }
    }
}
