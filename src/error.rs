//! Errors returned by [`Tree`][crate::Tree] and its traversals.

/// Everything that can go wrong when using a [`Tree`][crate::Tree]. None of these leave the tree
/// in a modified state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// An absent element (`None`) was passed where an element is required.
    #[error("the entry cannot be absent")]
    InvalidArgument,
    /// The tree has no root because it is empty.
    #[error("the tree is empty")]
    NotFound,
    /// A traversal was advanced after it yielded its last element.
    #[error("no more elements in traversal")]
    Exhausted,
}
