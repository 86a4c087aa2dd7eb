//! Property tests against the public surface of `bstree`.

mod traversals;
