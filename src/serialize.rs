//! `serde` support for [`Tree`]. A tree is written as the sequence of its elements in preorder
//! and read back by adding them one at a time, so the shape survives a round trip without the
//! node layout ever being part of the format.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Error as _, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Tree;

impl<E> Serialize for Tree<E>
where
    E: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.preorder_iter())
    }
}

impl<'de, E> Deserialize<'de> for Tree<E>
where
    E: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(TreeVisitor(PhantomData))
    }
}

struct TreeVisitor<E>(PhantomData<E>);

impl<'de, E> Visitor<'de> for TreeVisitor<E>
where
    E: Deserialize<'de> + Ord,
{
    type Value = Tree<E>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of distinct elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut tree = Tree::new();
        while let Some(element) = seq.next_element()? {
            // A serialized tree never holds the same element twice.
            if !tree.add(Some(element)).map_err(A::Error::custom)? {
                return Err(A::Error::custom("duplicate element in tree"));
            }
        }

        Ok(tree)
    }
}
