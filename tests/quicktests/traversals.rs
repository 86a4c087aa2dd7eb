use bstree::{Node, Traversal, Tree, TreeError};

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Builds a tree by adding `xs` in order, returning it along with the distinct elements added.
fn build(xs: &[i16]) -> (Tree<i16>, BTreeSet<i16>) {
    let mut tree: Tree<i16> = Tree::new();
    let mut set = BTreeSet::new();
    for x in xs {
        assert_eq!(tree.add(*x), Ok(set.insert(*x)));
    }

    (tree, set)
}

/// Every node's element in postorder paired with the size of the subtree below it. Built from
/// the nodes themselves rather than a traversal.
fn subtree_sizes(tree: &Tree<i16>) -> Vec<(i16, usize)> {
    fn walk(node: &Node<i16>, out: &mut Vec<(i16, usize)>) -> usize {
        let left = node.left().map_or(0, |n| walk(n, out));
        let right = node.right().map_or(0, |n| walk(n, out));
        out.push((*node.element(), left + right + 1));
        left + right + 1
    }

    let mut out = Vec::new();
    if let Ok(root) = tree.root() {
        walk(root, &mut out);
    }
    out
}

/// Whether `x` is somewhere below (or at) `node`.
fn in_subtree(node: &Node<i16>, x: &i16) -> bool {
    let mut current = Some(node);
    while let Some(n) = current {
        match x.cmp(n.element()) {
            Ordering::Less => current = n.left(),
            Ordering::Equal => return true,
            Ordering::Greater => current = n.right(),
        }
    }
    false
}

quickcheck::quickcheck! {
    fn inorder_is_strictly_ascending(xs: Vec<i16>) -> bool {
        let (tree, set) = build(&xs);

        tree.size() == set.len()
            && tree.inorder_iter().eq(set.iter())
            && tree.inorder_iter().collect::<Vec<_>>().windows(2).all(|w| w[0] < w[1])
    }
}

quickcheck::quickcheck! {
    fn readding_is_rejected(xs: Vec<i16>) -> bool {
        let (mut tree, set) = build(&xs);

        xs.iter().all(|x| tree.add(*x) == Ok(false)) && tree.size() == set.len()
    }
}

quickcheck::quickcheck! {
    fn preorder_replay_rebuilds_shape(xs: Vec<i16>) -> bool {
        let (tree, _) = build(&xs);
        let replayed: Tree<i16> = tree.preorder_iter().copied().collect();

        replayed.preorder_iter().eq(tree.preorder_iter())
            && replayed.postorder_iter().eq(tree.postorder_iter())
            && replayed.height() == tree.height()
    }
}

quickcheck::quickcheck! {
    fn postorder_emits_subtree_roots_last(xs: Vec<i16>) -> bool {
        let (tree, _) = build(&xs);
        let postorder: Vec<i16> = tree.postorder_iter().copied().collect();

        // In postorder, a subtree of `size` nodes is the `size` elements ending at its root.
        let sizes = subtree_sizes(&tree);
        sizes.len() == postorder.len()
            && sizes.into_iter().enumerate().all(|(i, (root, size))| {
                let Ok(Some(node)) = tree.search(&root) else {
                    return false;
                };
                postorder[i] == root
                    && i + 1 >= size
                    && postorder[i + 1 - size..=i].iter().all(|x| in_subtree(node, x))
            })
    }
}

quickcheck::quickcheck! {
    fn remove_min_drains_ascending(xs: Vec<i16>) -> bool {
        let (mut tree, set) = build(&xs);

        let mut drained = Vec::new();
        let mut sizes_ok = true;
        while let Some(node) = tree.remove_min() {
            drained.push(node.into_element());
            sizes_ok &= tree.size() + drained.len() == set.len();
        }

        sizes_ok && tree.is_empty() && drained.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn remove_max_drains_descending(xs: Vec<i16>) -> bool {
        let (mut tree, set) = build(&xs);

        let mut drained = Vec::new();
        while let Some(node) = tree.remove_max() {
            drained.push(node.into_element());
        }

        tree.is_empty() && drained.iter().eq(set.iter().rev())
    }
}

quickcheck::quickcheck! {
    fn traversals_exhaust_with_error(xs: Vec<i16>) -> bool {
        let (tree, _) = build(&xs);

        fn exhausted<'a, T: Traversal<Item = &'a i16>>(mut t: T, len: usize) -> bool {
            let mut count = 0;
            while t.has_next() {
                if t.next_element().is_err() {
                    return false;
                }
                count += 1;
            }
            count == len && t.next_element() == Err(TreeError::Exhausted)
        }

        exhausted(tree.inorder_iter(), tree.size())
            && exhausted(tree.preorder_iter(), tree.size())
            && exhausted(tree.postorder_iter(), tree.size())
    }
}
