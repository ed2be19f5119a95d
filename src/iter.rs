//! Ordered cursors over a [`Tree`].
//!
//! All of them walk the tree in order with an explicit stack of ancestors that haven't been
//! visited yet: the stack starts out holding the path from the root down through every left
//! child, and each step pops a node, yields it, and then pushes the left-descent path of that
//! node's right child. None of them materialize the tree up front and each call to
//! [`Tree::iter`] (and friends) creates a fresh, independent cursor.
//!
//! The borrowing cursors hold a borrow of the tree, so the tree can't be restructured while one
//! of them is alive.

use std::iter::FusedIterator;

use crate::tree::{Link, Node, Tree};

/// The stack of pending ancestors shared by [`Iter`] and [`IterFrom`].
struct Walk<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<K, V> Clone for Walk<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K, V> Walk<'a, K, V> {
    fn new(root: &'a Link<K, V>) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.push_left(root.as_deref());
        walk
    }

    fn push_left(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }

    fn next(&mut self) -> Option<&'a Node<K, V>> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node)
    }
}

/// An ascending iterator over the entries of a [`Tree`].
///
/// Created by [`Tree::iter`].
pub struct Iter<'a, K, V> {
    walk: Walk<'a, K, V>,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            walk: self.walk.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.walk.next()?;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An ascending iterator over the entries of a [`Tree`] with mutable access to the values.
///
/// Created by [`Tree::iter_mut`].
pub struct IterMut<'a, K, V> {
    // Each entry is a node split into its key, its value, and its not-yet-walked right subtree.
    stack: Vec<(&'a K, &'a mut V, &'a mut Link<K, V>)>,
    remaining: usize,
}

impl<'a, K, V> IterMut<'a, K, V> {
    fn push_left(&mut self, mut link: &'a mut Link<K, V>) {
        while let Some(node) = link {
            let Node {
                key,
                value,
                left,
                right,
            } = &mut **node;
            self.stack.push((&*key, value, right));
            link = left;
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value, right) = self.stack.pop()?;
        self.push_left(right);
        self.remaining -= 1;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An owning, ascending iterator over the entries of a [`Tree`].
///
/// Created by [`Tree::into_iter`].
pub struct IntoIter<K, V> {
    stack: Vec<Box<Node<K, V>>>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    fn push_left(&mut self, mut link: Link<K, V>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left(node.right.take());
        self.remaining -= 1;

        let Node { key, value, .. } = *node;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    // The stacked nodes still own their right subtrees; drain them so dropping never recurses.
    fn drop(&mut self) {
        self.by_ref().for_each(drop);
    }
}

/// An ascending iterator over the entries of a [`Tree`] starting at a given key.
///
/// Created by [`Tree::iter_from`].
pub struct IterFrom<'a, K, V> {
    walk: Walk<'a, K, V>,
}

impl<K, V> Clone for IterFrom<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            walk: self.walk.clone(),
        }
    }
}

impl<'a, K, V> Iterator for IterFrom<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next().map(|node| (&node.key, &node.value))
    }
}

impl<K, V> FusedIterator for IterFrom<'_, K, V> {}

/// An ascending iterator over the keys of a [`Tree`].
///
/// Created by [`Tree::keys`].
pub struct Keys<'a, K, V>(Iter<'a, K, V>);

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`Tree`], in ascending order of their keys.
///
/// Created by [`Tree::values`].
pub struct Values<'a, K, V>(Iter<'a, K, V>);

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Tree<K, V> {
    /// Gets a lazy iterator over the entries of the tree in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let tree = Tree::from_list([(2, 'b'), (3, 'c'), (1, 'a')]);
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.next(), Some((&1, &'a')));
    /// assert_eq!(iter.next(), Some((&2, &'b')));
    /// assert_eq!(iter.next(), Some((&3, &'c')));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            walk: Walk::new(&self.root),
            remaining: self.len,
        }
    }

    /// Gets a lazy iterator over the entries of the tree in ascending key order, with mutable
    /// references to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let mut iter = IterMut {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left(&mut self.root);
        iter
    }

    /// Gets a lazy iterator over the entries whose key is at least `start`, in ascending key
    /// order.
    ///
    /// The starting point is found with a single descent from the root, so entries before
    /// `start` are never visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let tree = Tree::from_list([(1, 2), (3, 4), (2, 3), (4, 5)]);
    ///
    /// let from_three: Vec<_> = tree.iter_from(&3).collect();
    /// assert_eq!(from_three, [(&3, &4), (&4, &5)]);
    ///
    /// // The start key doesn't have to be present.
    /// assert_eq!(tree.iter_from(&0).count(), 4);
    /// assert_eq!(tree.iter_from(&5).count(), 0);
    /// ```
    pub fn iter_from(&self, start: &K) -> IterFrom<'_, K, V>
    where
        K: Ord,
    {
        // Keep exactly the ancestors at or after `start` that an in-order walk still owes us.
        let mut walk = Walk { stack: Vec::new() };
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if n.key < *start {
                node = n.right.as_deref();
            } else {
                walk.stack.push(n);
                node = n.left.as_deref();
            }
        }
        IterFrom { walk }
    }

    /// Gets an iterator over the keys of the tree in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Gets an iterator over the values of the tree in ascending order of their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K, V> IntoIterator for Tree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left(self.root.take());
        iter
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut Tree<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
