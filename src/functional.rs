//! Bulk and functional operations over a [`Tree`]: ordered materialization, map, filter,
//! reduce, and merging two trees.
//!
//! Every operation here visits entries in ascending key order (left subtree, then node, then
//! right subtree), and callers may rely on that order, e.g. for a non-commutative
//! [`reduce`][Tree::reduce].
//!
//! Merging consumes both trees and returns the result, so merges compose like values:
//!
//! ```
//! use bst_dict::Tree;
//!
//! let a = Tree::from_list([(1, "a"), (2, "a")]);
//! let b = Tree::from_list([(2, "b"), (3, "b")]);
//!
//! // The right-hand side wins on conflicting keys...
//! let overwritten = a.clone().concat(b.clone());
//! assert_eq!(overwritten.to_list(), [(&1, &"a"), (&2, &"b"), (&3, &"b")]);
//!
//! // ...unless the existing entries are kept instead.
//! let kept = a.concat_keep_existing(b);
//! assert_eq!(kept.to_list(), [(&1, &"a"), (&2, &"a"), (&3, &"b")]);
//! ```

use crate::Tree;

/// What a merge does when both trees hold the same key.
///
/// The two policies are mutually exclusive. Each of them on its own makes merging associative
/// with the empty tree as identity, but mixing them within a chain of merges does not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MergePolicy {
    /// The incoming entry replaces the existing one (right-biased).
    #[default]
    Overwrite,
    /// The existing entry is kept and the incoming one is discarded (left-biased).
    KeepExisting,
}

impl<K, V> Tree<K, V> {
    /// Collects every entry in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let tree = Tree::from_list([(2, 'b'), (1, 'a')]);
    /// assert_eq!(tree.to_list(), [(&1, &'a'), (&2, &'b')]);
    /// ```
    pub fn to_list(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// Same as [`to_list`][Tree::to_list].
    pub fn inorder_traversal(&self) -> Vec<(&K, &V)> {
        self.to_list()
    }

    /// Collects every entry in descending key order: exactly [`to_list`][Tree::to_list]
    /// reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let tree = Tree::from_list([(2, 'b'), (1, 'a'), (3, 'c')]);
    /// assert_eq!(tree.reverse(), [(&3, &'c'), (&2, &'b'), (&1, &'a')]);
    /// ```
    pub fn reverse(&self) -> Vec<(&K, &V)> {
        let mut entries = self.to_list();
        entries.reverse();
        entries
    }

    /// Replaces every value with `f(key, value)` in place. Keys, and so the shape of the tree,
    /// are left alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let mut tree = Tree::from_list([(1, 10), (2, 20)]);
    /// tree.map_values(|key, value| key + value);
    ///
    /// assert_eq!(tree.to_list(), [(&1, &11), (&2, &22)]);
    /// ```
    pub fn map_values<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &V) -> V,
    {
        for (key, value) in self.iter_mut() {
            *value = f(key, value);
        }
    }

    /// Builds a new tree out of `f(key, value)` for every entry. The results are added in
    /// ascending order of the original keys, so when `f` maps two entries to the same key the
    /// one with the larger original key wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let tree = Tree::from_list([(1, "one"), (2, "two"), (3, "three")]);
    ///
    /// // Keys 1 and 3 collide on 1; 3 comes later so it wins.
    /// let mapped = tree.map(|key, value| (key % 2, value.len()));
    /// assert_eq!(mapped.to_list(), [(&0, &3), (&1, &5)]);
    /// ```
    pub fn map<K2, V2, F>(&self, mut f: F) -> Tree<K2, V2>
    where
        K2: Ord,
        F: FnMut(&K, &V) -> (K2, V2),
    {
        self.iter().map(|(key, value)| f(key, value)).collect()
    }

    /// Collects the entries for which `predicate(key, value)` holds, in ascending key order. The
    /// tree itself is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let tree = Tree::from_list((1..=6).map(|k| (k, k * k)));
    /// let even = tree.filter(|key, _| key % 2 == 0);
    ///
    /// assert_eq!(even, [(&2, &4), (&4, &16), (&6, &36)]);
    /// ```
    pub fn filter<F>(&self, mut predicate: F) -> Vec<(&K, &V)>
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().filter(|&(key, value)| predicate(key, value)).collect()
    }

    /// Left-folds every entry into an accumulator, in ascending key order:
    /// `acc = f(acc, key, value)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let tree = Tree::from_list([('b', 2), ('c', 3), ('a', 1)]);
    ///
    /// let keys = tree.reduce(String::new(), |mut acc, key, _| {
    ///     acc.push(*key);
    ///     acc
    /// });
    /// assert_eq!(keys, "abc");
    ///
    /// assert_eq!(tree.reduce(0, |acc, _, value| acc + value), 6);
    /// ```
    pub fn reduce<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        self.iter().fold(initial, |acc, (key, value)| f(acc, key, value))
    }

    /// Merges `other` into this tree, resolving keys present in both with `policy`, and returns
    /// the merged tree. Entries are moved out of `other` in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::{MergePolicy, Tree};
    ///
    /// let a = Tree::from_list([(1, 'a')]);
    /// let b = Tree::from_list([(1, 'b'), (2, 'b')]);
    ///
    /// let merged = a.merge(b, MergePolicy::KeepExisting);
    /// assert_eq!(merged.to_list(), [(&1, &'a'), (&2, &'b')]);
    /// ```
    pub fn merge(mut self, other: Self, policy: MergePolicy) -> Self
    where
        K: Ord,
    {
        if self.is_empty() {
            return other;
        }

        for (key, value) in other {
            match policy {
                MergePolicy::Overwrite => self.add(key, value),
                MergePolicy::KeepExisting => {
                    self.add_if_absent(key, value);
                }
            }
        }
        self
    }

    /// Merges `other` into this tree with [`MergePolicy::Overwrite`]: every entry of `other` is
    /// [`add`][Tree::add]ed, so `other` wins on conflicting keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let a = Tree::from_list([(1, 2), (3, 4)]);
    /// let b = Tree::from_list([(2, 3), (4, 5), (3, 5)]);
    ///
    /// let merged = a.concat(b);
    /// assert_eq!(merged.to_list(), [(&1, &2), (&2, &3), (&3, &5), (&4, &5)]);
    /// ```
    pub fn concat(self, other: Self) -> Self
    where
        K: Ord,
    {
        self.merge(other, MergePolicy::Overwrite)
    }

    /// Merges `other` into this tree with [`MergePolicy::KeepExisting`]: only keys missing from
    /// this tree are taken from `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let a = Tree::from_list([(1, 2), (3, 4)]);
    /// let b = Tree::from_list([(2, 3), (4, 5), (3, 5)]);
    ///
    /// let merged = a.concat_keep_existing(b);
    /// assert_eq!(merged.to_list(), [(&1, &2), (&2, &3), (&3, &4), (&4, &5)]);
    /// ```
    pub fn concat_keep_existing(self, other: Self) -> Self
    where
        K: Ord,
    {
        self.merge(other, MergePolicy::KeepExisting)
    }
}
