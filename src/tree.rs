//! The tree itself: nodes, links, and the point operations (add, search, set, remove).
//!
//! Every operation is a single descent from the root. The tree never rebalances, so the cost of
//! each one is `O(height)` and the height depends entirely on insertion order. Inserting keys in
//! sorted order produces a tree shaped like a linked list. For that reason the descents are
//! written as loops rather than recursion, so a degenerate tree can't exhaust the call stack.
//!
//! # Examples
//!
//! ```
//! use bst_dict::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.add(1, 2);
//! assert_eq!(tree.search(&1), Some(&2));
//!
//! // Adding a new value for the same key overwrites the value.
//! tree.add(1, 3);
//! assert_eq!(tree.search(&1), Some(&3));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a node returns its value.
//! assert_eq!(tree.remove(&1), Some(3));
//! assert_eq!(tree.search(&1), None);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

/// An owned, possibly empty, subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A `Node` has a key that is used for searching/sorting and a value that is associated with that
/// key. Each node exclusively owns its two children.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// An ordered dictionary backed by an unbalanced Binary Search Tree.
///
/// Keys are kept unique and in ascending order, so iterating the tree always yields entries
/// sorted by key without an explicit sort step. Two trees compare equal when they hold the same
/// ascending sequence of entries, regardless of their shape.
pub struct Tree<K, V> {
    pub(crate) root: Link<K, V>,
    pub(crate) len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        // Unlink every node before it's dropped so dropping never recurses.
        let mut pending: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K, V> Clone for Tree<K, V>
where
    K: Clone,
    V: Clone,
{
    // Rebuilds the tree bottom-up in post-order so the clone keeps the original's shape.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<K, V>>> = Vec::new();
        let mut pending: Vec<(&Node<K, V>, bool)> =
            self.root.as_deref().map(|root| (root, false)).into_iter().collect();
        while let Some((node, children_built)) = pending.pop() {
            if children_built {
                // The right subtree finished last so its clone is on top.
                let right = node.right.as_ref().and_then(|_| built.pop());
                let left = node.left.as_ref().and_then(|_| built.pop());
                built.push(Box::new(Node {
                    key: node.key.clone(),
                    value: node.value.clone(),
                    left,
                    right,
                }));
            } else {
                pending.push((node, true));
                pending.extend(node.right.as_deref().map(|right| (right, false)));
                pending.extend(node.left.as_deref().map(|left| (left, false)));
            }
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> PartialEq for Tree<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K, V> Eq for Tree<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V> FromIterator<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V> Extend<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Generates a new, empty `Tree`. The empty tree is the identity element of
    /// [`concat`][Tree::concat] under either merge policy.
    pub fn empty() -> Self {
        Self::new()
    }

    /// Builds a tree by calling [`add`][Tree::add] for each pair in order. When the input
    /// repeats a key, the later pair wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let tree = Tree::from_list([(2, "b"), (1, "a"), (2, "c")]);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.search(&2), Some(&"c"));
    /// ```
    pub fn from_list<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Ord,
    {
        pairs.into_iter().collect()
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    ///
    /// Since the tree is never rebalanced this can be as large as [`len`][Tree::len].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let sorted = Tree::from_list((0..8).map(|k| (k, ())));
    /// assert_eq!(sorted.height(), 8);
    ///
    /// let balanced = Tree::from_list([3, 1, 5, 0, 2, 4, 6].map(|k| (k, ())));
    /// assert_eq!(balanced.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<K, V>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            pending.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Inserts the given value into the tree stored at the given key. Adding a value for an
    /// existing key overwrites its value in place and leaves the length unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.add(1, 2);
    /// assert_eq!(tree.search(&1), Some(&2));
    ///
    /// tree.add(1, 3);
    /// assert_eq!(tree.search(&1), Some(&3));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => {
                    node.value = value;
                    return;
                }
                Ordering::Greater => link = &mut node.right,
            }
        }

        *link = Some(Node::new_boxed(key, value));
        self.len += 1;
    }

    /// Inserts the entry only if the key is absent. Returns whether the entry was inserted; an
    /// existing value is never touched.
    pub(crate) fn add_if_absent(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => link = &mut node.right,
            }
        }

        *link = Some(Node::new_boxed(key, value));
        self.len += 1;
        true
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1, 2);
    ///
    /// assert_eq!(tree.search(&1), Some(&2));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => link = &node.right,
            }
        }
        None
    }

    /// Like [`search`][Tree::search] but hands out a mutable reference to the value.
    pub fn search_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Greater => link = &mut node.right,
            }
        }
        None
    }

    /// Whether some node has the given key.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Overwrites the value stored at an existing key and returns the previous value. Unlike
    /// [`add`][Tree::add], `set` never creates a key: if `key` is absent the tree is unchanged,
    /// `value` is dropped and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let mut tree = Tree::from_list([(1, "one")]);
    ///
    /// assert_eq!(tree.set(&1, "uno"), Some("one"));
    /// assert_eq!(tree.set(&2, "dos"), None);
    ///
    /// assert_eq!(tree.search(&1), Some(&"uno"));
    /// assert_eq!(tree.search(&2), None);
    /// ```
    pub fn set(&mut self, key: &K, value: V) -> Option<V>
    where
        K: Ord,
    {
        self.search_mut(key).map(|slot| std::mem::replace(slot, value))
    }

    /// Whether any entry holds a value equal to `value`.
    ///
    /// The tree is ordered by key, not by value, so this is a linear scan over every entry
    /// rather than a lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let tree = Tree::from_list([(1, "one"), (2, "two")]);
    ///
    /// assert!(tree.member(&"two"));
    /// assert!(!tree.member(&"three"));
    /// ```
    pub fn member(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Deletes the node containing the given key from the tree and returns its value. If the tree
    /// does not contain a node with the key, nothing happens and `None` is returned.
    ///
    /// A node with two children is replaced by its in-order successor, the leftmost node of its
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dict::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1, 2);
    ///
    /// assert_eq!(tree.remove(&1), Some(2));
    /// assert_eq!(tree.remove(&1), None);
    /// assert_eq!(tree.len(), 0);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let slot = Self::find_link_mut(&mut self.root, key)?;
        let mut node = slot.take()?;

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(mut right)) => {
                let mut successor = match Self::detach_min(&mut right.left) {
                    Some(mut successor) => {
                        successor.right = Some(right);
                        successor
                    }
                    // The right child has no left subtree so it's the successor itself.
                    None => right,
                };
                debug_assert!(successor.key > left.key);
                debug_assert!(successor.left.is_none());
                successor.left = Some(left);
                Some(successor)
            }
        };

        self.len -= 1;
        Some(node.value)
    }

    /// Walks down from `link` to the link holding `key`. Returns `None` when the key is absent.
    fn find_link_mut<'a>(mut link: &'a mut Link<K, V>, key: &K) -> Option<&'a mut Link<K, V>>
    where
        K: Ord,
    {
        loop {
            let ordering = key.cmp(&link.as_ref()?.key);
            if ordering == Ordering::Equal {
                return Some(link);
            }

            let node = link.as_mut()?;
            link = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }

    /// Unlinks the minimum node of the subtree in `link`, splicing its right child into its place.
    fn detach_min(mut link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }

        let mut min = link.take()?;
        *link = min.right.take();
        Some(min)
    }

    /// Walks the whole tree and panics if the ordering, uniqueness, or length invariants don't
    /// hold.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self)
    where
        K: Ord,
    {
        // Strictly ascending in-order keys covers both the ordering and uniqueness invariants.
        let mut num_nodes = 0;
        let mut previous: Option<&K> = None;
        for (key, _) in self.iter() {
            if let Some(previous) = previous {
                assert!(previous < key, "keys out of order");
            }
            previous = Some(key);
            num_nodes += 1;
        }

        // Count the nodes independently of the iterator's own bookkeeping.
        let mut linked = 0;
        let mut pending: Vec<&Node<K, V>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            linked += 1;
            if let Some(left) = node.left.as_deref() {
                assert!(left.key < node.key, "left child not smaller than parent");
                pending.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                assert!(right.key > node.key, "right child not greater than parent");
                pending.push(right);
            }
        }

        assert_eq!(num_nodes, linked);
        assert_eq!(self.len, linked);
    }
}
