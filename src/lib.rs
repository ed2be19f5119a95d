//! An ordered key-value dictionary backed by a Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, the
//! value associated with it, and sometimes child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Together these mean each key appears at most once, and visiting the left
//! subtree, then the subtree root, then the right subtree yields every entry
//! in ascending key order. That's what [`Tree`] is for: a dictionary whose
//! entries come out sorted without an explicit sort step, and which composes
//! through [`map`][Tree::map], [`filter`][Tree::filter],
//! [`reduce`][Tree::reduce] and [`concat`][Tree::concat].
//!
//! ## Complexity
//!
//! Searching, adding, and removing take `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). This tree never
//! rebalances itself, so its height is decided by insertion order alone: random
//! insertion order gives a height around `O(lg N)`, while inserting keys in
//! sorted order gives a height of `N` and linear-time operations. All
//! operations walk the tree with loops or explicit stacks, so even such a
//! degenerate tree won't overflow the call stack.
//!
//! The tree is not synchronized. Shared access from several threads follows the
//! usual `Send`/`Sync` rules for `&Tree` and `&mut Tree`.
//!
//! # Examples
//!
//! ```
//! use bst_dict::Tree;
//!
//! let mut tree = Tree::new();
//! tree.add(5, "apple");
//! tree.add(3, "banana");
//! tree.add(7, "cherry");
//! tree.add(4, "date");
//!
//! assert_eq!(
//!     tree.to_list(),
//!     [(&3, &"banana"), (&4, &"date"), (&5, &"apple"), (&7, &"cherry")]
//! );
//! assert_eq!(tree.search(&4), Some(&"date"));
//!
//! tree.remove(&7);
//! assert_eq!(tree.to_list(), [(&3, &"banana"), (&4, &"date"), (&5, &"apple")]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod functional;
pub mod iter;
#[cfg(feature = "serde")]
mod serde;
mod tree;


pub use functional::MergePolicy;
pub use tree::Tree;
