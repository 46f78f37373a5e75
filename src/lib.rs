//! This crate exposes Binary Search Trees (BSTs) over unique, ordered
//! elements, in two flavors: a plain unbalanced tree and a self-balancing
//! tree that also answers order-statistic queries.
//!
//! ## Binary Search Tree
//!
//! A BST stores its elements in `Node`s, each owning up to two child
//! `Node`s, arranged so that:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold elements
//!    less than its own element.
//! 2. For every `Node`, all the `Node`s in its right subtree hold elements
//!    greater than its own element.
//!
//! Searching then only ever follows one child per comparison, so lookups
//! cost `O(height)`, which is only a win if the height stays small. The
//! [`plain`] tree makes no effort there: inserting elements in sorted
//! order chains them into a list and the height grows to `N`.
//!
//! ## Height balance
//!
//! The [`avl`] tree repairs its shape as it goes. Every node remembers the
//! height of its subtree, and whenever an insertion or removal leaves some
//! node's children differing in height by more than one, a local rotation
//! of two or three nodes restores the bound without disturbing the sorted
//! order. That pins the height to `O(lg N)`, and with it every operation's
//! cost.
//!
//! ## Order statistics
//!
//! The [`avl`] nodes additionally remember the sizes of their subtrees,
//! which is enough to walk straight to the k-th smallest element: compare
//! `k` against the size of the left subtree and descend one side or stop.
//! See [`avl::Tree::rank`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod plain;

#[cfg(test)]
mod test;
