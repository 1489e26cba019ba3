//! Closed enumerations of the traversal orders a tree can be listed in.
//!
//! The orders are fixed at compile time; names arriving as strings (from a
//! CLI, a config file, ...) are validated once at the boundary via
//! [`FromStr`], which reports [`Error::UnknownOrder`] or
//! [`Error::UnsupportedTraversal`] for anything unrecognized.

use std::str::FromStr;

use crate::error::Error;

/// A traversal order accepted by [`OrderedTree::to_list`](crate::OrderedTree::to_list).
///
/// # Examples
///
/// ```
/// use ordered_tree::{Error, Traversal};
///
/// assert_eq!("level".parse::<Traversal>(), Ok(Traversal::Level));
/// assert_eq!(
///     "bar".parse::<Traversal>(),
///     Err(Error::UnknownOrder("bar".into())),
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Left subtree, node, right subtree: ascending order.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
    /// Breadth-first, level by level, left child before right.
    Level,
    /// Right subtree, node, left subtree: descending order.
    RevInorder,
    /// Node, right subtree, left subtree.
    RevPreorder,
    /// Descending order with the root's value moved to the end. See
    /// [`OrderedTree::reversed_postorder`](crate::OrderedTree::reversed_postorder).
    RevPostorder,
}

impl FromStr for Traversal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "inorder" => Ok(Self::Inorder),
            "preorder" => Ok(Self::Preorder),
            "postorder" => Ok(Self::Postorder),
            "level" => Ok(Self::Level),
            "rev_inorder" => Ok(Self::RevInorder),
            "rev_preorder" => Ok(Self::RevPreorder),
            "rev_postorder" => Ok(Self::RevPostorder),
            other => Err(Error::UnknownOrder(other.to_string())),
        }
    }
}

/// A base order accepted by [`OrderedTree::reverse`](crate::OrderedTree::reverse),
/// which lists the tree in the reversed form of that order.
///
/// # Examples
///
/// ```
/// use ordered_tree::{Error, ReverseKind};
///
/// assert_eq!("inorder".parse::<ReverseKind>(), Ok(ReverseKind::Inorder));
/// assert_eq!(
///     "invalid".parse::<ReverseKind>(),
///     Err(Error::UnsupportedTraversal("invalid".into())),
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReverseKind {
    /// Reverse the in-order traversal.
    Inorder,
    /// Reverse the pre-order traversal.
    Preorder,
    /// Reverse the post-order traversal.
    Postorder,
}

impl FromStr for ReverseKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "inorder" => Ok(Self::Inorder),
            "preorder" => Ok(Self::Preorder),
            "postorder" => Ok(Self::Postorder),
            other => Err(Error::UnsupportedTraversal(other.to_string())),
        }
    }
}
