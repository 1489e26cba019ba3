//! An owned, unbalanced Binary Search Tree over `i64` values.
//!
//! Every value is stored exactly once; inserting an existing value or deleting
//! a missing one is an error, and a failed operation leaves the tree exactly
//! as it was. Nodes own their children through `Option<Box<Node>>` links, so
//! the structure is strictly hierarchical with no parent pointers.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//! assert_eq!(tree.len(), 0);
//!
//! tree.insert(1).unwrap();
//! assert!(tree.contains(1));
//!
//! // Inserting the same value again is an error, not an overwrite.
//! assert!(tree.insert(1).is_err());
//!
//! tree.delete(1).unwrap();
//! assert!(!tree.contains(1));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::error::Error;
use crate::traversal::{ReverseKind, Traversal};

/// An absent child. The `None` sentinel marks the bottom of a subtree.
type Link = Option<Box<Node>>;

#[derive(Clone, Debug)]
struct Node {
    value: i64,
    left: Link,
    right: Link,
}

impl Node {
    fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The smallest value in the subtree rooted at this node, i.e. the
    /// in-order successor when called on a deleted node's right child.
    fn leftmost(&self) -> i64 {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node.value
    }
}

/// An unbalanced Binary Search Tree storing each `i64` value at most once.
///
/// All state is the tree shape itself: counts, sums, and heights are computed
/// on demand by walking the tree rather than cached.
#[derive(Clone, Debug, Default)]
pub struct OrderedTree {
    root: Link,
}

impl OrderedTree {
    /// Generates a new, empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree by inserting each value in the order given.
    ///
    /// A duplicate anywhere in the sequence fails the whole construction
    /// with [`Error::DuplicateValue`], the same as direct insertion would.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_values(vec![2, 1, 3]).unwrap();
    /// assert_eq!(tree.inorder(), vec![1, 2, 3]);
    ///
    /// assert!(OrderedTree::from_values(vec![2, 1, 2]).is_err());
    /// ```
    pub fn from_values<I>(values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value)?;
        }
        Ok(tree)
    }

    /// Inserts the given value into the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateValue`] if the value is already present. The
    /// tree is unchanged in that case: a new node is only ever created at the
    /// bottom of a fully successful descent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Error, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.insert(1), Err(Error::DuplicateValue(1)));
    /// ```
    pub fn insert(&mut self, value: i64) -> Result<(), Error> {
        insert_into(&mut self.root, value)
    }

    /// Returns whether the tree contains the given value, in `O(height)`
    /// comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(42));
    /// ```
    pub fn contains(&self, value: i64) -> bool {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            match value.cmp(&n.value) {
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node = n.right.as_deref(),
            }
        }
        false
    }

    /// Deletes the node containing the given value from the tree.
    ///
    /// A node with no children is unlinked, a node with one child is replaced
    /// by that child, and a node with two children takes on its in-order
    /// successor's value before the successor (which has at most a right
    /// child) is deleted from the right subtree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the value is absent, leaving the tree
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Error, OrderedTree};
    ///
    /// let mut tree = OrderedTree::from_values(vec![2, 1, 3]).unwrap();
    ///
    /// tree.delete(2).unwrap();
    /// assert_eq!(tree.inorder(), vec![1, 3]);
    /// assert_eq!(tree.delete(2), Err(Error::NotFound(2)));
    /// ```
    pub fn delete(&mut self, value: i64) -> Result<(), Error> {
        remove_from(&mut self.root, value)
    }

    /// Returns the values in ascending order: left subtree, node, right
    /// subtree.
    pub fn inorder(&self) -> Vec<i64> {
        let mut out = Vec::new();
        collect_inorder(self.root.as_deref(), &mut out);
        out
    }

    /// Returns the values in pre-order: node, left subtree, right subtree.
    pub fn preorder(&self) -> Vec<i64> {
        let mut out = Vec::new();
        collect_preorder(self.root.as_deref(), &mut out);
        out
    }

    /// Returns the values in post-order: left subtree, right subtree, node.
    pub fn postorder(&self) -> Vec<i64> {
        let mut out = Vec::new();
        collect_postorder(self.root.as_deref(), &mut out);
        out
    }

    /// Returns the values in breadth-first order, root first, each level left
    /// to right.
    pub fn level_order(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut queue = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            out.push(node.value);
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        out
    }

    /// Returns the values in descending order: right subtree, node, left
    /// subtree. The structural mirror of [`inorder`](Self::inorder).
    pub fn reversed_inorder(&self) -> Vec<i64> {
        let mut out = Vec::new();
        collect_reversed_inorder(self.root.as_deref(), &mut out);
        out
    }

    /// Returns the values in mirrored pre-order: node, right subtree, left
    /// subtree.
    pub fn reversed_preorder(&self) -> Vec<i64> {
        let mut out = Vec::new();
        collect_reversed_preorder(self.root.as_deref(), &mut out);
        out
    }

    /// Returns [`reversed_inorder`](Self::reversed_inorder) with the root's
    /// value moved to the end of the sequence.
    ///
    /// Deliberately *not* the structural mirror of
    /// [`postorder`](Self::postorder); the two differ whenever the root is
    /// not already last under mirroring.
    pub fn reversed_postorder(&self) -> Vec<i64> {
        let root = match self.root.as_deref() {
            Some(root) => root.value,
            None => return Vec::new(),
        };
        let mut out = self.reversed_inorder();
        out.retain(|&value| value != root);
        out.push(root);
        out
    }

    /// Lists the tree in the reversed form of the given base order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, ReverseKind};
    ///
    /// let tree = OrderedTree::from_values(vec![2, 1, 3]).unwrap();
    /// assert_eq!(tree.reverse(ReverseKind::Inorder), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&self, kind: ReverseKind) -> Vec<i64> {
        match kind {
            ReverseKind::Inorder => self.reversed_inorder(),
            ReverseKind::Preorder => self.reversed_preorder(),
            ReverseKind::Postorder => self.reversed_postorder(),
        }
    }

    /// Lists the tree in the given traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, Traversal};
    ///
    /// let tree = OrderedTree::from_values(vec![2, 1, 3]).unwrap();
    /// let order: Traversal = "level".parse().unwrap();
    ///
    /// assert_eq!(tree.to_list(order), vec![2, 1, 3]);
    /// ```
    pub fn to_list(&self, order: Traversal) -> Vec<i64> {
        match order {
            Traversal::Inorder => self.inorder(),
            Traversal::Preorder => self.preorder(),
            Traversal::Postorder => self.postorder(),
            Traversal::Level => self.level_order(),
            Traversal::RevInorder => self.reversed_inorder(),
            Traversal::RevPreorder => self.reversed_preorder(),
            Traversal::RevPostorder => self.reversed_postorder(),
        }
    }

    /// Returns a lazy in-order iterator over the values.
    ///
    /// Each call starts a fresh traversal; no cursor state is shared between
    /// calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_values(vec![2, 1, 3]).unwrap();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// assert_eq!(tree.iter().next(), Some(1));
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        count(self.root.as_deref())
    }

    /// Returns whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the sum of all values in the tree. An empty tree sums to 0.
    pub fn sum(&self) -> i64 {
        sum(self.root.as_deref())
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// An empty tree has height 0 and a single node has height 1.
    pub fn height(&self) -> usize {
        height(self.root.as_deref())
    }

    /// Returns the smallest value in the tree, found by following left
    /// children from the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] if the tree has no nodes.
    pub fn min(&self) -> Result<i64, Error> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(node.value)
    }

    /// Returns the largest value in the tree, found by following right
    /// children from the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] if the tree has no nodes.
    pub fn max(&self) -> Result<i64, Error> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(node.value)
    }

    /// Verifies the BST ordering invariant: every node's value lies strictly
    /// inside the open interval inherited from its ancestors.
    ///
    /// Always true after any sequence of successful mutations; exposed so
    /// tests can check the invariant structurally instead of assuming it.
    pub fn is_valid_bst(&self) -> bool {
        check_bounds(self.root.as_deref(), None, None)
    }

    /// Returns the number of edges from the root to the node holding the
    /// given value. The root itself is at depth 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_values(vec![2, 1, 3]).unwrap();
    ///
    /// assert_eq!(tree.depth_of(2), Ok(0));
    /// assert_eq!(tree.depth_of(3), Ok(1));
    /// ```
    pub fn depth_of(&self, value: i64) -> Result<usize, Error> {
        let mut node = self.root.as_deref();
        let mut depth = 0;
        while let Some(n) = node {
            match value.cmp(&n.value) {
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Equal => return Ok(depth),
                Ordering::Greater => node = n.right.as_deref(),
            }
            depth += 1;
        }
        Err(Error::NotFound(value))
    }

    /// Returns the value of the deepest node that has both given values in
    /// its subtree, by descending while both targets fall on the same side.
    ///
    /// Both values must be present in the tree; the result is unspecified
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] if the tree has no nodes.
    pub fn lowest_common_ancestor(&self, a: i64, b: i64) -> Result<i64, Error> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        loop {
            node = if a < node.value && b < node.value {
                node.left.as_deref().ok_or(Error::EmptyTree)?
            } else if a > node.value && b > node.value {
                node.right.as_deref().ok_or(Error::EmptyTree)?
            } else {
                return Ok(node.value);
            };
        }
    }

    /// Returns the k-th smallest value (1-indexed) by walking the in-order
    /// iterator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `k` is 0 or exceeds the node count.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_values(vec![2, 1, 3]).unwrap();
    ///
    /// assert_eq!(tree.kth_smallest(1), Ok(1));
    /// assert_eq!(tree.kth_smallest(3), Ok(3));
    /// assert!(tree.kth_smallest(4).is_err());
    /// ```
    pub fn kth_smallest(&self, k: usize) -> Result<i64, Error> {
        if let Some(value) = k.checked_sub(1).and_then(|n| self.iter().nth(n)) {
            return Ok(value);
        }
        Err(Error::OutOfRange { k, len: self.len() })
    }

    /// Renders the tree shape as multi-line text, right subtree above, left
    /// subtree below, with indentation encoding depth.
    ///
    /// A debugging aid; the exact glyphs are cosmetic and not a compatibility
    /// contract. An empty tree renders as `[empty tree]`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self.root.as_deref() {
            Some(root) => render_node(root, "", true, &mut out),
            None => out.push_str("[empty tree]\n"),
        }
        out
    }
}

impl fmt::Display for OrderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderedTree(inorder={:?})", self.inorder())
    }
}

impl<'a> IntoIterator for &'a OrderedTree {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// A lazy in-order iterator over a tree's values.
///
/// Keeps an explicit stack of the unvisited ancestors instead of recursing,
/// so partial consumption (e.g. finding the k-th smallest value) only visits
/// the nodes it needs.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.value)
    }
}

fn insert_into(link: &mut Link, value: i64) -> Result<(), Error> {
    match link {
        None => {
            *link = Some(Box::new(Node::new(value)));
            Ok(())
        }
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => insert_into(&mut node.left, value),
            Ordering::Equal => Err(Error::DuplicateValue(value)),
            Ordering::Greater => insert_into(&mut node.right, value),
        },
    }
}

fn remove_from(link: &mut Link, value: i64) -> Result<(), Error> {
    let node = match link {
        Some(node) => node,
        None => return Err(Error::NotFound(value)),
    };
    match value.cmp(&node.value) {
        Ordering::Less => remove_from(&mut node.left, value),
        Ordering::Greater => remove_from(&mut node.right, value),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // At most one child: the node's slot is overwritten with that
            // child (or `None`), dropping the node.
            (None, child) | (child, None) => {
                *link = child;
                Ok(())
            }
            // Two children: overwrite the value with the in-order successor's
            // and delete the successor from the right subtree, where it has
            // at most a right child.
            (Some(left), Some(right)) => {
                let successor = right.leftmost();
                node.value = successor;
                node.left = Some(left);
                node.right = Some(right);
                remove_from(&mut node.right, successor)
            }
        },
    }
}

fn collect_inorder(node: Option<&Node>, out: &mut Vec<i64>) {
    if let Some(node) = node {
        collect_inorder(node.left.as_deref(), out);
        out.push(node.value);
        collect_inorder(node.right.as_deref(), out);
    }
}

fn collect_preorder(node: Option<&Node>, out: &mut Vec<i64>) {
    if let Some(node) = node {
        out.push(node.value);
        collect_preorder(node.left.as_deref(), out);
        collect_preorder(node.right.as_deref(), out);
    }
}

fn collect_postorder(node: Option<&Node>, out: &mut Vec<i64>) {
    if let Some(node) = node {
        collect_postorder(node.left.as_deref(), out);
        collect_postorder(node.right.as_deref(), out);
        out.push(node.value);
    }
}

fn collect_reversed_inorder(node: Option<&Node>, out: &mut Vec<i64>) {
    if let Some(node) = node {
        collect_reversed_inorder(node.right.as_deref(), out);
        out.push(node.value);
        collect_reversed_inorder(node.left.as_deref(), out);
    }
}

fn collect_reversed_preorder(node: Option<&Node>, out: &mut Vec<i64>) {
    if let Some(node) = node {
        out.push(node.value);
        collect_reversed_preorder(node.right.as_deref(), out);
        collect_reversed_preorder(node.left.as_deref(), out);
    }
}

fn count(node: Option<&Node>) -> usize {
    node.map_or(0, |n| {
        1 + count(n.left.as_deref()) + count(n.right.as_deref())
    })
}

fn sum(node: Option<&Node>) -> i64 {
    node.map_or(0, |n| {
        n.value + sum(n.left.as_deref()) + sum(n.right.as_deref())
    })
}

fn height(node: Option<&Node>) -> usize {
    node.map_or(0, |n| {
        1 + height(n.left.as_deref()).max(height(n.right.as_deref()))
    })
}

fn check_bounds(node: Option<&Node>, low: Option<i64>, high: Option<i64>) -> bool {
    match node {
        None => true,
        Some(n) => {
            low.map_or(true, |low| low < n.value)
                && high.map_or(true, |high| n.value < high)
                && check_bounds(n.left.as_deref(), low, Some(n.value))
                && check_bounds(n.right.as_deref(), Some(n.value), high)
        }
    }
}

fn render_node(node: &Node, prefix: &str, is_left: bool, out: &mut String) {
    if let Some(right) = node.right.as_deref() {
        let deeper = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        render_node(right, &deeper, false, out);
    }
    out.push_str(prefix);
    out.push_str(if is_left { "└── " } else { "┌── " });
    out.push_str(&node.value.to_string());
    out.push('\n');
    if let Some(left) = node.left.as_deref() {
        let deeper = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        render_node(left, &deeper, true, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: &[i64]) -> OrderedTree {
        OrderedTree::from_values(values.iter().copied()).unwrap()
    }

    #[test]
    fn test_delete_no_children() {
        let mut tree = tree_of(&[1, 2]);
        tree.delete(2).unwrap();

        assert!(tree.contains(1));
        assert!(!tree.contains(2));
        assert!(tree.is_valid_bst());
    }

    #[test]
    fn test_delete_no_left_child() {
        let mut tree = tree_of(&[1, 2]);
        tree.delete(1).unwrap();

        assert!(!tree.contains(1));
        assert!(tree.contains(2));
    }

    #[test]
    fn test_delete_no_right_child() {
        let mut tree = tree_of(&[2, 1]);
        tree.delete(2).unwrap();

        assert!(tree.contains(1));
        assert!(!tree.contains(2));
    }

    #[test]
    fn test_delete_two_children_with_no_grandchildren() {
        let mut tree = tree_of(&[2, 1, 3]);
        tree.delete(2).unwrap();

        assert_eq!(tree.inorder(), vec![1, 3]);
        assert!(tree.is_valid_bst());
    }

    #[test]
    fn test_delete_two_children_with_deep_successor() {
        // Deleting 5 promotes 6, the leftmost node of the right subtree,
        // which itself has a right child to splice in.
        let mut tree = tree_of(&[5, 3, 8, 6, 9, 7]);
        tree.delete(5).unwrap();

        assert_eq!(tree.inorder(), vec![3, 6, 7, 8, 9]);
        assert_eq!(tree.preorder(), vec![6, 3, 8, 7, 9]);
        assert!(tree.is_valid_bst());
    }

    #[test]
    fn test_delete_root_repeatedly() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        for expected_len in (0..7).rev() {
            let root = tree.preorder()[0];
            tree.delete(root).unwrap();
            assert_eq!(tree.len(), expected_len);
            assert!(tree.is_valid_bst());
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn test_failed_insert_leaves_tree_unchanged() {
        let mut tree = tree_of(&[2, 1, 3]);
        let before = tree.inorder();

        assert_eq!(tree.insert(3), Err(Error::DuplicateValue(3)));
        assert_eq!(tree.inorder(), before);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_failed_delete_leaves_tree_unchanged() {
        let mut tree = tree_of(&[2, 1, 3]);
        let before = tree.preorder();

        assert_eq!(tree.delete(42), Err(Error::NotFound(42)));
        assert_eq!(tree.preorder(), before);
    }

    #[test]
    fn test_height() {
        let mut tree = OrderedTree::new();
        assert_eq!(tree.height(), 0);

        tree.insert(1).unwrap();
        assert_eq!(tree.height(), 1);

        // Insert a value to the right making it taller.
        tree.insert(2).unwrap();
        assert_eq!(tree.height(), 2);

        // Insert a value to the left not changing the overall height.
        tree.insert(0).unwrap();
        assert_eq!(tree.height(), 2);

        // Delete that left value to get to the previous heights.
        tree.delete(0).unwrap();
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_extreme_values_are_valid() {
        // The open-interval check must not need sentinel bounds beyond i64.
        let tree = tree_of(&[0, i64::MIN, i64::MAX]);
        assert!(tree.is_valid_bst());
        assert_eq!(tree.min(), Ok(i64::MIN));
        assert_eq!(tree.max(), Ok(i64::MAX));
    }

    #[test]
    fn test_iterator_is_restartable() {
        let tree = tree_of(&[2, 1, 3]);

        let mut first = tree.iter();
        assert_eq!(first.next(), Some(1));

        // A second traversal starts over regardless of the first's cursor.
        assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(first.next(), Some(2));
    }

    #[test]
    fn test_display() {
        let tree = tree_of(&[2, 1, 3]);
        assert_eq!(tree.to_string(), "OrderedTree(inorder=[1, 2, 3])");
    }
}

#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and an ordered set.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same membership as the model.
    fn do_ops(ops: &[Op<i8>], tree: &mut OrderedTree, set: &mut BTreeSet<i64>) {
        for op in ops {
            match *op {
                Op::Insert(v) => {
                    assert_eq!(tree.insert(v as i64).is_ok(), set.insert(v as i64));
                }
                Op::Remove(v) => {
                    assert_eq!(tree.delete(v as i64).is_ok(), set.remove(&(v as i64)));
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = OrderedTree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.is_valid_bst()
                && tree.len() == set.len()
                && tree.inorder() == set.iter().copied().collect::<Vec<_>>()
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let mut tree = OrderedTree::new();
            for &x in &xs {
                // Duplicates in the input are rejected but harmless here.
                let _ = tree.insert(x as i64);
            }

            xs.iter().all(|&x| tree.contains(x as i64))
        }
    }
}
