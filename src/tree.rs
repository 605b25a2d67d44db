use std::{
    cmp::Ordering,
    fmt, mem,
};

use log::debug;
use rand::Rng;

use crate::compare::Compare;
use crate::depth::Depth;
use crate::error::Error;
use crate::iter::Iter;
use crate::node::{Arena, Color, Node, NodeId};
use crate::stats::Stats;

/// TreeSet manage a sorted set of unique values using a
/// [red-black][rbtree] tree, ordered by the comparator supplied at
/// construction time.
///
/// To iterate over a set:
///
/// ```
/// use rbtree_set::{compare::natural, TreeSet};
///
/// let set = TreeSet::load_from(natural::<i64>, vec![3, 1, 2]);
/// let values: Vec<i64> = set.iter().cloned().collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
///
/// [rbtree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct TreeSet<T, C = fn(&T, &T) -> Ordering> {
    pub(crate) nodes: Arena<T>,
    pub(crate) root: Option<NodeId>,
    n_count: usize, // number of entries in the tree.
    compare: C,
}

/// Different ways to construct a new TreeSet instance.
impl<T, C> TreeSet<T, C>
where
    C: Compare<T>,
{
    /// Create an empty set ordered by `compare`.
    pub fn new(compare: C) -> TreeSet<T, C> {
        TreeSet {
            nodes: Default::default(),
            root: Default::default(),
            n_count: Default::default(),
            compare,
        }
    }

    /// Create a new set ordered by `compare` and load it with values from
    /// `iter`. Values need not be sorted, duplicates are dropped.
    pub fn load_from<I>(compare: C, iter: I) -> TreeSet<T, C>
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = TreeSet::new(compare);
        set.extend(iter);
        set
    }
}

/// Maintenance API.
impl<T, C> TreeSet<T, C> {
    /// Return number of entries in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.n_count = 0;
    }

    /// Return the comparator ordering this set.
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Return quickly with basic statisics, only entries() and node_size()
    /// are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.n_count, mem::size_of::<Option<Node<T>>>())
    }
}

/// Write operations on TreeSet instance.
impl<T, C> TreeSet<T, C>
where
    C: Compare<T>,
{
    /// Add `value` to the set. Return false, dropping `value`, if an
    /// equal value is already present.
    pub fn add(&mut self, value: T) -> bool {
        self.insert(value).1
    }

    /// Set `value` into the set. If an equal value is present it is
    /// overwritten in place and returned, otherwise `value` is inserted.
    pub fn replace(&mut self, value: T) -> Option<T> {
        match self.lookup(&value) {
            Some(id) => Some(mem::replace(&mut self.nodes[id].value, value)),
            None => {
                self.insert(value);
                None
            }
        }
    }

    /// Remove the value equal to `key` and return it. If no such value
    /// is present, remove is a no-op.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let id = self.lookup(key)?;
        Some(self.delete_node(id))
    }

    /// Remove every value equal to an item of `keys`, return the number of
    /// values removed.
    pub fn remove_all<'a, I>(&mut self, keys: I) -> usize
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        keys.into_iter()
            .filter(|key| self.remove(key).is_some())
            .count()
    }

    /// Retain only the values for which `f` returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor();
        while cursor.move_next() {
            let keep = cursor.value().map_or(true, |value| f(value));
            if !keep {
                // positioned on a live entry, remove can't fail.
                let _ = cursor.remove();
            }
        }
    }

    /// Remove and return the smallest value.
    pub fn poll_head(&mut self) -> Option<T> {
        let id = self.head()?;
        Some(self.delete_node(id))
    }

    /// Remove and return the largest value.
    pub fn poll_tail(&mut self) -> Option<T> {
        let id = self.tail()?;
        Some(self.delete_node(id))
    }

    /// Validate the tree with following rules:
    ///
    /// * Root is black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Every child links back to its parent.
    /// * Values are in strictly increasing comparator order.
    /// * Number of reachable nodes equals len().
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, Error> {
        self.do_validate().map_err(|err| {
            debug!("validate failed: {}", err);
            err
        })
    }
}

/// Read operations on TreeSet instance.
impl<T, C> TreeSet<T, C>
where
    C: Compare<T>,
{
    /// Get the value equal to `key`.
    pub fn get(&self, key: &T) -> Option<&T> {
        self.lookup(key).map(|id| &self.nodes[id].value)
    }

    /// Check whether a value equal to `key` is present.
    pub fn contains(&self, key: &T) -> bool {
        self.lookup(key).is_some()
    }

    /// Check whether every item of `keys` is present. An empty `keys`
    /// is always contained.
    pub fn contains_all<'a, I>(&self, keys: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        keys.into_iter().all(|key| self.contains(key))
    }

    /// Return the largest value less than or equal to `key`.
    pub fn floor(&self, key: &T) -> Option<&T> {
        let mut floor = None;
        let mut node = self.root;
        while let Some(id) = node {
            let nref = &self.nodes[id];
            node = match self.compare.compare(key, &nref.value) {
                Ordering::Equal => return Some(&nref.value),
                Ordering::Less => nref.left,
                Ordering::Greater => {
                    floor = Some(&nref.value);
                    nref.right
                }
            };
        }
        floor
    }

    /// Return the smallest value greater than or equal to `key`.
    pub fn ceiling(&self, key: &T) -> Option<&T> {
        let mut ceiling = None;
        let mut node = self.root;
        while let Some(id) = node {
            let nref = &self.nodes[id];
            node = match self.compare.compare(key, &nref.value) {
                Ordering::Equal => return Some(&nref.value),
                Ordering::Less => {
                    ceiling = Some(&nref.value);
                    nref.left
                }
                Ordering::Greater => nref.right,
            };
        }
        ceiling
    }
}

/// Traversal, these don't need the comparator.
impl<T, C> TreeSet<T, C> {
    /// Return the smallest value, without removing it.
    pub fn peek_head(&self) -> Option<&T> {
        self.head().map(|id| &self.nodes[id].value)
    }

    /// Return the largest value, without removing it.
    pub fn peek_tail(&self) -> Option<&T> {
        self.tail().map(|id| &self.nodes[id].value)
    }

    /// Return an iterator over all values in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head(), self.tail(), self.n_count)
    }

    /// Return a clone of all values in sorted order.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Call `f` with (position, value) for each value in sorted order,
    /// stop when `f` returns false.
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        for (i, value) in self.iter().enumerate() {
            if !f(i, value) {
                break;
            }
        }
    }

    /// Same as [`TreeSet::each`] walking from the largest value to the
    /// smallest. Positions count down from len() - 1.
    pub fn reverse_each<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        let n = self.n_count;
        for (i, value) in self.iter().rev().enumerate() {
            if !f(n - 1 - i, value) {
                break;
            }
        }
    }

    /// Return a random entry from this set.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<&T> {
        let mut id = self.root?;

        let mut at_depth = rng.gen::<u8>() % 40;
        loop {
            let next = match rng.gen::<u8>() % 2 {
                0 => self.nodes[id].left,
                1 => self.nodes[id].right,
                _ => unreachable!(),
            };
            match next {
                Some(next) if at_depth > 0 => {
                    at_depth -= 1;
                    id = next;
                }
                _ => break Some(&self.nodes[id].value),
            }
        }
    }

    /// Render the shape of the tree, right subtree on top. With `colors`
    /// each entry is prefixed with (R) or (B).
    pub fn graph(&self, colors: bool) -> String
    where
        T: fmt::Debug,
    {
        match self.root {
            None => "(empty)".to_string(),
            Some(root) => {
                let mut out = String::new();
                self.graph_node(&mut out, root, "", true, colors);
                out
            }
        }
    }

    fn graph_node(&self, out: &mut String, id: NodeId, prefix: &str, tail: bool, colors: bool)
    where
        T: fmt::Debug,
    {
        let node = &self.nodes[id];
        if let Some(right) = node.right {
            let prefix = format!("{}{}", prefix, if tail { "│   " } else { "    " });
            self.graph_node(out, right, &prefix, false, colors);
        }

        out.push_str(prefix);
        out.push_str(if tail { "└── " } else { "┌── " });
        if colors {
            out.push_str(match node.color {
                Color::Red => "(R) ",
                Color::Black => "(B) ",
            });
        }
        out.push_str(&format!("{:?}\n", node.value));

        if let Some(left) = node.left {
            let prefix = format!("{}{}", prefix, if tail { "    " } else { "│   " });
            self.graph_node(out, left, &prefix, true, colors);
        }
    }

    pub(crate) fn head(&self) -> Option<NodeId> {
        self.root.map(|root| self.nodes.leftmost(root))
    }

    pub(crate) fn tail(&self) -> Option<NodeId> {
        self.root.map(|root| self.nodes.rightmost(root))
    }
}

impl<T, C> TreeSet<T, C>
where
    C: Compare<T>,
{
    pub(crate) fn lookup(&self, key: &T) -> Option<NodeId> {
        let mut node = self.root;
        while let Some(id) = node {
            let nref = &self.nodes[id];
            node = match self.compare.compare(key, &nref.value) {
                Ordering::Less => nref.left,
                Ordering::Greater => nref.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub(crate) fn compare(&self, a: &T, b: &T) -> Ordering {
        self.compare.compare(a, b)
    }

    /// Insert `value` and return its node. If an equal value exists,
    /// return that node and false, dropping `value`.
    pub(crate) fn insert(&mut self, value: T) -> (NodeId, bool) {
        let mut parent = match self.root {
            Some(root) => root,
            None => {
                let id = self.nodes.alloc(value, None);
                self.nodes[id].color = Color::Black;
                self.root = Some(id);
                self.n_count = 1;
                return (id, true);
            }
        };

        let cmp = loop {
            let nref = &self.nodes[parent];
            let cmp = self.compare.compare(&value, &nref.value);
            let next = match cmp {
                Ordering::Less => nref.left,
                Ordering::Greater => nref.right,
                Ordering::Equal => return (parent, false),
            };
            match next {
                Some(next) => parent = next,
                None => break cmp,
            }
        };

        let id = self.nodes.alloc(value, Some(parent));
        if cmp == Ordering::Less {
            self.nodes[parent].left = Some(id);
        } else {
            self.nodes[parent].right = Some(id);
        }
        self.fix_after_insertion(id);
        self.n_count += 1;
        (id, true)
    }

    /// Unlink node `p` from the tree and return its value. If `p` has
    /// both children, `p` takes over its successor's value and the
    /// successor's node is the one released.
    pub(crate) fn delete_node(&mut self, p: NodeId) -> T {
        self.n_count -= 1;

        let mut p = p;
        if let (Some(_), Some(right)) = (self.nodes[p].left, self.nodes[p].right) {
            let s = self.nodes.leftmost(right);
            self.nodes.swap_values(p, s);
            p = s;
        }

        let replacement = self.nodes[p].left.or(self.nodes[p].right);
        let parent = self.nodes[p].parent;
        match (replacement, parent) {
            (Some(replacement), _) => {
                self.nodes[replacement].parent = parent;
                self.replace_child(parent, p, Some(replacement));
                let black = self.nodes[p].is_black();
                let node = &mut self.nodes[p];
                node.left = None;
                node.right = None;
                node.parent = None;
                if black {
                    self.fix_after_deletion(replacement);
                }
            }
            (None, None) => self.root = None,
            (None, Some(_)) => {
                // black leaf stays linked as the double-black placeholder.
                if self.nodes[p].is_black() {
                    self.fix_after_deletion(p);
                }
                if let Some(parent) = self.nodes[p].parent {
                    self.replace_child(Some(parent), p, None);
                    self.nodes[p].parent = None;
                }
            }
        }

        self.nodes.free(p)
    }

    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) if self.nodes[parent].left == Some(old) => self.nodes[parent].left = new,
            Some(parent) => self.nodes[parent].right = new,
        }
    }

    fn do_validate(&self) -> Result<Stats, Error> {
        if self.nodes.color_of(self.root) == Color::Red {
            return Err(Error::RedRoot);
        }

        let mut stats = self.stats();
        let mut depths = Depth::new();
        let mut reachable = 0;
        let blacks = self.validate_tree(self.root, None, false, 0, 0, &mut depths, &mut reachable)?;
        if reachable != self.n_count {
            let len = self.n_count;
            return Err(Error::SizeMismatch { len, reachable });
        }

        let mut iter = self.iter();
        if let Some(mut prev) = iter.next() {
            for (i, value) in iter.enumerate() {
                if self.compare.compare(prev, value) != Ordering::Less {
                    return Err(Error::SortError(i + 1));
                }
                prev = value;
            }
        }

        stats.set_blacks(blacks);
        stats.set_depths(depths);
        Ok(stats)
    }

    #[allow(clippy::too_many_arguments)]
    fn validate_tree(
        &self,
        node: Option<NodeId>,
        parent: Option<NodeId>,
        fromred: bool,
        mut nb: usize,
        depth: usize,
        depths: &mut Depth,
        reachable: &mut usize,
    ) -> Result<usize, Error> {
        let id = match node {
            None => {
                depths.sample(depth);
                return Ok(nb);
            }
            Some(id) => id,
        };

        let nref = &self.nodes[id];
        if nref.parent != parent {
            return Err(Error::BrokenParentLink(depth));
        }
        *reachable += 1;

        let red = !nref.is_black();
        if fromred && red {
            return Err(Error::ConsecutiveReds);
        }
        if !red {
            nb += 1;
        }
        let (left, right) = (nref.left, nref.right);
        let lblacks = self.validate_tree(left, node, red, nb, depth + 1, depths, reachable)?;
        let rblacks = self.validate_tree(right, node, red, nb, depth + 1, depths, reachable)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(Error::UnbalancedBlacks(err));
        }
        Ok(lblacks)
    }
}

impl<T, C> Extend<T> for TreeSet<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> fmt::Debug for TreeSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
