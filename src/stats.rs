use std::fmt;

use crate::depth::Depth;

/// Statistics on [`TreeSet`](crate::TreeSet). Serves two purpose:
///
/// * To get partial but quick statistics via `TreeSet::stats` method.
/// * To get full statisics via `TreeSet::validate` method.
#[derive(Clone, Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    pub(crate) fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    pub(crate) fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    pub(crate) fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in the set.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return size of an arena slot, including link and color overhead.
    /// The overhead is constant, the slot size varies with the value
    /// type. EG:
    ///
    /// ```
    /// use rbtree_set::{compare::natural, TreeSet};
    /// let set: TreeSet<u64, _> = TreeSet::new(natural::<u64>);
    ///
    /// assert!(set.stats().node_size() > std::mem::size_of::<u64>());
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to any leaf.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics, available only after validate() on a
    /// non-empty set.
    pub fn depths(&self) -> Option<Depth> {
        match &self.depths {
            Some(depths) if depths.samples() > 0 && self.entries > 0 => Some(depths.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "entries: {} node_size: {}", self.entries, self.node_size)?;
        if let Some(blacks) = self.blacks {
            write!(f, " blacks: {}", blacks)?;
        }
        if let Some(depths) = self.depths() {
            write!(f, " depth {}", depths)?;
        }
        Ok(())
    }
}
