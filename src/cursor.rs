use std::cmp::Ordering;

use log::debug;

use crate::compare::Compare;
use crate::error::Error;
use crate::node::NodeId;
use crate::tree::TreeSet;

enum Position<T> {
    // before the first move, or after reset().
    Unset,
    At(NodeId),
    // detached value, along with the live neighbours it had.
    Removed {
        value: T,
        prev: Option<NodeId>,
        next: Option<NodeId>,
    },
}

/// Cursor over a [`TreeSet`] that can remove or replace the entry it is
/// positioned on. The cursor holds the only mutable borrow of the set, so
/// the tree can't change under it through any other handle.
///
/// ```
/// use rbtree_set::{compare::natural, TreeSet};
///
/// let mut set = TreeSet::load_from(natural::<i64>, 1..=5);
/// let mut cursor = set.cursor();
/// while cursor.move_next() {
///     if cursor.value().map_or(false, |v| v % 2 == 0) {
///         cursor.remove().unwrap();
///     }
/// }
/// assert_eq!(set.values(), vec![1, 3, 5]);
/// ```
pub struct Cursor<'a, T, C>
where
    C: Compare<T>,
{
    set: &'a mut TreeSet<T, C>,
    position: Position<T>,
}

impl<T, C> TreeSet<T, C>
where
    C: Compare<T>,
{
    /// Return a cursor positioned before the first entry. First call to
    /// move_next() lands on the smallest value, first call to move_prev()
    /// on the largest.
    pub fn cursor(&mut self) -> Cursor<'_, T, C> {
        Cursor {
            set: self,
            position: Position::Unset,
        }
    }
}

impl<'a, T, C> Cursor<'a, T, C>
where
    C: Compare<T>,
{
    /// Move to the next entry in sorted order. Return false, leaving the
    /// cursor where it is, if there is no such entry.
    pub fn move_next(&mut self) -> bool {
        let next = match &self.position {
            Position::Unset => self.set.head(),
            Position::At(id) => self.set.nodes.successor(*id),
            Position::Removed { next, .. } => *next,
        };
        self.move_to(next)
    }

    /// Move to the previous entry in sorted order. Return false, leaving
    /// the cursor where it is, if there is no such entry.
    pub fn move_prev(&mut self) -> bool {
        let prev = match &self.position {
            Position::Unset => self.set.tail(),
            Position::At(id) => self.set.nodes.predecessor(*id),
            Position::Removed { prev, .. } => *prev,
        };
        self.move_to(prev)
    }

    /// Return the current value. After remove() this is the detached
    /// value that was removed.
    pub fn value(&self) -> Option<&T> {
        match &self.position {
            Position::Unset => None,
            Position::At(id) => Some(&self.set.nodes[*id].value),
            Position::Removed { value, .. } => Some(value),
        }
    }

    /// Replace the current value. A value comparing equal to the current
    /// one is stored in place, any other value is re-inserted at its sorted
    /// position and the cursor follows it. After remove() only the
    /// detached value is touched, the set is left alone.
    pub fn set_value(&mut self, value: T) -> Result<(), Error> {
        let id = match &mut self.position {
            Position::Unset => {
                debug!("set_value(): {}", Error::CursorUnset);
                return Err(Error::CursorUnset);
            }
            Position::Removed { value: detached, .. } => {
                *detached = value;
                return Ok(());
            }
            Position::At(id) => *id,
        };

        if self.set.compare(&value, &self.set.nodes[id].value) == Ordering::Equal {
            self.set.nodes[id].value = value;
        } else {
            self.set.delete_node(id);
            let (id, _) = self.set.insert(value);
            self.position = Position::At(id);
        }
        Ok(())
    }

    /// Remove the current entry from the set. The removed value stays
    /// readable through value() and the cursor can continue with
    /// move_next() or move_prev().
    pub fn remove(&mut self) -> Result<(), Error> {
        let id = match &self.position {
            Position::At(id) => *id,
            Position::Unset => {
                debug!("remove(): {}", Error::CursorUnset);
                return Err(Error::CursorUnset);
            }
            Position::Removed { .. } => {
                debug!("remove(): {}", Error::AlreadyRemoved);
                return Err(Error::AlreadyRemoved);
            }
        };

        let nodes = &self.set.nodes;
        let prev = nodes.predecessor(id);
        // an inner node inherits its successor's value, and stays live.
        let next = match (nodes[id].left, nodes[id].right) {
            (Some(_), Some(_)) => Some(id),
            _ => nodes.successor(id),
        };
        let value = self.set.delete_node(id);
        self.position = Position::Removed { value, prev, next };
        Ok(())
    }

    /// Move the cursor back before the first entry.
    pub fn reset(&mut self) {
        self.position = Position::Unset
    }

    fn move_to(&mut self, id: Option<NodeId>) -> bool {
        match id {
            Some(id) => {
                self.position = Position::At(id);
                true
            }
            None => false,
        }
    }
}
