use std::iter::FusedIterator;

use crate::node::{Arena, NodeId};
use crate::tree::TreeSet;

/// In-order iterator over a [`TreeSet`], walking successor links from the
/// front and predecessor links from the back.
pub struct Iter<'a, T> {
    nodes: &'a Arena<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(
        nodes: &'a Arena<T>,
        front: Option<NodeId>,
        back: Option<NodeId>,
        remaining: usize,
    ) -> Iter<'a, T> {
        Iter {
            nodes,
            front,
            back,
            remaining,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let id = self.front?;
        self.front = nodes.successor(id);
        self.remaining -= 1;
        Some(&nodes[id].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let id = self.back?;
        self.back = nodes.predecessor(id);
        self.remaining -= 1;
        Some(&nodes[id].value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Owning in-order iterator, returned by `TreeSet::into_iter()`.
pub struct IntoIter<T> {
    values: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.values.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, C> IntoIterator for TreeSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        // collect handles first, releasing a node would break the walk.
        let mut ids = Vec::with_capacity(self.len());
        let mut next = self.head();
        while let Some(id) = next {
            ids.push(id);
            next = self.nodes.successor(id);
        }
        let values: Vec<T> = ids.into_iter().map(|id| self.nodes.free(id)).collect();
        self.clear();
        IntoIter {
            values: values.into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a TreeSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
