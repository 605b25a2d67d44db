use std::{
    mem,
    ops::{Index, IndexMut},
};

/// Handle to a node slot inside [`Arena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Node corresponds to a single entry in the set. Children are owned
/// through `left` and `right`, `parent` is a back-reference used only for
/// rotations and successor/predecessor walks.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    // new nodes are always red, insertion-fixup decides the final color.
    fn new(value: T, parent: Option<NodeId>) -> Node<T> {
        Node {
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn is_black(&self) -> bool {
        self.color == Color::Black
    }
}

/// Flat storage for tree nodes. Vacant slots are chained on a free-list
/// and handed out again by [`Arena::alloc`].
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena {
            slots: Vec::default(),
            free: Vec::default(),
        }
    }
}

impl<T> Arena<T> {
    pub(crate) fn alloc(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let node = Node::new(value, parent);
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Release the slot and return its value. Links held by the node go
    /// away with it.
    pub(crate) fn free(&mut self, id: NodeId) -> T {
        match self.slots[id.0].take() {
            Some(node) => {
                self.free.push(id);
                node.value
            }
            None => panic!("free(): stale node {:?}, call the programmer", id),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    pub(crate) fn swap_values(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (lo, hi) = if a.0 < b.0 { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(hi.0);
        match (head[lo.0].as_mut(), tail[0].as_mut()) {
            (Some(x), Some(y)) => mem::swap(&mut x.value, &mut y.value),
            _ => panic!("swap_values(): stale node, call the programmer"),
        }
    }

    //--------- nil tolerant accessors, absent nodes are black leaves.

    #[inline]
    pub(crate) fn parent_of(&self, id: Option<NodeId>) -> Option<NodeId> {
        id.and_then(|id| self[id].parent)
    }

    #[inline]
    pub(crate) fn left_of(&self, id: Option<NodeId>) -> Option<NodeId> {
        id.and_then(|id| self[id].left)
    }

    #[inline]
    pub(crate) fn right_of(&self, id: Option<NodeId>) -> Option<NodeId> {
        id.and_then(|id| self[id].right)
    }

    #[inline]
    pub(crate) fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self[id].color)
    }

    #[inline]
    pub(crate) fn set_color(&mut self, id: Option<NodeId>, color: Color) {
        if let Some(id) = id {
            self[id].color = color
        }
    }

    //--------- in-order navigation.

    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self[id].left {
            id = left
        }
        id
    }

    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self[id].right {
            id = right
        }
        id
    }

    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self[id].right {
            return Some(self.leftmost(right));
        }
        let mut child = id;
        let mut parent = self[id].parent;
        while let Some(p) = parent {
            if self[p].right != Some(child) {
                break;
            }
            child = p;
            parent = self[p].parent;
        }
        parent
    }

    pub(crate) fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(left) = self[id].left {
            return Some(self.rightmost(left));
        }
        let mut child = id;
        let mut parent = self[id].parent;
        while let Some(p) = parent {
            if self[p].left != Some(child) {
                break;
            }
            child = p;
            parent = self[p].parent;
        }
        parent
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        match self.slots[id.0].as_ref() {
            Some(node) => node,
            None => panic!("index(): stale node {:?}, call the programmer", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots[id.0].as_mut() {
            Some(node) => node,
            None => panic!("index_mut(): stale node {:?}, call the programmer", id),
        }
    }
}
