use log::trace;

use crate::node::{Color, NodeId};
use crate::tree::TreeSet;

// Rotations and the two invariant restoring walks. All routines accept
// absent nodes and treat them as black leaves, rotating an absent node is
// a no-op.
impl<T, C> TreeSet<T, C> {
    //              (i)                       (i)
    //               |                         |
    //               p                         r
    //              / \                       / \
    //             /   \                     /   \
    //          left    r                   p     rr
    //                 / \                 / \
    //               rl   rr            left  rl
    //
    pub(crate) fn rotate_left(&mut self, p: Option<NodeId>) {
        let p = match p {
            Some(p) => p,
            None => return,
        };
        let r = match self.nodes[p].right {
            Some(r) => r,
            None => return,
        };
        trace!("rotate_left at {:?}", p);

        let rl = self.nodes[r].left;
        self.nodes[p].right = rl;
        if let Some(rl) = rl {
            self.nodes[rl].parent = Some(p);
        }
        let pp = self.nodes[p].parent;
        self.nodes[r].parent = pp;
        match pp {
            None => self.root = Some(r),
            Some(pp) if self.nodes[pp].left == Some(p) => self.nodes[pp].left = Some(r),
            Some(pp) => self.nodes[pp].right = Some(r),
        }
        self.nodes[r].left = Some(p);
        self.nodes[p].parent = Some(r);
    }

    //              (i)                       (i)
    //               |                         |
    //               p                         l
    //              / \                       / \
    //             /   \                     /   \
    //            l    right               ll     p
    //           / \                             / \
    //         ll   lr                         lr   right
    //
    pub(crate) fn rotate_right(&mut self, p: Option<NodeId>) {
        let p = match p {
            Some(p) => p,
            None => return,
        };
        let l = match self.nodes[p].left {
            Some(l) => l,
            None => return,
        };
        trace!("rotate_right at {:?}", p);

        let lr = self.nodes[l].right;
        self.nodes[p].left = lr;
        if let Some(lr) = lr {
            self.nodes[lr].parent = Some(p);
        }
        let pp = self.nodes[p].parent;
        self.nodes[l].parent = pp;
        match pp {
            None => self.root = Some(l),
            Some(pp) if self.nodes[pp].right == Some(p) => self.nodes[pp].right = Some(l),
            Some(pp) => self.nodes[pp].left = Some(l),
        }
        self.nodes[l].right = Some(p);
        self.nodes[p].parent = Some(l);
    }

    /// Repair the tree after `x` was linked in as a red leaf.
    pub(crate) fn fix_after_insertion(&mut self, x: NodeId) {
        self.nodes[x].color = Color::Red;

        let mut x = Some(x);
        while x.is_some() && x != self.root {
            let parent = self.nodes.parent_of(x);
            if self.nodes.color_of(parent) != Color::Red {
                break;
            }
            let grand = self.nodes.parent_of(parent);

            if parent == self.nodes.left_of(grand) {
                let uncle = self.nodes.right_of(grand);
                if self.nodes.color_of(uncle) == Color::Red {
                    trace!("insert fixup, red uncle at {:?}", grand);
                    self.nodes.set_color(parent, Color::Black);
                    self.nodes.set_color(uncle, Color::Black);
                    self.nodes.set_color(grand, Color::Red);
                    x = grand;
                } else {
                    if x == self.nodes.right_of(parent) {
                        x = parent;
                        self.rotate_left(x);
                    }
                    let parent = self.nodes.parent_of(x);
                    let grand = self.nodes.parent_of(parent);
                    self.nodes.set_color(parent, Color::Black);
                    self.nodes.set_color(grand, Color::Red);
                    self.rotate_right(grand);
                }
            } else {
                let uncle = self.nodes.left_of(grand);
                if self.nodes.color_of(uncle) == Color::Red {
                    trace!("insert fixup, red uncle at {:?}", grand);
                    self.nodes.set_color(parent, Color::Black);
                    self.nodes.set_color(uncle, Color::Black);
                    self.nodes.set_color(grand, Color::Red);
                    x = grand;
                } else {
                    if x == self.nodes.left_of(parent) {
                        x = parent;
                        self.rotate_right(x);
                    }
                    let parent = self.nodes.parent_of(x);
                    let grand = self.nodes.parent_of(parent);
                    self.nodes.set_color(parent, Color::Black);
                    self.nodes.set_color(grand, Color::Red);
                    self.rotate_left(grand);
                }
            }
        }

        let root = self.root;
        self.nodes.set_color(root, Color::Black);
    }

    /// Repair the tree when `x` roots a subtree that is one black short of
    /// its sibling.
    pub(crate) fn fix_after_deletion(&mut self, x: NodeId) {
        let mut x = Some(x);
        while x.is_some() && x != self.root && self.nodes.color_of(x) == Color::Black {
            let parent = self.nodes.parent_of(x);

            if x == self.nodes.left_of(parent) {
                let mut sib = self.nodes.right_of(parent);

                if self.nodes.color_of(sib) == Color::Red {
                    trace!("delete fixup, red sibling at {:?}", sib);
                    self.nodes.set_color(sib, Color::Black);
                    self.nodes.set_color(parent, Color::Red);
                    self.rotate_left(parent);
                    sib = self.nodes.right_of(self.nodes.parent_of(x));
                }

                let near = self.nodes.left_of(sib);
                let far = self.nodes.right_of(sib);
                if self.nodes.color_of(near) == Color::Black
                    && self.nodes.color_of(far) == Color::Black
                {
                    self.nodes.set_color(sib, Color::Red);
                    x = self.nodes.parent_of(x);
                } else {
                    if self.nodes.color_of(far) == Color::Black {
                        self.nodes.set_color(near, Color::Black);
                        self.nodes.set_color(sib, Color::Red);
                        self.rotate_right(sib);
                        sib = self.nodes.right_of(self.nodes.parent_of(x));
                    }
                    let parent = self.nodes.parent_of(x);
                    let color = self.nodes.color_of(parent);
                    self.nodes.set_color(sib, color);
                    self.nodes.set_color(parent, Color::Black);
                    let far = self.nodes.right_of(sib);
                    self.nodes.set_color(far, Color::Black);
                    self.rotate_left(parent);
                    x = self.root;
                }
            } else {
                let mut sib = self.nodes.left_of(parent);

                if self.nodes.color_of(sib) == Color::Red {
                    trace!("delete fixup, red sibling at {:?}", sib);
                    self.nodes.set_color(sib, Color::Black);
                    self.nodes.set_color(parent, Color::Red);
                    self.rotate_right(parent);
                    sib = self.nodes.left_of(self.nodes.parent_of(x));
                }

                let near = self.nodes.right_of(sib);
                let far = self.nodes.left_of(sib);
                if self.nodes.color_of(near) == Color::Black
                    && self.nodes.color_of(far) == Color::Black
                {
                    self.nodes.set_color(sib, Color::Red);
                    x = self.nodes.parent_of(x);
                } else {
                    if self.nodes.color_of(far) == Color::Black {
                        self.nodes.set_color(near, Color::Black);
                        self.nodes.set_color(sib, Color::Red);
                        self.rotate_left(sib);
                        sib = self.nodes.left_of(self.nodes.parent_of(x));
                    }
                    let parent = self.nodes.parent_of(x);
                    let color = self.nodes.color_of(parent);
                    self.nodes.set_color(sib, color);
                    self.nodes.set_color(parent, Color::Black);
                    let far = self.nodes.left_of(sib);
                    self.nodes.set_color(far, Color::Black);
                    self.rotate_right(parent);
                    x = self.root;
                }
            }
        }

        self.nodes.set_color(x, Color::Black);
    }
}
