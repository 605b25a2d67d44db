//! Ordered set backed by a red-black tree.
//!
//! Values are kept unique and sorted under a comparator that is passed in
//! when the set is created, there is no default ordering. Insert, remove
//! and lookup are O(log n). Beyond the usual set operations the tree
//! supports floor/ceiling queries, deque style access to both ends and a
//! [`Cursor`] that can remove or replace entries while walking the set.
//!
//! ```
//! use rbtree_set::{compare::natural, TreeSet};
//!
//! let mut set = TreeSet::new(natural::<i64>);
//! for value in [5, 3, 8, 1, 4].iter() {
//!     set.add(*value);
//! }
//! set.remove(&3);
//! assert_eq!(set.values(), vec![1, 4, 5, 8]);
//! assert_eq!(set.floor(&4), Some(&4));
//! assert_eq!(set.ceiling(&6), Some(&8));
//! ```
//!
//! Nodes live in a flat arena and refer to each other by index, parent
//! links are plain back references into the same arena. The set is not
//! synchronized, wrap it in a mutex to share it between threads.

pub mod compare;
mod cursor;
mod depth;
mod error;
mod fixup;
mod iter;
mod node;
mod serialize;
mod stats;
mod tree;

pub use crate::compare::Compare;
pub use crate::cursor::Cursor;
pub use crate::depth::Depth;
pub use crate::error::Error;
pub use crate::iter::{IntoIter, Iter};
pub use crate::stats::Stats;
pub use crate::tree::TreeSet;

#[cfg(test)]
mod compare_test;
#[cfg(test)]
mod cursor_test;
#[cfg(test)]
mod serialize_test;
