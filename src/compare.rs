//! Comparators for [`TreeSet`](crate::TreeSet).
//!
//! Any `Fn(&T, &T) -> Ordering` is a comparator. The functions here cover
//! the common cases and can be passed straight to [`TreeSet::new`].
//!
//! [`TreeSet::new`]: crate::TreeSet::new

use std::cmp::Ordering;

/// Total order over values of type `T`, injected into a set at
/// construction time.
///
/// An inconsistent comparator (one that is not transitive, or that does
/// not return `Equal` for `compare(a, a)`) leaves the set in an unspecified,
/// though memory safe, state.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Inverts the order of the wrapped comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse<C>(pub C);

impl<T, C> Compare<T> for Reverse<C>
where
    T: ?Sized,
    C: Compare<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Natural order of `T`.
pub fn natural<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Case-insensitive string order, comparing lower-cased characters.
pub fn fold_case<S: AsRef<str> + ?Sized>(a: &S, b: &S) -> Ordering {
    let x = a.as_ref().chars().flat_map(char::to_lowercase);
    let y = b.as_ref().chars().flat_map(char::to_lowercase);
    x.cmp(y)
}

macro_rules! float_compare {
    ($name:ident, $t:ty) => {
        /// Total order on floats. NaN equals NaN and sorts below every
        /// other value.
        pub fn $name(a: &$t, b: &$t) -> Ordering {
            match (a.is_nan(), b.is_nan()) {
                (true, true) => Ordering::Equal,
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            }
        }
    };
}

float_compare!(float32, f32);
float_compare!(float64, f64);
