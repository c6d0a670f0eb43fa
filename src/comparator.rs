//! Key ordering used by `SkipMap`.

use std::cmp::Ordering;

/// A three-way total order over keys of type `K`.
///
/// Implementations must be consistent: `compare(a, b)` and `compare(b, a)` are reversed, equal keys
/// compare `Equal`, and the order is transitive. Any closure of type `Fn(&K, &K) -> Ordering` is a
/// comparator.
pub trait Comparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

/// Orders keys by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<K> Comparator<K> for NaturalOrder
where
    K: Ord + ?Sized,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

impl<K, F> Comparator<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::{Comparator, NaturalOrder};
    use std::cmp::Ordering;

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder.compare("b", "a"), Ordering::Greater);
    }

    #[test]
    fn test_closure() {
        let reverse = |left: &i32, right: &i32| right.cmp(left);
        assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
        assert_eq!(reverse.compare(&3, &3), Ordering::Equal);
    }
}
