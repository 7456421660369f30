//! Map, filter and reduce over value containers
//!
//! Transforms never touch the source container; they build a new mutable
//! one with its own buffer.

use super::ValueContainer;

impl<T> ValueContainer<T> {
    /// Apply `f` to every element, collecting the results in order.
    pub fn map<U, F>(&self, f: F) -> ValueContainer<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Fold all elements into one value, starting from `initial`.
    pub fn reduce<A, F>(&self, initial: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(initial, f)
    }
}

impl<T: Clone> ValueContainer<T> {
    /// Keep the elements for which `predicate` holds, in order.
    pub fn filter<P>(&self, mut predicate: P) -> ValueContainer<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }
}

/// Build a closure raising its argument to the `n`th power.
///
/// The returned closure captures `n`. Results saturate at the `i64` bounds
/// instead of overflowing.
///
/// ```
/// use valref::any_power;
///
/// let fourth_power = any_power(4);
/// assert_eq!(fourth_power(10), 10_000);
/// ```
pub fn any_power(n: u32) -> impl Fn(i64) -> i64 + Clone {
    move |base| base.saturating_pow(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_leaves_source_untouched() {
        let xs = ValueContainer::immutable([1, 2, 3]);
        let doubled = xs.map(|x| x * 2);
        assert_eq!(doubled, [2, 4, 6]);
        assert_eq!(xs, [1, 2, 3]);
        assert!(doubled.is_mutable());
    }

    #[test]
    fn test_filter() {
        let xs = ValueContainer::immutable([2, 4, 6, 8, 10, 12, 14, 16, 18]);
        assert_eq!(xs.filter(|x| x % 3 == 0), [6, 12, 18]);
        assert_eq!(xs.filter(|x| x % 2 == 0), xs);
    }

    #[test]
    fn test_reduce_running_total() {
        let xs = ValueContainer::mutable([1, 2, 3, 4]);
        assert_eq!(xs.reduce(10, |acc, x| acc + x), 20);
        assert_eq!(ValueContainer::<i32>::new().reduce(7, |acc, x| acc + x), 7);
    }

    #[test]
    fn test_any_power() {
        assert_eq!(any_power(2)(3), 9);
        assert_eq!(any_power(3)(3), 27);
        assert_eq!(any_power(0)(5), 1);
        assert_eq!(any_power(4)(-2), 16);
        assert_eq!(any_power(64)(10), i64::MAX);
    }
}
