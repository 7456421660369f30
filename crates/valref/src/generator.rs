//! Pull-based generators
//!
//! Every generator is an [`Iterator`]: one `next()` that yields the next
//! element or `None` once exhausted. State lives in the generator itself.

use std::fmt;

/// Yields the same value forever.
#[derive(Debug, Clone)]
pub struct ConstantGenerator<T> {
    value: T,
}

impl<T: Clone> ConstantGenerator<T> {
    /// Create a generator that always yields `value`
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Iterator for ConstantGenerator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Yields the Fibonacci series 0, 1, 1, 2, 3, 5, ...
///
/// Ends with `None` after the largest term that fits in a `u64`.
///
/// ```
/// use valref::FibonacciGenerator;
///
/// let first: Vec<u64> = FibonacciGenerator::new().take(10).collect();
/// assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
/// ```
#[derive(Debug, Clone)]
pub struct FibonacciGenerator {
    // (current, following); `following` is None once it would overflow
    state: Option<(u64, Option<u64>)>,
}

impl FibonacciGenerator {
    /// Start at 0
    pub fn new() -> Self {
        Self {
            state: Some((0, Some(1))),
        }
    }
}

impl Default for FibonacciGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let (current, following) = self.state?;
        self.state = following.map(|next| (next, current.checked_add(next)));
        Some(current)
    }
}

/// A generator backed by a closure.
///
/// The closure owns whatever state it needs and returns `None` to signal
/// exhaustion.
///
/// ```
/// use valref::AnyGenerator;
///
/// let mut state = (0u64, 1u64);
/// let fib = AnyGenerator::new(move || {
///     let value = state.0;
///     state = (state.1, state.0 + state.1);
///     Some(value)
/// });
/// assert_eq!(fib.take(5).collect::<Vec<_>>(), vec![0, 1, 1, 2, 3]);
/// ```
pub struct AnyGenerator<'a, T> {
    body: Box<dyn FnMut() -> Option<T> + Send + 'a>,
}

impl<'a, T> AnyGenerator<'a, T> {
    /// Wrap `body` as a generator
    pub fn new(body: impl FnMut() -> Option<T> + Send + 'a) -> Self {
        Self {
            body: Box::new(body),
        }
    }

    /// Erase the concrete type of another generator
    pub fn from_generator<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + Send + 'a,
    {
        let mut iter = iter;
        Self::new(move || iter.next())
    }
}

impl<T> Iterator for AnyGenerator<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        (self.body)()
    }
}

impl<T> fmt::Debug for AnyGenerator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<generator>")
    }
}
