//! Iterators over value containers
//!
//! Iteration state lives in the iterator, never in the container, so any
//! number of iterators can walk one container without interfering.

use std::sync::Arc;

use super::ValueContainer;

/// Borrowing iterator returned by [`ValueContainer::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.position)?;
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator returned by `ValueContainer::into_iter`.
///
/// Moves elements out when the buffer was uniquely owned; otherwise clones
/// them one at a time from the still-shared buffer.
pub struct IntoIter<T> {
    inner: IntoIterInner<T>,
}

enum IntoIterInner<T> {
    Owned(std::vec::IntoIter<T>),
    Shared {
        buffer: Arc<Vec<T>>,
        position: usize,
    },
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IntoIterInner::Owned(items) => items.next(),
            IntoIterInner::Shared { buffer, position } => {
                let item = buffer.get(*position)?.clone();
                *position += 1;
                Some(item)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.inner {
            IntoIterInner::Owned(items) => items.len(),
            IntoIterInner::Shared { buffer, position } => buffer.len() - position,
        };
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<T: Clone> IntoIterator for ValueContainer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let inner = match Arc::try_unwrap(self.buffer) {
            Ok(items) => IntoIterInner::Owned(items.into_iter()),
            Err(buffer) => IntoIterInner::Shared {
                buffer,
                position: 0,
            },
        };
        IntoIter { inner }
    }
}

impl<'a, T> IntoIterator for &'a ValueContainer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
