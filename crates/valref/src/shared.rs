//! Reference-typed arrays
//!
//! [`SharedArray`] is the by-reference counterpart of
//! [`ValueContainer`](crate::ValueContainer). Its [`SharedView`] only
//! offers reads, yet it is not a snapshot: every push through the array is
//! visible through the view.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use crate::container::{Mutability, ValueContainer};

/// A growable array shared by reference.
///
/// ```
/// use valref::SharedArray;
///
/// let original = SharedArray::new(["foo", "bar"]);
/// let read_only = original.view();
/// assert_eq!(read_only.last(), Some("bar"));
///
/// original.push("baz");
/// assert_eq!(read_only.last(), Some("baz"));
/// ```
pub struct SharedArray<T> {
    items: Arc<RwLock<Vec<T>>>,
}

/// Read-only handle onto a [`SharedArray`].
pub struct SharedView<T> {
    items: Arc<RwLock<Vec<T>>>,
}

fn read<T>(items: &RwLock<Vec<T>>) -> RwLockReadGuard<'_, Vec<T>> {
    items.read().unwrap_or_else(PoisonError::into_inner)
}

impl<T> SharedArray<T> {
    /// Create an array holding `items`.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items.into_iter().collect())),
        }
    }

    /// Append an element, visible through every alias and view.
    pub fn push(&self, item: T) {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.push(item);
        tracing::trace!(count = items.len(), "pushed onto shared array");
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        read(&self.items).len()
    }

    /// Check if the array has no elements.
    pub fn is_empty(&self) -> bool {
        read(&self.items).is_empty()
    }

    /// A read-only handle onto the same storage.
    pub fn view(&self) -> SharedView<T> {
        SharedView {
            items: Arc::clone(&self.items),
        }
    }

    /// Check if both handles refer to the same storage.
    pub fn same_identity(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Clone> SharedArray<T> {
    /// Copy of the element at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        read(&self.items).get(index).cloned()
    }

    /// Copy of the last element.
    pub fn last(&self) -> Option<T> {
        read(&self.items).last().cloned()
    }

    /// Immutable value copy of the current contents.
    pub fn snapshot(&self) -> ValueContainer<T> {
        ValueContainer::from_literal(read(&self.items).iter().cloned(), Mutability::Immutable)
    }
}

impl<T> SharedView<T> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        read(&self.items).len()
    }

    /// Check if the array has no elements.
    pub fn is_empty(&self) -> bool {
        read(&self.items).is_empty()
    }

    /// Check if this view reads the storage of `array`.
    pub fn views(&self, array: &SharedArray<T>) -> bool {
        Arc::ptr_eq(&self.items, &array.items)
    }
}

impl<T: Clone> SharedView<T> {
    /// Copy of the element at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        read(&self.items).get(index).cloned()
    }

    /// Copy of the last element.
    pub fn last(&self) -> Option<T> {
        read(&self.items).last().cloned()
    }

    /// Immutable value copy of the current contents.
    pub fn snapshot(&self) -> ValueContainer<T> {
        ValueContainer::from_literal(read(&self.items).iter().cloned(), Mutability::Immutable)
    }
}

impl<T> Clone for SharedArray<T> {
    /// Alias the array.
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Clone for SharedView<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedArray")
            .field(&*read(&self.items))
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedView")
            .field(&*read(&self.items))
            .finish()
    }
}
