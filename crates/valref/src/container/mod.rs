//! Copy-on-write value containers
//!
//! A [`ValueContainer`] behaves like an array with value semantics: every
//! copy is logically independent. Copies share one `Arc` buffer until one
//! of them mutates, at which point that binding duplicates the buffer and
//! mutates its private copy.

mod display;
mod iter;
mod mutability;
mod transform;

pub use iter::{IntoIter, Iter};
pub use mutability::Mutability;
pub use transform::any_power;

use std::sync::Arc;

use crate::error::{Result, ValrefError};

/// An ordered sequence with value semantics and copy-on-write storage.
///
/// # Example
///
/// ```
/// use valref::ValueContainer;
///
/// let mut original = ValueContainer::mutable([1, 2]);
/// let copy = original.clone(); // logical copy, shared buffer
/// assert!(original.shares_buffer_with(&copy));
///
/// original.append(3).unwrap(); // buffer duplicated here
///
/// assert_eq!(original, [1, 2, 3]);
/// assert_eq!(copy, [1, 2]);
/// assert!(!original.shares_buffer_with(&copy));
/// ```
pub struct ValueContainer<T> {
    /// Backing buffer, shared between copies until one of them mutates
    buffer: Arc<Vec<T>>,

    /// Fixed at construction
    mutability: Mutability,
}

impl<T> ValueContainer<T> {
    const KIND: &'static str = "container";

    // ═══════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════

    /// Create a container from a literal sequence with the given mode.
    pub fn from_literal(items: impl IntoIterator<Item = T>, mutability: Mutability) -> Self {
        Self {
            buffer: Arc::new(items.into_iter().collect()),
            mutability,
        }
    }

    /// Create a mutable container (`var xs = [...]`).
    pub fn mutable(items: impl IntoIterator<Item = T>) -> Self {
        Self::from_literal(items, Mutability::Mutable)
    }

    /// Create an immutable container (`let xs = [...]`).
    pub fn immutable(items: impl IntoIterator<Item = T>) -> Self {
        Self::from_literal(items, Mutability::Immutable)
    }

    /// Create an empty mutable container.
    pub fn new() -> Self {
        Self::mutable(Vec::new())
    }

    /// Copy this container into a binding with a different mode.
    ///
    /// The copy shares the buffer until either side mutates, exactly like
    /// `var copy = letArray`.
    pub fn copy_as(&self, mutability: Mutability) -> Self {
        Self {
            buffer: Arc::clone(&self.buffer),
            mutability,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Reads
    // ═══════════════════════════════════════════════════════════════════

    /// Read the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index >= count()`.
    pub fn read(&self, index: usize) -> Result<&T> {
        self.buffer.get(index).ok_or(ValrefError::IndexOutOfRange {
            index,
            count: self.buffer.len(),
        })
    }

    /// Get the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buffer.get(index)
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the container has no elements.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.buffer.first()
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.buffer.last()
    }

    /// View the contents as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// Iterate over the elements by reference.
    ///
    /// Each call returns a fresh iterator with its own position.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.buffer.as_slice())
    }

    /// The mode this container was constructed with.
    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    /// Check if mutating calls are allowed.
    pub fn is_mutable(&self) -> bool {
        self.mutability.is_mutable()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Buffer Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Check if both bindings currently alias one physical buffer.
    pub fn shares_buffer_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.buffer, &other.buffer)
    }

    /// Check if no other binding aliases this buffer.
    ///
    /// A uniquely owned buffer is mutated in place without copying.
    pub fn is_uniquely_owned(&self) -> bool {
        Arc::strong_count(&self.buffer) == 1
    }
}

impl<T: Clone> ValueContainer<T> {
    // ═══════════════════════════════════════════════════════════════════
    // Mutation
    // ═══════════════════════════════════════════════════════════════════

    /// Append an element.
    ///
    /// Duplicates the buffer first if another binding still aliases it.
    ///
    /// # Errors
    ///
    /// `ImmutableViolation` if the container is immutable. The contents are
    /// left unchanged.
    pub fn append(&mut self, element: T) -> Result<()> {
        self.mutability.check(Self::KIND, "append")?;
        self.buffer_mut().push(element);
        Ok(())
    }

    /// Append every element of `items`.
    ///
    /// Fails on an immutable container even when `items` is empty.
    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) -> Result<()> {
        self.mutability.check(Self::KIND, "extend")?;
        self.buffer_mut().extend(items);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later ones down.
    ///
    /// # Errors
    ///
    /// - `ImmutableViolation` if the container is immutable
    /// - `IndexOutOfRange` if `index >= count()`
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.mutability.check(Self::KIND, "remove")?;
        let count = self.buffer.len();
        if index >= count {
            return Err(ValrefError::IndexOutOfRange { index, count });
        }
        Ok(self.buffer_mut().remove(index))
    }

    /// Copy the contents out into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.buffer.as_ref().clone()
    }

    /// Exclusive access to the buffer, duplicating it if it is shared.
    fn buffer_mut(&mut self) -> &mut Vec<T> {
        let aliases = Arc::strong_count(&self.buffer);
        if aliases > 1 {
            tracing::trace!(
                aliases,
                count = self.buffer.len(),
                "duplicating shared buffer before mutation"
            );
        }
        Arc::make_mut(&mut self.buffer)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════

impl<T> Clone for ValueContainer<T> {
    /// Copy the binding. The buffer is shared, not duplicated.
    fn clone(&self) -> Self {
        self.copy_as(self.mutability)
    }
}

impl<T> Default for ValueContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ValueContainer<T> {
    fn from(items: Vec<T>) -> Self {
        Self::mutable(items)
    }
}

impl<T> FromIterator<T> for ValueContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::mutable(iter)
    }
}

impl<T> AsRef<[T]> for ValueContainer<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

// Equality compares contents only; `let` and `var` copies of one array
// are equal.
impl<T: PartialEq> PartialEq for ValueContainer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shares_buffer_with(other) || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ValueContainer<T> {}

impl<T: PartialEq> PartialEq<[T]> for ValueContainer<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ValueContainer<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for ValueContainer<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Build a mutable [`ValueContainer`] from a literal, like `var xs = [1, 2]`.
#[macro_export]
macro_rules! container {
    ($($item:expr),* $(,)?) => {
        $crate::ValueContainer::mutable([$($item),*])
    };
}

/// Build an immutable [`ValueContainer`] from a literal, like `let xs = [1, 2]`.
#[macro_export]
macro_rules! frozen {
    ($($item:expr),* $(,)?) => {
        $crate::ValueContainer::immutable([$($item),*])
    };
}
