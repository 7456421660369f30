//! Dictionaries and sets with value semantics
//!
//! Both follow the same rules as [`ValueContainer`](crate::ValueContainer):
//! a mutability mode fixed at construction and an `Arc` buffer shared
//! between copies until one of them mutates. Insertion order is kept, so a
//! literal reads back in the order it was written.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use crate::container::Mutability;
use crate::error::Result;

fn make_unique<'a, B: Clone>(buffer: &'a mut Arc<B>, kind: &'static str) -> &'a mut B {
    let aliases = Arc::strong_count(buffer);
    if aliases > 1 {
        tracing::trace!(kind, aliases, "duplicating shared buffer before mutation");
    }
    Arc::make_mut(buffer)
}

// ═══════════════════════════════════════════════════════════════════════
// Dictionary
// ═══════════════════════════════════════════════════════════════════════

/// An insertion-ordered key/value map with value semantics.
///
/// ```
/// use valref::Dictionary;
///
/// let mut physics = Dictionary::mutable([("trivial", "true and could not be otherwise")]);
/// let before = physics.clone();
/// physics.insert("interesting", "probably true").unwrap();
///
/// assert_eq!(physics.len(), 2);
/// assert_eq!(before.len(), 1);
/// ```
pub struct Dictionary<K, V> {
    entries: Arc<IndexMap<K, V>>,
    mutability: Mutability,
}

impl<K: Hash + Eq, V> Dictionary<K, V> {
    const KIND: &'static str = "dictionary";

    /// Create a dictionary from literal pairs with the given mode.
    ///
    /// A repeated key keeps its first position and its last value.
    pub fn from_literal(pairs: impl IntoIterator<Item = (K, V)>, mutability: Mutability) -> Self {
        Self {
            entries: Arc::new(pairs.into_iter().collect()),
            mutability,
        }
    }

    /// Create a mutable dictionary.
    pub fn mutable(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::from_literal(pairs, Mutability::Mutable)
    }

    /// Create an immutable dictionary.
    pub fn immutable(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::from_literal(pairs, Mutability::Immutable)
    }

    /// Look up the value for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Check if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// The first entry in insertion order.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    /// The mode this dictionary was constructed with.
    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    /// Check if both bindings currently alias one physical buffer.
    pub fn shares_buffer_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Dictionary<K, V> {
    /// Insert or replace the value for `key`, returning the old value.
    ///
    /// # Errors
    ///
    /// `ImmutableViolation` if the dictionary is immutable.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        self.mutability.check(Self::KIND, "insert")?;
        Ok(make_unique(&mut self.entries, Self::KIND).insert(key, value))
    }

    /// Remove `key`, returning its value. Later entries keep their order.
    ///
    /// # Errors
    ///
    /// `ImmutableViolation` if the dictionary is immutable.
    pub fn remove(&mut self, key: &K) -> Result<Option<V>> {
        self.mutability.check(Self::KIND, "remove")?;
        if !self.entries.contains_key(key) {
            return Ok(None);
        }
        Ok(make_unique(&mut self.entries, Self::KIND).shift_remove(key))
    }
}

impl<K, V> Clone for Dictionary<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            mutability: self.mutability,
        }
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for Dictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Hash + Eq, V: Eq> Eq for Dictionary<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Set
// ═══════════════════════════════════════════════════════════════════════

/// An insertion-ordered set with value semantics.
pub struct Set<T> {
    items: Arc<IndexSet<T>>,
    mutability: Mutability,
}

impl<T: Hash + Eq> Set<T> {
    const KIND: &'static str = "set";

    /// Create a set from literal items with the given mode. Duplicates
    /// collapse onto their first occurrence.
    pub fn from_literal(items: impl IntoIterator<Item = T>, mutability: Mutability) -> Self {
        Self {
            items: Arc::new(items.into_iter().collect()),
            mutability,
        }
    }

    /// Create a mutable set.
    pub fn mutable(items: impl IntoIterator<Item = T>) -> Self {
        Self::from_literal(items, Mutability::Mutable)
    }

    /// Create an immutable set.
    pub fn immutable(items: impl IntoIterator<Item = T>) -> Self {
        Self::from_literal(items, Mutability::Immutable)
    }

    /// Check membership.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// The mode this set was constructed with.
    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    /// Check if both bindings currently alias one physical buffer.
    pub fn shares_buffer_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Hash + Eq + Clone> Set<T> {
    /// Insert `item`. Returns `true` if it was not already a member.
    ///
    /// Inserting an existing member leaves the buffer shared.
    pub fn insert(&mut self, item: T) -> Result<bool> {
        self.mutability.check(Self::KIND, "insert")?;
        if self.items.contains(&item) {
            return Ok(false);
        }
        Ok(make_unique(&mut self.items, Self::KIND).insert(item))
    }

    /// Remove `item`. Returns `true` if it was a member.
    pub fn remove(&mut self, item: &T) -> Result<bool> {
        self.mutability.check(Self::KIND, "remove")?;
        if !self.items.contains(item) {
            return Ok(false);
        }
        Ok(make_unique(&mut self.items, Self::KIND).shift_remove(item))
    }
}

impl<T> Clone for Set<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            mutability: self.mutability,
        }
    }
}

// Order-insensitive, as `IndexSet` equality is.
impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}
