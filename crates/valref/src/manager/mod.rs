//! Identity-shared record managers
//!
//! A [`ReferenceManager`] is the reference-typed counterpart of
//! [`ValueContainer`]: cloning a manager hands out another alias to the same
//! heap object, so a record added through any alias is seen through all of
//! them.

mod record;

pub use record::{Record, Window, WindowId, WindowIds};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::container::{Mutability, ValueContainer};
use crate::error::Result;

static NEXT_MANAGER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a manager instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManagerId(u64);

impl ManagerId {
    fn next() -> Self {
        ManagerId(NEXT_MANAGER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identifier
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "manager#{}", self.0)
    }
}

/// A window manager: the manager that owns the list of windows.
pub type WindowManager = ReferenceManager<Window>;

struct Shared<R> {
    id: ManagerId,
    records: RwLock<ValueContainer<R>>,
}

/// Heap-resident owner of one mutable container of records.
///
/// `Clone` produces an alias, never a copy.
///
/// # Example
///
/// ```
/// use valref::{Window, WindowManager};
///
/// let original = WindowManager::new();
/// original.add_record(Window::new(1)).unwrap();
/// original.add_record(Window::new(2)).unwrap();
///
/// let alias = original.clone(); // by-reference
/// original.add_record(Window::new(3)).unwrap();
///
/// assert_eq!(alias.records().count(), 3);
/// assert!(alias.same_identity(&original));
/// ```
pub struct ReferenceManager<R> {
    shared: Arc<Shared<R>>,
}

impl<R> ReferenceManager<R> {
    /// Create a manager with an empty container and a fresh identity.
    pub fn new() -> Self {
        let id = ManagerId::next();
        tracing::debug!(%id, "created manager");
        Self {
            shared: Arc::new(Shared {
                id,
                records: RwLock::new(ValueContainer::mutable(Vec::new())),
            }),
        }
    }

    /// Another binding to this same manager.
    pub fn alias(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }

    /// This manager's identity.
    pub fn id(&self) -> ManagerId {
        self.shared.id
    }

    /// Check if both bindings refer to the same manager instance.
    pub fn same_identity(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    /// Number of live bindings sharing this manager.
    pub fn alias_count(&self) -> usize {
        Arc::strong_count(&self.shared)
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.read().count()
    }

    /// Check if the manager holds no records.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of the current records.
    ///
    /// The snapshot is an immutable [`ValueContainer`] sharing the manager's
    /// buffer. It does not change when records are added later; call
    /// `records()` again to observe them.
    pub fn records(&self) -> ValueContainer<R> {
        self.read().copy_as(Mutability::Immutable)
    }

    // Every write is a single push or remove, so a panic on another thread
    // cannot leave the container half-updated; recover from poisoning.
    fn read(&self) -> RwLockReadGuard<'_, ValueContainer<R>> {
        self.shared
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ValueContainer<R>> {
        self.shared
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Clone> ReferenceManager<R> {
    /// Append a record, visible immediately through every alias.
    pub fn add_record(&self, record: R) -> Result<()> {
        let mut records = self.write();
        records.append(record)?;
        tracing::debug!(id = %self.shared.id, count = records.count(), "added record");
        Ok(())
    }
}

impl<R: Record + Clone> ReferenceManager<R> {
    /// Check if a record with `id` is held.
    pub fn contains(&self, id: R::Id) -> bool {
        self.read().iter().any(|record| record.id() == id)
    }

    /// Find the record with `id`.
    pub fn find(&self, id: R::Id) -> Option<R> {
        self.read().iter().find(|record| record.id() == id).cloned()
    }

    /// Remove the first record with `id`, returning it.
    pub fn remove_record(&self, id: R::Id) -> Result<Option<R>> {
        let mut records = self.write();
        let Some(index) = records.iter().position(|record| record.id() == id) else {
            return Ok(None);
        };
        let removed = records.remove(index)?;
        tracing::debug!(id = %self.shared.id, record = ?id, "removed record");
        Ok(Some(removed))
    }
}

impl<R> Clone for ReferenceManager<R> {
    /// Alias this manager. No storage is duplicated.
    fn clone(&self) -> Self {
        self.alias()
    }
}

impl<R> Default for ReferenceManager<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: fmt::Debug> fmt::Debug for ReferenceManager<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceManager")
            .field("id", &self.shared.id)
            .field("records", &*self.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_managers_have_distinct_ids() {
        let a: WindowManager = ReferenceManager::new();
        let b: WindowManager = ReferenceManager::new();
        assert_ne!(a.id(), b.id());
        assert!(!a.same_identity(&b));
    }

    #[test]
    fn test_alias_shares_identity() {
        let a = WindowManager::new();
        let b = a.clone();
        assert_eq!(a.id(), b.id());
        assert!(a.same_identity(&b));
        assert_eq!(a.alias_count(), 2);
        drop(b);
        assert_eq!(a.alias_count(), 1);
    }

    #[test]
    fn test_snapshot_does_not_block_later_adds() {
        let manager = WindowManager::new();
        manager.add_record(Window::new(1)).unwrap();
        let snapshot = manager.records();
        manager.add_record(Window::new(2)).unwrap();

        assert_eq!(snapshot.count(), 1);
        assert_eq!(manager.records().count(), 2);
        assert!(!snapshot.is_mutable());
    }

    #[test]
    fn test_remove_record() {
        let manager = WindowManager::new();
        for id in 1..=3 {
            manager.add_record(Window::new(id)).unwrap();
        }
        let alias = manager.alias();
        assert_eq!(
            alias.remove_record(WindowId(2)).unwrap(),
            Some(Window::new(2))
        );
        assert_eq!(alias.remove_record(WindowId(2)).unwrap(), None);
        assert!(!manager.contains(WindowId(2)));
        assert_eq!(manager.find(WindowId(3)), Some(Window::new(3)));
        assert_eq!(manager.len(), 2);
    }
}
