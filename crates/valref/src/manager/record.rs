//! Records held by reference managers

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable value with an identifying field.
pub trait Record {
    /// The identifier type
    type Id: PartialEq + Copy + fmt::Debug;

    /// This record's identifier
    fn id(&self) -> Self::Id;
}

/// Identifier of a [`Window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A window record, as kept by a window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    /// The window's identifier
    pub id: WindowId,
}

impl Window {
    /// Create a window with the given id
    pub fn new(id: u64) -> Self {
        Self { id: WindowId(id) }
    }
}

impl Record for Window {
    type Id = WindowId;

    fn id(&self) -> WindowId {
        self.id
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Window(id: {})", self.id)
    }
}

/// Sequential window id generator, starting at 1.
///
/// Yields `None` once the id space is exhausted instead of wrapping.
#[derive(Debug, Clone)]
pub struct WindowIds {
    next: Option<u64>,
}

impl WindowIds {
    /// Start a new sequence at 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start a new sequence at `first`
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }
}

impl Default for WindowIds {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for WindowIds {
    type Item = WindowId;

    fn next(&mut self) -> Option<WindowId> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(WindowId(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_ids_are_sequential() {
        let ids: Vec<u64> = WindowIds::new().take(3).map(|id| id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_window_ids_stop_at_max() {
        let mut ids = WindowIds::starting_at(u64::MAX);
        assert_eq!(ids.next(), Some(WindowId(u64::MAX)));
        assert_eq!(ids.next(), None);
        assert_eq!(ids.next(), None);
    }

    #[test]
    fn test_window_display() {
        assert_eq!(Window::new(7).to_string(), "Window(id: 7)");
        assert_eq!(Window::new(7).id(), WindowId(7));
    }
}
