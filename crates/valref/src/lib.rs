//! # Valref
//!
//! Value semantics and reference semantics, side by side.
//!
//! Valref models what assignment means for a collection. A
//! [`ValueContainer`] behaves like a value: every copy is independent, and
//! copy-on-write keeps copies cheap until one of them mutates. A
//! [`ReferenceManager`] behaves like an object: every binding is an alias,
//! and a record added through one alias is seen through all of them.
//!
//! ## Architecture
//!
//! - **Containers**: `ValueContainer`, `Dictionary` and `Set` over `Arc`
//!   buffers with `Arc::make_mut` on mutation
//! - **Managers**: `ReferenceManager` and `SharedArray` over `Arc<RwLock<_>>`
//! - **Generators**: pull-based `Iterator`s with `None` as exhaustion
//! - **Lessons**: replayable playgrounds backing the `valref` binary
//!
//! ## Example
//!
//! ```
//! use valref::{container, Window, WindowManager};
//!
//! let mut numbers = container![1, 2];
//! let copy = numbers.clone();
//! numbers.append(3).unwrap();
//! assert_eq!(copy, [1, 2]);
//!
//! let windows = WindowManager::new();
//! let alias = windows.clone();
//! alias.add_record(Window::new(1)).unwrap();
//! assert_eq!(windows.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collections;
pub mod container;
pub mod error;
pub mod generator;
pub mod lessons;
pub mod manager;
pub mod shared;

// Re-export main types
pub use collections::{Dictionary, Set};
pub use container::{any_power, IntoIter, Iter, Mutability, ValueContainer};
pub use error::{Result, ValrefError};
pub use generator::{AnyGenerator, ConstantGenerator, FibonacciGenerator};
pub use lessons::{Annotation, Lesson, LessonReport};
pub use manager::{
    ManagerId, Record, ReferenceManager, Window, WindowId, WindowIds, WindowManager,
};
pub use shared::{SharedArray, SharedView};

/// Valref version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
