//! Display and Debug implementations for ValueContainer

use std::fmt;

use super::ValueContainer;

impl<T: fmt::Debug> fmt::Debug for ValueContainer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Playground-style rendering: `[1, 2, 3]`.
impl<T: fmt::Display> fmt::Display for ValueContainer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
