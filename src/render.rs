//! Text rendering.
//!
//! A collection renders as its elements joined by `", "` inside square
//! brackets. Each element is rendered with its own `Display` impl, so a
//! nested `DynamicArray` (directly, or behind `Box<dyn Display>`) renders
//! with the same rule, to any depth.

use std::fmt;

use crate::DynamicArray;

const OPEN: &str = "[";
const CLOSE: &str = "]";
const SEPARATOR: &str = ", ";

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(OPEN)?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str(CLOSE)
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
