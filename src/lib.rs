//! A growable, bounds-checked dynamic array.
//!
//! [`DynamicArray`] owns a single heap buffer that grows geometrically and is
//! never shrunk. Indexed operations return [`IndexOutOfRange`] rather than
//! panicking, and the whole collection renders as `[a, b, c]`, recursively for
//! nested collections.
//!
//! ```
//! use dynamic_collection::{dynamic_array, DynamicArray};
//!
//! let mut numbers = dynamic_array![5, 10, 15];
//! numbers.add(20);
//! numbers.exchange(0, 3)?;
//! assert_eq!(numbers.to_string(), "[20, 10, 15, 5]");
//! assert!(numbers.get(4).is_err());
//!
//! let grid: DynamicArray<DynamicArray<i32>> = dynamic_array![dynamic_array![1], DynamicArray::new()];
//! assert_eq!(grid.to_string(), "[[1], []]");
//! # Ok::<(), dynamic_collection::IndexOutOfRange>(())
//! ```

mod array;
pub mod error;
pub mod growth;
mod iter;
mod raw;
mod render;

pub use array::DynamicArray;
pub use error::{IndexOutOfRange, Operation};
pub use iter::IntoIter;

pub type Result<T, E = IndexOutOfRange> = std::result::Result<T, E>;

/// Builds a [`DynamicArray`] from a list of elements, in order.
///
/// ```
/// use dynamic_collection::dynamic_array;
///
/// let words = dynamic_array!["Zero", "One"];
/// assert_eq!(words.len(), 2);
/// assert!(words.capacity() >= 2);
/// ```
#[macro_export]
macro_rules! dynamic_array {
    () => {
        $crate::DynamicArray::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($item),+])
    };
}

#[cfg(test)]
mod tests;
