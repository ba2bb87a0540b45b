//! Capacity growth policy.
//!
//! Capacity grows geometrically so that a long run of appends costs amortized
//! O(1) per element. Nothing in this crate ever hands capacity back.

/// Smallest capacity allocated once a buffer stops being empty.
pub const MIN_NON_ZERO_CAPACITY: usize = 4;

/// Multiplier applied to the current capacity on each growth step.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity to grow to so that `required` slots fit, or `None` when
/// `current` already suffices.
///
/// The result is always strictly greater than `current` and at least
/// `required`.
///
/// ```
/// use dynamic_collection::growth::next_capacity;
///
/// assert_eq!(next_capacity(0, 1), Some(4));
/// assert_eq!(next_capacity(4, 5), Some(8));
/// assert_eq!(next_capacity(8, 100), Some(100));
/// assert_eq!(next_capacity(8, 8), None);
/// ```
#[must_use]
pub fn next_capacity(current: usize, required: usize) -> Option<usize> {
    if required <= current {
        return None;
    }
    let scaled = current.saturating_mul(GROWTH_FACTOR);
    Some(required.max(scaled).max(MIN_NON_ZERO_CAPACITY))
}
