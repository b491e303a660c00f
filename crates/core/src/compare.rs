//! Null-safe comparisons over `Option`-wrapped date/time values.
//!
//! These are plain free functions: any `Ord` date/time type works, and `None`
//! is given an explicit, documented position instead of panicking.

use std::cmp::Ordering;

/// Compares two optional values, sorting `None` first.
pub fn null_safe_cmp<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// Compares two optional values, sorting `None` last.
pub fn null_safe_cmp_nulls_last<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// Returns the smaller of two optional values, treating `None` as absent
/// rather than as the smallest value.
pub fn min_opt<T: Ord>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Returns the larger of two optional values, treating `None` as absent.
pub fn max_opt<T: Ord>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

/// Returns true if `value` lies within the inclusive bounds.
/// A `None` bound is unbounded on that side.
pub fn is_between_incl<T: Ord>(value: &T, min: Option<&T>, max: Option<&T>) -> bool {
    min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
}
