// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Comparison helpers for use as operator predicates.
//!
//! Operators treat these as opaque functions; any closure with the same shape
//! works just as well.
//!
//! ```
//! use sluice_core::compare::{equal_of, negate_of};
//!
//! let is_three = equal_of(3);
//! let not_three = negate_of(equal_of(3));
//!
//! assert!(is_three(&3));
//! assert!(not_three(&4));
//! ```

use core::cmp::Ordering;

/// Returns its argument unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// `a == b`.
pub fn equal<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

/// `a < b`.
pub fn less<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

/// `a <= b`.
pub fn less_or_equal<T: PartialOrd>(a: &T, b: &T) -> bool {
    a <= b
}

/// Three-way comparison of `a` and `b`.
///
/// Values that do not compare (such as a `NaN`) are reported as equal.
pub fn compare<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Picks `if_true` or `if_false` depending on `condition`.
pub fn ternary<A>(condition: bool, if_true: A, if_false: A) -> A {
    if condition {
        if_true
    } else {
        if_false
    }
}

/// Returns the first value that is not the type's default, or the default if there is none.
///
/// ```
/// use sluice_core::compare::coalesce;
///
/// assert_eq!(coalesce(["", "fallback", "later"]), "fallback");
/// assert_eq!(coalesce([0, 0]), 0);
/// ```
pub fn coalesce<T, I>(values: I) -> T
where
    T: PartialEq + Default,
    I: IntoIterator<Item = T>,
{
    let zero = T::default();
    values
        .into_iter()
        .find(|value| *value != zero)
        .unwrap_or(zero)
}

/// Wraps a binary predicate so that it returns the opposite answer.
///
/// Negating [`less`] yields "greater or equal", which reverses an ordering.
pub fn negate<T, F>(f: F) -> impl Fn(&T, &T) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    move |a, b| !f(a, b)
}

/// Returns a predicate matching values equal to `needle`.
pub fn equal_of<T: PartialEq>(needle: T) -> impl Fn(&T) -> bool {
    move |candidate| *candidate == needle
}

/// Returns a predicate matching the type's default ("zero") value.
pub fn is_zero<T: PartialEq + Default>() -> impl Fn(&T) -> bool {
    equal_of(T::default())
}

/// Returns a predicate matching anything but the type's default value.
pub fn is_not_zero<T: PartialEq + Default>() -> impl Fn(&T) -> bool {
    negate_of(is_zero::<T>())
}

/// Wraps a unary predicate so that it returns the opposite answer.
pub fn negate_of<T, F>(f: F) -> impl Fn(&T) -> bool
where
    F: Fn(&T) -> bool,
{
    move |value| !f(value)
}
