/*!
Node equality predicates for grouped traversal and squashing.

The grouping operations take the predicate as an explicit parameter
instead of relying on `PartialEq`, so a path can be grouped under a
coarser notion of sameness than its nodes' own equality. The helpers
here build the common predicates.
*/

use std::cmp::Ordering;

/// Equality as defined by the type's own `PartialEq`.
#[inline]
pub fn intrinsic<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

/// Two values are equal when the comparator orders them as `Equal`.
pub fn from_comparator<T, F>(compare: F) -> impl Fn(&T, &T) -> bool
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    move |a, b| compare(a, b) == Ordering::Equal
}

/// Two values are equal when the extracted keys are equal.
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> bool
where
    T: ?Sized,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    move |a, b| key(a) == key(b)
}
