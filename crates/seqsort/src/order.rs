use std::fmt;

/// Ordering mode shared by every algorithm in this crate.
///
/// - `Ascending`/`Descending` use the element type's total order.
/// - `By` carries a caller predicate `f(a, b)` meaning "`a` must sort
///   strictly before `b`". The predicate must describe a strict weak
///   ordering; anything else yields an unspecified (but terminating)
///   permutation.
pub enum SortOrder<'a, T> {
    Ascending,
    Descending,
    By(&'a dyn Fn(&T, &T) -> bool),
}

impl<T: Ord> SortOrder<'_, T> {
    /// `a` has to be placed strictly before `b`.
    #[inline]
    pub fn precedes(&self, a: &T, b: &T) -> bool {
        match self {
            SortOrder::Ascending => a < b,
            SortOrder::Descending => a > b,
            SortOrder::By(compare) => compare(a, b),
        }
    }

    /// `a` may stay where it is relative to `b`.
    ///
    /// The equality-inclusive companion of [`precedes`](Self::precedes); the
    /// merge-family algorithms use it to give the left-hand run precedence on
    /// equal elements. For `By` it is `!f(b, a)`: `a` is at or before `b`
    /// exactly when `b` does not have to sort before `a`.
    #[inline]
    pub fn precedes_or_equal(&self, a: &T, b: &T) -> bool {
        match self {
            SortOrder::Ascending => a <= b,
            SortOrder::Descending => a >= b,
            SortOrder::By(compare) => !compare(b, a),
        }
    }
}

impl<T> Clone for SortOrder<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortOrder<'_, T> {}

impl<T> fmt::Debug for SortOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("Ascending"),
            SortOrder::Descending => f.write_str("Descending"),
            SortOrder::By(_) => f.write_str("By(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SortOrder;

    #[test]
    fn builtin_modes() {
        let asc: SortOrder<'_, i32> = SortOrder::Ascending;
        assert!(asc.precedes(&1, &2));
        assert!(!asc.precedes(&2, &2));
        assert!(asc.precedes_or_equal(&2, &2));

        let desc: SortOrder<'_, i32> = SortOrder::Descending;
        assert!(desc.precedes(&2, &1));
        assert!(!desc.precedes(&1, &1));
        assert!(desc.precedes_or_equal(&1, &1));
    }

    #[test]
    fn custom_predicate_gains_equality_inclusion() {
        let by_last_digit = |a: &i32, b: &i32| (a % 10) < (b % 10);
        let order = SortOrder::By(&by_last_digit);

        assert!(order.precedes(&11, &2));
        assert!(!order.precedes(&21, &11));
        // 21 and 11 tie on the last digit, so both directions are "or equal".
        assert!(order.precedes_or_equal(&21, &11));
        assert!(order.precedes_or_equal(&11, &21));
        assert!(!order.precedes_or_equal(&2, &11));
    }
}
