//! Top-down three-way merge sort over a ping-pong buffer pair.
//!
//! The recursion keeps two equally sized sequences whose roles swap at every
//! level: the thirds of a range are sorted into one of them, then a single
//! three-way merge pass writes the fully merged range into the other. The
//! public entry points seed the second sequence with a copy of the first and
//! copy the finished range back, so callers only ever see an in-place sort
//! with O(n) auxiliary space.

use crate::error::{InvalidRangeError, check_range};
use crate::order::SortOrder;
use crate::sequence::Sequence;

pub fn sort_ascending<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    sort(seq, &SortOrder::Ascending);
}

pub fn sort_descending<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    sort(seq, &SortOrder::Descending);
}

pub fn sort_by<S, F>(seq: &mut S, compare: F)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
    F: Fn(&S::Item, &S::Item) -> bool,
{
    sort(seq, &SortOrder::By(&compare));
}

pub fn sort<S>(seq: &mut S, order: &SortOrder<'_, S::Item>)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let len = seq.len();
    if len < 2 {
        return;
    }
    let mut buffer = seq.copy_range(0, len);
    sort_range_onto(&mut buffer[..], 0, len, seq, order);
    seq.fill_range(0, &buffer);
}

pub fn sort_range<S>(
    seq: &mut S,
    order: &SortOrder<'_, S::Item>,
    left: usize,
    right: usize,
) -> Result<(), InvalidRangeError>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let len = seq.len();
    check_range(left, right, len)?;
    if right - left < 2 {
        return Ok(());
    }
    let mut buffer = seq.copy_range(0, len);
    sort_range_onto(&mut buffer[..], left, right, seq, order);
    seq.fill_range(left, &buffer[left..right]);
    Ok(())
}

/// Sorts `a[left..right)`, using `b` as the other half of the ping-pong pair.
/// Both sequences must hold the same elements in `[left, right)` on entry;
/// the sorted result lands in `a`.
fn sort_range_onto<A, B>(
    a: &mut A,
    left: usize,
    right: usize,
    b: &mut B,
    order: &SortOrder<'_, A::Item>,
) where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: Ord,
{
    if right - left < 2 {
        return;
    }
    let third = (right - left) / 3;
    let mid1 = left + third;
    let mid2 = left + 2 * third + 1;

    // Roles swap on the way down: the recursive calls leave each third
    // sorted in `b`, and the merge brings them back into `a`.
    sort_range_onto(b, left, mid1, a, order);
    sort_range_onto(b, mid1, mid2, a, order);
    sort_range_onto(b, mid2, right, a, order);
    merge_three(b, left, mid1, mid2, right, a, order);
}

/// One three-way merge pass: reads the sorted runs `src[left..mid1)`,
/// `src[mid1..mid2)`, `src[mid2..right)` and writes the merged range into
/// `dst[left..right)`. Ties go to the leftmost run, which is what makes the
/// overall sort stable.
fn merge_three<A, B>(
    src: &A,
    left: usize,
    mid1: usize,
    mid2: usize,
    right: usize,
    dst: &mut B,
    order: &SortOrder<'_, A::Item>,
) where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: Ord,
{
    let mut i = left;
    let mut j = mid1;
    let mut k = mid2;
    let mut out = left;

    while i < mid1 && j < mid2 && k < right {
        if order.precedes_or_equal(&src.get(i), &src.get(j)) {
            if order.precedes_or_equal(&src.get(i), &src.get(k)) {
                dst.set(out, src.get(i));
                i += 1;
            } else {
                dst.set(out, src.get(k));
                k += 1;
            }
        } else if order.precedes_or_equal(&src.get(j), &src.get(k)) {
            dst.set(out, src.get(j));
            j += 1;
        } else {
            dst.set(out, src.get(k));
            k += 1;
        }
        out += 1;
    }

    while i < mid1 && j < mid2 {
        if order.precedes_or_equal(&src.get(i), &src.get(j)) {
            dst.set(out, src.get(i));
            i += 1;
        } else {
            dst.set(out, src.get(j));
            j += 1;
        }
        out += 1;
    }
    while j < mid2 && k < right {
        if order.precedes_or_equal(&src.get(j), &src.get(k)) {
            dst.set(out, src.get(j));
            j += 1;
        } else {
            dst.set(out, src.get(k));
            k += 1;
        }
        out += 1;
    }
    while i < mid1 && k < right {
        if order.precedes_or_equal(&src.get(i), &src.get(k)) {
            dst.set(out, src.get(i));
            i += 1;
        } else {
            dst.set(out, src.get(k));
            k += 1;
        }
        out += 1;
    }

    while i < mid1 {
        dst.set(out, src.get(i));
        i += 1;
        out += 1;
    }
    while j < mid2 {
        dst.set(out, src.get(j));
        j += 1;
        out += 1;
    }
    while k < right {
        dst.set(out, src.get(k));
        k += 1;
        out += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::merge_three;
    use crate::order::SortOrder;

    #[test]
    fn merges_three_sorted_runs() {
        let src = vec![1_i32, 4, 7, 2, 5, 8, 3, 6, 9];
        let mut dst = vec![0_i32; 9];
        merge_three(&src[..], 0, 3, 6, 9, &mut dst[..], &SortOrder::Ascending);
        assert_eq!(dst, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn ties_prefer_the_leftmost_run() {
        // Runs: [(1, 'a')], [(1, 'b')], [(1, 'c')] under a key-only predicate.
        let by_key = |a: &(i32, char), b: &(i32, char)| a.0 < b.0;
        let src = vec![(1, 'a'), (1, 'b'), (1, 'c')];
        let mut dst = vec![(0, ' '); 3];
        merge_three(&src[..], 0, 1, 2, 3, &mut dst[..], &SortOrder::By(&by_key));
        assert_eq!(dst, vec![(1, 'a'), (1, 'b'), (1, 'c')]);
    }

    #[test]
    fn handles_an_empty_third_run() {
        let src = vec![2_i32, 9, 1, 5];
        let mut dst = vec![0_i32; 4];
        merge_three(&src[..], 0, 2, 4, 4, &mut dst[..], &SortOrder::Ascending);
        assert_eq!(dst, vec![1, 2, 5, 9]);
    }
}
