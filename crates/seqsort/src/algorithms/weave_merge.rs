//! Merge sort that snapshots both halves of a range into fresh temporaries at
//! every level, sorts the temporaries, and weaves them back into the original
//! range. Allocation-heavy by design; the weave itself is a plain two-cursor
//! pass because the sources are independent copies.

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
    weave_sort(seq, 0, len, order);
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
    check_range(left, right, seq.len())?;
    weave_sort(seq, left, right, order);
    Ok(())
}

fn weave_sort<S>(seq: &mut S, left: usize, right: usize, order: &SortOrder<'_, S::Item>)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    if right - left <= 1 {
        return;
    }
    let mid = left + (right - left) / 2;
    let mut left_run = seq.copy_range(left, mid);
    let mut right_run = seq.copy_range(mid, right);

    let left_len = left_run.len();
    let right_len = right_run.len();
    weave_sort(&mut left_run[..], 0, left_len, order);
    weave_sort(&mut right_run[..], 0, right_len, order);

    weave(seq, left, &left_run, &right_run, order);
}

/// Writes the merge of the two sorted runs into `seq` starting at `at`.
/// Equal heads come from the left run first, which keeps the sort stable.
fn weave<S>(
    seq: &mut S,
    at: usize,
    left_run: &[S::Item],
    right_run: &[S::Item],
    order: &SortOrder<'_, S::Item>,
) where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let mut i = 0;
    let mut j = 0;
    let mut out = at;

    while i < left_run.len() && j < right_run.len() {
        if order.precedes_or_equal(&left_run[i], &right_run[j]) {
            seq.set(out, left_run[i].clone());
            i += 1;
        } else {
            seq.set(out, right_run[j].clone());
            j += 1;
        }
        out += 1;
    }
    while i < left_run.len() {
        seq.set(out, left_run[i].clone());
        i += 1;
        out += 1;
    }
    while j < right_run.len() {
        seq.set(out, right_run[j].clone());
        j += 1;
        out += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::weave;
    use crate::order::SortOrder;

    #[test]
    fn weave_writes_at_the_given_offset() {
        let mut data = vec![0_i32; 8];
        data[0] = -1;
        data[7] = -1;
        weave(
            &mut data[..],
            1,
            &[1, 4, 6],
            &[2, 3, 5],
            &SortOrder::Ascending,
        );
        assert_eq!(data, vec![-1, 1, 2, 3, 4, 5, 6, -1]);
    }
}
