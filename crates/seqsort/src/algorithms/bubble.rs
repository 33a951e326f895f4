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
    bubble(seq, 0, len, order);
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
    bubble(seq, left, right, order);
    Ok(())
}

fn bubble<S>(seq: &mut S, left: usize, right: usize, order: &SortOrder<'_, S::Item>)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let n = right - left;
    if n < 2 {
        return;
    }
    for pass in 0..(n - 1) {
        for index in left..(right - 1 - pass) {
            if order.precedes(&seq.get(index + 1), &seq.get(index)) {
                seq.swap(index, index + 1);
            }
        }
    }
}
