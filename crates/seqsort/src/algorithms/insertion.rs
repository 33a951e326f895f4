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
    insertion(seq, 0, len, order);
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
    insertion(seq, left, right, order);
    Ok(())
}

fn insertion<S>(seq: &mut S, left: usize, right: usize, order: &SortOrder<'_, S::Item>)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    if right - left < 2 {
        return;
    }
    for index in (left + 1)..right {
        let value = seq.get(index);
        let mut slot = index;
        // Strict comparison: equal elements never hop over each other.
        while slot > left && order.precedes(&value, &seq.get(slot - 1)) {
            let previous = seq.get(slot - 1);
            seq.set(slot, previous);
            slot -= 1;
        }
        seq.set(slot, value);
    }
}
