//! In-memory sequence sorting with interchangeable algorithms, three ordering
//! modes (ascending, descending, caller predicate) and ranged operation, over
//! any container implementing the [`Sequence`] capability trait.

pub mod algorithms;

mod error;
mod order;
mod sequence;

pub use error::InvalidRangeError;
pub use order::SortOrder;
pub use sequence::Sequence;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    DualPivotQuick,
    TernaryMerge,
    MergeInPlace,
    WeaveMerge,
    TernaryHeap,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 8] = [
    SortAlgorithm::Bubble,
    SortAlgorithm::Selection,
    SortAlgorithm::Insertion,
    SortAlgorithm::DualPivotQuick,
    SortAlgorithm::TernaryMerge,
    SortAlgorithm::MergeInPlace,
    SortAlgorithm::WeaveMerge,
    SortAlgorithm::TernaryHeap,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::Bubble => "bubble",
        SortAlgorithm::Selection => "selection",
        SortAlgorithm::Insertion => "insertion",
        SortAlgorithm::DualPivotQuick => "dual_pivot_quick",
        SortAlgorithm::TernaryMerge => "ternary_merge",
        SortAlgorithm::MergeInPlace => "merge_in_place",
        SortAlgorithm::WeaveMerge => "weave_merge",
        SortAlgorithm::TernaryHeap => "ternary_heap",
    }
}

/// Whether the algorithm keeps equal elements in their original relative
/// order.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::Bubble
            | SortAlgorithm::Insertion
            | SortAlgorithm::TernaryMerge
            | SortAlgorithm::MergeInPlace
            | SortAlgorithm::WeaveMerge
    )
}

/// Sorts the whole sequence with the chosen algorithm and ordering mode.
pub fn sort<S>(algo: SortAlgorithm, seq: &mut S, order: &SortOrder<'_, S::Item>)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    match algo {
        SortAlgorithm::Bubble => algorithms::bubble::sort(seq, order),
        SortAlgorithm::Selection => algorithms::selection::sort(seq, order),
        SortAlgorithm::Insertion => algorithms::insertion::sort(seq, order),
        SortAlgorithm::DualPivotQuick => algorithms::dual_pivot_quick::sort(seq, order),
        SortAlgorithm::TernaryMerge => algorithms::ternary_merge::sort(seq, order),
        SortAlgorithm::MergeInPlace => algorithms::merge_in_place::sort(seq, order),
        SortAlgorithm::WeaveMerge => algorithms::weave_merge::sort(seq, order),
        SortAlgorithm::TernaryHeap => algorithms::ternary_heap::sort(seq, order),
    }
}

/// Sorts `seq[left..right)`; the rest of the sequence is left untouched.
pub fn sort_range<S>(
    algo: SortAlgorithm,
    seq: &mut S,
    order: &SortOrder<'_, S::Item>,
    left: usize,
    right: usize,
) -> Result<(), InvalidRangeError>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    match algo {
        SortAlgorithm::Bubble => algorithms::bubble::sort_range(seq, order, left, right),
        SortAlgorithm::Selection => algorithms::selection::sort_range(seq, order, left, right),
        SortAlgorithm::Insertion => algorithms::insertion::sort_range(seq, order, left, right),
        SortAlgorithm::DualPivotQuick => {
            algorithms::dual_pivot_quick::sort_range(seq, order, left, right)
        }
        SortAlgorithm::TernaryMerge => {
            algorithms::ternary_merge::sort_range(seq, order, left, right)
        }
        SortAlgorithm::MergeInPlace => {
            algorithms::merge_in_place::sort_range(seq, order, left, right)
        }
        SortAlgorithm::WeaveMerge => algorithms::weave_merge::sort_range(seq, order, left, right),
        SortAlgorithm::TernaryHeap => {
            algorithms::ternary_heap::sort_range(seq, order, left, right)
        }
    }
}
