pub mod bubble;
pub mod dual_pivot_quick;
pub mod insertion;
pub mod merge_in_place;
pub mod selection;
pub mod ternary_heap;
pub mod ternary_merge;
pub mod weave_merge;
