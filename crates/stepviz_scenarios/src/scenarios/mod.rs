//! The instrumented algorithms behind the catalog. Each module pins its
//! own input data, so recording a scenario twice yields the same trace.

pub(crate) mod bfs;
pub(crate) mod binary_search;
pub(crate) mod bubble_sort;
pub(crate) mod n_queens;
pub(crate) mod sliding_window;
