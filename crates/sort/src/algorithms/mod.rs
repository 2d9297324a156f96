pub(crate) mod common;
pub(crate) mod gallop;
pub(crate) mod merge;
pub(crate) mod run_stack;
pub(crate) mod runs;
pub(crate) mod timsort;
