mod algorithms;
mod error;

use std::cmp::Ordering;

use algorithms::run_stack::RunStack;

pub use algorithms::gallop::{gallop_left, gallop_right};
pub use algorithms::runs::min_run_length;
pub use error::SortError;

/// Tuning knobs of the sort.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimsortParams {
    /// Inputs shorter than this form a single run; longer ones use runs of
    /// `min_merge / 2..=min_merge` elements.
    pub min_merge: usize,
    /// Consecutive wins of one side before a merge switches to galloping.
    pub min_gallop: usize,
    /// Capacity of the pending-run stack.
    pub max_pending_runs: usize,
}

pub const TUNED_PARAMS: TimsortParams = TimsortParams {
    min_merge: 64,
    min_gallop: 7,
    // Enough for any slice length that fits in `usize` while the stack invariant holds.
    max_pending_runs: 85,
};

impl Default for TimsortParams {
    fn default() -> Self {
        TUNED_PARAMS
    }
}

impl TimsortParams {
    pub fn validate(&self) -> Result<(), SortError> {
        if self.min_merge < 2 {
            return Err(SortError::InvalidParams("min_merge must be at least 2"));
        }
        if self.min_gallop == 0 {
            return Err(SortError::InvalidParams("min_gallop must be at least 1"));
        }
        if self.max_pending_runs == 0 {
            return Err(SortError::InvalidParams(
                "max_pending_runs must be at least 1",
            ));
        }
        Ok(())
    }

    /// Same parameters with galloping switched off: every merge compares element by element.
    pub const fn without_galloping(self) -> Self {
        Self {
            min_gallop: usize::MAX,
            ..self
        }
    }
}

/// What one sort call did.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    pub len: usize,
    pub min_run: usize,
    /// Runs pushed onto the run stack.
    pub runs: usize,
    pub merges: usize,
    /// Times a merge switched into galloping mode.
    pub gallop_rounds: usize,
    pub max_stack_depth: usize,
}

/// Buffers reused across sort calls. Nothing is carried over between calls except capacity.
#[derive(Clone, Debug)]
pub struct SortContext<T> {
    scratch: Vec<T>,
    runs: RunStack,
    params: TimsortParams,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
            runs: RunStack::with_capacity(TUNED_PARAMS.max_pending_runs),
            params: TUNED_PARAMS,
        }
    }
}

impl<T> SortContext<T> {
    pub fn with_params(params: TimsortParams) -> Result<Self, SortError> {
        params.validate()?;
        Ok(Self {
            scratch: Vec::new(),
            runs: RunStack::with_capacity(params.max_pending_runs),
            params,
        })
    }

    pub fn params(&self) -> &TimsortParams {
        &self.params
    }
}

/// Scratch elements needed to sort `len` elements: merges only ever buffer the shorter run.
#[inline]
pub fn required_scratch_len(len: usize) -> usize {
    len / 2
}

#[inline]
fn ensure_scratch<T: Copy>(scratch: &mut Vec<T>, len: usize, fill: T) -> &mut [T] {
    if scratch.len() < len {
        scratch.resize(len, fill);
    }
    &mut scratch[..len]
}

/// Sorts `data` ascending. The sort is stable.
pub fn sort<T: Ord + Copy>(data: &mut [T]) -> Result<SortStats, SortError> {
    sort_by(data, T::cmp)
}

pub fn sort_by<T, F>(data: &mut [T], compare: F) -> Result<SortStats, SortError>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut ctx = SortContext::default();
    sort_by_with_ctx(data, &mut ctx, compare)
}

pub fn sort_by_key<T, K, F>(data: &mut [T], mut key: F) -> Result<SortStats, SortError>
where
    T: Copy,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by(data, |a, b| key(a).cmp(&key(b)))
}

pub fn sort_with_ctx<T: Ord + Copy>(
    data: &mut [T],
    ctx: &mut SortContext<T>,
) -> Result<SortStats, SortError> {
    sort_by_with_ctx(data, ctx, T::cmp)
}

pub fn sort_by_with_ctx<T, F>(
    data: &mut [T],
    ctx: &mut SortContext<T>,
    mut compare: F,
) -> Result<SortStats, SortError>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let SortContext {
        scratch,
        runs,
        params,
    } = ctx;
    let required = required_scratch_len(data.len());
    let scratch = match data.first() {
        Some(&fill) => ensure_scratch(scratch, required, fill),
        None => &mut scratch[..0],
    };

    algorithms::timsort::sort(data, scratch, runs, params, &mut |a, b| {
        compare(a, b) == Ordering::Less
    })
}

/// Sorts `data` using caller-provided scratch space of at least
/// [`required_scratch_len`]`(data.len())` elements. Nothing is allocated except the run stack.
pub fn sort_with_buffer<T: Ord + Copy>(
    data: &mut [T],
    scratch: &mut [T],
    params: &TimsortParams,
) -> Result<SortStats, SortError> {
    params.validate()?;
    let required = required_scratch_len(data.len());
    if scratch.len() < required {
        return Err(SortError::ScratchTooShort {
            required,
            actual: scratch.len(),
        });
    }

    let mut runs = RunStack::with_capacity(params.max_pending_runs);
    let scratch = &mut scratch[..required];
    algorithms::timsort::sort(data, scratch, &mut runs, params, &mut |a, b| a < b)
}
