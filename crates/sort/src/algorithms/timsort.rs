use log::{debug, trace};

use crate::{SortError, SortStats, TimsortParams};

use super::common;
use super::merge::{self, MergeState};
use super::run_stack::{Run, RunStack};
use super::runs::{extend_run, find_run_length, min_run_length};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    /// Detect, extend and push the next run.
    Scanning,
    /// Merge until the stack invariant holds again.
    Collapsing,
    /// Input exhausted; merge everything down to one run.
    ForceCollapsing,
    Done,
}

/// Sorts `data` in place. `scratch` must hold at least `data.len() / 2` elements and `runs` is
/// reset to `params.max_pending_runs` before use.
pub fn sort<T, F>(
    data: &mut [T],
    scratch: &mut [T],
    runs: &mut RunStack,
    params: &TimsortParams,
    is_less: &mut F,
) -> Result<SortStats, SortError>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let n = data.len();
    let mut stats = SortStats {
        len: n,
        ..SortStats::default()
    };
    if n < 2 {
        stats.runs = n;
        stats.min_run = n;
        return Ok(stats);
    }

    let min_run = min_run_length(n, params.min_merge);
    stats.min_run = min_run;
    runs.reset(params.max_pending_runs);
    let mut state = MergeState::new(params.min_gallop);

    let mut start = 0usize;
    let mut phase = Phase::Scanning;
    while phase != Phase::Done {
        phase = match phase {
            Phase::Scanning if start == n => Phase::ForceCollapsing,
            Phase::Scanning => {
                let natural = find_run_length(data, start, is_less);
                let end = extend_run(data, start, natural, min_run, is_less);
                runs.push(Run {
                    start,
                    len: end - start,
                })?;
                stats.runs += 1;
                stats.max_stack_depth = stats.max_stack_depth.max(runs.len());
                start = end;
                Phase::Collapsing
            }
            Phase::Collapsing => match runs.collapse_target() {
                Some(idx) => {
                    merge_runs(data, scratch, runs, idx, &mut state, is_less);
                    stats.merges += 1;
                    Phase::Collapsing
                }
                None => Phase::Scanning,
            },
            Phase::ForceCollapsing => match runs.force_collapse_target() {
                Some(idx) => {
                    merge_runs(data, scratch, runs, idx, &mut state, is_less);
                    stats.merges += 1;
                    Phase::ForceCollapsing
                }
                None => Phase::Done,
            },
            Phase::Done => Phase::Done,
        };
    }

    debug_assert_eq!(runs.as_slice(), [Run { start: 0, len: n }]);
    debug_assert!(common::is_sorted_by(data, is_less));

    stats.gallop_rounds = state.gallop_rounds;
    debug!(
        "timsort: n={} min_run={} runs={} merges={} gallop_rounds={} max_stack_depth={}",
        n, min_run, stats.runs, stats.merges, stats.gallop_rounds, stats.max_stack_depth
    );
    Ok(stats)
}

fn merge_runs<T, F>(
    data: &mut [T],
    scratch: &mut [T],
    runs: &mut RunStack,
    idx: usize,
    state: &mut MergeState,
    is_less: &mut F,
) where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let (left, right) = runs.merge_at(idx);
    trace!(
        "merge runs {}..{} and {}..{} (min_gallop={})",
        left.start,
        left.end(),
        right.start,
        right.end(),
        state.min_gallop
    );
    merge::merge(
        &mut data[left.start..right.end()],
        left.len,
        scratch,
        state,
        is_less,
    );
}
