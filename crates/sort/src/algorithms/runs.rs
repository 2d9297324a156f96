use super::common;

/// Minimum run length for an input of `n` elements.
///
/// Halves `n` until it drops below `min_merge`, remembering whether any set bit was shifted out.
/// For `n >= min_merge` the result lies in `[min_merge / 2, min_merge]` and `n / result` is a
/// power of two or slightly below one, which keeps the final merges balanced. Shorter inputs are
/// returned unchanged so they form a single run.
pub fn min_run_length(mut n: usize, min_merge: usize) -> usize {
    let mut r = 0usize;
    while n >= min_merge {
        r |= n & 1;
        n >>= 1;
    }
    n + r
}

/// Length of the natural run starting at `start`.
///
/// A run is either non-decreasing or strictly decreasing. Strictly decreasing runs are reversed in
/// place, so the returned prefix of `data[start..]` is always non-decreasing afterwards. Requiring
/// strictness keeps the reversal stable.
pub fn find_run_length<T, F>(data: &mut [T], start: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let n = data.len();
    debug_assert!(start < n);

    let mut end = start + 1;
    if end == n {
        return 1;
    }

    if is_less(&data[end], &data[start]) {
        while end < n && is_less(&data[end], &data[end - 1]) {
            end += 1;
        }
        data[start..end].reverse();
    } else {
        while end < n && !is_less(&data[end], &data[end - 1]) {
            end += 1;
        }
    }

    end - start
}

/// Widens a natural run of `natural_len` elements at `start` to `min_run` elements (or up to the
/// end of `data`) and insertion sorts the widened range. Returns the exclusive end of the run.
pub fn extend_run<T, F>(
    data: &mut [T],
    start: usize,
    natural_len: usize,
    min_run: usize,
    is_less: &mut F,
) -> usize
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let n = data.len();
    if natural_len >= min_run {
        return start + natural_len;
    }

    let end = (start + min_run).min(n);
    common::insertion_sort_range(data, start, end - 1, is_less);
    end
}
