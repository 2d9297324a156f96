use super::gallop::{gallop_left_by, gallop_right_by};

/// Merge state carried across all merges of one sort call.
///
/// `min_gallop` is the adaptive threshold: it drops while galloping keeps paying off and rises
/// each time the merge falls back to one-at-a-time mode.
#[derive(Clone, Copy, Debug)]
pub struct MergeState {
    pub min_gallop: usize,
    base_gallop: usize,
    pub gallop_rounds: usize,
}

impl MergeState {
    pub fn new(min_gallop: usize) -> Self {
        Self {
            min_gallop,
            base_gallop: min_gallop,
            gallop_rounds: 0,
        }
    }
}

/// Merges the sorted runs `region[..mid]` and `region[mid..]` in place.
///
/// `scratch` must hold at least `min(mid, region.len() - mid)` elements. Equal elements keep
/// their order: those from the left run end up first.
pub fn merge<T, F>(
    region: &mut [T],
    mid: usize,
    scratch: &mut [T],
    state: &mut MergeState,
    is_less: &mut F,
) where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = region.len();
    debug_assert!(mid > 0 && mid < len);

    // Elements of the left run not greater than the right run's head are already in place.
    let skip = gallop_right_by(&region[mid], &region[..mid], 0, is_less);
    if skip == mid {
        return;
    }
    // Elements of the right run not less than the left run's last element are in place too.
    let keep = gallop_left_by(&region[mid - 1], &region[mid..], len - mid - 1, is_less);
    if keep == 0 {
        return;
    }

    let region = &mut region[skip..mid + keep];
    let mid = mid - skip;
    if mid <= keep {
        merge_lo(region, mid, scratch, state, is_less);
    } else {
        merge_hi(region, mid, scratch, state, is_less);
    }
}

/// Forward merge; the left run is the shorter one and goes to `scratch`.
fn merge_lo<T, F>(
    region: &mut [T],
    len_a: usize,
    scratch: &mut [T],
    state: &mut MergeState,
    is_less: &mut F,
) where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = region.len();
    let buf = &mut scratch[..len_a];
    buf.copy_from_slice(&region[..len_a]);
    let buf = &*buf;

    let mut a = 0usize;
    let mut b = len_a;
    let mut dest = 0usize;
    let mut min_gallop = state.min_gallop;

    'outer: while a < len_a && b < len {
        let mut count_a = 0usize;
        let mut count_b = 0usize;

        loop {
            if is_less(&region[b], &buf[a]) {
                region[dest] = region[b];
                dest += 1;
                b += 1;
                count_b += 1;
                count_a = 0;
                if b == len {
                    break 'outer;
                }
            } else {
                region[dest] = buf[a];
                dest += 1;
                a += 1;
                count_a += 1;
                count_b = 0;
                if a == len_a {
                    break 'outer;
                }
            }
            if count_a.max(count_b) >= min_gallop {
                break;
            }
        }

        state.gallop_rounds += 1;
        min_gallop += 1;
        loop {
            min_gallop -= (min_gallop > 1) as usize;

            count_a = gallop_right_by(&region[b], &buf[a..], 0, is_less);
            if count_a > 0 {
                region[dest..dest + count_a].copy_from_slice(&buf[a..a + count_a]);
                dest += count_a;
                a += count_a;
                if a == len_a {
                    break 'outer;
                }
            }
            region[dest] = region[b];
            dest += 1;
            b += 1;
            if b == len {
                break 'outer;
            }

            count_b = gallop_left_by(&buf[a], &region[b..], 0, is_less);
            if count_b > 0 {
                region.copy_within(b..b + count_b, dest);
                dest += count_b;
                b += count_b;
                if b == len {
                    break 'outer;
                }
            }
            region[dest] = buf[a];
            dest += 1;
            a += 1;
            if a == len_a {
                break 'outer;
            }

            if count_a < state.base_gallop && count_b < state.base_gallop {
                break;
            }
        }
        min_gallop = min_gallop.saturating_add(1);
    }

    // Leftovers of the right run are already in place.
    if a < len_a {
        debug_assert_eq!(b, len);
        region[dest..].copy_from_slice(&buf[a..]);
    }
    state.min_gallop = min_gallop.max(1);
}

/// Backward merge; the right run is the shorter one and goes to `scratch`.
fn merge_hi<T, F>(
    region: &mut [T],
    len_a: usize,
    scratch: &mut [T],
    state: &mut MergeState,
    is_less: &mut F,
) where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = region.len();
    let len_b = len - len_a;
    let buf = &mut scratch[..len_b];
    buf.copy_from_slice(&region[len_a..]);
    let buf = &*buf;

    // Remaining runs are `region[..a]` and `buf[..b]`; output fills `region[dest..]`.
    let mut a = len_a;
    let mut b = len_b;
    let mut dest = len;
    let mut min_gallop = state.min_gallop;

    'outer: while a > 0 && b > 0 {
        let mut count_a = 0usize;
        let mut count_b = 0usize;

        loop {
            if is_less(&buf[b - 1], &region[a - 1]) {
                dest -= 1;
                a -= 1;
                region[dest] = region[a];
                count_a += 1;
                count_b = 0;
                if a == 0 {
                    break 'outer;
                }
            } else {
                dest -= 1;
                b -= 1;
                region[dest] = buf[b];
                count_b += 1;
                count_a = 0;
                if b == 0 {
                    break 'outer;
                }
            }
            if count_a.max(count_b) >= min_gallop {
                break;
            }
        }

        state.gallop_rounds += 1;
        min_gallop += 1;
        loop {
            min_gallop -= (min_gallop > 1) as usize;

            count_a = a - gallop_right_by(&buf[b - 1], &region[..a], a - 1, is_less);
            if count_a > 0 {
                dest -= count_a;
                a -= count_a;
                region.copy_within(a..a + count_a, dest);
                if a == 0 {
                    break 'outer;
                }
            }
            dest -= 1;
            b -= 1;
            region[dest] = buf[b];
            if b == 0 {
                break 'outer;
            }

            count_b = b - gallop_left_by(&region[a - 1], &buf[..b], b - 1, is_less);
            if count_b > 0 {
                dest -= count_b;
                b -= count_b;
                region[dest..dest + count_b].copy_from_slice(&buf[b..b + count_b]);
                if b == 0 {
                    break 'outer;
                }
            }
            dest -= 1;
            a -= 1;
            region[dest] = region[a];
            if a == 0 {
                break 'outer;
            }

            if count_a < state.base_gallop && count_b < state.base_gallop {
                break;
            }
        }
        min_gallop = min_gallop.saturating_add(1);
    }

    // Leftovers of the left run are already in place.
    if b > 0 {
        debug_assert_eq!(a, 0);
        region[..dest].copy_from_slice(&buf[..b]);
    }
    state.min_gallop = min_gallop.max(1);
}
