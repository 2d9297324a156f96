//! Exponential-then-binary search over a sorted slice, starting from a hint.
//!
//! Both searches probe outward from `hint` at offsets `1, 3, 7, 15, ...` until the insertion
//! point is bracketed, then binary search the bracket. When the hint is close to the answer this
//! costs `O(log d)` comparisons, `d` being the distance between hint and answer.

/// Leftmost insertion point of `key` in sorted `slice`: the number of elements strictly less than
/// `key`.
///
/// `hint` must be a valid index into `slice` unless `slice` is empty.
pub fn gallop_left<T: Ord>(key: &T, slice: &[T], hint: usize) -> usize {
    gallop_left_by(key, slice, hint, &mut |a: &T, b: &T| a < b)
}

/// Rightmost insertion point of `key` in sorted `slice`: the number of elements less than or
/// equal to `key`.
///
/// `hint` must be a valid index into `slice` unless `slice` is empty.
pub fn gallop_right<T: Ord>(key: &T, slice: &[T], hint: usize) -> usize {
    gallop_right_by(key, slice, hint, &mut |a: &T, b: &T| a < b)
}

pub(crate) fn gallop_left_by<T, F>(key: &T, slice: &[T], hint: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    gallop_by(slice, hint, |x| is_less(x, key))
}

pub(crate) fn gallop_right_by<T, F>(key: &T, slice: &[T], hint: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    gallop_by(slice, hint, |x| !is_less(key, x))
}

/// Length of the prefix of `slice` on which `pred` holds. `pred` must be true on a prefix and
/// false on the rest.
fn gallop_by<T, P>(slice: &[T], hint: usize, mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let len = slice.len();
    if len == 0 {
        return 0;
    }
    debug_assert!(hint < len);

    let mut last_offset = 0usize;
    let mut offset = 1usize;

    // The answer is bracketed by `lo..=hi` after probing.
    let (lo, hi) = if pred(&slice[hint]) {
        let max_offset = len - hint;
        while offset < max_offset && pred(&slice[hint + offset]) {
            last_offset = offset;
            offset = offset.saturating_mul(2).saturating_add(1);
        }
        offset = offset.min(max_offset);
        (hint + last_offset + 1, hint + offset)
    } else {
        let max_offset = hint + 1;
        while offset < max_offset && !pred(&slice[hint - offset]) {
            last_offset = offset;
            offset = offset.saturating_mul(2).saturating_add(1);
        }
        offset = offset.min(max_offset);
        (hint + 1 - offset, hint - last_offset)
    };

    debug_assert!(lo <= hi && hi <= len);
    lo + slice[lo..hi].partition_point(pred)
}
