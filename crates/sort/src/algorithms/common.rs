/// Stable insertion sort of the inclusive range `data[left..=right]`.
#[inline]
pub fn insertion_sort_range<T, F>(data: &mut [T], left: usize, right: usize, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(left <= right && right < data.len());

    for i in (left + 1)..=right {
        let key = data[i];
        let mut j = i;
        while j > left && is_less(&key, &data[j - 1]) {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

#[inline]
pub fn is_sorted_by<T, F>(data: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    data.windows(2).all(|w| !is_less(&w[1], &w[0]))
}
