use crate::SortError;

/// A pending sorted run `data[start..start + len]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

impl Run {
    #[inline]
    pub fn end(self) -> usize {
        self.start + self.len
    }
}

/// Runs that are sorted but not merged yet, bottom first. Runs are adjacent and increase in start
/// index from bottom to top.
///
/// After every collapse, for any three topmost runs `A, B, C` (C on top) the stack satisfies
/// `len(A) > len(B) + len(C)` and `len(B) > len(C)`, so the depth grows only logarithmically in
/// the input length.
#[derive(Clone, Debug)]
pub struct RunStack {
    runs: Vec<Run>,
    capacity: usize,
}

impl RunStack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            runs: Vec::with_capacity(capacity.min(128)),
            capacity,
        }
    }

    /// Drops all pending runs and sets a new capacity; keeps the allocation.
    pub fn reset(&mut self, capacity: usize) {
        self.runs.clear();
        self.capacity = capacity;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Run] {
        &self.runs
    }

    /// The run `offset` places below the top; `peek(0)` is the top.
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<Run> {
        let n = self.runs.len();
        if offset < n {
            Some(self.runs[n - 1 - offset])
        } else {
            None
        }
    }

    pub fn push(&mut self, run: Run) -> Result<(), SortError> {
        if self.runs.len() >= self.capacity {
            return Err(SortError::RunStackOverflow {
                capacity: self.capacity,
            });
        }
        debug_assert!(self.peek(0).is_none_or(|top| top.end() == run.start));
        self.runs.push(run);
        Ok(())
    }

    /// Index `i` such that `runs[i]` and `runs[i + 1]` must be merged to restore the stack
    /// invariant, or `None` when it already holds.
    ///
    /// The fourth run from the top is checked as well; checking only three lets the invariant
    /// break further down the stack.
    pub fn collapse_target(&self) -> Option<usize> {
        let runs = &self.runs;
        let n = runs.len();
        if n < 2 {
            return None;
        }

        let c = runs[n - 1].len;
        let b = runs[n - 2].len;
        let a_broken = n >= 3 && runs[n - 3].len <= b + c;
        let below_broken = n >= 4 && runs[n - 4].len <= runs[n - 3].len + b;

        if a_broken || below_broken {
            if n >= 3 && runs[n - 3].len < c {
                Some(n - 3)
            } else {
                Some(n - 2)
            }
        } else if b <= c {
            Some(n - 2)
        } else {
            None
        }
    }

    /// Next pair to merge once no more runs will be pushed, or `None` when at most one run is
    /// left.
    pub fn force_collapse_target(&self) -> Option<usize> {
        let runs = &self.runs;
        let n = runs.len();
        if n < 2 {
            return None;
        }

        if n >= 3 && runs[n - 3].len < runs[n - 1].len {
            Some(n - 3)
        } else {
            Some(n - 2)
        }
    }

    /// Replaces `runs[idx]` and `runs[idx + 1]` by their union and returns the two runs that were
    /// combined. The data itself is merged by the caller.
    pub fn merge_at(&mut self, idx: usize) -> (Run, Run) {
        let n = self.runs.len();
        debug_assert!(n >= 2 && (idx == n - 2 || idx == n - 3));

        let left = self.runs[idx];
        let right = self.runs[idx + 1];
        debug_assert_eq!(left.end(), right.start);

        self.runs[idx].len += right.len;
        self.runs.remove(idx + 1);
        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(lens: &[usize]) -> RunStack {
        let mut stack = RunStack::with_capacity(85);
        let mut start = 0;
        for &len in lens {
            stack.push(Run { start, len }).unwrap();
            start += len;
        }
        stack
    }

    fn lens(stack: &RunStack) -> Vec<usize> {
        stack.as_slice().iter().map(|r| r.len).collect()
    }

    #[test]
    fn push_beyond_capacity_fails() {
        let mut stack = RunStack::with_capacity(2);
        stack.push(Run { start: 0, len: 4 }).unwrap();
        stack.push(Run { start: 4, len: 2 }).unwrap();
        assert_eq!(
            stack.push(Run { start: 6, len: 1 }),
            Err(SortError::RunStackOverflow { capacity: 2 })
        );
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn peek_counts_from_the_top() {
        let stack = stack_of(&[8, 4, 2]);
        assert_eq!(stack.peek(0), Some(Run { start: 12, len: 2 }));
        assert_eq!(stack.peek(2), Some(Run { start: 0, len: 8 }));
        assert_eq!(stack.peek(3), None);
    }

    #[test]
    fn balanced_stack_needs_no_merge() {
        assert_eq!(stack_of(&[]).collapse_target(), None);
        assert_eq!(stack_of(&[5]).collapse_target(), None);
        assert_eq!(stack_of(&[5, 4]).collapse_target(), None);
        assert_eq!(stack_of(&[20, 9, 4]).collapse_target(), None);
        assert_eq!(stack_of(&[100, 20, 9, 4]).collapse_target(), None);
    }

    #[test]
    fn top_two_merge_when_top_is_not_shorter() {
        assert_eq!(stack_of(&[5, 5]).collapse_target(), Some(0));
        assert_eq!(stack_of(&[30, 4, 9]).collapse_target(), Some(1));
    }

    #[test]
    fn three_run_violation_merges_the_smaller_pair() {
        // len(A) <= len(B) + len(C), C is the longer neighbour of B: merge B with C.
        assert_eq!(stack_of(&[10, 6, 5]).collapse_target(), Some(1));
        // A shorter than C: merge A with B.
        assert_eq!(stack_of(&[6, 5, 8]).collapse_target(), Some(0));
    }

    #[test]
    fn four_run_violation_is_detected() {
        // Top three are fine, but runs[0] <= runs[1] + runs[2].
        assert_eq!(stack_of(&[30, 20, 11, 8]).collapse_target(), Some(2));
    }

    #[test]
    fn force_collapse_prefers_merging_downward() {
        assert_eq!(stack_of(&[1]).force_collapse_target(), None);
        assert_eq!(stack_of(&[100, 20, 5]).force_collapse_target(), Some(1));
        assert_eq!(stack_of(&[10, 20, 30]).force_collapse_target(), Some(0));
    }

    #[test]
    fn merge_at_shifts_higher_runs_down() {
        let mut stack = stack_of(&[6, 5, 8]);
        let (left, right) = stack.merge_at(0);
        assert_eq!(left, Run { start: 0, len: 6 });
        assert_eq!(right, Run { start: 6, len: 5 });
        assert_eq!(lens(&stack), [11, 8]);
        assert_eq!(stack.peek(0), Some(Run { start: 11, len: 8 }));
    }

    #[test]
    fn collapsing_keeps_the_invariant() {
        let mut stack = RunStack::with_capacity(85);
        let mut start = 0;
        for len in [40, 33, 33, 64, 33, 40, 33, 500, 33, 33, 33, 33, 1, 33] {
            stack.push(Run { start, len }).unwrap();
            start += len;
            while let Some(idx) = stack.collapse_target() {
                stack.merge_at(idx);
            }
            let l = lens(&stack);
            for w in l.windows(2) {
                assert!(w[0] > w[1], "{l:?}");
            }
            for w in l.windows(3) {
                assert!(w[0] > w[1] + w[2], "{l:?}");
            }
        }
        while let Some(idx) = stack.force_collapse_target() {
            stack.merge_at(idx);
        }
        assert_eq!(stack.as_slice(), [Run { start: 0, len: start }]);
    }
}
