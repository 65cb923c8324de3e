//! Step index bookkeeping.

/// Current position within a timeline of `count` steps.
///
/// The index always stays in `0..count`; moving past either end is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepNavigator {
    current: usize,
    count: usize,
}

impl StepNavigator {
    /// Starts at the first step. `count` must be at least one; the session
    /// only builds navigators from non-empty timelines.
    pub fn new(count: usize) -> Self {
        debug_assert!(count > 0, "navigator needs at least one step");
        Self {
            current: 0,
            count: count.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Moves forward. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.count {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Moves back. Returns whether the index changed.
    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Last step; completing the session is only offered here.
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.count
    }

    /// Percentage of the timeline reached, counting the current step.
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.count as f64 * 100.0
    }
}
